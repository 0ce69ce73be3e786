use serde::{Deserialize, Serialize};

/// Art-historical period used to narrow the catalog by creation year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Period {
    #[default]
    All,
    Renaissance,
    Baroque,
    Romanticism,
    Modern,
    Contemporary,
}

impl Period {
    pub const ALL: [Self; 6] = [
        Self::All,
        Self::Renaissance,
        Self::Baroque,
        Self::Romanticism,
        Self::Modern,
        Self::Contemporary,
    ];

    /// Inclusive creation-year bounds, `None` for [`Period::All`].
    pub fn year_range(self) -> Option<(i32, i32)> {
        match self {
            Self::All => None,
            Self::Renaissance => Some((1400, 1600)),
            Self::Baroque => Some((1600, 1750)),
            Self::Romanticism => Some((1750, 1850)),
            Self::Modern => Some((1850, 1945)),
            Self::Contemporary => Some((1945, 2025)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Todos os períodos",
            Self::Renaissance => "Renascimento",
            Self::Baroque => "Barroco",
            Self::Romanticism => "Romantismo",
            Self::Modern => "Moderno",
            Self::Contemporary => "Contemporâneo",
        }
    }
}

/// Continent-like grouping, matched through the painting's country of origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    #[default]
    All,
    Europe,
    Asia,
    Africa,
    NorthAmerica,
    SouthAmerica,
}

impl Region {
    pub const ALL: [Self; 6] = [
        Self::All,
        Self::Europe,
        Self::Asia,
        Self::Africa,
        Self::NorthAmerica,
        Self::SouthAmerica,
    ];

    /// Wikidata item of the continent, `None` for [`Region::All`].
    pub fn entity(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Europe => Some("Q46"),
            Self::Asia => Some("Q48"),
            Self::Africa => Some("Q15"),
            Self::NorthAmerica => Some("Q49"),
            Self::SouthAmerica => Some("Q18"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Todas as regiões",
            Self::Europe => "Europa",
            Self::Asia => "Ásia",
            Self::Africa => "África",
            Self::NorthAmerica => "América do Norte",
            Self::SouthAmerica => "América do Sul",
        }
    }
}

/// The catalog filter pair. Not persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FilterSelection {
    pub period: Period,
    pub region: Region,
}

impl FilterSelection {
    pub fn new(period: Period, region: Region) -> Self {
        Self { period, region }
    }

    /// Every supported (period, region) pair.
    pub fn all_pairs() -> impl Iterator<Item = Self> {
        Period::ALL
            .into_iter()
            .flat_map(|period| Region::ALL.into_iter().map(move |region| Self::new(period, region)))
    }
}
