use serde::{Deserialize, Serialize};

/// Year sentinel for artworks without a parseable creation date.
pub const UNKNOWN_YEAR: &str = "Unknown";

/// A painting as listed in the catalog. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    /// Wikidata QID, e.g. `Q12418`.
    pub id: String,
    pub title: String,
    pub artist: String,
    /// Creation year, or [`UNKNOWN_YEAR`].
    pub year: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Artwork {
    /// Only artworks with a title and an image may be shown.
    pub fn is_displayable(&self) -> bool {
        !self.title.trim().is_empty() && !self.image.trim().is_empty()
    }
}

/// The fixed catalog shown when the knowledge graph yields nothing.
pub fn fallback_catalog() -> Vec<Artwork> {
    vec![
        Artwork {
            id: "Q12418".to_string(),
            title: "Mona Lisa".to_string(),
            artist: "Leonardo da Vinci".to_string(),
            year: "1503".to_string(),
            image: "https://upload.wikimedia.org/wikipedia/commons/e/ec/Mona_Lisa%2C_by_Leonardo_da_Vinci%2C_from_C2RMF_retouched.jpg".to_string(),
            movement: Some("Renascimento".to_string()),
            description: None,
        },
        Artwork {
            id: "Q29813".to_string(),
            title: "A Noite Estrelada".to_string(),
            artist: "Vincent van Gogh".to_string(),
            year: "1889".to_string(),
            image: "https://upload.wikimedia.org/wikipedia/commons/e/ea/Van_Gogh_-_Starry_Night_-_Google_Art_Project.jpg".to_string(),
            movement: Some("Pós-Impressionismo".to_string()),
            description: None,
        },
        Artwork {
            id: "Q499697".to_string(),
            title: "Moça com o Brinco de Pérola".to_string(),
            artist: "Johannes Vermeer".to_string(),
            year: "1665".to_string(),
            image: "https://upload.wikimedia.org/wikipedia/commons/0/0f/1665_Girl_with_a_Pearl_Earring.jpg".to_string(),
            movement: Some("Barroco".to_string()),
            description: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_catalog_is_displayable_and_fixed() {
        let catalog = fallback_catalog();
        let ids: Vec<_> = catalog.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["Q12418", "Q29813", "Q499697"]);
        assert!(catalog.iter().all(Artwork::is_displayable));
    }

    #[test]
    fn blank_image_is_not_displayable() {
        let mut artwork = fallback_catalog().remove(0);
        artwork.image = "  ".to_string();
        assert!(!artwork.is_displayable());
    }
}
