use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Who the generated copy is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Audience {
    #[default]
    General,
    Youth,
    Educational,
    Decor,
    MeaningSeeking,
}

impl Audience {
    pub const ALL: [Self; 5] = [
        Self::General,
        Self::Youth,
        Self::Educational,
        Self::Decor,
        Self::MeaningSeeking,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Youth => "youth",
            Self::Educational => "educational",
            Self::Decor => "decor",
            Self::MeaningSeeking => "meaning-seeking",
        }
    }

    pub(crate) fn instruction(self) -> &'static str {
        match self {
            Self::General => "público geral, sem conhecimento prévio de história da arte",
            Self::Youth => "jovens de 16 a 24 anos, nativos das redes sociais",
            Self::Educational => "estudantes e professores em contexto de sala de aula",
            Self::Decor => "pessoas interessadas em decoração e design de interiores",
            Self::MeaningSeeking => "pessoas em busca de significado, reflexão e bem-estar",
        }
    }
}

/// The register of the generated copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    #[default]
    Didactic,
    Poetic,
    Curatorial,
    Minimalist,
}

impl Tone {
    pub const ALL: [Self; 4] = [Self::Didactic, Self::Poetic, Self::Curatorial, Self::Minimalist];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Didactic => "didactic",
            Self::Poetic => "poetic",
            Self::Curatorial => "curatorial",
            Self::Minimalist => "minimalist",
        }
    }

    pub(crate) fn instruction(self) -> &'static str {
        match self {
            Self::Didactic => "didático e acessível, explicando termos quando necessário",
            Self::Poetic => "emocional e poético, com imagens sensoriais",
            Self::Curatorial => "curatorial e técnico, com vocabulário de história da arte",
            Self::Minimalist => "minimalista, com frases curtas e diretas",
        }
    }
}

/// The (audience, tone) configuration of one generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub audience: Audience,
    pub tone: Tone,
}

impl GenerationOptions {
    pub fn new(audience: Audience, tone: Tone) -> Self {
        Self { audience, tone }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown option '{0}'")]
pub struct UnknownOption(pub String);

impl FromStr for Audience {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|audience| audience.as_str() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

impl FromStr for Tone {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tone| tone.as_str() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_general_and_didactic() {
        let options = GenerationOptions::default();
        assert_eq!(options.audience, Audience::General);
        assert_eq!(options.tone, Tone::Didactic);
    }

    #[test]
    fn parses_names_matching_serde() {
        for audience in Audience::ALL {
            let json = serde_json::to_value(audience).unwrap();
            assert_eq!(json, audience.as_str());
            assert_eq!(audience.as_str().parse::<Audience>(), Ok(audience));
        }
        for tone in Tone::ALL {
            let json = serde_json::to_value(tone).unwrap();
            assert_eq!(json, tone.as_str());
            assert_eq!(tone.as_str().parse::<Tone>(), Ok(tone));
        }
        assert_eq!(
            "loud".parse::<Tone>().unwrap_err().to_string(),
            "unknown option 'loud'"
        );
    }
}
