use super::{
    content::{GenerationResult, Platform, PALETTE_SIZE},
    options::GenerationOptions,
};
use crate::artwork::Artwork;
use arte_connectors::JSONSchema;

pub(crate) const SYSTEM_PROMPT: &str = "Você é um Curador de Arte Sênior e Estrategista Digital \
     para o projeto \"Arte Explicada\". Responda sempre em português do Brasil e apenas com o \
     JSON solicitado.";

/// The instruction embedding the artwork's identity and the configuration.
pub fn build_prompt(artwork: &Artwork, options: GenerationOptions) -> String {
    let mut prompt = String::new();

    let identity = match &artwork.movement {
        Some(movement) => format!("{}, {movement}", artwork.year),
        None => artwork.year.clone(),
    };
    prompt.push_str(&format!(
        "Analise a obra \"{}\" de {} ({identity}).\n",
        artwork.title, artwork.artist
    ));
    if let Some(description) = artwork.description.as_deref().filter(|d| !d.trim().is_empty()) {
        prompt.push_str(&format!("Descrição de referência: {description}\n"));
    }
    prompt.push_str(&format!("Público-alvo: {}.\n", options.audience.instruction()));
    prompt.push_str(&format!("Tom de voz: {}.\n", options.tone.instruction()));

    let platforms: Vec<&str> = Platform::ALL.iter().map(|p| p.key()).collect();
    prompt.push_str(&format!(
        "\nGere um retorno JSON estrito com os seguintes campos:\n\
         1. historicalContext: Um resumo breve e envolvente do contexto histórico (máx. 40 palavras).\n\
         2. emotionalMeaning: A interpretação emocional e simbólica da obra. O que ela nos faz sentir? (máx. 40 palavras).\n\
         3. curiosity: Um fato curioso e pouco conhecido sobre a obra.\n\
         4. modernConnection: Como essa obra se conecta com os dilemas ou a vida moderna hoje.\n\
         5. suggestedPalette: Uma lista de exatamente {PALETTE_SIZE} códigos hexadecimais de cores (#RRGGBB) que combinam com a obra para decoração.\n\
         6. social: Um objeto com as chaves {}, cada uma com hook (frase de abertura), caption (legenda no método AIDA, com emojis), hashtags (lista) e callToAction.\n",
        platforms.join(", ")
    ));

    prompt
}

/// The authoritative response contract, derived from
/// [`super::GenerationResult`] so the two cannot drift apart.
pub fn response_schema() -> JSONSchema {
    let mut schema: JSONSchema = schemars::schema_for!(GenerationResult).into();
    if let Some(object) = schema.as_object_mut() {
        object.remove("$schema");
    }
    schema
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        artwork::fallback_catalog,
        generator::{Audience, Tone},
    };

    #[test]
    fn prompt_embeds_identity_and_configuration() {
        let artwork = fallback_catalog().remove(0);
        let prompt = build_prompt(
            &artwork,
            GenerationOptions::new(Audience::Decor, Tone::Minimalist),
        );

        assert!(prompt.contains("\"Mona Lisa\" de Leonardo da Vinci (1503, Renascimento)"));
        assert!(prompt.contains(Audience::Decor.instruction()));
        assert!(prompt.contains(Tone::Minimalist.instruction()));
        assert!(prompt.contains("instagram, tiktok, pinterest"));
        assert!(!prompt.contains("Descrição de referência"));
    }

    #[test]
    fn prompt_omits_missing_movement() {
        let mut artwork = fallback_catalog().remove(1);
        artwork.movement = None;
        artwork.description = Some("Vista noturna de Saint-Rémy.".to_string());
        let prompt = build_prompt(&artwork, GenerationOptions::default());

        assert!(prompt.contains("de Vincent van Gogh (1889)."));
        assert!(prompt.contains("Descrição de referência: Vista noturna de Saint-Rémy."));
    }

    #[test]
    fn schema_requires_every_field() {
        let schema = response_schema();
        assert_eq!(schema["type"], "object");
        assert!(schema.get("$schema").is_none());
        assert!(schema.get("$defs").is_none());

        let required = schema["required"].as_array().unwrap();
        for field in [
            "historicalContext",
            "emotionalMeaning",
            "curiosity",
            "modernConnection",
            "suggestedPalette",
            "social",
        ] {
            assert!(required.iter().any(|name| name == field), "{field}");
        }

        let social = &schema["properties"]["social"];
        assert_eq!(social["required"].as_array().unwrap().len(), 3);
        let hashtags = &social["properties"]["tiktok"]["properties"]["hashtags"];
        assert_eq!(hashtags["minItems"], 1);
        assert_eq!(hashtags["maxItems"], 10);

        let palette = &schema["properties"]["suggestedPalette"];
        assert_eq!(palette["minItems"], PALETTE_SIZE);
        assert_eq!(palette["maxItems"], PALETTE_SIZE);
    }
}
