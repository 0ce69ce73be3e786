use super::content::{GenerationResult, PlatformPost, SocialContent};

fn post(hook: &str, caption: &str, hashtags: &[&str], call_to_action: &str) -> PlatformPost {
    PlatformPost {
        hook: hook.to_string(),
        caption: caption.to_string(),
        hashtags: hashtags.iter().map(ToString::to_string).collect(),
        call_to_action: call_to_action.to_string(),
    }
}

/// The placeholder payload returned whenever live generation fails.
/// Satisfies the response schema and [`GenerationResult::check`].
pub fn fallback_result() -> GenerationResult {
    GenerationResult {
        historical_context: "Uma obra-prima criada durante um período de grande revolução cultural, refletindo as tensões da época.".to_string(),
        emotional_meaning: "A obra evoca uma profunda sensação de introspecção e a busca pela beleza no caos cotidiano.".to_string(),
        curiosity: "Dizem que o artista escondeu suas iniciais nos olhos da figura principal.".to_string(),
        modern_connection: "Nos lembra da importância de parar e observar o mundo em meio à nossa rotina acelerada de redes sociais.".to_string(),
        suggested_palette: [
            "#2C3E50".to_string(),
            "#E74C3C".to_string(),
            "#ECF0F1".to_string(),
            "#3498DB".to_string(),
        ],
        social: SocialContent {
            instagram: post(
                "Você já parou para olhar os detalhes hoje? ✨",
                "Esta obra nos ensina sobre a beleza do silêncio. Quer essa vibe na sua sala? 🖼️",
                &["#Arte", "#Design"],
                "Link na bio!",
            ),
            tiktok: post(
                "3 segundos para descobrir um segredo desta obra 👀",
                "Arte não é só para museus: ela conversa com a sua rotina.",
                &["#ArteNoTikTok", "#HistóriaDaArte"],
                "Segue para a parte 2!",
            ),
            pinterest: post(
                "Inspiração de parede com história",
                "Uma obra clássica para trazer calma e personalidade ao seu ambiente.",
                &["#DecoraçãoComArte", "#Quadros"],
                "Salve para decorar depois.",
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_satisfies_the_response_contract() {
        let result = fallback_result();
        result.check().unwrap();

        let text = serde_json::to_string(&result).unwrap();
        let parsed: GenerationResult = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, result);
    }
}
