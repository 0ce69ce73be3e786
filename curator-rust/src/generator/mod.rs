mod content;
mod fallback;
mod options;
mod prompt;

pub use content::{
    is_hex_color, GenerationResult, Platform, PlatformPost, SocialContent, MAX_HASHTAGS,
    PALETTE_SIZE, SOCIAL_SCHEMA_VERSION,
};
pub use fallback::fallback_result;
pub use options::{Audience, GenerationOptions, Tone, UnknownOption};
pub use prompt::{build_prompt, response_schema};

use crate::{artwork::Artwork, CuratorError, CuratorResult};
use arte_connectors::{
    LanguageModel, LanguageModelInput, Message, Part, ResponseFormatJson, ResponseFormatOption,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info_span;
use tracing_futures::Instrument;

/// Whether a [`Generation`] holds live model output or the fallback payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    Live,
    Fallback,
}

/// Outcome of [`ContentGenerator::generate`]. Always structurally valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generation {
    pub result: GenerationResult,
    pub source: ContentSource,
}

impl Generation {
    pub fn is_fallback(&self) -> bool {
        self.source == ContentSource::Fallback
    }
}

/// Obtains curatorial and social copy for artworks from a language model.
///
/// Each call issues exactly one request; nothing is retried or cached.
#[derive(Clone)]
pub struct ContentGenerator {
    model: Arc<dyn LanguageModel>,
    temperature: Option<f64>,
}

impl ContentGenerator {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self {
            model,
            temperature: None,
        }
    }

    #[must_use]
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// The structured request sent for `artwork` under `options`.
    pub fn request_input(
        &self,
        artwork: &Artwork,
        options: GenerationOptions,
    ) -> LanguageModelInput {
        LanguageModelInput {
            system_prompt: Some(prompt::SYSTEM_PROMPT.to_string()),
            messages: vec![Message::user(vec![Part::text(build_prompt(
                artwork, options,
            ))])],
            response_format: Some(ResponseFormatOption::Json(ResponseFormatJson {
                name: "artwork_analysis".to_string(),
                description: Some(format!(
                    "Curatorial analysis and social content, shape v{SOCIAL_SCHEMA_VERSION}"
                )),
                schema: Some(response_schema()),
            })),
            temperature: self.temperature,
            ..Default::default()
        }
    }

    /// Generate content, surfacing any failure.
    pub async fn try_generate(
        &self,
        artwork: &Artwork,
        options: GenerationOptions,
    ) -> CuratorResult<GenerationResult> {
        let response = self
            .model
            .generate(self.request_input(artwork, options))
            .await?;

        let text = response
            .text()
            .ok_or_else(|| CuratorError::InvalidContent("empty completion".to_string()))?;

        let result: GenerationResult = serde_json::from_str(strip_code_fence(&text))?;
        result.check()?;
        Ok(result)
    }

    /// Generate content for `artwork`. Never fails: any error yields
    /// [`fallback_result`] marked as [`ContentSource::Fallback`].
    pub async fn generate(&self, artwork: &Artwork, options: GenerationOptions) -> Generation {
        let span = info_span!(
            "arte_curator.generate",
            artwork = %artwork.id,
            audience = options.audience.as_str(),
            tone = options.tone.as_str(),
            model = %self.model.model_id()
        );

        async {
            match self.try_generate(artwork, options).await {
                Ok(result) => Generation {
                    result,
                    source: ContentSource::Live,
                },
                Err(error) => {
                    tracing::warn!(%error, "content generation failed, using fallback content");
                    Generation {
                        result: fallback_result(),
                        source: ContentSource::Fallback,
                    }
                }
            }
        }
        .instrument(span)
        .await
    }
}

/// Models occasionally wrap JSON in a Markdown code fence despite the
/// requested mime type.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}
