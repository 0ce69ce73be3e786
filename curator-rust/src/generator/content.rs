use crate::{CuratorError, CuratorResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Version of the social block shape. Version 3 carries one structured post
/// per platform; the flat caption (v1) and single-platform (v2) shapes are
/// not accepted.
pub const SOCIAL_SCHEMA_VERSION: u32 = 3;

/// Number of colors in a suggested palette.
pub const PALETTE_SIZE: usize = 4;

/// Upper bound on hashtags per post.
pub const MAX_HASHTAGS: usize = 10;

/// Social platform the generated posts target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Instagram,
    TikTok,
    Pinterest,
}

impl Platform {
    pub const ALL: [Self; 3] = [Self::Instagram, Self::TikTok, Self::Pinterest];

    /// Property name of the platform inside the social block.
    pub fn key(self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::TikTok => "tiktok",
            Self::Pinterest => "pinterest",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Instagram => "Instagram",
            Self::TikTok => "TikTok",
            Self::Pinterest => "Pinterest",
        }
    }
}

/// One platform's post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[schemars(inline)]
pub struct PlatformPost {
    pub hook: String,
    pub caption: String,
    #[schemars(length(min = 1, max = 10))]
    pub hashtags: Vec<String>,
    pub call_to_action: String,
}

/// The social block, shape version [`SOCIAL_SCHEMA_VERSION`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[schemars(inline)]
pub struct SocialContent {
    pub instagram: PlatformPost,
    pub tiktok: PlatformPost,
    pub pinterest: PlatformPost,
}

impl SocialContent {
    pub fn post(&self, platform: Platform) -> &PlatformPost {
        match platform {
            Platform::Instagram => &self.instagram,
            Platform::TikTok => &self.tiktok,
            Platform::Pinterest => &self.pinterest,
        }
    }
}

/// Curatorial and social copy for one artwork.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub historical_context: String,
    pub emotional_meaning: String,
    pub curiosity: String,
    pub modern_connection: String,
    /// Hex colors, e.g. #2C3E50.
    pub suggested_palette: [String; PALETTE_SIZE],
    pub social: SocialContent,
}

impl GenerationResult {
    /// Reject content the screens cannot render. Text fields and hashtags
    /// must not be blank, each post carries 1 to [`MAX_HASHTAGS`] hashtags,
    /// and palette entries must be `#RGB` or `#RRGGBB`.
    pub fn check(&self) -> CuratorResult<()> {
        for (field, value) in [
            ("historicalContext", &self.historical_context),
            ("emotionalMeaning", &self.emotional_meaning),
            ("curiosity", &self.curiosity),
            ("modernConnection", &self.modern_connection),
        ] {
            require_text(field, value)?;
        }

        for color in &self.suggested_palette {
            if !is_hex_color(color) {
                return Err(CuratorError::InvalidContent(format!(
                    "suggestedPalette: '{color}' is not a hex color"
                )));
            }
        }

        for platform in Platform::ALL {
            let post = self.social.post(platform);
            let key = platform.key();
            require_text(&format!("social.{key}.hook"), &post.hook)?;
            require_text(&format!("social.{key}.caption"), &post.caption)?;
            require_text(&format!("social.{key}.callToAction"), &post.call_to_action)?;
            if post.hashtags.is_empty() {
                return Err(CuratorError::InvalidContent(format!(
                    "social.{key}.hashtags is empty"
                )));
            }
            if post.hashtags.len() > MAX_HASHTAGS {
                return Err(CuratorError::InvalidContent(format!(
                    "social.{key}.hashtags has {} entries, at most {MAX_HASHTAGS} allowed",
                    post.hashtags.len()
                )));
            }
            for hashtag in &post.hashtags {
                require_text(&format!("social.{key}.hashtags"), hashtag)?;
            }
        }

        Ok(())
    }
}

fn require_text(field: &str, value: &str) -> CuratorResult<()> {
    if value.trim().is_empty() {
        Err(CuratorError::InvalidContent(format!("{field} is empty")))
    } else {
        Ok(())
    }
}

pub fn is_hex_color(value: &str) -> bool {
    value.strip_prefix('#').is_some_and(|hex| {
        matches!(hex.len(), 3 | 6) && hex.bytes().all(|b| b.is_ascii_hexdigit())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors() {
        assert!(is_hex_color("#2C3E50"));
        assert!(is_hex_color("#fff"));
        assert!(!is_hex_color("2C3E50"));
        assert!(!is_hex_color("#2C3E5"));
        assert!(!is_hex_color("#GGGGGG"));
        assert!(!is_hex_color("transparent"));
    }

    #[test]
    fn platforms_map_to_their_posts() {
        let post = |hook: &str| PlatformPost {
            hook: hook.to_string(),
            caption: "c".to_string(),
            hashtags: vec!["#arte".to_string()],
            call_to_action: "cta".to_string(),
        };
        let social = SocialContent {
            instagram: post("ig"),
            tiktok: post("tt"),
            pinterest: post("pin"),
        };
        let hooks: Vec<_> = Platform::ALL
            .into_iter()
            .map(|platform| social.post(platform).hook.as_str())
            .collect();
        assert_eq!(hooks, ["ig", "tt", "pin"]);
    }
}
