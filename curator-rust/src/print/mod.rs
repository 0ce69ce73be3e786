mod studio;

pub use studio::{MockupConfig, PrintStudio, SimulatedOrder};

use crate::artwork::Artwork;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Border drawn around framed previews.
pub const FRAME_BORDER_PX: u32 = 12;

/// A price in Brazilian reais, held in centavos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price {
    pub cents: u32,
}

impl Price {
    pub const fn reais(reais: u32) -> Self {
        Self { cents: reais * 100 }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (reais, cents) = (self.cents / 100, self.cents % 100);
        if cents == 0 {
            write!(f, "R$ {reais}")
        } else {
            write!(f, "R$ {reais},{cents:02}")
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PrintSize {
    #[serde(rename = "S")]
    Small,
    #[default]
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "L")]
    Large,
}

impl PrintSize {
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    pub fn id(self) -> &'static str {
        match self {
            Self::Small => "S",
            Self::Medium => "M",
            Self::Large => "L",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Small => "30x40cm",
            Self::Medium => "50x70cm",
            Self::Large => "70x100cm",
        }
    }

    pub fn price(self) -> Price {
        match self {
            Self::Small => Price::reais(189),
            Self::Medium => Price::reais(299),
            Self::Large => Price::reais(459),
        }
    }

    /// Width of the on-screen preview.
    pub fn preview_width_px(self) -> u32 {
        match self {
            Self::Small => 300,
            Self::Medium => 400,
            Self::Large => 500,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameStyle {
    #[default]
    Black,
    Wood,
    White,
    None,
}

impl FrameStyle {
    pub const ALL: [Self; 4] = [Self::Black, Self::Wood, Self::White, Self::None];

    pub fn id(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Wood => "wood",
            Self::White => "white",
            Self::None => "none",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Black => "Preta Minimalista",
            Self::Wood => "Madeira Natural",
            Self::White => "Branca Clean",
            Self::None => "Sem Moldura",
        }
    }

    /// Swatch color; unframed prints have none.
    pub fn color(self) -> Option<&'static str> {
        match self {
            Self::Black => Some("#1a1a1a"),
            Self::Wood => Some("#8c6a5a"),
            Self::White => Some("#f5f5f5"),
            Self::None => None,
        }
    }

    pub fn is_framed(self) -> bool {
        self != Self::None
    }
}

/// Size and frame chosen in the configurator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PrintSelection {
    pub size: PrintSize,
    pub frame: FrameStyle,
}

impl PrintSelection {
    pub fn new(size: PrintSize, frame: FrameStyle) -> Self {
        Self { size, frame }
    }

    /// The frame does not affect the price.
    pub fn price(self) -> Price {
        self.size.price()
    }

    pub fn quote(self) -> PrintQuote {
        PrintQuote {
            selection: self,
            size_label: self.size.label(),
            frame_label: self.frame.label(),
            total: self.price(),
        }
    }
}

/// The "Total estimado" line of the configurator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrintQuote {
    pub selection: PrintSelection,
    pub size_label: &'static str,
    pub frame_label: &'static str,
    pub total: Price,
}

impl fmt::Display for PrintQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}: {}", self.size_label, self.frame_label, self.total)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameBorder {
    pub width_px: u32,
    pub color: &'static str,
}

/// How the artwork is drawn on the simulated wall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrintPreview {
    pub image: String,
    pub width_px: u32,
    pub border: Option<FrameBorder>,
    pub inner_shadow: bool,
}

impl PrintPreview {
    pub fn for_artwork(artwork: &Artwork, selection: PrintSelection) -> Self {
        let border = selection.frame.color().map(|color| FrameBorder {
            width_px: FRAME_BORDER_PX,
            color,
        });
        Self {
            image: artwork.image.clone(),
            width_px: selection.size.preview_width_px(),
            inner_shadow: border.is_some(),
            border,
        }
    }
}
