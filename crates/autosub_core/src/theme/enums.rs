//! Closed enumerations used by theme documents.
//!
//! Every variant set is exhaustive: an unrecognized value in a theme
//! document fails deserialization instead of flowing into markup.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Font weight: a keyword or a CSS-style numeric weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "FontWeightRepr", into = "String")]
pub enum FontWeight {
    Normal,
    #[default]
    Bold,
    /// Numeric weight, 100..=900 in steps of 100.
    Numeric(u16),
}

impl FontWeight {
    /// Whether the ASS `Bold` flag should be set.
    ///
    /// Only the `bold` keyword sets it; numeric weights never do.
    pub fn is_bold(&self) -> bool {
        matches!(self, Self::Bold)
    }

    fn from_numeric(weight: u64) -> Result<Self, String> {
        if (100..=900).contains(&weight) && weight % 100 == 0 {
            Ok(Self::Numeric(weight as u16))
        } else {
            Err(format!(
                "invalid font weight {weight}: expected 100..=900 in steps of 100"
            ))
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Bold => write!(f, "bold"),
            Self::Numeric(weight) => write!(f, "{}", weight),
        }
    }
}

impl From<FontWeight> for String {
    fn from(weight: FontWeight) -> Self {
        weight.to_string()
    }
}

/// Wire form of a font weight: YAML authors write both `bold` and `700`.
#[derive(Deserialize)]
#[serde(untagged)]
enum FontWeightRepr {
    Number(u64),
    Name(String),
}

impl TryFrom<FontWeightRepr> for FontWeight {
    type Error = String;

    fn try_from(repr: FontWeightRepr) -> Result<Self, Self::Error> {
        match repr {
            FontWeightRepr::Number(weight) => Self::from_numeric(weight),
            FontWeightRepr::Name(name) => match name.trim() {
                "normal" => Ok(Self::Normal),
                "bold" => Ok(Self::Bold),
                other => match other.parse::<u64>() {
                    Ok(weight) => Self::from_numeric(weight),
                    Err(_) => Err(format!(
                        "unknown font weight '{other}': expected normal, bold or 100..=900"
                    )),
                },
            },
        }
    }
}

/// Font slant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

impl FontStyle {
    /// Whether the ASS `Italic` flag should be set. `oblique` does not.
    pub fn is_italic(&self) -> bool {
        matches!(self, Self::Italic)
    }
}

/// Granularity of karaoke highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightMode {
    #[default]
    Word,
    Character,
    None,
}

/// How a highlighted word is decorated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightStyle {
    #[default]
    Color,
    Background,
    Scale,
    Underline,
    Glow,
}

/// Transition into the highlighted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightTransition {
    #[default]
    Instant,
    Fade,
    Slide,
}

/// Vertical placement of the subtitle block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Top,
    Center,
    #[default]
    Bottom,
    /// Percentage placement via `layout.custom_y`; aligned like `Bottom`.
    Custom,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizontal alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

/// Background box layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundStyle {
    /// One opaque box behind the whole line.
    #[default]
    Single,
    /// Per-word highlight rendering.
    PerWord,
    None,
}

/// Entry/exit animation catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationEffect {
    #[default]
    None,
    Fade,
    Pop,
    SlideUp,
    SlideDown,
    Bounce,
}

impl AnimationEffect {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Fade => "fade",
            Self::Pop => "pop",
            Self::SlideUp => "slide_up",
            Self::SlideDown => "slide_down",
            Self::Bounce => "bounce",
        }
    }
}

impl fmt::Display for AnimationEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
