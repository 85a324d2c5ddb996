use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Named colors of the user interface palette.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum ColorToken {
    Secondary,
    Orange,
    DarkGreen,
    Mint,
    Red,
    Indigo,
}

impl ColorToken {
    /// Explicit components of custom palette entries.
    ///
    /// System colors are resolved by the renderer and have no fixed value.
    pub const fn rgba(self) -> Option<Rgba> {
        match self {
            Self::DarkGreen => Some(Rgba::new(0.241, 0.808, 0.209, 1.0)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub opacity: f32,
}

impl Rgba {
    pub const fn new(red: f32, green: f32, blue: f32, opacity: f32) -> Self {
        Self {
            red,
            green,
            blue,
            opacity,
        }
    }
}

/// Display color of a list or a status.
///
/// The value is opaque to the domain logic, it is only stored and passed on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Token(ColorToken),
    Rgba(Rgba),
}

impl From<ColorToken> for Color {
    fn from(from: ColorToken) -> Self {
        Self::Token(from)
    }
}

impl From<Rgba> for Color {
    fn from(from: Rgba) -> Self {
        Self::Rgba(from)
    }
}

impl Default for Color {
    fn default() -> Self {
        ColorToken::Indigo.into()
    }
}
