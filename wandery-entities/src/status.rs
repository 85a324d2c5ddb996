use num_derive::FromPrimitive;
use num_traits::*;
use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};
use thiserror::Error;

use crate::color::ColorToken;

pub type VisitStatusPrimitive = i16;

/// Categorization of a place by visitation and preference.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, FromPrimitive, EnumIter, EnumCount, EnumString, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum VisitStatus {
    Unmarked = 0,
    #[default]
    ToVisit  = 1,
    Visited  = 2,
    Liked    = 3,
    Loved    = 4,
}

impl VisitStatus {
    /// Options of the status menu in display order. A divider
    /// separates the first [`Self::MENU_DIVIDER`] entries from the rest.
    pub const MENU: [Self; 5] = [
        Self::Unmarked,
        Self::ToVisit,
        Self::Visited,
        Self::Liked,
        Self::Loved,
    ];

    pub const MENU_DIVIDER: usize = 2;

    /// Loved and liked places count as visited.
    pub fn is_visited(self) -> bool {
        matches!(self, Self::Visited | Self::Liked | Self::Loved)
    }

    pub const fn metadata(self) -> StatusMetadata {
        match self {
            Self::Unmarked => StatusMetadata {
                label: "Unmarked",
                color: ColorToken::Secondary,
                icon: "magnifyingglass",
                filled_icon: "magnifyingglass",
            },
            Self::ToVisit => StatusMetadata {
                label: "To Visit",
                color: ColorToken::Orange,
                icon: "map",
                filled_icon: "map.fill",
            },
            Self::Visited => StatusMetadata {
                label: "Visited",
                color: ColorToken::DarkGreen,
                icon: "mappin.and.ellipse",
                filled_icon: "mappin.and.ellipse",
            },
            Self::Liked => StatusMetadata {
                label: "Liked",
                color: ColorToken::Mint,
                icon: "hand.thumbsup",
                filled_icon: "hand.thumbsup.fill",
            },
            Self::Loved => StatusMetadata {
                label: "Loved",
                color: ColorToken::Red,
                icon: "heart",
                filled_icon: "heart.fill",
            },
        }
    }

    pub const fn label(self) -> &'static str {
        self.metadata().label
    }

    pub const fn color(self) -> ColorToken {
        self.metadata().color
    }

    pub const fn icon(self) -> &'static str {
        self.metadata().icon
    }
}

/// Display properties of a [`VisitStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusMetadata {
    pub label: &'static str,
    pub color: ColorToken,
    /// Outline form of the icon.
    pub icon: &'static str,
    /// Form of the icon for the active status. Equals `icon`
    /// if the icon has no filled variant.
    pub filled_icon: &'static str,
}

impl StatusMetadata {
    pub fn is_fillable(&self) -> bool {
        self.icon != self.filled_icon
    }

    /// Icon of a status menu entry.
    pub fn menu_icon(&self, active: bool) -> &'static str {
        if active {
            self.filled_icon
        } else {
            self.icon
        }
    }

    /// Icon of the badge that shows the current status.
    pub fn badge_icon(&self) -> &'static str {
        self.filled_icon
    }
}

#[derive(Debug, Error)]
#[error("Invalid visit status primitive: {0}")]
pub struct InvalidVisitStatusPrimitive(VisitStatusPrimitive);

impl TryFrom<VisitStatusPrimitive> for VisitStatus {
    type Error = InvalidVisitStatusPrimitive;
    fn try_from(from: VisitStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidVisitStatusPrimitive(from))
    }
}

impl From<VisitStatus> for VisitStatusPrimitive {
    fn from(from: VisitStatus) -> Self {
        from as VisitStatusPrimitive
    }
}
