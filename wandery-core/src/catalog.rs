//! Derived, non-persistent sub-lists of the master place collection.
//!
//! Every derivation is a stable filter: the relative order of the
//! master sequence is preserved and nothing is re-sorted.

use crate::entities::*;

/// The four fixed lists of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    AllPlaces,
    ToVisit,
    Visited,
    Favorites,
}

impl CatalogKind {
    pub const ALL: [Self; 4] = [Self::AllPlaces, Self::ToVisit, Self::Visited, Self::Favorites];

    pub fn label(self) -> &'static str {
        match self {
            Self::AllPlaces => "All Places",
            Self::ToVisit => VisitStatus::ToVisit.label(),
            Self::Visited => VisitStatus::Visited.label(),
            Self::Favorites => "Favorites",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::AllPlaces => "tray.fill",
            Self::ToVisit => VisitStatus::ToVisit.metadata().filled_icon,
            Self::Visited => VisitStatus::Visited.icon(),
            Self::Favorites => VisitStatus::Loved.metadata().filled_icon,
        }
    }

    pub fn color(self) -> ColorToken {
        match self {
            Self::AllPlaces => ColorToken::Secondary,
            Self::ToVisit => VisitStatus::ToVisit.color(),
            Self::Visited => VisitStatus::Visited.color(),
            Self::Favorites => VisitStatus::Loved.color(),
        }
    }

    pub fn includes(self, status: VisitStatus) -> bool {
        match self {
            Self::AllPlaces => true,
            Self::ToVisit => status == VisitStatus::ToVisit,
            Self::Visited => status.is_visited(),
            Self::Favorites => status == VisitStatus::Loved,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DerivedList {
    pub kind: CatalogKind,
    pub places: Vec<Place>,
}

impl DerivedList {
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    pub fn icon(&self) -> &'static str {
        self.kind.icon()
    }

    pub fn color(&self) -> ColorToken {
        self.kind.color()
    }
}

pub fn derive_list(kind: CatalogKind, places: &[Place]) -> DerivedList {
    let places = places
        .iter()
        .filter(|p| kind.includes(p.status))
        .cloned()
        .collect();
    DerivedList { kind, places }
}

pub fn all_places(places: &[Place]) -> DerivedList {
    derive_list(CatalogKind::AllPlaces, places)
}

pub fn to_visit(places: &[Place]) -> DerivedList {
    derive_list(CatalogKind::ToVisit, places)
}

pub fn visited_or_better(places: &[Place]) -> DerivedList {
    derive_list(CatalogKind::Visited, places)
}

pub fn favorites(places: &[Place]) -> DerivedList {
    derive_list(CatalogKind::Favorites, places)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub all_places: DerivedList,
    pub to_visit: DerivedList,
    pub visited: DerivedList,
    pub favorites: DerivedList,
}

impl Catalog {
    pub fn derive(places: &[Place]) -> Self {
        Self {
            all_places: all_places(places),
            to_visit: to_visit(places),
            visited: visited_or_better(places),
            favorites: favorites(places),
        }
    }

    /// The derived lists in display order.
    pub fn lists(&self) -> [&DerivedList; 4] {
        [
            &self.all_places,
            &self.to_visit,
            &self.visited,
            &self.favorites,
        ]
    }
}
