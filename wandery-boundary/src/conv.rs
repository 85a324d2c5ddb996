//! Conversions between boundary and entity types.

use super::*;
use thiserror::Error;
use wandery_core::{
    catalog as c, entities as e, usecases as uc, viewport::DEFAULT_FALLBACK_CENTER,
};

impl From<e::VisitStatus> for VisitStatus {
    fn from(from: e::VisitStatus) -> Self {
        use e::VisitStatus as E;
        match from {
            E::Unmarked => Self::Unmarked,
            E::ToVisit => Self::ToVisit,
            E::Visited => Self::Visited,
            E::Liked => Self::Liked,
            E::Loved => Self::Loved,
        }
    }
}

impl From<VisitStatus> for e::VisitStatus {
    fn from(from: VisitStatus) -> Self {
        use VisitStatus as S;
        match from {
            S::Unmarked => Self::Unmarked,
            S::ToVisit => Self::ToVisit,
            S::Visited => Self::Visited,
            S::Liked => Self::Liked,
            S::Loved => Self::Loved,
        }
    }
}

impl From<e::ColorToken> for ColorToken {
    fn from(from: e::ColorToken) -> Self {
        use e::ColorToken as E;
        match from {
            E::Secondary => Self::Secondary,
            E::Orange => Self::Orange,
            E::DarkGreen => Self::DarkGreen,
            E::Mint => Self::Mint,
            E::Red => Self::Red,
            E::Indigo => Self::Indigo,
        }
    }
}

impl From<ColorToken> for e::ColorToken {
    fn from(from: ColorToken) -> Self {
        use ColorToken as C;
        match from {
            C::Secondary => Self::Secondary,
            C::Orange => Self::Orange,
            C::DarkGreen => Self::DarkGreen,
            C::Mint => Self::Mint,
            C::Red => Self::Red,
            C::Indigo => Self::Indigo,
        }
    }
}

impl From<e::Rgba> for Rgba {
    fn from(from: e::Rgba) -> Self {
        let e::Rgba {
            red,
            green,
            blue,
            opacity,
        } = from;
        Self {
            red,
            green,
            blue,
            opacity,
        }
    }
}

impl From<Rgba> for e::Rgba {
    fn from(from: Rgba) -> Self {
        let Rgba {
            red,
            green,
            blue,
            opacity,
        } = from;
        Self::new(red, green, blue, opacity)
    }
}

impl From<e::Color> for Color {
    fn from(from: e::Color) -> Self {
        match from {
            e::Color::Token(token) => Self::Token(token.into()),
            e::Color::Rgba(rgba) => Self::Rgba(rgba.into()),
        }
    }
}

impl From<Color> for e::Color {
    fn from(from: Color) -> Self {
        match from {
            Color::Token(token) => Self::Token(token.into()),
            Color::Rgba(rgba) => Self::Rgba(rgba.into()),
        }
    }
}

impl From<e::MapPoint> for Coordinate {
    fn from(from: e::MapPoint) -> Self {
        Self {
            lat: from.lat(),
            lng: from.lng(),
        }
    }
}

impl From<e::Address> for Address {
    fn from(from: e::Address) -> Self {
        let e::Address {
            street1,
            street2,
            city,
            state,
            zip,
            pos,
        } = from;
        Self {
            street1,
            street2,
            city,
            state,
            zip,
            lat: pos.lat(),
            lng: pos.lng(),
        }
    }
}

impl From<e::Place> for Place {
    fn from(from: e::Place) -> Self {
        let e::Place {
            id,
            title,
            description,
            status,
            address,
            list_ids,
        } = from;
        let mut list_ids: Vec<String> = list_ids.into_iter().map(String::from).collect();
        list_ids.sort_unstable();
        Self {
            id: id.into(),
            title,
            description,
            status: status.into(),
            address: address.into(),
            list_ids,
        }
    }
}

impl From<e::PlaceList> for PlaceList {
    fn from(from: e::PlaceList) -> Self {
        let e::PlaceList {
            id,
            title,
            description,
            icon,
            color,
            place_ids,
        } = from;
        Self {
            id: id.into(),
            title,
            description,
            icon,
            color: color.into(),
            place_ids: place_ids.into_iter().map(String::from).collect(),
        }
    }
}

impl From<(e::VisitStatus, e::StatusMetadata)> for StatusMetadata {
    fn from((status, meta): (e::VisitStatus, e::StatusMetadata)) -> Self {
        let divider_after = e::VisitStatus::MENU
            .iter()
            .position(|s| *s == status)
            .is_some_and(|idx| idx + 1 == e::VisitStatus::MENU_DIVIDER);
        Self {
            status: status.into(),
            label: meta.label.to_owned(),
            color: meta.color.into(),
            icon: meta.icon.to_owned(),
            filled_icon: meta.badge_icon().to_owned(),
            divider_after,
        }
    }
}

impl From<e::VisitStatus> for StatusMetadata {
    fn from(from: e::VisitStatus) -> Self {
        (from, from.metadata()).into()
    }
}

impl From<e::Viewport> for Viewport {
    fn from(from: e::Viewport) -> Self {
        Self {
            center: from.center.into(),
            lat_delta: from.span.lat_delta,
            lng_delta: from.span.lng_delta,
        }
    }
}

impl From<c::CatalogKind> for CatalogKind {
    fn from(from: c::CatalogKind) -> Self {
        use c::CatalogKind as C;
        match from {
            C::AllPlaces => Self::AllPlaces,
            C::ToVisit => Self::ToVisit,
            C::Visited => Self::Visited,
            C::Favorites => Self::Favorites,
        }
    }
}

impl From<c::DerivedList> for DerivedList {
    fn from(from: c::DerivedList) -> Self {
        Self {
            kind: from.kind.into(),
            title: from.label().to_owned(),
            icon: from.icon().to_owned(),
            color: from.color().into(),
            places: from.places.into_iter().map(Place::from).collect(),
        }
    }
}

impl From<uc::Tile> for Tile {
    fn from(from: uc::Tile) -> Self {
        let uc::Tile {
            source,
            title,
            icon,
            color,
            count,
        } = from;
        let (catalog, list_id) = match source {
            uc::TileSource::Catalog(kind) => (Some(kind.into()), None),
            uc::TileSource::List(id) => (None, Some(id.into())),
        };
        Self {
            catalog,
            list_id,
            title,
            icon,
            color: color.into(),
            count,
        }
    }
}

impl From<uc::Overview> for Overview {
    fn from(from: uc::Overview) -> Self {
        Self {
            catalog: from.catalog.into_iter().map(Tile::from).collect(),
            lists: from.lists.into_iter().map(Tile::from).collect(),
        }
    }
}

impl From<uc::PlaceDetail> for PlaceDetail {
    fn from(from: uc::PlaceDetail) -> Self {
        let address_text = from.address_text();
        let uc::PlaceDetail {
            place,
            status,
            viewport,
        } = from;
        let status = StatusMetadata::from((place.status, status));
        Self {
            place: place.into(),
            address_text,
            status,
            viewport: viewport.into(),
        }
    }
}

impl From<uc::PlaceListDetail> for PlaceListDetail {
    fn from(from: uc::PlaceListDetail) -> Self {
        let uc::PlaceListDetail {
            list,
            places,
            viewport,
        } = from;
        Self {
            list: list.into(),
            places: places.into_iter().map(Place::from).collect(),
            viewport: viewport.into(),
        }
    }
}

/// Places without a coordinate are located at the default map center.
impl TryFrom<NewPlace> for uc::NewPlace {
    type Error = IncompleteCoordinate;

    fn try_from(from: NewPlace) -> Result<Self, Self::Error> {
        let NewPlace {
            id,
            title,
            description,
            status,
            street1,
            street2,
            city,
            state,
            zip,
            lat,
            lng,
            list_id,
        } = from;
        let pos = match (lat, lng) {
            (Some(lat), Some(lng)) => e::MapPoint::from_lat_lng_deg(lat, lng),
            (None, None) => DEFAULT_FALLBACK_CENTER,
            _ => return Err(IncompleteCoordinate),
        };
        Ok(Self {
            id: id.map(e::Id::from),
            title,
            description,
            status: status.map(Into::into).unwrap_or_default(),
            street1,
            street2,
            city,
            state,
            zip,
            lat: pos.lat(),
            lng: pos.lng(),
            list_id: list_id.map(e::Id::from),
        })
    }
}

/// Only one of latitude and longitude has been given.
#[derive(Debug, Error)]
#[error("Latitude and longitude must be given together")]
pub struct IncompleteCoordinate;

impl TryFrom<UpdatePlace> for uc::UpdatePlace {
    type Error = IncompleteCoordinate;

    fn try_from(from: UpdatePlace) -> Result<Self, Self::Error> {
        let UpdatePlace {
            title,
            description,
            status,
            street1,
            street2,
            city,
            state,
            zip,
            lat,
            lng,
        } = from;
        let pos = match (lat, lng) {
            (Some(lat), Some(lng)) => Some(e::MapPoint::from_lat_lng_deg(lat, lng)),
            (None, None) => None,
            _ => return Err(IncompleteCoordinate),
        };
        Ok(Self {
            title,
            description,
            status: status.map(Into::into),
            street1,
            street2,
            city,
            state,
            zip,
            pos,
        })
    }
}

impl From<UpdatePlaceList> for uc::UpdatePlaceList {
    fn from(from: UpdatePlaceList) -> Self {
        let UpdatePlaceList {
            title,
            description,
            icon,
            color,
        } = from;
        Self {
            title,
            description,
            icon,
            color: color.map(Into::into),
        }
    }
}
