//! Initial map regions of the list and detail screens.
//!
//! The region is centered on a single coordinate with a fixed span.
//! Fitting the region to all places of a list is not supported.

use crate::entities::*;

pub const DEFAULT_FALLBACK_CENTER: MapPoint = MapPoint::from_lat_lng_deg(37.34, -122.009163);
pub const DEFAULT_LIST_SPAN: f64 = 0.05;
pub const DEFAULT_PLACE_SPAN: f64 = 0.02;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportPolicy {
    /// Center of the region of an empty list.
    pub fallback_center: MapPoint,
    pub list_span: MapSpan,
    pub place_span: MapSpan,
}

impl Default for ViewportPolicy {
    fn default() -> Self {
        Self {
            fallback_center: DEFAULT_FALLBACK_CENTER,
            list_span: MapSpan::square(DEFAULT_LIST_SPAN),
            place_span: MapSpan::square(DEFAULT_PLACE_SPAN),
        }
    }
}

impl ViewportPolicy {
    pub fn list_viewport(&self, places: &[Place]) -> Viewport {
        let center = places
            .first()
            .map(Place::pos)
            .unwrap_or(self.fallback_center);
        Viewport {
            center,
            span: self.list_span,
        }
    }

    pub fn place_viewport(&self, place: &Place) -> Viewport {
        Viewport {
            center: place.pos(),
            span: self.place_span,
        }
    }
}
