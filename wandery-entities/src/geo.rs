//! Geographic coordinates and map viewports.

const LAT_DEG_MAX: f64 = 90.0;
const LAT_DEG_MIN: f64 = -90.0;
const LNG_DEG_MAX: f64 = 180.0;
const LNG_DEG_MIN: f64 = -180.0;

/// A geographic coordinate in degrees (WGS 84).
///
/// Construction with [`MapPoint::from_lat_lng_deg`] accepts any value,
/// out-of-range coordinates are only detected by [`MapPoint::is_valid`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    pub const fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Option<Self> {
        let pos = Self::from_lat_lng_deg(lat, lng);
        if pos.is_valid() {
            Some(pos)
        } else {
            None
        }
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        (LAT_DEG_MIN..=LAT_DEG_MAX).contains(&self.lat)
            && (LNG_DEG_MIN..=LNG_DEG_MAX).contains(&self.lng)
    }
}

impl std::fmt::Display for MapPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Angular extent of a map region in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MapSpan {
    pub lat_delta: f64,
    pub lng_delta: f64,
}

impl MapSpan {
    pub const fn square(delta: f64) -> Self {
        Self {
            lat_delta: delta,
            lng_delta: delta,
        }
    }
}

/// Initial region of a map display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: MapPoint,
    pub span: MapSpan,
}
