use crate::geo::MapPoint;
use std::fmt;

/// Postal address with its geographic coordinate.
///
/// Only the US address shape (street, city, state, zip) is supported.
/// Empty strings denote absent fields.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Address {
    pub street1 : String,
    pub street2 : String,
    pub city    : String,
    pub state   : String,
    pub zip     : String,
    pub pos     : MapPoint,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        self.street1.is_empty()
            && self.street2.is_empty()
            && self.city.is_empty()
            && self.state.is_empty()
            && self.zip.is_empty()
    }
}

/// Multi-line rendering: street lines, then "city, state zip".
/// Segments of empty fields are omitted.
impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.street1)?;
        if !self.street2.is_empty() {
            write!(f, "\n{}", self.street2)?;
        }
        if !self.city.is_empty() {
            write!(f, "\n{}", self.city)?;
        }
        if !self.state.is_empty() {
            write!(f, ", {}", self.state)?;
        }
        if !self.zip.is_empty() {
            write!(f, " {}", self.zip)?;
        }
        Ok(())
    }
}
