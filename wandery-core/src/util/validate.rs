use crate::entities::*;
use thiserror::Error;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

/// Whether use cases check their input before storing it.
///
/// Disabled by default: every input is stored as typed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Validation {
    #[default]
    Disabled,
    Enabled,
}

impl Validation {
    pub fn is_enabled(self) -> bool {
        self == Self::Enabled
    }

    pub fn check<T: Validate>(self, x: &T) -> Result<(), T::Error> {
        if self.is_enabled() {
            x.validate()
        } else {
            Ok(())
        }
    }
}

impl From<bool> for Validation {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }
}

fn is_valid_title(title: &str) -> bool {
    !title.trim().is_empty()
}

// ZIP or ZIP+4
pub fn is_valid_zip(zip: &str) -> bool {
    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    match zip.split_once('-') {
        None => zip.len() == 5 && is_digits(zip),
        Some((zip5, plus4)) => {
            zip5.len() == 5 && plus4.len() == 4 && is_digits(zip5) && is_digits(plus4)
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressInvalidation {
    #[error("Invalid zip code")]
    Zip,
    #[error("Invalid position")]
    Position,
}

impl Validate for Address {
    type Error = AddressInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !self.pos.is_valid() {
            return Err(Self::Error::Position);
        }
        if !self.zip.is_empty() && !is_valid_zip(&self.zip) {
            return Err(Self::Error::Zip);
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaceInvalidation {
    #[error("Invalid title")]
    Title,
    #[error(transparent)]
    Address(AddressInvalidation),
}

impl Validate for Place {
    type Error = PlaceInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !is_valid_title(&self.title) {
            return Err(Self::Error::Title);
        }
        self.address.validate().map_err(Self::Error::Address)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaceListInvalidation {
    #[error("Invalid title")]
    Title,
}

impl Validate for PlaceList {
    type Error = PlaceListInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !is_valid_title(&self.title) {
            return Err(Self::Error::Title);
        }
        Ok(())
    }
}
