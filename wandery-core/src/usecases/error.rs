use crate::{
    repositories,
    util::validate::{AddressInvalidation, PlaceInvalidation, PlaceListInvalidation},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The title is invalid")]
    Title,
    #[error("Invalid zip code")]
    Zip,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("A list with this title already exists")]
    DuplicateListTitle,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Repo(repositories::Error::NotFound))
    }
}

impl From<AddressInvalidation> for Error {
    fn from(err: AddressInvalidation) -> Self {
        match err {
            AddressInvalidation::Zip => Self::Zip,
            AddressInvalidation::Position => Self::InvalidPosition,
        }
    }
}

impl From<PlaceInvalidation> for Error {
    fn from(err: PlaceInvalidation) -> Self {
        match err {
            PlaceInvalidation::Title => Self::Title,
            PlaceInvalidation::Address(err) => err.into(),
        }
    }
}

impl From<PlaceListInvalidation> for Error {
    fn from(err: PlaceListInvalidation) -> Self {
        match err {
            PlaceListInvalidation::Title => Self::Title,
        }
    }
}
