// Low-level storage access traits.
// Each repository is responsible for a single entity.
// Related entities are only referenced by their id and
// never modified or loaded by another repository.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait PlaceRepo {
    fn create_place(&self, place: Place) -> Result<()>;
    fn update_place(&self, place: &Place) -> Result<()>;

    fn get_place(&self, id: &str) -> Result<Place>;

    // Resolves the ids in the given order. Duplicate ids yield
    // duplicate places, unknown ids are skipped.
    fn get_places(&self, ids: &[&str]) -> Result<Vec<Place>>;

    // In order of creation
    fn all_places(&self) -> Result<Vec<Place>>;
    fn count_places(&self) -> Result<usize>;
}

pub trait PlaceListRepo {
    fn create_place_list(&self, list: PlaceList) -> Result<()>;
    fn update_place_list(&self, list: &PlaceList) -> Result<()>;

    fn get_place_list(&self, id: &str) -> Result<PlaceList>;

    // In order of creation
    fn all_place_lists(&self) -> Result<Vec<PlaceList>>;
    fn count_place_lists(&self) -> Result<usize>;
}
