mod add_place_to_list;
mod create_new_place;
mod create_new_place_list;
mod derive_catalog;
mod detail;
mod error;
mod overview;
mod update_place;
mod update_place_list;

#[cfg(test)]
pub mod tests;

pub use self::{
    add_place_to_list::*, create_new_place::*, create_new_place_list::*, derive_catalog::*,
    detail::*, error::Error, overview::*, update_place::*, update_place_list::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*, util::validate::Validation};
}
use self::prelude::*;

// List titles are compared case-insensitively.
fn check_unique_list_title<R: PlaceListRepo>(
    repo: &R,
    title: &str,
    except_id: Option<&Id>,
) -> Result<()> {
    let title = title.trim().to_lowercase();
    let taken = repo
        .all_place_lists()?
        .into_iter()
        .filter(|l| Some(&l.id) != except_id)
        .any(|l| l.title.trim().to_lowercase() == title);
    if taken {
        return Err(Error::DuplicateListTitle);
    }
    Ok(())
}
