#[macro_use]
extern crate log;

mod add_place_to_list;
mod create_place;
mod create_place_list;
mod overview;
mod place_detail;
mod resolve_place_list;
mod update_place;
mod update_place_list;

pub mod prelude {
    pub use super::{
        add_place_to_list::*, create_place::*, create_place_list::*, overview::*,
        place_detail::*, resolve_place_list::*, update_place::*, update_place_list::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use wandery_core::{entities::*, repositories::*, usecases, util::validate::Validation};
pub(crate) use wandery_db_memory::Store;

#[cfg(test)]
pub(crate) mod tests;
