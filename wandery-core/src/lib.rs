pub mod catalog;
pub mod repositories;
pub mod usecases;
pub mod util;
pub mod viewport;

pub mod entities {
    pub use wandery_entities::{
        address::*, color::*, geo::*, id::*, place::*, place_list::*, status::*,
    };
}
