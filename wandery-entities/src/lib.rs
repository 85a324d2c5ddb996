#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # wandery-entities
//!
//! Reusable, agnostic domain entities for Wandery.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod address;
pub mod color;
pub mod geo;
pub mod id;
pub mod place;
pub mod place_list;
pub mod status;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
