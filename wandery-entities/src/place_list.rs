use crate::{color::*, id::*};

/// A named, user-curated collection of places.
///
/// Places are referenced by their id. The order of `place_ids`
/// is significant and the same place may occur more than once.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceList {
    pub id: Id,
    pub title: String,
    pub description: Option<String>,
    pub icon: String,
    pub color: Color,
    pub place_ids: Vec<Id>,
}

impl PlaceList {
    /// Creates an empty list with a new, unique id.
    pub fn new(title: impl Into<String>, icon: impl Into<String>, color: impl Into<Color>) -> Self {
        Self {
            id: Id::new(),
            title: title.into(),
            description: None,
            icon: icon.into(),
            color: color.into(),
            place_ids: vec![],
        }
    }

    pub fn len(&self) -> usize {
        self.place_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.place_ids.is_empty()
    }

    pub fn contains(&self, place_id: &Id) -> bool {
        self.place_ids.iter().any(|id| id == place_id)
    }
}
