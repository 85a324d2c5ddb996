use crate::{address::*, geo::*, id::*, status::*};

use std::collections::HashSet;

/// A point of interest.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub id: Id,
    pub title: String,
    /// Free-text notes.
    pub description: String,
    pub status: VisitStatus,
    pub address: Address,
    /// Lists that contain this place.
    pub list_ids: HashSet<Id>,
}

impl Place {
    pub fn pos(&self) -> MapPoint {
        self.address.pos
    }

    pub fn is_member_of(&self, list_id: &Id) -> bool {
        self.list_ids.contains(list_id)
    }
}
