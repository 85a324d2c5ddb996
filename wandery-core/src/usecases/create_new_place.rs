use super::prelude::*;

use std::collections::HashSet;

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewPlace {
    /// A new id is generated if none is given.
    pub id          : Option<Id>,
    pub title       : String,
    pub description : String,
    pub status      : VisitStatus,
    pub street1     : String,
    pub street2     : String,
    pub city        : String,
    pub state       : String,
    pub zip         : String,
    pub lat         : f64,
    pub lng         : f64,
    /// Append the new place to this list.
    pub list_id     : Option<Id>,
}

pub fn create_new_place<R>(repo: &R, new_place: NewPlace, validation: Validation) -> Result<Place>
where
    R: PlaceRepo + PlaceListRepo,
{
    let NewPlace {
        id,
        title,
        description,
        status,
        street1,
        street2,
        city,
        state,
        zip,
        lat,
        lng,
        list_id,
    } = new_place;
    let mut list = list_id
        .map(|id| repo.get_place_list(id.as_str()))
        .transpose()?;
    let address = Address {
        street1,
        street2,
        city,
        state,
        zip,
        pos: MapPoint::from_lat_lng_deg(lat, lng),
    };
    let mut list_ids = HashSet::new();
    if let Some(ref list) = list {
        list_ids.insert(list.id.clone());
    }
    let place = Place {
        id: id.unwrap_or_else(Id::new),
        title,
        description,
        status,
        address,
        list_ids,
    };
    validation.check(&place)?;
    repo.create_place(place.clone())?;
    log::debug!("Created place {} ({})", place.id, place.title);
    if let Some(ref mut list) = list {
        list.place_ids.push(place.id.clone());
        repo.update_place_list(list)?;
        log::debug!("Appended place {} to list {}", place.id, list.id);
    }
    Ok(place)
}
