use super::prelude::*;

/// Appends a place to a list and records the membership in the place.
///
/// A place can be added to the same list more than once.
pub fn add_place_to_list<R>(repo: &R, list_id: &str, place_id: &str) -> Result<PlaceList>
where
    R: PlaceRepo + PlaceListRepo,
{
    let mut list = repo.get_place_list(list_id)?;
    let mut place = repo.get_place(place_id)?;
    list.place_ids.push(place.id.clone());
    repo.update_place_list(&list)?;
    if place.list_ids.insert(list.id.clone()) {
        repo.update_place(&place)?;
    }
    Ok(list)
}
