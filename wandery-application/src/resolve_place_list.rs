use super::*;

pub fn get_place(store: &Store, id: &str) -> Result<Place> {
    Ok(store.shared().get_place(id)?)
}

/// Places of a list in list order.
pub fn resolve_place_list(store: &Store, id: &str) -> Result<(PlaceList, Vec<Place>)> {
    Ok(usecases::resolve_place_list(&store.shared(), id)?)
}
