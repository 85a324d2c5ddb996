use super::*;

pub fn add_place_to_list(store: &Store, list_id: &str, place_id: &str) -> Result<PlaceList> {
    let list = store
        .exclusive()
        .transaction(|conn| usecases::add_place_to_list(conn, list_id, place_id))
        .map_err(|err| {
            warn!(
                "Failed to add place {} to list {}: {}",
                place_id, list_id, err
            );
            err
        })?;
    info!(
        "Added place {} to list {} ({} places)",
        place_id,
        list.id,
        list.len()
    );
    Ok(list)
}
