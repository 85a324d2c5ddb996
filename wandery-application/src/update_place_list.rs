use super::*;

pub fn update_place_list(
    store: &Store,
    id: &str,
    update: usecases::UpdatePlaceList,
    validation: Validation,
) -> Result<PlaceList> {
    let list = store
        .exclusive()
        .transaction(|conn| usecases::update_place_list(conn, id, update, validation))
        .map_err(|err| {
            warn!("Failed to update list {}: {}", id, err);
            err
        })?;
    info!("Updated list {} ({})", list.id, list.title);
    Ok(list)
}
