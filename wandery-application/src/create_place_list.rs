use super::*;

pub fn create_place_list(
    store: &Store,
    new_list: usecases::NewPlaceList,
    validation: Validation,
) -> Result<PlaceList> {
    let list = store
        .exclusive()
        .transaction(|conn| usecases::create_new_place_list(conn, new_list, validation))
        .map_err(|err| {
            warn!("Failed to create list: {}", err);
            err
        })?;
    info!("Created list {} ({})", list.id, list.title);
    Ok(list)
}
