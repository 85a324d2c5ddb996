use super::*;

/// Creates a place and optionally registers it in a list.
pub fn create_place(
    store: &Store,
    new_place: usecases::NewPlace,
    validation: Validation,
) -> Result<Place> {
    let place = store
        .exclusive()
        .transaction(|conn| usecases::create_new_place(conn, new_place, validation))
        .map_err(|err| {
            warn!("Failed to create place: {}", err);
            err
        })?;
    info!("Created place {} ({})", place.id, place.title);
    Ok(place)
}
