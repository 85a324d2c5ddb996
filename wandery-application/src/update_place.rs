use super::*;

pub fn update_place(
    store: &Store,
    id: &str,
    update: usecases::UpdatePlace,
    validation: Validation,
) -> Result<Place> {
    if update.is_empty() {
        debug!("Nothing to update for place {}", id);
    }
    let place = store
        .exclusive()
        .transaction(|conn| usecases::update_place(conn, id, update, validation))
        .map_err(|err| {
            warn!("Failed to update place {}: {}", id, err);
            err
        })?;
    info!("Updated place {}", place.id);
    Ok(place)
}

pub fn update_place_status(store: &Store, id: &str, status: VisitStatus) -> Result<Place> {
    let place = store
        .exclusive()
        .transaction(|conn| usecases::update_place_status(conn, id, status))
        .map_err(|err| {
            warn!("Failed to change status of place {}: {}", id, err);
            err
        })?;
    info!("Place {} is now {}", place.id, place.status.label());
    Ok(place)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn status_change_moves_place_between_catalog_lists() {
        let fixture = BackendFixture::new();
        let id = fixture.create_place("Serafina");
        let catalog = flows::derive_catalog(&fixture.store).unwrap();
        assert_eq!(1, catalog.to_visit.places.len());
        assert!(catalog.visited.places.is_empty());

        let place = flows::update_place_status(&fixture.store, id.as_str(), VisitStatus::Loved)
            .unwrap();
        assert_eq!(VisitStatus::Loved, place.status);

        let catalog = flows::derive_catalog(&fixture.store).unwrap();
        assert!(catalog.to_visit.places.is_empty());
        assert_eq!(1, catalog.visited.places.len());
        assert_eq!(1, catalog.favorites.places.len());
    }

    #[test]
    fn update_unknown_place() {
        let fixture = BackendFixture::new();
        let err = flows::update_place_status(&fixture.store, "unknown", VisitStatus::Liked)
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn update_fields() {
        let fixture = BackendFixture::new();
        let id = fixture.create_place("Serafina");
        let place = flows::update_place(
            &fixture.store,
            id.as_str(),
            usecases::UpdatePlace {
                title: Some("Serafina Seaport".into()),
                zip: Some("02210".into()),
                ..Default::default()
            },
            Validation::Enabled,
        )
        .unwrap();
        assert_eq!("Serafina Seaport", place.title);
        assert_eq!("02210", place.address.zip);
        assert_eq!(place, fixture.place(id.as_str()));
    }

    #[test]
    fn failed_validation_keeps_previous_fields() {
        let fixture = BackendFixture::new();
        let id = fixture.create_place("Serafina");
        assert!(flows::update_place(
            &fixture.store,
            id.as_str(),
            usecases::UpdatePlace {
                title: Some(" ".into()),
                ..Default::default()
            },
            Validation::Enabled,
        )
        .is_err());
        assert_eq!("Serafina", fixture.place(id.as_str()).title);
    }
}
