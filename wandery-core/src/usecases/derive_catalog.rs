use super::prelude::*;
use crate::catalog::Catalog;

/// Derives the catalog from all places in order of their creation.
pub fn derive_catalog<R: PlaceRepo>(repo: &R) -> Result<Catalog> {
    let places = repo.all_places()?;
    let catalog = Catalog::derive(&places);
    log::debug!(
        "Derived catalog: {}",
        catalog
            .lists()
            .iter()
            .map(|l| format!("{} = {}", l.label(), l.places.len()))
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(catalog)
}

/// Loads a list together with its places in list order.
pub fn resolve_place_list<R>(repo: &R, id: &str) -> Result<(PlaceList, Vec<Place>)>
where
    R: PlaceRepo + PlaceListRepo,
{
    let list = repo.get_place_list(id)?;
    let ids: Vec<_> = list.place_ids.iter().map(Id::as_str).collect();
    let places = repo.get_places(&ids)?;
    if places.len() < ids.len() {
        log::warn!(
            "{} place(s) of list {} could not be resolved",
            ids.len() - places.len(),
            list.id
        );
    }
    Ok((list, places))
}

#[cfg(test)]
mod tests {
    use super::super::tests::MockDb;
    use super::*;
    use wandery_entities::builders::Builder;

    fn db() -> MockDb {
        let db = MockDb::default();
        for (id, status) in [
            ("doughboy", VisitStatus::Liked),
            ("salty-pig", VisitStatus::Loved),
            ("serafina", VisitStatus::ToVisit),
        ] {
            db.create_place(Place::build().id(id).status(status).finish())
                .unwrap();
        }
        db
    }

    fn ids(places: &[Place]) -> Vec<&str> {
        places.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn derive_sample_catalog() {
        let db = db();
        let catalog = derive_catalog(&db).unwrap();
        assert_eq!(
            vec!["doughboy", "salty-pig", "serafina"],
            ids(&catalog.all_places.places)
        );
        assert_eq!(vec!["serafina"], ids(&catalog.to_visit.places));
        assert_eq!(vec!["doughboy", "salty-pig"], ids(&catalog.visited.places));
        assert_eq!(vec!["salty-pig"], ids(&catalog.favorites.places));
    }

    #[test]
    fn derivation_reflects_status_changes() {
        let db = db();
        super::super::update_place_status(&db, "serafina", VisitStatus::Loved).unwrap();
        let catalog = derive_catalog(&db).unwrap();
        assert!(catalog.to_visit.places.is_empty());
        assert_eq!(vec!["salty-pig", "serafina"], ids(&catalog.favorites.places));
    }

    #[test]
    fn resolve_list_in_list_order() {
        let db = db();
        let list = PlaceList::build()
            .id("northeast")
            .place_ids(vec!["serafina", "unknown", "doughboy", "serafina"])
            .finish();
        db.create_place_list(list).unwrap();
        let (list, places) = resolve_place_list(&db, "northeast").unwrap();
        assert_eq!(4, list.len());
        assert_eq!(vec!["serafina", "doughboy", "serafina"], ids(&places));
    }

    #[test]
    fn edits_are_visible_in_every_list() {
        let db = db();
        for id in ["a", "b"] {
            let list = PlaceList::build().id(id).place_ids(vec!["doughboy"]).finish();
            db.create_place_list(list).unwrap();
        }
        super::super::update_place_status(&db, "doughboy", VisitStatus::Visited).unwrap();
        let (_, a) = resolve_place_list(&db, "a").unwrap();
        let (_, b) = resolve_place_list(&db, "b").unwrap();
        assert_eq!(VisitStatus::Visited, a[0].status);
        assert_eq!(a, b);
    }
}
