//! Initial contents of a fresh store.

use anyhow::Result;
use wandery_application::prelude as flows;
use wandery_core::{
    entities::*,
    usecases::{NewPlace, NewPlaceList},
    util::validate::Validation,
};
use wandery_db_memory::Store;

pub const NORTHEAST_LIST_ID: &str = "northeast";

#[rustfmt::skip]
const PLACES: [(&str, &str, &str, VisitStatus, &str, &str, f64, f64); 3] = [
    (
        "doughboy", "Doughboy Doughnuts",
        "Doughnuts, drinks, and sandwiches. Nearby Rock Spot.",
        VisitStatus::Liked, "220 Dorchester Avenue", "02127", 42.340110, -71.056780,
    ),
    (
        "salty-pig", "The Salty Pig",
        "Great atmosphere. Everything was delicious, but better for meat eaters than vegetarians.",
        VisitStatus::Loved, "130 Dartmouth St", "02116", 42.3468805, -71.0761207,
    ),
    (
        "serafina", "Serafina",
        "Hits the spot for pasta and very affordable for a place that serves sit-down dinner on Newbury.",
        VisitStatus::ToVisit, "237 Newbury St", "02116", 42.349910, -71.081990,
    ),
];

pub fn seed(store: &Store) -> Result<()> {
    flows::create_place_list(
        store,
        NewPlaceList {
            id: Some(NORTHEAST_LIST_ID.into()),
            title: "Northeast".into(),
            description: Some("Places to visit while I live in Boston".into()),
            icon: "graduationcap.fill".into(),
            color: Rgba::new(0.941, 0.439, 0.365, 1.0).into(),
        },
        Validation::Disabled,
    )?;
    for (id, title, description, status, street1, zip, lat, lng) in PLACES {
        flows::create_place(
            store,
            NewPlace {
                id: Some(id.into()),
                title: title.into(),
                description: description.into(),
                status,
                street1: street1.into(),
                city: "Boston".into(),
                state: "MA".into(),
                zip: zip.into(),
                lat,
                lng,
                list_id: Some(NORTHEAST_LIST_ID.into()),
                ..Default::default()
            },
            Validation::Disabled,
        )?;
    }
    log::debug!("Seeded {} sample places", PLACES.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wandery_core::catalog::CatalogKind;

    fn seeded() -> Store {
        let store = Store::new();
        seed(&store).unwrap();
        store
    }

    fn titles(places: &[Place]) -> Vec<&str> {
        places.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn northeast_list_holds_all_samples() {
        let store = seeded();
        let (list, places) = flows::resolve_place_list(&store, NORTHEAST_LIST_ID).unwrap();
        assert_eq!("Northeast", list.title);
        assert_eq!(Color::Rgba(Rgba::new(0.941, 0.439, 0.365, 1.0)), list.color);
        assert_eq!(
            vec!["Doughboy Doughnuts", "The Salty Pig", "Serafina"],
            titles(&places)
        );
        assert!(places.iter().all(|p| p.is_member_of(&list.id)));
    }

    #[test]
    fn derived_catalog_of_samples() {
        let store = seeded();
        let catalog = flows::derive_catalog(&store).unwrap();
        assert_eq!(3, catalog.all_places.places.len());
        assert_eq!(vec!["Serafina"], titles(&catalog.to_visit.places));
        assert_eq!(
            vec!["Doughboy Doughnuts", "The Salty Pig"],
            titles(&catalog.visited.places)
        );
        assert_eq!(vec!["The Salty Pig"], titles(&catalog.favorites.places));
    }

    #[test]
    fn overview_of_samples() {
        let store = seeded();
        let overview = flows::overview(&store).unwrap();
        let counts: Vec<_> = overview.catalog.iter().map(|t| t.count).collect();
        assert_eq!(vec![3, 1, 2, 1], counts);
        assert_eq!(
            vec![
                CatalogKind::AllPlaces,
                CatalogKind::ToVisit,
                CatalogKind::Visited,
                CatalogKind::Favorites
            ],
            overview
                .catalog
                .iter()
                .filter_map(|t| match t.source {
                    wandery_core::usecases::TileSource::Catalog(kind) => Some(kind),
                    _ => None,
                })
                .collect::<Vec<_>>()
        );
        assert_eq!(1, overview.lists.len());
        assert_eq!("Northeast", overview.lists[0].title);
        assert_eq!(3, overview.lists[0].count);
    }

    #[test]
    fn sample_address_text() {
        let store = seeded();
        let detail = flows::place_detail(
            &store,
            "doughboy",
            &wandery_core::viewport::ViewportPolicy::default(),
        )
        .unwrap();
        assert_eq!(
            "220 Dorchester Avenue\nBoston, MA 02127",
            detail.address_text()
        );
    }
}
