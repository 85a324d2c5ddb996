use super::prelude::*;
use crate::catalog::{CatalogKind, DerivedList};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileSource {
    Catalog(CatalogKind),
    List(Id),
}

/// Entry of the overview screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub source: TileSource,
    pub title: String,
    pub icon: String,
    pub color: Color,
    pub count: usize,
}

impl From<&DerivedList> for Tile {
    fn from(from: &DerivedList) -> Self {
        Self {
            source: TileSource::Catalog(from.kind),
            title: from.label().to_owned(),
            icon: from.icon().to_owned(),
            color: from.color().into(),
            count: from.places.len(),
        }
    }
}

impl From<&PlaceList> for Tile {
    fn from(from: &PlaceList) -> Self {
        Self {
            source: TileSource::List(from.id.clone()),
            title: from.title.clone(),
            icon: from.icon.clone(),
            color: from.color,
            count: from.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    /// The fixed catalog tiles in display order.
    pub catalog: Vec<Tile>,
    /// User lists in order of their creation.
    pub lists: Vec<Tile>,
}

pub fn overview<R>(repo: &R) -> Result<Overview>
where
    R: PlaceRepo + PlaceListRepo,
{
    let catalog = super::derive_catalog(repo)?
        .lists()
        .into_iter()
        .map(Tile::from)
        .collect();
    let lists = repo
        .all_place_lists()?
        .iter()
        .map(Tile::from)
        .collect();
    Ok(Overview { catalog, lists })
}

#[cfg(test)]
mod tests {
    use super::super::tests::MockDb;
    use super::*;
    use wandery_entities::builders::Builder;

    #[test]
    fn fixed_tiles_and_user_lists() {
        let db = MockDb::default();
        for (id, status) in [
            ("doughboy", VisitStatus::Liked),
            ("salty-pig", VisitStatus::Loved),
            ("serafina", VisitStatus::ToVisit),
        ] {
            db.create_place(Place::build().id(id).status(status).finish())
                .unwrap();
        }
        let northeast = PlaceList::build()
            .id("northeast")
            .title("Northeast")
            .icon("graduationcap.fill")
            .place_ids(vec!["doughboy", "salty-pig", "serafina"])
            .finish();
        let empty = PlaceList::build().id("empty").title("Empty").finish();
        db.create_place_list(northeast).unwrap();
        db.create_place_list(empty).unwrap();

        let overview = overview(&db).unwrap();
        let tiles: Vec<_> = overview
            .catalog
            .iter()
            .map(|t| (t.title.as_str(), t.count))
            .collect();
        assert_eq!(
            vec![
                ("All Places", 3),
                ("To Visit", 1),
                ("Visited", 2),
                ("Favorites", 1)
            ],
            tiles
        );
        assert_eq!(
            TileSource::Catalog(CatalogKind::Favorites),
            overview.catalog[3].source
        );
        assert_eq!(Color::Token(ColorToken::Red), overview.catalog[3].color);

        assert_eq!(2, overview.lists.len());
        assert_eq!(TileSource::List("northeast".into()), overview.lists[0].source);
        assert_eq!("graduationcap.fill", overview.lists[0].icon);
        assert_eq!(3, overview.lists[0].count);
        assert_eq!(0, overview.lists[1].count);
    }

    #[test]
    fn empty_store() {
        let db = MockDb::default();
        let overview = overview(&db).unwrap();
        assert_eq!(4, overview.catalog.len());
        assert!(overview.catalog.iter().all(|t| t.count == 0));
        assert!(overview.lists.is_empty());
    }
}
