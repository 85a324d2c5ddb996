use super::prelude::*;
use crate::viewport::ViewportPolicy;

#[derive(Debug, Clone, PartialEq)]
pub struct PlaceDetail {
    pub place: Place,
    pub status: StatusMetadata,
    pub viewport: Viewport,
}

impl PlaceDetail {
    pub fn address_text(&self) -> String {
        self.place.address.to_string()
    }
}

pub fn place_detail<R: PlaceRepo>(
    repo: &R,
    id: &str,
    policy: &ViewportPolicy,
) -> Result<PlaceDetail> {
    let place = repo.get_place(id)?;
    let status = place.status.metadata();
    let viewport = policy.place_viewport(&place);
    Ok(PlaceDetail {
        place,
        status,
        viewport,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaceListDetail {
    pub list: PlaceList,
    pub places: Vec<Place>,
    pub viewport: Viewport,
}

pub fn place_list_detail<R>(repo: &R, id: &str, policy: &ViewportPolicy) -> Result<PlaceListDetail>
where
    R: PlaceRepo + PlaceListRepo,
{
    let (list, places) = super::resolve_place_list(repo, id)?;
    let viewport = policy.list_viewport(&places);
    Ok(PlaceListDetail {
        list,
        places,
        viewport,
    })
}

#[cfg(test)]
mod tests {
    use super::super::tests::MockDb;
    use super::*;
    use crate::viewport::DEFAULT_FALLBACK_CENTER;
    use wandery_entities::builders::Builder;

    fn db() -> MockDb {
        let db = MockDb::default();
        let salty_pig = Place::build()
            .id("salty-pig")
            .title("The Salty Pig")
            .status(VisitStatus::Loved)
            .address(
                Address::build()
                    .street1("130 Dartmouth St")
                    .city("Boston")
                    .state("MA")
                    .zip("02116")
                    .pos(42.3468805, -71.0761207)
                    .finish(),
            )
            .finish();
        db.create_place(salty_pig).unwrap();
        db
    }

    #[test]
    fn detail_of_place() {
        let db = db();
        let detail = place_detail(&db, "salty-pig", &ViewportPolicy::default()).unwrap();
        assert_eq!("130 Dartmouth St\nBoston, MA 02116", detail.address_text());
        assert_eq!("Loved", detail.status.label);
        assert_eq!("heart.fill", detail.status.badge_icon());
        assert_eq!(
            MapPoint::from_lat_lng_deg(42.3468805, -71.0761207),
            detail.viewport.center
        );
        assert_eq!(MapSpan::square(0.02), detail.viewport.span);
    }

    #[test]
    fn detail_of_unknown_place() {
        let db = db();
        assert!(place_detail(&db, "unknown", &ViewportPolicy::default())
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn detail_of_list() {
        let db = db();
        db.create_place_list(
            PlaceList::build()
                .id("boston")
                .place_ids(vec!["salty-pig"])
                .finish(),
        )
        .unwrap();
        db.create_place_list(PlaceList::build().id("empty").finish())
            .unwrap();
        let policy = ViewportPolicy::default();

        let detail = place_list_detail(&db, "boston", &policy).unwrap();
        assert_eq!(1, detail.places.len());
        assert_eq!(detail.places[0].pos(), detail.viewport.center);
        assert_eq!(MapSpan::square(0.05), detail.viewport.span);

        let detail = place_list_detail(&db, "empty", &policy).unwrap();
        assert!(detail.places.is_empty());
        assert_eq!(DEFAULT_FALLBACK_CENTER, detail.viewport.center);
    }
}
