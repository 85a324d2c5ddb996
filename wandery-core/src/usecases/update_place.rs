use super::prelude::*;

/// Changes of a place. `None` leaves the field unchanged.
#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct UpdatePlace {
    pub title       : Option<String>,
    pub description : Option<String>,
    pub status      : Option<VisitStatus>,
    pub street1     : Option<String>,
    pub street2     : Option<String>,
    pub city        : Option<String>,
    pub state       : Option<String>,
    pub zip         : Option<String>,
    pub pos         : Option<MapPoint>,
}

impl UpdatePlace {
    pub fn is_empty(&self) -> bool {
        let Self {
            title,
            description,
            status,
            street1,
            street2,
            city,
            state,
            zip,
            pos,
        } = self;
        title.is_none()
            && description.is_none()
            && status.is_none()
            && street1.is_none()
            && street2.is_none()
            && city.is_none()
            && state.is_none()
            && zip.is_none()
            && pos.is_none()
    }

    fn apply_to(self, place: &mut Place) {
        let Self {
            title,
            description,
            status,
            street1,
            street2,
            city,
            state,
            zip,
            pos,
        } = self;
        let addr = &mut place.address;
        if let Some(x) = title {
            place.title = x;
        }
        if let Some(x) = description {
            place.description = x;
        }
        if let Some(x) = status {
            place.status = x;
        }
        if let Some(x) = street1 {
            addr.street1 = x;
        }
        if let Some(x) = street2 {
            addr.street2 = x;
        }
        if let Some(x) = city {
            addr.city = x;
        }
        if let Some(x) = state {
            addr.state = x;
        }
        if let Some(x) = zip {
            addr.zip = x;
        }
        if let Some(x) = pos {
            addr.pos = x;
        }
    }
}

pub fn update_place<R: PlaceRepo>(
    repo: &R,
    id: &str,
    update: UpdatePlace,
    validation: Validation,
) -> Result<Place> {
    let mut place = repo.get_place(id)?;
    update.apply_to(&mut place);
    validation.check(&place)?;
    repo.update_place(&place)?;
    Ok(place)
}

pub fn update_place_status<R: PlaceRepo>(repo: &R, id: &str, status: VisitStatus) -> Result<Place> {
    let mut place = repo.get_place(id)?;
    if place.status != status {
        log::debug!(
            "Changing status of place {} from {} to {}",
            place.id,
            place.status,
            status
        );
        place.status = status;
        repo.update_place(&place)?;
    }
    Ok(place)
}
