use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewPlaceList {
    /// A new id is generated if none is given.
    pub id: Option<Id>,
    pub title: String,
    pub description: Option<String>,
    pub icon: String,
    pub color: Color,
}

pub fn create_new_place_list<R: PlaceListRepo>(
    repo: &R,
    new_list: NewPlaceList,
    validation: Validation,
) -> Result<PlaceList> {
    let NewPlaceList {
        id,
        title,
        description,
        icon,
        color,
    } = new_list;
    let list = PlaceList {
        id: id.unwrap_or_else(Id::new),
        title,
        description,
        icon,
        color,
        place_ids: vec![],
    };
    validation.check(&list)?;
    if validation.is_enabled() {
        super::check_unique_list_title(repo, &list.title, None)?;
    }
    repo.create_place_list(list.clone())?;
    log::debug!("Created list {} ({})", list.id, list.title);
    Ok(list)
}
