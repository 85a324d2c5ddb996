use super::prelude::*;

/// Changes of the list metadata. `None` leaves the field unchanged,
/// an empty description removes it.
#[derive(Debug, Clone, Default)]
pub struct UpdatePlaceList {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub color: Option<Color>,
}

pub fn update_place_list<R: PlaceListRepo>(
    repo: &R,
    id: &str,
    update: UpdatePlaceList,
    validation: Validation,
) -> Result<PlaceList> {
    let UpdatePlaceList {
        title,
        description,
        icon,
        color,
    } = update;
    let mut list = repo.get_place_list(id)?;
    if let Some(title) = title {
        list.title = title;
    }
    if let Some(description) = description {
        list.description = Some(description).filter(|d| !d.is_empty());
    }
    if let Some(icon) = icon {
        list.icon = icon;
    }
    if let Some(color) = color {
        list.color = color;
    }
    validation.check(&list)?;
    if validation.is_enabled() {
        super::check_unique_list_title(repo, &list.title, Some(&list.id))?;
    }
    repo.update_place_list(&list)?;
    Ok(list)
}
