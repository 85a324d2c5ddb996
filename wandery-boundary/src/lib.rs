use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use conv::IncompleteCoordinate;

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "extra-derive"),
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum VisitStatus {
    Unmarked,
    ToVisit,
    Visited,
    Liked,
    Loved,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "extra-derive"),
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "camelCase")]
pub enum ColorToken {
    Secondary,
    Orange,
    DarkGreen,
    Mint,
    Red,
    Indigo,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, Copy, PartialEq))]
pub struct Rgba {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub opacity: f32,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, Copy, PartialEq))]
#[serde(untagged)]
pub enum Color {
    Token(ColorToken),
    Rgba(Rgba),
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, Copy, PartialEq))]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
pub struct Address {
    pub street1 : String,
    pub street2 : String,
    pub city    : String,
    pub state   : String,
    pub zip     : String,
    pub lat     : f64,
    pub lng     : f64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
pub struct Place {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: VisitStatus,
    pub address: Address,
    pub list_ids: Vec<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
pub struct PlaceList {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub icon: String,
    pub color: Color,
    pub place_ids: Vec<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
pub struct StatusMetadata {
    pub status: VisitStatus,
    pub label: String,
    pub color: ColorToken,
    pub icon: String,
    pub filled_icon: String,
    /// A divider follows this entry in the status menu.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub divider_after: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, Copy, PartialEq))]
pub struct Viewport {
    pub center: Coordinate,
    pub lat_delta: f64,
    pub lng_delta: f64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "extra-derive"),
    derive(Debug, Clone, Copy, PartialEq, Eq)
)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogKind {
    AllPlaces,
    ToVisit,
    Visited,
    Favorites,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
pub struct Tile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<CatalogKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,
    pub title: String,
    pub icon: String,
    pub color: Color,
    pub count: usize,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
pub struct Overview {
    pub catalog: Vec<Tile>,
    pub lists: Vec<Tile>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
pub struct DerivedList {
    pub kind: CatalogKind,
    pub title: String,
    pub icon: String,
    pub color: ColorToken,
    pub places: Vec<Place>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
pub struct PlaceDetail {
    pub place: Place,
    pub address_text: String,
    pub status: StatusMetadata,
    pub viewport: Viewport,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
pub struct PlaceListDetail {
    pub list: PlaceList,
    pub places: Vec<Place>,
    pub viewport: Viewport,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
pub struct NewPlaceList {
    #[serde(default)]
    pub id          : Option<String>,
    pub title       : String,
    #[serde(default)]
    pub description : Option<String>,
    #[serde(default)]
    pub icon        : Option<String>,
    #[serde(default)]
    pub color       : Option<Color>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
pub struct NewPlace {
    #[serde(default)]
    pub id          : Option<String>,
    pub title       : String,
    #[serde(default)]
    pub description : String,
    #[serde(default)]
    pub status      : Option<VisitStatus>,
    #[serde(default)]
    pub street1     : String,
    #[serde(default)]
    pub street2     : String,
    #[serde(default)]
    pub city        : String,
    #[serde(default)]
    pub state       : String,
    #[serde(default)]
    pub zip         : String,
    #[serde(default)]
    pub lat         : Option<f64>,
    #[serde(default)]
    pub lng         : Option<f64>,
    #[serde(default)]
    pub list_id     : Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
#[serde(default)]
pub struct UpdatePlace {
    pub title       : Option<String>,
    pub description : Option<String>,
    pub status      : Option<VisitStatus>,
    pub street1     : Option<String>,
    pub street2     : Option<String>,
    pub city        : Option<String>,
    pub state       : Option<String>,
    pub zip         : Option<String>,
    pub lat         : Option<f64>,
    pub lng         : Option<f64>,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
#[serde(default)]
pub struct UpdatePlaceList {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub color: Option<Color>,
}

/// A single operation of a command script.
#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum Command {
    CreateList(NewPlaceList),
    CreatePlace(NewPlace),
    UpdatePlaceStatus {
        id: String,
        status: VisitStatus,
    },
    UpdatePlaceFields {
        id: String,
        #[serde(flatten)]
        fields: UpdatePlace,
    },
    UpdateListMetadata {
        id: String,
        #[serde(flatten)]
        fields: UpdatePlaceList,
    },
    AddPlaceToList {
        list_id: String,
        place_id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_commands() {
        let json = r#"[
            {"op": "create-list", "title": "Food", "color": "mint"},
            {"op": "create-place", "id": "x", "title": "X", "lat": 42.0, "lng": -71.0, "list_id": "food"},
            {"op": "update-place-status", "id": "x", "status": "loved"},
            {"op": "update-place-fields", "id": "x", "zip": "02116"},
            {"op": "update-list-metadata", "id": "food", "color": {"red": 1.0, "green": 0.5, "blue": 0.0, "opacity": 1.0}},
            {"op": "add-place-to-list", "list_id": "food", "place_id": "x"}
        ]"#;
        let commands: Vec<Command> = serde_json::from_str(json).unwrap();
        assert_eq!(6, commands.len());
        assert!(matches!(
            &commands[0],
            Command::CreateList(NewPlaceList {
                color: Some(Color::Token(ColorToken::Mint)),
                icon: None,
                ..
            })
        ));
        assert!(matches!(
            &commands[2],
            Command::UpdatePlaceStatus {
                status: VisitStatus::Loved,
                ..
            }
        ));
        match &commands[3] {
            Command::UpdatePlaceFields { id, fields } => {
                assert_eq!("x", id);
                assert_eq!(Some("02116"), fields.zip.as_deref());
                assert_eq!(None, fields.title);
            }
            _ => unreachable!(),
        }
        assert!(matches!(
            &commands[4],
            Command::UpdateListMetadata {
                fields: UpdatePlaceList {
                    color: Some(Color::Rgba(_)),
                    ..
                },
                ..
            }
        ));
    }

    #[test]
    fn deserialize_create_place_without_coordinate() {
        let json = r#"{"op":"create-place","title":"Serafina","street1":"237 Newbury St","city":"Boston","state":"MA","zip":"02116"}"#;
        match serde_json::from_str::<Command>(json).unwrap() {
            Command::CreatePlace(new_place) => {
                assert_eq!("Serafina", new_place.title);
                assert_eq!("02116", new_place.zip);
                assert_eq!(None, new_place.lat);
                assert_eq!(None, new_place.lng);
                assert_eq!(None, new_place.status);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn reject_unknown_status() {
        let json = r#"{"op": "update-place-status", "id": "x", "status": "favorite"}"#;
        assert!(serde_json::from_str::<Command>(json).is_err());
    }

    #[test]
    fn serialize_tile() {
        let tile = Tile {
            catalog: Some(CatalogKind::ToVisit),
            list_id: None,
            title: "To Visit".into(),
            icon: "map.fill".into(),
            color: Color::Token(ColorToken::Orange),
            count: 1,
        };
        assert_eq!(
            r#"{"catalog":"to-visit","title":"To Visit","icon":"map.fill","color":"orange","count":1}"#,
            serde_json::to_string(&tile).unwrap()
        );
    }
}
