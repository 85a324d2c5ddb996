pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{address_builder::*, place_builder::*, place_list_builder::*};

pub mod place_builder {

    use super::*;
    use crate::{address::*, geo::*, id::*, place::*, status::*};
    use std::collections::HashSet;

    #[derive(Debug)]
    pub struct PlaceBuild {
        place: Place,
    }

    impl PlaceBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.place.id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.place.title = title.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.place.description = desc.into();
            self
        }
        pub fn status(mut self, status: VisitStatus) -> Self {
            self.place.status = status;
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.place.address.pos = pos;
            self
        }
        pub fn address(mut self, address: Address) -> Self {
            self.place.address = address;
            self
        }
        pub fn list_ids(mut self, ids: Vec<&str>) -> Self {
            self.place.list_ids = ids.into_iter().map(Id::from).collect();
            self
        }
        pub fn finish(self) -> Place {
            self.place
        }
    }

    impl Builder for Place {
        type Build = PlaceBuild;
        fn build() -> PlaceBuild {
            PlaceBuild {
                place: Place {
                    id: Id::new(),
                    title: "".into(),
                    description: "".into(),
                    status: VisitStatus::default(),
                    address: Address::default(),
                    list_ids: HashSet::new(),
                },
            }
        }
    }
}

pub mod place_list_builder {

    use super::*;
    use crate::{color::*, id::*, place_list::*};

    #[derive(Debug)]
    pub struct PlaceListBuild {
        list: PlaceList,
    }

    impl PlaceListBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.list.id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.list.title = title.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.list.description = Some(desc.into());
            self
        }
        pub fn icon(mut self, icon: &str) -> Self {
            self.list.icon = icon.into();
            self
        }
        pub fn color(mut self, color: impl Into<Color>) -> Self {
            self.list.color = color.into();
            self
        }
        pub fn place_ids(mut self, ids: Vec<&str>) -> Self {
            self.list.place_ids = ids.into_iter().map(Id::from).collect();
            self
        }
        pub fn finish(self) -> PlaceList {
            self.list
        }
    }

    impl Builder for PlaceList {
        type Build = PlaceListBuild;
        fn build() -> Self::Build {
            PlaceListBuild {
                list: PlaceList::new("", "mappin.ellipse", ColorToken::Indigo),
            }
        }
    }
}

pub mod address_builder {

    use super::*;
    use crate::{address::*, geo::*};

    #[derive(Debug)]
    pub struct AddressBuild {
        addr: Address,
    }

    impl AddressBuild {
        pub fn street1(mut self, x: &str) -> Self {
            self.addr.street1 = x.into();
            self
        }
        pub fn street2(mut self, x: &str) -> Self {
            self.addr.street2 = x.into();
            self
        }
        pub fn city(mut self, x: &str) -> Self {
            self.addr.city = x.into();
            self
        }
        pub fn state(mut self, x: &str) -> Self {
            self.addr.state = x.into();
            self
        }
        pub fn zip(mut self, x: &str) -> Self {
            self.addr.zip = x.into();
            self
        }
        pub fn pos(mut self, lat: f64, lng: f64) -> Self {
            self.addr.pos = MapPoint::from_lat_lng_deg(lat, lng);
            self
        }
        pub fn finish(self) -> Address {
            self.addr
        }
    }

    impl Builder for Address {
        type Build = AddressBuild;
        fn build() -> Self::Build {
            AddressBuild {
                addr: Address::default(),
            }
        }
    }

    #[test]
    fn empty_address() {
        assert!(Address::default().is_empty());
        assert!(!Address::build().street1("x").finish().is_empty());
        assert!(!Address::build().street2("x").finish().is_empty());
        assert!(!Address::build().city("x").finish().is_empty());
        assert!(!Address::build().state("x").finish().is_empty());
        assert!(!Address::build().zip("x").finish().is_empty());
        assert!(Address::build().pos(42.0, -71.0).finish().is_empty());
    }
}
