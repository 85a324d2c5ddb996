pub mod prelude {
    pub use wandery_core::{
        entities::*,
        repositories::{Error as RepoError, *},
        usecases,
        util::validate::Validation,
    };
    pub use wandery_db_memory::Store;

    pub use crate::{error::AppError, prelude as flows};

    pub fn new_place_list(title: &str) -> usecases::NewPlaceList {
        usecases::NewPlaceList {
            id: None,
            title: title.into(),
            description: None,
            icon: "mappin.ellipse".into(),
            color: Color::default(),
        }
    }

    pub fn new_place(title: &str) -> usecases::NewPlace {
        usecases::NewPlace {
            title: title.into(),
            street1: "102 Water St".into(),
            city: "Boston".into(),
            state: "MA".into(),
            zip: "02109".into(),
            lat: 42.357,
            lng: -71.056,
            ..Default::default()
        }
    }

    pub struct BackendFixture {
        pub store: Store,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            Self {
                store: Store::new(),
            }
        }

        pub fn create_place_list(&self, title: &str) -> Id {
            flows::create_place_list(&self.store, new_place_list(title), Validation::Enabled)
                .unwrap()
                .id
        }

        pub fn create_place(&self, title: &str) -> Id {
            flows::create_place(&self.store, new_place(title), Validation::Enabled)
                .unwrap()
                .id
        }

        pub fn place(&self, id: &str) -> Place {
            self.store.shared().get_place(id).unwrap()
        }

        pub fn place_list(&self, id: &str) -> PlaceList {
            self.store.shared().get_place_list(id).unwrap()
        }
    }
}
