use super::*;
use wandery_core::viewport::ViewportPolicy;

pub fn place_detail(
    store: &Store,
    id: &str,
    policy: &ViewportPolicy,
) -> Result<usecases::PlaceDetail> {
    Ok(usecases::place_detail(&store.shared(), id, policy)?)
}

pub fn place_list_detail(
    store: &Store,
    id: &str,
    policy: &ViewportPolicy,
) -> Result<usecases::PlaceListDetail> {
    Ok(usecases::place_list_detail(&store.shared(), id, policy)?)
}
