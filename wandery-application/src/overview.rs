use super::*;
use wandery_core::catalog::Catalog;

pub fn derive_catalog(store: &Store) -> Result<Catalog> {
    Ok(usecases::derive_catalog(&store.shared())?)
}

pub fn overview(store: &Store) -> Result<usecases::Overview> {
    let overview = usecases::overview(&store.shared())?;
    debug!(
        "Overview with {} catalog and {} user lists",
        overview.catalog.len(),
        overview.lists.len()
    );
    Ok(overview)
}
