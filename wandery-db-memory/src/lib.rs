//! Authoritative in-memory storage of places and lists.
//!
//! Every place is stored exactly once. Lists only reference
//! places by their id.

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::{cell::RefCell, collections::HashMap, sync::Arc};
use wandery_core::{entities::*, usecases as uc};

mod repo_impl;

#[derive(Debug, Clone)]
struct Table<T> {
    rows: HashMap<Id, T>,
    // Order of creation
    order: Vec<Id>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
            order: vec![],
        }
    }
}

impl<T: Clone> Table<T> {
    fn get(&self, id: &str) -> Option<&T> {
        self.rows.get(id)
    }

    fn all(&self) -> Vec<T> {
        self.order
            .iter()
            .filter_map(|id| self.rows.get(id))
            .cloned()
            .collect()
    }

    fn len(&self) -> usize {
        self.rows.len()
    }
}

#[derive(Debug, Clone, Default)]
struct Tables {
    places: Table<Place>,
    lists: Table<PlaceList>,
}

type SharedTables = Arc<RwLock<Tables>>;

pub struct DbReadOnly<'a> {
    tables: RwLockReadGuard<'a, Tables>,
}

pub struct DbReadWrite<'a> {
    tables: RwLockWriteGuard<'a, Tables>,
}

pub struct DbConnection<'a> {
    tables: RefCell<&'a mut Tables>,
}

impl<'a> DbConnection<'a> {
    fn new(tables: &'a mut Tables) -> Self {
        Self {
            tables: RefCell::new(tables),
        }
    }
}

impl DbReadWrite<'_> {
    /// Runs `f` and discards all of its modifications if it fails.
    pub fn transaction<T, F, E>(&mut self, f: F) -> Result<T, uc::Error>
    where
        F: FnOnce(&DbConnection) -> Result<T, E>,
        E: Into<uc::Error>,
    {
        let snapshot = self.tables.clone();
        let result = f(&DbConnection::new(&mut self.tables)).map_err(Into::into);
        if let Err(err) = &result {
            log::debug!("Rolling back transaction: {err}");
            *self.tables = snapshot;
        }
        result
    }
}

/// Handle of the store.
///
/// Cloned handles share the same data. Only a single writer
/// is admitted at a time, readers are served concurrently.
#[derive(Clone, Default)]
pub struct Store {
    tables: SharedTables,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared(&self) -> DbReadOnly<'_> {
        DbReadOnly {
            tables: self.tables.read(),
        }
    }

    pub fn exclusive(&self) -> DbReadWrite<'_> {
        DbReadWrite {
            tables: self.tables.write(),
        }
    }
}
