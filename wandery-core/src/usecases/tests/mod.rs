use super::prelude::*;

use std::{cell::RefCell, result};

type RepoResult<T> = result::Result<T, RepoError>;
use crate::repositories::Error as RepoError;

trait Key {
    fn key(&self) -> &str;
}

impl Key for Place {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Key for PlaceList {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

#[derive(Default)]
pub struct MockDb {
    pub places: RefCell<Vec<Place>>,
    pub lists: RefCell<Vec<PlaceList>>,
}

fn get<T: Clone + Key>(objects: &[T], id: &str) -> RepoResult<T> {
    match objects.iter().find(|x| x.key() == id) {
        Some(x) => Ok(x.clone()),
        None => Err(RepoError::NotFound),
    }
}

fn create<T: Clone + Key>(objects: &mut Vec<T>, e: T) -> RepoResult<()> {
    if objects.iter().any(|x| x.key() == e.key()) {
        return Err(RepoError::AlreadyExists);
    }
    objects.push(e);
    Ok(())
}

fn update<T: Clone + Key>(objects: &mut [T], e: &T) -> RepoResult<()> {
    if let Some(pos) = objects.iter().position(|x| x.key() == e.key()) {
        objects[pos] = e.clone();
    } else {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

impl PlaceRepo for MockDb {
    fn create_place(&self, place: Place) -> RepoResult<()> {
        create(&mut self.places.borrow_mut(), place)
    }
    fn update_place(&self, place: &Place) -> RepoResult<()> {
        update(&mut self.places.borrow_mut(), place)
    }
    fn get_place(&self, id: &str) -> RepoResult<Place> {
        get(&self.places.borrow(), id)
    }
    fn get_places(&self, ids: &[&str]) -> RepoResult<Vec<Place>> {
        let places = self.places.borrow();
        Ok(ids.iter().filter_map(|id| get(&places, id).ok()).collect())
    }
    fn all_places(&self) -> RepoResult<Vec<Place>> {
        Ok(self.places.borrow().clone())
    }
    fn count_places(&self) -> RepoResult<usize> {
        Ok(self.places.borrow().len())
    }
}

impl PlaceListRepo for MockDb {
    fn create_place_list(&self, list: PlaceList) -> RepoResult<()> {
        create(&mut self.lists.borrow_mut(), list)
    }
    fn update_place_list(&self, list: &PlaceList) -> RepoResult<()> {
        update(&mut self.lists.borrow_mut(), list)
    }
    fn get_place_list(&self, id: &str) -> RepoResult<PlaceList> {
        get(&self.lists.borrow(), id)
    }
    fn all_place_lists(&self) -> RepoResult<Vec<PlaceList>> {
        Ok(self.lists.borrow().clone())
    }
    fn count_place_lists(&self) -> RepoResult<usize> {
        Ok(self.lists.borrow().len())
    }
}
