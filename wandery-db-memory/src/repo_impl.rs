use super::*;
use anyhow::anyhow;
use wandery_core::repositories::*;

type Result<T> = std::result::Result<T, Error>;

trait Row: Clone {
    fn id(&self) -> &Id;
}

impl Row for Place {
    fn id(&self) -> &Id {
        &self.id
    }
}

impl Row for PlaceList {
    fn id(&self) -> &Id {
        &self.id
    }
}

fn get<T: Row>(table: &Table<T>, id: &str) -> Result<T> {
    table.get(id).cloned().ok_or(Error::NotFound)
}

fn create<T: Row>(table: &mut Table<T>, row: T) -> Result<()> {
    let id = row.id().clone();
    if table.rows.contains_key(&id) {
        return Err(Error::AlreadyExists);
    }
    table.rows.insert(id.clone(), row);
    table.order.push(id);
    Ok(())
}

fn update<T: Row>(table: &mut Table<T>, row: &T) -> Result<()> {
    match table.rows.get_mut(row.id()) {
        Some(stored) => {
            *stored = row.clone();
            Ok(())
        }
        None => Err(Error::NotFound),
    }
}

fn read_only() -> Error {
    Error::Other(anyhow!("Read-only access"))
}

fn get_places(tables: &Tables, ids: &[&str]) -> Vec<Place> {
    ids.iter()
        .filter_map(|id| tables.places.get(id))
        .cloned()
        .collect()
}

impl PlaceRepo for DbConnection<'_> {
    fn create_place(&self, place: Place) -> Result<()> {
        create(&mut self.tables.borrow_mut().places, place)
    }
    fn update_place(&self, place: &Place) -> Result<()> {
        update(&mut self.tables.borrow_mut().places, place)
    }
    fn get_place(&self, id: &str) -> Result<Place> {
        get(&self.tables.borrow().places, id)
    }
    fn get_places(&self, ids: &[&str]) -> Result<Vec<Place>> {
        Ok(get_places(&self.tables.borrow(), ids))
    }
    fn all_places(&self) -> Result<Vec<Place>> {
        Ok(self.tables.borrow().places.all())
    }
    fn count_places(&self) -> Result<usize> {
        Ok(self.tables.borrow().places.len())
    }
}

impl PlaceListRepo for DbConnection<'_> {
    fn create_place_list(&self, list: PlaceList) -> Result<()> {
        create(&mut self.tables.borrow_mut().lists, list)
    }
    fn update_place_list(&self, list: &PlaceList) -> Result<()> {
        update(&mut self.tables.borrow_mut().lists, list)
    }
    fn get_place_list(&self, id: &str) -> Result<PlaceList> {
        get(&self.tables.borrow().lists, id)
    }
    fn all_place_lists(&self) -> Result<Vec<PlaceList>> {
        Ok(self.tables.borrow().lists.all())
    }
    fn count_place_lists(&self) -> Result<usize> {
        Ok(self.tables.borrow().lists.len())
    }
}

impl PlaceRepo for DbReadOnly<'_> {
    fn create_place(&self, _: Place) -> Result<()> {
        Err(read_only())
    }
    fn update_place(&self, _: &Place) -> Result<()> {
        Err(read_only())
    }
    fn get_place(&self, id: &str) -> Result<Place> {
        get(&self.tables.places, id)
    }
    fn get_places(&self, ids: &[&str]) -> Result<Vec<Place>> {
        Ok(get_places(&self.tables, ids))
    }
    fn all_places(&self) -> Result<Vec<Place>> {
        Ok(self.tables.places.all())
    }
    fn count_places(&self) -> Result<usize> {
        Ok(self.tables.places.len())
    }
}

impl PlaceListRepo for DbReadOnly<'_> {
    fn create_place_list(&self, _: PlaceList) -> Result<()> {
        Err(read_only())
    }
    fn update_place_list(&self, _: &PlaceList) -> Result<()> {
        Err(read_only())
    }
    fn get_place_list(&self, id: &str) -> Result<PlaceList> {
        get(&self.tables.lists, id)
    }
    fn all_place_lists(&self) -> Result<Vec<PlaceList>> {
        Ok(self.tables.lists.all())
    }
    fn count_place_lists(&self) -> Result<usize> {
        Ok(self.tables.lists.len())
    }
}
