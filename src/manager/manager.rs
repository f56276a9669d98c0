use std::cell::{
    Ref,
    RefCell
};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;

use serde::Deserialize;
use tracing::{debug, warn};

use super::managererror::ManagerError;


#[derive(Deserialize)]
struct NamedJsonObject {
    name: String
}


/// Registry of objects built from named JSON entries (`{"name": ..., ...}`).
pub trait IManager<V> where
    V: Clone {
    fn map(&self) -> Ref<'_, BTreeMap<String, V>>;

    /// Builds the named object without registering it. Fails on a name that
    /// is already registered.
    fn build_obj_from_json(&self, json_value: serde_json::Value) -> Result<(String, V), ManagerError>;

    fn insert_built(&self, built: Vec<(String, V)>);

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        self.map()
            .get(name)
            .cloned()
            .ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    fn contains(&self, name: &str) -> bool {
        self.map().contains_key(name)
    }

    /// Names in sorted order.
    fn names(&self) -> Vec<String> {
        self.map().keys().cloned().collect()
    }

    fn len(&self) -> usize {
        self.map().len()
    }

    fn is_empty(&self) -> bool {
        self.map().is_empty()
    }

    /// Builds every entry, stopping at the first failure. Nothing is registered.
    fn build_obj_from_json_vec(&self, json_vec: &[serde_json::Value]) -> Result<Vec<(String, V)>, ManagerError> {
        let mut built: Vec<(String, V)> = Vec::with_capacity(json_vec.len());
        for j in json_vec.iter() {
            let (name, v) = self.build_obj_from_json(j.clone())?;
            if built.iter().any(|(other, _)| *other == name) {
                return Err(ManagerError::DuplicateNameError(name));
            }
            built.push((name, v));
        }
        Ok(built)
    }

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        self.insert_obj_from_json_vec(std::slice::from_ref(&json_value))
    }

    /// All or nothing: the entries are registered only if every one builds.
    fn insert_obj_from_json_vec(&self, json_vec: &[serde_json::Value]) -> Result<(), ManagerError> {
        let built = self.build_obj_from_json_vec(json_vec)?;
        self.insert_built(built);
        Ok(())
    }

    /// Loads a file holding either one named object or an array of them.
    fn from_reader(&self, file_path: &str) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        if json_value.is_array() {
            let json_array: Vec<serde_json::Value> = ManagerError::from_json_or_json_parse_error(json_value)?;
            self.insert_obj_from_json_vec(&json_array)
        } else {
            self.insert_obj_from_json(json_value)
        }
    }
}


pub struct Manager<V> {
    map_cell: RefCell<BTreeMap<String, V>>,
    get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>
}


impl <V> Manager<V> where
    V: Clone {
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>) -> Manager<V> {
        Manager {map_cell: RefCell::new(BTreeMap::new()), get_obj_from_json}
    }
}

impl <V> IManager<V> for Manager<V> where
    V: Clone {
    fn map(&self) -> Ref<'_, BTreeMap<String, V>> {
        self.map_cell.borrow()
    }

    fn build_obj_from_json(&self, json_value: serde_json::Value) -> Result<(String, V), ManagerError> {
        let named_object: NamedJsonObject = ManagerError::from_json_or_json_parse_error(json_value.clone())?;
        let name = named_object.name;
        if self.contains(&name) {
            return Err(ManagerError::DuplicateNameError(name));
        }
        let v = (self.get_obj_from_json)(json_value)
            .inspect_err(|error| warn!("failed to build '{}': {}", name, error))?;
        Ok((name, v))
    }

    fn insert_built(&self, built: Vec<(String, V)>) {
        let mut map = self.map_cell.borrow_mut();
        for (name, v) in built {
            debug!("registered '{}'", name);
            map.insert(name, v);
        }
    }
}
