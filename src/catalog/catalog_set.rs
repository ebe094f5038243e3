use std::collections::HashMap;

use itertools::Itertools;

use super::{CatalogEntry, CatalogError};

/// The Catalog Set stores (key, value) map of a set of CatalogEntries
#[derive(Clone, Debug, Default)]
pub struct CatalogSet {
    /// The set of catalog entries, entry index to entry
    entries: HashMap<usize, CatalogEntry>,
    /// Mapping of string to catalog entry index
    mapping: HashMap<String, usize>,
    /// The current catalog entry index
    current_entry: usize,
}

impl CatalogSet {
    pub fn create_entry(&mut self, name: String, entry: CatalogEntry) -> Result<(), CatalogError> {
        if self.mapping.contains_key(&name) {
            return Err(CatalogError::CatalogEntryExists(name));
        }
        self.current_entry += 1;
        self.entries.insert(self.current_entry, entry);
        self.mapping.insert(name, self.current_entry);
        Ok(())
    }

    pub fn contains_entry(&self, name: &str) -> bool {
        self.mapping.contains_key(name)
    }

    pub fn get_entry(&self, name: &str) -> Result<&CatalogEntry, CatalogError> {
        self.mapping
            .get(name)
            .and_then(|index| self.entries.get(index))
            .ok_or_else(|| CatalogError::CatalogEntryNotExists(name.to_string()))
    }

    pub fn get_mut_entry(&mut self, name: &str) -> Result<&mut CatalogEntry, CatalogError> {
        match self.mapping.get(name) {
            Some(index) => self
                .entries
                .get_mut(index)
                .ok_or_else(|| CatalogError::CatalogEntryNotExists(name.to_string())),
            None => Err(CatalogError::CatalogEntryNotExists(name.to_string())),
        }
    }

    /// Entry names in ascending order.
    pub fn entry_names(&self) -> Vec<String> {
        self.mapping.keys().cloned().sorted().collect()
    }
}
