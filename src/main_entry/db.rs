use std::sync::Arc;

use crate::catalog::MemoryCatalog;
use crate::execution::CtasOptions;
use crate::storage::LocalStorage;

/// Owns the catalog and the table data of one database.
#[derive(Default)]
pub struct DatabaseInstance {
    pub(crate) catalog: Arc<MemoryCatalog>,
    pub(crate) storage: Arc<LocalStorage>,
    pub(crate) options: CtasOptions,
}

impl DatabaseInstance {
    pub fn with_options(options: CtasOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn catalog(&self) -> &MemoryCatalog {
        &self.catalog
    }

    pub fn storage(&self) -> &LocalStorage {
        &self.storage
    }
}
