mod database_catalog_entry;
mod table_catalog_entry;
mod view_catalog_entry;

pub use database_catalog_entry::*;
use derive_new::new;
pub use table_catalog_entry::*;
pub use view_catalog_entry::*;

#[derive(Clone, Debug)]
pub enum CatalogEntry {
    DatabaseCatalogEntry(DatabaseCatalogEntry),
    TableCatalogEntry(TableCatalogEntry),
    ViewCatalogEntry(ViewCatalogEntry),
}

impl CatalogEntry {
    pub fn default_database_catalog_entry(oid: usize, database: String) -> Self {
        Self::DatabaseCatalogEntry(DatabaseCatalogEntry::new(oid, database))
    }
}

#[derive(new, Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntryBase {
    /// The object identifier of the entry
    pub(crate) oid: usize,
    /// The name of the entry
    pub(crate) name: String,
}
