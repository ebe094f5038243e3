use super::CatalogEntryBase;
use crate::catalog::{
    ColumnDefinition, MetastoreRelation, StorageFormat, TableDescriptor, TableIdentifier,
};

#[derive(Clone, Debug)]
pub struct TableCatalogEntry {
    pub(crate) base: CatalogEntryBase,
    pub(crate) database_base: CatalogEntryBase,
    pub(crate) storage: StorageFormat,
    /// A list of columns that are part of this table
    pub(crate) columns: Vec<ColumnDefinition>,
}

impl TableCatalogEntry {
    pub fn new(oid: usize, database_base: CatalogEntryBase, descriptor: TableDescriptor) -> Self {
        Self {
            base: CatalogEntryBase::new(oid, descriptor.identifier.table),
            database_base,
            storage: descriptor.storage,
            columns: descriptor.schema,
        }
    }

    pub fn to_relation(&self) -> MetastoreRelation {
        MetastoreRelation::new(
            self.base.oid,
            TableIdentifier::new(self.database_base.name.clone(), self.base.name.clone()),
            self.storage.clone(),
            self.columns.clone(),
        )
    }
}
