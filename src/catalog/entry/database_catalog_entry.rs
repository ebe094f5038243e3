use super::{CatalogEntry, CatalogEntryBase, TableCatalogEntry, ViewCatalogEntry};
use crate::catalog::{CatalogError, CatalogSet, RelationHandle, TableDescriptor};
use crate::planner::LogicalOperator;

/// A database owns one namespace shared by its tables and views.
#[derive(Clone, Debug)]
pub struct DatabaseCatalogEntry {
    base: CatalogEntryBase,
    relations: CatalogSet,
}

impl DatabaseCatalogEntry {
    pub fn new(oid: usize, database: String) -> Self {
        Self {
            base: CatalogEntryBase::new(oid, database),
            relations: CatalogSet::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.base.name
    }

    pub fn contains_relation(&self, name: &str) -> bool {
        self.relations.contains_entry(name)
    }

    pub fn create_table(
        &mut self,
        oid: usize,
        descriptor: TableDescriptor,
    ) -> Result<(), CatalogError> {
        let table = descriptor.identifier.table.clone();
        let entry = CatalogEntry::TableCatalogEntry(TableCatalogEntry::new(
            oid,
            self.base.clone(),
            descriptor,
        ));
        self.relations.create_entry(table, entry)
    }

    pub fn create_view(
        &mut self,
        oid: usize,
        view: String,
        query: LogicalOperator,
    ) -> Result<(), CatalogError> {
        let entry = CatalogEntry::ViewCatalogEntry(ViewCatalogEntry::new(
            CatalogEntryBase::new(oid, view.clone()),
            self.base.clone(),
            query,
        ));
        self.relations.create_entry(view, entry)
    }

    pub fn get_relation(&self, name: &str) -> Result<RelationHandle, CatalogError> {
        match self.relations.get_entry(name)? {
            CatalogEntry::TableCatalogEntry(e) => Ok(RelationHandle::Metastore(e.to_relation())),
            CatalogEntry::ViewCatalogEntry(e) => Ok(RelationHandle::View(e.to_relation())),
            CatalogEntry::DatabaseCatalogEntry(_) => Err(CatalogError::CatalogEntryTypeNotMatch),
        }
    }

    pub fn relation_names(&self) -> Vec<String> {
        self.relations.entry_names()
    }
}
