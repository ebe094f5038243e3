use std::collections::HashSet;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use super::{
    CatalogClient, CatalogEntry, CatalogError, CatalogSet, DatabaseCatalogEntry, RelationHandle,
    TableDescriptor, TableIdentifier, DEFAULT_DATABASE,
};
use crate::planner::LogicalOperator;
use crate::types::LogicalType;

#[derive(Debug, Default)]
struct Catalog {
    /// The catalog set holding the databases
    databases: CatalogSet,
    /// The catalog version, incremented whenever anything changes in the catalog
    catalog_version: usize,
}

impl Catalog {
    fn database(&self, name: &str) -> Result<&DatabaseCatalogEntry, CatalogError> {
        match self.databases.get_entry(name) {
            Ok(CatalogEntry::DatabaseCatalogEntry(entry)) => Ok(entry),
            Ok(_) => Err(CatalogError::CatalogEntryTypeNotMatch),
            Err(_) => Err(CatalogError::DatabaseNotExists(name.to_string())),
        }
    }

    fn database_mut(&mut self, name: &str) -> Result<&mut DatabaseCatalogEntry, CatalogError> {
        match self.databases.get_mut_entry(name) {
            Ok(CatalogEntry::DatabaseCatalogEntry(entry)) => Ok(entry),
            Ok(_) => Err(CatalogError::CatalogEntryTypeNotMatch),
            Err(_) => Err(CatalogError::DatabaseNotExists(name.to_string())),
        }
    }
}

/// An in-process catalog of databases, tables and views.
#[derive(Debug)]
pub struct MemoryCatalog {
    catalog: RwLock<Catalog>,
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        MemoryCatalog::new()
    }
}

impl MemoryCatalog {
    /// Creates a catalog holding only the default database.
    pub fn new() -> Self {
        let mut catalog = Catalog::default();
        catalog.catalog_version += 1;
        let entry = CatalogEntry::default_database_catalog_entry(
            catalog.catalog_version,
            DEFAULT_DATABASE.to_string(),
        );
        // a fresh set can not hold the name already
        let _ = catalog
            .databases
            .create_entry(DEFAULT_DATABASE.to_string(), entry);
        Self {
            catalog: RwLock::new(catalog),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Catalog>, CatalogError> {
        self.catalog
            .try_read()
            .map_err(|_| CatalogError::CatalogLocked)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Catalog>, CatalogError> {
        self.catalog
            .try_write()
            .map_err(|_| CatalogError::CatalogLocked)
    }

    pub fn catalog_version(&self) -> Result<usize, CatalogError> {
        Ok(self.read()?.catalog_version)
    }

    pub fn create_database(&self, name: String) -> Result<(), CatalogError> {
        let mut catalog = self.write()?;
        let oid = catalog.catalog_version + 1;
        let entry = CatalogEntry::default_database_catalog_entry(oid, name.clone());
        catalog.databases.create_entry(name, entry)?;
        catalog.catalog_version = oid;
        Ok(())
    }

    pub fn create_view(
        &self,
        identifier: &TableIdentifier,
        query: LogicalOperator,
    ) -> Result<(), CatalogError> {
        let mut catalog = self.write()?;
        let oid = catalog.catalog_version + 1;
        catalog
            .database_mut(&identifier.database)?
            .create_view(oid, identifier.table.clone(), query)?;
        catalog.catalog_version = oid;
        Ok(())
    }

    pub fn list_tables(&self, database: &str) -> Result<Vec<String>, CatalogError> {
        Ok(self.read()?.database(database)?.relation_names())
    }

    fn validate(descriptor: &TableDescriptor) -> Result<(), CatalogError> {
        let invalid = |reason: String| CatalogError::InvalidDescriptor {
            table: descriptor.identifier.to_string(),
            reason,
        };
        if descriptor.schema.is_empty() {
            return Err(invalid("table must have at least one column".to_string()));
        }
        let mut seen = HashSet::new();
        for column in descriptor.schema.iter() {
            if !seen.insert(column.name.to_lowercase()) {
                return Err(invalid(format!("duplicate column name: {}", column.name)));
            }
            LogicalType::from_metastore_type(&column.ty).map_err(|e| invalid(e.to_string()))?;
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogClient for MemoryCatalog {
    async fn table_exists(&self, identifier: &TableIdentifier) -> Result<bool, CatalogError> {
        let catalog = self.read()?;
        match catalog.database(&identifier.database) {
            Ok(database) => Ok(database.contains_relation(&identifier.table)),
            Err(CatalogError::DatabaseNotExists(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn create_table(&self, descriptor: TableDescriptor) -> Result<(), CatalogError> {
        Self::validate(&descriptor)?;
        let mut catalog = self.write()?;
        let oid = catalog.catalog_version + 1;
        let database = descriptor.identifier.database.clone();
        catalog
            .database_mut(&database)?
            .create_table(oid, descriptor)?;
        catalog.catalog_version = oid;
        Ok(())
    }

    async fn lookup_relation(
        &self,
        identifier: &TableIdentifier,
    ) -> Result<RelationHandle, CatalogError> {
        self.read()?
            .database(&identifier.database)?
            .get_relation(&identifier.table)
            .map_err(|e| match e {
                CatalogError::CatalogEntryNotExists(_) => {
                    CatalogError::CatalogEntryNotExists(identifier.to_string())
                }
                other => other,
            })
    }
}
