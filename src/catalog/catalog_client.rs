use async_trait::async_trait;

use super::{CatalogError, RelationHandle, TableDescriptor, TableIdentifier};

/// The metadata store operations a create-table-as-select depends on.
///
/// Each call is treated as blocking and all-or-nothing: cancellation, timeouts and
/// concurrent creation of the same identifier are the implementation's concern.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    async fn table_exists(&self, identifier: &TableIdentifier) -> Result<bool, CatalogError>;

    async fn create_table(&self, descriptor: TableDescriptor) -> Result<(), CatalogError>;

    async fn lookup_relation(
        &self,
        identifier: &TableIdentifier,
    ) -> Result<RelationHandle, CatalogError>;
}
