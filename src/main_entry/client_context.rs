use std::sync::Arc;

use arrow::record_batch::RecordBatch;
use log::info;

use super::{DatabaseError, DatabaseInstance};
use crate::catalog::{CatalogClient, RelationHandle, TableIdentifier};
use crate::execution::{CreateTableAsCommand, VolcanoExecutor};
use crate::planner::{CreateTableAsInfo, LogicalGet, LogicalOperator};

/// The ClientContext holds information relevant to the current client session during execution
pub struct ClientContext {
    /// The database that this client is connected to
    pub(crate) db: Arc<DatabaseInstance>,
}

impl ClientContext {
    pub fn new(db: Arc<DatabaseInstance>) -> Arc<Self> {
        Arc::new(Self { db })
    }

    fn executor(&self) -> VolcanoExecutor {
        VolcanoExecutor::new(self.db.storage.clone())
    }

    pub async fn create_table_as(&self, info: CreateTableAsInfo) -> Result<(), DatabaseError> {
        info!("{}", info);
        let command = CreateTableAsCommand::with_options(
            self.db.catalog.clone(),
            Arc::new(self.executor()),
            self.db.options.clone(),
        );
        command
            .execute(info.descriptor, &info.query, info.allow_existing)
            .await?;
        Ok(())
    }

    /// A plan reading the named table, or the query behind the named view.
    pub async fn table(
        &self,
        identifier: &TableIdentifier,
    ) -> Result<LogicalOperator, DatabaseError> {
        let plan = match self.db.catalog.lookup_relation(identifier).await? {
            RelationHandle::Metastore(relation) => {
                LogicalOperator::LogicalGet(LogicalGet::try_new(relation)?)
            }
            RelationHandle::View(view) => *view.query,
        };
        Ok(plan)
    }

    pub async fn query(&self, plan: LogicalOperator) -> Result<Vec<RecordBatch>, DatabaseError> {
        Ok(self.executor().try_execute(plan).await?)
    }
}
