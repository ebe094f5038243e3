use std::sync::Arc;

use log::{debug, info, warn};
use strum_macros::Display;

use super::{CtasOptions, ExecutorError, InsertExecutor, SchemaInferencer};
use crate::catalog::{CatalogClient, CatalogError, RelationHandle, TableDescriptor, TableIdentifier};
use crate::planner::LogicalOperator;
use crate::types::TypeError;

/// The catalog call a create-table-as-select was making when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CtasStage {
    #[strum(serialize = "existence check")]
    ExistenceCheck,
    #[strum(serialize = "registration")]
    Registration,
}

#[derive(thiserror::Error, Debug)]
pub enum CreateTableAsError {
    #[error("table {0} already exists")]
    AlreadyExists(TableIdentifier),
    #[error("catalog error during {stage} of {identifier}: {source}")]
    Catalog {
        identifier: TableIdentifier,
        stage: CtasStage,
        #[source]
        source: CatalogError,
    },
    #[error("catalog inconsistency: {identifier} was registered but {detail}")]
    CatalogInconsistency {
        identifier: TableIdentifier,
        detail: String,
    },
    #[error(
        "insert into {identifier} failed, the table is registered but may be empty or partially written: {source}"
    )]
    Execution {
        identifier: TableIdentifier,
        #[source]
        source: ExecutorError,
    },
    #[error("can not derive the schema of {identifier}: {source}")]
    TypeError {
        identifier: TableIdentifier,
        #[source]
        source: TypeError,
    },
}

/// Creates a table from a query's output columns, then fills it with the query's rows.
///
/// The table is registered before any row is written and nothing is rolled back when the
/// insert fails, so a failed insert leaves an empty (or partially written) table behind.
/// With `allow_existing` an existing table is left untouched: its schema is not compared
/// with the query and no rows are inserted.
pub struct CreateTableAsCommand {
    catalog: Arc<dyn CatalogClient>,
    executor: Arc<dyn InsertExecutor>,
    options: CtasOptions,
}

impl CreateTableAsCommand {
    pub fn new(catalog: Arc<dyn CatalogClient>, executor: Arc<dyn InsertExecutor>) -> Self {
        Self::with_options(catalog, executor, CtasOptions::default())
    }

    pub fn with_options(
        catalog: Arc<dyn CatalogClient>,
        executor: Arc<dyn InsertExecutor>,
        options: CtasOptions,
    ) -> Self {
        Self {
            catalog,
            executor,
            options,
        }
    }

    /// The descriptor registered for `query`: the caller's identity, its storage hints with
    /// defaults for the unset ones, and the schema inferred from the query output.
    pub fn complete_descriptor(
        &self,
        descriptor: TableDescriptor,
        query: &LogicalOperator,
    ) -> Result<TableDescriptor, TypeError> {
        let schema = SchemaInferencer::infer(query.output())?;
        Ok(TableDescriptor::new(
            descriptor.identifier,
            self.options.complete_storage(descriptor.storage),
            schema,
        ))
    }

    pub async fn execute(
        &self,
        descriptor: TableDescriptor,
        query: &LogicalOperator,
        allow_existing: bool,
    ) -> Result<(), CreateTableAsError> {
        let identifier = descriptor.identifier.clone();

        let exists = self
            .catalog
            .table_exists(&identifier)
            .await
            .map_err(|source| CreateTableAsError::Catalog {
                identifier: identifier.clone(),
                stage: CtasStage::ExistenceCheck,
                source,
            })?;
        debug!("{}: existence checked, exists: {}", identifier, exists);

        if exists {
            if allow_existing {
                info!("{}: table already exists, nothing to do", identifier);
                return Ok(());
            }
            return Err(CreateTableAsError::AlreadyExists(identifier));
        }

        let descriptor = self
            .complete_descriptor(descriptor, query)
            .map_err(|source| CreateTableAsError::TypeError {
                identifier: identifier.clone(),
                source,
            })?;
        debug!(
            "{}: schema resolved, {} columns",
            identifier,
            descriptor.schema.len()
        );

        self.catalog
            .create_table(descriptor)
            .await
            .map_err(|source| CreateTableAsError::Catalog {
                identifier: identifier.clone(),
                stage: CtasStage::Registration,
                source,
            })?;
        debug!("{}: table registered", identifier);

        let relation = match self.catalog.lookup_relation(&identifier).await {
            Ok(RelationHandle::Metastore(relation)) => relation,
            Ok(other) => {
                return Err(CreateTableAsError::CatalogInconsistency {
                    detail: format!("resolves to a {} relation", other.as_ref()),
                    identifier,
                })
            }
            Err(e) => {
                return Err(CreateTableAsError::CatalogInconsistency {
                    detail: format!("can not be resolved: {}", e),
                    identifier,
                })
            }
        };

        if let Err(source) = self.executor.insert_into(&relation, query, true).await {
            warn!(
                "{}: insert failed after the table was registered, table is left in place: {}",
                identifier, source
            );
            return Err(CreateTableAsError::Execution { identifier, source });
        }
        info!("{}: created and populated", identifier);
        Ok(())
    }
}
