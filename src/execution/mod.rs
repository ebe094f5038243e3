mod create_table_as;
mod options;
mod schema_inference;
mod util;
mod volcano_executor;

use arrow::error::ArrowError;
use async_trait::async_trait;
pub use create_table_as::*;
pub use options::*;
pub use schema_inference::*;
pub use util::*;
pub use volcano_executor::*;

use crate::catalog::MetastoreRelation;
use crate::planner::LogicalOperator;
use crate::storage::StorageError;
use crate::types::TypeError;

/// Materializes the rows of a query into a table.
#[async_trait]
pub trait InsertExecutor: Send + Sync {
    /// Resolves only once every row of `source` has been written, or the write failed.
    async fn insert_into(
        &self,
        target: &MetastoreRelation,
        source: &LogicalOperator,
        overwrite: bool,
    ) -> Result<(), ExecutorError>;
}

#[derive(thiserror::Error, Debug)]
pub enum ExecutorError {
    #[error("storage error: {0}")]
    StorageError(
        #[source]
        #[from]
        StorageError,
    ),
    #[error("arrow error: {0}")]
    ArrowError(
        #[source]
        #[from]
        ArrowError,
    ),
    #[error("type error: {0}")]
    TypeError(
        #[source]
        #[from]
        TypeError,
    ),
    #[error("insert into {table} expects {expected} columns, query produces {actual}")]
    ColumnCountMismatch {
        table: String,
        expected: usize,
        actual: usize,
    },
    #[error("Executor internal error: {0}")]
    InternalError(String),
}
