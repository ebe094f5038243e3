use crate::catalog::CatalogError;
use crate::execution::{CreateTableAsError, ExecutorError};
use crate::planner::PlannerError;

#[derive(thiserror::Error, Debug)]
pub enum DatabaseError {
    #[error("catalog error: {0}")]
    CatalogError(
        #[source]
        #[from]
        CatalogError,
    ),
    #[error("planner error: {0}")]
    PlannerError(
        #[source]
        #[from]
        PlannerError,
    ),
    #[error("executor error: {0}")]
    ExecutorError(
        #[source]
        #[from]
        ExecutorError,
    ),
    #[error("create table as select error: {0}")]
    CreateTableAsError(
        #[source]
        #[from]
        CreateTableAsError,
    ),
}
