use crate::types::TypeError;

#[derive(thiserror::Error, Debug)]
pub enum PlannerError {
    #[error("type error: {0}")]
    TypeError(
        #[from]
        #[source]
        TypeError,
    ),
    #[error("column index {index} out of range, input has {len} columns")]
    ColumnIndexOutOfRange { index: usize, len: usize },
    #[error("column {0} has an unresolved type")]
    UnresolvedColumnType(String),
    #[error("values batch has {actual} columns, expected {expected}")]
    ColumnCountMismatch { expected: usize, actual: usize },
}
