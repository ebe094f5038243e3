use arrow::error::ArrowError;

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("arrow error: {0}")]
    ArrowError(
        #[from]
        #[source]
        ArrowError,
    ),
    #[error("Storage locked, please retry")]
    StorageLocked,
}
