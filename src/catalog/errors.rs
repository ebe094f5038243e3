#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("CatalogEntry: {0} already exists")]
    CatalogEntryExists(String),
    #[error("CatalogEntry: {0} not exists")]
    CatalogEntryNotExists(String),
    #[error("Database: {0} not exists")]
    DatabaseNotExists(String),
    #[error("CatalogEntry type not match")]
    CatalogEntryTypeNotMatch,
    #[error("invalid table identifier: {0}")]
    InvalidIdentifier(String),
    #[error("invalid table descriptor for {table}: {reason}")]
    InvalidDescriptor { table: String, reason: String },
    #[error("Catalog locked, please retry")]
    CatalogLocked,
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}
