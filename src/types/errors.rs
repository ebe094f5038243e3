#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("type {0} can not be stored in the metastore")]
    UnsupportedMetastoreType(String),
    #[error("unknown metastore type: {0}")]
    UnknownMetastoreType(String),
    #[error("type internal error: {0}")]
    InternalError(String),
}
