mod errors;
mod local_storage;

pub use errors::*;
pub use local_storage::*;
