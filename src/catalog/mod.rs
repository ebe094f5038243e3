mod catalog_client;
mod catalog_set;
mod constants;
mod entry;
mod errors;
mod memory_catalog;
mod relation;
mod table_descriptor;

pub use catalog_client::*;
pub use catalog_set::*;
pub use constants::*;
pub use entry::*;
pub use errors::*;
pub use memory_catalog::*;
pub use relation::*;
pub use table_descriptor::*;
