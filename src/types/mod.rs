mod errors;
mod types;

pub use errors::*;
pub use types::*;
