mod create_info;
mod errors;
mod operator;

pub use create_info::*;
pub use errors::*;
pub use operator::*;
