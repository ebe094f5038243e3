pub mod catalog;
pub mod execution;
pub mod main_entry;
pub mod planner;
pub mod storage;
pub mod types;
pub mod util;

pub use self::main_entry::{ClientContext, DatabaseError, DatabaseInstance};
