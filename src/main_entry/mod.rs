mod client_context;
mod db;
mod errors;

pub use client_context::*;
pub use db::*;
pub use errors::*;
