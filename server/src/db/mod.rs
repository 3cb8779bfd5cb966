//! Database module for PostgreSQL persistence.

mod clients;
mod pool;

pub use clients::*;
pub use pool::*;
