//! Database module for SQLite connection, schema bootstrapping and user
//! queries.

mod pool;
mod schema;
mod users;

pub use pool::DatabasePool;
pub use schema::*;
