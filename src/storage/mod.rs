//! Storage layer for the netball stats tracker
//!
//! This module wraps a single SQLite connection and is organized into
//! logical components:
//! - `connection`: Connection lifecycle and generic execute/fetch operations
//! - `record`: Field-named rows returned by ad-hoc queries
//! - `schema`: Table creation, teardown and introspection
//! - `seed`: Sample tournament data
//! - `models`: Typed entity records
//! - `queries`: Typed CRUD operations per entity

pub mod connection;
pub mod models;
pub mod queries;
pub mod record;
pub mod schema;
pub mod seed;


// Re-export the main types and database struct for easy access
pub use connection::DatabaseManager;
pub use models::*;
pub use record::Record;
pub use schema::TABLES;
