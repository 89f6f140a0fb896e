//! Storage layer for the soccer league roster manager
//!
//! League state is kept as three JSON snapshots in one data directory,
//! organized into logical components:
//! - `models`: Versioned record types for players, teams and the waiting list
//! - `schema`: File layout, snapshot loading and atomic saving

pub mod models;
pub mod schema;


// Re-export the main types and store struct for easy access
pub use models::*;
pub use schema::{default_data_dir, SnapshotStore};
