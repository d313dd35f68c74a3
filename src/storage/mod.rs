//! Storage Layer
//!
//! Handles all data persistence: the SQLite database and the JSON config.

pub mod config;
pub mod database;
pub mod migrations;

pub use config::*;
pub use database::*;
