//! Data Models
//!
//! Contains all data structures used throughout the application.

pub mod dashboard;
pub mod member;
pub mod settings;

pub use dashboard::*;
pub use member::*;
pub use settings::*;
