//! Commands
//!
//! The collaborator boundary: one handler per UI event, invoked by the
//! desktop shell. Handlers validate input, delegate to the services, and
//! pass store errors through unchanged.

pub mod dashboard;
pub mod members;

pub use dashboard::*;
pub use members::*;
