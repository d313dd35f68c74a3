//! Integration Tests Module
//!
//! End-to-end tests for the gym management backend, driven through the
//! command layer and the real storage stack. Tests use the actual Database
//! service with in-memory SQLite, plus file-backed temp databases for the
//! migration scenarios.

// Member lifecycle tests (create, edit, renew, expire, delete, search)
mod membership_test;
