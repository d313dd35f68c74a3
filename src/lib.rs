//! Gym Management — Rust Backend Library
//!
//! This library provides the membership core of the gym management desktop
//! application. It includes:
//! - Command handlers for the presentation layer
//! - The membership lifecycle service (30-day subscription windows,
//!   renewals, reactivation)
//! - Storage layer (pooled SQLite, ordered schema migrations, JSON config)
//! - Data models and utilities (error taxonomy, paths, Jalali display)

pub mod commands;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

// Re-export commonly used items from commands
pub use commands::{
    // Member commands
    add_member, delete_member, get_member, list_members, renew_membership, search_members,
    update_member,
    // Dashboard commands
    get_dashboard, get_member_stats,
};
// Re-export models and core helpers
pub use models::dashboard::DashboardSnapshot;
pub use models::member::{
    Member, MemberCreateRequest, MemberStats, MemberUpdateRequest, ProgramType, SubscriptionStatus,
};
pub use models::settings::{AppConfig, SettingsUpdate};
pub use services::subscription::is_subscription_active;
pub use state::AppState;
pub use utils::error::{AppError, AppResult};
