//! Member Models
//!
//! Data structures for member records and their derived subscription state.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::services::subscription;

/// Membership program tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProgramType {
    #[default]
    Normal,
    Vip,
}

impl ProgramType {
    /// Stored text representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgramType::Normal => "normal",
            ProgramType::Vip => "vip",
        }
    }

    /// Decode a stored value; anything unrecognized reads as Normal
    pub fn from_stored(value: &str) -> Self {
        match value {
            "vip" => ProgramType::Vip,
            _ => ProgramType::Normal,
        }
    }
}

/// Derived subscription state, never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Expired,
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubscriptionStatus::Active => write!(f, "active"),
            SubscriptionStatus::Expired => write!(f, "expired"),
        }
    }
}

/// A member record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub program_type: ProgramType,
    /// Diet plan opt-in
    pub diet: bool,
    /// Training plan opt-in
    pub training: bool,
    /// Personal coach opt-in
    pub coach: bool,
    /// Set once at creation
    pub registration_date: DateTime<Utc>,
    /// Creation or last renewal + 30 days
    pub expiration_date: DateTime<Utc>,
    /// Administrative status, independent of subscription expiry
    pub active: bool,
}

impl Member {
    /// Derived subscription state at the current instant
    pub fn subscription_status(&self) -> SubscriptionStatus {
        if subscription::is_subscription_active(&self.expiration_date) {
            SubscriptionStatus::Active
        } else {
            SubscriptionStatus::Expired
        }
    }
}

fn default_active() -> bool {
    true
}

/// Request to register a new member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberCreateRequest {
    pub name: String,
    pub phone: String,
    pub program_type: ProgramType,
    pub diet: bool,
    pub training: bool,
    pub coach: bool,
    /// New members are administratively active unless stated otherwise
    #[serde(default = "default_active")]
    pub active: bool,
}

/// Request to edit an existing member. The edit form submits every field;
/// dates are managed by the store and cannot be set from here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberUpdateRequest {
    pub name: String,
    pub phone: String,
    pub program_type: ProgramType,
    pub diet: bool,
    pub training: bool,
    pub coach: bool,
    pub active: bool,
}

/// Aggregate counts over the administrative active flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberStats {
    pub total: i64,
    pub active: i64,
    pub inactive: i64,
}
