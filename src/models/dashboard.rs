//! Dashboard Models
//!
//! Payload for the shell's periodic stats/clock refresh.

use serde::{Deserialize, Serialize};

use crate::models::member::MemberStats;

/// One dashboard poll: aggregate counts plus the formatted clock line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub stats: MemberStats,
    /// "weekday - YYYY/MM/DD - HH:MM:SS" in the display calendar
    pub clock: String,
}
