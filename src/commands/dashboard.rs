//! Dashboard Commands
//!
//! Read-only commands behind the shell's periodic stats/clock refresh.

use crate::models::dashboard::DashboardSnapshot;
use crate::models::member::MemberStats;
use crate::services::membership::MembershipService;
use crate::state::AppState;
use crate::utils::error::AppResult;
use crate::utils::jalali;

/// Aggregate member counts over the administrative flag
pub fn get_member_stats(state: &AppState) -> AppResult<MemberStats> {
    MembershipService::from_database(state.database()).member_stats()
}

/// One poll of the dashboard header: counts plus the Jalali clock line
pub fn get_dashboard(state: &AppState) -> AppResult<DashboardSnapshot> {
    let stats = get_member_stats(state)?;
    Ok(DashboardSnapshot {
        stats,
        clock: jalali::clock_line(),
    })
}
