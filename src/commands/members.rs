//! Member Commands
//!
//! Handlers the desktop shell invokes per UI event. Required-field
//! validation happens here, before the store is touched; the store itself
//! never validates input.

use crate::models::member::{Member, MemberCreateRequest, MemberUpdateRequest};
use crate::services::membership::MembershipService;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};

fn validate_required_fields(name: &str, phone: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Member name is required"));
    }
    if phone.trim().is_empty() {
        return Err(AppError::validation("Member phone is required"));
    }
    Ok(())
}

/// Register a new member from the add dialog
pub fn add_member(state: &AppState, request: MemberCreateRequest) -> AppResult<Member> {
    validate_required_fields(&request.name, &request.phone)?;
    MembershipService::from_database(state.database()).create_member(request)
}

/// Apply the edit dialog to an existing member
pub fn update_member(
    state: &AppState,
    id: i64,
    request: MemberUpdateRequest,
) -> AppResult<Member> {
    validate_required_fields(&request.name, &request.phone)?;
    MembershipService::from_database(state.database()).update_member(id, request)
}

/// Renew the selected member's subscription
pub fn renew_membership(state: &AppState, id: i64) -> AppResult<Member> {
    MembershipService::from_database(state.database()).renew_membership(id)
}

/// Delete the selected member
pub fn delete_member(state: &AppState, id: i64) -> AppResult<()> {
    MembershipService::from_database(state.database()).delete_member(id)
}

/// Fetch one member for the profile dialog
pub fn get_member(state: &AppState, id: i64) -> AppResult<Member> {
    MembershipService::from_database(state.database())
        .get_member(id)?
        .ok_or_else(|| AppError::not_found(format!("Member not found: {}", id)))
}

/// All members for the main table
pub fn list_members(state: &AppState) -> AppResult<Vec<Member>> {
    MembershipService::from_database(state.database()).list_members()
}

/// Members matching the search box contents; an empty query lists everyone
pub fn search_members(state: &AppState, query: &str) -> AppResult<Vec<Member>> {
    MembershipService::from_database(state.database()).search_members(query)
}
