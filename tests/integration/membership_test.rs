//! Membership Lifecycle Integration Tests
//!
//! Full member flows through the command layer over a real in-memory
//! SQLite database: registration, editing, renewal, expiry, deletion,
//! and search.

use chrono::{Duration, Utc};
use rusqlite::params;

use gym_management::commands::dashboard::get_member_stats;
use gym_management::commands::members::{
    add_member, delete_member, get_member, list_members, renew_membership, search_members,
    update_member,
};
use gym_management::models::member::{
    MemberCreateRequest, MemberUpdateRequest, ProgramType, SubscriptionStatus,
};
use gym_management::services::subscription;
use gym_management::state::AppState;
use gym_management::utils::error::AppError;

// ============================================================================
// Helpers
// ============================================================================

fn create_test_state() -> AppState {
    AppState::new_in_memory().expect("Failed to create in-memory test state")
}

fn create_request(name: &str, phone: &str) -> MemberCreateRequest {
    MemberCreateRequest {
        name: name.to_string(),
        phone: phone.to_string(),
        program_type: ProgramType::Normal,
        diet: false,
        training: false,
        coach: false,
        active: true,
    }
}

fn update_request_from(member: &gym_management::models::member::Member) -> MemberUpdateRequest {
    MemberUpdateRequest {
        name: member.name.clone(),
        phone: member.phone.clone(),
        program_type: member.program_type,
        diet: member.diet,
        training: member.training,
        coach: member.coach,
        active: member.active,
    }
}

/// Rewrite a member's expiration directly in storage, simulating the
/// passage of time past the end of the subscription window.
fn force_expiration(state: &AppState, id: i64, days_ago: i64) {
    let conn = state.database().get_connection().unwrap();
    let past = (Utc::now() - Duration::days(days_ago)).to_rfc3339();
    conn.execute(
        "UPDATE users SET expiration_date = ?1 WHERE id = ?2",
        params![past, id],
    )
    .unwrap();
}

// ============================================================================
// Registration
// ============================================================================

#[test]
fn test_vip_registration_scenario() {
    let state = create_test_state();
    let before = get_member_stats(&state).unwrap();

    let created = add_member(
        &state,
        MemberCreateRequest {
            name: "Ali".to_string(),
            phone: "0912000".to_string(),
            program_type: ProgramType::Vip,
            diet: true,
            training: false,
            coach: false,
            active: true,
        },
    )
    .unwrap();

    let after = get_member_stats(&state).unwrap();
    assert_eq!(after.total, before.total + 1);
    assert_eq!(after.active, before.active + 1);

    let fetched = get_member(&state, created.id).unwrap();
    assert_eq!(fetched.program_type, ProgramType::Vip);
    assert!(fetched.diet);
    assert!(!fetched.training);
    assert!(!fetched.coach);
    assert_eq!(
        fetched.expiration_date - fetched.registration_date,
        Duration::days(30)
    );
}

#[test]
fn test_new_member_subscription_is_active() {
    let state = create_test_state();
    let member = add_member(&state, create_request("Ali", "0912000")).unwrap();
    assert!(subscription::is_subscription_active(&member.expiration_date));
    assert_eq!(member.subscription_status(), SubscriptionStatus::Active);
}

// ============================================================================
// Expiry and renewal
// ============================================================================

#[test]
fn test_expired_member_reads_expired_until_renewed() {
    let state = create_test_state();
    let member = add_member(&state, create_request("Ali", "0912000")).unwrap();

    force_expiration(&state, member.id, 1);

    let expired = get_member(&state, member.id).unwrap();
    assert!(!subscription::is_subscription_active(&expired.expiration_date));
    assert_eq!(expired.subscription_status(), SubscriptionStatus::Expired);
    assert_eq!(expired.subscription_status().to_string(), "expired");
    // administrative flag is untouched by subscription expiry
    assert!(expired.active);

    let renewed = renew_membership(&state, member.id).unwrap();
    assert_eq!(renewed.subscription_status(), SubscriptionStatus::Active);
}

#[test]
fn test_renew_reactivates_inactive_expired_member() {
    let state = create_test_state();
    let member = add_member(&state, create_request("Ali", "0912000")).unwrap();

    let mut request = update_request_from(&member);
    request.active = false;
    update_member(&state, member.id, request).unwrap();
    force_expiration(&state, member.id, 10);

    let renewed = renew_membership(&state, member.id).unwrap();
    assert!(renewed.active);
    assert!(subscription::is_subscription_active(&renewed.expiration_date));
}

// ============================================================================
// Editing
// ============================================================================

#[test]
fn test_edit_fields_without_touching_subscription() {
    let state = create_test_state();
    let member = add_member(&state, create_request("Ali", "0912000")).unwrap();

    let mut request = update_request_from(&member);
    request.name = "Ali Reza".to_string();
    request.program_type = ProgramType::Vip;
    request.coach = true;
    let updated = update_member(&state, member.id, request).unwrap();

    assert_eq!(updated.name, "Ali Reza");
    assert_eq!(updated.program_type, ProgramType::Vip);
    assert!(updated.coach);
    assert_eq!(updated.registration_date, member.registration_date);
    assert_eq!(updated.expiration_date, member.expiration_date);
}

#[test]
fn test_reactivation_through_edit_opens_fresh_window() {
    let state = create_test_state();
    let member = add_member(&state, create_request("Ali", "0912000")).unwrap();

    let mut request = update_request_from(&member);
    request.active = false;
    let deactivated = update_member(&state, member.id, request).unwrap();
    force_expiration(&state, member.id, 3);

    let mut request = update_request_from(&deactivated);
    request.active = true;
    let reactivated = update_member(&state, member.id, request).unwrap();

    assert!(reactivated.active);
    let expected = subscription::expiration_from(Utc::now());
    let drift = (reactivated.expiration_date - expected).num_seconds().abs();
    assert!(drift <= 5, "reactivation resets the window from now");
}

#[test]
fn test_update_missing_member_surfaces_not_found() {
    let state = create_test_state();
    let member = add_member(&state, create_request("Ali", "0912000")).unwrap();
    let request = update_request_from(&member);

    let result = update_member(&state, member.id + 100, request);
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[test]
fn test_blank_fields_rejected_at_the_boundary() {
    let state = create_test_state();
    let member = add_member(&state, create_request("Ali", "0912000")).unwrap();

    let mut request = update_request_from(&member);
    request.name = String::new();
    let result = update_member(&state, member.id, request);
    assert!(matches!(result, Err(AppError::Validation(_))));

    // the record is untouched
    let fetched = get_member(&state, member.id).unwrap();
    assert_eq!(fetched.name, "Ali");
}

// ============================================================================
// Deletion and search
// ============================================================================

#[test]
fn test_delete_removes_record_entirely() {
    let state = create_test_state();
    let member = add_member(&state, create_request("Ali", "0912000")).unwrap();

    delete_member(&state, member.id).unwrap();
    assert!(matches!(
        get_member(&state, member.id),
        Err(AppError::NotFound(_))
    ));
    // deleting again is still a success
    delete_member(&state, member.id).unwrap();
}

#[test]
fn test_search_returns_matching_subset() {
    let state = create_test_state();
    add_member(&state, create_request("Ali", "0912000")).unwrap();
    add_member(&state, create_request("Sara", "0935111")).unwrap();
    add_member(&state, create_request("Reza", "0912777")).unwrap();

    let all = list_members(&state).unwrap();
    let hits = search_members(&state, "0912").unwrap();
    assert_eq!(hits.len(), 2);
    assert!(hits.len() <= all.len());
    assert!(hits
        .iter()
        .all(|m| m.name.contains("0912") || m.phone.contains("0912")));

    let empty_query = search_members(&state, "").unwrap();
    assert_eq!(empty_query.len(), all.len());

    let no_hits = search_members(&state, "nonexistent").unwrap();
    assert!(no_hits.is_empty());
}

#[test]
fn test_stats_always_balance() {
    let state = create_test_state();
    for i in 0..5 {
        let mut request = create_request(&format!("Member{}", i), &format!("0912{:03}", i));
        request.active = i % 2 == 0;
        add_member(&state, request).unwrap();
    }

    let stats = get_member_stats(&state).unwrap();
    assert_eq!(stats.total, 5);
    assert_eq!(stats.active, 3);
    assert_eq!(stats.inactive, 2);
    assert_eq!(stats.total, stats.active + stats.inactive);
    assert_eq!(stats.total as usize, list_members(&state).unwrap().len());
}
