//! Subscription Lifecycle Helpers
//!
//! The single definition of the 30-day billing window and the derived
//! subscription status. Every consumer (store, models, commands, UI)
//! delegates here; the status is never stored.

use chrono::{DateTime, Duration, Utc};

/// Length of one billing period in days
pub const MEMBERSHIP_DAYS: i64 = 30;

/// One billing period
pub fn membership_period() -> Duration {
    Duration::days(MEMBERSHIP_DAYS)
}

/// Expiration instant for a period starting at `reference`
pub fn expiration_from(reference: DateTime<Utc>) -> DateTime<Utc> {
    reference + membership_period()
}

/// Whether a subscription expiring at `expiration` is active at `now`.
/// The boundary instant itself counts as expired.
pub fn is_subscription_active_at(expiration: &DateTime<Utc>, now: &DateTime<Utc>) -> bool {
    now < expiration
}

/// Whether a subscription expiring at `expiration` is currently active
pub fn is_subscription_active(expiration: &DateTime<Utc>) -> bool {
    is_subscription_active_at(expiration, &Utc::now())
}
