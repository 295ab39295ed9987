//! Role lockout evaluation.
//!
//! A row in the lockout table blocks every login for its role. Rows are
//! deleted when a lockout is lifted, so the unlock timestamp decides only
//! HOW the lockout is reported: a future timestamp is a temporary lockout
//! with a countdown, while a zero/past/absent timestamp means the row is
//! there to stay — an indefinite lockout.

use chrono::DateTime;

use siges_core::AuthBlockedDetails;

const PERMANENT_LABEL: &str = "Permanente";
const NO_DATE_LABEL: &str = "No definida";

/// Outcome of checking a lockout row against the current time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockoutStatus {
    pub permanent: bool,
    pub details: AuthBlockedDetails,
}

/// Evaluates a lockout row's unlock timestamp (UTC epoch seconds, `0` when
/// the column was NULL) against `now`.
pub fn evaluate(unlock_timestamp: i64, now: i64) -> LockoutStatus {
    let permanent = unlock_timestamp <= 0 || unlock_timestamp <= now;

    let (remaining_time, unlock_date) = if permanent {
        (PERMANENT_LABEL.to_string(), NO_DATE_LABEL.to_string())
    } else {
        (
            remaining_label(unlock_timestamp - now),
            format_unlock_date(unlock_timestamp),
        )
    };

    LockoutStatus {
        permanent,
        details: AuthBlockedDetails {
            current_time_utc: now,
            unlock_timestamp_utc: unlock_timestamp,
            remaining_time,
            unlock_date,
            permanent,
        },
    }
}

/// Current UTC time as epoch seconds.
pub fn unix_now() -> i64 {
    chrono::Utc::now().timestamp()
}

/// `"{h}h {m}m"`, hours unbounded (no day rollover: 25 hours is `"25h 0m"`).
fn remaining_label(seconds: i64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    format!("{hours}h {minutes}m")
}

/// Day/month order and 24-hour clock, as the es-ES frontend renders dates.
fn format_unlock_date(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|date| date.format("%d/%m/%Y, %H:%M").to_string())
        .unwrap_or_else(|| NO_DATE_LABEL.to_string())
}
