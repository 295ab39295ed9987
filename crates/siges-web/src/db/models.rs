//! Row types returned by the account store.
//!
//! Field names are the query aliases; the platform's Spanish column names
//! stay in the SQL (see `store.rs`).

use sqlx::FromRow;

/// An administrative staff account, restricted to the columns the login
/// flow needs.
#[derive(Debug, Clone, FromRow)]
pub struct AdminStaffRow {
    pub dni: String,
    pub username: String,
    pub password_hash: String,
    pub first_names: String,
    pub last_names: String,
    pub google_drive_photo_id: Option<String>,
    /// Raw `Genero` code; parsed at the response boundary.
    pub gender: String,
    /// `Estado` — false means the account is deactivated.
    pub active: bool,
}

/// An active role-level lockout.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct RoleLockoutRow {
    /// `Timestamp_Desbloqueo`, UTC epoch seconds. NULL (or zero, or a past
    /// instant) marks the lockout as indefinite.
    pub unlock_timestamp: Option<i64>,
}
