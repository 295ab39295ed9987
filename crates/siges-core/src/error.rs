//! Error payloads shared by every SIGES endpoint.

use serde::{Deserialize, Serialize};

/// Machine-readable code carried in the `errorType` field.
///
/// Clients branch on these, never on the human-readable `message`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A required request field is absent or empty.
    MissingParameters,
    /// The whole role is administratively locked out.
    RoleBlocked,
    /// Unknown username and wrong password share this code; responses never
    /// say which usernames exist.
    InvalidCredentials,
    /// The account exists but is deactivated.
    UserInactive,
    /// Anything the server could not handle.
    UnknownError,
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "errorType")]
    pub error_type: ErrorCode,
    /// Structured context for codes that carry one (e.g. [`AuthBlockedDetails`]
    /// under `ROLE_BLOCKED`). Omitted from the JSON when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error_type: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error_type,
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Context attached to a `ROLE_BLOCKED` response.
///
/// Timestamps are UTC epoch seconds; the two display strings are
/// pre-formatted by the server so every client renders the same thing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthBlockedDetails {
    #[serde(rename = "tiempoActualUTC")]
    pub current_time_utc: i64,
    #[serde(rename = "timestampDesbloqueoUTC")]
    pub unlock_timestamp_utc: i64,
    /// `"{h}h {m}m"` for temporary lockouts, `"Permanente"` otherwise.
    #[serde(rename = "tiempoRestante")]
    pub remaining_time: String,
    /// `dd/mm/yyyy, HH:MM` for temporary lockouts, `"No definida"` otherwise.
    #[serde(rename = "fechaDesbloqueo")]
    pub unlock_date: String,
    #[serde(rename = "esBloqueoPermanente")]
    pub permanent: bool,
}
