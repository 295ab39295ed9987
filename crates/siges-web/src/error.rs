use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use siges_core::{AuthBlockedDetails, ErrorCode, ErrorResponse};

/// Everything a login handler can fail with, mapped onto the platform's
/// error contract (`success: false`, `message`, `errorType`, `details?`).
#[derive(Debug)]
pub enum AppError {
    /// Username or password absent/empty in the request body.
    MissingParameters,
    /// The whole role is locked out; carries the evaluated lockout context.
    RoleBlocked {
        permanent: bool,
        details: AuthBlockedDetails,
    },
    /// Unknown username or wrong password.
    InvalidCredentials,
    /// The account exists but `Estado` is false.
    UserInactive,
    /// Anything else. Logged server-side, never echoed to the client.
    Internal(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::MissingParameters => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(
                    ErrorCode::MissingParameters,
                    "El nombre de usuario y la contraseña son obligatorios",
                ),
            ),
            AppError::RoleBlocked { permanent, details } => {
                let message = if permanent {
                    "El acceso para personal administrativo está permanentemente bloqueado"
                } else {
                    "El acceso para personal administrativo está temporalmente bloqueado"
                };
                let details =
                    serde_json::to_value(&details).unwrap_or(serde_json::Value::Null);
                (
                    StatusCode::FORBIDDEN,
                    ErrorResponse::new(ErrorCode::RoleBlocked, message).with_details(details),
                )
            }
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::new(ErrorCode::InvalidCredentials, "Credenciales inválidas"),
            ),
            AppError::UserInactive => (
                StatusCode::FORBIDDEN,
                ErrorResponse::new(
                    ErrorCode::UserInactive,
                    "Tu cuenta está inactiva. Contacta al administrador.",
                ),
            ),
            AppError::Internal(err) => {
                // Log the real error server-side, return a generic message.
                tracing::error!("Internal error: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(
                        ErrorCode::UnknownError,
                        "Error en el servidor, por favor intente más tarde",
                    ),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn missing_parameters_is_a_400() {
        let response = AppError::MissingParameters.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["errorType"], "MISSING_PARAMETERS");
        assert_eq!(
            json["message"],
            "El nombre de usuario y la contraseña son obligatorios"
        );
        assert!(json.get("details").is_none());
    }

    #[tokio::test]
    async fn role_blocked_carries_details_and_picks_the_message() {
        let details = AuthBlockedDetails {
            current_time_utc: 10,
            unlock_timestamp_utc: 0,
            remaining_time: "Permanente".to_string(),
            unlock_date: "No definida".to_string(),
            permanent: true,
        };
        let response = AppError::RoleBlocked {
            permanent: true,
            details,
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let json = body_json(response).await;
        assert_eq!(json["errorType"], "ROLE_BLOCKED");
        assert_eq!(
            json["message"],
            "El acceso para personal administrativo está permanentemente bloqueado"
        );
        assert_eq!(json["details"]["esBloqueoPermanente"], true);
        assert_eq!(json["details"]["tiempoRestante"], "Permanente");
    }

    #[tokio::test]
    async fn internal_errors_stay_generic() {
        let response = AppError::Internal(anyhow::anyhow!("pool exhausted")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["errorType"], "UNKNOWN_ERROR");
        assert_eq!(
            json["message"],
            "Error en el servidor, por favor intente más tarde"
        );
        // The underlying error must never reach the client.
        assert!(json.get("details").is_none());
        assert!(!json["message"].as_str().unwrap().contains("pool"));
    }
}
