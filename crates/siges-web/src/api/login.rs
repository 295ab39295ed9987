use axum::extract::State;
use axum::Json;

use siges_core::{Gender, LoginData, LoginRequest, LoginSuccess, SystemRole};

use crate::auth::{jwt, lockout, password};
use crate::error::AppError;
use crate::state::AppState;

/// The frontend pings this before rendering the login form.
pub async fn login_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Login Personal Administrativo" }))
}

/// Signs an administrative staff member in and returns a session token.
///
/// When several failures apply at once, the first check in the chain wins:
/// missing fields, then the role-wide lockout, then unknown username, then
/// inactive account, then a wrong password. Clients key their UI off this
/// order.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginSuccess>, AppError> {
    // Absent and empty are both "missing"; whitespace counts as provided.
    let username = match body.username {
        Some(u) if !u.is_empty() => u,
        _ => return Err(AppError::MissingParameters),
    };
    let supplied_password = match body.password {
        Some(p) if !p.is_empty() => p,
        _ => return Err(AppError::MissingParameters),
    };

    match state
        .store
        .role_lockout(SystemRole::PersonalAdministrativo)
        .await
    {
        Ok(Some(row)) => {
            let status = lockout::evaluate(row.unlock_timestamp.unwrap_or(0), lockout::unix_now());
            return Err(AppError::RoleBlocked {
                permanent: status.permanent,
                details: status.details,
            });
        }
        Ok(None) => {}
        Err(e) => {
            // A broken lockout table must not take logins down with it.
            tracing::error!("Role lockout check failed: {e:#}");
        }
    }

    let staff = state
        .store
        .admin_staff_by_username(&username)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !staff.active {
        return Err(AppError::UserInactive);
    }

    let hash = staff.password_hash.clone();
    let valid =
        tokio::task::spawn_blocking(move || password::verify_password(&hash, &supplied_password))
            .await
            .map_err(anyhow::Error::from)??;

    if !valid {
        tracing::warn!("Failed login attempt for user: {username}");
        return Err(AppError::InvalidCredentials);
    }

    tracing::info!("Password verified successfully for user: {username}");

    let (token, _expires_at) = jwt::create_token(
        &state.config.auth.jwt_secret,
        state.config.auth.token_ttl_hours,
        SystemRole::PersonalAdministrativo,
        &staff.dni,
        &staff.username,
    )?;

    let gender = Gender::from_code(&staff.gender).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown gender code {:?} on staff record {}",
            staff.gender,
            staff.dni
        )
    })?;

    Ok(Json(LoginSuccess::new(LoginData {
        last_names: staff.last_names,
        first_names: staff.first_names,
        role: SystemRole::PersonalAdministrativo,
        token,
        google_drive_photo_id: staff.google_drive_photo_id,
        gender,
    })))
}
