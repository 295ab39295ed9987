//! Request and response bodies of the role login endpoints.

use serde::{Deserialize, Serialize};

use crate::gender::Gender;
use crate::role::SystemRole;

/// Credentials submitted to a login endpoint.
///
/// Both fields deserialize as optional so that an incomplete body still
/// reaches the handler, which owns the `MISSING_PARAMETERS` response; a
/// framework-level rejection would bypass the API's error contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "Nombre_Usuario", default)]
    pub username: Option<String>,
    #[serde(rename = "Contraseña", default)]
    pub password: Option<String>,
}

/// Body of a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginSuccess {
    pub success: bool,
    pub message: String,
    pub data: LoginData,
}

impl LoginSuccess {
    pub fn new(data: LoginData) -> Self {
        Self {
            success: true,
            message: "Inicio de sesión exitoso".to_string(),
            data,
        }
    }
}

/// The signed-in user as the frontend displays it, plus the session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginData {
    #[serde(rename = "Apellidos")]
    pub last_names: String,
    #[serde(rename = "Nombres")]
    pub first_names: String,
    #[serde(rename = "Rol")]
    pub role: SystemRole,
    pub token: String,
    /// Profile photo reference; the column is nullable and the frontend
    /// expects the key either way, so `None` serializes as `null`.
    #[serde(rename = "Google_Drive_Foto_ID")]
    pub google_drive_photo_id: Option<String>,
    #[serde(rename = "Genero")]
    pub gender: Gender,
}
