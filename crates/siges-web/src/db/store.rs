//! Account and lockout lookups.

use async_trait::async_trait;
use sqlx::PgPool;

use siges_core::SystemRole;

use crate::db::models::{AdminStaffRow, RoleLockoutRow};

/// The two queries the login flow needs, behind a seam so handlers treat
/// the database as a black box (and tests can substitute one).
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Fetches an administrative staff account by its exact username.
    async fn admin_staff_by_username(
        &self,
        username: &str,
    ) -> anyhow::Result<Option<AdminStaffRow>>;

    /// Fetches the active lockout row for a role, if any.
    async fn role_lockout(&self, role: SystemRole) -> anyhow::Result<Option<RoleLockoutRow>>;
}

/// Postgres-backed [`AccountStore`] over the platform's existing tables.
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn admin_staff_by_username(
        &self,
        username: &str,
    ) -> anyhow::Result<Option<AdminStaffRow>> {
        let row = sqlx::query_as::<_, AdminStaffRow>(
            r#"
            SELECT "DNI_Personal_Administrativo" AS dni,
                   "Nombre_Usuario"              AS username,
                   "Contraseña"                  AS password_hash,
                   "Nombres"                     AS first_names,
                   "Apellidos"                   AS last_names,
                   "Google_Drive_Foto_ID"        AS google_drive_photo_id,
                   "Genero"                      AS gender,
                   "Estado"                      AS active
            FROM "T_Personal_Administrativo"
            WHERE "Nombre_Usuario" = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn role_lockout(&self, role: SystemRole) -> anyhow::Result<Option<RoleLockoutRow>> {
        let row = sqlx::query_as::<_, RoleLockoutRow>(
            r#"
            SELECT "Timestamp_Desbloqueo" AS unlock_timestamp
            FROM "T_Bloqueo_Roles"
            WHERE "Rol" = $1 AND "Bloqueo_Total" = TRUE
            LIMIT 1
            "#,
        )
        .bind(role.code())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}
