use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use siges_core::SystemRole;

/// Claims of a SIGES session token. `sub` is the staff member's DNI; the
/// role claim tells the consuming services which role the token was issued
/// for, so a staff token can never pass a check for another role's routes.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub username: String,
    pub role: SystemRole,
    pub iat: usize,
    pub exp: usize,
}

pub fn create_token(
    jwt_secret: &str,
    ttl_hours: u64,
    role: SystemRole,
    dni: &str,
    username: &str,
) -> anyhow::Result<(String, u64)> {
    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    let expires_at = now + ttl_hours * 3600;

    let claims = Claims {
        sub: dni.to_string(),
        username: username.to_string(),
        role,
        iat: now as usize,
        exp: expires_at as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )?;

    Ok((token, expires_at))
}

pub fn verify_token(jwt_secret: &str, token: &str) -> anyhow::Result<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_bytes()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "unit-test-secret-0123456789abcdef";

    #[test]
    fn created_token_verifies_and_keeps_the_claims() {
        let (token, expires_at) = create_token(
            SECRET,
            6,
            SystemRole::PersonalAdministrativo,
            "87654321",
            "jperez",
        )
        .unwrap();

        let claims = verify_token(SECRET, &token).unwrap();
        assert_eq!(claims.sub, "87654321");
        assert_eq!(claims.username, "jperez");
        assert_eq!(claims.role, SystemRole::PersonalAdministrativo);
        assert_eq!(claims.exp as u64, expires_at);
        assert_eq!(claims.exp - claims.iat, 6 * 3600);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let (token, _) = create_token(
            SECRET,
            6,
            SystemRole::PersonalAdministrativo,
            "87654321",
            "jperez",
        )
        .unwrap();

        assert!(verify_token("another-secret-another-secret!!", &token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs() as usize;
        // Well past the default validation leeway.
        let claims = Claims {
            sub: "87654321".to_string(),
            username: "jperez".to_string(),
            role: SystemRole::PersonalAdministrativo,
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert!(verify_token(SECRET, &token).is_err());
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(verify_token(SECRET, "not-a-jwt").is_err());
    }
}
