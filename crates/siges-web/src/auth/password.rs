use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Checks `password` against a stored argon2 hash. A mismatch is `Ok(false)`;
/// a stored value that isn't a valid hash string is an error, since it means
/// the account row is corrupt rather than the caller being wrong.
pub fn verify_password(hash: &str, password: &str) -> anyhow::Result<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| anyhow::anyhow!("Invalid password hash: {e}"))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Hashes a password for storage in the `Contraseña` column. Used by the
/// `hash_password` provisioning binary.
pub fn hash_password(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {e}"))?;

    Ok(hash.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trips() {
        let hash = hash_password("s3creta!").unwrap();

        assert!(verify_password(&hash, "s3creta!").unwrap());
        assert!(!verify_password(&hash, "otra-cosa").unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        let first = hash_password("s3creta!").unwrap();
        let second = hash_password("s3creta!").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn corrupt_stored_hash_is_an_error() {
        assert!(verify_password("definitely-not-a-phc-string", "x").is_err());
    }
}
