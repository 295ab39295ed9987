use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    #[serde(default)]
    pub tls: TlsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub jwt_secret: String,
    #[serde(default = "default_token_ttl_hours")]
    pub token_ttl_hours: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_login_rpm")]
    pub login_requests_per_minute: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TlsConfig {
    pub cert_path: Option<String>,
    pub key_path: Option<String>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout_secs(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            token_ttl_hours: default_token_ttl_hours(),
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            login_requests_per_minute: default_login_rpm(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    "0.0.0.0:3000".parse().unwrap()
}

fn default_max_connections() -> u32 {
    10
}
fn default_acquire_timeout_secs() -> u64 {
    30
}
fn default_token_ttl_hours() -> u64 {
    24
}
fn default_login_rpm() -> u32 {
    5
}

impl ServerConfig {
    pub fn load() -> anyhow::Result<Self> {
        let config_path = std::env::var("SIGES_CONFIG").map(PathBuf::from).ok();

        let mut config = if let Some(path) = config_path {
            let contents = std::fs::read_to_string(&path)?;
            toml::from_str(&contents)?
        } else {
            ServerConfig {
                bind_addr: default_bind_addr(),
                database: DatabaseConfig::default(),
                auth: AuthConfig::default(),
                rate_limit: RateLimitConfig::default(),
                tls: TlsConfig::default(),
            }
        };

        if let Ok(addr) = std::env::var("SIGES_BIND_ADDR") {
            config.bind_addr = addr.parse()?;
        }

        if let Ok(url) = std::env::var("SIGES_DATABASE_URL") {
            config.database.url = url;
        } else if let Ok(url) = std::env::var("DATABASE_URL") {
            config.database.url = url;
        }
        if config.database.url.is_empty() {
            anyhow::bail!(
                "No database configured. Set SIGES_DATABASE_URL (or DATABASE_URL) \
                 or the [database] url in the config file."
            );
        }

        if let Ok(secret) = std::env::var("SIGES_JWT_SECRET") {
            config.auth.jwt_secret = secret;
        }
        // Tokens must verify across restarts and sibling services, so a
        // generated fallback secret is not an option here.
        if config.auth.jwt_secret.is_empty() {
            anyhow::bail!(
                "No JWT secret configured. Set SIGES_JWT_SECRET or the [auth] \
                 jwt_secret in the config file."
            );
        }

        const WEAK_SECRETS: &[&str] = &[
            "change-me-to-a-random-secret",
            "secret",
            "password",
            "jwt-secret",
        ];
        if WEAK_SECRETS.iter().any(|&w| config.auth.jwt_secret == w) {
            anyhow::bail!(
                "JWT secret matches a known weak/placeholder value. \
                 Set a strong random secret via SIGES_JWT_SECRET."
            );
        }
        if config.auth.jwt_secret.len() < 32 {
            tracing::warn!(
                "JWT secret is shorter than 32 characters. \
                 Consider using a stronger secret via SIGES_JWT_SECRET."
            );
        }

        if let Ok(cert) = std::env::var("SIGES_TLS_CERT") {
            config.tls.cert_path = Some(cert);
        }
        if let Ok(key) = std::env::var("SIGES_TLS_KEY") {
            config.tls.key_path = Some(key);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config: ServerConfig = toml::from_str("").unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:3000".parse().unwrap());
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.database.acquire_timeout_secs, 30);
        assert_eq!(config.auth.token_ttl_hours, 24);
        assert_eq!(config.rate_limit.login_requests_per_minute, 5);
        assert!(config.tls.cert_path.is_none());
    }

    #[test]
    fn toml_sections_override_defaults() {
        let config: ServerConfig = toml::from_str(
            r#"
            bind_addr = "127.0.0.1:8081"

            [database]
            url = "postgres://siges@localhost/siges"
            max_connections = 3

            [auth]
            jwt_secret = "0123456789abcdef0123456789abcdef"
            token_ttl_hours = 6

            [rate_limit]
            login_requests_per_minute = 20
            "#,
        )
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:8081".parse().unwrap());
        assert_eq!(config.database.url, "postgres://siges@localhost/siges");
        assert_eq!(config.database.max_connections, 3);
        // Unset keys inside a present section still default.
        assert_eq!(config.database.acquire_timeout_secs, 30);
        assert_eq!(config.auth.token_ttl_hours, 6);
        assert_eq!(config.rate_limit.login_requests_per_minute, 20);
    }
}
