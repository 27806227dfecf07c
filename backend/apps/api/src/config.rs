//! Server Configuration
//!
//! Everything is environment-configured: database coordinates, listen
//! port, session secret, static asset directory. `.env` files are
//! loaded by `main` before this runs.

use std::env;

use anyhow::{Context, bail};
use auth::AuthConfig;
use base64::Engine;
use base64::engine::general_purpose;
use sqlx::postgres::PgConnectOptions;

/// Database coordinates
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}

/// Application configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub listen_port: u16,
    pub public_dir: String,
    session_secret: Option<[u8; 32]>,
    cookie_secure: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database = DatabaseConfig {
            host: env_or("DB_HOST", "localhost"),
            port: env_or("DB_PORT", "5432")
                .parse()
                .context("DB_PORT must be a port number")?,
            user: env_or("DB_USER", "postgres"),
            password: env_or("DB_PASSWORD", ""),
            name: env_or("DB_NAME", "nihongo_school"),
        };

        let listen_port = env_or("PORT", "3000")
            .parse()
            .context("PORT must be a port number")?;

        let public_dir = env_or("PUBLIC_DIR", "backend/apps/api/public");

        let session_secret = match env::var("SESSION_SECRET") {
            Ok(b64) => Some(decode_secret(&b64)?),
            Err(_) => None,
        };

        let cookie_secure = matches!(
            env_or("COOKIE_SECURE", "false").as_str(),
            "1" | "true" | "yes"
        );

        Ok(Self {
            database,
            listen_port,
            public_dir,
            session_secret,
            cookie_secure,
        })
    }

    /// Build the auth configuration
    ///
    /// A missing `SESSION_SECRET` is tolerated in debug builds only:
    /// a random secret invalidates all sessions on restart.
    pub fn auth_config(&self) -> anyhow::Result<AuthConfig> {
        let mut config = match self.session_secret {
            Some(secret) => AuthConfig {
                session_secret: secret,
                ..AuthConfig::default()
            },
            None if cfg!(debug_assertions) => {
                tracing::warn!("SESSION_SECRET not set, using a random development secret");
                AuthConfig::with_random_secret()
            }
            None => bail!("SESSION_SECRET must be set in production"),
        };

        config.cookie_secure = self.cookie_secure;
        Ok(config)
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn decode_secret(b64: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = general_purpose::STANDARD
        .decode(b64)
        .context("SESSION_SECRET must be base64")?;

    let mut secret = [0u8; 32];
    if bytes.len() != secret.len() {
        bail!(
            "SESSION_SECRET must decode to {} bytes, got {}",
            secret.len(),
            bytes.len()
        );
    }
    secret.copy_from_slice(&bytes);
    Ok(secret)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_secret_length() {
        let good = general_purpose::STANDARD.encode([7u8; 32]);
        assert_eq!(decode_secret(&good).unwrap(), [7u8; 32]);

        let short = general_purpose::STANDARD.encode([7u8; 16]);
        assert!(decode_secret(&short).is_err());

        assert!(decode_secret("not base64!!").is_err());
    }
}
