//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use tecla_infra::DatabaseConfig;

/// Which identity provider backs the `/auth` endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityProviderKind {
    Firebase,
    Local,
}

impl FromStr for IdentityProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "firebase" => Ok(Self::Firebase),
            "local" => Ok(Self::Local),
            other => Err(format!(
                "Unknown IDENTITY_PROVIDER '{other}' (expected 'firebase' or 'local')"
            )),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub database: Option<DatabaseConfig>,
    pub identity_provider: IdentityProviderKind,
    pub firebase_web_api_key: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        let database = env::var("DATABASE_URL").ok().map(|url| {
            let mut config = DatabaseConfig::new(url);
            if let Some(max) = parse_var("DB_MAX_CONNECTIONS") {
                config.max_connections = max;
            }
            if let Some(min) = parse_var("DB_MIN_CONNECTIONS") {
                config.min_connections = min;
            }
            config
        });

        let firebase_web_api_key = env::var("FIREBASE_WEB_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        // Without an explicit choice, Firebase is used whenever a key is present.
        let identity_provider = match env::var("IDENTITY_PROVIDER") {
            Ok(value) => value.parse()?,
            Err(_) if firebase_web_api_key.is_some() => IdentityProviderKind::Firebase,
            Err(_) => IdentityProviderKind::Local,
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_var("PORT")
                .or_else(|| parse_var("AUTH_SERVICE_PORT"))
                .unwrap_or(8000),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "qa".to_string()),
            database,
            identity_provider,
            firebase_web_api_key,
        })
    }

    pub fn is_production(&self) -> bool {
        matches!(self.environment.as_str(), "production" | "prod")
    }
}

fn parse_var<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_provider_kind_parsing() {
        assert_eq!(
            "Firebase".parse::<IdentityProviderKind>().unwrap(),
            IdentityProviderKind::Firebase
        );
        assert_eq!(
            " local ".parse::<IdentityProviderKind>().unwrap(),
            IdentityProviderKind::Local
        );
        assert!("auth0".parse::<IdentityProviderKind>().is_err());
    }
}
