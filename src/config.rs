use std::collections::HashMap;
use std::str::FromStr;

use mongodb::options::Credential;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a valid port number, got '{value}'")]
    InvalidPort { name: &'static str, value: String },

    #[error("CATALOG_REPOSITORY must be 'async' or 'blocking', got '{0}'")]
    InvalidRepositoryKind(String),
}

/// Which store driver backs the HTTP handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepositoryKind {
    #[default]
    Async,
    Blocking,
}

impl FromStr for RepositoryKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "async" => Ok(Self::Async),
            "blocking" | "sync" => Ok(Self::Blocking),
            _ => Err(ConfigError::InvalidRepositoryKind(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MongoSettings {
    pub uri: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: Option<String>,
    pub password: Option<String>,
}

impl MongoSettings {
    /// `MONGODB_URI` wins; otherwise the URI is assembled from host and port.
    /// Credentials never go into the string, see [`Self::credential`].
    pub fn connection_string(&self) -> String {
        match &self.uri {
            Some(uri) => uri.clone(),
            None => format!("mongodb://{}:{}", self.host, self.port),
        }
    }

    /// Credentials from `MONGODB_USER`/`MONGODB_PASSWORD`, applied to the
    /// parsed client options so passwords need no URL encoding. Ignored when
    /// an explicit URI is configured.
    pub fn credential(&self) -> Option<Credential> {
        if self.uri.is_some() {
            return None;
        }
        match (&self.user, &self.password) {
            (Some(user), Some(password)) => Some(
                Credential::builder()
                    .username(user.clone())
                    .password(password.clone())
                    .build(),
            ),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub mongo: MongoSettings,
    pub repository: RepositoryKind,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars().collect())
    }

    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        let get = |name: &str| vars.get(name).filter(|v| !v.is_empty()).cloned();

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_port("PORT", get("PORT"), 8080)?,
            mongo: MongoSettings {
                uri: get("MONGODB_URI"),
                host: get("MONGODB_HOST").unwrap_or_else(|| "localhost".to_string()),
                port: parse_port("MONGODB_PORT", get("MONGODB_PORT"), 27017)?,
                user: get("MONGODB_USER"),
                password: get("MONGODB_PASSWORD"),
            },
            repository: get("CATALOG_REPOSITORY")
                .map(|v| v.parse::<RepositoryKind>())
                .transpose()?
                .unwrap_or_default(),
        })
    }
}

fn parse_port(name: &'static str, value: Option<String>, default: u16) -> Result<u16, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidPort { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_when_unset() {
        let settings = Settings::from_vars(HashMap::new()).unwrap();

        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.repository, RepositoryKind::Async);
        assert_eq!(settings.mongo.connection_string(), "mongodb://localhost:27017");
    }

    #[test]
    fn credentials_are_used_only_when_both_present() {
        let settings = Settings::from_vars(vars(&[
            ("MONGODB_HOST", "mongo"),
            ("MONGODB_USER", "catalog"),
            ("MONGODB_PASSWORD", "secret"),
        ]))
        .unwrap();
        assert_eq!(settings.mongo.connection_string(), "mongodb://mongo:27017");
        let credential = settings.mongo.credential().expect("credential");
        assert_eq!(credential.username.as_deref(), Some("catalog"));
        assert_eq!(credential.password.as_deref(), Some("secret"));

        let settings = Settings::from_vars(vars(&[("MONGODB_USER", "catalog")])).unwrap();
        assert!(settings.mongo.credential().is_none());
    }

    #[test]
    fn reserved_characters_in_password_are_kept_verbatim() {
        let settings = Settings::from_vars(vars(&[
            ("MONGODB_USER", "cat@log"),
            ("MONGODB_PASSWORD", "p@ss:w/rd"),
        ]))
        .unwrap();

        assert_eq!(settings.mongo.connection_string(), "mongodb://localhost:27017");
        let credential = settings.mongo.credential().expect("credential");
        assert_eq!(credential.username.as_deref(), Some("cat@log"));
        assert_eq!(credential.password.as_deref(), Some("p@ss:w/rd"));
    }

    #[test]
    fn explicit_uri_overrides_parts() {
        let settings = Settings::from_vars(vars(&[
            ("MONGODB_URI", "mongodb://db.internal:27018/?replicaSet=rs0"),
            ("MONGODB_HOST", "ignored"),
        ]))
        .unwrap();
        assert_eq!(
            settings.mongo.connection_string(),
            "mongodb://db.internal:27018/?replicaSet=rs0"
        );
        assert!(settings.mongo.credential().is_none());
    }

    #[test]
    fn repository_kind_parses() {
        let settings = Settings::from_vars(vars(&[("CATALOG_REPOSITORY", "Blocking")])).unwrap();
        assert_eq!(settings.repository, RepositoryKind::Blocking);

        assert_eq!(
            Settings::from_vars(vars(&[("CATALOG_REPOSITORY", "memory")])),
            Err(ConfigError::InvalidRepositoryKind("memory".to_string()))
        );
    }

    #[test]
    fn invalid_port_is_rejected() {
        assert_eq!(
            Settings::from_vars(vars(&[("PORT", "eighty")])),
            Err(ConfigError::InvalidPort {
                name: "PORT",
                value: "eighty".to_string()
            })
        );
    }
}
