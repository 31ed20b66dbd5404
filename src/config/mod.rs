use std::env;
use thiserror::Error;

pub mod graphql;

pub const BEARER_VAR: &str = "BEARER";
pub const MONGO_URI_VAR: &str = "MONGO_URI";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    Missing(&'static str),
}

#[derive(Debug, Clone)]
pub struct PricesConfig {
    pub bearer: String,
    pub mongo_uri: String,
}

#[derive(Debug, Clone)]
pub struct TradesConfig {
    pub bearer: String,
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::Missing(name))
}

impl PricesConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(PricesConfig {
            bearer: require(BEARER_VAR)?,
            mongo_uri: require(MONGO_URI_VAR)?,
        })
    }
}

impl TradesConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(TradesConfig {
            bearer: require(BEARER_VAR)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Restores both variables on drop so the process environment stays clean.
    struct EnvGuard {
        bearer: Option<String>,
        mongo_uri: Option<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard {
                bearer: env::var(BEARER_VAR).ok(),
                mongo_uri: env::var(MONGO_URI_VAR).ok(),
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.bearer {
                Some(value) => env::set_var(BEARER_VAR, value),
                None => env::remove_var(BEARER_VAR),
            }
            match &self.mongo_uri {
                Some(value) => env::set_var(MONGO_URI_VAR, value),
                None => env::remove_var(MONGO_URI_VAR),
            }
        }
    }

    // Single test so the env mutations cannot race a parallel sibling.
    #[test]
    fn from_env_requires_each_variable() {
        let _guard = EnvGuard::new();

        env::remove_var(BEARER_VAR);
        env::remove_var(MONGO_URI_VAR);
        assert_eq!(
            PricesConfig::from_env().unwrap_err(),
            ConfigError::Missing(BEARER_VAR)
        );
        assert_eq!(
            TradesConfig::from_env().unwrap_err(),
            ConfigError::Missing(BEARER_VAR)
        );

        env::set_var(BEARER_VAR, "token");
        assert_eq!(
            PricesConfig::from_env().unwrap_err(),
            ConfigError::Missing(MONGO_URI_VAR)
        );
        assert_eq!(TradesConfig::from_env().unwrap().bearer, "token");

        env::set_var(MONGO_URI_VAR, "mongodb://localhost:27017");
        let config = PricesConfig::from_env().unwrap();
        assert_eq!(config.bearer, "token");
        assert_eq!(config.mongo_uri, "mongodb://localhost:27017");
    }

    #[test]
    fn missing_error_names_the_variable() {
        assert_eq!(
            ConfigError::Missing(BEARER_VAR).to_string(),
            "missing required environment variable: BEARER"
        );
    }
}
