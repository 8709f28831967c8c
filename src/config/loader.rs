//! Configuration loading from disk with environment overrides.

use std::fs;
use std::path::Path;

use crate::config::schema::SdkConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable overriding the client API key.
pub const CLIENT_KEY_ENV_VAR: &str = "INTENT_FLOW_CLIENT_KEY";
/// Environment variable overriding the client id.
pub const CLIENT_ID_ENV_VAR: &str = "INTENT_FLOW_CLIENT_ID";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
///
/// Credentials set in the process environment override the file so keys
/// can stay out of checked-in configs.
pub fn load_config(path: &Path) -> Result<SdkConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let mut config: SdkConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    apply_env_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn apply_env_overrides(config: &mut SdkConfig) {
    if let Ok(key) = std::env::var(CLIENT_KEY_ENV_VAR) {
        config.client_key = key;
    }
    if let Ok(id) = std::env::var(CLIENT_ID_ENV_VAR) {
        config.client_id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::Environment;

    #[test]
    fn test_load_from_toml() {
        let dir = std::env::temp_dir();
        let path = dir.join("intent_flow_loader_test.toml");
        fs::write(
            &path,
            "environment = \"production\"\nclient_key = \"ck\"\nclient_id = \"ci\"\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.client_key, "ck");

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_config(Path::new("/nonexistent/intent-flow.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_invalid_config_fails_validation() {
        let dir = std::env::temp_dir();
        let path = dir.join("intent_flow_loader_invalid.toml");
        fs::write(&path, "environment = \"production\"\n").unwrap();

        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::Validation(_))));

        fs::remove_file(&path).ok();
    }
}
