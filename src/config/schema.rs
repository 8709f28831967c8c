//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Deployment environment of the wallet gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Sandbox,
    Staging,
    Production,
}

impl Environment {
    /// Default gateway endpoint for the environment.
    pub fn default_gateway_url(&self) -> &'static str {
        match self {
            Environment::Sandbox => "https://sandbox-api.okto.tech",
            Environment::Staging => "https://api.oktostage.com",
            Environment::Production => "https://apigw.okto.tech",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Sandbox => "sandbox",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sandbox" => Ok(Environment::Sandbox),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            other => Err(format!("unknown environment '{other}'")),
        }
    }
}

/// Client configuration for the wallet SDK gateway.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SdkConfig {
    /// Target environment.
    pub environment: Environment,

    /// API key issued to the client application.
    pub client_key: String,

    /// Client application identifier.
    pub client_id: String,

    /// Override the environment's default gateway endpoint.
    pub gateway_url: Option<String>,
}

impl SdkConfig {
    /// Effective gateway endpoint.
    pub fn gateway_url(&self) -> &str {
        self.gateway_url
            .as_deref()
            .unwrap_or_else(|| self.environment.default_gateway_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_sandbox() {
        let config = SdkConfig::default();
        assert_eq!(config.environment, Environment::Sandbox);
        assert_eq!(
            config.gateway_url(),
            Environment::Sandbox.default_gateway_url()
        );
    }

    #[test]
    fn test_gateway_override_wins() {
        let config = SdkConfig {
            gateway_url: Some("http://localhost:4000".into()),
            ..Default::default()
        };
        assert_eq!(config.gateway_url(), "http://localhost:4000");
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            "Production".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert!("prod".parse::<Environment>().is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let toml_src = r#"
            environment = "staging"
            client_key = "ck"
            client_id = "ci"
        "#;
        let config: SdkConfig = toml::from_str(toml_src).unwrap();
        assert_eq!(config.environment, Environment::Staging);
        assert_eq!(config.client_key, "ck");
        assert!(config.gateway_url.is_none());
    }
}
