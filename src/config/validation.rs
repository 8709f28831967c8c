//! Configuration validation.
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Pure function: SdkConfig → Result<(), Vec<ValidationError>>
//! - Sandbox tolerates missing credentials so demos run out of the box;
//!   staging and production do not

use url::Url;

use crate::config::schema::{Environment, SdkConfig};

/// A single semantic problem with the configuration.
#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    MissingClientKey,
    MissingClientId,
    InvalidGatewayUrl(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingClientKey => {
                write!(f, "client_key is required outside the sandbox environment")
            }
            ValidationError::MissingClientId => {
                write!(f, "client_id is required outside the sandbox environment")
            }
            ValidationError::InvalidGatewayUrl(url) => {
                write!(f, "gateway_url '{url}' is not a valid URL")
            }
        }
    }
}

/// Semantic validation; serde already handled syntax.
pub fn validate_config(config: &SdkConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.environment != Environment::Sandbox {
        if config.client_key.trim().is_empty() {
            errors.push(ValidationError::MissingClientKey);
        }
        if config.client_id.trim().is_empty() {
            errors.push(ValidationError::MissingClientId);
        }
    }

    if let Some(url) = &config.gateway_url {
        if Url::parse(url).is_err() {
            errors.push(ValidationError::InvalidGatewayUrl(url.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
