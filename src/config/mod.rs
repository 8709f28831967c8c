//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize, env-var overrides)
//!     → validation.rs (semantic checks)
//!     → SdkConfig (validated, immutable)
//!     → handed explicitly to the capability providers
//! ```
//!
//! # Design Decisions
//! - Config is an explicitly passed struct; the core never reads ambient
//!   or global state
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks and
//!   returns all errors, not just the first

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{Environment, SdkConfig};
