//! Engine configuration.
//!
//! ```toml
//! registry = "categories.toml"
//! include_deleted = false
//! log_profile = "production"
//! ```
//!
//! Every key is optional. A relative `registry` path resolves against the
//! directory of the config file it was loaded from.

use crate::errors::{ExError, ExErrorKind, ProofLedgerError, Result};
use crate::logging_facility::Profile;
use crate::registry::CategoryRegistry;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Category registry file; the built-in registry when absent
    #[serde(default)]
    pub registry: Option<PathBuf>,
    /// Show records whose title carries the `[DELETED]` marker
    #[serde(default)]
    pub include_deleted: bool,
    #[serde(default)]
    pub log_profile: Profile,
}

impl EngineConfig {
    /// # Errors
    ///
    /// `Configuration` on malformed TOML or unknown keys.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            ProofLedgerError::InvalidConfiguration {
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Load from a file, resolving a relative registry path against it
    ///
    /// # Errors
    ///
    /// `Io` if the file cannot be read, `Configuration` if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| io_error("load_config", path, e))?;
        let mut config = Self::from_toml_str(&content)?;
        if let (Some(registry), Some(dir)) = (config.registry.as_ref(), path.parent()) {
            if registry.is_relative() {
                config.registry = Some(dir.join(registry));
            }
        }
        Ok(config)
    }

    /// The configured category registry
    ///
    /// # Errors
    ///
    /// `Io` if the registry file cannot be read, `Configuration` if it cannot
    /// be parsed.
    pub fn load_registry(&self) -> Result<CategoryRegistry> {
        match &self.registry {
            None => Ok(CategoryRegistry::builtin()),
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .map_err(|e| io_error("load_registry", path, e))?;
                CategoryRegistry::from_toml_str(&content)
            }
        }
    }
}

fn io_error(op: &str, path: &Path, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(op)
        .with_message(format!("{}: {}", path.display(), err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.log_profile, Profile::Development);
        assert_eq!(config.load_registry().unwrap(), CategoryRegistry::builtin());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let err = EngineConfig::from_toml_str("include_deletd = true").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Configuration);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = EngineConfig::load(Path::new("/nonexistent/proofledger.toml")).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Io);
        assert_eq!(err.op(), Some("load_config"));
    }
}
