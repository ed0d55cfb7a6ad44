//! Configuration validation.
//!
//! This module checks that configured systems are well formed and
//! distinguishable from one another.

use crate::config::schema::{Config, SystemConfig};
use crate::error::{Error, Result};
use std::collections::HashSet;

/// Validates configuration.
///
/// # Examples
///
/// ```
/// use gamelist::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns validation errors for invalid configurations.
    pub fn validate(config: &Config) -> Result<()> {
        let mut seen = HashSet::new();
        for system in &config.systems {
            Self::validate_system(system)?;
            if !seen.insert(system.name.as_str()) {
                return Err(Error::Validation {
                    field: "systems".into(),
                    message: format!("Duplicate system name '{}'", system.name),
                });
            }
        }
        Ok(())
    }

    /// Validate one system entry.
    fn validate_system(system: &SystemConfig) -> Result<()> {
        Self::validate_identifier("systems.name", &system.name)?;

        if let Some(ref fullname) = system.fullname {
            Self::validate_identifier(&format!("systems.{}.fullname", system.name), fullname)?;
        }

        if system.path.as_os_str().is_empty() {
            return Err(Error::Validation {
                field: format!("systems.{}.path", system.name),
                message: "Cannot be empty".into(),
            });
        }

        for ext in &system.extensions {
            Self::validate_extension(&system.name, ext)?;
        }

        Ok(())
    }

    /// Validate string identifiers (system names).
    ///
    /// Checks that the identifier is non-empty after trimming, contains no
    /// null bytes, and is not longer than 255 characters.
    fn validate_identifier(field: &str, value: &str) -> Result<()> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        if trimmed.contains('\0') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot contain null bytes".into(),
            });
        }

        if trimmed.len() > 255 {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot exceed 255 characters".into(),
            });
        }

        Ok(())
    }

    /// Validate a game file extension: a leading dot followed by at least
    /// one character, no separators or whitespace.
    fn validate_extension(system: &str, ext: &str) -> Result<()> {
        let field = format!("systems.{system}.extensions");
        let Some(rest) = ext.strip_prefix('.') else {
            return Err(Error::Validation {
                field,
                message: format!("Extension '{ext}' must start with '.'"),
            });
        };

        if rest.is_empty()
            || rest
                .chars()
                .any(|c| c == '/' || c == '\\' || c.is_whitespace())
        {
            return Err(Error::Validation {
                field,
                message: format!("Extension '{ext}' is not a valid file extension"),
            });
        }

        Ok(())
    }
}
