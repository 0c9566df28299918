//! Parameter configuration.
//!
//! Hosts either build a [`ChoiceConfig`] directly or load it from TOML:
//!
//! ```toml
//! name = "TARGET_JOB"
//! path = "team/backend"
//! default-value = "api"
//! description = "Job to promote"
//! ttl-secs = 60
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::cache::DEFAULT_TTL;

/// Errors that can occur when loading a parameter configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A required field is missing or blank.
	#[error("missing required field: {0}")]
	MissingField(&'static str),
}

/// Configuration of one choice parameter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ChoiceConfig {
	/// Parameter name, used in error messages and produced values.
	pub name: String,
	/// Slash-delimited namespace path of the group to list.
	#[serde(default)]
	pub path: String,
	/// Short name preselected by the host.
	#[serde(default)]
	pub default_value: Option<String>,
	#[serde(default)]
	pub description: Option<String>,
	/// Minimum age before the choice list is recomputed. Written as whole
	/// seconds under `ttl-secs`.
	#[serde(
		rename = "ttl-secs",
		default = "default_ttl",
		deserialize_with = "deserialize_secs"
	)]
	pub ttl: Duration,
}

fn default_ttl() -> Duration {
	DEFAULT_TTL
}

fn deserialize_secs<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
	u64::deserialize(deserializer).map(Duration::from_secs)
}

impl ChoiceConfig {
	pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			path: path.into(),
			default_value: None,
			description: None,
			ttl: DEFAULT_TTL,
		}
	}

	pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
		self.default_value = Some(value.into());
		self
	}

	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	pub fn with_ttl(mut self, ttl: Duration) -> Self {
		self.ttl = ttl;
		self
	}

	pub fn ttl(&self) -> Duration {
		self.ttl
	}

	/// Checks fields serde cannot express.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.name.trim().is_empty() {
			return Err(ConfigError::MissingField("name"));
		}
		Ok(())
	}

	/// Parses and validates a TOML document.
	pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	/// Reads and parses a TOML file.
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let input = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml_str(&input)
	}
}

#[cfg(test)]
mod tests;
