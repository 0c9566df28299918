//! Errors surfaced to the host.

use jobchoice_namespace::ResolveError;
use thiserror::Error;

use crate::config::ConfigError;

/// Failures of a [`crate::ChoiceProvider`] call.
#[derive(Debug, Error)]
pub enum ChoiceError {
	/// The configured path did not resolve to an accessible group.
	#[error("invalid path '{path}' for parameter '{parameter}': {source}")]
	InvalidPath {
		parameter: String,
		path: String,
		#[source]
		source: ResolveError,
	},

	/// The selected short name is not in the current snapshot.
	#[error("illegal choice '{value}' for parameter '{parameter}'")]
	InvalidChoice { parameter: String, value: String },

	/// The parameter configuration itself is unusable.
	#[error(transparent)]
	Config(#[from] ConfigError),
}

impl ChoiceError {
	/// The underlying resolution failure, if this is a path error.
	pub fn resolve_error(&self) -> Option<&ResolveError> {
		match self {
			ChoiceError::InvalidPath { source, .. } => Some(source),
			ChoiceError::InvalidChoice { .. } | ChoiceError::Config(_) => None,
		}
	}
}

/// Result type for choice operations.
pub type Result<T> = std::result::Result<T, ChoiceError>;
