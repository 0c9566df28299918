//! Path resolution failures.

use thiserror::Error;

/// Why a configured path did not yield a group.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
	/// The path string contained no segments.
	#[error("path has no segments")]
	EmptyPath,

	/// Some segment is missing, unreadable, or not a group.
	///
	/// Carries the whole configured path, never the segment that failed.
	#[error("no accessible group at '{path}'")]
	PathNotFound { path: String },
}

impl ResolveError {
	pub(crate) fn not_found(path: impl Into<String>) -> Self {
		Self::PathNotFound { path: path.into() }
	}
}

/// Result type for path resolution.
pub type Result<T> = std::result::Result<T, ResolveError>;
