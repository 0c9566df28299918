//! Slash-delimited namespace paths.

use std::fmt;

/// A parsed path such as `team/backend/services`.
///
/// Empty segments are dropped, so `/a//b/` and `a/b` parse identically. A string
/// with nothing but slashes (or nothing at all) has zero segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NamespacePath {
	segments: Vec<String>,
}

impl NamespacePath {
	/// Splits `input` on `/`.
	pub fn parse(input: &str) -> Self {
		let segments = input
			.split('/')
			.filter(|s| !s.is_empty())
			.map(str::to_owned)
			.collect();
		Self { segments }
	}

	pub fn segments(&self) -> &[String] {
		&self.segments
	}

	pub fn is_empty(&self) -> bool {
		self.segments.is_empty()
	}

	pub fn len(&self) -> usize {
		self.segments.len()
	}

	/// Splits into the intermediate segments and the terminal one.
	///
	/// Returns `None` for an empty path.
	pub fn split_terminal(&self) -> Option<(&[String], &str)> {
		let (last, parents) = self.segments.split_last()?;
		Some((parents, last.as_str()))
	}

	/// Last segment of a qualified path string, i.e. its short name.
	pub fn short_name(qualified: &str) -> &str {
		qualified
			.trim_end_matches('/')
			.rsplit('/')
			.next()
			.unwrap_or(qualified)
	}
}

impl fmt::Display for NamespacePath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.segments.join("/"))
	}
}

#[cfg(test)]
mod tests;
