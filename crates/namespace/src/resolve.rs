//! Walks a [`NamespacePath`] through a [`RegistryClient`].

use crate::client::{Node, Permission, RegistryClient};
use crate::error::{ResolveError, Result};
use crate::{GroupHandle, NamespacePath};

/// Reason logged for every intermediate failure: missing, unreadable and leaf segments alike.
const INACCESSIBLE_SEGMENT: &str = "segment not an accessible group";

/// Resolves configured path strings to groups.
pub struct PathResolver<'a, R: RegistryClient + ?Sized> {
	registry: &'a R,
}

impl<'a, R: RegistryClient + ?Sized> PathResolver<'a, R> {
	pub fn new(registry: &'a R) -> Self {
		Self { registry }
	}

	/// Resolves `input` to the group named by its final segment.
	pub fn resolve(&self, input: &str) -> Result<GroupHandle> {
		self.resolve_path(&NamespacePath::parse(input), input)
	}

	/// Resolves an already parsed path. `display` is what errors report.
	pub fn resolve_path(&self, path: &NamespacePath, display: &str) -> Result<GroupHandle> {
		let (parents, terminal) = path.split_terminal().ok_or(ResolveError::EmptyPath)?;

		let mut parent = self
			.registry
			.root()
			.ok_or_else(|| self.not_found(display, "no registry root"))?;

		for segment in parents {
			let node = self
				.registry
				.get_item(&parent, segment)
				.ok_or_else(|| self.not_found(display, INACCESSIBLE_SEGMENT))?;
			// Unreadable and non-group segments are reported and logged exactly like
			// missing ones.
			if !self.registry.has_permission(&node, Permission::Read) {
				return Err(self.not_found(display, INACCESSIBLE_SEGMENT));
			}
			parent = match node {
				Node::Group(group) => group,
				Node::Item { .. } => return Err(self.not_found(display, INACCESSIBLE_SEGMENT)),
			};
		}

		match self.registry.get_item(&parent, terminal) {
			Some(Node::Group(group)) => Ok(group),
			Some(Node::Item { .. }) => Err(self.not_found(display, "terminal is not a group")),
			None => Err(self.not_found(display, "missing terminal")),
		}
	}

	fn not_found(&self, path: &str, reason: &'static str) -> ResolveError {
		tracing::trace!(path, reason, "namespace.resolve.not_found");
		ResolveError::not_found(path)
	}
}
