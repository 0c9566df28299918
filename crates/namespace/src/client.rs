//! Boundary the host registry implements.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

/// Permission checked on intermediate path segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
	Read,
}

/// Opaque reference to a namespace group.
///
/// The registry chooses what the handle points at; the qualified name is kept
/// for diagnostics and so registries can key their own lookups on it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct GroupHandle {
	full_name: Arc<str>,
}

impl GroupHandle {
	pub fn new(full_name: impl Into<Arc<str>>) -> Self {
		Self {
			full_name: full_name.into(),
		}
	}

	/// Qualified name of the group. The root group has an empty name.
	pub fn full_name(&self) -> &str {
		&self.full_name
	}
}

impl fmt::Debug for GroupHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("GroupHandle").field(&self.full_name).finish()
	}
}

/// Direct child of a group, as returned by [`RegistryClient::get_item`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	/// A child that can itself contain items.
	Group(GroupHandle),
	/// A leaf item, identified by its qualified name.
	Item { full_name: Arc<str> },
}

impl Node {
	pub fn full_name(&self) -> &str {
		match self {
			Node::Group(group) => group.full_name(),
			Node::Item { full_name } => full_name,
		}
	}

	pub fn as_group(&self) -> Option<&GroupHandle> {
		match self {
			Node::Group(group) => Some(group),
			Node::Item { .. } => None,
		}
	}
}

/// What kind of entity a listed item is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
	/// A nested group. Listed like any other item.
	Group,
	/// An item that records activity; `last_activity` is the timestamp of its
	/// most recent completed run, if it ever ran.
	Job { last_activity: Option<DateTime<Utc>> },
	/// Any other item.
	Other,
}

/// One entry of a transitive listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryItem {
	/// Unqualified display name.
	pub name: String,
	/// Slash-delimited path from the namespace root.
	pub full_name: String,
	pub kind: ItemKind,
}

impl RegistryItem {
	pub fn last_activity(&self) -> Option<DateTime<Utc>> {
		match self.kind {
			ItemKind::Job { last_activity } => last_activity,
			ItemKind::Group | ItemKind::Other => None,
		}
	}
}

/// Hierarchical namespace as seen by the current caller identity.
///
/// Implementations are shared across request threads.
pub trait RegistryClient: Send + Sync {
	/// Root group, or `None` when the runtime has no registry initialized.
	fn root(&self) -> Option<GroupHandle>;

	/// Looks up a direct child of `parent` by exact name.
	fn get_item(&self, parent: &GroupHandle, name: &str) -> Option<Node>;

	/// Lists every item transitively contained in `group`.
	///
	/// The registry decides traversal order and applies its own per-item
	/// visibility filtering.
	fn all_items(&self, group: &GroupHandle) -> Vec<RegistryItem>;

	/// Whether the current caller holds `permission` on `node`.
	fn has_permission(&self, node: &Node, permission: Permission) -> bool;
}

impl<R: RegistryClient + ?Sized> RegistryClient for Arc<R> {
	fn root(&self) -> Option<GroupHandle> {
		(**self).root()
	}

	fn get_item(&self, parent: &GroupHandle, name: &str) -> Option<Node> {
		(**self).get_item(parent, name)
	}

	fn all_items(&self, group: &GroupHandle) -> Vec<RegistryItem> {
		(**self).all_items(group)
	}

	fn has_permission(&self, node: &Node, permission: Permission) -> bool {
		(**self).has_permission(node, permission)
	}
}
