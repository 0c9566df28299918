//! In-memory [`RegistryClient`] for tests and host prototyping.
//!
//! Entries are keyed by qualified name and listed in insertion order. Views made
//! with [`MemoryRegistry::as_caller`] share the tree and call counters but check
//! permissions for a different identity. The default view is the system identity,
//! which can read everything.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::client::{GroupHandle, ItemKind, Node, Permission, RegistryClient, RegistryItem};
use crate::path::NamespacePath;

#[derive(Debug, Clone)]
struct Entry {
	kind: ItemKind,
	/// `None` means readable by every caller.
	readers: Option<Vec<Arc<str>>>,
}

#[derive(Debug, Default)]
struct Counters {
	get_item: AtomicUsize,
	all_items: AtomicUsize,
}

#[derive(Debug, Default)]
struct Tree {
	has_root: bool,
	entries: IndexMap<String, Entry>,
}

/// Shared, mutable namespace tree.
#[derive(Debug, Clone)]
pub struct MemoryRegistry {
	tree: Arc<RwLock<Tree>>,
	counters: Arc<Counters>,
	caller: Option<Arc<str>>,
}

impl Default for MemoryRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl MemoryRegistry {
	/// Creates an empty registry with a root group.
	pub fn new() -> Self {
		Self::with_root(true)
	}

	/// Creates a registry whose runtime reports no root.
	pub fn without_root() -> Self {
		Self::with_root(false)
	}

	fn with_root(has_root: bool) -> Self {
		Self {
			tree: Arc::new(RwLock::new(Tree {
				has_root,
				entries: IndexMap::new(),
			})),
			counters: Arc::default(),
			caller: None,
		}
	}

	/// Returns a view of the same tree for caller identity `caller`.
	pub fn as_caller(&self, caller: &str) -> Self {
		Self {
			tree: Arc::clone(&self.tree),
			counters: Arc::clone(&self.counters),
			caller: Some(Arc::from(caller)),
		}
	}

	/// Adds a group, creating missing ancestors as groups.
	pub fn group(&self, full_name: &str) -> &Self {
		self.insert(full_name, ItemKind::Group)
	}

	/// Adds a job with an optional last-activity timestamp.
	pub fn job(&self, full_name: &str, last_activity: Option<DateTime<Utc>>) -> &Self {
		self.insert(full_name, ItemKind::Job { last_activity })
	}

	/// Adds a leaf that is neither a group nor a job.
	pub fn item(&self, full_name: &str) -> &Self {
		self.insert(full_name, ItemKind::Other)
	}

	/// Limits read access on `full_name` to `readers`. The system view is unaffected.
	pub fn restrict(&self, full_name: &str, readers: &[&str]) -> &Self {
		if let Some(entry) = self.tree.write().entries.get_mut(full_name) {
			entry.readers = Some(readers.iter().map(|r| Arc::from(*r)).collect());
		}
		self
	}

	/// Records a new completed run for the job at `full_name`.
	pub fn set_last_activity(&self, full_name: &str, at: DateTime<Utc>) -> &Self {
		if let Some(entry) = self.tree.write().entries.get_mut(full_name)
			&& let ItemKind::Job { last_activity } = &mut entry.kind
		{
			*last_activity = Some(at);
		}
		self
	}

	/// Removes `full_name` and everything below it.
	pub fn remove(&self, full_name: &str) -> &Self {
		let prefix = format!("{full_name}/");
		self.tree
			.write()
			.entries
			.retain(|key, _| key != full_name && !key.starts_with(&prefix));
		self
	}

	/// Number of [`RegistryClient::get_item`] calls across all views.
	pub fn get_item_calls(&self) -> usize {
		self.counters.get_item.load(Ordering::SeqCst)
	}

	/// Number of [`RegistryClient::all_items`] calls across all views.
	pub fn all_items_calls(&self) -> usize {
		self.counters.all_items.load(Ordering::SeqCst)
	}

	fn insert(&self, full_name: &str, kind: ItemKind) -> &Self {
		let path = NamespacePath::parse(full_name);
		let mut tree = self.tree.write();
		let mut qualified = String::new();
		if let Some((parents, terminal)) = path.split_terminal() {
			for segment in parents {
				push_segment(&mut qualified, segment);
				tree.entries.entry(qualified.clone()).or_insert(Entry {
					kind: ItemKind::Group,
					readers: None,
				});
			}
			push_segment(&mut qualified, terminal);
			tree.entries.insert(qualified, Entry { kind, readers: None });
		}
		self
	}

	fn can_read(&self, entry: &Entry) -> bool {
		match (&self.caller, &entry.readers) {
			(None, _) | (_, None) => true,
			(Some(caller), Some(readers)) => readers.iter().any(|r| r == caller),
		}
	}

	/// Readable including every ancestor strictly below `base`.
	fn visible_below(&self, tree: &Tree, base: &str, full_name: &str) -> bool {
		let mut qualified = base.to_string();
		let rest = full_name
			.strip_prefix(base)
			.unwrap_or(full_name)
			.trim_start_matches('/');
		for segment in rest.split('/') {
			push_segment(&mut qualified, segment);
			match tree.entries.get(&qualified) {
				Some(entry) if self.can_read(entry) => {}
				_ => return false,
			}
		}
		true
	}
}

fn push_segment(qualified: &mut String, segment: &str) {
	if !qualified.is_empty() {
		qualified.push('/');
	}
	qualified.push_str(segment);
}

impl RegistryClient for MemoryRegistry {
	fn root(&self) -> Option<GroupHandle> {
		self.tree.read().has_root.then(|| GroupHandle::new(""))
	}

	fn get_item(&self, parent: &GroupHandle, name: &str) -> Option<Node> {
		self.counters.get_item.fetch_add(1, Ordering::SeqCst);
		let mut qualified = parent.full_name().to_string();
		push_segment(&mut qualified, name);

		let tree = self.tree.read();
		let entry = tree.entries.get(&qualified)?;
		Some(match entry.kind {
			ItemKind::Group => Node::Group(GroupHandle::new(qualified)),
			ItemKind::Job { .. } | ItemKind::Other => Node::Item {
				full_name: Arc::from(qualified),
			},
		})
	}

	fn all_items(&self, group: &GroupHandle) -> Vec<RegistryItem> {
		self.counters.all_items.fetch_add(1, Ordering::SeqCst);
		let base = group.full_name();
		let prefix = format!("{base}/");

		let tree = self.tree.read();
		tree.entries
			.iter()
			.filter(|(key, _)| base.is_empty() || key.starts_with(&prefix))
			.filter(|(key, _)| self.visible_below(&tree, base, key))
			.map(|(key, entry)| RegistryItem {
				name: NamespacePath::short_name(key).to_string(),
				full_name: key.clone(),
				kind: entry.kind,
			})
			.collect()
	}

	fn has_permission(&self, node: &Node, permission: Permission) -> bool {
		match permission {
			Permission::Read => self
				.tree
				.read()
				.entries
				.get(node.full_name())
				.is_some_and(|entry| self.can_read(entry)),
		}
	}
}
