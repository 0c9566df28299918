//! Immutable result of one refresh.

use std::collections::HashMap;

use crate::enumerate::{ItemRecord, dedupe_by_name, sort_by_activity};

/// Short-name map and display order from one enumeration.
///
/// Both views always hold the same key set. Snapshots are never mutated; a
/// refresh publishes a new one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChoiceSnapshot {
	paths: HashMap<String, String>,
	choices: Vec<String>,
}

impl ChoiceSnapshot {
	/// Builds a snapshot from enumerated records.
	///
	/// Duplicate short names resolve last-write-wins, as in enumeration.
	pub fn from_records(records: Vec<ItemRecord>) -> Self {
		let records = dedupe_by_name(records);
		let choices = sort_by_activity(&records);
		let paths = records
			.into_iter()
			.map(|record| (record.name, record.full_name))
			.collect();
		Self { paths, choices }
	}

	/// Short names, oldest activity first.
	pub fn choices(&self) -> &[String] {
		&self.choices
	}

	/// Qualified path for `short_name`.
	pub fn qualified_path(&self, short_name: &str) -> Option<&str> {
		self.paths.get(short_name).map(String::as_str)
	}

	pub fn contains(&self, short_name: &str) -> bool {
		self.paths.contains_key(short_name)
	}

	pub fn len(&self) -> usize {
		self.choices.len()
	}

	pub fn is_empty(&self) -> bool {
		self.choices.is_empty()
	}
}
