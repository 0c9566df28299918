//! Group enumeration and recency ordering.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use indexmap::map::Entry;
use jobchoice_namespace::{GroupHandle, RegistryClient};

/// One selectable item from an enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRecord {
	/// Short name shown to the user.
	pub name: String,
	/// Qualified path produced when the item is chosen.
	pub full_name: String,
	/// Most recent completed activity; `None` if the item never ran or is not a job.
	pub last_activity: Option<DateTime<Utc>>,
}

/// Lists every item under `group`, in registry order.
///
/// Short names are unique in the result. When the registry yields a name twice
/// the later record wins and takes the later position.
pub fn enumerate<R: RegistryClient + ?Sized>(registry: &R, group: &GroupHandle) -> Vec<ItemRecord> {
	dedupe_by_name(registry.all_items(group).into_iter().map(|item| ItemRecord {
		last_activity: item.last_activity(),
		name: item.name,
		full_name: item.full_name,
	}))
}

/// Keeps one record per short name. A later record replaces an earlier one and
/// takes the later position.
pub(crate) fn dedupe_by_name(records: impl IntoIterator<Item = ItemRecord>) -> Vec<ItemRecord> {
	let mut unique: IndexMap<String, ItemRecord> = IndexMap::new();

	for record in records {
		match unique.entry(record.name.clone()) {
			Entry::Vacant(slot) => {
				slot.insert(record);
			}
			Entry::Occupied(slot) => {
				let (name, previous) = slot.shift_remove_entry();
				tracing::warn!(
					name = %name,
					kept = %record.full_name,
					dropped = %previous.full_name,
					"choice.enumerate.duplicate"
				);
				unique.insert(name, record);
			}
		}
	}

	unique.into_values().collect()
}

/// Orders short names oldest activity first.
///
/// Items without activity sort before every timestamped item. Equal keys keep
/// their enumeration order.
pub fn sort_by_activity(records: &[ItemRecord]) -> Vec<String> {
	let mut ordered: Vec<&ItemRecord> = records.iter().collect();
	ordered.sort_by_key(|record| record.last_activity);
	ordered.into_iter().map(|record| record.name.clone()).collect()
}
