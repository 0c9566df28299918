//! TTL-gated snapshot cache for one namespace path.
//!
//! # Invariants
//!
//! * A snapshot younger than the TTL is served without touching the registry.
//! * At most one refresh runs at a time per cache.
//! * A failed refresh publishes nothing and surfaces the error.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use arc_swap::ArcSwapOption;
use jobchoice_namespace::{NamespacePath, PathResolver, RegistryClient, ResolveError};
use parking_lot::Mutex;

use crate::enumerate::enumerate;
use crate::snapshot::ChoiceSnapshot;

/// Default minimum interval between refreshes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

/// Published cache contents. Replaced wholesale on refresh.
#[derive(Debug)]
struct CacheState {
	snapshot: Arc<ChoiceSnapshot>,
	refreshed_at: Instant,
}

/// Caches the choice snapshot for one configured path.
pub struct ChoiceCache {
	registry: Arc<dyn RegistryClient>,
	path: String,
	parsed: NamespacePath,
	ttl: Duration,
	state: ArcSwapOption<CacheState>,
	/// Serializes refreshes; readers of a fresh snapshot never take it.
	refresh: Mutex<()>,
	refreshes: AtomicU64,
}

impl ChoiceCache {
	pub fn new(registry: Arc<dyn RegistryClient>, path: impl Into<String>, ttl: Duration) -> Self {
		let path = path.into();
		Self {
			registry,
			parsed: NamespacePath::parse(&path),
			path,
			ttl,
			state: ArcSwapOption::empty(),
			refresh: Mutex::new(()),
			refreshes: AtomicU64::new(0),
		}
	}

	pub fn path(&self) -> &str {
		&self.path
	}

	pub fn ttl(&self) -> Duration {
		self.ttl
	}

	/// Returns the current snapshot, refreshing it if stale.
	pub fn snapshot(&self) -> Result<Arc<ChoiceSnapshot>, ResolveError> {
		self.snapshot_at(Instant::now())
	}

	/// Like [`Self::snapshot`] with an explicit clock reading.
	pub fn snapshot_at(&self, now: Instant) -> Result<Arc<ChoiceSnapshot>, ResolveError> {
		if let Some(snapshot) = self.fresh(now) {
			tracing::trace!(path = %self.path, "choice.cache.hit");
			return Ok(snapshot);
		}

		let _guard = self.refresh.lock();
		// Another caller may have refreshed while we waited.
		if let Some(snapshot) = self.fresh(now) {
			tracing::trace!(path = %self.path, "choice.cache.hit");
			return Ok(snapshot);
		}

		let snapshot = Arc::new(self.build().inspect_err(|error| {
			tracing::debug!(path = %self.path, %error, "choice.cache.refresh_failed");
		})?);
		self.state.store(Some(Arc::new(CacheState {
			snapshot: Arc::clone(&snapshot),
			refreshed_at: now,
		})));
		self.refreshes.fetch_add(1, Ordering::Relaxed);
		tracing::debug!(path = %self.path, items = snapshot.len(), "choice.cache.refresh");
		Ok(snapshot)
	}

	/// Drops the held snapshot so the next read refreshes.
	pub fn invalidate(&self) {
		let _guard = self.refresh.lock();
		self.state.store(None);
	}

	/// When the held snapshot was built, if there is one.
	pub fn refreshed_at(&self) -> Option<Instant> {
		self.state.load_full().map(|state| state.refreshed_at)
	}

	/// Number of successful refreshes so far.
	pub fn refresh_count(&self) -> u64 {
		self.refreshes.load(Ordering::Relaxed)
	}

	fn fresh(&self, now: Instant) -> Option<Arc<ChoiceSnapshot>> {
		let state = self.state.load_full()?;
		let age = now.saturating_duration_since(state.refreshed_at);
		(age < self.ttl).then(|| Arc::clone(&state.snapshot))
	}

	fn build(&self) -> Result<ChoiceSnapshot, ResolveError> {
		let group = PathResolver::new(&*self.registry).resolve_path(&self.parsed, &self.path)?;
		let records = enumerate(&*self.registry, &group);
		Ok(ChoiceSnapshot::from_records(records))
	}
}

impl std::fmt::Debug for ChoiceCache {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ChoiceCache")
			.field("path", &self.path)
			.field("ttl", &self.ttl)
			.field("refreshed_at", &self.refreshed_at())
			.finish_non_exhaustive()
	}
}
