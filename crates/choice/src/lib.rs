//! Cached, recency-ordered choice lists over a namespace registry.
//!
//! A [`ChoiceProvider`] is bound to one namespace path. It lists the short names
//! of every item under that path, oldest activity first, and maps a selected
//! short name back to the item's qualified path.
//!
//! # Data flow
//!
//! 1. [`ChoiceProvider`] asks its [`ChoiceCache`] for a snapshot.
//! 2. If the held snapshot is younger than the TTL it is returned as is.
//! 3. Otherwise the path is resolved, the group enumerated, the records sorted,
//!    and a new [`ChoiceSnapshot`] is published in one swap.
//!
//! # Concurrency
//!
//! Fresh reads are lock-free. Stale reads serialize on a per-cache mutex and
//! re-check freshness after acquiring it, so concurrent callers trigger at most
//! one refresh and never observe a half-built snapshot.

pub mod cache;
pub mod config;
pub mod enumerate;
pub mod error;
pub mod provider;
pub mod snapshot;

pub use cache::{ChoiceCache, DEFAULT_TTL};
pub use config::{ChoiceConfig, ConfigError};
pub use enumerate::{ItemRecord, enumerate, sort_by_activity};
pub use error::{ChoiceError, Result};
pub use provider::{ChoiceProvider, ParameterValue};
pub use snapshot::ChoiceSnapshot;
