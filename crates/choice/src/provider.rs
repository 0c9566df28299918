//! Public face of a configured choice parameter.

use std::sync::Arc;
use std::time::Instant;

use jobchoice_namespace::RegistryClient;

use crate::cache::ChoiceCache;
use crate::config::ChoiceConfig;
use crate::error::{ChoiceError, Result};
use crate::snapshot::ChoiceSnapshot;

/// Value produced for a selected choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterValue {
	/// Parameter name.
	pub name: String,
	/// Qualified path of the chosen item.
	pub value: String,
	pub description: Option<String>,
}

/// A choice parameter bound to one namespace path.
#[derive(Debug)]
pub struct ChoiceProvider {
	config: ChoiceConfig,
	cache: ChoiceCache,
}

impl ChoiceProvider {
	/// Validates `config` and performs the first refresh eagerly.
	pub fn configure(config: ChoiceConfig, registry: Arc<dyn RegistryClient>) -> Result<Self> {
		Self::configure_at(config, registry, Instant::now())
	}

	pub fn configure_at(
		config: ChoiceConfig,
		registry: Arc<dyn RegistryClient>,
		now: Instant,
	) -> Result<Self> {
		config.validate()?;
		let cache = ChoiceCache::new(registry, config.path.clone(), config.ttl());
		let provider = Self { config, cache };
		provider.snapshot_at(now)?;
		Ok(provider)
	}

	pub fn name(&self) -> &str {
		&self.config.name
	}

	pub fn path(&self) -> &str {
		&self.config.path
	}

	pub fn description(&self) -> Option<&str> {
		self.config.description.as_deref()
	}

	pub fn default_value(&self) -> Option<&str> {
		self.config.default_value.as_deref()
	}

	pub fn config(&self) -> &ChoiceConfig {
		&self.config
	}

	/// Short names to offer, oldest activity first.
	pub fn list_choices(&self) -> Result<Vec<String>> {
		self.list_choices_at(Instant::now())
	}

	pub fn list_choices_at(&self, now: Instant) -> Result<Vec<String>> {
		Ok(self.snapshot_at(now)?.choices().to_vec())
	}

	/// Qualified path of the item whose short name is `short_name`.
	pub fn resolve_value(&self, short_name: &str) -> Result<String> {
		self.resolve_value_at(short_name, Instant::now())
	}

	pub fn resolve_value_at(&self, short_name: &str, now: Instant) -> Result<String> {
		let snapshot = self.snapshot_at(now)?;
		snapshot
			.qualified_path(short_name)
			.map(str::to_owned)
			.ok_or_else(|| ChoiceError::InvalidChoice {
				parameter: self.config.name.clone(),
				value: short_name.to_string(),
			})
	}

	/// Builds the parameter value for a selected short name.
	pub fn create_value(&self, short_name: &str) -> Result<ParameterValue> {
		self.create_value_at(short_name, Instant::now())
	}

	pub fn create_value_at(&self, short_name: &str, now: Instant) -> Result<ParameterValue> {
		Ok(ParameterValue {
			name: self.config.name.clone(),
			value: self.resolve_value_at(short_name, now)?,
			description: self.config.description.clone(),
		})
	}

	/// Value for the configured default, or `None` when no default is set.
	pub fn default_parameter_value(&self) -> Result<Option<ParameterValue>> {
		self.default_parameter_value_at(Instant::now())
	}

	pub fn default_parameter_value_at(&self, now: Instant) -> Result<Option<ParameterValue>> {
		self.config
			.default_value
			.as_deref()
			.map(|value| self.create_value_at(value, now))
			.transpose()
	}

	/// Forces the next call to re-read the registry.
	pub fn invalidate(&self) {
		self.cache.invalidate();
	}

	/// Current snapshot, refreshed if older than the TTL.
	pub fn snapshot_at(&self, now: Instant) -> Result<Arc<ChoiceSnapshot>> {
		self.cache
			.snapshot_at(now)
			.map_err(|source| ChoiceError::InvalidPath {
				parameter: self.config.name.clone(),
				path: self.config.path.clone(),
				source,
			})
	}
}

#[cfg(test)]
mod tests;
