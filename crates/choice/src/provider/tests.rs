use std::time::Duration;

use chrono::{TimeZone, Utc};
use jobchoice_namespace::ResolveError;
use jobchoice_namespace::memory::MemoryRegistry;
use pretty_assertions::assert_eq;

use super::*;
use crate::{ConfigError, DEFAULT_TTL};

fn registry() -> MemoryRegistry {
	let registry = MemoryRegistry::new();
	registry
		.job("team/api", Utc.timestamp_opt(20, 0).single())
		.job("team/web", Utc.timestamp_opt(10, 0).single());
	registry
}

fn provider(config: ChoiceConfig) -> Result<ChoiceProvider> {
	ChoiceProvider::configure(config, Arc::new(registry()))
}

#[test]
fn test_configure_is_eager() {
	let registry = registry();
	let provider =
		ChoiceProvider::configure(ChoiceConfig::new("JOB", "team"), Arc::new(registry.clone()))
			.unwrap();
	assert_eq!(registry.all_items_calls(), 1);
	assert_eq!(provider.list_choices().unwrap(), ["web", "api"]);
	assert_eq!(registry.all_items_calls(), 1);
}

#[test]
fn test_configure_empty_path() {
	let err = provider(ChoiceConfig::new("JOB", "")).unwrap_err();
	assert_eq!(err.resolve_error(), Some(&ResolveError::EmptyPath));
}

#[test]
fn test_configure_unknown_path_names_path_and_parameter() {
	let err = provider(ChoiceConfig::new("JOB", "nope")).unwrap_err();
	assert!(matches!(
		err.resolve_error(),
		Some(ResolveError::PathNotFound { .. })
	));
	let message = err.to_string();
	assert!(message.contains("'nope'"), "{message}");
	assert!(message.contains("'JOB'"), "{message}");
}

#[test]
fn test_configure_blank_name() {
	let err = provider(ChoiceConfig::new(" ", "team")).unwrap_err();
	assert!(matches!(
		err,
		ChoiceError::Config(ConfigError::MissingField("name"))
	));
}

#[test]
fn test_resolve_value() {
	let provider = provider(ChoiceConfig::new("JOB", "team")).unwrap();
	assert_eq!(provider.resolve_value("api").unwrap(), "team/api");
}

#[test]
fn test_invalid_choice_names_value_and_parameter() {
	let provider = provider(ChoiceConfig::new("JOB", "team")).unwrap();
	let err = provider.resolve_value("doesNotExist").unwrap_err();
	match &err {
		ChoiceError::InvalidChoice { parameter, value } => {
			assert_eq!(parameter, "JOB");
			assert_eq!(value, "doesNotExist");
		}
		other => panic!("unexpected error: {other:?}"),
	}
	assert_eq!(
		err.to_string(),
		"illegal choice 'doesNotExist' for parameter 'JOB'"
	);
}

#[test]
fn test_create_value_carries_name_and_description() {
	let config = ChoiceConfig::new("JOB", "team").with_description("what to ship");
	let provider = provider(config).unwrap();
	assert_eq!(
		provider.create_value("web").unwrap(),
		ParameterValue {
			name: "JOB".into(),
			value: "team/web".into(),
			description: Some("what to ship".into()),
		}
	);
}

#[test]
fn test_default_parameter_value() {
	let none = provider(ChoiceConfig::new("JOB", "team")).unwrap();
	assert_eq!(none.default_parameter_value().unwrap(), None);

	let some = provider(ChoiceConfig::new("JOB", "team").with_default_value("api")).unwrap();
	assert_eq!(some.default_value(), Some("api"));
	assert_eq!(
		some.default_parameter_value().unwrap().map(|v| v.value),
		Some("team/api".to_string())
	);

	let stale = provider(ChoiceConfig::new("JOB", "team").with_default_value("gone")).unwrap();
	assert!(matches!(
		stale.default_parameter_value(),
		Err(ChoiceError::InvalidChoice { .. })
	));
}

#[test]
fn test_vanished_choice_becomes_invalid_after_refresh() {
	let registry = registry();
	let start = Instant::now();
	let provider = ChoiceProvider::configure_at(
		ChoiceConfig::new("JOB", "team").with_ttl(Duration::from_secs(10)),
		Arc::new(registry.clone()),
		start,
	)
	.unwrap();

	registry.remove("team/api");
	// Still cached.
	assert_eq!(
		provider.resolve_value_at("api", start + Duration::from_secs(5)).unwrap(),
		"team/api"
	);

	let later = start + Duration::from_secs(10);
	assert!(matches!(
		provider.resolve_value_at("api", later),
		Err(ChoiceError::InvalidChoice { .. })
	));
	assert_eq!(provider.list_choices_at(later).unwrap(), ["web"]);
}

#[test]
fn test_invalidate() {
	let registry = registry();
	let provider =
		ChoiceProvider::configure(ChoiceConfig::new("JOB", "team"), Arc::new(registry.clone()))
			.unwrap();
	registry.job("team/new", None);
	assert_eq!(provider.list_choices().unwrap(), ["web", "api"]);

	provider.invalidate();
	assert_eq!(provider.list_choices().unwrap(), ["new", "web", "api"]);
}

#[test]
fn test_default_parameter_value_follows_clock() {
	let registry = registry();
	let start = Instant::now();
	let provider = ChoiceProvider::configure_at(
		ChoiceConfig::new("JOB", "team").with_default_value("api"),
		Arc::new(registry.clone()),
		start,
	)
	.unwrap();

	registry.remove("team/api");
	let cached = provider.default_parameter_value_at(start + Duration::from_secs(1));
	assert_eq!(cached.unwrap().map(|v| v.value), Some("team/api".to_string()));

	let expired = provider.default_parameter_value_at(start + DEFAULT_TTL);
	assert!(matches!(expired, Err(ChoiceError::InvalidChoice { .. })));
}

#[test]
fn test_sub_second_ttl_still_caches() {
	let registry = registry();
	let start = Instant::now();
	let provider = ChoiceProvider::configure_at(
		ChoiceConfig::new("JOB", "team").with_ttl(Duration::from_millis(500)),
		Arc::new(registry.clone()),
		start,
	)
	.unwrap();

	provider.list_choices_at(start + Duration::from_millis(1)).unwrap();
	assert_eq!(registry.all_items_calls(), 1);

	provider.list_choices_at(start + Duration::from_millis(500)).unwrap();
	assert_eq!(registry.all_items_calls(), 2);
}
