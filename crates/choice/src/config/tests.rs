use std::io::Write;

use super::*;

#[test]
fn test_minimal_toml_uses_defaults() {
	let config = ChoiceConfig::from_toml_str(r#"name = "TARGET""#).unwrap();
	assert_eq!(config.name, "TARGET");
	assert_eq!(config.path, "");
	assert_eq!(config.default_value, None);
	assert_eq!(config.description, None);
	assert_eq!(config.ttl(), Duration::from_secs(60));
}

#[test]
fn test_full_toml() {
	let config = ChoiceConfig::from_toml_str(
		r#"
name = "TARGET"
path = "team/backend"
default-value = "api"
description = "Job to promote"
ttl-secs = 5
"#,
	)
	.unwrap();

	assert_eq!(
		config,
		ChoiceConfig::new("TARGET", "team/backend")
			.with_default_value("api")
			.with_description("Job to promote")
			.with_ttl(Duration::from_secs(5))
	);
}

#[test]
fn test_blank_name_rejected() {
	let err = ChoiceConfig::from_toml_str(r#"name = "  ""#).unwrap_err();
	assert!(matches!(err, ConfigError::MissingField("name")));
}

#[test]
fn test_unknown_field_rejected() {
	let err = ChoiceConfig::from_toml_str("name = \"A\"\nchoices = []").unwrap_err();
	assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_load_from_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "name = \"TARGET\"\npath = \"team\"").unwrap();

	let config = ChoiceConfig::load(file.path()).unwrap();
	assert_eq!(config.path, "team");
}

#[test]
fn test_load_missing_file() {
	let dir = tempfile::tempdir().unwrap();
	let err = ChoiceConfig::load(&dir.path().join("absent.toml")).unwrap_err();
	assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_sub_second_ttl_kept() {
	let config = ChoiceConfig::new("TARGET", "team").with_ttl(Duration::from_millis(500));
	assert_eq!(config.ttl(), Duration::from_millis(500));
}
