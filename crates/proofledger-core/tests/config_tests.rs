#![allow(clippy::unwrap_used, clippy::expect_used)]

use proofledger_core::errors::ExErrorKind;
use proofledger_core::logging_facility::Profile;
use proofledger_core::EngineConfig;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_relative_registry_resolves_against_config_dir() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("categories.toml"),
        r#"
[categories.legal]
display_name = "Legal filings"
allows_versioning = false
document_types = ["Affidavit"]
"#,
    )
    .unwrap();
    let config_path = dir.path().join("proofledger.toml");
    fs::write(
        &config_path,
        "registry = \"categories.toml\"\ninclude_deleted = true\nlog_profile = \"production\"\n",
    )
    .unwrap();

    let config = EngineConfig::load(&config_path).unwrap();
    assert!(config.include_deleted);
    assert_eq!(config.log_profile, Profile::Production);
    assert_eq!(config.registry, Some(dir.path().join("categories.toml")));

    let registry = config.load_registry().unwrap();
    assert_eq!(registry.len(), 1);
    assert!(!registry.allows_versioning("legal"));
    assert_eq!(registry.display_name("legal"), "Legal filings");
}

#[test]
fn test_missing_registry_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("proofledger.toml");
    fs::write(&config_path, "registry = \"nope.toml\"\n").unwrap();

    let config = EngineConfig::load(&config_path).unwrap();
    let err = config.load_registry().unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::Io);
    assert_eq!(err.op(), Some("load_registry"));
}

#[test]
fn test_malformed_registry_is_configuration_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad.toml"), "[categories.x\n").unwrap();
    let config_path = dir.path().join("proofledger.toml");
    fs::write(&config_path, "registry = \"bad.toml\"\n").unwrap();

    let err = EngineConfig::load(&config_path)
        .unwrap()
        .load_registry()
        .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::Configuration);
}
