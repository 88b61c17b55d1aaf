use std::io::Write;

use querytype_core::config::*;
use querytype_core::errors::ConfigError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = QuerytypeConfig::from_toml("").unwrap();

    assert_eq!(config.predictor.kind, "constant");
    assert!(config.predictor.model_path.is_none());
    assert_eq!(config.output.style, OutputStyle::Python);
    assert_eq!(config.observability.log_level, "warn");
    assert_eq!(config, QuerytypeConfig::default());
    config.validate().unwrap();
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[output]
style = "compact"
"#;
    let config = QuerytypeConfig::from_toml(toml).unwrap();
    assert_eq!(config.output.style, OutputStyle::Compact);
    // Non-overridden fields keep defaults
    assert_eq!(config.predictor.kind, "constant");
    assert_eq!(config.observability.log_level, "warn");
}

#[test]
fn unknown_keys_are_ignored() {
    let toml = r#"
[predictor]
kind = "constant"
temperature = 0.7

[future_section]
enabled = true
"#;
    let config = QuerytypeConfig::from_toml(toml).unwrap();
    assert_eq!(config.predictor.kind, "constant");
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let err = QuerytypeConfig::from_toml("[output\nstyle = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn unknown_style_is_a_parse_error() {
    let err = QuerytypeConfig::from_toml("[output]\nstyle = \"yaml\"").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn unknown_predictor_fails_validation() {
    let config = QuerytypeConfig::from_toml("[predictor]\nkind = \"neural\"").unwrap();
    let err = config.validate().unwrap_err();
    assert_eq!(
        err,
        ConfigError::UnknownPredictor {
            kind: "neural".to_string()
        }
    );
}

#[test]
fn blank_model_path_fails_validation() {
    let config = QuerytypeConfig::from_toml("[predictor]\nmodel_path = \"  \"").unwrap();
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "predictor.model_path"));
}

#[test]
fn malformed_log_filter_fails_validation() {
    let config =
        QuerytypeConfig::from_toml("[observability]\nlog_level = \"querytype=notalevel\"").unwrap();
    let err = config.validate().unwrap_err();
    assert!(
        matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "observability.log_level")
    );
}

#[test]
fn env_override_replaces_log_level() {
    let mut config = QuerytypeConfig::default();
    config.apply_env_overrides(|key| {
        (key == "QUERYTYPE_LOG").then(|| "querytype_engine=debug".to_string())
    });
    assert_eq!(config.observability.log_level, "querytype_engine=debug");
}

#[test]
fn blank_env_override_is_ignored() {
    let mut config = QuerytypeConfig::default();
    config.apply_env_overrides(|_| Some("   ".to_string()));
    assert_eq!(config.observability.log_level, "warn");
}

#[test]
fn unparseable_env_filter_keeps_previous_level() {
    let mut config = QuerytypeConfig::from_toml("[observability]\nlog_level = \"info\"").unwrap();
    config.apply_env_overrides(|key| (key == "QUERYTYPE_LOG").then(|| "=[".to_string()));
    assert_eq!(config.observability.log_level, "info");
    config.validate().unwrap();
}

#[test]
fn cli_overrides_win_over_file_values() {
    let mut config = QuerytypeConfig::from_toml(
        "[output]\nstyle = \"compact\"\n[observability]\nlog_level = \"info\"",
    )
    .unwrap();
    config.apply_cli_overrides(&CliOverrides {
        output_style: Some(OutputStyle::Python),
        log_level: Some("error".to_string()),
    });
    assert_eq!(config.output.style, OutputStyle::Python);
    assert_eq!(config.observability.log_level, "error");
}

#[test]
fn load_reads_and_validates_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[output]\nstyle = \"compact\"").unwrap();
    let config = QuerytypeConfig::load(file.path()).unwrap();
    assert_eq!(config.output.style, OutputStyle::Compact);
}

#[test]
fn load_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");
    let err = QuerytypeConfig::load(&path).unwrap_err();
    match err {
        ConfigError::FileNotFound { path: reported } => assert!(reported.ends_with("missing.toml")),
        other => panic!("expected FileNotFound, got {other:?}"),
    }
}

#[test]
fn load_directory_is_a_read_failure_not_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = QuerytypeConfig::load(dir.path()).unwrap_err();
    assert!(
        matches!(err, ConfigError::ReadFailed { .. }),
        "expected ReadFailed, got {err:?}"
    );
}

#[test]
fn load_rejects_unknown_predictor_in_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[predictor]\nkind = \"bayes\"").unwrap();
    let err = QuerytypeConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownPredictor { .. }));
}

#[test]
fn output_style_parses_case_insensitively() {
    assert_eq!("python".parse::<OutputStyle>().unwrap(), OutputStyle::Python);
    assert_eq!(" Compact ".parse::<OutputStyle>().unwrap(), OutputStyle::Compact);
    assert!(matches!(
        "pretty".parse::<OutputStyle>(),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert_eq!(OutputStyle::Compact.to_string(), "compact");
}
