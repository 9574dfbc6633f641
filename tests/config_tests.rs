//! Tests for flow settings.

use std::time::Duration;

use ecobee_auth::config::{split_scopes, FlowSettings};
use ecobee_auth::error::EcobeeError;
use pretty_assertions::assert_eq;

#[test]
fn defaults_request_smart_write() {
    let settings = FlowSettings::default();
    assert_eq!(settings.scopes, vec!["smartWrite".to_string()]);
    assert_eq!(settings.timeout(), Duration::from_secs(30));
    assert!(settings.auth0.is_none());
}

#[test]
fn toml_overrides_defaults() {
    let settings = FlowSettings::from_toml_str(
        r#"
auth0 = "cookie"
scopes = ["smartRead", "smartWrite"]
endpoint = "http://localhost:9999/authorize"
timeout_secs = 5
"#,
    )
    .expect("parse");

    assert_eq!(settings.auth0.as_deref(), Some("cookie"));
    assert_eq!(settings.scopes, vec!["smartRead".to_string(), "smartWrite".to_string()]);
    assert_eq!(settings.timeout(), Duration::from_secs(5));

    let flow = settings.build_local_web_flow().expect("flow");
    assert_eq!(flow.auth0(), "cookie");
    assert_eq!(flow.endpoint(), "http://localhost:9999/authorize");
}

#[test]
fn partial_toml_keeps_remaining_defaults() {
    let settings = FlowSettings::from_toml_str(r#"auth0 = "cookie""#).expect("parse");
    assert_eq!(settings.scopes, vec!["smartWrite".to_string()]);
    assert_eq!(settings.timeout_secs, 30);
}

#[test]
fn invalid_toml_is_serialization_error() {
    let err = FlowSettings::from_toml_str("timeout_secs = \"soon\"").unwrap_err();
    assert!(matches!(err, EcobeeError::Serialization(_)));
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = FlowSettings::load_from_path(dir.path().join("absent.toml")).expect("load");
    assert_eq!(settings, FlowSettings::default());
}

#[test]
fn file_is_loaded() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "auth0 = \"from-file\"\nscopes = [\"smartRead\"]\n").expect("write");

    let settings = FlowSettings::load_from_path(&path).expect("load");
    assert_eq!(settings.auth0.as_deref(), Some("from-file"));
    assert_eq!(settings.scopes, vec!["smartRead".to_string()]);
}

#[test]
fn building_flow_requires_auth0() {
    let err = FlowSettings::default().build_local_web_flow().err().expect("error");
    assert!(matches!(err, EcobeeError::Configuration(_)));

    let empty = FlowSettings {
        auth0: Some(String::new()),
        ..FlowSettings::default()
    };
    assert!(empty.build_local_web_flow().is_err());
}

#[test]
fn scope_lists_accept_spaces_and_commas() {
    assert_eq!(
        split_scopes("smartRead, smartWrite  ems"),
        vec!["smartRead".to_string(), "smartWrite".to_string(), "ems".to_string()]
    );
    assert!(split_scopes("  ").is_empty());
}

/// Sets `ECOBEE_*` variables for one test and removes them on drop, even on panic.
struct EnvVars(&'static [&'static str]);

impl EnvVars {
    fn set(vars: &'static [&'static str], values: &[&str]) -> Self {
        for (name, value) in vars.iter().zip(values) {
            std::env::set_var(name, value);
        }
        Self(vars)
    }
}

impl Drop for EnvVars {
    fn drop(&mut self) {
        for name in self.0 {
            std::env::remove_var(name);
        }
    }
}

const ENV_VARS: &[&str] = &["ECOBEE_AUTH0", "ECOBEE_SCOPES", "ECOBEE_TIMEOUT_SECS"];

#[test]
fn environment_overrides_file_values() {
    let _env = EnvVars::set(ENV_VARS, &["from-env", "smartRead smartWrite", "12"]);

    let settings = FlowSettings::from_toml_str(r#"auth0 = "from-file""#)
        .expect("parse")
        .apply_env()
        .expect("env");

    assert_eq!(settings.auth0.as_deref(), Some("from-env"));
    assert_eq!(settings.scopes, vec!["smartRead".to_string(), "smartWrite".to_string()]);
    assert_eq!(settings.timeout_secs, 12);

    std::env::set_var("ECOBEE_TIMEOUT_SECS", "twelve");
    let err = FlowSettings::default().apply_env().unwrap_err();
    assert!(matches!(err, EcobeeError::Configuration(_)));
}
