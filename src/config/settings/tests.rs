use super::*;
use crate::tools::ToolKind;
use std::collections::HashMap;
use tempfile::tempdir;

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn test_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.tool, ToolChoice::Auto);
    assert_eq!(settings.paths.authselect, PathBuf::from("/usr/bin/authselect"));
    assert_eq!(settings.paths.authconfig, PathBuf::from("/usr/sbin/authconfig"));
    assert_eq!(settings.state_dir, PathBuf::from("/var/lib/authtool"));
    assert_eq!(settings.timeout, Duration::from_secs(300));
}

#[test]
fn test_parse_full_file() {
    let settings = Settings::parse(
        r#"
// pinned for the el7 fleet
tool "authconfig"
authselect "/opt/authselect/bin/authselect"
authconfig "/opt/authconfig/sbin/authconfig"
state-dir "/srv/authtool"
timeout 60
"#,
    )
    .expect("parse");

    assert_eq!(settings.tool, ToolChoice::Fixed(ToolKind::AuthConfig));
    assert_eq!(
        settings.paths.authselect,
        PathBuf::from("/opt/authselect/bin/authselect")
    );
    assert_eq!(
        settings.paths.authconfig,
        PathBuf::from("/opt/authconfig/sbin/authconfig")
    );
    assert_eq!(settings.state_dir, PathBuf::from("/srv/authtool"));
    assert_eq!(settings.timeout, Duration::from_secs(60));
}

#[test]
fn test_parse_partial_keeps_defaults() {
    let settings = Settings::parse("tool \"authselect\"\n").expect("parse");
    assert_eq!(settings.tool, ToolChoice::Fixed(ToolKind::AuthSelect));
    assert_eq!(settings.state_dir, PathBuf::from("/var/lib/authtool"));
}

#[test]
fn test_unknown_setting_rejected() {
    let err = Settings::parse("colour \"auto\"\n").expect_err("unknown key");
    assert!(err.to_string().contains("Unknown setting: 'colour'"));
}

#[test]
fn test_invalid_tool_rejected() {
    assert!(Settings::parse("tool \"sssctl\"\n").is_err());
}

#[test]
fn test_timeout_bounds() {
    assert!(Settings::parse("timeout 0\n").is_err());
    assert!(Settings::parse("timeout \"soon\"\n").is_err());
    assert!(Settings::parse("timeout 86400\n").is_ok());
}

#[test]
fn test_empty_path_rejected() {
    let err = Settings::parse("state-dir \"\"\n").expect_err("empty path");
    assert!(err.to_string().contains("cannot be empty"));
}

#[test]
fn test_syntax_error_has_hint() {
    let err = Settings::parse("tool \"authselect\n").expect_err("broken kdl");
    assert!(err.to_string().contains("KDL parsing error"));
}

#[test]
fn test_env_overrides_file() {
    let dir = tempdir().expect("tempdir");
    let file = dir.path().join("authtool.kdl");
    fs::write(&file, "tool \"authconfig\"\nstate-dir \"/srv/authtool\"\n").expect("write settings");

    let env: HashMap<&str, &str> = HashMap::from([
        ("TOOL", "authselect"),
        ("STATE_DIR", "/run/authtool"),
        ("AUTHSELECT", "/usr/local/bin/authselect"),
    ]);
    let settings = Settings::load_with(Some(file.as_path()), |k| env.get(k).map(|v| v.to_string()))
        .expect("load");

    assert_eq!(settings.tool, ToolChoice::Fixed(ToolKind::AuthSelect));
    assert_eq!(settings.state_dir, PathBuf::from("/run/authtool"));
    assert_eq!(
        settings.paths.authselect,
        PathBuf::from("/usr/local/bin/authselect")
    );
    assert_eq!(settings.source.as_deref(), Some(file.as_path()));
}

#[test]
fn test_config_path_from_env() {
    let dir = tempdir().expect("tempdir");
    let file = dir.path().join("custom.kdl");
    fs::write(&file, "timeout 5\n").expect("write settings");
    let file_str = file.display().to_string();

    let settings = Settings::load_with(None, |k| (k == "CONFIG").then(|| file_str.clone()))
        .expect("load");

    assert_eq!(settings.timeout, Duration::from_secs(5));
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = tempdir().expect("tempdir");
    let missing = dir.path().join("nope.kdl");

    let err = Settings::load_with(Some(missing.as_path()), no_env).expect_err("missing file");
    assert!(err.to_string().contains("not found"));
}

#[test]
fn test_file_errors_name_the_file() {
    let dir = tempdir().expect("tempdir");
    let file = dir.path().join("authtool.kdl");
    fs::write(&file, "bogus 1\n").expect("write settings");

    let err = Settings::from_file(&file).expect_err("bad setting");
    assert!(err.to_string().contains("authtool.kdl"));
}
