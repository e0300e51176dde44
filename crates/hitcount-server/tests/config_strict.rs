#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashMap;

use hitcount_server::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
service:
  listen: "0.0.0.0:8000"
  greting: "hi" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn unsupported_version_fails() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert!(err.to_string().contains("version"));
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
service:
  greeting: "hello"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.service.greeting, "hello");
    assert_eq!(cfg.service.listen, "0.0.0.0:8000");
    assert_eq!(cfg.log.level, "info");
}

#[test]
fn env_overrides_file() {
    let path = std::env::temp_dir().join(format!("hitcount-{}.yaml", std::process::id()));
    std::fs::write(
        &path,
        "service:\n  listen: \"127.0.0.1:9000\"\nlog:\n  level: \"warn\"\n",
    )
    .unwrap();

    let env: HashMap<&str, String> = HashMap::from([
        (config::CONFIG_ENV, path.to_string_lossy().into_owned()),
        (config::LISTEN_ENV, "127.0.0.1:9100".to_string()),
    ]);
    let cfg = config::load_with(|k| env.get(k).cloned()).expect("must load");
    std::fs::remove_file(&path).ok();

    assert_eq!(cfg.service.listen, "127.0.0.1:9100");
    assert_eq!(cfg.log.level, "warn");
}

#[test]
fn invalid_listen_override_fails() {
    let env: HashMap<&str, String> =
        HashMap::from([(config::LISTEN_ENV, "nowhere".to_string())]);
    let err = config::load_with(|k| env.get(k).cloned()).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn missing_config_file_is_internal() {
    let env: HashMap<&str, String> = HashMap::from([(
        config::CONFIG_ENV,
        "/definitely/not/here/hitcount.yaml".to_string(),
    )]);
    let err = config::load_with(|k| env.get(k).cloned()).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "INTERNAL");
}
