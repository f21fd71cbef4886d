use serial_test::serial;
use std::env;
use std::fs;
use stock_gravity::config::AppConfig;

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("SG_SERVER__PORT");
        env::remove_var("SG_DASHBOARD__BRAND");
        env::remove_var("CONFIG_FILE");
        env::remove_var("HOST");
        env::remove_var("PORT");
        env::remove_var("STATIC_DIR");
        env::remove_var("LOG_JSON");
    }
}

fn load(extra: &[&str]) -> Result<AppConfig, config::ConfigError> {
    let args = std::iter::once("stock-gravity").chain(extra.iter().copied());
    AppConfig::load_from_args(args)
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = load(&[]).expect("defaults load");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.static_dir, "static");
    assert_eq!(config.dashboard.brand, "StockGravity");
    assert_eq!(config.dashboard.engine_label, "GPT-5 Analysis v2.1");
    assert!(!config.log.json);
    assert_eq!(config.bind_address(), "0.0.0.0:3000");
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("SG_SERVER__PORT", "9090");
        env::set_var("SG_DASHBOARD__BRAND", "GravityLab");
    }

    let config = load(&[]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.dashboard.brand, "GravityLab");

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let dir = tempfile::tempdir().expect("temp dir");
    let file_path = dir.path().join("dashboard.yaml");
    fs::write(
        &file_path,
        r#"
server:
  port: 7070
dashboard:
  tagline: "Paper Trading"
"#,
    )
    .expect("Failed to write temp config");

    let path = file_path.to_string_lossy().into_owned();
    let config = load(&["--config", &path]).expect("Failed to load config from file");
    assert_eq!(config.server.port, 7070);
    assert_eq!(config.dashboard.tagline, "Paper Trading");
    // Untouched keys keep their defaults
    assert_eq!(config.dashboard.brand, "StockGravity");
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    clear_env_vars();

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.yaml").to_string_lossy().into_owned();

    assert!(load(&["--config", &path]).is_err());
}

#[test]
#[serial]
fn test_cwd_config_fallback() {
    clear_env_vars();

    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("config.yaml"), "server:\n  port: 6060\n")
        .expect("Failed to write cwd config");

    let original = env::current_dir().expect("cwd");
    env::set_current_dir(dir.path()).expect("enter temp dir");
    let config = load(&[]);
    env::set_current_dir(original).expect("restore cwd");

    assert_eq!(config.expect("cwd config loads").server.port, 6060);
}

#[test]
#[serial]
fn test_cli_beats_env_and_file() {
    clear_env_vars();

    let dir = tempfile::tempdir().expect("temp dir");
    let file_path = dir.path().join("dashboard.yaml");
    fs::write(&file_path, "server:\n  port: 7070\n").expect("write config");
    unsafe {
        env::set_var("SG_SERVER__PORT", "9090");
    }

    let path = file_path.to_string_lossy().into_owned();
    let config = load(&["--config", &path, "--port", "4000", "--log-json", "true"])
        .expect("Failed to load config");
    assert_eq!(config.server.port, 4000);
    assert!(config.log.json);

    clear_env_vars();
}

#[test]
#[serial]
fn test_bare_log_json_flag_enables_json() {
    clear_env_vars();

    let config = load(&["--log-json"]).expect("bare switch accepted");
    assert!(config.log.json);

    let config = load(&["--log-json", "false", "--port", "4100"]).expect("explicit value");
    assert!(!config.log.json);
    assert_eq!(config.server.port, 4100);

    // A bare switch must not swallow the next flag
    let config = load(&["--log-json", "--port", "4200"]).expect("switch then flag");
    assert!(config.log.json);
    assert_eq!(config.server.port, 4200);
}

#[test]
#[serial]
fn test_invalid_cli_flag_is_reported() {
    clear_env_vars();

    let err = load(&["--port", "not-a-port"]).expect_err("bad port rejected");
    assert!(err.to_string().contains("not-a-port"));
}
