//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use starlab::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("STARLAB_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("STARLAB_WINDOW__TITLE");
    assert_eq!(config.window.title, "Test From Env");
}

#[test]
#[serial]
fn test_env_override_nested_number() {
    std::env::set_var("STARLAB_WINDOW__WIDTH", "1024");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("STARLAB_WINDOW__WIDTH");
    assert_eq!(config.window.width, 1024);
}

#[test]
#[serial]
fn test_default_file_matches_builtin_defaults() {
    std::env::remove_var("STARLAB_WINDOW__TITLE");
    std::env::remove_var("STARLAB_WINDOW__WIDTH");

    let cwd = std::env::current_dir().unwrap();
    assert!(cwd.join("config/default.toml").exists());

    let config = AppConfig::load_from(cwd.join("config")).unwrap();
    let defaults = AppConfig::default();
    assert_eq!(config.window.width, defaults.window.width);
    assert_eq!(config.window.height, defaults.window.height);
    assert_eq!(config.rendering.scene_background, defaults.rendering.scene_background);
    assert_eq!(config.rendering.modes_color, defaults.rendering.modes_color);
    assert_eq!(config.scene.path, defaults.scene.path);
}
