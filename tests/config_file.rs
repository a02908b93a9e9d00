//! Config file load/save against a temporary directory

use pakquiz::config::QuizConfig;
use pakquiz::QuizError;
use std::fs;
use std::time::Duration;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = QuizConfig::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, QuizConfig::default());
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("pakquiz.toml");

    let config = QuizConfig::default()
        .with_splash_delay(Duration::from_secs(2))
        .with_title("Quiz Time");
    config.save_to(&path).unwrap();

    let loaded = QuizConfig::load_from(&path).unwrap();
    assert_eq!(loaded.splash_delay().unwrap(), Duration::from_secs(2));
    assert_eq!(loaded.title, "Quiz Time");
}

#[test]
fn test_invalid_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pakquiz.toml");

    fs::write(&path, "splash_delay = \"forever\"\n").unwrap();
    assert!(matches!(QuizConfig::load_from(&path), Err(QuizError::ConfigError(_))));

    fs::write(&path, "tick_rate_ms = \"fast\"\n").unwrap();
    assert!(matches!(QuizConfig::load_from(&path), Err(QuizError::ConfigError(_))));
}

#[test]
fn test_save_refuses_invalid_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pakquiz.toml");

    let config = QuizConfig::default().with_tick_rate_ms(0);
    assert!(config.save_to(&path).is_err());
    assert!(!path.exists());
}
