//! Integration tests for layered settings.

#![allow(unsafe_code)] // For env var manipulation in tests

use pattern_demos::observer::demo;
use pattern_demos::prelude::*;
use std::env;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_file_settings_drive_the_demo() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("demo.yaml");
    fs::write(
        &path,
        r#"
video_title: "Traits, not classes"
object_subscribers: 1
inline_message: "ping"
"#,
    )
    .unwrap();

    let settings = SettingsBuilder::new().with_file(&path).build().unwrap();
    let console = Console::capture();
    demo::run(&console, &settings).unwrap();

    assert_eq!(
        console.lines(),
        vec![
            "New video released: Traits, not classes",
            "New video available.",
            "ping",
        ]
    );
}

#[test]
fn test_env_overrides_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("demo.toml");
    fs::write(&path, "object_subscribers = 2\nvideo_title = \"from file\"\n").unwrap();

    unsafe {
        env::set_var("TEST_PATTERNS_ENV_VIDEO_TITLE", "from env");
    }

    let settings = SettingsBuilder::new()
        .with_file(&path)
        .with_env_overrides("TEST_PATTERNS_ENV", "__")
        .build();

    unsafe {
        env::remove_var("TEST_PATTERNS_ENV_VIDEO_TITLE");
    }

    let settings = settings.unwrap();
    assert_eq!(settings.video_title, "from env");
    assert_eq!(settings.object_subscribers, 2);
}

#[test]
fn test_unset_prefix_keeps_defaults() {
    let settings = SettingsBuilder::new()
        .with_env_overrides("TEST_PATTERNS_NOTHING_SET", "__")
        .build()
        .unwrap();
    assert_eq!(settings, DemoSettings::default());
}

#[test]
fn test_numeric_looking_strings_survive_env_layer() {
    unsafe {
        env::set_var("TEST_PATTERNS_NUMERIC_VIDEO_TITLE", "1.10");
        env::set_var("TEST_PATTERNS_NUMERIC_INLINE_MESSAGE", "1e5");
        env::set_var("TEST_PATTERNS_NUMERIC_OBJECT_SUBSCRIBERS", "5");
    }

    let settings = SettingsBuilder::new()
        .with_env_overrides("TEST_PATTERNS_NUMERIC", "__")
        .build();

    unsafe {
        env::remove_var("TEST_PATTERNS_NUMERIC_VIDEO_TITLE");
        env::remove_var("TEST_PATTERNS_NUMERIC_INLINE_MESSAGE");
        env::remove_var("TEST_PATTERNS_NUMERIC_OBJECT_SUBSCRIBERS");
    }

    let settings = settings.unwrap();
    assert_eq!(settings.video_title, "1.10");
    assert_eq!(settings.inline_message, "1e5");
    assert_eq!(settings.object_subscribers, 5);

    let console = Console::capture();
    demo::run(&console, &settings).unwrap();
    assert_eq!(console.lines()[0], "New video released: 1.10");
    assert_eq!(console.lines().last().unwrap(), "1e5");
}
