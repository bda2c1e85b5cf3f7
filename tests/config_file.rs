use std::fs;

use ultralight_sizing::{
    app::{self, SizeOptions},
    config::{self, Config, ConfigError},
    i18n::Translator,
    sizing::SizingInput,
};

#[test]
fn missing_config_is_written_with_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("config.toml");

    let cfg = config::load_or_default(&path).expect("load config");
    assert!(path.exists());
    assert_eq!(cfg, Config::default());

    let text = fs::read_to_string(&path).expect("read config");
    assert!(text.contains("Miniplane Top 80"));
    assert_eq!(config::load_or_default(&path).expect("load config"), cfg);
}

#[test]
fn edited_config_changes_the_run() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("config.toml");
    let mut cfg = Config::default();
    cfg.candidates.truncate(1);
    cfg.save(&path).expect("save config");

    let loaded = config::load_or_default(&path).expect("load config");
    let (report, _) = app::size(&loaded, SizeOptions::default()).expect("size command");
    assert_eq!(report.fixed_point.iterations.len(), 1);
    assert!(!report.fixed_point.converged);
    assert_ne!(loaded.to_sizing_input().expect("sizing input"), SizingInput::default());
}

#[test]
fn malformed_config_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "power_tolerance_hp = \"two\"\n").expect("write file");
    assert!(matches!(
        config::load_or_default(&path),
        Err(ConfigError::Serde(_))
    ));
}

#[test]
fn init_config_keeps_existing_file_unless_forced() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("config.toml");
    let tr = Translator::new("en");

    let mut cfg = Config::default();
    cfg.language = "ko".into();
    cfg.save(&path).expect("save config");

    let kept = app::init_config(&path, false, &tr).expect("init config");
    assert_eq!(kept.language, "ko");

    let fresh = app::init_config(&path, true, &tr).expect("init config");
    assert_eq!(fresh, Config::default());
    assert_eq!(config::load_or_default(&path).expect("load config").language, "auto");
}
