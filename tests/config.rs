use std::fs;
use std::path::PathBuf;

use taskboard::cli::resolve_config;
use taskboard::config::Config;
use taskboard::error::Error;

#[test]
fn load_reads_all_sections() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("taskboard.toml");
    fs::write(
        &path,
        r##"
[server]
bind = "0.0.0.0:8080"

[storage]
data_dir = "/srv/tasks"
lock_timeout_ms = 250

[categories]
default_color = "#abcdef"
"##,
    )
    .expect("write config");

    let cfg = Config::load(&path).expect("load");
    assert_eq!(cfg.bind_addr().expect("addr").port(), 8080);
    assert_eq!(cfg.storage.data_dir, PathBuf::from("/srv/tasks"));
    assert_eq!(cfg.storage.lock_timeout_ms, 250);
    assert_eq!(cfg.categories.default_color, "#abcdef");

    let storage = cfg.storage();
    assert_eq!(storage.data_dir(), PathBuf::from("/srv/tasks").as_path());
    assert_eq!(storage.lock_timeout_ms(), 250);
}

#[test]
fn load_rejects_wrong_types_and_bad_values() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("taskboard.toml");

    fs::write(&path, "[server]\nbind = 3000").expect("write");
    assert!(matches!(Config::load(&path), Err(Error::TomlParse(_))));

    fs::write(&path, "[storage]\nlock_timeout_ms = 0").expect("write");
    assert!(matches!(Config::load(&path), Err(Error::InvalidConfig(_))));
}

#[test]
fn load_or_default_falls_back() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("taskboard.toml");

    let missing = Config::load_or_default(&path);
    assert_eq!(missing.server.bind, "127.0.0.1:3000");

    fs::write(&path, "[server]\nbind = \"nowhere\"").expect("write");
    let invalid = Config::load_or_default(&path);
    assert_eq!(invalid.server.bind, "127.0.0.1:3000");
}

#[test]
fn save_then_load_preserves_values() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("taskboard.toml");

    let mut cfg = Config::default();
    cfg.categories.default_color = "#ffffff".to_string();
    cfg.save(&path).expect("save");

    let loaded = Config::load(&path).expect("load");
    assert_eq!(loaded.categories.default_color, "#ffffff");
}

#[test]
fn command_line_overrides_win() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[storage]\ndata_dir = \"from-file\"").expect("write");

    let cfg = resolve_config(
        Some(&path),
        Some(PathBuf::from("from-flag")),
        Some("127.0.0.1:9999".to_string()),
    )
    .expect("resolve");
    assert_eq!(cfg.storage.data_dir, PathBuf::from("from-flag"));
    assert_eq!(cfg.server.bind, "127.0.0.1:9999");

    let bad = resolve_config(Some(&path), None, Some("not-an-addr".to_string()));
    assert!(matches!(bad, Err(Error::InvalidConfig(_))));

    let missing = resolve_config(Some(&dir.path().join("absent.toml")), None, None);
    assert!(matches!(missing, Err(Error::Io(_))));
}
