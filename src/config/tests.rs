use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use crate::error::CatalogError;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn swap(key: &'static str, val: Option<&str>) -> Self {
        let old = std::env::var_os(key);
        restore(key, val.map(Into::into));
        Self { key, old }
    }

    fn set(key: &'static str, val: &str) -> Self {
        Self::swap(key, Some(val))
    }

    fn remove(key: &'static str) -> Self {
        Self::swap(key, None)
    }
}

fn restore(key: &str, val: Option<std::ffi::OsString>) {
    // Callers hold `env_lock`, so no other test touches the environment meanwhile.
    unsafe {
        match val {
            Some(v) => std::env::set_var(key, v),
            None => std::env::remove_var(key),
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        restore(self.key, self.old.take());
    }
}

fn clear_overrides() -> Vec<EnvGuard> {
    vec![
        EnvGuard::remove("ALBUMDEX__LIBRARY__ROOT"),
        EnvGuard::remove("ALBUMDEX__LIBRARY__BASE_URL"),
        EnvGuard::remove("ALBUMDEX__LIBRARY__EXTENSIONS"),
        EnvGuard::remove("ALBUMDEX__OUTPUT__FILE_NAME"),
    ]
}

#[test]
fn resolve_config_path_prefers_albumdex_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("ALBUMDEX_CONFIG_PATH", "/tmp/albumdex-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        PathBuf::from("/tmp/albumdex-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        PathBuf::from("/tmp/xdg-config-home")
            .join("albumdex")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("albumdex")
            .join("config.toml")
    );
}

#[test]
fn missing_config_file_yields_defaults() {
    let _lock = env_lock();
    let _env = clear_overrides();
    let dir = tempfile::tempdir().unwrap();

    let missing = dir.path().join("nope.toml");
    let _g1 = EnvGuard::set("ALBUMDEX_CONFIG_PATH", missing.to_str().unwrap());

    let s = Settings::load(None).unwrap();
    assert_eq!(s.library.root, PathBuf::from("albums"));
    assert_eq!(s.library.base_url, "");
    assert_eq!(s.library.extensions, vec!["mp3".to_string()]);
    assert!(s.library.follow_links);
    assert!(s.library.include_hidden);
    assert_eq!(s.output.file_name, "library.json");
    assert_eq!(s.log.level, "warn");
}

#[test]
fn missing_explicit_config_file_is_an_error() {
    let _lock = env_lock();
    let _env = clear_overrides();
    let dir = tempfile::tempdir().unwrap();

    let err = Settings::load(Some(dir.path().join("typo.toml").as_path())).unwrap_err();
    assert!(matches!(err, CatalogError::Config(_)));
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();
    let _env = clear_overrides();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[library]
root = "/srv/music/albums"
base_url = "https://cdn.example.com/albums/"
extensions = ["mp3", "ogg"]
follow_links = false
include_hidden = false

[output]
file_name = "catalog.json"

[log]
level = "debug"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("ALBUMDEX_CONFIG_PATH", cfg_path.to_str().unwrap());

    let s = Settings::load(None).unwrap();
    assert_eq!(s.library.root, PathBuf::from("/srv/music/albums"));
    assert_eq!(s.library.base_url, "https://cdn.example.com/albums/");
    assert_eq!(s.library.extensions, vec!["mp3".to_string(), "ogg".to_string()]);
    assert!(!s.library.follow_links);
    assert!(!s.library.include_hidden);
    assert_eq!(s.output.file_name, "catalog.json");
    assert_eq!(s.log.level, "debug");
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();
    let _env = clear_overrides();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[library]
base_url = "https://old.example.com/"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("ALBUMDEX__LIBRARY__BASE_URL", "https://new.example.com/");
    let _g2 = EnvGuard::set("ALBUMDEX__LIBRARY__EXTENSIONS", "mp3,flac");

    let s = Settings::load(Some(cfg_path.as_path())).unwrap();
    assert_eq!(s.library.base_url, "https://new.example.com/");
    assert_eq!(s.library.extensions, vec!["mp3".to_string(), "flac".to_string()]);
}

#[test]
fn malformed_config_file_is_an_error() {
    let _lock = env_lock();
    let _env = clear_overrides();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(&cfg_path, "[library\nroot = ").unwrap();

    let err = Settings::load(Some(cfg_path.as_path())).unwrap_err();
    assert!(matches!(err, CatalogError::Config(_)));
}

#[test]
fn validate_rejects_paths_as_output_file_name() {
    for bad in ["", ".", "..", "out/library.json", "/library.json"] {
        let mut s = Settings::default();
        s.output.file_name = bad.to_string();
        assert!(
            matches!(s.validate(), Err(CatalogError::InvalidSettings(_))),
            "{bad:?} should be rejected"
        );
    }

    let s = Settings::default();
    assert!(s.validate().is_ok());
}

#[test]
fn validate_requires_an_extension() {
    let mut s = Settings::default();
    s.library.extensions = vec!["  ".to_string(), ".".to_string()];
    assert!(matches!(s.validate(), Err(CatalogError::InvalidSettings(_))));
}
