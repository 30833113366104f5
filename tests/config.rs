//! Config file loading

use region_dist::{Config, ExportFormat};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};
use tempfile::TempDir;

/// Every test here reads the process environment through `Config::load`.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

/// Sets variables for the lifetime of the guard and removes them on drop,
/// also when an assertion fails.
struct EnvVars(Vec<&'static str>);

impl EnvVars {
    fn set(vars: &[(&'static str, &str)]) -> Self {
        for (key, value) in vars {
            std::env::set_var(key, value);
        }
        Self(vars.iter().map(|(key, _)| *key).collect())
    }
}

impl Drop for EnvVars {
    fn drop(&mut self) {
        for key in &self.0 {
            std::env::remove_var(key);
        }
    }
}

#[test]
fn test_missing_file_uses_defaults() {
    let _lock = env_lock();
    let dir = TempDir::new().unwrap();
    let config = Config::load(Some(&dir.path().join("absent.toml"))).unwrap();
    assert_eq!(config.request_timeout_secs, Config::default().request_timeout_secs);
    assert_eq!(config.export_format, ExportFormat::Csv);
}

#[test]
fn test_load_toml() {
    let _lock = env_lock();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("region-dist.toml");
    std::fs::write(
        &path,
        r#"
pd_url = "http://pd-0:2379,http://pd-1:2379"
color = false
export_format = "json"
output_dir = "/var/tmp/regions"
"#,
    )
    .unwrap();

    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.pd_url, "http://pd-0:2379,http://pd-1:2379");
    assert!(!config.color);
    assert_eq!(config.export_format, ExportFormat::Json);
    assert_eq!(config.output_dir, PathBuf::from("/var/tmp/regions"));
    // untouched keys keep their defaults
    assert_eq!(config.request_timeout_secs, 10);
    assert_eq!(config.log_level, "info");
}

#[test]
fn test_env_overrides_file() {
    let _lock = env_lock();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("region-dist.toml");
    std::fs::write(
        &path,
        "pd_url = \"http://from-file:2379\"\nrequest_timeout_secs = 3\nlog_level = \"warn\"\n",
    )
    .unwrap();

    let _env = EnvVars::set(&[
        ("REGION_DIST_PD_URL", "http://from-env:2379"),
        ("REGION_DIST_REQUEST_TIMEOUT_SECS", "30"),
        ("REGION_DIST_COLOR", "false"),
    ]);

    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.pd_url, "http://from-env:2379");
    assert_eq!(config.request_timeout_secs, 30);
    assert!(!config.color);
    // keys only the file sets survive
    assert_eq!(config.log_level, "warn");
    assert!(config.validate().is_ok());
}

#[test]
fn test_invalid_values_caught_by_validate() {
    let _lock = env_lock();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "request_timeout_secs = 0\n").unwrap();
    let config = Config::load(Some(&path)).unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn test_empty_pd_url_can_be_overridden() {
    let _lock = env_lock();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.toml");
    std::fs::write(&path, "pd_url = \"\"\n").unwrap();

    let mut config = Config::load(Some(&path)).unwrap();
    assert!(config.validate().is_err());
    config.pd_url = "http://pd:2379".into();
    assert!(config.validate().is_ok());
}
