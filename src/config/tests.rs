use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use crate::queue::{FairQueue, ShuffleMode, SkipMode};
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
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_fairqueue_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("FAIRQUEUE_CONFIG_PATH", "/tmp/fairqueue-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/fairqueue-test-config.toml")
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
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("fairqueue")
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
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("fairqueue")
            .join("config.toml")
    );
}

#[test]
fn defaults_match_reference_behavior() {
    let s = Settings::default();
    assert_eq!(s.queue.shuffle_mode, ShuffleModeSetting::Sampled);
    assert_eq!(s.queue.skip_mode, SkipModeSetting::Partial);
}

#[test]
fn settings_load_from_config_file_and_parse_mode_aliases() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[queue]
shuffle_mode = "fisher-yates"
skip_mode = "all-or-nothing"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("FAIRQUEUE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("FAIRQUEUE__QUEUE__SHUFFLE_MODE");
    let _g3 = EnvGuard::remove("FAIRQUEUE__QUEUE__SKIP_MODE");

    let s = Settings::load().unwrap();
    assert_eq!(s.queue.shuffle_mode, ShuffleModeSetting::Uniform);
    assert_eq!(s.queue.skip_mode, SkipModeSetting::Atomic);
}

#[test]
fn settings_missing_file_falls_back_to_defaults() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("does-not-exist.toml");

    let _g1 = EnvGuard::set("FAIRQUEUE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("FAIRQUEUE__QUEUE__SHUFFLE_MODE");
    let _g3 = EnvGuard::remove("FAIRQUEUE__QUEUE__SKIP_MODE");

    let s = Settings::load().unwrap();
    assert_eq!(s.queue.shuffle_mode, ShuffleModeSetting::Sampled);
    assert_eq!(s.queue.skip_mode, SkipModeSetting::Partial);
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[queue]
skip_mode = "partial"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("FAIRQUEUE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("FAIRQUEUE__QUEUE__SKIP_MODE", "atomic");
    let _g3 = EnvGuard::remove("FAIRQUEUE__QUEUE__SHUFFLE_MODE");

    let s = Settings::load().unwrap();
    assert_eq!(s.queue.skip_mode, SkipModeSetting::Atomic);
}

#[test]
fn load_or_default_survives_a_broken_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(&cfg_path, "[queue]\nshuffle_mode = \"sideways\"\n").unwrap();

    let _g1 = EnvGuard::set("FAIRQUEUE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("FAIRQUEUE__QUEUE__SHUFFLE_MODE");
    let _g3 = EnvGuard::remove("FAIRQUEUE__QUEUE__SKIP_MODE");

    assert!(Settings::load().is_err());
    let s = Settings::load_or_default();
    assert_eq!(s.queue.shuffle_mode, ShuffleModeSetting::Sampled);
}

#[test]
fn load_or_default_keeps_a_good_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(&cfg_path, "[queue]\nshuffle_mode = \"uniform\"\nskip_mode = \"atomic\"\n").unwrap();

    let _g1 = EnvGuard::set("FAIRQUEUE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("FAIRQUEUE__QUEUE__SHUFFLE_MODE");
    let _g3 = EnvGuard::remove("FAIRQUEUE__QUEUE__SKIP_MODE");

    let s = Settings::load_or_default();
    assert_eq!(s.queue.shuffle_mode, ShuffleModeSetting::Uniform);
    assert_eq!(s.queue.skip_mode, SkipModeSetting::Atomic);
}

#[test]
fn from_toml_str_reads_embedded_table() {
    let s = Settings::from_toml_str(
        r#"
[queue]
shuffle_mode = "uniform"
"#,
    )
    .unwrap();
    assert_eq!(s.queue.shuffle_mode, ShuffleModeSetting::Uniform);
    // unspecified keys keep their defaults
    assert_eq!(s.queue.skip_mode, SkipModeSetting::Partial);

    assert!(Settings::from_toml_str("[queue]\nskip_mode = 3\n").is_err());
}

#[test]
fn queue_picks_up_modes_from_settings() {
    let settings = QueueSettings {
        shuffle_mode: ShuffleModeSetting::Uniform,
        skip_mode: SkipModeSetting::Atomic,
    };
    let q: FairQueue<(u64, &str)> = FairQueue::with_settings(&settings);
    assert_eq!(q.shuffle_mode(), ShuffleMode::Uniform);
    assert_eq!(q.skip_mode(), SkipMode::Atomic);
}
