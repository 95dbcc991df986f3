use serde::Deserialize;

use crate::queue::{ShuffleMode, SkipMode};

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/fairqueue/config.toml` or `~/.config/fairqueue/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `FAIRQUEUE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub queue: QueueSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QueueSettings {
    /// How `shuffle_submitter` rearranges a submitter's items.
    pub shuffle_mode: ShuffleModeSetting,
    /// What `skip` does when asked to drop more items than are queued.
    pub skip_mode: SkipModeSetting,
}

impl Default for QueueSettings {
    fn default() -> Self {
        Self {
            shuffle_mode: ShuffleModeSetting::Sampled,
            skip_mode: SkipModeSetting::Partial,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShuffleModeSetting {
    #[serde(alias = "with-replacement", alias = "with_replacement")]
    Sampled,
    #[serde(alias = "fisher-yates", alias = "fisher_yates", alias = "fair")]
    Uniform,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipModeSetting {
    #[serde(alias = "non-atomic", alias = "non_atomic")]
    Partial,
    #[serde(alias = "all-or-nothing", alias = "all_or_nothing")]
    Atomic,
}

impl From<ShuffleModeSetting> for ShuffleMode {
    fn from(setting: ShuffleModeSetting) -> Self {
        match setting {
            ShuffleModeSetting::Sampled => ShuffleMode::Sampled,
            ShuffleModeSetting::Uniform => ShuffleMode::Uniform,
        }
    }
}

impl From<SkipModeSetting> for SkipMode {
    fn from(setting: SkipModeSetting) -> Self {
        match setting {
            SkipModeSetting::Partial => SkipMode::Partial,
            SkipModeSetting::Atomic => SkipMode::Atomic,
        }
    }
}
