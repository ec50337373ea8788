use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use catalog::source::LAYOUTS_FILE;

pub const CONFIG_FILE: &str = "desk.toml";
const CONFIG_SUBDIR: &str = "reading_desk";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub default_set: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            default_set: "tradicional".into(),
            log_filter: "warn".into(),
        }
    }
}

/// Defaults, then the first `desk.toml` found, then environment overrides.
pub fn load_settings() -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    if let Some(path) = config_candidates().into_iter().find(|path| path.is_file()) {
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read '{}'", path.display()))?;
        apply_file(&mut settings, &raw)
            .with_context(|| format!("invalid settings in '{}'", path.display()))?;
    }

    apply_env(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join(CONFIG_SUBDIR).join(CONFIG_FILE));
    }
    candidates
}

fn apply_file(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg = toml::from_str::<HashMap<String, String>>(raw)?;
    if let Some(v) = file_cfg.get("data_dir") {
        settings.data_dir = PathBuf::from(v);
    }
    if let Some(v) = file_cfg.get("default_set") {
        settings.default_set = v.clone();
    }
    if let Some(v) = file_cfg.get("log_filter") {
        settings.log_filter = v.clone();
    }
    Ok(())
}

fn apply_env(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("DESK_DATA_DIR") {
        settings.data_dir = PathBuf::from(v);
    }
    if let Some(v) = var("APP__DATA_DIR") {
        settings.data_dir = PathBuf::from(v);
    }

    if let Some(v) = var("APP__DEFAULT_SET") {
        settings.default_set = v;
    }

    if let Some(v) = var("APP__LOG_FILTER") {
        settings.log_filter = v;
    }
}

/// Checks that `raw` points at a catalog directory before anything is loaded.
pub fn prepare_data_dir(raw: &Path) -> anyhow::Result<PathBuf> {
    let data_dir = if raw.as_os_str().is_empty() {
        Settings::default().data_dir
    } else {
        raw.to_path_buf()
    };

    let layouts = data_dir.join(LAYOUTS_FILE);
    if !layouts.is_file() {
        anyhow::bail!(
            "'{}' does not look like a catalog directory (missing {LAYOUTS_FILE})",
            data_dir.display()
        );
    }
    Ok(data_dir)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
