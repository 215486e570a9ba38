use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use objectives::ObjectiveCatalog;
use reorder::Axis;

pub const DEFAULT_CONFIG_PATH: &str = "editor.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub max_list_items: usize,
    pub list_axis: Axis,
    pub log_filter: String,
    pub names_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_list_items: reorder::list::DEFAULT_CAPACITY,
            list_axis: Axis::Vertical,
            log_filter: "info".into(),
            names_file: None,
        }
    }
}

pub fn load_settings(path: Option<&Path>) -> Settings {
    let mut settings = Settings::default();
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));

    if let Ok(raw) = fs::read_to_string(path) {
        apply_file(&mut settings, &raw);
    }
    apply_env(&mut settings, |key| std::env::var(key).ok());

    settings
}

fn apply_file(settings: &mut Settings, raw: &str) {
    let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) else {
        return;
    };
    if let Some(v) = file_cfg.get("max_list_items") {
        set_max_list_items(settings, v);
    }
    if let Some(v) = file_cfg.get("list_axis") {
        set_list_axis(settings, v);
    }
    if let Some(v) = file_cfg.get("log_filter") {
        settings.log_filter = v.clone();
    }
    if let Some(v) = file_cfg.get("names_file") {
        settings.names_file = Some(PathBuf::from(v));
    }
}

fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("EDITOR_LOG") {
        settings.log_filter = v;
    }
    if let Some(v) = lookup("APP__MAX_LIST_ITEMS") {
        set_max_list_items(settings, &v);
    }
    if let Some(v) = lookup("APP__LIST_AXIS") {
        set_list_axis(settings, &v);
    }
    if let Some(v) = lookup("APP__NAMES_FILE") {
        settings.names_file = Some(PathBuf::from(v));
    }
}

fn set_max_list_items(settings: &mut Settings, raw: &str) {
    if let Ok(parsed) = raw.trim().parse::<usize>() {
        if parsed > 0 {
            settings.max_list_items = parsed;
        }
    }
}

fn set_list_axis(settings: &mut Settings, raw: &str) {
    if let Ok(axis) = raw.parse::<Axis>() {
        settings.list_axis = axis;
    }
}

pub fn load_catalog(settings: &Settings) -> anyhow::Result<ObjectiveCatalog> {
    let Some(path) = settings.names_file.as_deref() else {
        return Ok(ObjectiveCatalog::placeholder());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read objective names '{}'", path.display()))?;
    toml::from_str(&raw)
        .with_context(|| format!("invalid objective names file '{}'", path.display()))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
