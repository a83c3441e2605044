use anyhow::Context;
use cardtable_core::TableConfig;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub const TABLE_CONFIG_FILE: &str = "table.json";

/// Read `table.json` from `dir`, falling back to the built-in layout when the
/// file is absent. A present but malformed file is an error.
pub fn load_table_config(dir: &Path) -> anyhow::Result<TableConfig> {
    load_table_config_or(dir, TableConfig::default)
}

/// Like [`load_table_config`], with the caller choosing the layout used when
/// `dir` has no `table.json`.
pub fn load_table_config_or(
    dir: &Path,
    fallback: impl FnOnce() -> TableConfig,
) -> anyhow::Result<TableConfig> {
    let path = dir.join(TABLE_CONFIG_FILE);
    if !path.exists() {
        tracing::warn!(path = %path.display(), "no table config, using the fallback layout");
        return Ok(fallback());
    }
    load_table_config_file(&path)
}

pub fn load_table_config_file(path: &Path) -> anyhow::Result<TableConfig> {
    let config: TableConfig = load_json(path)?;
    if config.card_size.width == 0 || config.card_size.height == 0 {
        anyhow::bail!("{}: card_size must be non-zero", path.display());
    }
    Ok(config)
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
