//! Handlers for the `config` subcommands (`path`, `get`, `set`, `init`),
//! plus the TOML dotted-key helpers they are built on.

use std::path::PathBuf;

use crate::cli::ConfigAction;
use crate::config::CliConfig;
use crate::error::{Error, Result};

/// Dispatches a `config` subcommand.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Get { key } => cmd_config_get(config_path, &key),
        ConfigAction::Set { key, value } => cmd_config_set(config_path, &key, &value),
        ConfigAction::Init { file, force } => cmd_config_init(file.as_deref(), force),
    }
}

/// Shows the resolved config file path.
pub fn cmd_config_path(config_path: Option<&str>) -> Result<()> {
    let path = CliConfig::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("could not determine config directory for this platform"))?;
    println!("{}", path.display());
    if !path.exists() {
        eprintln!("(file does not exist — run `lektyr config init` to create it)");
    }
    Ok(())
}

/// Prints one configuration value by dotted key.
pub fn cmd_config_get(config_path: Option<&str>, key: &str) -> Result<()> {
    let config = CliConfig::load(config_path)?;
    let tree = toml::Value::try_from(&config).map_err(|e| Error::config(e.to_string()))?;
    let value = lookup_key(&tree, key)
        .ok_or_else(|| Error::config(format!("key '{key}' not found in configuration")))?;
    println!("{}", display_value(value));
    Ok(())
}

/// Writes one configuration value by dotted key back to the file.
pub fn cmd_config_set(config_path: Option<&str>, key: &str, value: &str) -> Result<()> {
    let path = CliConfig::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("could not determine config directory"))?;
    if !path.exists() {
        return Err(Error::config(format!(
            "config file does not exist at {}; run `lektyr config init` first",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(&path)
        .map_err(|e| Error::config(format!("failed to read {}: {e}", path.display())))?;
    let mut tree: toml::Value = toml::from_str(&content)
        .map_err(|e| Error::config(format!("failed to parse {}: {e}", path.display())))?;

    assign_key(&mut tree, key, coerce_value(value))?;

    // Re-parse so a typo in the key is caught before it lands on disk
    let rendered = toml::to_string_pretty(&tree).map_err(|e| Error::config(e.to_string()))?;
    toml::from_str::<CliConfig>(&rendered)
        .map_err(|e| Error::config(format!("'{key}' does not fit the configuration: {e}")))?;

    std::fs::write(&path, rendered)
        .map_err(|e| Error::config(format!("failed to write {}: {e}", path.display())))?;
    println!("Set {key} = {value} in {}", path.display());
    Ok(())
}

/// Creates a default configuration file.
pub fn cmd_config_init(file: Option<&str>, force: bool) -> Result<()> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => CliConfig::default_config_path()
            .ok_or_else(|| Error::config("could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "config file already exists at {}; use --force to overwrite",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("failed to create {}: {e}", parent.display())))?;
    }

    let content = CliConfig::default().to_toml_string()?;
    std::fs::write(&path, content)
        .map_err(|e| Error::config(format!("failed to write {}: {e}", path.display())))?;
    println!("Config file created at {}", path.display());
    Ok(())
}

/// Walks a dotted key path down a TOML value tree.
fn lookup_key<'a>(tree: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(tree, |node, part| node.as_table()?.get(part))
}

/// Sets a value at a dotted key path, creating intermediate tables.
fn assign_key(tree: &mut toml::Value, key: &str, value: toml::Value) -> Result<()> {
    let mut parts = key.split('.').peekable();
    let mut node = tree;

    while let Some(part) = parts.next() {
        let table = node
            .as_table_mut()
            .ok_or_else(|| Error::config(format!("'{part}' is not a table")))?;
        if parts.peek().is_none() {
            table.insert(part.to_string(), value);
            return Ok(());
        }
        node = table
            .entry(part.to_string())
            .or_insert_with(|| toml::Value::Table(toml::map::Map::new()));
    }

    Err(Error::config("empty key path"))
}

/// Parses a user-supplied string into a TOML value (bool, then integer,
/// then float, else string).
fn coerce_value(s: &str) -> toml::Value {
    if let Ok(b) = s.parse::<bool>() {
        return toml::Value::Boolean(b);
    }
    if let Ok(i) = s.parse::<i64>() {
        return toml::Value::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return toml::Value::Float(f);
    }
    toml::Value::String(s.to_string())
}

/// Formats a TOML value for stdout; scalars print bare.
fn display_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Array(_) | toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        other => other.to_string(),
    }
}
