//! Handlers for the `config` subcommands.
//!
//! The `cmd_config_*` functions are generic over any [`ConfigManager`];
//! [`handle_config_command`] binds them to [`StroyConfig`]. The TOML
//! dotted-key helpers at the bottom back `config get` and `config set`.

use std::path::PathBuf;

use stroy_core::{Error, Result};

use crate::cli::ConfigAction;
use crate::config::{ConfigManager, StroyConfig};

// ============================================================================
// Command dispatch
// ============================================================================

/// Runs a `config` subcommand against [`StroyConfig`].
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path::<StroyConfig>(config_path),
        ConfigAction::Get { key } => cmd_config_get::<StroyConfig>(config_path, &key),
        ConfigAction::Set { key, value } => {
            cmd_config_set::<StroyConfig>(config_path, &key, &value)
        }
        ConfigAction::Init { file, force } => {
            let target = file.as_deref().or(config_path);
            cmd_config_init::<StroyConfig>(target, force)
        }
    }
}

// ============================================================================
// Generic command handlers
// ============================================================================

/// Prints the resolved config file path.
pub fn cmd_config_path<C: ConfigManager>(config_path: Option<&str>) -> Result<()> {
    let path = C::resolve_config_path(config_path).ok_or_else(|| {
        Error::config("Could not determine config directory for this platform")
    })?;
    println!("{}", path.display());
    if !path.exists() {
        eprintln!(
            "(file does not exist; run `{} config init` to create it)",
            C::project_name()
        );
    }
    Ok(())
}

/// Prints one configuration value by dotted key.
pub fn cmd_config_get<C: ConfigManager>(config_path: Option<&str>, key: &str) -> Result<()> {
    println!("{}", config_value::<C>(config_path, key)?);
    Ok(())
}

/// Looks up one configuration value by dotted key, defaults included.
pub fn config_value<C: ConfigManager>(config_path: Option<&str>, key: &str) -> Result<String> {
    let config = C::load(config_path)?;
    let value = toml::Value::try_from(&config).map_err(|e| Error::config(e.to_string()))?;
    get_nested_value(&value, key)
        .map(format_toml_value)
        .ok_or_else(|| Error::config(format!("Key '{key}' not found in configuration")))
}

/// Sets a value by dotted key in an existing config file.
///
/// Text for a key that holds a string (in the file, or in `C`'s defaults when
/// the file omits it) is stored verbatim; other keys go through
/// [`parse_value`]. The edited file must still load as `C`, so a value of the
/// wrong type or an unknown view name is rejected before anything is written.
pub fn cmd_config_set<C: ConfigManager>(
    config_path: Option<&str>,
    key: &str,
    value: &str,
) -> Result<()> {
    let path = C::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory"))?;
    if !path.exists() {
        return Err(Error::config(format!(
            "Config file does not exist at {}. Run `{} config init` first.",
            path.display(),
            C::project_name()
        )));
    }

    let content = std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
    let mut doc: toml::Value = toml::from_str(&content)
        .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;

    let defaults = toml::Value::try_from(C::default()).map_err(|e| Error::config(e.to_string()))?;
    let existing = get_nested_value(&doc, key).or_else(|| get_nested_value(&defaults, key));
    let parsed = match existing {
        Some(toml::Value::String(_)) => toml::Value::String(value.to_string()),
        _ => parse_value(value),
    };
    set_nested_value(&mut doc, key, parsed)?;

    let toml_str = toml::to_string_pretty(&doc).map_err(|e| Error::config(e.to_string()))?;
    toml::from_str::<C>(&toml_str)
        .map_err(|e| Error::config(format!("Invalid value for '{key}': {e}")))?;
    std::fs::write(&path, toml_str).map_err(|e| Error::io_with_path(e, &path))?;

    tracing::info!(key, value, path = %path.display(), "Updated configuration");
    println!("Set {key} = {value} in {}", path.display());
    Ok(())
}

/// Writes a default configuration file.
pub fn cmd_config_init<C: ConfigManager>(file: Option<&str>, force: bool) -> Result<()> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => C::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }

    let toml_str = C::default().to_toml_string()?;
    std::fs::write(&path, &toml_str).map_err(|e| Error::io_with_path(e, &path))?;

    println!("Config file created at {}", path.display());
    Ok(())
}

// ============================================================================
// TOML dotted-key helpers
// ============================================================================

/// Navigates a dotted key path in a TOML value tree.
pub fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(value, |current, part| current.as_table()?.get(part))
}

/// Sets a value at a dotted key path, creating intermediate tables as needed.
pub fn set_nested_value(root: &mut toml::Value, key: &str, value: toml::Value) -> Result<()> {
    let mut parts: Vec<&str> = key.split('.').collect();
    let last = match parts.pop() {
        Some(last) if !last.is_empty() => last,
        _ => return Err(Error::config("Empty key path")),
    };

    let mut current = root;
    for part in parts {
        let table = current
            .as_table_mut()
            .ok_or_else(|| Error::config("Cannot navigate into a non-table value"))?;
        current = table
            .entry(part)
            .or_insert(toml::Value::Table(toml::map::Map::new()));
    }

    let table = current
        .as_table_mut()
        .ok_or_else(|| Error::config("Cannot set key on a non-table value"))?;
    table.insert(last.to_string(), value);
    Ok(())
}

/// Parses command-line text into a TOML value, auto-detecting the type.
///
/// Priority: bool, then integer, then float, then string.
pub fn parse_value(s: &str) -> toml::Value {
    match s {
        "true" => return toml::Value::Boolean(true),
        "false" => return toml::Value::Boolean(false),
        _ => {}
    }
    if let Ok(i) = s.parse::<i64>() {
        return toml::Value::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return toml::Value::Float(f);
    }
    toml::Value::String(s.to_string())
}

/// Formats a TOML value for display.
pub fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(dt) => dt.to_string(),
        toml::Value::Array(_) | toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config_file(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("config.toml");
        let config = StroyConfig::default();
        std::fs::write(&path, config.to_toml_string().unwrap()).unwrap();
        path
    }

    // ------------------------------------------------------------------------
    // cmd_config_path tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_cmd_config_path_explicit() {
        let result = cmd_config_path::<StroyConfig>(Some("/explicit/config.toml"));
        assert!(result.is_ok());
    }

    // ------------------------------------------------------------------------
    // cmd_config_get tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_config_value_nested_key() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = config_file(&dir);
        let value =
            config_value::<StroyConfig>(Some(path.to_str().unwrap()), "company.phone").unwrap();
        assert_eq!(value, "+7 (495) 123-45-67");
    }

    #[test]
    fn test_config_value_without_file_uses_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("none.toml");
        let value =
            config_value::<StroyConfig>(Some(path.to_str().unwrap()), "backup.auto_backup")
                .unwrap();
        assert_eq!(value, "true");
    }

    #[test]
    fn test_cmd_config_get_missing_key() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = config_file(&dir);
        let result = cmd_config_get::<StroyConfig>(Some(path.to_str().unwrap()), "server.port");
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    // ------------------------------------------------------------------------
    // cmd_config_set tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_cmd_config_set_nested_key() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = config_file(&dir);
        let p = path.to_str().unwrap();

        cmd_config_set::<StroyConfig>(Some(p), "security.two_factor_auth", "true").unwrap();
        let config = StroyConfig::load(Some(p)).unwrap();
        assert!(config.settings.security.two_factor_auth);
    }

    #[test]
    fn test_cmd_config_set_rejects_wrong_type() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = config_file(&dir);
        let p = path.to_str().unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        let err = cmd_config_set::<StroyConfig>(Some(p), "backup.auto_backup", "daily");
        assert!(err.unwrap_err().to_string().contains("Invalid value"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_cmd_config_set_keeps_digits_as_text_for_string_keys() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = config_file(&dir);
        let p = path.to_str().unwrap();

        cmd_config_set::<StroyConfig>(Some(p), "company.phone", "84951234567").unwrap();
        cmd_config_set::<StroyConfig>(Some(p), "company.name", "2024").unwrap();
        let config = StroyConfig::load(Some(p)).unwrap();
        assert_eq!(config.settings.company.phone, "84951234567");
        assert_eq!(config.settings.company.name, "2024");
    }

    #[test]
    fn test_cmd_config_set_string_key_missing_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[shell]\ninitial_view = \"clients\"\n").unwrap();
        let p = path.to_str().unwrap();

        cmd_config_set::<StroyConfig>(Some(p), "shell.prompt", "42").unwrap();
        let config = StroyConfig::load(Some(p)).unwrap();
        assert_eq!(config.shell.prompt, "42");
        assert_eq!(config.shell.initial_view, stroy_crm::ViewId::Clients);
    }

    #[test]
    fn test_cmd_config_set_missing_file() {
        let result =
            cmd_config_set::<StroyConfig>(Some("/nonexistent/config.toml"), "key", "value");
        assert!(result.unwrap_err().to_string().contains("does not exist"));
    }

    // ------------------------------------------------------------------------
    // cmd_config_init tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_cmd_config_init_creates_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("stroycrm").join("config.toml");

        cmd_config_init::<StroyConfig>(Some(path.to_str().unwrap()), false).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("[company]"));
        assert!(content.contains("[shell]"));
    }

    #[test]
    fn test_cmd_config_init_no_overwrite() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "existing").unwrap();

        let result = cmd_config_init::<StroyConfig>(Some(path.to_str().unwrap()), false);
        assert!(result.unwrap_err().to_string().contains("already exists"));
    }

    #[test]
    fn test_cmd_config_init_force_overwrites() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "old content").unwrap();

        cmd_config_init::<StroyConfig>(Some(path.to_str().unwrap()), true).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("info@stroycrm.ru"));
    }

    // ------------------------------------------------------------------------
    // Dotted-key helpers
    // ------------------------------------------------------------------------

    #[test]
    fn test_get_nested_value() {
        let val: toml::Value = toml::from_str("[shell]\nprompt = \"> \"").unwrap();
        assert_eq!(
            get_nested_value(&val, "shell.prompt"),
            Some(&toml::Value::String("> ".into()))
        );
        assert!(get_nested_value(&val, "shell.missing").is_none());
        assert!(get_nested_value(&val, "shell.prompt.deeper").is_none());
    }

    #[test]
    fn test_set_nested_value_creates_section() {
        let mut val = toml::Value::Table(toml::map::Map::new());
        set_nested_value(&mut val, "backup.auto_backup", toml::Value::Boolean(false)).unwrap();
        assert_eq!(
            get_nested_value(&val, "backup.auto_backup"),
            Some(&toml::Value::Boolean(false))
        );
    }

    #[test]
    fn test_set_nested_value_through_scalar_fails() {
        let mut val: toml::Value = toml::from_str("name = \"x\"").unwrap();
        assert!(set_nested_value(&mut val, "name.first", toml::Value::Integer(1)).is_err());
        assert!(set_nested_value(&mut val, "", toml::Value::Integer(1)).is_err());
    }

    #[test]
    fn test_parse_value_types() {
        assert_eq!(parse_value("true"), toml::Value::Boolean(true));
        assert_eq!(parse_value("42"), toml::Value::Integer(42));
        assert_eq!(parse_value("2.5"), toml::Value::Float(2.5));
        assert_eq!(
            parse_value("+7 (495) 000-00-00"),
            toml::Value::String("+7 (495) 000-00-00".to_string())
        );
    }

    #[test]
    fn test_format_toml_value() {
        assert_eq!(format_toml_value(&toml::Value::String("СтройCRM".into())), "СтройCRM");
        assert_eq!(format_toml_value(&toml::Value::Integer(42)), "42");
        assert_eq!(format_toml_value(&toml::Value::Boolean(false)), "false");
    }
}
