/// Configuration loader
///
/// Values are resolved per key: process environment first, then a .env
/// file in the working directory, then an adjacent JSON config file.
/// A value found earlier in the chain is never overridden by a later
/// source. Loading is purely syntactic; whether the resolved secrets
/// are actually present is checked at verification time.
use super::schema::Config;
use crate::verification::credential::SaltScheme;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Environment variable holding the base64 credential
pub const POW_VAR: &str = "POW";
/// Environment variable holding the expected hex digest
pub const PRIVATE_KEY_VAR: &str = "PRIVATE_KEY";
/// Environment variable selecting the salt scheme
pub const SCHEME_VAR: &str = "POW_SCHEME";

/// Load configuration from the environment, ./.env, and <executable>.config
pub fn load_config() -> Result<Config, String> {
    let mut values = ambient_env();

    if let Some(file_values) = read_env_file(Path::new(".env")) {
        merge_missing(&mut values, file_values);
    }

    let base = load_file_config()?;

    assemble(values, base)
}

/// Collect the recognized variables from the process environment
fn ambient_env() -> HashMap<String, String> {
    let mut values = HashMap::new();
    for name in [POW_VAR, PRIVATE_KEY_VAR, SCHEME_VAR] {
        if let Ok(value) = std::env::var(name) {
            values.insert(name.to_string(), value);
        }
    }
    values
}

/// Read and parse a .env file; None when the file is absent or unreadable
fn read_env_file(path: &Path) -> Option<HashMap<String, String>> {
    let content = fs::read_to_string(path).ok()?;
    Some(parse_env(&content))
}

/// Parse .env content (simple KEY=VALUE format)
fn parse_env(content: &str) -> HashMap<String, String> {
    let mut values = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim().trim_matches('"').trim_matches('\'');
            values.insert(key.to_string(), value.to_string());
        }
    }
    values
}

/// Fill in values the environment did not provide, never overriding
fn merge_missing(values: &mut HashMap<String, String>, fallback: HashMap<String, String>) {
    for (key, value) in fallback {
        values.entry(key).or_insert(value);
    }
}

/// Load the adjacent config file, if one exists
/// Named: <executable>.config (e.g., "powgate.config")
fn load_file_config() -> Result<Option<Config>, String> {
    let exe_path = std::env::current_exe()
        .map_err(|e| format!("Failed to get executable path: {}", e))?;

    let config_path = format!("{}.config", exe_path.display());

    read_config_file(Path::new(&config_path))
}

/// Read a JSON config file; a missing file is not an error, a broken one is
fn read_config_file(path: &Path) -> Result<Option<Config>, String> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ));
        }
    };

    let config: Config = serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse config file {}: {}", path.display(), e))?;

    Ok(Some(config))
}

/// Apply environment values over the file config (or defaults)
fn assemble(values: HashMap<String, String>, base: Option<Config>) -> Result<Config, String> {
    let mut config = base.unwrap_or_default();

    if let Some(pow) = values.get(POW_VAR) {
        config.pow = pow.clone();
    }

    if let Some(private_key) = values.get(PRIVATE_KEY_VAR) {
        config.private_key = private_key.clone();
    }

    if let Some(tag) = values.get(SCHEME_VAR) {
        config.scheme = SaltScheme::from_str(tag).ok_or_else(|| {
            format!(
                "invalid {} value '{}' (expected 'embedded' or 'appended')",
                SCHEME_VAR, tag
            )
        })?;
    }

    Ok(config)
}
