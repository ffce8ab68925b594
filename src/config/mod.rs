//! Global client configuration.
//!
//! Configuration lives in a process-wide singleton. It starts at
//! [`SdkConfig::default`] and can be replaced from a JSON settings value or a
//! JSON file; settings are read from the `"sdk"` key.

pub mod schema;

pub use schema::SdkConfig;

use crate::error::{Result, SdkError};
use once_cell::sync::Lazy;
use serde_json::Value;
use std::path::Path;
use std::sync::RwLock;

/// Key under which settings are read.
pub const SETTINGS_KEY: &str = "sdk";

static CONFIG: Lazy<RwLock<SdkConfig>> = Lazy::new(|| RwLock::new(SdkConfig::default()));

/// Loads configuration from a settings value.
///
/// The `"sdk"` member is deserialized and merged over the defaults, the result is
/// validated and then becomes the global configuration. Settings that fail to
/// deserialize are logged and ignored.
///
/// # Example
///
/// ```
/// use sdk_utils::config::load_config;
/// use serde_json::json;
///
/// let settings = json!({ "sdk": { "timeout": 60000, "validateSsl": false } });
/// let config = load_config(Some(settings)).unwrap();
/// assert_eq!(config.timeout, 60000);
/// # sdk_utils::config::reset_config();
/// ```
pub fn load_config(settings_json: Option<Value>) -> Result<SdkConfig> {
    let mut config = SdkConfig::default();

    if let Some(user_settings) = settings_json.as_ref().and_then(|s| s.get(SETTINGS_KEY)) {
        match serde_json::from_value::<SdkConfig>(user_settings.clone()) {
            Ok(user_config) => config = config.merge(&user_config),
            Err(e) => log::warn!("Failed to parse {} settings: {}. Using defaults.", SETTINGS_KEY, e),
        }
    }

    config.validate().map_err(SdkError::Config)?;

    if let Ok(mut global_config) = CONFIG.write() {
        *global_config = config.clone();
    }
    log::debug!("configuration loaded: timeout={}ms", config.timeout);

    Ok(config)
}

/// Loads configuration from a JSON file.
///
/// Unlike [`load_config`], an unreadable or malformed file is an error.
pub fn load_config_from_file(path: impl AsRef<Path>) -> Result<SdkConfig> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| SdkError::Config(format!("cannot read {}: {}", path.display(), e)))?;
    let settings: Value = serde_json::from_str(&text)
        .map_err(|e| SdkError::Config(format!("{} is not valid JSON: {}", path.display(), e)))?;
    load_config(Some(settings))
}

/// Gets a copy of the current global configuration.
pub fn get_config() -> SdkConfig {
    CONFIG
        .read()
        .map(|c| c.clone())
        .unwrap_or_else(|_| SdkConfig::default())
}

/// Updates the global configuration in place.
///
/// If the result does not validate, the previous configuration is kept and the
/// validation error is returned.
pub fn update_config<F>(updater: F) -> Result<()>
where
    F: FnOnce(&mut SdkConfig),
{
    let mut config = CONFIG
        .write()
        .map_err(|_| SdkError::Config("configuration lock poisoned".to_string()))?;

    let mut candidate = config.clone();
    updater(&mut candidate);
    candidate.validate().map_err(SdkError::Config)?;
    *config = candidate;
    Ok(())
}

/// Resets the configuration to defaults.
pub fn reset_config() {
    if let Ok(mut config) = CONFIG.write() {
        *config = SdkConfig::default();
    }
}
