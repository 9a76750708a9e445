use std::ffi::OsString;
use std::path::PathBuf;

/// Settings file name, resolved against the working directory
pub const SETTINGS_FILE: &str = "utility_settings.json";

/// Environment variable overriding the settings file location
pub const SETTINGS_ENV: &str = "UTILCALC_SETTINGS";

/// Settings path from `UTILCALC_SETTINGS`, falling back to [`SETTINGS_FILE`]
pub fn default_settings_path() -> PathBuf {
    resolve_settings_path(std::env::var_os(SETTINGS_ENV))
}

fn resolve_settings_path(env_value: Option<OsString>) -> PathBuf {
    env_value
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE))
}
