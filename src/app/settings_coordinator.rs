//! Settings persistence coordination.
//!
//! Stores application preferences in eframe's persistent storage as JSON
//! strings, one key per setting. Missing or unreadable values fall back to
//! defaults so a corrupt preference never blocks startup.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;
use workhub::UploadTiming;

/// Storage key of the upload simulation timing.
pub const UPLOAD_TIMING_KEY: &str = "upload_timing";
/// Storage key of the last file picker directory.
pub const PICKER_DIRECTORY_KEY: &str = "picker_directory";

/// Preferences restored at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Preferences {
    pub upload_timing: UploadTiming,
    pub picker_directory: Option<PathBuf>,
}

/// Coordinates settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Restores all preferences, using defaults for anything missing.
    pub fn load_preferences(storage: Option<&dyn eframe::Storage>) -> Preferences {
        Preferences {
            upload_timing: Self::load_setting_or(storage, UPLOAD_TIMING_KEY, UploadTiming::default()),
            picker_directory: Self::try_load_setting(storage, PICKER_DIRECTORY_KEY),
        }
    }

    /// Persists all preferences.
    pub fn save_preferences(storage: &mut dyn eframe::Storage, preferences: &Preferences) {
        Self::save_setting(storage, UPLOAD_TIMING_KEY, &preferences.upload_timing);
        if let Some(dir) = &preferences.picker_directory {
            Self::save_setting(storage, PICKER_DIRECTORY_KEY, dir);
        }
    }

    /// Loads a setting with a custom default.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface
    /// * `key` - The storage key for this setting
    /// * `default` - Value used if the key is missing or does not decode
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        Self::try_load_setting(storage, key).unwrap_or(default)
    }

    /// Attempts to load a setting, returning None if not found or invalid.
    ///
    /// Invalid values are logged.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let json_str = storage?.get_string(key)?;
        match Self::decode_setting(key, &json_str) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %format!("{:#}", e), "ignoring stored setting");
                None
            }
        }
    }

    /// Saves a setting to persistent storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(e) => warn!(key, error = %e, "could not encode setting"),
        }
    }

    fn decode_setting<T>(key: &str, json_str: &str) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        serde_json::from_str(json_str).with_context(|| format!("setting '{}' is not valid", key))
    }
}
