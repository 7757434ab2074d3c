use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

/// Capability the exporter needs from the host settings store: retrieve a
/// named scalar, or nothing if absent. Both acquisition strategies FPP has
/// shipped (initialized settings API, direct parse of the persistence file)
/// fit behind this seam; the shipped backend is the direct parse.
pub trait SettingsSource {
    fn get(&self, key: &str) -> Option<String>;
}

/// Settings backend that parses the FPP settings persistence file directly,
/// without initializing the host runtime. Only string-valued entries of the
/// top-level object are recognized.
#[derive(Debug, Default)]
pub struct JsonSettingsFile {
    values: HashMap<String, String>,
    problem: Option<String>,
}

impl JsonSettingsFile {
    /// Load the settings document at `path`.
    ///
    /// Never fails: an unreadable or malformed file yields an empty source
    /// with the problem recorded, so downstream field checks report the
    /// individual missing values.
    pub fn load(path: &Path) -> Self {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) => {
                return Self::unavailable(format!(
                    "FPP settings not readable at {}: {}",
                    path.display(),
                    err
                ));
            }
        };

        let parsed: Value = match serde_json::from_str(&raw) {
            Ok(parsed) => parsed,
            Err(err) => {
                return Self::unavailable(format!(
                    "FPP settings at {} are not valid JSON: {}",
                    path.display(),
                    err
                ));
            }
        };

        let Value::Object(entries) = parsed else {
            return Self::unavailable(format!(
                "FPP settings at {} are not a JSON object",
                path.display()
            ));
        };

        let mut values = HashMap::new();
        for (key, value) in entries {
            if let Value::String(text) = value {
                values.insert(key, text);
            }
        }
        debug!(count = values.len(), "loaded settings entries");

        Self {
            values,
            problem: None,
        }
    }

    fn unavailable(problem: String) -> Self {
        Self {
            values: HashMap::new(),
            problem: Some(problem),
        }
    }

    /// Why the backing file could not be used, if it couldn't.
    pub fn problem(&self) -> Option<&str> {
        self.problem.as_deref()
    }
}

impl SettingsSource for JsonSettingsFile {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

impl SettingsSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}
