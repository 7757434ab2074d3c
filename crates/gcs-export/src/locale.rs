use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

/// Locale document as published by the FPP locale provider. Loaded
/// tolerantly: a missing or malformed file simply means no locale data,
/// which the field checks will report.
#[derive(Debug, Default)]
pub struct LocaleDocument {
    value: Option<Value>,
}

impl LocaleDocument {
    pub fn load(path: &Path) -> Self {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) => {
                debug!(path = %path.display(), %err, "locale document not readable");
                return Self::default();
            }
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(value) if value.is_object() => Self { value: Some(value) },
            Ok(_) => {
                debug!(path = %path.display(), "locale document is not a JSON object");
                Self::default()
            }
            Err(err) => {
                debug!(path = %path.display(), %err, "locale document is not valid JSON");
                Self::default()
            }
        }
    }

    /// Numeric member lookup, used for the `Latitude`/`Longitude` fields.
    pub fn coordinate(&self, key: &str) -> Option<f64> {
        self.value.as_ref()?.get(key)?.as_f64()
    }

    /// The opaque holiday payload, passed through to the snapshot verbatim.
    pub fn holidays(&self) -> Option<Value> {
        self.value.as_ref()?.get("holidays").cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use serde_json::json;
    use tempfile::NamedTempFile;

    fn locale_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp locale file");
        file.write_all(contents.as_bytes()).expect("write locale");
        file
    }

    #[test]
    fn extracts_numeric_coordinates() {
        let file = locale_file(r#"{"Latitude":41.8,"Longitude":-87.6}"#);
        let locale = LocaleDocument::load(file.path());

        assert_eq!(locale.coordinate("Latitude"), Some(41.8));
        assert_eq!(locale.coordinate("Longitude"), Some(-87.6));
    }

    #[test]
    fn non_numeric_coordinates_are_ignored() {
        let file = locale_file(r#"{"Latitude":"41.8"}"#);
        let locale = LocaleDocument::load(file.path());

        assert_eq!(locale.coordinate("Latitude"), None);
    }

    #[test]
    fn holidays_pass_through_verbatim() {
        let file = locale_file(r#"{"holidays":[{"name":"Canada Day","day":1}]}"#);
        let locale = LocaleDocument::load(file.path());

        assert_eq!(
            locale.holidays(),
            Some(json!([{"name":"Canada Day","day":1}]))
        );
    }

    #[test]
    fn missing_document_has_no_data() {
        let dir = tempfile::tempdir().expect("tempdir");
        let locale = LocaleDocument::load(&dir.path().join("locale.json"));

        assert_eq!(locale.coordinate("Latitude"), None);
        assert_eq!(locale.holidays(), None);
    }
}
