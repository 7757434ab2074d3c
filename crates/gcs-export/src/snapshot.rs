use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::config::{SNAPSHOT_SCHEMA_VERSION, SNAPSHOT_SOURCE};
use crate::error::ExportError;

/// The normalized environment document consumed by the scheduler.
///
/// Field declaration order is the emitted key order; the scheduler relies on
/// the shape, and idempotent reruns must be byte-identical.
#[derive(Debug, Serialize)]
pub struct EnvironmentSnapshot {
    #[serde(rename = "schemaVersion")]
    pub schema_version: u32,
    pub source: &'static str,
    pub timezone: String,
    pub latitude: f64,
    pub longitude: f64,
    pub locale: LocaleSection,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LocaleSection {
    pub region: String,
    pub holidays: Value,
}

/// Values pulled from the settings store and locale provider, before
/// validation. Empty string and 0.0 mean "absent" here; a genuine zero
/// coordinate is indistinguishable from a missing one (inherited sentinel,
/// kept for compatibility with existing consumers).
#[derive(Debug, Default)]
pub struct AcquiredEnvironment {
    pub timezone: String,
    pub latitude: f64,
    pub longitude: f64,
    pub region: String,
    pub holidays: Value,
}

/// Outcome of the mandatory-field checks. Every check runs regardless of
/// earlier failures; `warnings` collects one line per failing check while
/// `last_error` keeps only the final failure's text, which is what the
/// emitted document carries.
#[derive(Debug, Default)]
pub struct FieldChecks {
    pub warnings: Vec<String>,
    pub last_error: Option<String>,
}

impl FieldChecks {
    pub fn ok(&self) -> bool {
        self.last_error.is_none()
    }

    fn fail(&mut self, message: &str) {
        self.warnings.push(message.to_string());
        self.last_error = Some(message.to_string());
    }
}

/// Checks run region, then timezone, then coordinates. With last-error-wins
/// reporting this keeps the coordinates message as the document error when
/// the whole source is missing, matching what consumers have always seen.
pub fn validate(env: &AcquiredEnvironment) -> FieldChecks {
    let mut checks = FieldChecks::default();

    if env.region.is_empty() {
        checks.fail("Locale region not present in FPP settings.");
    }
    if env.timezone.is_empty() {
        checks.fail("Timezone not present in FPP settings.");
    }
    if env.latitude == 0.0 || env.longitude == 0.0 {
        checks.fail("Latitude/Longitude not present (or zero) in FPP locale.");
    }

    checks
}

pub fn materialize_snapshot(
    env: AcquiredEnvironment,
    checks: &FieldChecks,
) -> EnvironmentSnapshot {
    EnvironmentSnapshot {
        schema_version: SNAPSHOT_SCHEMA_VERSION,
        source: SNAPSHOT_SOURCE,
        timezone: env.timezone,
        latitude: env.latitude,
        longitude: env.longitude,
        locale: LocaleSection {
            region: env.region,
            holidays: env.holidays,
        },
        ok: checks.ok(),
        error: checks.last_error.clone(),
    }
}

/// Write the snapshot to `path`, truncating any prior content. Deliberately
/// not a temp-file-and-rename: the consumer expects the documented
/// truncate-and-write behavior, and a failed open must leave the previous
/// file untouched.
pub fn write_snapshot(path: &Path, snapshot: &EnvironmentSnapshot) -> Result<(), ExportError> {
    let serialized = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, format!("{serialized}\n")).map_err(|source| ExportError::Sink {
        path: path.to_path_buf(),
        source,
    })
}
