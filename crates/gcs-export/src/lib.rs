//! One-shot exporter that snapshots the FPP host environment (timezone,
//! coordinates, locale/holiday data) into the JSON document the
//! GoogleCalendarScheduler plugin's scheduler consumes.

pub mod config;
pub mod error;
pub mod locale;
pub mod logging;
pub mod settings;
pub mod snapshot;

use serde_json::Value;
use tracing::{debug, info};

use config::{ExportConfig, KEY_LATITUDE, KEY_LOCALE, KEY_LONGITUDE, KEY_TIMEZONE, KNOWN_REGIONS};
use error::ExportError;
use locale::LocaleDocument;
use settings::{JsonSettingsFile, SettingsSource};
use snapshot::{AcquiredEnvironment, materialize_snapshot, validate, write_snapshot};

pub use snapshot::EnvironmentSnapshot;

/// What a single invocation produced: the document that went to disk plus
/// every diagnostic line that was emitted for it.
#[derive(Debug)]
pub struct ExportReport {
    pub snapshot: EnvironmentSnapshot,
    pub warnings: Vec<String>,
}

impl ExportReport {
    /// Process exit code for a written document: 0 when every mandatory
    /// field validated, 1 otherwise. 2 (sink failure) never reaches a
    /// report; it is the `Err` arm of [`run`].
    pub fn exit_code(&self) -> i32 {
        if self.snapshot.ok { 0 } else { 1 }
    }
}

/// Run the full pipeline: acquire, validate, serialize, persist.
///
/// Recoverable problems (missing settings, absent locale data) end up in the
/// written document's `ok`/`error` fields and as `WARN:` stderr lines; only a
/// sink failure returns `Err`, in which case nothing was written.
pub fn run(config: &ExportConfig) -> Result<ExportReport, ExportError> {
    info!(
        settings = %config.settings.display(),
        locale = %config.locale.display(),
        "acquiring environment"
    );

    let settings = JsonSettingsFile::load(&config.settings);
    let locale = LocaleDocument::load(&config.locale);

    let mut warnings = Vec::new();
    if let Some(problem) = settings.problem() {
        warnings.push(problem.to_string());
    }

    let env = acquire(&settings, &locale);
    let checks = validate(&env);
    warnings.extend(checks.warnings.iter().cloned());

    for warning in &warnings {
        eprintln!("WARN: {warning}");
    }

    let snapshot = materialize_snapshot(env, &checks);
    write_snapshot(&config.output, &snapshot)?;
    info!(output = %config.output.display(), ok = snapshot.ok, "snapshot written");

    Ok(ExportReport { snapshot, warnings })
}

/// Pull the raw field values out of the two upstream sources. No validation
/// happens here; absent values come back as empty strings or 0.0.
pub fn acquire(settings: &dyn SettingsSource, locale: &LocaleDocument) -> AcquiredEnvironment {
    let timezone = settings.get(KEY_TIMEZONE).unwrap_or_default();
    let latitude = coordinate(settings.get(KEY_LATITUDE), locale, "Latitude");
    let longitude = coordinate(settings.get(KEY_LONGITUDE), locale, "Longitude");
    let region = settings.get(KEY_LOCALE).unwrap_or_default();
    let holidays = locale.holidays().unwrap_or(Value::Null);

    if !region.is_empty() && !KNOWN_REGIONS.contains(&region.as_str()) {
        debug!(%region, "locale region is not one of the known selectors");
    }

    AcquiredEnvironment {
        timezone,
        latitude,
        longitude,
        region,
        holidays,
    }
}

/// A coordinate configured in the settings store wins over the locale
/// document's numeric member. Either way, absence collapses to the 0.0
/// sentinel the downstream format uses for "not set". Non-finite parses
/// ("NaN", "inf") have no JSON number representation and count as absent.
fn coordinate(setting: Option<String>, locale: &LocaleDocument, locale_key: &str) -> f64 {
    setting
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .or_else(|| locale.coordinate(locale_key))
        .unwrap_or(0.0)
}
