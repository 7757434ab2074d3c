use std::path::{Path, PathBuf};

/// Schema version stamped into every emitted snapshot.
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

/// Producer identifier stamped into every emitted snapshot.
pub const SNAPSHOT_SOURCE: &str = "gcs-export";

/// Settings keys recognized in the FPP settings document.
pub const KEY_TIMEZONE: &str = "TimeZone";
pub const KEY_LATITUDE: &str = "Latitude";
pub const KEY_LONGITUDE: &str = "Longitude";
pub const KEY_LOCALE: &str = "Locale";

/// Locale region selectors FPP ships holiday data for. Advisory only: an
/// unrecognized selector passes through to the snapshot unchanged and is
/// merely noted at debug level, since the scheduler owns region handling.
pub const KNOWN_REGIONS: &[&str] = &["Global", "USA", "Canada"];

const FPP_MEDIA_ROOT: &str = "/home/fpp/media";
const OUTPUT_RELATIVE: &str = "plugins/GoogleCalendarScheduler/runtime/fpp-env.json";
const SETTINGS_RELATIVE: &str = "settings.json";
const LOCALE_RELATIVE: &str = "config/locale.json";

/// Immutable set of filesystem locations the exporter reads and writes.
///
/// Built once up front and passed into [`crate::run`], so there is no
/// process-wide settings state to initialize in the right order.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// FPP settings document (key/value JSON object).
    pub settings: PathBuf,
    /// FPP locale document (coordinates and holiday payload).
    pub locale: PathBuf,
    /// Snapshot destination, overwritten in full on every run.
    pub output: PathBuf,
}

impl ExportConfig {
    /// The fixed locations used on a real FPP host.
    pub fn fpp_defaults() -> Self {
        Self::under_media_root(Path::new(FPP_MEDIA_ROOT))
    }

    /// Same layout relative to an arbitrary media root.
    pub fn under_media_root(root: &Path) -> Self {
        Self {
            settings: root.join(SETTINGS_RELATIVE),
            locale: root.join(LOCALE_RELATIVE),
            output: root.join(OUTPUT_RELATIVE),
        }
    }
}
