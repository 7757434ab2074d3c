use std::env;
use std::io;
use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

static LOGGING_INSTALLED: OnceLock<()> = OnceLock::new();

/// Install the stderr tracing subscriber. The first call wins.
///
/// The default filter is `warn`: stderr is part of the exporter's contract
/// (the `WARN:`/`ERROR:` diagnostic lines), so tracing output stays silent
/// unless `GCS_EXPORT_LOG` or `RUST_LOG` asks for it.
pub fn init_logging() {
    LOGGING_INSTALLED.get_or_init(|| {
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(true)
            .with_ansi(false);

        let _ = tracing_subscriber::registry()
            .with(build_filter())
            .with(layer)
            .try_init();
    });
}

fn build_filter() -> EnvFilter {
    if let Ok(spec) = env::var("GCS_EXPORT_LOG") {
        if !spec.trim().is_empty() {
            if let Ok(filter) = EnvFilter::try_new(spec) {
                return filter;
            }
        }
    }

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}
