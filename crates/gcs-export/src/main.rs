use clap::Parser;

use gcs_export::config::ExportConfig;
use gcs_export::logging;

/// No functional flags: the exporter reads fixed FPP locations and takes no
/// input from the caller. clap supplies --help/--version only.
#[derive(Debug, Parser)]
#[command(
    version,
    about = "Export the FPP environment snapshot for the GoogleCalendarScheduler plugin",
    long_about = None
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    logging::init_logging();

    let config = ExportConfig::fpp_defaults();
    match gcs_export::run(&config) {
        Ok(report) => {
            std::process::exit(report.exit_code());
        }
        Err(err) => {
            eprintln!("ERROR: {err}");
            std::process::exit(2);
        }
    }
}
