//! Wayfare - Main Entry Point
//!
//! Native travel-booking landing page.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use wayfare::app::application::run_app;
use wayfare::helpers::get_or_create_log_dir;

/// Install stderr logging plus a daily rolling file when a log directory exists
fn init_tracing() -> Option<WorkerGuard> {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    let (file_layer, guard) = match get_or_create_log_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "wayfare.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        Err(e) => {
            eprintln!("File logging disabled: {e}");
            (None, None)
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    guard
}

fn main() {
    let _guard = init_tracing();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Wayfare...");

    run_app();
}
