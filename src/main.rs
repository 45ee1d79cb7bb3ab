//! Jisrubyy Web - Main Entry Point
//!
//! Bilingual developer portfolio: projects, development log and contact.

use jisrubyy_web::app::application::run_app;
use jisrubyy_web::helpers::get_or_create_data_dir;
use time::macros::format_description;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const LOG_FILE_PREFIX: &str = "jisrubyy-web.log";

fn env_filter() -> EnvFilter {
    EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into())
}

/// Install stdout logging plus a daily log file under the data directory.
///
/// The returned guard flushes the file writer on drop.
fn init_tracing() -> Option<WorkerGuard> {
    let timer = LocalTime::new(format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]"
    ));
    let stdout_layer = fmt::layer()
        .with_timer(timer.clone())
        .with_filter(env_filter());

    let (file_layer, guard, dir_error) = match get_or_create_data_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir.join("logs"), LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_timer(timer)
                .with_writer(writer)
                .with_filter(env_filter());
            (Some(layer), Some(guard), None)
        }
        Err(e) => (None, None, Some(e)),
    };

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .init();

    if let Some(e) = dir_error {
        tracing::warn!(error = %e, "Data directory unavailable, logging to stdout only");
    }
    guard
}

fn main() {
    let _guard = init_tracing();

    tracing::info!("Starting Jisrubyy Web...");

    // Run the GPUI application
    run_app();
}
