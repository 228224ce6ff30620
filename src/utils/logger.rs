/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Installs the global `tracing` subscriber
///
/// The level is read from the `LOGLEVEL` environment variable (`TRACE`, `DEBUG`, `INFO`,
/// `WARN`, `ERROR`) and defaults to `INFO`. Calling it again is a no-op, so tests and
/// binaries can both call it freely.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = parse_log_level(&env::var("LOGLEVEL").unwrap_or_default());

        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

        // another subscriber may already be installed by the host application
        let _ = tracing::subscriber::set_global_default(subscriber);
        tracing::debug!("Log level set to: {}", level);
    });
}

/// Maps a textual level to a `tracing::Level`, falling back to `INFO`
#[must_use]
pub fn parse_log_level(value: &str) -> Level {
    match value.trim().to_uppercase().as_str() {
        "TRACE" => Level::TRACE,
        "DEBUG" => Level::DEBUG,
        "WARN" => Level::WARN,
        "ERROR" => Level::ERROR,
        _ => Level::INFO,
    }
}
