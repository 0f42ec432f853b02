//! File-only tracing setup for the terminal client.
//!
//! The TUI owns stdout, so every log line goes to
//! `<cache>/dungeon/logs/<session>/client.log` instead.
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install the global subscriber. Returns the session log directory.
pub fn setup_logging(session_id: Option<&str>) -> Result<PathBuf> {
    let session_id = session_id
        .map(str::to_owned)
        .unwrap_or_else(default_session_id);

    let session_log_dir = log_directory().join(&session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "failed to create log directory {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(true); // colourised output for `tail -f`

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    // Leak the guard to keep the file writer alive for the whole process.
    std::mem::forget(guard);

    tracing::info!(session = %session_id, "logging initialized");
    tracing::info!("log file: {}/client.log", session_log_dir.display());

    Ok(session_log_dir)
}

fn default_session_id() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{timestamp}")
}

/// Platform cache directory for logs.
fn log_directory() -> PathBuf {
    ProjectDirs::from("", "", "dungeon")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("/tmp/dungeon/logs"))
}
