use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;

use crate::errors::ShellError;

/// Points the global subscriber at a log file. With no file configured,
/// tracing stays uninitialized and events go nowhere; the alternate
/// screen owns stdout/stderr, so there is no console fallback.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init(log_file: Option<&Path>) -> Result<(), ShellError> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(ShellError::LogFile)?;
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_thread_names(false)
        .try_init();
    Ok(())
}
