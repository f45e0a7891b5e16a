use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("terminal io error: {0}")]
    Io(#[from] io::Error),

    #[error("could not open log file: {0}")]
    LogFile(io::Error),
}
