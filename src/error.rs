use std::io;

use thiserror::Error;

/// Failure taxonomy for one daily run.  Nothing is retried; every variant
/// is fatal to the run that raised it and the staging tree is left as-is
/// for the next run's purge to reconcile.
#[derive(Error, Debug)]
pub enum TransferError {
    #[error("ftp connection failed: {0}")]
    Connection(#[from] suppaftp::FtpError),

    /// Non-"220" welcome line under strict greeting validation.
    #[error("server greeting rejected: {0}")]
    Greeting(String),

    /// A single file's retrieval failed; the remaining fetch list for the
    /// day is abandoned.
    #[error("transfer of {name} failed: {source}")]
    Transfer {
        name: String,
        source: suppaftp::FtpError,
    },

    #[error("filesystem operation failed: {0}")]
    Filesystem(#[from] io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}
