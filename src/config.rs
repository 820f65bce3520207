use std::env;

use crate::error::TransferError;

/// Everything one daily run needs, supplied by the caller.  There is no
/// process-wide default; each binary builds one of these and hands it to
/// [`DailyTransfer`](crate::task::DailyTransfer).
#[derive(Debug, Clone)]
pub struct TransferConfig {
    pub host: String,
    pub username: String,
    pub password: String,
    /// Root of the per-day staging directories.
    pub staging_root: String,
    /// Root of the internal-network tree the files end up in.
    pub destination_root: String,
    /// Abort the run on a non-"220" greeting instead of logging a warning.
    pub strict_greeting: bool,
    /// Wall-clock trigger time for the scheduler, "HH:MM".
    pub run_at: String,
    /// IANA zone the trigger time is read in.
    pub time_zone: String,
    /// Seconds between scheduler checks.
    pub poll_secs: u64,
}

impl TransferConfig {
    /// Build a config from the environment.  `FTP_HOST`, `FTP_USER` and
    /// `FTP_PASSWORD` are required; the rest fall back to the defaults
    /// below.
    pub fn from_env() -> Result<TransferConfig, TransferError> {
        Ok(TransferConfig {
            host: required("FTP_HOST")?,
            username: required("FTP_USER")?,
            password: required("FTP_PASSWORD")?,
            staging_root: env::var("STAGING_ROOT")
                .unwrap_or_else(|_| "DownloadedFiles".to_string()),
            destination_root: env::var("DESTINATION_ROOT")
                .unwrap_or_else(|_| "InternalNetwork".to_string()),
            strict_greeting: env::var("STRICT_GREETING")
                .is_ok_and(|v| v == "1" || v == "true"),
            run_at: env::var("RUN_AT").unwrap_or_else(|_| "12:30".to_string()),
            time_zone: env::var("TIME_ZONE").unwrap_or_else(|_| "Europe/Berlin".to_string()),
            poll_secs: 10,
        })
    }
}

fn required(name: &str) -> Result<String, TransferError> {
    env::var(name)
        .map_err(|_| TransferError::Config(format!("environment variable {} is not set", name)))
}
