use std::fs;
use std::path::Path;

use jiff::civil::Date;
use jiff::tz::TimeZone;

use crate::config::TransferConfig;
use crate::error::TransferError;
use crate::relocate::relocate;
use crate::remote::{self, RemoteSource};
use crate::stage::Stager;

/// One day's unit of work: connect, stage, relocate, close.  Owns the
/// configuration for the lifetime of the process; the session only for
/// the duration of a single run.
pub struct DailyTransfer {
    pub config: TransferConfig,
}

impl DailyTransfer {
    pub fn new(config: TransferConfig) -> DailyTransfer {
        DailyTransfer { config }
    }

    /// Create the destination root if it is missing.  Idempotent; call
    /// once at process startup.
    pub fn ensure_destination_root(&self) -> Result<(), TransferError> {
        let root = Path::new(&self.config.destination_root);
        if !root.is_dir() {
            fs::create_dir_all(root)?;
        }
        Ok(())
    }

    /// Today's date in the configured time zone.
    pub fn today(&self) -> Result<Date, TransferError> {
        let tz = TimeZone::get(&self.config.time_zone)
            .map_err(|e| TransferError::Config(e.to_string()))?;
        Ok(jiff::Timestamp::now().to_zoned(tz).date())
    }

    pub fn run_today(&self) -> Result<(), TransferError> {
        self.run_for(self.today()?)
    }

    /// The full daily flow against a live FTP session.  A failure mid-run
    /// propagates immediately and leaves the staging tree for the next
    /// run's purge to reconcile.
    pub fn run_for(&self, day: Date) -> Result<(), TransferError> {
        let mut session = remote::connect(&self.config)?;
        self.run_with(&mut session, day)?;
        session.close()?;
        Ok(())
    }

    /// Flow with the session supplied, so tests run without a network.
    pub fn run_with(
        &self,
        session: &mut dyn RemoteSource,
        day: Date,
    ) -> Result<(), TransferError> {
        let stager = Stager::new(&self.config.staging_root);
        stager.prepare_and_fetch(session, day)?;
        relocate(day, &self.config.staging_root, &self.config.destination_root)?;
        Ok(())
    }
}
