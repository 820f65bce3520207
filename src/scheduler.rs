use std::thread;
use std::time::Duration;

use jiff::civil::{Date, Time};
use jiff::tz::TimeZone;
use log::info;

use crate::error::TransferError;
use crate::task::DailyTransfer;

/// Fire the daily task once per calendar date at the configured wall-clock
/// time, checking every `poll_secs`.  Runs are strictly serialized: a run
/// completes fully, or fails fatally and the error propagates out of the
/// loop.  Missed trigger times are not made up after a restart.
pub fn run_daily(task: &DailyTransfer) -> Result<(), TransferError> {
    let config = &task.config;
    let tz = TimeZone::get(&config.time_zone)
        .map_err(|e| TransferError::Config(e.to_string()))?;
    let run_at = Time::strptime("%H:%M", &config.run_at)
        .map_err(|e| TransferError::Config(e.to_string()))?;

    info!(
        "Scheduling daily file download at {} {}",
        config.run_at, config.time_zone
    );

    let startup = jiff::Timestamp::now().to_zoned(tz.clone());
    // if today's trigger already passed, the first fire is tomorrow
    let mut last_run: Option<Date> = if startup.time() >= run_at {
        Some(startup.date())
    } else {
        None
    };

    loop {
        let now = jiff::Timestamp::now().to_zoned(tz.clone());
        if now.time() >= run_at && last_run != Some(now.date()) {
            info!("Running daily file download for {}", now.date());
            task.run_for(now.date())?;
            last_run = Some(now.date());
        }
        thread::sleep(Duration::from_secs(config.poll_secs));
    }
}
