use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use jiff::civil::Date;
use log::info;
use walkdir::WalkDir;

use crate::day_marker;
use crate::error::TransferError;
use crate::remote::RemoteSource;

/// Name filter applied to the remote listing.  Eligibility is decided on
/// the name alone because the listing has no type metadata.
pub type NameFilter = fn(&str) -> bool;

/// Default policy: the name contains the literal substring ".txt".
/// Case-sensitive, so "b.TXT" is skipped.
pub fn txt_name_filter(name: &str) -> bool {
    name.contains(".txt")
}

/// Manages the per-day staging directory under `staging_root` and pulls
/// eligible remote entries into it.
pub struct Stager {
    pub staging_root: String,
    pub eligible: NameFilter,
}

impl Stager {
    pub fn new(staging_root: &str) -> Stager {
        Stager {
            staging_root: staging_root.to_string(),
            eligible: txt_name_filter,
        }
    }

    /// Staging directory for the day.  Does not check if it exists.
    pub fn staging_dir(&self, day: Date) -> PathBuf {
        Path::new(&self.staging_root).join(day_marker(day))
    }

    /// Reconcile the day's staging directory, then pull every eligible
    /// remote entry into it.  At the start of the fetch the directory is
    /// newly created or freshly emptied; it never holds leftovers from a
    /// prior run for the same day.  A failed retrieval aborts the
    /// remaining list.
    pub fn prepare_and_fetch(
        &self,
        session: &mut dyn RemoteSource,
        day: Date,
    ) -> Result<(), TransferError> {
        let dir = self.staging_dir(day);

        // every run gets the most recent remote state, so anything staged
        // earlier for this day is no longer needed
        if dir.is_dir() {
            info!(
                "Directory contents purged at {} for day {}",
                dir.display(),
                day_marker(day)
            );
            for entry in WalkDir::new(&dir) {
                let entry = entry.map_err(io::Error::from)?;
                if entry.file_type().is_file() {
                    fs::remove_file(entry.path())?;
                }
            }
        } else {
            info!(
                "Setting up download folder at {} for day {}",
                dir.display(),
                day_marker(day)
            );
            fs::create_dir_all(&dir)?;
        }

        for name in session.list()? {
            if !(self.eligible)(&name) {
                continue;
            }
            let bytes = session.retrieve(&name)?;
            fs::write(dir.join(&name), bytes)?;
            info!("File {} downloaded", name);
        }

        Ok(())
    }
}
