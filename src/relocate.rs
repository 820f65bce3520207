use std::fs;
use std::io;
use std::path::Path;

use jiff::civil::Date;
use log::info;

use crate::day_marker;
use crate::error::TransferError;

/// Move every file staged for `day` into the destination tree, replacing
/// any same-named file already there, then drop the emptied staging
/// directory.  The staging directory is expected to hold files only; the
/// upstream fetch policy guarantees it and this is not re-verified.
pub fn relocate(day: Date, staging_root: &str, destination_root: &str) -> Result<(), TransferError> {
    let marker = day_marker(day);
    let staging = Path::new(staging_root).join(&marker);
    let destination = Path::new(destination_root).join(&marker);

    if !destination.is_dir() {
        fs::create_dir_all(&destination)?;
    }

    for entry in fs::read_dir(&staging)? {
        let entry = entry?;
        let source = entry.path();
        let target = destination.join(entry.file_name());
        move_file(&source, &target)?;
        info!(
            "File {} moved from {} to {}.",
            entry.file_name().to_string_lossy(),
            source.display(),
            target.display()
        );
    }

    // every file is out; removal fails loudly if a move left one behind
    fs::remove_dir(&staging)?;
    Ok(())
}

/// Rename, falling back to copy + remove when the destination sits on a
/// different filesystem.
fn move_file(from: &Path, to: &Path) -> Result<(), io::Error> {
    if fs::rename(from, to).is_err() {
        fs::copy(from, to)?;
        fs::remove_file(from)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use jiff::civil::date;

    use super::relocate;
    use crate::day_marker;

    #[test]
    fn relocate_moves_all_files_and_drops_staging() {
        let root = tempfile::tempdir().unwrap();
        let staging_root = root.path().join("staging");
        let destination_root = root.path().join("network");
        let day = date(2023, 10, 7);

        let staging = staging_root.join(day_marker(day));
        fs::create_dir_all(&staging).unwrap();
        fs::write(staging.join("a.txt"), b"alpha").unwrap();
        fs::write(staging.join("b.txt"), b"beta").unwrap();

        relocate(
            day,
            staging_root.to_str().unwrap(),
            destination_root.to_str().unwrap(),
        )
        .unwrap();

        let destination = destination_root.join(day_marker(day));
        assert!(!staging.exists());
        assert_eq!(fs::read(destination.join("a.txt")).unwrap(), b"alpha");
        assert_eq!(fs::read(destination.join("b.txt")).unwrap(), b"beta");
    }

    #[test]
    fn relocate_twice_overwrites_same_names() {
        let root = tempfile::tempdir().unwrap();
        let staging_root = root.path().join("staging");
        let destination_root = root.path().join("network");
        let day = date(2023, 10, 7);

        let staging = staging_root.join(day_marker(day));
        for contents in ["first", "second"] {
            fs::create_dir_all(&staging).unwrap();
            fs::write(staging.join("a.txt"), contents).unwrap();
            relocate(
                day,
                staging_root.to_str().unwrap(),
                destination_root.to_str().unwrap(),
            )
            .unwrap();
        }

        let destination = destination_root.join(day_marker(day));
        assert_eq!(fs::read_dir(&destination).unwrap().count(), 1);
        assert_eq!(fs::read(destination.join("a.txt")).unwrap(), b"second");
    }

    #[test]
    fn relocate_fails_on_missing_staging_dir() {
        let root = tempfile::tempdir().unwrap();
        let day = date(2023, 10, 7);
        assert!(relocate(
            day,
            root.path().join("staging").to_str().unwrap(),
            root.path().join("network").to_str().unwrap(),
        )
        .is_err());
    }
}
