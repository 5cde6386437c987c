//! Stamp files: empty markers whose mtime records the last successful run.

use crate::error::Error;
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::time::SystemTime;

/// Create or truncate `path` and set its modification time to now.
pub fn touch(path: &Path) -> Result<(), Error> {
    let stamp_err = |source: io::Error| Error::Stamp {
        path: path.to_path_buf(),
        source,
    };
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(stamp_err)?;
    file.set_modified(SystemTime::now()).map_err(stamp_err)?;
    tracing::debug!(path = %path.display(), "touched stamp");
    Ok(())
}
