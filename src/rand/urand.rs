//! OS entropy device (`/dev/urandom` unless told otherwise).

use std::fs::File;
use std::path::Path;

use super::ReadSource;
use crate::error::{Error, Result};

pub const DEFAULT_DEVICE: &str = "/dev/urandom";

/// Open an entropy device or file for a single pool read.
pub fn open(path: &Path) -> Result<ReadSource<File>> {
    let name = path.display().to_string();
    let file = File::open(path).map_err(|source| Error::EntropySourceUnavailable {
        path: name.clone(),
        source,
    })?;
    tracing::debug!(device = %name, "opened entropy source");
    Ok(ReadSource::new(name, file))
}
