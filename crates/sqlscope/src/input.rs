//! Reading SQL from files or stdin.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Reads SQL from `path`, or from stdin when `path` is `None` or `-`.
///
/// # Errors
///
/// Returns [`Error::ReadFile`] when the file cannot be read and
/// [`Error::Io`] when stdin fails or is not UTF-8.
pub fn read_sql(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            debug!(path = %path.display(), "reading SQL file");
            std::fs::read_to_string(path).map_err(|source| Error::ReadFile {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            debug!("reading SQL from stdin");
            read_from(std::io::stdin().lock())
        }
    }
}

/// Reads all of `reader` as UTF-8 text.
///
/// # Errors
///
/// Returns [`Error::Io`] on read failure or invalid UTF-8.
pub fn read_from(mut reader: impl Read) -> Result<String> {
    let mut sql = String::new();
    reader.read_to_string(&mut sql)?;
    Ok(sql)
}
