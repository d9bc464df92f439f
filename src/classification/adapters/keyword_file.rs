//! Keyword file loading through capability-based filesystem access.

use crate::classification::domain::{KeywordConfig, KeywordConfigError};
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;
use tracing::warn;

/// Reads and parses the keyword document at `path`.
///
/// # Errors
///
/// Returns [`KeywordConfigError::Read`] when the file cannot be read, and the
/// parsing errors of [`KeywordConfig::from_json_str`] otherwise. Blank
/// entries are kept and logged as warnings.
pub fn load_keyword_config(path: &Utf8Path) -> Result<KeywordConfig, KeywordConfigError> {
    let contents = read_file(path).map_err(|source| KeywordConfigError::Read {
        path: path.to_owned(),
        source,
    })?;
    let config = KeywordConfig::from_json_str(&contents)?;
    for list in config.lists_with_blank_entries() {
        warn!(%path, list, "keyword list contains a blank entry");
    }
    Ok(config)
}

fn read_file(path: &Utf8Path) -> io::Result<String> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "keyword path must name a file")
    })?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.read_to_string(file_name)
}
