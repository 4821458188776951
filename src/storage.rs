//! Snapshot persistence
//!
//! Reads and writes flat JSON structures. The clipboard file is a single
//! object mapping slot keys to text.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

const DATA_DIR: &str = "slotclip";
const CLIPBOARD_FILE: &str = "clipboard.json";

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Could not access clipboard file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid clipboard file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not determine clipboard file path")]
    NoDataDir,
}

impl PersistenceError {
    fn io(path: &Path, source: io::Error) -> Self {
        PersistenceError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn parse(path: &Path, source: serde_json::Error) -> Self {
        // serde_json surfaces underlying read failures as its own error kind
        if source.is_io() {
            return PersistenceError::Io {
                path: path.to_path_buf(),
                source: io::Error::from(source),
            };
        }
        PersistenceError::Parse {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// `<data dir>/slotclip/clipboard.json`
pub fn default_clipboard_path() -> Result<PathBuf, PersistenceError> {
    dirs::data_dir()
        .map(|p| p.join(DATA_DIR).join(CLIPBOARD_FILE))
        .ok_or(PersistenceError::NoDataDir)
}

pub fn read_structured<T: DeserializeOwned>(path: &Path) -> Result<T, PersistenceError> {
    let file = File::open(path).map_err(|e| PersistenceError::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| PersistenceError::parse(path, e))
}

/// Serialize `value` to `path`, replacing any existing file and creating
/// missing parent directories.
pub fn write_structured<T: Serialize>(value: &T, path: &Path) -> Result<(), PersistenceError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| PersistenceError::io(path, e))?;
    }

    let file = File::create(path).map_err(|e| PersistenceError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).map_err(|e| PersistenceError::parse(path, e))?;
    writer
        .write_all(b"\n")
        .and_then(|_| writer.flush())
        .map_err(|e| PersistenceError::io(path, e))
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod storage_tests;
