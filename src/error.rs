use thiserror::Error;

use crate::clipboard::ClipboardError;
use crate::storage::PersistenceError;

pub type Result<T, E = SlotclipError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum SlotclipError {
    #[error("Clipboard key must be alphanumeric, got {}", display_key(.0))]
    InvalidKey(Option<String>),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error("System clipboard error: {0}")]
    System(#[from] ClipboardError),
}

fn display_key(key: &Option<String>) -> String {
    match key {
        Some(key) => format!("{:?}", key),
        None => "no key".to_string(),
    }
}
