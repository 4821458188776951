use arboard::Clipboard;

use super::backend::{ClipboardError, ClipboardResult, SystemClipboard};
use super::osc52;
use crate::config::ClipboardBackend;

/// Single-slot clipboard backed by the operating system clipboard.
///
/// Holds its own text buffer; only `copy_from_system`, `copy_to_system` and
/// the `*_system*` methods reach the OS. A fresh `arboard::Clipboard` is opened
/// per call so no OS handle is kept between operations.
#[derive(Debug, Clone, Default)]
pub struct LocalClipboard {
    backend: ClipboardBackend,
    text: Option<String>,
}

impl LocalClipboard {
    pub fn new(backend: ClipboardBackend) -> Self {
        Self {
            backend,
            text: None,
        }
    }

    pub fn backend(&self) -> ClipboardBackend {
        self.backend
    }
}

impl SystemClipboard for LocalClipboard {
    fn get_system_text(&self) -> ClipboardResult<Option<String>> {
        match self.backend {
            ClipboardBackend::System | ClipboardBackend::Auto => read_system(),
            ClipboardBackend::Osc52 => Err(ClipboardError::ReadUnsupported),
        }
    }

    fn set_system_text(&self, text: &str) -> ClipboardResult {
        match self.backend {
            ClipboardBackend::System => write_system(text),
            ClipboardBackend::Osc52 => osc52::copy(text),
            ClipboardBackend::Auto => write_system(text).or_else(|_| osc52::copy(text)),
        }
    }

    fn clear_system(&self) -> ClipboardResult {
        match self.backend {
            ClipboardBackend::System => clear_system(),
            ClipboardBackend::Osc52 => osc52::clear(),
            ClipboardBackend::Auto => clear_system().or_else(|_| osc52::clear()),
        }
    }

    fn get_text(&self) -> Option<String> {
        self.text.clone()
    }

    fn set_text(&mut self, text: Option<String>) {
        self.text = text;
    }
}

fn open() -> ClipboardResult<Clipboard> {
    Clipboard::new().map_err(|_| ClipboardError::SystemUnavailable)
}

fn read_system() -> ClipboardResult<Option<String>> {
    match open()?.get_text() {
        Ok(text) => Ok(Some(text)),
        Err(arboard::Error::ContentNotAvailable) => Ok(None),
        Err(_) => Err(ClipboardError::ReadError),
    }
}

fn write_system(text: &str) -> ClipboardResult {
    open()?
        .set_text(text)
        .map_err(|_| ClipboardError::WriteError)
}

fn clear_system() -> ClipboardResult {
    open()?.clear().map_err(|_| ClipboardError::WriteError)
}
