use thiserror::Error;

pub type ClipboardResult<T = ()> = Result<T, ClipboardError>;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("system clipboard unavailable")]
    SystemUnavailable,
    #[error("failed to read system clipboard")]
    ReadError,
    #[error("failed to write system clipboard")]
    WriteError,
    #[error("clipboard backend cannot read")]
    ReadUnsupported,
}

/// Single-slot clipboard contract.
///
/// An implementor keeps one text buffer of its own (`get_text`/`set_text`)
/// and can move text between that buffer and the operating system clipboard.
/// The `*_system*` methods touch the shared OS clipboard directly, which other
/// processes may change at any time.
pub trait SystemClipboard {
    /// Current OS clipboard text, `None` if it holds no text.
    fn get_system_text(&self) -> ClipboardResult<Option<String>>;

    fn set_system_text(&self, text: &str) -> ClipboardResult;

    fn clear_system(&self) -> ClipboardResult;

    fn get_text(&self) -> Option<String>;

    fn set_text(&mut self, text: Option<String>);

    fn has_text(&self) -> bool {
        self.get_text().is_some()
    }

    /// Read the OS clipboard into this buffer, optionally clearing the OS
    /// clipboard afterwards.
    fn copy_from_system(&mut self, clear: bool) -> ClipboardResult {
        let text = self.get_system_text()?;
        self.set_text(text);

        if clear {
            self.clear_system()?;
        }
        Ok(())
    }

    /// Write this buffer to the OS clipboard. An empty buffer writes "".
    fn copy_to_system(&self) -> ClipboardResult {
        let text = self.get_text().unwrap_or_default();
        self.set_system_text(&text)
    }
}
