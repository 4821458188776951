use std::sync::{Arc, Mutex, MutexGuard};

use super::backend::{ClipboardResult, SystemClipboard};

/// Handle to a process-local "system" clipboard that several
/// [`MemoryClipboard`]s can share, standing in for the OS clipboard.
#[derive(Debug, Clone, Default)]
pub struct SharedSystemText(Arc<Mutex<Option<String>>>);

impl SharedSystemText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<String> {
        self.lock().clone()
    }

    /// Overwrite the shared text, as another process writing the clipboard would.
    pub fn set(&self, text: Option<String>) {
        *self.lock() = text;
    }

    fn lock(&self) -> MutexGuard<'_, Option<String>> {
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Single-slot clipboard that never touches the OS.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    system: SharedSystemText,
    text: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_system(system: SharedSystemText) -> Self {
        Self { system, text: None }
    }

    pub fn system(&self) -> &SharedSystemText {
        &self.system
    }
}

impl SystemClipboard for MemoryClipboard {
    fn get_system_text(&self) -> ClipboardResult<Option<String>> {
        Ok(self.system.get())
    }

    fn set_system_text(&self, text: &str) -> ClipboardResult {
        self.system.set(Some(text.to_string()));
        Ok(())
    }

    fn clear_system(&self) -> ClipboardResult {
        self.system.set(None);
        Ok(())
    }

    fn get_text(&self) -> Option<String> {
        self.text.clone()
    }

    fn set_text(&mut self, text: Option<String>) {
        self.text = text;
    }
}
