//! slotclip library - multi-slot clipboard
//!
//! Named text slots layered over a single-slot system clipboard, with
//! JSON snapshot persistence and optional remote clipboard sync.

pub mod clipboard;
pub mod config;
pub mod error;
pub mod storage;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use clipboard::{MultiSlotClipboard, SlotKey, SystemClipboard, normalize_key};
pub use config::Config;
pub use error::SlotclipError;
