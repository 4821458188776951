//! OSC 52 clipboard backend
//!
//! Sets the clipboard through a terminal escape sequence. Works over SSH and
//! inside tmux, but the terminal never reports the clipboard back, so this
//! backend is write-only.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::io::{self, Write};

use super::backend::{ClipboardError, ClipboardResult};

pub fn copy(text: &str) -> ClipboardResult {
    write_sequence(&mut io::stdout(), text)
}

/// Terminals treat an empty payload as "clear selection".
pub fn clear() -> ClipboardResult {
    copy("")
}

fn write_sequence<W: Write>(out: &mut W, text: &str) -> ClipboardResult {
    out.write_all(encode_osc52(text).as_bytes())
        .map_err(|_| ClipboardError::WriteError)?;
    out.flush().map_err(|_| ClipboardError::WriteError)
}

/// Format: `\x1b]52;c;{base64}\x07` (`c` selects the clipboard, BEL ends it)
pub fn encode_osc52(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}
