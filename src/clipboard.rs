//! Clipboard module for slotclip
//!
//! Provides the multi-slot clipboard and the single-slot delegates it sits on:
//! - System clipboard (via arboard)
//! - OSC 52 escape sequences (for remote terminals)
//! - Auto mode (system with OSC 52 fallback)
//! - In-memory clipboard (headless use and tests)
//! - Optional remote clipboard server (JSON-RPC)

mod backend;
mod memory;
mod multi_slot;
mod osc52;
pub mod remote;
mod slot_key;
mod system;

pub use backend::{ClipboardError, ClipboardResult, SystemClipboard};
pub use memory::{MemoryClipboard, SharedSystemText};
pub use multi_slot::MultiSlotClipboard;
pub use osc52::encode_osc52;
pub use remote::{JsonRpcTransport, RemoteTransport, TransportError};
pub use slot_key::{SYSTEM_SLOT, SlotId, SlotKey, normalize_key};
pub use system::LocalClipboard;
