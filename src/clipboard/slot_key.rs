use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SlotclipError;

/// The slot that is routed to the single-slot system clipboard.
pub const SYSTEM_SLOT: u32 = 1;

/// Canonical name of a clipboard slot: one or more ASCII letters, digits or
/// underscores. Integers and strings with the same text map to the same key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SlotKey(String);

impl SlotKey {
    pub fn system() -> Self {
        SlotKey(SYSTEM_SLOT.to_string())
    }

    pub fn is_system(&self) -> bool {
        self.0 == "1"
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SlotKey {
    type Error = SlotclipError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        if is_valid_key(&raw) {
            Ok(SlotKey(raw))
        } else {
            Err(SlotclipError::InvalidKey(Some(raw)))
        }
    }
}

impl From<SlotKey> for String {
    fn from(key: SlotKey) -> Self {
        key.0
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SlotKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for SlotKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

fn is_valid_key(raw: &str) -> bool {
    !raw.is_empty() && raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Anything a caller may use to name a slot.
///
/// `slot_text` returns the string form before validation, `None` for a missing
/// identifier.
pub trait SlotId {
    fn slot_text(&self) -> Option<String>;
}

macro_rules! impl_slot_id_for_integers {
    ($($int:ty),*) => {
        $(
            impl SlotId for $int {
                fn slot_text(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

impl_slot_id_for_integers!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl SlotId for str {
    fn slot_text(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl SlotId for String {
    fn slot_text(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl SlotId for SlotKey {
    fn slot_text(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

impl<T: SlotId + ?Sized> SlotId for &T {
    fn slot_text(&self) -> Option<String> {
        (**self).slot_text()
    }
}

impl<T: SlotId> SlotId for Option<T> {
    fn slot_text(&self) -> Option<String> {
        self.as_ref().and_then(SlotId::slot_text)
    }
}

/// Convert a caller-supplied slot identifier into its canonical key.
///
/// Fails with [`SlotclipError::InvalidKey`] for a missing identifier or one
/// whose string form is not alphanumeric/underscore.
pub fn normalize_key(raw: impl SlotId) -> Result<SlotKey, SlotclipError> {
    match raw.slot_text() {
        Some(text) => SlotKey::try_from(text),
        None => Err(SlotclipError::InvalidKey(None)),
    }
}
