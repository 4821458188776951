use std::collections::BTreeMap;
use std::path::Path;

use super::backend::SystemClipboard;
use super::remote::RemoteTransport;
use super::slot_key::{SlotId, SlotKey, normalize_key};
use crate::error::Result;
use crate::storage;

/// Snapshot layout on disk: slot key to text, slot "1" included.
/// `null` values are accepted on load and mean "no text".
type Snapshot = BTreeMap<SlotKey, Option<String>>;

/// Clipboard with any number of named text slots.
///
/// Slot "1" is the wrapped single-slot clipboard `C`; every call on that slot
/// is forwarded to it unchanged. All other slots live in memory until `save`.
/// An optional remote transport makes system-text reads and writes follow a
/// remote clipboard server, falling back to the local clipboard when the
/// server cannot be reached.
pub struct MultiSlotClipboard<C> {
    delegate: C,
    remote: Option<Box<dyn RemoteTransport>>,
    slots: BTreeMap<SlotKey, String>,
}

impl<C: SystemClipboard> MultiSlotClipboard<C> {
    pub fn new(delegate: C) -> Self {
        Self::with_remote(delegate, None)
    }

    pub fn with_remote(delegate: C, remote: Option<Box<dyn RemoteTransport>>) -> Self {
        Self {
            delegate,
            remote,
            slots: BTreeMap::new(),
        }
    }

    pub fn delegate(&self) -> &C {
        &self.delegate
    }

    pub fn delegate_mut(&mut self) -> &mut C {
        &mut self.delegate
    }

    pub fn into_delegate(self) -> C {
        self.delegate
    }

    pub fn get_text(&self, slot: impl SlotId) -> Result<Option<String>> {
        let key = normalize_key(slot)?;
        if key.is_system() {
            return Ok(self.delegate.get_text());
        }
        Ok(self.slots.get(&key).cloned())
    }

    /// Store `content` in `slot`; `None` empties the slot.
    pub fn set_text(&mut self, content: Option<String>, slot: impl SlotId) -> Result<()> {
        let key = normalize_key(slot)?;
        self.store(key, content);
        Ok(())
    }

    pub fn has_text(&self, slot: impl SlotId) -> Result<bool> {
        let key = normalize_key(slot)?;
        if key.is_system() {
            return Ok(self.delegate.has_text());
        }
        Ok(self.slots.contains_key(&key))
    }

    pub fn clear_text(&mut self, slot: impl SlotId) -> Result<()> {
        self.set_text(None, slot)
    }

    /// Empty slot "1" and drop every other slot. Nothing is written to disk.
    pub fn clear_all_text(&mut self) {
        self.delegate.set_text(None);
        self.slots.clear();
    }

    /// Keys of all slots holding text, slot "1" first.
    pub fn slots(&self) -> Vec<SlotKey> {
        let system = self.delegate.has_text().then(SlotKey::system);
        system.into_iter().chain(self.slots.keys().cloned()).collect()
    }

    /// One-shot copy of the current system clipboard into `slot`.
    ///
    /// With `clear`, the OS clipboard is emptied afterwards.
    pub fn copy_from_system(&mut self, clear: bool, slot: impl SlotId) -> Result<()> {
        let key = normalize_key(slot)?;
        if key.is_system() {
            self.delegate.copy_from_system(clear)?;
            return Ok(());
        }

        let text = self.get_system_text()?;
        self.store(key, text);

        if clear {
            self.delegate.clear_system()?;
        }
        Ok(())
    }

    /// Overwrite the system clipboard with the text of `slot`.
    pub fn copy_to_system(&self, slot: impl SlotId) -> Result<()> {
        let key = normalize_key(slot)?;
        if key.is_system() {
            self.delegate.copy_to_system()?;
            return Ok(());
        }

        let content = self.slots.get(&key).cloned().unwrap_or_default();
        self.set_system_text(&content)
    }

    /// Current system clipboard text, preferring the remote clipboard.
    ///
    /// Remote text is mirrored into the local OS clipboard before returning.
    pub fn get_system_text(&self) -> Result<Option<String>> {
        if let Some(remote) = &self.remote {
            match remote.paste() {
                Ok(text) => {
                    if let Err(e) = self.delegate.set_system_text(&text) {
                        log::warn!("Could not mirror remote clipboard locally: {}", e);
                    }
                    return Ok(Some(text));
                }
                Err(e) => {
                    log::warn!("{}; using local clipboard only", e);
                }
            }
        }

        Ok(self.delegate.get_system_text()?)
    }

    /// Set the system clipboard, remote first (best-effort) then local.
    pub fn set_system_text(&self, text: &str) -> Result<()> {
        if let Some(remote) = &self.remote
            && let Err(e) = remote.copy(text)
        {
            log::warn!("{}; setting local clipboard only", e);
        }

        self.delegate.set_system_text(text)?;
        Ok(())
    }

    /// Replace all slots with the snapshot stored at `path`.
    ///
    /// On error the current contents are left as they were.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let snapshot: Snapshot = storage::read_structured(path)?;

        let mut slots: BTreeMap<SlotKey, String> = snapshot
            .into_iter()
            .filter_map(|(key, text)| text.map(|text| (key, text)))
            .collect();
        let system_text = slots.remove(&SlotKey::system());

        #[cfg(debug_assertions)]
        log::debug!(
            "Loaded {} slot(s) from {:?} (system slot: {})",
            slots.len(),
            path,
            system_text.is_some()
        );

        self.slots = slots;
        self.store(SlotKey::system(), system_text);
        Ok(())
    }

    /// Write every slot holding text, slot "1" included, to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut snapshot: BTreeMap<SlotKey, String> = self.slots.clone();
        if let Some(text) = self.delegate.get_text() {
            snapshot.insert(SlotKey::system(), text);
        }

        #[cfg(debug_assertions)]
        log::debug!("Saving {} slot(s) to {:?}", snapshot.len(), path);

        storage::write_structured(&snapshot, path)?;
        Ok(())
    }

    fn store(&mut self, key: SlotKey, content: Option<String>) {
        if key.is_system() {
            self.delegate.set_text(content);
            return;
        }

        match content {
            Some(text) => {
                self.slots.insert(key, text);
            }
            None => {
                self.slots.remove(&key);
            }
        }
    }
}

#[cfg(test)]
#[path = "multi_slot_tests.rs"]
mod multi_slot_tests;
