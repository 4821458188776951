//! Shared test utilities for slotclip

#[cfg(test)]
pub mod test_helpers {
    use std::sync::{Arc, Mutex};

    use crate::clipboard::{MemoryClipboard, MultiSlotClipboard, RemoteTransport, TransportError};

    /// Multi-slot clipboard over an in-memory delegate, no remote
    pub fn test_clipboard() -> MultiSlotClipboard<MemoryClipboard> {
        MultiSlotClipboard::new(MemoryClipboard::new())
    }

    /// Remote transport whose server is always unreachable
    pub struct UnreachableTransport;

    impl RemoteTransport for UnreachableTransport {
        fn paste(&self) -> Result<String, TransportError> {
            Err(TransportError::Network("connection refused".to_string()))
        }

        fn copy(&self, _text: &str) -> Result<(), TransportError> {
            Err(TransportError::Network("connection refused".to_string()))
        }
    }

    /// Remote transport backed by a shared string, recording every copy
    #[derive(Clone, Default)]
    pub struct FakeRemote {
        pub text: Arc<Mutex<String>>,
        pub copies: Arc<Mutex<Vec<String>>>,
    }

    impl FakeRemote {
        pub fn with_text(text: &str) -> Self {
            let remote = Self::default();
            *remote.text.lock().unwrap() = text.to_string();
            remote
        }

        pub fn copies(&self) -> Vec<String> {
            self.copies.lock().unwrap().clone()
        }
    }

    impl RemoteTransport for FakeRemote {
        fn paste(&self) -> Result<String, TransportError> {
            Ok(self.text.lock().unwrap().clone())
        }

        fn copy(&self, text: &str) -> Result<(), TransportError> {
            *self.text.lock().unwrap() = text.to_string();
            self.copies.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }
}
