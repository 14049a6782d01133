//! Clipboard module - copy-out / paste-in around the converter
//!
//! The clipboard itself is an async boundary ([`Clipboard`]); failures on
//! either side are logged and never surface as conversion errors.

mod indicator;
mod session;

pub use indicator::*;
pub use session::*;

use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Clipboard errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("Clipboard access denied")]
    Denied,
    #[error("Clipboard is empty")]
    Empty,
}

/// System clipboard access
#[allow(async_fn_in_trait)]
pub trait Clipboard {
    async fn write(&self, text: &str) -> Result<(), ClipboardError>;

    async fn read(&self) -> Result<String, ClipboardError>;
}

#[derive(Debug, Default)]
struct ClipboardState {
    contents: Option<String>,
    denied: bool,
}

/// In-process clipboard. Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    state: Arc<Mutex<ClipboardState>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clipboard pre-filled with `text`
    pub fn with_contents(text: impl Into<String>) -> Self {
        let clipboard = Self::new();
        clipboard.lock().contents = Some(text.into());
        clipboard
    }

    /// Simulate a permission prompt being refused
    pub fn set_denied(&self, denied: bool) {
        self.lock().denied = denied;
    }

    /// Current contents without going through the async boundary
    pub fn contents(&self) -> Option<String> {
        self.lock().contents.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ClipboardState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Clipboard for MemoryClipboard {
    async fn write(&self, text: &str) -> Result<(), ClipboardError> {
        let mut state = self.lock();
        if state.denied {
            return Err(ClipboardError::Denied);
        }
        state.contents = Some(text.to_string());
        Ok(())
    }

    async fn read(&self) -> Result<String, ClipboardError> {
        let state = self.lock();
        if state.denied {
            return Err(ClipboardError::Denied);
        }
        state.contents.clone().ok_or(ClipboardError::Empty)
    }
}
