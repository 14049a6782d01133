//! "Copied" feedback for output fields
//!
//! One field at a time is marked. The mark is cleared by a timer task on
//! the tokio clock; marking again aborts the pending timer and starts a
//! new window.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::constants::COPY_FEEDBACK;
use crate::converter::FieldId;

#[derive(Debug, Default)]
struct Mark {
    field: Option<FieldId>,
    generation: u64,
}

/// Tracks which output field was copied most recently
#[derive(Debug)]
pub struct CopyIndicator {
    mark: Arc<Mutex<Mark>>,
    window: Duration,
    timer: Option<JoinHandle<()>>,
}

impl Default for CopyIndicator {
    fn default() -> Self {
        Self::new(COPY_FEEDBACK)
    }
}

impl CopyIndicator {
    pub fn new(window: Duration) -> Self {
        Self {
            mark: Arc::new(Mutex::new(Mark::default())),
            window,
            timer: None,
        }
    }

    /// Mark `field` as copied and (re)start the window.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mark(&mut self, field: FieldId) {
        let generation = {
            let mut mark = lock(&self.mark);
            mark.generation += 1;
            mark.field = Some(field);
            mark.generation
        };

        if let Some(timer) = self.timer.take() {
            timer.abort();
        }

        let shared = Arc::clone(&self.mark);
        let window = self.window;
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            let mut mark = lock(&shared);
            // a newer mark owns the field now
            if mark.generation == generation {
                mark.field = None;
            }
        }));
    }

    /// Field currently shown as copied
    pub fn current(&self) -> Option<FieldId> {
        lock(&self.mark).field
    }

    pub fn is_copied(&self, field: FieldId) -> bool {
        self.current() == Some(field)
    }

    /// Drop the mark immediately
    pub fn clear(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        let mut mark = lock(&self.mark);
        mark.generation += 1;
        mark.field = None;
    }
}

impl Drop for CopyIndicator {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

fn lock(mark: &Mutex<Mark>) -> MutexGuard<'_, Mark> {
    mark.lock().unwrap_or_else(|e| e.into_inner())
}
