//! A converter wired to a clipboard and copy feedback

use std::time::Duration;
use tracing::{debug, warn};

use super::{Clipboard, CopyIndicator};
use crate::address::{AddressCodec, TonCodec};
use crate::converter::{AddressConverter, ConversionState, FieldId};

/// One user session: input, derived forms, clipboard, copied mark
#[derive(Debug)]
pub struct Session<B, C = TonCodec> {
    converter: AddressConverter<C>,
    clipboard: B,
    indicator: CopyIndicator,
}

impl<B: Clipboard> Session<B, TonCodec> {
    pub fn new(clipboard: B) -> Self {
        Self::with_codec(clipboard, TonCodec)
    }
}

impl<B: Clipboard, C: AddressCodec> Session<B, C> {
    pub fn with_codec(clipboard: B, codec: C) -> Self {
        Self {
            converter: AddressConverter::with_codec(codec),
            clipboard,
            indicator: CopyIndicator::default(),
        }
    }

    /// Use a different copied-feedback window
    pub fn copy_feedback(mut self, window: Duration) -> Self {
        self.indicator = CopyIndicator::new(window);
        self
    }

    /// Typed input
    pub fn set_input(&mut self, input: impl Into<String>) -> &ConversionState {
        self.converter.set_input(input)
    }

    /// Copy one output field to the clipboard and mark it as copied.
    ///
    /// Returns `false` when there is nothing to copy. A failed clipboard
    /// write is logged and the field is still marked.
    pub async fn copy(&mut self, field: FieldId) -> bool {
        let Some(value) = self.converter.formats().map(|f| f.get(field).to_string()) else {
            return false;
        };

        match self.clipboard.write(&value).await {
            Ok(()) => debug!(%field, "copied to clipboard"),
            Err(e) => warn!(%field, error = %e, "clipboard write failed"),
        }
        self.indicator.mark(field);
        true
    }

    /// Replace the input with the clipboard text and convert it.
    ///
    /// Returns `None` and leaves the state untouched if the clipboard
    /// cannot be read.
    pub async fn paste(&mut self) -> Option<&ConversionState> {
        match self.clipboard.read().await {
            Ok(text) => Some(self.converter.set_input(text)),
            Err(e) => {
                warn!(error = %e, "clipboard read failed");
                None
            }
        }
    }

    pub fn converter(&self) -> &AddressConverter<C> {
        &self.converter
    }

    pub fn state(&self) -> &ConversionState {
        self.converter.state()
    }

    pub fn copied(&self) -> Option<FieldId> {
        self.indicator.current()
    }

    pub fn clipboard(&self) -> &B {
        &self.clipboard
    }
}
