//! Conversion state machine
//!
//! Every edit to the input replaces the state wholesale. Formats and an
//! error message can never be held at the same time.

use serde::Serialize;
use tracing::{debug, warn};

use super::AddressFormats;
use crate::address::{AddressCodec, TonCodec};
use crate::constants::{EMPTY_INPUT_MESSAGE, INVALID_ADDRESS_MESSAGE};

/// Outcome of the most recent input
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "formats", rename_all = "lowercase")]
pub enum ConversionState {
    /// Nothing entered yet
    #[default]
    Idle,
    /// Input is empty or whitespace
    Empty,
    /// Input parsed; all forms derived
    Converted(AddressFormats),
    /// Input failed to parse
    Invalid,
}

impl ConversionState {
    pub fn formats(&self) -> Option<&AddressFormats> {
        match self {
            ConversionState::Converted(formats) => Some(formats),
            _ => None,
        }
    }

    /// Message to show under the input, if any
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ConversionState::Empty => Some(EMPTY_INPUT_MESSAGE),
            ConversionState::Invalid => Some(INVALID_ADDRESS_MESSAGE),
            ConversionState::Idle | ConversionState::Converted(_) => None,
        }
    }

    pub fn is_converted(&self) -> bool {
        matches!(self, ConversionState::Converted(_))
    }

    /// Short lowercase name of the variant
    pub fn name(&self) -> &'static str {
        match self {
            ConversionState::Idle => "idle",
            ConversionState::Empty => "empty",
            ConversionState::Converted(_) => "converted",
            ConversionState::Invalid => "invalid",
        }
    }
}

/// Run one conversion attempt. Parse errors are logged and collapsed
/// into [`ConversionState::Invalid`].
pub fn convert<C: AddressCodec>(codec: &C, input: &str) -> ConversionState {
    if input.trim().is_empty() {
        return ConversionState::Empty;
    }

    match codec.parse(input) {
        Ok(address) => {
            let formats = AddressFormats::derive(codec, &address);
            debug!(hex = %formats.hex, "address converted");
            ConversionState::Converted(formats)
        }
        Err(e) => {
            warn!(error = %e, "error converting address");
            ConversionState::Invalid
        }
    }
}

/// Holds the current input and the state derived from it
#[derive(Debug, Clone, Default)]
pub struct AddressConverter<C = TonCodec> {
    codec: C,
    input: String,
    state: ConversionState,
}

impl AddressConverter<TonCodec> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: AddressCodec> AddressConverter<C> {
    /// Converter backed by a custom codec
    pub fn with_codec(codec: C) -> Self {
        Self {
            codec,
            input: String::new(),
            state: ConversionState::Idle,
        }
    }

    /// Replace the input and recompute the state
    pub fn set_input(&mut self, input: impl Into<String>) -> &ConversionState {
        self.input = input.into();
        self.state = convert(&self.codec, &self.input);
        &self.state
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn state(&self) -> &ConversionState {
        &self.state
    }

    pub fn formats(&self) -> Option<&AddressFormats> {
        self.state.formats()
    }

    pub fn message(&self) -> Option<&'static str> {
        self.state.message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::{AddressError, FormatOptions};

    const VALID: &str = "EQD2NMKIwYg6abuadgi6fhhw_JBtX0r1JK3JPlBkp2hxuXh2";

    /// Codec that accepts only the literal "ok"
    struct StubCodec;

    impl AddressCodec for StubCodec {
        type Address = ();

        fn parse(&self, input: &str) -> Result<(), AddressError> {
            if input == "ok" {
                Ok(())
            } else {
                Err(AddressError::UnknownFormat)
            }
        }

        fn to_raw(&self, _: &()) -> String {
            "raw".to_string()
        }

        fn format(&self, _: &(), options: FormatOptions) -> String {
            format!("{}-{}", options.bounceable, options.test_only)
        }
    }

    #[test]
    fn test_initial_state_is_idle() {
        let converter = AddressConverter::new();
        assert_eq!(converter.state(), &ConversionState::Idle);
        assert!(converter.formats().is_none());
        assert!(converter.message().is_none());
    }

    #[test]
    fn test_valid_address() {
        let mut converter = AddressConverter::new();
        let state = converter.set_input(VALID);

        let formats = state.formats().unwrap();
        assert_eq!(
            formats.hex,
            "0:f634c288c1883a69bb9a7608ba7e1870fc906d5f4af524adc93e5064a76871b9"
        );
        assert_eq!(formats.mainnet.bounceable, VALID);
        assert_ne!(formats.mainnet.bounceable, formats.testnet.bounceable);
        assert_ne!(formats.mainnet.non_bounceable, formats.testnet.non_bounceable);
        assert!(converter.message().is_none());
    }

    #[test]
    fn test_invalid_address() {
        let mut converter = AddressConverter::new();
        converter.set_input("not-an-address");
        assert_eq!(converter.state(), &ConversionState::Invalid);
        assert!(converter.formats().is_none());
        assert_eq!(converter.message(), Some(INVALID_ADDRESS_MESSAGE));
    }

    #[test]
    fn test_bad_checksum_is_invalid() {
        let mut converter = AddressConverter::new();
        converter.set_input("EQD2NMKIwYg6abuadgi6fhhw_JBtX0r1JK3JPlBkp2hxuZt6");
        assert_eq!(converter.state(), &ConversionState::Invalid);
    }

    #[test]
    fn test_whitespace_is_prompt_not_error() {
        let mut converter = AddressConverter::new();
        for input in ["", "   ", "\t\n"] {
            converter.set_input(input);
            assert_eq!(converter.state(), &ConversionState::Empty);
            assert_eq!(converter.message(), Some(EMPTY_INPUT_MESSAGE));
            assert_ne!(converter.message(), Some(INVALID_ADDRESS_MESSAGE));
        }
    }

    #[test]
    fn test_valid_to_empty_clears_formats() {
        let mut converter = AddressConverter::new();
        converter.set_input(VALID);
        assert!(converter.state().is_converted());

        converter.set_input("");
        assert_eq!(converter.state(), &ConversionState::Empty);
        assert!(converter.formats().is_none());
        assert_eq!(converter.input(), "");
    }

    #[test]
    fn test_valid_to_invalid_clears_formats() {
        let mut converter = AddressConverter::new();
        converter.set_input(VALID);
        converter.set_input(&VALID[..40]);
        assert!(converter.formats().is_none());
        assert_eq!(converter.message(), Some(INVALID_ADDRESS_MESSAGE));
    }

    #[test]
    fn test_surrounding_whitespace_is_invalid() {
        let mut converter = AddressConverter::new();
        converter.set_input(format!(" {VALID} "));
        assert_eq!(converter.state(), &ConversionState::Invalid);
    }

    #[test]
    fn test_custom_codec() {
        let mut converter = AddressConverter::with_codec(StubCodec);
        let formats = converter.set_input("ok").formats().unwrap().clone();
        assert_eq!(formats.hex, "raw");
        assert_eq!(formats.mainnet.bounceable, "true-false");
        assert_eq!(formats.mainnet.non_bounceable, "false-false");
        assert_eq!(formats.testnet.bounceable, "true-true");
        assert_eq!(formats.testnet.non_bounceable, "false-true");

        converter.set_input("nope");
        assert_eq!(converter.state(), &ConversionState::Invalid);
    }

    #[test]
    fn test_state_serialization() {
        let json = serde_json::to_value(ConversionState::Invalid).unwrap();
        assert_eq!(json["state"], "invalid");

        let mut converter = AddressConverter::new();
        converter.set_input(VALID);
        let json = serde_json::to_value(converter.state()).unwrap();
        assert_eq!(json["state"], "converted");
        assert_eq!(json["formats"]["mainnet"]["bounceable"], VALID);
    }
}
