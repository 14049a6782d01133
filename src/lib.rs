//! TON Address Converter Library
//!
//! Converts a TON address between its raw form and the four friendly forms
//! (mainnet/testnet, bounceable/non-bounceable).
//!
//! The conversion workflow lives in [`converter`]; the address encoding sits
//! behind the [`address::AddressCodec`] trait.

pub mod address;
pub mod clipboard;
pub mod config;
pub mod converter;
pub mod logging;
pub mod page;
pub mod rpc;

/// Fixed protocol values and user-facing messages
pub mod constants {
    use std::time::Duration;

    /// Friendly tag for bounceable addresses
    pub const BOUNCEABLE_TAG: u8 = 0x11;

    /// Friendly tag for non-bounceable addresses
    pub const NON_BOUNCEABLE_TAG: u8 = 0x51;

    /// OR-ed into the tag for testnet-only addresses
    pub const TEST_ONLY_FLAG: u8 = 0x80;

    /// Decoded length of a friendly address (tag + workchain + hash + crc)
    pub const FRIENDLY_ADDRESS_BYTES: usize = 36;

    /// Encoded length of a friendly address
    pub const FRIENDLY_ADDRESS_CHARS: usize = 48;

    /// Shown when the input is empty
    pub const EMPTY_INPUT_MESSAGE: &str = "Please enter an address";

    /// Shown for any parse failure
    pub const INVALID_ADDRESS_MESSAGE: &str = "Invalid address format";

    /// How long a field stays marked as copied
    pub const COPY_FEEDBACK: Duration = Duration::from_millis(2000);

    /// Default listen address for `tonconv serve`
    pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
}
