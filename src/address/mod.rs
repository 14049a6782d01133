//! Address module - parsing and rendering of TON addresses
//!
//! The conversion workflow only talks to the [`AddressCodec`] trait.
//! [`TonCodec`] is the default implementation backed by [`TonAddress`].

mod crc;
mod ton;

pub use crc::crc16;
pub use ton::*;

/// Options accepted by [`AddressCodec::format`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatOptions {
    /// Use the base64url alphabet (`-` and `_`)
    pub url_safe: bool,
    /// Set the bounceable tag
    pub bounceable: bool,
    /// Set the test-only flag
    pub test_only: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            url_safe: true,
            bounceable: true,
            test_only: false,
        }
    }
}

impl FormatOptions {
    /// URL-safe options for one network/bounce combination
    pub fn url_safe(bounceable: bool, test_only: bool) -> Self {
        Self {
            url_safe: true,
            bounceable,
            test_only,
        }
    }
}

/// Narrow boundary to the address library.
///
/// Anything able to parse a string, render the raw form and render a
/// friendly form can back the converter.
pub trait AddressCodec {
    type Address;

    /// Parse any accepted textual form
    fn parse(&self, input: &str) -> Result<Self::Address, AddressError>;

    /// Render as `workchain:hex`
    fn to_raw(&self, address: &Self::Address) -> String;

    /// Render a friendly (base64) form
    fn format(&self, address: &Self::Address, options: FormatOptions) -> String;
}

/// Default codec for TON addresses
#[derive(Debug, Clone, Copy, Default)]
pub struct TonCodec;

impl AddressCodec for TonCodec {
    type Address = TonAddress;

    fn parse(&self, input: &str) -> Result<TonAddress, AddressError> {
        TonAddress::parse(input)
    }

    fn to_raw(&self, address: &TonAddress) -> String {
        address.to_raw_string()
    }

    fn format(&self, address: &TonAddress, options: FormatOptions) -> String {
        address.to_friendly(options)
    }
}
