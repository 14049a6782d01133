//! TON address encoding
//!
//! Raw form: `<workchain>:<64 hex chars>`.
//! Friendly form: 48 base64 characters over
//! `tag(1) + workchain(1) + hash(32) + crc16(2)`.

use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use base64::Engine;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::{crc16, FormatOptions};
use crate::constants::{
    BOUNCEABLE_TAG, FRIENDLY_ADDRESS_BYTES, FRIENDLY_ADDRESS_CHARS, NON_BOUNCEABLE_TAG,
    TEST_ONLY_FLAG,
};

/// Address parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("Unknown address type")]
    UnknownFormat,
    #[error("Invalid base64 encoding: {0}")]
    InvalidBase64(String),
    #[error("Invalid address length: {0} bytes")]
    InvalidLength(usize),
    #[error("Unknown address tag: 0x{0:02x}")]
    UnknownTag(u8),
    #[error("Invalid checksum: expected {expected:04x}, found {found:04x}")]
    InvalidChecksum { expected: u16, found: u16 },
    #[error("Invalid workchain: {0}")]
    InvalidWorkchain(String),
    #[error("Invalid account hash")]
    InvalidHash,
}

/// How an address was written by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum InputKind {
    /// `workchain:hex`
    Raw,
    /// Base64 form with its embedded flags
    Friendly {
        bounceable: bool,
        #[serde(rename = "testOnly")]
        test_only: bool,
        #[serde(rename = "urlSafe")]
        url_safe: bool,
    },
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Raw => f.write_str("raw"),
            InputKind::Friendly {
                bounceable,
                test_only,
                url_safe,
            } => write!(
                f,
                "friendly (bounceable: {}, testOnly: {}, urlSafe: {})",
                bounceable, test_only, url_safe
            ),
        }
    }
}

/// A TON account address: workchain id plus 32-byte account hash
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TonAddress {
    pub workchain: i8,
    pub hash: [u8; 32],
}

impl TonAddress {
    pub fn new(workchain: i8, hash: [u8; 32]) -> Self {
        Self { workchain, hash }
    }

    /// Parse either the raw or the friendly form
    pub fn parse(input: &str) -> Result<Self, AddressError> {
        Self::inspect(input).map(|(address, _)| address)
    }

    /// Parse and report which form the input used
    pub fn inspect(input: &str) -> Result<(Self, InputKind), AddressError> {
        if is_friendly(input) {
            Self::parse_friendly(input)
        } else if is_raw(input) {
            Ok((Self::parse_raw(input)?, InputKind::Raw))
        } else {
            Err(AddressError::UnknownFormat)
        }
    }

    /// Parse `workchain:hex`
    pub fn parse_raw(input: &str) -> Result<Self, AddressError> {
        let (workchain, hash_hex) = input.split_once(':').ok_or(AddressError::UnknownFormat)?;

        let workchain = workchain
            .parse::<i8>()
            .map_err(|_| AddressError::InvalidWorkchain(workchain.to_string()))?;

        let bytes = hex::decode(hash_hex).map_err(|_| AddressError::InvalidHash)?;
        let hash: [u8; 32] = bytes.try_into().map_err(|_| AddressError::InvalidHash)?;

        Ok(Self { workchain, hash })
    }

    /// Parse the 48-character base64 form, verifying tag and checksum
    pub fn parse_friendly(input: &str) -> Result<(Self, InputKind), AddressError> {
        let url_safe = input.contains(|c: char| c == '-' || c == '_');
        let normalized: String = input
            .chars()
            .map(|c| match c {
                '-' => '+',
                '_' => '/',
                other => other,
            })
            .collect();

        let data = STANDARD
            .decode(normalized)
            .map_err(|e| AddressError::InvalidBase64(e.to_string()))?;
        if data.len() != FRIENDLY_ADDRESS_BYTES {
            return Err(AddressError::InvalidLength(data.len()));
        }

        let expected = crc16(&data[..34]);
        let found = u16::from_be_bytes([data[34], data[35]]);
        if expected != found {
            return Err(AddressError::InvalidChecksum { expected, found });
        }

        let mut tag = data[0];
        let test_only = tag & TEST_ONLY_FLAG != 0;
        if test_only {
            tag ^= TEST_ONLY_FLAG;
        }
        let bounceable = match tag {
            BOUNCEABLE_TAG => true,
            NON_BOUNCEABLE_TAG => false,
            _ => return Err(AddressError::UnknownTag(data[0])),
        };

        let mut hash = [0u8; 32];
        hash.copy_from_slice(&data[2..34]);

        let address = Self {
            workchain: data[1] as i8,
            hash,
        };
        Ok((
            address,
            InputKind::Friendly {
                bounceable,
                test_only,
                url_safe,
            },
        ))
    }

    /// `workchain:hash` with lowercase hex
    pub fn to_raw_string(&self) -> String {
        format!("{}:{}", self.workchain, hex::encode(self.hash))
    }

    /// Encode the friendly form for the given flags
    pub fn to_friendly(&self, options: FormatOptions) -> String {
        let mut tag = if options.bounceable {
            BOUNCEABLE_TAG
        } else {
            NON_BOUNCEABLE_TAG
        };
        if options.test_only {
            tag |= TEST_ONLY_FLAG;
        }

        let mut data = Vec::with_capacity(FRIENDLY_ADDRESS_BYTES);
        data.push(tag);
        data.push(self.workchain as u8);
        data.extend_from_slice(&self.hash);
        let crc = crc16(&data);
        data.extend_from_slice(&crc.to_be_bytes());

        if options.url_safe {
            URL_SAFE.encode(&data)
        } else {
            STANDARD.encode(&data)
        }
    }
}

fn is_friendly(input: &str) -> bool {
    input.len() == FRIENDLY_ADDRESS_CHARS
        && input
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'-' | b'_'))
}

fn is_raw(input: &str) -> bool {
    match input.split_once(':') {
        Some((workchain, hash)) => {
            !workchain.is_empty() && !hash.contains(':') && hash.len() == 64
        }
        None => false,
    }
}

impl FromStr for TonAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TonAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_raw_string())
    }
}

impl fmt::Debug for TonAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TonAddress({})", self.to_raw_string())
    }
}
