//! Derived display forms of one address

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::address::{AddressCodec, FormatOptions};

/// Bounceable and non-bounceable forms for one network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkFormats {
    pub bounceable: String,
    pub non_bounceable: String,
}

/// Every display form of a successfully parsed address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressFormats {
    pub hex: String,
    pub mainnet: NetworkFormats,
    pub testnet: NetworkFormats,
}

impl AddressFormats {
    /// Render the raw form and all four friendly forms up front
    pub fn derive<C: AddressCodec>(codec: &C, address: &C::Address) -> Self {
        let render = |bounceable, test_only| {
            codec.format(address, FormatOptions::url_safe(bounceable, test_only))
        };

        Self {
            hex: codec.to_raw(address),
            mainnet: NetworkFormats {
                bounceable: render(true, false),
                non_bounceable: render(false, false),
            },
            testnet: NetworkFormats {
                bounceable: render(true, true),
                non_bounceable: render(false, true),
            },
        }
    }

    /// Value shown in the given output field
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Hex => &self.hex,
            FieldId::MainnetBounceable => &self.mainnet.bounceable,
            FieldId::MainnetNonBounceable => &self.mainnet.non_bounceable,
            FieldId::TestnetBounceable => &self.testnet.bounceable,
            FieldId::TestnetNonBounceable => &self.testnet.non_bounceable,
        }
    }

    /// `(field, value)` pairs in display order
    pub fn fields(&self) -> impl Iterator<Item = (FieldId, &str)> {
        FieldId::ALL.into_iter().map(move |field| (field, self.get(field)))
    }
}

/// One of the five read-only output fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    Hex,
    MainnetBounceable,
    MainnetNonBounceable,
    TestnetBounceable,
    TestnetNonBounceable,
}

impl FieldId {
    pub const ALL: [FieldId; 5] = [
        FieldId::Hex,
        FieldId::MainnetBounceable,
        FieldId::MainnetNonBounceable,
        FieldId::TestnetBounceable,
        FieldId::TestnetNonBounceable,
    ];

    /// Identifier used by the page and the CLI
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Hex => "hex",
            FieldId::MainnetBounceable => "mainnetBounceable",
            FieldId::MainnetNonBounceable => "mainnetNonBounceable",
            FieldId::TestnetBounceable => "testnetBounceable",
            FieldId::TestnetNonBounceable => "testnetNonBounceable",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Hex => "HEX",
            FieldId::MainnetBounceable => "Mainnet bounceable",
            FieldId::MainnetNonBounceable => "Mainnet non-bounceable",
            FieldId::TestnetBounceable => "Testnet bounceable",
            FieldId::TestnetNonBounceable => "Testnet non-bounceable",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown field identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for FieldId {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}
