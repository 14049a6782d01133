//! Property-based and adversarial tests for the address converter
//!
//! These tests verify the conversion invariants hold under random inputs
//! and malformed or tampered addresses.

use proptest::prelude::*;
use tonconv::address::{FormatOptions, InputKind, TonAddress};
use tonconv::constants::{EMPTY_INPUT_MESSAGE, INVALID_ADDRESS_MESSAGE};
use tonconv::converter::{AddressConverter, ConversionState, FieldId};

const VALID: &str = "EQD2NMKIwYg6abuadgi6fhhw_JBtX0r1JK3JPlBkp2hxuXh2";

fn any_address() -> impl Strategy<Value = TonAddress> {
    (any::<i8>(), any::<[u8; 32]>()).prop_map(|(workchain, hash)| TonAddress::new(workchain, hash))
}

// ============================================================================
// PROPERTY-BASED TESTS
// ============================================================================

proptest! {
    /// Re-entering any derived form reproduces identical formats
    #[test]
    fn prop_formats_stable_across_representations(address in any_address()) {
        let mut converter = AddressConverter::new();
        let original = converter
            .set_input(address.to_raw_string())
            .formats()
            .cloned()
            .expect("raw form converts");

        for (field, value) in original.fields() {
            let mut again = AddressConverter::new();
            let reparsed = again.set_input(value).formats().cloned();
            prop_assert_eq!(reparsed.as_ref(), Some(&original), "field {}", field);
        }
    }

    /// Friendly forms carry exactly the flags they were rendered with
    #[test]
    fn prop_friendly_flags_preserved(
        address in any_address(),
        bounceable in any::<bool>(),
        test_only in any::<bool>(),
        url_safe in any::<bool>(),
    ) {
        let options = FormatOptions { url_safe, bounceable, test_only };
        let encoded = address.to_friendly(options);
        prop_assert_eq!(encoded.len(), 48);

        let (decoded, kind) = TonAddress::inspect(&encoded).unwrap();
        prop_assert_eq!(decoded, address);
        match kind {
            InputKind::Friendly { bounceable: b, test_only: t, .. } => {
                prop_assert_eq!(b, bounceable);
                prop_assert_eq!(t, test_only);
            }
            InputKind::Raw => prop_assert!(false, "friendly input reported as raw"),
        }
    }

    /// Unparseable input always ends in Invalid, whatever came before
    #[test]
    fn prop_unparseable_is_invalid(input in "\\PC{1,80}") {
        prop_assume!(!input.trim().is_empty());
        prop_assume!(TonAddress::parse(&input).is_err());

        let mut converter = AddressConverter::new();
        converter.set_input(VALID);
        prop_assert!(converter.state().is_converted());

        converter.set_input(input);
        prop_assert_eq!(converter.state(), &ConversionState::Invalid);
        prop_assert!(converter.formats().is_none());
        prop_assert_eq!(converter.message(), Some(INVALID_ADDRESS_MESSAGE));
    }

    /// Blank input prompts and never reports an invalid address
    #[test]
    fn prop_blank_input_prompts(input in "[ \\t\\r\\n]{0,16}") {
        let mut converter = AddressConverter::new();
        converter.set_input(VALID);
        converter.set_input(input);

        prop_assert_eq!(converter.state(), &ConversionState::Empty);
        prop_assert_eq!(converter.message(), Some(EMPTY_INPUT_MESSAGE));
    }

    /// Any single-character substitution is caught by the checksum
    #[test]
    fn prop_single_char_tamper_rejected(
        address in any_address(),
        position in 0usize..48,
        replacement in "[A-Za-z0-9]",
    ) {
        let encoded = address.to_friendly(FormatOptions::default());
        let original = encoded.as_bytes()[position] as char;
        let replacement = replacement.chars().next().unwrap();
        prop_assume!(original != replacement);

        let mut tampered: Vec<char> = encoded.chars().collect();
        tampered[position] = replacement;
        let tampered: String = tampered.into_iter().collect();

        prop_assert!(TonAddress::parse(&tampered).is_err());
    }
}

// ============================================================================
// ADVERSARIAL TESTS
// ============================================================================

/// Test: Commonly shared sample address
///
/// The widely circulated sample `...uZt6` carries a stale checksum; the
/// corrected `...uXh2` form converts.
#[test]
fn test_example_address() {
    let mut converter = AddressConverter::new();

    converter.set_input("EQD2NMKIwYg6abuadgi6fhhw_JBtX0r1JK3JPlBkp2hxuZt6");
    assert_eq!(converter.state(), &ConversionState::Invalid);

    let formats = converter.set_input(VALID).formats().cloned().unwrap();
    assert!(!formats.hex.is_empty());

    let friendly: Vec<&str> = FieldId::ALL[1..]
        .iter()
        .map(|field| formats.get(*field))
        .collect();
    for (i, a) in friendly.iter().enumerate() {
        assert_eq!(a.len(), 48);
        for b in &friendly[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert_ne!(formats.mainnet.bounceable, formats.testnet.bounceable);
    assert_ne!(formats.mainnet.non_bounceable, formats.testnet.non_bounceable);
}

/// Test: Non-address text
#[test]
fn test_not_an_address() {
    let mut converter = AddressConverter::new();
    converter.set_input("not-an-address");
    assert!(converter.formats().is_none());
    assert_eq!(converter.message(), Some("Invalid address format"));
}

/// Test: Valid -> empty transition
///
/// The state is replaced in one step; formats and a message never co-exist.
#[test]
fn test_valid_to_empty_transition() {
    let mut converter = AddressConverter::new();

    let state = converter.set_input(VALID);
    assert!(state.formats().is_some() && state.message().is_none());

    let state = converter.set_input("");
    assert!(state.formats().is_none());
    assert_eq!(state.message(), Some("Please enter an address"));
}

/// Test: Wrong length friendly-looking input
#[test]
fn test_truncated_and_padded_addresses() {
    let mut converter = AddressConverter::new();
    for input in [&VALID[..47], &format!("{VALID}A")[..], &format!("{VALID}==")[..]] {
        converter.set_input(input);
        assert_eq!(converter.state(), &ConversionState::Invalid, "{input}");
    }
}

/// Test: Raw form edge cases
#[test]
fn test_raw_edge_cases() {
    let hash = "f634c288c1883a69bb9a7608ba7e1870fc906d5f4af524adc93e5064a76871b9";
    let mut converter = AddressConverter::new();

    for bad in [
        format!(":{hash}"),
        format!("0:{}", &hash[..62]),
        format!("0:{hash}:0"),
        format!("x:{hash}"),
        format!("128:{hash}"),
    ] {
        converter.set_input(bad.clone());
        assert_eq!(converter.state(), &ConversionState::Invalid, "{bad}");
    }

    converter.set_input(format!("-1:{hash}"));
    let formats = converter.formats().unwrap();
    assert_eq!(formats.hex, format!("-1:{hash}"));
    assert!(formats.mainnet.bounceable.starts_with("Ef"));
}

/// Test: Standard base64 alphabet is accepted
#[test]
fn test_standard_alphabet_accepted() {
    let standard = VALID.replace('_', "/");
    let mut converter = AddressConverter::new();
    converter.set_input(standard);
    assert_eq!(converter.formats().unwrap().mainnet.bounceable, VALID);
}
