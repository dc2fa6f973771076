//! Kani Arbitrary implementations and proof harnesses for property verification.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{MagnetUri, Parameter, ParameterPrefix};

/// Value characters: no `&`, so a rendered value never splits into two parameters
const VALUE_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789:.=+%";

fn arbitrary_value_char() -> char {
    let idx: usize = kani::any();
    let idx = idx % VALUE_CHARS.len();
    VALUE_CHARS[idx] as char
}

impl kani::Arbitrary for ParameterPrefix {
    fn any() -> Self {
        let idx: usize = kani::any();
        Self::ALL[idx % Self::ALL.len()]
    }
}

impl kani::Arbitrary for Parameter {
    fn any() -> Self {
        let prefix: ParameterPrefix = kani::any();

        // 0-4 char value for tractability
        let len: usize = kani::any();
        let len = len % 5;
        let value: String = (0..len).map(|_| arbitrary_value_char()).collect();

        let index: u8 = kani::any();
        Self::with_index(prefix, u32::from(index), value)
    }
}

impl kani::Arbitrary for MagnetUri {
    fn any() -> Self {
        // 1-3 parameters
        let count: usize = kani::any();
        let count = 1 + (count % 3);
        (0..count).map(|_| kani::any::<Parameter>()).collect()
    }
}

// ============================================================================
// Kani Proof Harnesses
// ============================================================================

/// Proof: A rendered parameter parses back to itself
#[kani::proof]
#[kani::unwind(8)]
fn proof_parameter_roundtrip() {
    let param: Parameter = kani::any();
    let reparsed = Parameter::parse(&param.to_string()).expect("rendered parameter should parse");
    assert_eq!(reparsed, param);
}

/// Proof: Serialize then parse equals the canonical form
#[kani::proof]
#[kani::unwind(8)]
fn proof_serialize_roundtrip() {
    let uri: MagnetUri = kani::any();
    let raw = uri.to_uri_string().expect("non-empty URI should serialize");
    let reparsed = MagnetUri::parse(&raw).expect("serialized URI should parse");
    assert_eq!(reparsed, uri.canonicalize());
}

/// Proof: Equality is reflexive and symmetric
#[kani::proof]
#[kani::unwind(5)]
fn proof_equality_symmetric() {
    let a: MagnetUri = kani::any();
    let b: MagnetUri = kani::any();
    assert!(a == a);
    assert_eq!(a == b, b == a);
}
