//! Function selectors and event topics

use txcode_primitives::H256;

use crate::keccak256;

/// First four bytes of a function signature hash
pub type Selector = [u8; 4];

/// Compute function selector (first 4 bytes of keccak256(signature))
///
/// The signature is hashed as-is. A malformed or non-canonical signature
/// (spaces, `uint` instead of `uint256`) silently yields a different selector.
pub fn function_selector(signature: &str) -> Selector {
    let hash = keccak256(signature.as_bytes());
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&hash.as_bytes()[..4]);
    selector
}

/// Compute an event topic (full keccak256 of the event signature)
pub fn event_topic(signature: &str) -> H256 {
    keccak256(signature.as_bytes())
}
