//! # txcode-crypto
//!
//! Hashing for contract calls:
//!
//! - Keccak-256 hashing
//! - Function selectors
//! - Event topics

#![warn(missing_docs)]
#![warn(clippy::all)]

mod hash;
mod selector;

pub use hash::keccak256;
pub use selector::{event_topic, function_selector, Selector};
