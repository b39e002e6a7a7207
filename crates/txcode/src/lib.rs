//! # txcode
//!
//! Builds Ethereum contract transaction payloads and decodes contract output.
//!
//! ## Features
//!
//! - **code_tx_data**: `0x` + function selector + ABI-encoded parameters
//! - **code_fun / code_params**: the two halves of a payload
//! - **code_event_topic**: log topic for an event signature
//! - **decode_params**: ABI-decode contract return data
//! - **hex2a**: hex to text, skipping zero bytes
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use txcode::{code_tx_data, hex2a};
//!
//! let data = code_tx_data(
//!     "transfer(address,uint256)",
//!     &["address", "uint256"],
//!     &[json!("0x742d35Cc6634C0532925a3b844Bc9e7595f0aB3d"), json!(1000)],
//! )?;
//! assert!(data.starts_with("0xa9059cbb"));
//! assert_eq!(data.len(), 2 + 8 + 128);
//!
//! assert_eq!(hex2a("68656c6c6f00"), "hello");
//! # Ok::<(), txcode::AbiError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod codec;
mod text;

pub use codec::{code_event_topic, code_fun, code_params, code_tx_data, decode_params};
pub use text::hex2a;

// Re-export the ABI layer for callers that need typed tokens
pub use txcode_abi::{AbiError, ParamType, Token};
