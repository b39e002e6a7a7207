//! # txcode-abi
//!
//! Solidity contract ABI encoding and decoding.
//!
//! - Parsing type names (`uint256`, `bytes32[]`, `(address,string)`)
//! - Coercing loosely-typed JSON parameters into typed tokens
//! - Encoding parameters and function calls
//! - Decoding return data
//!
//! # Example
//!
//! ```rust
//! use txcode_abi::{encode_function_call, parse_type, tokenize};
//! use txcode_crypto::function_selector;
//! use serde_json::json;
//!
//! let types = [parse_type("address").unwrap(), parse_type("uint256").unwrap()];
//! let values = [json!("0x742d35Cc6634C0532925a3b844Bc9e7595f0aB3d"), json!(1000)];
//! let tokens = tokenize(&types, &values).unwrap();
//!
//! let data = encode_function_call(function_selector("transfer(address,uint256)"), &tokens).unwrap();
//! assert_eq!(data.len(), 4 + 32 + 32);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod coerce;
mod decode;
mod encode;
mod error;
mod parse;
mod types;

pub use coerce::{tokenize, tokenize_one};
pub use decode::decode;
pub use encode::{encode, encode_function_call, encode_params};
pub use error::AbiError;
pub use parse::{parse_type, parse_types, signature_types};
pub use types::{ParamType, Token, I256};
