//! ABI error types

use thiserror::Error;

/// ABI encoding/decoding error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AbiError {
    /// Type name that is not part of the ABI grammar
    #[error("unknown type: {0}")]
    UnknownType(String),

    /// Function or event signature without a parameter list
    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    /// Value whose shape does not fit the declared type
    #[error("type mismatch: expected {expected}, got {found}")]
    TypeMismatch {
        /// Declared ABI type
        expected: String,
        /// What was supplied instead
        found: String,
    },

    /// Value of the right shape that cannot be converted
    #[error("invalid {ty} value {value:?}: {reason}")]
    InvalidValue {
        /// Declared ABI type
        ty: String,
        /// Offending literal
        value: String,
        /// Why conversion failed
        reason: String,
    },

    /// Type list and value list disagree in length
    #[error("length mismatch: {types} types, {values} values")]
    LengthMismatch {
        /// Number of declared types
        types: usize,
        /// Number of supplied values
        values: usize,
    },

    /// Encoded data ends before the value does
    #[error("insufficient data: need {need} bytes, have {have}")]
    InsufficientData {
        /// Bytes required
        need: usize,
        /// Bytes available
        have: usize,
    },

    /// Static type whose encoded size does not fit in memory
    #[error("type too large: {0}")]
    TypeTooLarge(String),

    /// Offset or length word that does not fit the data
    #[error("invalid offset or length: {0}")]
    InvalidOffset(String),

    /// Encoded data that is not valid hex
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// String payload that is not UTF-8
    #[error("invalid UTF-8 in string: {0}")]
    InvalidUtf8(String),
}

impl From<hex::FromHexError> for AbiError {
    fn from(e: hex::FromHexError) -> Self {
        AbiError::InvalidHex(e.to_string())
    }
}
