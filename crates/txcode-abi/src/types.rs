//! ABI type definitions

use std::fmt;

use serde_json::Value;
use txcode_primitives::{Address, U256};

/// Solidity ABI token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Address (20 bytes)
    Address(Address),
    /// Unsigned integer (8-256 bits)
    Uint(U256),
    /// Signed integer (8-256 bits)
    Int(I256),
    /// Boolean
    Bool(bool),
    /// Dynamic bytes
    Bytes(Vec<u8>),
    /// Fixed-size bytes (1-32)
    FixedBytes(Vec<u8>),
    /// UTF-8 string
    String(String),
    /// Dynamic array
    Array(Vec<Token>),
    /// Fixed-size array
    FixedArray(Vec<Token>),
    /// Tuple (struct)
    Tuple(Vec<Token>),
}

/// Signed 256-bit integer as sign and magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct I256 {
    /// Absolute value
    pub abs: U256,
    /// Sign (true if negative)
    pub negative: bool,
}

impl I256 {
    /// Create a new I256
    pub fn new(abs: U256, negative: bool) -> Self {
        Self { abs, negative }
    }

    /// Create from i128
    pub fn from_i128(value: i128) -> Self {
        Self {
            abs: U256::from(value.unsigned_abs()),
            negative: value < 0,
        }
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.abs.is_zero()
    }

    /// 256-bit two's complement representation
    pub fn to_twos_complement(&self) -> U256 {
        if self.negative {
            (!self.abs).overflowing_add(U256::one()).0
        } else {
            self.abs
        }
    }

    /// Interpret a 256-bit word as two's complement
    pub fn from_twos_complement(word: U256) -> Self {
        if word.bit(255) {
            Self::new((!word).overflowing_add(U256::one()).0, true)
        } else {
            Self::new(word, false)
        }
    }
}

impl fmt::Display for I256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative && !self.is_zero() {
            write!(f, "-{}", self.abs)
        } else {
            write!(f, "{}", self.abs)
        }
    }
}

/// Solidity parameter types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamType {
    /// Address
    Address,
    /// Unsigned integer with bit size (8, 16, ..., 256)
    Uint(usize),
    /// Signed integer with bit size
    Int(usize),
    /// Boolean
    Bool,
    /// Dynamic bytes
    Bytes,
    /// Fixed-size bytes (size 1-32)
    FixedBytes(usize),
    /// UTF-8 string
    String,
    /// Dynamic array
    Array(Box<ParamType>),
    /// Fixed-size array
    FixedArray(Box<ParamType>, usize),
    /// Tuple
    Tuple(Vec<ParamType>),
}

impl ParamType {
    /// Check if this type is dynamic (variable length)
    pub fn is_dynamic(&self) -> bool {
        match self {
            ParamType::Bytes | ParamType::String | ParamType::Array(_) => true,
            ParamType::FixedArray(inner, _) => inner.is_dynamic(),
            ParamType::Tuple(types) => types.iter().any(|t| t.is_dynamic()),
            _ => false,
        }
    }

    /// Bytes this type occupies in the head of an enclosing encoding
    ///
    /// `None` when the size of a static array or tuple overflows `usize`.
    pub fn head_len(&self) -> Option<usize> {
        match self {
            ParamType::FixedArray(inner, size) if !inner.is_dynamic() => {
                inner.head_len()?.checked_mul(*size)
            }
            ParamType::Tuple(types) if !self.is_dynamic() => types
                .iter()
                .try_fold(0usize, |acc, t| acc.checked_add(t.head_len()?)),
            _ => Some(32),
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Address => f.write_str("address"),
            ParamType::Uint(bits) => write!(f, "uint{}", bits),
            ParamType::Int(bits) => write!(f, "int{}", bits),
            ParamType::Bool => f.write_str("bool"),
            ParamType::Bytes => f.write_str("bytes"),
            ParamType::FixedBytes(size) => write!(f, "bytes{}", size),
            ParamType::String => f.write_str("string"),
            ParamType::Array(inner) => write!(f, "{}[]", inner),
            ParamType::FixedArray(inner, size) => write!(f, "{}[{}]", inner, size),
            ParamType::Tuple(types) => {
                f.write_str("(")?;
                for (i, t) in types.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", t)?;
                }
                f.write_str(")")
            }
        }
    }
}

impl Token {
    /// Get the type of this token
    ///
    /// Integers report 256 bits. Empty arrays report `uint256` elements, which
    /// does not affect their encoding.
    pub fn type_of(&self) -> ParamType {
        match self {
            Token::Address(_) => ParamType::Address,
            Token::Uint(_) => ParamType::Uint(256),
            Token::Int(_) => ParamType::Int(256),
            Token::Bool(_) => ParamType::Bool,
            Token::Bytes(_) => ParamType::Bytes,
            Token::FixedBytes(b) => ParamType::FixedBytes(b.len()),
            Token::String(_) => ParamType::String,
            Token::Array(tokens) => {
                let inner = tokens.first().map(|t| t.type_of()).unwrap_or(ParamType::Uint(256));
                ParamType::Array(Box::new(inner))
            }
            Token::FixedArray(tokens) => {
                let inner = tokens.first().map(|t| t.type_of()).unwrap_or(ParamType::Uint(256));
                ParamType::FixedArray(Box::new(inner), tokens.len())
            }
            Token::Tuple(tokens) => ParamType::Tuple(tokens.iter().map(|t| t.type_of()).collect()),
        }
    }

    /// Render as JSON for display
    ///
    /// Integers become decimal strings so 256-bit values survive; byte values
    /// become `0x`-prefixed hex.
    pub fn to_json(&self) -> Value {
        match self {
            Token::Address(addr) => Value::String(addr.to_hex()),
            Token::Uint(value) => Value::String(value.to_string()),
            Token::Int(value) => Value::String(value.to_string()),
            Token::Bool(b) => Value::Bool(*b),
            Token::Bytes(data) | Token::FixedBytes(data) => {
                Value::String(format!("0x{}", hex::encode(data)))
            }
            Token::String(s) => Value::String(s.clone()),
            Token::Array(tokens) | Token::FixedArray(tokens) | Token::Tuple(tokens) => {
                Value::Array(tokens.iter().map(Token::to_json).collect())
            }
        }
    }
}
