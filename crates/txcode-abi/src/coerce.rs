//! Coercion of loosely-typed JSON parameters into tokens
//!
//! Follows the conventions of the web3 contract coder: integers may be JSON
//! numbers, decimal strings or `0x` hex strings; byte values are hex strings;
//! `bool` uses JavaScript truthiness.

use serde_json::{Number, Value};
use txcode_primitives::{strip_hex_prefix, Address, U256};

use crate::{AbiError, ParamType, Token, I256};

/// Convert each value to a token of the positionally matching type
pub fn tokenize(types: &[ParamType], values: &[Value]) -> Result<Vec<Token>, AbiError> {
    if types.len() != values.len() {
        return Err(AbiError::LengthMismatch {
            types: types.len(),
            values: values.len(),
        });
    }
    types
        .iter()
        .zip(values)
        .map(|(t, v)| tokenize_one(t, v))
        .collect()
}

/// Convert a single value to a token of the given type
pub fn tokenize_one(param_type: &ParamType, value: &Value) -> Result<Token, AbiError> {
    match param_type {
        ParamType::Address => {
            let s = expect_str(param_type, value)?;
            parse_address(s).map(Token::Address)
        }
        ParamType::Uint(_) => parse_uint(param_type, value).map(Token::Uint),
        ParamType::Int(_) => parse_int(param_type, value).map(Token::Int),
        ParamType::Bool => Ok(Token::Bool(is_truthy(value))),
        ParamType::Bytes => {
            let s = expect_str(param_type, value)?;
            decode_hex(param_type, s).map(Token::Bytes)
        }
        ParamType::FixedBytes(size) => {
            let s = expect_str(param_type, value)?;
            let mut data = decode_hex(param_type, s)?;
            if data.len() > *size {
                return Err(invalid(
                    param_type,
                    s,
                    format!("{} bytes exceed the declared {}", data.len(), size),
                ));
            }
            data.resize(*size, 0);
            Ok(Token::FixedBytes(data))
        }
        ParamType::String => expect_str(param_type, value).map(|s| Token::String(s.to_string())),
        ParamType::Array(inner) => {
            let items = expect_array(param_type, value)?;
            items
                .iter()
                .map(|item| tokenize_one(inner, item))
                .collect::<Result<Vec<_>, _>>()
                .map(Token::Array)
        }
        ParamType::FixedArray(inner, size) => {
            let items = expect_array(param_type, value)?;
            if items.len() != *size {
                return Err(invalid(
                    param_type,
                    &value.to_string(),
                    format!("expected {} elements, got {}", size, items.len()),
                ));
            }
            items
                .iter()
                .map(|item| tokenize_one(inner, item))
                .collect::<Result<Vec<_>, _>>()
                .map(Token::FixedArray)
        }
        ParamType::Tuple(types) => {
            let items = expect_array(param_type, value)?;
            tokenize(types, items).map(Token::Tuple)
        }
    }
}

/// Addresses shorter than 20 bytes are left-padded with zeros
fn parse_address(s: &str) -> Result<Address, AbiError> {
    let digits = strip_hex_prefix(s.trim());
    if digits.len() > Address::LEN * 2 {
        return Err(invalid(&ParamType::Address, s, "longer than 20 bytes"));
    }
    let padded = format!("{:0>40}", digits);
    Address::from_hex(&padded).map_err(|e| invalid(&ParamType::Address, s, e))
}

fn parse_uint(param_type: &ParamType, value: &Value) -> Result<U256, AbiError> {
    match value {
        Value::Number(n) => match parse_number(n) {
            Some(i) if !i.negative => Ok(i.abs),
            _ => Err(invalid(param_type, &n.to_string(), "not a non-negative integer")),
        },
        Value::String(s) => parse_uint_str(s).map_err(|reason| invalid(param_type, s, reason)),
        other => Err(mismatch(param_type, other)),
    }
}

fn parse_int(param_type: &ParamType, value: &Value) -> Result<I256, AbiError> {
    match value {
        Value::Number(n) => {
            parse_number(n).ok_or_else(|| invalid(param_type, &n.to_string(), "not an integer"))
        }
        Value::String(s) => {
            let trimmed = s.trim();
            let (negative, digits) = match trimmed.strip_prefix('-') {
                Some(rest) => (true, rest),
                None => (false, trimmed),
            };
            let abs = parse_uint_str(digits).map_err(|reason| invalid(param_type, s, reason))?;
            Ok(I256::new(abs, negative))
        }
        other => Err(mismatch(param_type, other)),
    }
}

/// Integral JSON number, including values beyond 64 bits that arrive as `f64`
fn parse_number(n: &Number) -> Option<I256> {
    if let Some(v) = n.as_u64() {
        return Some(I256::new(U256::from(v), false));
    }
    if let Some(v) = n.as_i64() {
        return Some(I256::from_i128(v.into()));
    }
    let f = n.as_f64()?;
    if !f.is_finite() || f.fract() != 0.0 {
        return None;
    }
    let abs = U256::from_dec_str(&format!("{:.0}", f.abs())).ok()?;
    Some(I256::new(abs, f < 0.0))
}

fn parse_uint_str(s: &str) -> Result<U256, String> {
    let s = s.trim();
    if let Some(digits) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        if digits.is_empty() {
            return Err("empty hex literal".to_string());
        }
        return U256::from_str_radix(digits, 16).map_err(|e| format!("{:?}", e));
    }
    if s.is_empty() {
        return Err("empty literal".to_string());
    }
    U256::from_dec_str(s).map_err(|e| format!("{:?}", e))
}

fn decode_hex(param_type: &ParamType, s: &str) -> Result<Vec<u8>, AbiError> {
    hex::decode(strip_hex_prefix(s.trim())).map_err(|e| invalid(param_type, s, e))
}

/// JavaScript truthiness
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn expect_str<'a>(param_type: &ParamType, value: &'a Value) -> Result<&'a str, AbiError> {
    value.as_str().ok_or_else(|| mismatch(param_type, value))
}

fn expect_array<'a>(param_type: &ParamType, value: &'a Value) -> Result<&'a [Value], AbiError> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| mismatch(param_type, value))
}

fn mismatch(param_type: &ParamType, value: &Value) -> AbiError {
    let found = match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    AbiError::TypeMismatch {
        expected: param_type.to_string(),
        found: found.to_string(),
    }
}

fn invalid(param_type: &ParamType, value: &str, reason: impl ToString) -> AbiError {
    AbiError::InvalidValue {
        ty: param_type.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
