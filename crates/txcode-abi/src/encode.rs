//! ABI encoding

use txcode_crypto::Selector;
use txcode_primitives::U256;

use crate::{AbiError, ParamType, Token};

/// Encode tokens, inferring each type from the token itself
pub fn encode(tokens: &[Token]) -> Result<Vec<u8>, AbiError> {
    let types: Vec<ParamType> = tokens.iter().map(Token::type_of).collect();
    encode_params(&types, tokens)
}

/// Encode function call (selector + params)
pub fn encode_function_call(selector: Selector, tokens: &[Token]) -> Result<Vec<u8>, AbiError> {
    let mut result = selector.to_vec();
    result.extend(encode(tokens)?);
    Ok(result)
}

/// Encode tokens against declared types as a head/tail tuple
pub fn encode_params(types: &[ParamType], tokens: &[Token]) -> Result<Vec<u8>, AbiError> {
    if types.len() != tokens.len() {
        return Err(AbiError::LengthMismatch {
            types: types.len(),
            values: tokens.len(),
        });
    }

    let head_size = types
        .iter()
        .try_fold(0usize, |acc, t| acc.checked_add(t.head_len()?))
        .ok_or_else(|| AbiError::TypeTooLarge(ParamType::Tuple(types.to_vec()).to_string()))?;

    let mut head = Vec::new();
    let mut tail = Vec::new();

    for (param_type, token) in types.iter().zip(tokens) {
        if param_type.is_dynamic() {
            // Offset is measured from the start of this tuple's head
            let offset = head_size + tail.len();
            head.extend(encode_u256(&U256::from(offset)));
            tail.extend(encode_token(param_type, token)?);
        } else {
            head.extend(encode_token(param_type, token)?);
        }
    }

    head.extend(tail);
    Ok(head)
}

fn encode_token(param_type: &ParamType, token: &Token) -> Result<Vec<u8>, AbiError> {
    let encoded = match (param_type, token) {
        (ParamType::Address, Token::Address(addr)) => {
            let mut buf = [0u8; 32];
            buf[12..].copy_from_slice(addr.as_bytes());
            buf.to_vec()
        }
        (ParamType::Uint(_), Token::Uint(value)) => encode_u256(value),
        (ParamType::Int(_), Token::Int(value)) => encode_u256(&value.to_twos_complement()),
        (ParamType::Bool, Token::Bool(b)) => encode_u256(&U256::from(u8::from(*b))),
        (ParamType::FixedBytes(size), Token::FixedBytes(data)) => {
            // Left-aligned, zero-padded on the right
            let mut buf = [0u8; 32];
            let len = data.len().min(*size).min(32);
            buf[..len].copy_from_slice(&data[..len]);
            buf.to_vec()
        }
        (ParamType::Bytes, Token::Bytes(data)) => encode_bytes(data),
        (ParamType::String, Token::String(s)) => encode_bytes(s.as_bytes()),
        (ParamType::Array(inner), Token::Array(tokens)) => {
            let mut result = encode_u256(&U256::from(tokens.len()));
            let inner_types = vec![(**inner).clone(); tokens.len()];
            result.extend(encode_params(&inner_types, tokens)?);
            result
        }
        (ParamType::FixedArray(inner, size), Token::FixedArray(tokens)) => {
            if tokens.len() != *size {
                return Err(AbiError::LengthMismatch {
                    types: *size,
                    values: tokens.len(),
                });
            }
            let inner_types = vec![(**inner).clone(); *size];
            encode_params(&inner_types, tokens)?
        }
        (ParamType::Tuple(types), Token::Tuple(tokens)) => encode_params(types, tokens)?,
        (expected, found) => {
            return Err(AbiError::TypeMismatch {
                expected: expected.to_string(),
                found: found.type_of().to_string(),
            })
        }
    };
    Ok(encoded)
}

fn encode_u256(value: &U256) -> Vec<u8> {
    let mut bytes = [0u8; 32];
    value.to_big_endian(&mut bytes);
    bytes.to_vec()
}

/// Length word followed by the data right-padded to a multiple of 32 bytes
fn encode_bytes(data: &[u8]) -> Vec<u8> {
    let mut result = encode_u256(&U256::from(data.len()));

    let padded_len = data.len().div_ceil(32) * 32;
    let mut padded = vec![0u8; padded_len];
    padded[..data.len()].copy_from_slice(data);
    result.extend(padded);

    result
}
