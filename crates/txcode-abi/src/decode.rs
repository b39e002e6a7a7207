//! ABI decoding

use txcode_primitives::{Address, U256};

use crate::{AbiError, ParamType, Token, I256};

/// Decode tokens from ABI-encoded data (no selector)
pub fn decode(types: &[ParamType], data: &[u8]) -> Result<Vec<Token>, AbiError> {
    decode_tuple(types, data)
}

/// Decode a head/tail tuple whose encoding starts at `data[0]`
fn decode_tuple(types: &[ParamType], data: &[u8]) -> Result<Vec<Token>, AbiError> {
    let mut tokens = Vec::with_capacity(types.len());
    let mut cursor = 0;

    for param_type in types {
        if param_type.is_dynamic() {
            let offset = read_usize(data, cursor)?;
            let tail = data.get(offset..).ok_or_else(|| {
                AbiError::InvalidOffset(format!("offset {} beyond {} bytes", offset, data.len()))
            })?;
            tokens.push(decode_value(param_type, tail)?);
            cursor += 32;
        } else {
            let head = data.get(cursor..).unwrap_or_default();
            tokens.push(decode_value(param_type, head)?);
            cursor += head_len(param_type)?;
        }
    }

    Ok(tokens)
}

/// Decode one value whose encoding starts at `data[0]`
fn decode_value(param_type: &ParamType, data: &[u8]) -> Result<Token, AbiError> {
    match param_type {
        ParamType::Address => {
            let word = read_word(data, 0)?;
            Ok(Token::Address(Address::from_slice(&word[12..]).map_err(|e| {
                AbiError::InvalidOffset(e.to_string())
            })?))
        }
        ParamType::Uint(_) => Ok(Token::Uint(U256::from_big_endian(read_word(data, 0)?))),
        ParamType::Int(_) => {
            let word = U256::from_big_endian(read_word(data, 0)?);
            Ok(Token::Int(I256::from_twos_complement(word)))
        }
        ParamType::Bool => Ok(Token::Bool(read_word(data, 0)?[31] != 0)),
        ParamType::FixedBytes(size) => {
            let word = read_word(data, 0)?;
            Ok(Token::FixedBytes(word[..(*size).min(32)].to_vec()))
        }
        ParamType::Bytes => decode_bytes(data).map(|b| Token::Bytes(b.to_vec())),
        ParamType::String => {
            let bytes = decode_bytes(data)?;
            let s = String::from_utf8(bytes.to_vec())
                .map_err(|e| AbiError::InvalidUtf8(e.to_string()))?;
            Ok(Token::String(s))
        }
        ParamType::Array(inner) => {
            let len = read_usize(data, 0)?;
            let elements = &data[32..];
            check_element_count(inner, len, elements.len())?;
            decode_tuple(&vec![(**inner).clone(); len], elements).map(Token::Array)
        }
        ParamType::FixedArray(inner, size) => {
            check_element_count(inner, *size, data.len())?;
            decode_tuple(&vec![(**inner).clone(); *size], data).map(Token::FixedArray)
        }
        ParamType::Tuple(types) => decode_tuple(types, data).map(Token::Tuple),
    }
}

/// Length-prefixed byte payload
fn decode_bytes(data: &[u8]) -> Result<&[u8], AbiError> {
    let len = read_usize(data, 0)?;
    let end = 32usize
        .checked_add(len)
        .ok_or_else(|| AbiError::InvalidOffset(format!("length {} overflows", len)))?;
    check_length(data, end)?;
    Ok(&data[32..end])
}

/// Reject element counts the remaining data cannot possibly hold
fn check_element_count(inner: &ParamType, count: usize, available: usize) -> Result<(), AbiError> {
    let element_len = head_len(inner)?;
    let need = count
        .checked_mul(element_len.max(1))
        .ok_or_else(|| AbiError::InvalidOffset(format!("element count {} overflows", count)))?;
    if element_len > 0 {
        check_length_of(available, need)
    } else if count > available {
        Err(AbiError::InvalidOffset(format!("element count {} too large", count)))
    } else {
        Ok(())
    }
}

fn head_len(param_type: &ParamType) -> Result<usize, AbiError> {
    param_type
        .head_len()
        .ok_or_else(|| AbiError::TypeTooLarge(param_type.to_string()))
}

fn read_word(data: &[u8], offset: usize) -> Result<&[u8], AbiError> {
    check_length(data, offset + 32)?;
    Ok(&data[offset..offset + 32])
}

fn read_usize(data: &[u8], offset: usize) -> Result<usize, AbiError> {
    let value = U256::from_big_endian(read_word(data, offset)?);
    if value > U256::from(usize::MAX) {
        return Err(AbiError::InvalidOffset(format!("{} does not fit in usize", value)));
    }
    Ok(value.as_usize())
}

fn check_length(data: &[u8], required: usize) -> Result<(), AbiError> {
    check_length_of(data.len(), required)
}

fn check_length_of(have: usize, need: usize) -> Result<(), AbiError> {
    if have < need {
        return Err(AbiError::InsufficientData { need, have });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{encode, encode_params, parse_type};

    #[test]
    fn test_decode_address() {
        let addr = Address::from_hex("0x742d35Cc6634C0532925a3b844Bc9e7595f0aB3d").unwrap();
        let mut encoded = [0u8; 32];
        encoded[12..32].copy_from_slice(addr.as_bytes());

        let tokens = decode(&[ParamType::Address], &encoded).unwrap();
        assert_eq!(tokens, vec![Token::Address(addr)]);
    }

    #[test]
    fn test_decode_multiple_params() {
        let addr = Address::from_hex("0x742d35Cc6634C0532925a3b844Bc9e7595f0aB3d").unwrap();

        let mut encoded = [0u8; 64];
        encoded[12..32].copy_from_slice(addr.as_bytes());
        encoded[63] = 100;

        let tokens = decode(&[ParamType::Address, ParamType::Uint(256)], &encoded).unwrap();
        assert_eq!(tokens, vec![Token::Address(addr), Token::Uint(U256::from(100))]);
    }

    #[test]
    fn test_decode_string() {
        let mut encoded = vec![0u8; 96];
        encoded[31] = 32;
        encoded[63] = 5;
        encoded[64..69].copy_from_slice(b"hello");

        let tokens = decode(&[ParamType::String], &encoded).unwrap();
        assert_eq!(tokens, vec![Token::String("hello".to_string())]);
    }

    #[test]
    fn test_decode_negative_int() {
        let tokens = decode(&[ParamType::Int(256)], &[0xffu8; 32]).unwrap();
        assert_eq!(tokens, vec![Token::Int(I256::from_i128(-1))]);
    }

    #[test]
    fn test_decode_nested_dynamic() {
        let ty = parse_type("(uint256,string)[]").unwrap();
        let token = Token::Array(vec![
            Token::Tuple(vec![Token::Uint(U256::from(1)), Token::String("one".to_string())]),
            Token::Tuple(vec![Token::Uint(U256::from(2)), Token::String("two".to_string())]),
        ]);
        let encoded = encode_params(&[ty.clone(), ParamType::Bool], &[token.clone(), Token::Bool(true)])
            .unwrap();

        let decoded = decode(&[ty, ParamType::Bool], &encoded).unwrap();
        assert_eq!(decoded, vec![token, Token::Bool(true)]);
    }

    #[test]
    fn test_decode_static_fixed_array_then_value() {
        let tokens = vec![
            Token::FixedArray(vec![Token::Bool(true), Token::Bool(false)]),
            Token::Uint(U256::from(9)),
        ];
        let encoded = encode(&tokens).unwrap();
        let types = [parse_type("bool[2]").unwrap(), ParamType::Uint(256)];
        assert_eq!(decode(&types, &encoded).unwrap(), tokens);
    }

    #[test]
    fn test_decode_insufficient_data() {
        assert_eq!(
            decode(&[ParamType::Uint(256)], &[0u8; 16]),
            Err(AbiError::InsufficientData { need: 32, have: 16 })
        );
    }

    #[test]
    fn test_decode_bad_offset() {
        let mut encoded = [0u8; 32];
        encoded[31] = 0xff;
        assert!(matches!(
            decode(&[ParamType::Bytes], &encoded),
            Err(AbiError::InvalidOffset(_))
        ));
    }

    #[test]
    fn test_decode_huge_array_length_rejected() {
        let mut encoded = vec![0u8; 64];
        encoded[31] = 32;
        encoded[32..64].copy_from_slice(&[0x7f; 32]);
        assert!(decode(&[parse_type("uint256[]").unwrap()], &encoded).is_err());
    }

    #[test]
    fn test_decode_oversized_static_type() {
        let huge = ParamType::FixedArray(Box::new(ParamType::Uint(256)), usize::MAX / 16);
        assert!(matches!(
            decode(&[ParamType::FixedArray(Box::new(huge.clone()), 2)], &[0u8; 64]),
            Err(AbiError::TypeTooLarge(_))
        ));
        assert!(matches!(
            decode(&[ParamType::Tuple(vec![huge]), ParamType::Bool], &[0u8; 64]),
            Err(AbiError::TypeTooLarge(_))
        ));
    }

    #[test]
    fn test_decode_invalid_utf8() {
        let mut encoded = vec![0u8; 96];
        encoded[31] = 32;
        encoded[63] = 1;
        encoded[64] = 0xff;
        assert!(matches!(
            decode(&[ParamType::String], &encoded),
            Err(AbiError::InvalidUtf8(_))
        ));
    }
}
