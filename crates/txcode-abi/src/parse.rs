//! Type name and signature parsing

use crate::{AbiError, ParamType};

/// Parse an ABI type name (e.g. `uint256`, `bytes32[]`, `(address,string)[2]`)
pub fn parse_type(s: &str) -> Result<ParamType, AbiError> {
    let s = s.trim();

    // Array suffix binds loosest: `uint8[2][]` is an array of `uint8[2]`
    if let Some(body) = s.strip_suffix(']') {
        let open = body
            .rfind('[')
            .ok_or_else(|| AbiError::UnknownType(s.to_string()))?;
        let inner = parse_type(&body[..open])?;
        let size = &body[open + 1..];
        if size.is_empty() {
            return Ok(ParamType::Array(Box::new(inner)));
        }
        let size: usize = size
            .parse()
            .map_err(|_| AbiError::UnknownType(s.to_string()))?;
        let array = ParamType::FixedArray(Box::new(inner), size);
        if array.head_len().is_none() {
            return Err(AbiError::TypeTooLarge(s.to_string()));
        }
        return Ok(array);
    }

    if let Some(body) = s.strip_prefix('(').and_then(|b| b.strip_suffix(')')) {
        let members = split_top_level(body).ok_or_else(|| AbiError::UnknownType(s.to_string()))?;
        return members
            .into_iter()
            .map(parse_type)
            .collect::<Result<Vec<_>, _>>()
            .map(ParamType::Tuple);
    }

    match s {
        "address" => return Ok(ParamType::Address),
        "bool" => return Ok(ParamType::Bool),
        "string" => return Ok(ParamType::String),
        "bytes" => return Ok(ParamType::Bytes),
        _ => {}
    }

    // uint<N>
    if let Some(rest) = s.strip_prefix("uint") {
        return int_bits(s, rest).map(ParamType::Uint);
    }

    // int<N>
    if let Some(rest) = s.strip_prefix("int") {
        return int_bits(s, rest).map(ParamType::Int);
    }

    // bytes<N>
    if let Some(rest) = s.strip_prefix("bytes") {
        return match rest.parse::<usize>() {
            Ok(size) if (1..=32).contains(&size) => Ok(ParamType::FixedBytes(size)),
            _ => Err(AbiError::UnknownType(s.to_string())),
        };
    }

    Err(AbiError::UnknownType(s.to_string()))
}

/// Parse a list of type names
pub fn parse_types<S: AsRef<str>>(types: &[S]) -> Result<Vec<ParamType>, AbiError> {
    types.iter().map(|t| parse_type(t.as_ref())).collect()
}

/// Extract the parameter type names from a signature like `f(uint256,(bool,string))`
pub fn signature_types(signature: &str) -> Result<Vec<String>, AbiError> {
    let invalid = || AbiError::InvalidSignature(signature.to_string());

    let open = signature.find('(').ok_or_else(invalid)?;
    let body = signature[open + 1..]
        .trim_end()
        .strip_suffix(')')
        .ok_or_else(invalid)?;

    Ok(split_top_level(body)
        .ok_or_else(invalid)?
        .into_iter()
        .map(|t| t.trim().to_string())
        .collect())
}

fn int_bits(full: &str, rest: &str) -> Result<usize, AbiError> {
    if rest.is_empty() {
        return Ok(256);
    }
    match rest.parse::<usize>() {
        Ok(bits) if bits % 8 == 0 && (8..=256).contains(&bits) => Ok(bits),
        _ => Err(AbiError::UnknownType(full.to_string())),
    }
}

/// Split on commas outside parentheses; `None` on unbalanced input
fn split_top_level(s: &str) -> Option<Vec<&str>> {
    if s.trim().is_empty() {
        return Some(Vec::new());
    }

    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.checked_sub(1)?,
            ',' if depth == 0 => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return None;
    }
    parts.push(&s[start..]);
    Some(parts)
}
