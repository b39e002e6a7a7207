//! Transaction payload encoding

use serde_json::Value;
use txcode_abi::{decode, encode_params, parse_types, tokenize, AbiError, Token};
use txcode_crypto::{event_topic, function_selector};
use txcode_primitives::strip_hex_prefix;

/// Function selector as `0x` + 8 lowercase hex chars
///
/// The signature is hashed verbatim; no syntax check is made.
pub fn code_fun(signature: &str) -> String {
    let code = format!("0x{}", hex::encode(function_selector(signature)));
    tracing::debug!("Function selector for {}: {}", signature, code);
    code
}

/// ABI-encode parameters as lowercase hex, without prefix or selector
///
/// `types` and `params` are matched positionally. Any mismatch is reported by
/// the ABI layer as-is.
pub fn code_params<S: AsRef<str>>(types: &[S], params: &[Value]) -> Result<String, AbiError> {
    let types = parse_types(types)?;
    let tokens = tokenize(&types, params)?;
    let encoded = hex::encode(encode_params(&types, &tokens)?);
    tracing::trace!("Encoded {} params into {} bytes", tokens.len(), encoded.len() / 2);
    Ok(encoded)
}

/// Full call payload: `code_fun(signature) + code_params(types, params)`
pub fn code_tx_data<S: AsRef<str>>(
    signature: &str,
    types: &[S],
    params: &[Value],
) -> Result<String, AbiError> {
    let mut tx_data = code_fun(signature);
    tx_data.push_str(&code_params(types, params)?);
    tracing::debug!("Transaction data: {}", tx_data);
    Ok(tx_data)
}

/// Event topic as `0x` + 64 lowercase hex chars
pub fn code_event_topic(signature: &str) -> String {
    let topic = event_topic(signature).to_hex();
    tracing::debug!("Event topic for {}: {}", signature, topic);
    topic
}

/// ABI-decode hex output (with or without `0x`) against type names
pub fn decode_params<S: AsRef<str>>(types: &[S], data: &str) -> Result<Vec<Token>, AbiError> {
    let types = parse_types(types)?;
    let bytes = hex::decode(strip_hex_prefix(data.trim()))?;
    decode(&types, &bytes)
}
