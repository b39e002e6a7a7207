//! Decoding commands

use serde_json::Value;
use txcode::Token;

use super::parse_type_list;
use crate::{output::Output, CliError};

/// Decode ABI-encoded output and print the values as JSON
pub fn decode(types: &str, data: &str, json: bool) -> Result<(), CliError> {
    let types = parse_type_list(types)?;
    let tokens = txcode::decode_params(&types, data)?;
    let values = Value::Array(tokens.iter().map(Token::to_json).collect());

    Output::new(json)
        .field_value("values", values.clone())
        .message(&serde_json::to_string_pretty(&values)?)
        .print();
    Ok(())
}

/// Print the text held in a hex string
pub fn hex2a(hex: &str, json: bool) -> Result<(), CliError> {
    let text = txcode::hex2a(hex);

    Output::new(json).field("text", &text).message(&text).print();
    Ok(())
}
