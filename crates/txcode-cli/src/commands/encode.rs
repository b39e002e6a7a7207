//! Encoding commands

use serde_json::Value;
use txcode_abi::signature_types;

use super::{parse_param_list, parse_type_list};
use crate::{config::Config, output::Output, CliError};

/// Print the selector of a function signature
pub fn selector(config: &Config, signature: &str, json: bool) -> Result<(), CliError> {
    let signature = config.resolve_signature(signature);
    let selector = txcode::code_fun(signature);

    Output::new(json)
        .field("signature", signature)
        .field("selector", &selector)
        .message(&selector)
        .print();
    Ok(())
}

/// Print the topic of an event signature
pub fn topic(signature: &str, json: bool) -> Result<(), CliError> {
    let topic = txcode::code_event_topic(signature);

    Output::new(json)
        .field("signature", signature)
        .field("topic", &topic)
        .message(&topic)
        .print();
    Ok(())
}

/// Print ABI-encoded parameters
pub fn params(types: &str, params: &str, json: bool) -> Result<(), CliError> {
    let types = parse_type_list(types)?;
    let params = parse_param_list(params)?;
    let encoded = txcode::code_params(&types, &params)?;

    Output::new(json)
        .field_value("types", types_json(&types))
        .field("encoded", &encoded)
        .message(&encoded)
        .print();
    Ok(())
}

/// Print a full transaction payload
///
/// Without explicit types, the parameter types come from the signature.
pub fn tx_data(
    config: &Config,
    signature: &str,
    types: Option<&str>,
    params: &str,
    json: bool,
) -> Result<(), CliError> {
    let signature = config.resolve_signature(signature);
    let types = match types {
        Some(types) => parse_type_list(types)?,
        None => signature_types(signature)?,
    };
    let params = parse_param_list(params)?;
    let data = txcode::code_tx_data(signature, &types, &params)?;

    Output::new(json)
        .field("signature", signature)
        .field_value("types", types_json(&types))
        .field("data", &data)
        .message(&data)
        .print();
    Ok(())
}

fn types_json(types: &[String]) -> Value {
    Value::Array(types.iter().cloned().map(Value::String).collect())
}
