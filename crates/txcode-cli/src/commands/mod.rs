//! CLI commands

pub mod decode;
pub mod encode;

use serde_json::Value;
use txcode_abi::signature_types;

use crate::CliError;

/// Split a comma-separated type list, keeping tuple members together
pub fn parse_type_list(types: &str) -> Result<Vec<String>, CliError> {
    signature_types(&format!("({})", types))
        .map_err(|_| CliError::InvalidInput(format!("malformed type list: {}", types)))
}

/// Parse parameters given as a JSON array
pub fn parse_param_list(params: &str) -> Result<Vec<Value>, CliError> {
    Ok(serde_json::from_str(params)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_type_list() {
        assert_eq!(
            parse_type_list("address,(uint256,bool)[]").unwrap(),
            vec!["address", "(uint256,bool)[]"]
        );
        assert!(parse_type_list("").unwrap().is_empty());
        assert!(parse_type_list("(uint256").is_err());
    }

    #[test]
    fn test_parse_param_list() {
        assert_eq!(parse_param_list(r#"["0x01", 5]"#).unwrap(), vec![json!("0x01"), json!(5)]);
        assert!(matches!(parse_param_list("{}"), Err(CliError::Json(_))));
    }
}
