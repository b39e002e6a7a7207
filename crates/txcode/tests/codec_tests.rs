//! Payload laws and hex2a behaviour

use proptest::prelude::*;
use serde_json::{json, Value};
use txcode::{code_fun, code_params, code_tx_data, decode_params, hex2a, Token};

mod payload {
    use super::*;

    #[test]
    fn erc20_transfer_payload() {
        let data = code_tx_data(
            "transfer(address,uint256)",
            &["address", "uint256"],
            &[json!("0x742d35Cc6634C0532925a3b844Bc9e7595f0aB3d"), json!(1000)],
        )
        .unwrap();
        assert!(data.starts_with("0xa9059cbb"));
        assert_eq!(data.len(), 2 + 8 + 64 * 2);
    }

    #[test]
    fn mismatch_surfaces_from_encoder() {
        assert!(code_tx_data("transfer(address,uint256)", &["address"], &[json!(1)]).is_err());
    }

    #[test]
    fn contract_string_output_via_hex2a() {
        // A bytes32 field holding "BACH" followed by null padding
        let field = "4241434800000000000000000000000000000000000000000000000000000000";
        assert_eq!(hex2a(field), "BACH");
    }

    #[test]
    fn decode_string_return() {
        let output = code_params(&["string"], &[json!("hello world")]).unwrap();
        let tokens = decode_params(&["string"], &output).unwrap();
        assert_eq!(tokens, vec![Token::String("hello world".to_string())]);
    }
}

fn arb_param() -> impl Strategy<Value = (&'static str, Value)> {
    prop_oneof![
        any::<u64>().prop_map(|n| ("uint256", json!(n))),
        any::<bool>().prop_map(|b| ("bool", json!(b))),
        "[ -~]{0,40}".prop_map(|s| ("string", json!(s))),
        proptest::collection::vec(any::<u8>(), 20)
            .prop_map(|b| ("address", json!(format!("0x{}", hex::encode(b))))),
    ]
}

proptest! {
    #[test]
    fn tx_data_is_selector_plus_params(
        name in "[a-zA-Z_][a-zA-Z0-9_]{0,20}",
        params in proptest::collection::vec(arb_param(), 0..5),
    ) {
        let (types, values): (Vec<&str>, Vec<Value>) = params.into_iter().unzip();
        let signature = format!("{}({})", name, types.join(","));

        let expected = format!("{}{}", code_fun(&signature), code_params(&types, &values).unwrap());
        prop_assert_eq!(code_tx_data(&signature, &types, &values).unwrap(), expected);
    }

    #[test]
    fn code_params_is_deterministic(params in proptest::collection::vec(arb_param(), 0..5)) {
        let (types, values): (Vec<&str>, Vec<Value>) = params.into_iter().unzip();
        prop_assert_eq!(
            code_params(&types, &values).unwrap(),
            code_params(&types, &values).unwrap()
        );
    }

    #[test]
    fn hex2a_inverts_hex_for_nonzero_ascii(s in "[\\x01-\\x7f]{0,64}") {
        prop_assert_eq!(hex2a(&hex::encode(s.as_bytes())), s);
    }

    #[test]
    fn hex2a_never_panics(s in ".{0,64}") {
        let out = hex2a(&s);
        prop_assert!(out.chars().count() <= s.chars().count() / 2);
    }
}
