//! End-to-end ABI tests: type names + JSON values in, canonical bytes out

use proptest::prelude::*;
use serde_json::{json, Value};
use txcode_abi::{decode, encode_params, parse_types, tokenize, AbiError, Token};

fn encode_json(types: &[&str], values: &[Value]) -> Result<String, AbiError> {
    let types = parse_types(types)?;
    let tokens = tokenize(&types, values)?;
    Ok(hex::encode(encode_params(&types, &tokens)?))
}

mod known_vectors {
    use super::*;

    #[test]
    fn erc20_transfer_params() {
        let encoded = encode_json(
            &["address", "uint256"],
            &[json!("0x742d35Cc6634C0532925a3b844Bc9e7595f0aB3d"), json!(1000)],
        )
        .unwrap();
        assert_eq!(
            encoded,
            concat!(
                "000000000000000000000000742d35cc6634c0532925a3b844bc9e7595f0ab3d",
                "00000000000000000000000000000000000000000000000000000000000003e8",
            )
        );
    }

    #[test]
    fn solidity_docs_baz_example() {
        // baz(uint32,bool) with (69, true)
        let encoded = encode_json(&["uint32", "bool"], &[json!(69), json!(true)]).unwrap();
        assert_eq!(
            encoded,
            concat!(
                "0000000000000000000000000000000000000000000000000000000000000045",
                "0000000000000000000000000000000000000000000000000000000000000001",
            )
        );
    }

    #[test]
    fn solidity_docs_sam_example() {
        // sam(bytes,bool,uint256[]) with ("dave", true, [1,2,3])
        let encoded = encode_json(
            &["bytes", "bool", "uint256[]"],
            &[json!("0x64617665"), json!(true), json!([1, 2, 3])],
        )
        .unwrap();
        assert_eq!(
            encoded,
            concat!(
                "0000000000000000000000000000000000000000000000000000000000000060",
                "0000000000000000000000000000000000000000000000000000000000000001",
                "00000000000000000000000000000000000000000000000000000000000000a0",
                "0000000000000000000000000000000000000000000000000000000000000004",
                "6461766500000000000000000000000000000000000000000000000000000000",
                "0000000000000000000000000000000000000000000000000000000000000003",
                "0000000000000000000000000000000000000000000000000000000000000001",
                "0000000000000000000000000000000000000000000000000000000000000002",
                "0000000000000000000000000000000000000000000000000000000000000003",
            )
        );
    }

    #[test]
    fn solidity_docs_bar_example() {
        // bar(bytes3[2]) with ["abc", "def"]
        let encoded = encode_json(&["bytes3[2]"], &[json!(["0x616263", "0x646566"])]).unwrap();
        assert_eq!(
            encoded,
            concat!(
                "6162630000000000000000000000000000000000000000000000000000000000",
                "6465660000000000000000000000000000000000000000000000000000000000",
            )
        );
    }

    #[test]
    fn no_params_encode_to_nothing() {
        assert_eq!(encode_json(&[], &[]).unwrap(), "");
    }
}

mod failures {
    use super::*;

    #[test]
    fn unknown_type_name() {
        assert_eq!(
            encode_json(&["uint7"], &[json!(1)]),
            Err(AbiError::UnknownType("uint7".to_string()))
        );
    }

    #[test]
    fn fewer_values_than_types() {
        assert_eq!(
            encode_json(&["address", "uint256"], &[json!("0x01")]),
            Err(AbiError::LengthMismatch { types: 2, values: 1 })
        );
    }

    #[test]
    fn wrong_value_shape() {
        assert!(matches!(
            encode_json(&["string"], &[json!(5)]),
            Err(AbiError::TypeMismatch { .. })
        ));
    }
}

fn arb_value() -> impl Strategy<Value = (&'static str, Value)> {
    prop_oneof![
        any::<u64>().prop_map(|n| ("uint256", json!(n))),
        any::<i64>().prop_map(|n| ("int64", json!(n))),
        any::<bool>().prop_map(|b| ("bool", json!(b))),
        "[a-zA-Z0-9 ]{0,80}".prop_map(|s| ("string", json!(s))),
        proptest::collection::vec(any::<u8>(), 0..70)
            .prop_map(|b| ("bytes", json!(format!("0x{}", hex::encode(b))))),
        proptest::collection::vec(any::<u32>(), 0..5).prop_map(|v| ("uint32[]", json!(v))),
    ]
}

proptest! {
    #[test]
    fn encoding_is_deterministic(params in proptest::collection::vec(arb_value(), 0..6)) {
        let (types, values): (Vec<&str>, Vec<Value>) = params.into_iter().unzip();
        let first = encode_json(&types, &values).unwrap();
        let second = encode_json(&types, &values).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len() % 64, 0);
    }

    #[test]
    fn decode_inverts_encode(params in proptest::collection::vec(arb_value(), 0..6)) {
        let (types, values): (Vec<&str>, Vec<Value>) = params.into_iter().unzip();
        let types = parse_types(&types).unwrap();
        let tokens = tokenize(&types, &values).unwrap();
        let encoded = encode_params(&types, &tokens).unwrap();
        let decoded: Vec<Token> = decode(&types, &encoded).unwrap();
        prop_assert_eq!(decoded, tokens);
    }
}
