//! Randomized properties of the JSON adapter and the flat rebuild law.

use proptest::prelude::*;
use serde_json::Value as Json;
use valtree::codec::{value_from_json, value_to_json};
use valtree::{extract_flat, set, Node, Value};

fn arb_scalar() -> impl Strategy<Value = Json> {
    prop_oneof![
        any::<bool>().prop_map(Json::from),
        (-1_000_000i64..1_000_000).prop_map(Json::from),
        (-1.0e6..1.0e6f64).prop_map(Json::from),
        "[a-z]{0,8}".prop_map(Json::from),
    ]
}

// Containers are non-empty and keys are short lowercase words, so every
// childless slot carries a value and no key ever classifies as an index.
fn arb_doc() -> impl Strategy<Value = Json> {
    arb_scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 1..4).prop_map(Json::Array),
            prop::collection::btree_map("[a-z]{1,4}", inner, 1..4)
                .prop_map(|m| Json::Object(m.into_iter().collect())),
        ]
    })
}

fn rebuild(leaves: Vec<Node>, dst: &mut Value) {
    for leaf in leaves {
        if let Some(value) = leaf.value {
            set(dst, &leaf.path, value).unwrap();
        }
    }
}

proptest! {
    #[test]
    fn json_round_trips(doc in arb_doc()) {
        prop_assert_eq!(value_to_json(&value_from_json(&doc)), doc);
    }

    #[test]
    fn flat_rebuild_reproduces_the_document(doc in arb_doc()) {
        let src = value_from_json(&doc);
        let mut dst = Value::Any(None);
        rebuild(extract_flat(&src), &mut dst);
        prop_assert_eq!(value_to_json(&dst), doc);
    }

    #[test]
    fn flat_rebuild_is_idempotent(doc in arb_doc()) {
        let src = value_from_json(&doc);
        let mut dst = Value::Any(None);
        rebuild(extract_flat(&src), &mut dst);
        let after_first = dst.clone();

        for leaf in extract_flat(&src) {
            if let Some(value) = leaf.value {
                let change = set(&mut dst, &leaf.path, value).unwrap();
                prop_assert_eq!(change.old, Some(change.new));
            }
        }
        prop_assert_eq!(dst, after_first);
    }
}
