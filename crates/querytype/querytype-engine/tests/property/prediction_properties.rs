use proptest::prelude::*;
use querytype_core::config::QuerytypeConfig;
use querytype_engine::PredictionEngine;
use serde_json::{json, Map, Value};

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        // Magnitudes where serde_json and Python both print positional digits.
        (-1.0e6f64..1.0e6)
            .prop_filter("positional range", |f| *f == 0.0 || f.abs() >= 1.0e-3)
            .prop_map(|f| json!(f)),
        "[a-zA-Z0-9 éü😀]{0,12}".prop_map(Value::String),
    ]
}

fn arb_id() -> impl Strategy<Value = Option<Value>> {
    prop_oneof![
        Just(None),
        arb_scalar().prop_map(Some),
        prop::collection::vec(arb_scalar(), 0..3).prop_map(|v| Some(Value::Array(v))),
    ]
}

fn arb_query() -> impl Strategy<Value = Value> {
    (arb_id(), prop::collection::btree_map("[a-z]{1,6}", arb_scalar(), 0..3)).prop_map(
        |(id, extras)| {
            let mut object = Map::new();
            for (key, value) in extras {
                if key != "id" {
                    object.insert(key, value);
                }
            }
            if let Some(id) = id {
                object.insert("id".to_string(), id);
            }
            Value::Object(object)
        },
    )
}

fn engine() -> PredictionEngine {
    PredictionEngine::from_config(&QuerytypeConfig::default()).unwrap()
}

proptest! {
    #[test]
    fn predictions_match_queries_by_position(queries in prop::collection::vec(arb_query(), 0..20)) {
        let input = serde_json::to_string(&json!({ "queries": queries })).unwrap();
        let output = engine().run(&input).unwrap();
        let doc: Value = serde_json::from_str(&output).unwrap();
        let predictions = doc["predictions"].as_array().unwrap();

        prop_assert_eq!(predictions.len(), queries.len());
        for (query, prediction) in queries.iter().zip(predictions) {
            let expected_id = query.get("id").cloned().unwrap_or(Value::Null);
            prop_assert_eq!(&prediction["id"], &expected_id);
            prop_assert_eq!(&prediction["type"], &json!("any"));
            prop_assert_eq!(prediction["score"].as_f64(), Some(0.0));
            prop_assert_eq!(prediction.as_object().unwrap().len(), 3);
        }
    }

    #[test]
    fn output_is_ascii_and_deterministic(queries in prop::collection::vec(arb_query(), 0..10)) {
        let input = serde_json::to_string(&json!({ "queries": queries })).unwrap();
        let engine = engine();
        let first = engine.run(&input).unwrap();
        let second = engine.run(&input).unwrap();
        prop_assert!(first.is_ascii());
        prop_assert_eq!(first, second);
    }
}
