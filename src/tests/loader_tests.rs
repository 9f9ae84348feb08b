use std::fs;
use std::sync::Arc;

use serde_json::json;

use super::test_helpers::{demo_artifact, write_artifact};
use crate::errors::ArtifactError;
use crate::inference;
use crate::model::{load_artifact, ModelCache};
use crate::reading::SensorReading;

#[test]
fn missing_artifact_is_not_found() {
    let cache = ModelCache::new("/nonexistent/irrigation-model.json");
    match cache.get() {
        Err(ArtifactError::NotFound { path }) => {
            assert!(path.ends_with("irrigation-model.json"));
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn malformed_json_is_a_parse_error() {
    let path = std::env::temp_dir().join("irrigation_malformed.json");
    fs::write(&path, "{ not json").unwrap();
    match load_artifact(&path) {
        Err(ArtifactError::Parse { .. }) => {}
        other => panic!("expected Parse, got {:?}", other),
    }
    fs::remove_file(&path).ok();
}

#[test]
fn wrong_input_arity_is_a_schema_error() {
    let mut doc = demo_artifact();
    doc["feature_names"] = json!(["temperature", "humidity"]);
    let path = write_artifact("irrigation_wrong_inputs.json", &doc);
    match load_artifact(&path) {
        Err(ArtifactError::Schema {
            kind,
            expected,
            actual,
            ..
        }) => {
            assert_eq!(kind, "input");
            assert_eq!(expected, 6);
            assert_eq!(actual, 2);
        }
        other => panic!("expected Schema, got {:?}", other),
    }
    fs::remove_file(&path).ok();
}

#[test]
fn wrong_output_arity_is_a_schema_error() {
    let mut doc = demo_artifact();
    doc["output_names"] = json!(["fan", "watering_pump"]);
    let path = write_artifact("irrigation_wrong_outputs.json", &doc);
    match load_artifact(&path) {
        Err(ArtifactError::Schema { kind, actual, .. }) => {
            assert_eq!(kind, "output");
            assert_eq!(actual, 2);
        }
        other => panic!("expected Schema, got {:?}", other),
    }
    fs::remove_file(&path).ok();
}

#[test]
fn structurally_broken_tree_is_invalid() {
    let mut doc = demo_artifact();
    doc["nodes"][0]["left"] = json!(42);
    let path = write_artifact("irrigation_broken_tree.json", &doc);
    match load_artifact(&path) {
        Err(ArtifactError::Invalid { reason, .. }) => {
            assert!(reason.contains("out of range"));
        }
        other => panic!("expected Invalid, got {:?}", other),
    }
    fs::remove_file(&path).ok();
}

#[test]
fn cache_returns_the_same_handle_and_reads_storage_once() {
    let path = write_artifact("irrigation_cache_identity.json", &demo_artifact());
    let cache = ModelCache::new(path.clone());

    let first = Arc::clone(cache.get().unwrap());
    // Removing the file proves later calls never touch storage.
    fs::remove_file(&path).unwrap();
    let second = Arc::clone(cache.get().unwrap());

    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn failed_load_attempts_no_prediction_and_leaves_cache_usable() {
    let path = std::env::temp_dir().join("irrigation_absent_then_present.json");
    fs::remove_file(&path).ok();
    let cache = ModelCache::new(path.clone());

    assert!(matches!(cache.get(), Err(ArtifactError::NotFound { .. })));

    // Once the artifact appears, the cache recovers on the next call.
    fs::write(&path, demo_artifact().to_string()).unwrap();
    assert!(cache.get().is_ok());
    fs::remove_file(&path).ok();
}

#[test]
fn loaded_tree_predicts_end_to_end() {
    let path = write_artifact("irrigation_end_to_end.json", &demo_artifact());
    let cache = ModelCache::new(path.clone());
    let model = cache.get().unwrap();

    // Hot: fan plus watering pump.
    let hot = SensorReading {
        temperature: 40.0,
        ..SensorReading::default()
    };
    let prediction = inference::predict(&hot, model.as_ref()).unwrap();
    assert_eq!(prediction.classes(), [1, 1, 0]);

    // Cool with a low reservoir: both pumps.
    let low_water = SensorReading {
        water_level: 10.0,
        ..SensorReading::default()
    };
    let prediction = inference::predict(&low_water, model.as_ref()).unwrap();
    assert_eq!(prediction.classes(), [0, 1, 1]);

    // Cool and well stocked: everything off.
    let prediction = inference::predict(&SensorReading::default(), model.as_ref()).unwrap();
    assert_eq!(prediction.classes(), [0, 0, 0]);

    fs::remove_file(&path).ok();
}
