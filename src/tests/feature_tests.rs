use approx::assert_abs_diff_eq;

use super::test_helpers::EchoModel;
use crate::features::{feature_matrix, FEATURE_COUNT};
use crate::inference;
use crate::reading::SensorReading;

fn reading_from_row(row: [f64; 6]) -> SensorReading {
    SensorReading {
        temperature: row[0],
        humidity: row[1],
        water_level: row[2],
        nitrogen: row[3],
        phosphorus: row[4],
        potassium: row[5],
    }
}

#[test]
fn default_projection_matches_field_defaults() {
    let matrix = feature_matrix(&SensorReading::default());
    let expected = [30.0, 60.0, 100.0, 255.0, 255.0, 255.0];
    for (value, want) in matrix.row(0).iter().zip(expected) {
        assert_abs_diff_eq!(*value, want);
    }
}

#[test]
fn swapping_any_two_fields_changes_the_matrix() {
    let base = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let baseline = feature_matrix(&reading_from_row(base));

    for i in 0..FEATURE_COUNT {
        for j in (i + 1)..FEATURE_COUNT {
            let mut swapped = base;
            swapped.swap(i, j);
            let matrix = feature_matrix(&reading_from_row(swapped));
            assert_ne!(
                matrix, baseline,
                "swap of columns {} and {} went undetected",
                i, j
            );
        }
    }
}

#[test]
fn adapter_hands_the_model_one_row_in_canonical_order() {
    let model = EchoModel::new();
    let reading = reading_from_row([30.0, 60.0, 100.0, 255.0, 254.0, 253.0]);
    inference::predict(&reading, &model).unwrap();

    let seen = model.seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0], vec![30.0, 60.0, 100.0, 255.0, 254.0, 253.0]);
}
