//! Canonical feature ordering for the actuator classifier.
//!
//! The model was trained on one exact column order. Permuting it does not
//! error, it silently produces wrong predictions, so the projection from
//! `SensorReading` to the feature row is a named mapping with its own
//! tests rather than a positional array literal.

use ndarray::Array2;

use crate::reading::{
    FieldSpec, SensorReading, HUMIDITY, NITROGEN, PHOSPHORUS, POTASSIUM, TEMPERATURE, WATER_LEVEL,
};

/// One column of the trained feature space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Temperature,
    Humidity,
    WaterLevel,
    Nitrogen,
    Phosphorus,
    Potassium,
}

/// Number of input columns the classifier was trained on.
pub const FEATURE_COUNT: usize = Feature::ORDER.len();

impl Feature {
    /// Column order the classifier was trained on. Load-bearing: the model
    /// artifact assumes exactly this sequence.
    pub const ORDER: [Feature; 6] = [
        Feature::Temperature,
        Feature::Humidity,
        Feature::WaterLevel,
        Feature::Nitrogen,
        Feature::Phosphorus,
        Feature::Potassium,
    ];

    pub fn spec(&self) -> &'static FieldSpec {
        match self {
            Feature::Temperature => &TEMPERATURE,
            Feature::Humidity => &HUMIDITY,
            Feature::WaterLevel => &WATER_LEVEL,
            Feature::Nitrogen => &NITROGEN,
            Feature::Phosphorus => &PHOSPHORUS,
            Feature::Potassium => &POTASSIUM,
        }
    }

    /// Project the reading onto this feature's column.
    pub fn extract(&self, reading: &SensorReading) -> f64 {
        match self {
            Feature::Temperature => reading.temperature,
            Feature::Humidity => reading.humidity,
            Feature::WaterLevel => reading.water_level,
            Feature::Nitrogen => reading.nitrogen,
            Feature::Phosphorus => reading.phosphorus,
            Feature::Potassium => reading.potassium,
        }
    }
}

/// Build the single-row feature batch in canonical column order.
pub fn feature_matrix(reading: &SensorReading) -> Array2<f64> {
    let row: Vec<f64> = Feature::ORDER.iter().map(|f| f.extract(reading)).collect();
    Array2::from_shape_vec((1, FEATURE_COUNT), row)
        .expect("feature row length equals FEATURE_COUNT")
}
