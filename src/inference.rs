//! Single-trigger inference: one reading in, three actuator statuses out.

use crate::actuator::{Actuator, ActuatorState, ACTUATOR_COUNT};
use crate::errors::{InferenceError, LabelError};
use crate::features::feature_matrix;
use crate::model::Predict;
use crate::reading::SensorReading;

/// Raw classifier outputs for one reading, positionally
/// [fan, watering_pump, water_pump].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredictionVector {
    classes: [i64; ACTUATOR_COUNT],
}

impl PredictionVector {
    pub fn from_classes(classes: [i64; ACTUATOR_COUNT]) -> Self {
        Self { classes }
    }

    pub fn classes(&self) -> [i64; ACTUATOR_COUNT] {
        self.classes
    }

    /// Decode every position through the shared binary label table.
    ///
    /// Fails on the first class outside {0, 1}; no partial label set is
    /// produced.
    pub fn statuses(&self) -> Result<[(Actuator, ActuatorState); ACTUATOR_COUNT], LabelError> {
        let mut out = [(Actuator::Fan, ActuatorState::Off); ACTUATOR_COUNT];
        for (slot, (actuator, class)) in out
            .iter_mut()
            .zip(Actuator::ORDER.into_iter().zip(self.classes))
        {
            *slot = (actuator, ActuatorState::from_class(class)?);
        }
        Ok(out)
    }
}

/// Run the classifier on one reading.
///
/// Assembles the single-row feature batch in canonical column order,
/// presents it to the model, and extracts the single resulting row. The
/// model call is treated as pure; failures surface unchanged, with no
/// retry and no partial result.
pub fn predict<M>(reading: &SensorReading, model: &M) -> Result<PredictionVector, InferenceError>
where
    M: Predict + ?Sized,
{
    let features = feature_matrix(reading);
    let output = model.predict(features.view())?;

    let row = output
        .rows()
        .into_iter()
        .next()
        .ok_or(InferenceError::EmptyPrediction)?;
    if row.len() != ACTUATOR_COUNT {
        return Err(InferenceError::OutputArity {
            expected: ACTUATOR_COUNT,
            actual: row.len(),
        });
    }

    let mut classes = [0i64; ACTUATOR_COUNT];
    for (slot, &value) in classes.iter_mut().zip(row.iter()) {
        *slot = value;
    }
    Ok(PredictionVector { classes })
}
