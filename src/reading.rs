//! Sensor reading data model and static bounds.
//!
//! One reading is a snapshot of the six form inputs. Readings are created
//! by the presentation collaborator, fed to one prediction, and discarded;
//! nothing here is retained across triggers.

use serde::{Deserialize, Serialize};

use crate::errors::BoundsError;

/// Bounds, default, and display metadata for one sensor input.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub unit: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl FieldSpec {
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

pub const TEMPERATURE: FieldSpec = FieldSpec {
    name: "temperature",
    unit: "°C",
    min: 0.0,
    max: 60.0,
    default: 30.0,
};

pub const HUMIDITY: FieldSpec = FieldSpec {
    name: "humidity",
    unit: "%",
    min: 0.0,
    max: 100.0,
    default: 60.0,
};

pub const WATER_LEVEL: FieldSpec = FieldSpec {
    name: "water_level",
    unit: "",
    min: 0.0,
    max: 1000.0,
    default: 100.0,
};

pub const NITROGEN: FieldSpec = FieldSpec {
    name: "nitrogen",
    unit: "mg/kg",
    min: 0.0,
    max: 300.0,
    default: 255.0,
};

pub const PHOSPHORUS: FieldSpec = FieldSpec {
    name: "phosphorus",
    unit: "mg/kg",
    min: 0.0,
    max: 300.0,
    default: 255.0,
};

pub const POTASSIUM: FieldSpec = FieldSpec {
    name: "potassium",
    unit: "mg/kg",
    min: 0.0,
    max: 300.0,
    default: 255.0,
};

/// All six field specs in form display order.
pub const FIELD_SPECS: [FieldSpec; 6] = [
    TEMPERATURE,
    HUMIDITY,
    WATER_LEVEL,
    NITROGEN,
    PHOSPHORUS,
    POTASSIUM,
];

/// One snapshot of the six sensor inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub temperature: f64,
    pub humidity: f64,
    pub water_level: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
}

impl Default for SensorReading {
    fn default() -> Self {
        Self {
            temperature: TEMPERATURE.default,
            humidity: HUMIDITY.default,
            water_level: WATER_LEVEL.default,
            nitrogen: NITROGEN.default,
            phosphorus: PHOSPHORUS.default,
            potassium: POTASSIUM.default,
        }
    }
}

impl SensorReading {
    /// A reading pinned to every field's lower bound.
    pub fn at_minimums() -> Self {
        Self {
            temperature: TEMPERATURE.min,
            humidity: HUMIDITY.min,
            water_level: WATER_LEVEL.min,
            nitrogen: NITROGEN.min,
            phosphorus: PHOSPHORUS.min,
            potassium: POTASSIUM.min,
        }
    }

    /// Every field paired with its spec, in form display order.
    pub fn fields(&self) -> [(FieldSpec, f64); 6] {
        [
            (TEMPERATURE, self.temperature),
            (HUMIDITY, self.humidity),
            (WATER_LEVEL, self.water_level),
            (NITROGEN, self.nitrogen),
            (PHOSPHORUS, self.phosphorus),
            (POTASSIUM, self.potassium),
        ]
    }

    /// Range-check every field against its static bounds.
    ///
    /// The input collaborator enforces these bounds at collection time;
    /// this re-check exists for readings built programmatically.
    pub fn validate(&self) -> Result<(), BoundsError> {
        for (spec, value) in self.fields() {
            if !value.is_finite() {
                return Err(BoundsError::NotFinite { field: spec.name });
            }
            if !spec.contains(value) {
                return Err(BoundsError::OutOfRange {
                    field: spec.name,
                    value,
                    min: spec.min,
                    max: spec.max,
                });
            }
        }
        Ok(())
    }
}
