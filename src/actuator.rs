//! Actuator identities and the binary status label shared by all three.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::LabelError;

/// The three controlled actuators, in classifier output-column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actuator {
    Fan,
    WateringPump,
    WaterPump,
}

/// Number of output columns the classifier was trained to emit.
pub const ACTUATOR_COUNT: usize = Actuator::ORDER.len();

impl Actuator {
    /// Output-column order of the trained model: positions 0, 1, 2.
    pub const ORDER: [Actuator; 3] = [Actuator::Fan, Actuator::WateringPump, Actuator::WaterPump];

    pub fn display_name(&self) -> &'static str {
        match self {
            Actuator::Fan => "Fan",
            Actuator::WateringPump => "Watering Plant Pump",
            Actuator::WaterPump => "Water Pump",
        }
    }
}

/// Binary actuator status decoded from one classifier output.
///
/// This crate only displays the recommendation; it never drives hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActuatorState {
    Off,
    On,
}

impl ActuatorState {
    /// Decode one raw classifier output. Total over {0, 1}; anything else
    /// marks a mismatched artifact and is surfaced, not coerced.
    pub fn from_class(class: i64) -> Result<Self, LabelError> {
        match class {
            0 => Ok(ActuatorState::Off),
            1 => Ok(ActuatorState::On),
            other => Err(LabelError::UnknownClass(other)),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActuatorState::Off => "OFF",
            ActuatorState::On => "ON",
        }
    }
}

impl fmt::Display for ActuatorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
