//! Terminal form collaborator.
//!
//! Owns everything outside the inference core's contract: labeled numeric
//! prompts with bounds and defaults, the explicit prediction trigger, and
//! rendering of the three actuator statuses. A reading returned from
//! `collect_reading` is always within bounds; this layer enforces the
//! range invariant so the core never sees an out-of-range value.

use std::io::{self, BufRead, Write};

use crate::actuator::{Actuator, ActuatorState};
use crate::reading::{
    FieldSpec, SensorReading, HUMIDITY, NITROGEN, PHOSPHORUS, POTASSIUM, TEMPERATURE, WATER_LEVEL,
};

pub struct Form<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Form<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn banner(&mut self) -> io::Result<()> {
        writeln!(self.output, "Smart Irrigation Decision System")?;
        writeln!(
            self.output,
            "Actuator recommendations from environmental and soil nutrient data."
        )?;
        writeln!(self.output)?;
        writeln!(
            self.output,
            "Enter a value for each sensor; empty input accepts the default."
        )?;
        writeln!(self.output, "Finish with Ctrl-D.")?;
        writeln!(self.output)
    }

    pub fn footer(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(
            self.output,
            "Built for smart farming - AI-assisted irrigation control."
        )
    }

    /// Prompt for all six fields in display order.
    ///
    /// Returns `None` once input is exhausted.
    pub fn collect_reading(&mut self) -> io::Result<Option<SensorReading>> {
        writeln!(self.output, "Sensor Inputs")?;
        let Some(temperature) = self.prompt_field(&TEMPERATURE)? else {
            return Ok(None);
        };
        let Some(humidity) = self.prompt_field(&HUMIDITY)? else {
            return Ok(None);
        };
        let Some(water_level) = self.prompt_field(&WATER_LEVEL)? else {
            return Ok(None);
        };
        let Some(nitrogen) = self.prompt_field(&NITROGEN)? else {
            return Ok(None);
        };
        let Some(phosphorus) = self.prompt_field(&PHOSPHORUS)? else {
            return Ok(None);
        };
        let Some(potassium) = self.prompt_field(&POTASSIUM)? else {
            return Ok(None);
        };
        Ok(Some(SensorReading {
            temperature,
            humidity,
            water_level,
            nitrogen,
            phosphorus,
            potassium,
        }))
    }

    fn prompt_field(&mut self, spec: &FieldSpec) -> io::Result<Option<f64>> {
        loop {
            if spec.unit.is_empty() {
                write!(
                    self.output,
                    "  {} [{} to {}, default {}]: ",
                    spec.name, spec.min, spec.max, spec.default
                )?;
            } else {
                write!(
                    self.output,
                    "  {} ({}) [{} to {}, default {}]: ",
                    spec.name, spec.unit, spec.min, spec.max, spec.default
                )?;
            }
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return Ok(Some(spec.default));
            }
            match trimmed.parse::<f64>() {
                Ok(value) if spec.contains(value) => return Ok(Some(value)),
                Ok(value) => {
                    writeln!(
                        self.output,
                        "  {} must be between {} and {}, got {}",
                        spec.name, spec.min, spec.max, value
                    )?;
                }
                Err(_) => {
                    writeln!(self.output, "  not a number: '{}'", trimmed)?;
                }
            }
        }
    }

    /// The explicit trigger: run inference only on confirmation.
    pub fn confirm(&mut self) -> io::Result<bool> {
        write!(self.output, "Predict actuator status? [Y/n] ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        let answer = line.trim().to_ascii_lowercase();
        Ok(answer.is_empty() || answer == "y" || answer == "yes")
    }

    pub fn render_statuses(&mut self, statuses: &[(Actuator, ActuatorState)]) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Actuator Outputs")?;
        for (actuator, state) in statuses {
            let label = format!("{}:", actuator.display_name());
            writeln!(self.output, "  {:<22} {}", label, state)?;
        }
        writeln!(self.output)
    }
}
