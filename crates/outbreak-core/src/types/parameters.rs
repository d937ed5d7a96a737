use serde::{Deserialize, Serialize};

use crate::error::{ensure_positive, ensure_unit_fraction, ParameterError};
use crate::reproduction::{combined_effective_reproduction, EffectiveR};

/// A named intervention with its transmission-reducing effectiveness in [0, 1].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Intervention {
    pub name: String,
    pub effectiveness: f64,
}

/// User-facing epidemic inputs: a baseline R₀ plus zero or more independent
/// interventions.
///
/// This is the plain parameter bundle the presentation layer hands to the
/// engine; precedence rules between sliders and presets stay on that side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EpidemicParameters {
    pub r0: f64,
    pub interventions: Vec<Intervention>,
}

impl EpidemicParameters {
    /// Parameters with a bare R₀ and no interventions.
    pub fn new(r0: f64) -> Self {
        Self {
            r0,
            interventions: Vec::new(),
        }
    }

    /// Add an intervention, consuming and returning `self` for chaining.
    pub fn with_intervention(mut self, name: impl Into<String>, effectiveness: f64) -> Self {
        self.interventions.push(Intervention {
            name: name.into(),
            effectiveness,
        });
        self
    }

    /// Validate R₀ and every intervention effectiveness.
    pub fn validate(&self) -> Result<(), ParameterError> {
        ensure_positive("R0", self.r0)?;
        for intervention in &self.interventions {
            ensure_unit_fraction("intervention effectiveness", intervention.effectiveness)?;
        }
        Ok(())
    }

    /// The effective reproduction number under all interventions combined.
    pub fn effective_r(&self) -> Result<EffectiveR, ParameterError> {
        let effects: Vec<f64> = self
            .interventions
            .iter()
            .map(|i| i.effectiveness)
            .collect();
        combined_effective_reproduction(self.r0, &effects)
    }
}
