//! Reproduction-number arithmetic: herd-immunity thresholds and effective R.
//!
//! Interventions (vaccination, masking, distancing) are assumed to reduce
//! transmission multiplicatively and independently:
//! Rₑ = R₀ · ∏(1 − effectiveness_i). This is a modeling choice, not a
//! physical law; correlated interventions would need a joint model.

use serde::{Deserialize, Serialize};
use tracing::warn;

#[cfg(feature = "python")]
use pyo3::prelude::*;

use crate::error::{ensure_positive, ensure_unit_fraction, ParameterError};

/// Default floor applied to effective reproduction numbers.
///
/// A zero or negative Rₑ breaks downstream exponential and log computations,
/// so results are clamped to this small positive value. The constant has no
/// epidemiological justification; callers that care can pass their own floor
/// via [`combined_effective_reproduction_with_floor`].
pub const DEFAULT_RE_FLOOR: f64 = 0.1;

/// An effective reproduction number together with a flag recording whether
/// the floor rewrote the computed value.
///
/// Silently changing a user-requested parameter is a latent correctness
/// hazard, so flooring is surfaced here rather than hidden.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EffectiveR {
    /// The (possibly floored) effective reproduction number.
    pub value: f64,
    /// True when the raw product fell below the floor and was clamped.
    pub floored: bool,
}

/// Minimum immune population fraction required to drive Rₑ below 1:
/// `1 − 1/R₀`.
///
/// Only meaningful for sustained transmission. Returns
/// [`ParameterError::ThresholdUndefined`] for `0 < R0 <= 1`, which callers
/// should read as "no threshold needed".
pub fn herd_immunity_threshold(r0: f64) -> Result<f64, ParameterError> {
    ensure_positive("R0", r0)?;
    if r0 <= 1.0 {
        return Err(ParameterError::ThresholdUndefined { r0 });
    }
    Ok(1.0 - 1.0 / r0)
}

/// Effective reproduction number under a single intervention:
/// `R₀ · (1 − coverage)`, floored at [`DEFAULT_RE_FLOOR`].
pub fn effective_reproduction_number(
    r0: f64,
    coverage: f64,
) -> Result<EffectiveR, ParameterError> {
    combined_effective_reproduction(r0, &[coverage])
}

/// Effective reproduction number under independent interventions:
/// `R₀ · ∏(1 − effectiveness_i)`, floored at [`DEFAULT_RE_FLOOR`].
///
/// An empty slice means no interventions and yields Rₑ = R₀.
pub fn combined_effective_reproduction(
    r0: f64,
    effects: &[f64],
) -> Result<EffectiveR, ParameterError> {
    combined_effective_reproduction_with_floor(r0, effects, DEFAULT_RE_FLOOR)
}

/// As [`combined_effective_reproduction`], with an explicit floor.
pub fn combined_effective_reproduction_with_floor(
    r0: f64,
    effects: &[f64],
    floor: f64,
) -> Result<EffectiveR, ParameterError> {
    ensure_positive("R0", r0)?;
    ensure_positive("Re floor", floor)?;
    for effect in effects {
        ensure_unit_fraction("intervention effectiveness", *effect)?;
    }

    let raw = effects.iter().fold(r0, |re, effect| re * (1.0 - effect));
    if raw < floor {
        warn!(raw, floor, "effective R fell below the floor and was clamped");
        Ok(EffectiveR {
            value: floor,
            floored: true,
        })
    } else {
        Ok(EffectiveR {
            value: raw,
            floored: false,
        })
    }
}
