//! Deterministic generation-by-generation exponential growth.
//!
//! Generation 0 is a single index case; every later generation multiplies the
//! previous count by the active reproduction number (R₀ for a no-intervention
//! baseline, Rₑ for an intervention scenario).
//!
//! Counts are `f64`: growth overflows integer types quickly for large
//! multipliers (15¹² ≈ 1.3 × 10¹⁴), and very large values lose integer
//! precision. Truncated integers are for display only and must never feed
//! back into computation.

use serde::{Deserialize, Serialize};

use outbreak_core::{
    effective_reproduction_number, ensure_non_negative, CompartmentModel, EffectiveR,
    ParameterError,
};

/// One generation of the branching recurrence.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationPoint {
    pub generation: u32,
    pub infected: f64,
}

impl GenerationPoint {
    /// The infected count truncated for display.
    pub fn display_count(&self) -> u64 {
        self.infected.max(0.0).trunc() as u64
    }
}

/// Infected counts per generation, starting at generation 0 with count 1.
pub type GenerationSeries = Vec<GenerationPoint>;

/// Simulate `num_generations` generations of growth under `multiplier`.
///
/// The returned series has `num_generations + 1` entries; entry `k` equals
/// `multiplier^k`.
pub fn simulate_generations(
    multiplier: f64,
    num_generations: u32,
) -> Result<GenerationSeries, ParameterError> {
    ensure_non_negative("multiplier", multiplier)?;

    let mut series = Vec::with_capacity(num_generations as usize + 1);
    series.push(GenerationPoint {
        generation: 0,
        infected: 1.0,
    });
    for generation in 1..=num_generations {
        let previous = series[generation as usize - 1].infected;
        series.push(GenerationPoint {
            generation,
            infected: previous * multiplier,
        });
    }
    Ok(series)
}

/// Total infections summed across all generations of a series.
pub fn cumulative_infected(series: &[GenerationPoint]) -> f64 {
    series.iter().map(|p| p.infected).sum()
}

/// Stepping-engine form of the growth recurrence.
///
/// A single `I` compartment multiplied by the reproduction number each step;
/// equivalent to [`simulate_generations`] but usable through
/// [`CompartmentModel`] alongside the SEIR engine.
#[derive(Clone, Debug)]
pub struct GenerationGrowth {
    multiplier: f64,
    infected: f64,
    generation: u32,
}

impl GenerationGrowth {
    pub fn new(multiplier: f64) -> Result<Self, ParameterError> {
        ensure_non_negative("multiplier", multiplier)?;
        Ok(Self {
            multiplier,
            infected: 1.0,
            generation: 0,
        })
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }
}

impl CompartmentModel for GenerationGrowth {
    fn compartments(&self) -> Vec<String> {
        vec!["I".to_string()]
    }

    fn population(&self) -> Vec<f64> {
        vec![self.infected]
    }

    fn step(&mut self) {
        self.infected *= self.multiplier;
        self.generation += 1;
    }

    fn reset(&mut self) {
        self.infected = 1.0;
        self.generation = 0;
    }

    fn current_step(&self) -> u32 {
        self.generation
    }
}

/// Side-by-side growth under R₀ (no intervention) and Rₑ (with coverage).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpreadComparison {
    pub baseline: GenerationSeries,
    pub mitigated: GenerationSeries,
    /// The Rₑ driving the mitigated series, with its flooring flag.
    pub effective_r: EffectiveR,
    pub cumulative_baseline: f64,
    pub cumulative_mitigated: f64,
}

/// Compare unmitigated spread against spread under vaccination coverage.
pub fn compare_scenarios(
    r0: f64,
    coverage: f64,
    num_generations: u32,
) -> Result<SpreadComparison, ParameterError> {
    let effective_r = effective_reproduction_number(r0, coverage)?;
    let baseline = simulate_generations(r0, num_generations)?;
    let mitigated = simulate_generations(effective_r.value, num_generations)?;
    Ok(SpreadComparison {
        cumulative_baseline: cumulative_infected(&baseline),
        cumulative_mitigated: cumulative_infected(&mitigated),
        baseline,
        mitigated,
        effective_r,
    })
}
