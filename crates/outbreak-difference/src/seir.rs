//! Discrete-time SEIR integration.
//!
//! A forward-Euler (first-order) discretization of the continuous SEIR ODE
//! system with a fixed unit time step of one day. Per step:
//!
//! ```text
//! new_exposed    = β · S · I / N      β = Rₑ / infectious_period
//! new_infectious = σ · E              σ = 1 / incubation_period
//! new_recovered  = γ · I              γ = 1 / infectious_period
//! ```
//!
//! Each flow moves population from one compartment to the next with no
//! external source or sink, so S + E + I + R stays equal to N up to
//! floating-point error. At high β or coarse discretization S, E, or I can
//! dip slightly negative; that is an accepted property of the approximation
//! and is deliberately not clamped away here (clamping for display is the
//! caller's choice).

use serde::{Deserialize, Serialize};

use outbreak_core::{
    ensure_non_negative, ensure_positive, CompartmentModel, ParameterError,
};

/// Inputs to the SEIR integrator.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeirParameters {
    /// Total population N.
    pub population: f64,
    /// Exposed individuals at day 0.
    pub initial_exposed: f64,
    /// Infectious individuals at day 0.
    pub initial_infectious: f64,
    /// Effective reproduction number driving transmission.
    pub r_effective: f64,
    /// Mean incubation period in days.
    pub incubation_period: f64,
    /// Mean infectious period in days.
    pub infectious_period: f64,
}

impl SeirParameters {
    /// Fail fast on inputs that would divide by zero or seed an impossible
    /// state.
    pub fn validate(&self) -> Result<(), ParameterError> {
        ensure_positive("population", self.population)?;
        ensure_non_negative("initial_exposed", self.initial_exposed)?;
        ensure_non_negative("initial_infectious", self.initial_infectious)?;
        ensure_non_negative("r_effective", self.r_effective)?;
        ensure_positive("incubation_period", self.incubation_period)?;
        ensure_positive("infectious_period", self.infectious_period)?;

        let initial = self.initial_exposed + self.initial_infectious;
        if initial > self.population {
            return Err(ParameterError::InitialExceedsPopulation {
                initial,
                population: self.population,
            });
        }
        Ok(())
    }
}

/// Four parallel compartment series indexed by day, day 0 included.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SeirSeries {
    pub susceptible: Vec<f64>,
    pub exposed: Vec<f64>,
    pub infectious: Vec<f64>,
    pub recovered: Vec<f64>,
    /// Total population, for conservation checks.
    pub population: f64,
}

impl SeirSeries {
    /// Number of recorded days, including day 0.
    pub fn len(&self) -> usize {
        self.susceptible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.susceptible.is_empty()
    }

    /// Sum of all four compartments at `day`.
    pub fn total(&self, day: usize) -> f64 {
        self.susceptible[day] + self.exposed[day] + self.infectious[day] + self.recovered[day]
    }
}

/// The SEIR stepping engine.
#[derive(Clone, Debug)]
pub struct SeirSimulation {
    beta: f64,
    sigma: f64,
    gamma: f64,
    population: f64,
    susceptible: f64,
    exposed: f64,
    infectious: f64,
    recovered: f64,
    initial: [f64; 4],
    day: u32,
}

impl SeirSimulation {
    pub fn new(params: &SeirParameters) -> Result<Self, ParameterError> {
        params.validate()?;

        let susceptible = params.population - params.initial_exposed - params.initial_infectious;
        Ok(Self {
            beta: params.r_effective / params.infectious_period,
            sigma: 1.0 / params.incubation_period,
            gamma: 1.0 / params.infectious_period,
            population: params.population,
            susceptible,
            exposed: params.initial_exposed,
            infectious: params.initial_infectious,
            recovered: 0.0,
            initial: [susceptible, params.initial_exposed, params.initial_infectious, 0.0],
            day: 0,
        })
    }

    /// Run `num_days` steps and collect the full compartment history.
    pub fn run_days(&mut self, num_days: u32) -> SeirSeries {
        let capacity = num_days as usize + 1;
        let mut series = SeirSeries {
            susceptible: Vec::with_capacity(capacity),
            exposed: Vec::with_capacity(capacity),
            infectious: Vec::with_capacity(capacity),
            recovered: Vec::with_capacity(capacity),
            population: self.population,
        };
        self.record(&mut series);
        for _ in 0..num_days {
            self.step();
            self.record(&mut series);
        }
        series
    }

    fn record(&self, series: &mut SeirSeries) {
        series.susceptible.push(self.susceptible);
        series.exposed.push(self.exposed);
        series.infectious.push(self.infectious);
        series.recovered.push(self.recovered);
    }
}

impl CompartmentModel for SeirSimulation {
    fn compartments(&self) -> Vec<String> {
        ["S", "E", "I", "R"].iter().map(|s| s.to_string()).collect()
    }

    fn population(&self) -> Vec<f64> {
        vec![self.susceptible, self.exposed, self.infectious, self.recovered]
    }

    fn step(&mut self) {
        let new_exposed = self.beta * self.susceptible * self.infectious / self.population;
        let new_infectious = self.sigma * self.exposed;
        let new_recovered = self.gamma * self.infectious;

        self.susceptible -= new_exposed;
        self.exposed += new_exposed - new_infectious;
        self.infectious += new_infectious - new_recovered;
        self.recovered += new_recovered;
        self.day += 1;
    }

    fn reset(&mut self) {
        let [s, e, i, r] = self.initial;
        self.susceptible = s;
        self.exposed = e;
        self.infectious = i;
        self.recovered = r;
        self.day = 0;
    }

    fn current_step(&self) -> u32 {
        self.day
    }
}

/// One-shot convenience over [`SeirSimulation`].
pub fn simulate_seir(
    params: &SeirParameters,
    num_days: u32,
) -> Result<SeirSeries, ParameterError> {
    Ok(SeirSimulation::new(params)?.run_days(num_days))
}
