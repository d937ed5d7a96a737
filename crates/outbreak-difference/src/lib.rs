//! # outbreak-difference
//!
//! Discrete-time outbreak engines built on difference equations: the
//! exponential generation-growth recurrence and the forward-Euler SEIR
//! integrator. Both are deterministic, run to completion in a single call,
//! and return fully materialized, serializable series.

pub mod growth;
pub mod seir;

pub use growth::{
    compare_scenarios, cumulative_infected, simulate_generations, GenerationGrowth,
    GenerationPoint, GenerationSeries, SpreadComparison,
};
pub use seir::{simulate_seir, SeirParameters, SeirSeries, SeirSimulation};
