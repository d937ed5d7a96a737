//! Stochastic branching transmission-tree generation.
//!
//! A Galton–Watson-style branching process expanded breadth first from a
//! single index case. Each expanded node draws a Bernoulli superspreader
//! trial that amplifies its offspring count; each created node draws an
//! independent Bernoulli vaccination trial, and vaccinated nodes are leaves.
//! A global node budget is checked before every node creation so generation
//! is guaranteed to terminate even for supercritical Rₑ, without ever
//! allocating past the budget.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};
use tracing::debug;

use outbreak_core::{
    ensure_non_negative, ensure_positive, ensure_unit_fraction, ParameterError,
};

use crate::model::{NodeId, TransmissionNode, TransmissionTree};

/// Default amplification of a superspreader's offspring count.
///
/// A fixed modeling constant with no stated epidemiological justification in
/// the source material; override it with
/// [`TreeConfig::with_superspreader_multiplier`] if needed.
pub const DEFAULT_SUPERSPREADER_MULTIPLIER: f64 = 3.0;

/// Parameters for [`generate`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Effective reproduction number driving the branching.
    pub r_effective: f64,
    /// Expansion stops after this many transmission generations.
    pub max_generations: u32,
    /// Per-node probability of being a superspreader.
    pub superspreader_probability: f64,
    /// Per-node probability of being vaccinated (and therefore a leaf).
    pub vaccination_probability: f64,
    /// Hard cap on total node count; reaching it truncates the tree.
    pub max_nodes: usize,
    /// Offspring multiplier applied to superspreaders.
    pub superspreader_multiplier: f64,
}

impl TreeConfig {
    pub fn new(
        r_effective: f64,
        max_generations: u32,
        superspreader_probability: f64,
        vaccination_probability: f64,
        max_nodes: usize,
    ) -> Self {
        Self {
            r_effective,
            max_generations,
            superspreader_probability,
            vaccination_probability,
            max_nodes,
            superspreader_multiplier: DEFAULT_SUPERSPREADER_MULTIPLIER,
        }
    }

    pub fn with_superspreader_multiplier(mut self, multiplier: f64) -> Self {
        self.superspreader_multiplier = multiplier;
        self
    }

    pub fn validate(&self) -> Result<(), ParameterError> {
        ensure_non_negative("r_effective", self.r_effective)?;
        ensure_unit_fraction("superspreader_probability", self.superspreader_probability)?;
        ensure_unit_fraction("vaccination_probability", self.vaccination_probability)?;
        ensure_positive("superspreader_multiplier", self.superspreader_multiplier)?;
        if self.max_nodes == 0 {
            return Err(ParameterError::ZeroNodeBudget {
                max_nodes: self.max_nodes,
            });
        }
        Ok(())
    }
}

/// Generate a transmission tree, drawing randomness from `rng`.
///
/// The root is the unvaccinated index case at generation 0. Expansion is
/// breadth first; an expanded node produces
/// `max(1, round(Rₑ × multiplier_if_superspreader))` offspring. Exhausting
/// the node budget returns the tree as-is with
/// [`budget_exhausted`](TransmissionTree::budget_exhausted) set — callers
/// must expect trees smaller than `max_generations` would otherwise produce.
pub fn generate<R: Rng>(
    config: &TreeConfig,
    rng: &mut R,
) -> Result<TransmissionTree, ParameterError> {
    config.validate()?;

    let mut nodes = vec![TransmissionNode {
        id: 0,
        generation: 0,
        parent: None,
        vaccinated: false,
        superspreader: false,
    }];
    let mut frontier: Vec<NodeId> = vec![0];
    let mut budget_exhausted = false;

    'expansion: for _ in 0..config.max_generations {
        let mut next_frontier = Vec::new();
        for &parent_id in &frontier {
            let superspreader = rng.gen_bool(config.superspreader_probability);
            nodes[parent_id as usize].superspreader = superspreader;

            let multiplier = if superspreader {
                config.superspreader_multiplier
            } else {
                1.0
            };
            let offspring = (config.r_effective * multiplier).round().max(1.0) as usize;
            let child_generation = nodes[parent_id as usize].generation + 1;

            for _ in 0..offspring {
                if nodes.len() >= config.max_nodes {
                    budget_exhausted = true;
                    debug!(
                        nodes = nodes.len(),
                        max_nodes = config.max_nodes,
                        "node budget reached, stopping expansion"
                    );
                    break 'expansion;
                }
                let id = nodes.len() as NodeId;
                let vaccinated = rng.gen_bool(config.vaccination_probability);
                nodes.push(TransmissionNode {
                    id,
                    generation: child_generation,
                    parent: Some(parent_id),
                    vaccinated,
                    superspreader: false,
                });
                if !vaccinated {
                    next_frontier.push(id);
                }
            }
        }
        // Vaccination can prune the whole frontier before max_generations.
        if next_frontier.is_empty() {
            break;
        }
        frontier = next_frontier;
    }

    Ok(TransmissionTree::from_parts(nodes, budget_exhausted))
}

/// As [`generate`], seeding a PCG-64 generator for reproducible output.
pub fn generate_seeded(config: &TreeConfig, seed: u64) -> Result<TransmissionTree, ParameterError> {
    let mut rng = Pcg64::seed_from_u64(seed);
    generate(config, &mut rng)
}
