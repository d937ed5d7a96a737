//! # outbreak-tree
//!
//! Stochastic branching transmission trees with superspreader and
//! vaccination-pruning dynamics, plus pure hierarchical and radial layout for
//! the rendering layer. Randomness is injected (any [`rand::Rng`]) or seeded
//! through [`generate_seeded`] for reproducible runs.

pub mod generator;
pub mod layout;
pub mod model;

pub use generator::{
    generate, generate_seeded, TreeConfig, DEFAULT_SUPERSPREADER_MULTIPLIER,
};
pub use layout::{layout_hierarchical, layout_radial, Position};
pub use model::{NodeId, TransmissionNode, TransmissionTree};
