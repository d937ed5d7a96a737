//! # outbreak-core
//!
//! Shared foundation for the outbreak simulation engine: parameter types and
//! validation, the error taxonomy, reproduction-number arithmetic
//! (herd-immunity thresholds, effective R under interventions), disease R₀
//! presets, and the [`CompartmentModel`] trait implemented by the
//! discrete-time engines.
//!
//! Everything here is pure and synchronous: plain functions over plain,
//! serializable data, with no hidden process-wide state. The presentation
//! layer that renders results lives outside this workspace.

pub mod engine;
pub mod error;
pub mod presets;
pub mod reproduction;
pub mod types;

pub use engine::CompartmentModel;
pub use error::{
    ensure_finite, ensure_non_negative, ensure_positive, ensure_unit_fraction, ParameterError,
};
pub use presets::{find_preset, DiseasePreset, DISEASE_PRESETS};
pub use reproduction::{
    combined_effective_reproduction, combined_effective_reproduction_with_floor,
    effective_reproduction_number, herd_immunity_threshold, EffectiveR, DEFAULT_RE_FLOOR,
};
pub use types::{EpidemicParameters, Intervention};
