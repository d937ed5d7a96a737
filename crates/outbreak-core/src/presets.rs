//! Baseline R₀ presets for the vaccine-preventable diseases covered by the
//! teaching material.

use serde::Serialize;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// A named disease with its textbook basic reproduction number.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DiseasePreset {
    pub name: &'static str,
    pub r0: f64,
}

/// Built-in R₀ presets, keyed by the display name used in the front end.
pub const DISEASE_PRESETS: &[DiseasePreset] = &[
    DiseasePreset { name: "Measles (MMR)", r0: 15.0 },
    DiseasePreset { name: "Pertussis (DTaP)", r0: 12.0 },
    DiseasePreset { name: "Polio (IPV)", r0: 6.0 },
    DiseasePreset { name: "Varicella (Chickenpox)", r0: 10.0 },
    DiseasePreset { name: "Hepatitis B (HepB)", r0: 3.0 },
    DiseasePreset { name: "HPV", r0: 3.0 },
    DiseasePreset { name: "Hib", r0: 1.3 },
    DiseasePreset { name: "Pneumococcal (PCV)", r0: 2.0 },
];

/// Look up a preset by its display name.
pub fn find_preset(name: &str) -> Option<&'static DiseasePreset> {
    DISEASE_PRESETS.iter().find(|p| p.name == name)
}
