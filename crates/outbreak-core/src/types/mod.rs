pub mod parameters;

pub use parameters::{EpidemicParameters, Intervention};
