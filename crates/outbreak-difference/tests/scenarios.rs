//! End-to-end scenarios tying reproduction arithmetic to the growth and SEIR
//! engines, using the disease presets the dashboard ships.

use outbreak_core::{
    effective_reproduction_number, find_preset, herd_immunity_threshold,
};
use outbreak_difference::{simulate_generations, simulate_seir, SeirParameters};

#[test]
fn measles_at_high_coverage_is_controlled() {
    let measles = find_preset("Measles (MMR)").unwrap();
    assert_eq!(measles.r0, 15.0);

    // 94% coverage pushes Re just under the critical threshold.
    let re = effective_reproduction_number(measles.r0, 0.94).unwrap();
    assert!((re.value - 0.9).abs() < 1e-12);
    assert!(!re.floored);
    assert!(re.value < 1.0);

    // Six generations at multiplier 0.9: strictly decreasing toward zero.
    let series = simulate_generations(re.value, 6).unwrap();
    for pair in series.windows(2) {
        assert!(pair[1].infected < pair[0].infected);
    }
    assert!(series.last().unwrap().infected < 1.0);
}

#[test]
fn hib_without_coverage_keeps_spreading() {
    let hib = find_preset("Hib").unwrap();
    assert_eq!(hib.r0, 1.3);

    let hit = herd_immunity_threshold(hib.r0).unwrap();
    assert!((hit - 0.2307692307692308).abs() < 1e-12);

    // No coverage leaves Re = R0 >= 1: insufficient immunity.
    let re = effective_reproduction_number(hib.r0, 0.0).unwrap();
    assert_eq!(re.value, hib.r0);
    assert!(re.value >= 1.0);

    let series = simulate_generations(re.value, 6).unwrap();
    for pair in series.windows(2) {
        assert!(pair[1].infected > pair[0].infected);
    }
}

#[test]
fn seir_driven_by_derived_effective_r() {
    // A derived sub-critical Re flows straight into the integrator and the
    // outbreak burns out.
    let re = effective_reproduction_number(6.0, 0.95).unwrap();
    assert!(re.value < 1.0);

    let params = SeirParameters {
        population: 50_000.0,
        initial_exposed: 100.0,
        initial_infectious: 50.0,
        r_effective: re.value,
        incubation_period: 4.0,
        infectious_period: 6.0,
    };
    let series = simulate_seir(&params, 400).unwrap();
    assert!(*series.infectious.last().unwrap() < 1.0);
    for day in 0..series.len() {
        assert!((series.total(day) - 50_000.0).abs() < 1e-5);
    }
}
