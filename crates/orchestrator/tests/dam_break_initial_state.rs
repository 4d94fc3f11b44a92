//! Dam-break initial state: placement bounds, dry region, placeholder
//! state, reproducibility and degenerate domains.

use orchestrator::domain::{effective_radius, in_dry_region};
use orchestrator::{DamBreakConfig, Error, Simulation};

/// number=1000, mass=1, avg_density=1, dimensions=(10, 20)
fn reference_config(seed: Option<u64>) -> DamBreakConfig {
    DamBreakConfig {
        name: "reference".to_string(),
        number: 1000,
        mass: 1.0,
        avg_density: 1.0,
        avg_velocity: 0.0,
        std_velocity: 1.0,
        dimensions: [10.0, 20.0],
        seed,
        output: None,
    }
}

#[test]
fn reference_scenario_respects_all_constraints() -> orchestrator::Result<()> {
    let sim = Simulation::dam_break(&reference_config(Some(2024)))?;
    let r = effective_radius(1.0, 1.0);
    assert!((sim.effective_radius() - r).abs() < 1e-15);

    assert!(sim.len() <= 1000, "count {} exceeds request", sim.len());
    assert_eq!(sim.len() + sim.rejected(), 1000);

    for p in sim.particles() {
        let [x, y] = p.position;
        assert!(!(x > 5.0 && y > 10.0), "particle at ({x}, {y}) is in the dry region");
        assert!((r..=10.0 - r).contains(&x), "x={x} outside [{r}, {}]", 10.0 - r);
        assert!((r..=20.0 - r).contains(&y), "y={y} outside [{r}, {}]", 20.0 - r);
        assert_eq!(p.density, 0.0);
        assert_eq!(p.pressure, 0.0);
        assert_eq!(p.mass, 1.0);
    }
    Ok(())
}

#[test]
fn roughly_a_quarter_of_slots_are_rejected() -> orchestrator::Result<()> {
    let sim = Simulation::dam_break(&reference_config(Some(99)))?;
    // The dry quadrant covers close to a quarter of the placement area.
    assert!(
        (150..=350).contains(&sim.rejected()),
        "unexpected rejection count {}",
        sim.rejected()
    );
    Ok(())
}

#[test]
fn same_seed_reproduces_state_bit_for_bit() -> orchestrator::Result<()> {
    let a = Simulation::dam_break(&reference_config(Some(7)))?;
    let b = Simulation::dam_break(&reference_config(Some(7)))?;
    assert_eq!(a.len(), b.len());
    assert_eq!(a.particles(), b.particles());
    Ok(())
}

#[test]
fn different_seeds_differ() -> orchestrator::Result<()> {
    let a = Simulation::dam_break(&reference_config(Some(1)))?;
    let b = Simulation::dam_break(&reference_config(Some(2)))?;
    assert_ne!(a.particles(), b.particles());
    Ok(())
}

#[test]
fn unseeded_run_still_respects_constraints() -> orchestrator::Result<()> {
    let sim = Simulation::dam_break(&reference_config(None))?;
    assert!(sim.len() <= 1000);
    assert!(sim
        .positions()
        .all(|p| !in_dry_region(p, sim.width(), sim.height())));
    Ok(())
}

#[test]
fn oversized_radius_fails_explicitly() {
    // r = (3 / (4 pi * 1e-3))^(1/3) ~ 6.2 > min(10, 20) / 2
    let config = DamBreakConfig {
        avg_density: 1.0e-3,
        ..reference_config(Some(3))
    };
    match Simulation::dam_break(&config) {
        Err(Error::Domain(msg)) => assert!(msg.contains("effective radius"), "{msg}"),
        other => panic!("expected a domain error, got {other:?}"),
    }
}

#[test]
fn radius_too_large_for_one_axis_only() {
    // r ~ 0.62: fits the 20-unit height but not a 1-unit width
    let config = DamBreakConfig {
        dimensions: [1.0, 20.0],
        ..reference_config(Some(3))
    };
    assert!(matches!(Simulation::dam_break(&config), Err(Error::Domain(_))));
}

#[test]
fn velocities_follow_configured_distribution() -> orchestrator::Result<()> {
    let config = DamBreakConfig {
        number: 4000,
        avg_velocity: 1.5,
        std_velocity: 0.5,
        ..reference_config(Some(31))
    };
    let sim = Simulation::dam_break(&config)?;
    let components: Vec<f64> = sim.velocities().flat_map(|v| v.iter().copied()).collect();
    let n = components.len() as f64;
    let mean = components.iter().sum::<f64>() / n;
    let stdev = (components.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n).sqrt();
    assert!((mean - 1.5).abs() < 0.05, "mean {mean}");
    assert!((stdev - 0.5).abs() < 0.05, "stdev {stdev}");
    assert!(components.iter().all(|v| (-0.5 - 1e-9..=3.5 + 1e-9).contains(v)));
    Ok(())
}
