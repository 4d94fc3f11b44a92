//! Reference test integration tests
//!
//! These tests run the reference suite via cargo test.

use crate::{
    DryRegionCheck, ExpectedResult, ParticleCountCheck, PlaceholderStateCheck, ReferenceTest,
    VelocityMomentsCheck, WallMarginCheck,
};
use orchestrator::{DamBreakConfig, Simulation};

/// Resolve a path relative to the workspace root (one level up from this crate)
fn project_path(relative: &str) -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let project_root = std::path::Path::new(manifest_dir)
        .parent()
        .expect("Could not find project root");
    project_root.join(relative).to_string_lossy().to_string()
}

fn all_checks(tolerance: f64) -> ExpectedResult {
    ExpectedResult {
        wall_margin: Some(WallMarginCheck),
        dry_region: Some(DryRegionCheck),
        particle_count: Some(ParticleCountCheck { min_fraction: 0.6 }),
        placeholder_state: Some(PlaceholderStateCheck),
        velocity_moments: Some(VelocityMomentsCheck { tolerance }),
    }
}

#[test]
fn test_dam_break_reference() {
    let test = ReferenceTest {
        name: "Dam Break".to_string(),
        config_path: project_path("configs/dam-break.json"),
        expected: all_checks(0.15),
    };
    let result = test.run().expect("Dam break setup should succeed");
    result.print_summary();
    assert!(result.passed, "Dam break reference test failed");
    assert_eq!(result.checks.len(), 5);
    assert!(result.particle_count <= 1000);
}

#[test]
fn test_dam_break_at_rest_reference() {
    let test = ReferenceTest {
        name: "Dam Break At Rest".to_string(),
        config_path: project_path("configs/dam-break-still.json"),
        expected: all_checks(0.0),
    };
    let result = test.run().expect("Dam break setup should succeed");
    assert!(result.passed, "Dam break at rest reference test failed");
}

#[test]
fn test_missing_config_is_an_error() {
    let test = ReferenceTest {
        name: "Missing".to_string(),
        config_path: project_path("configs/does-not-exist.json"),
        expected: ExpectedResult::default(),
    };
    assert!(test.run().is_err());
}

#[test]
fn test_count_check_flags_underfilled_state() {
    let config = DamBreakConfig {
        number: 400,
        seed: Some(5),
        ..DamBreakConfig::default()
    };
    let sim = Simulation::dam_break(&config).unwrap();
    let test = ReferenceTest {
        name: "Strict Count".to_string(),
        config_path: String::new(),
        expected: ExpectedResult {
            // A quarter of the slots land in the dry quadrant, so demanding
            // every slot must fail.
            particle_count: Some(ParticleCountCheck { min_fraction: 1.0 }),
            ..ExpectedResult::default()
        },
    };
    let result = test.evaluate(&config, &sim);
    assert!(!result.passed);
    assert_eq!(result.checks.len(), 1);
}

#[test]
fn test_velocity_check_flags_wrong_moments() {
    let config = DamBreakConfig {
        number: 400,
        seed: Some(6),
        ..DamBreakConfig::default()
    };
    let sim = Simulation::dam_break(&config).unwrap();
    let claimed = DamBreakConfig {
        avg_velocity: 3.0,
        ..config
    };
    let test = ReferenceTest {
        name: "Wrong Moments".to_string(),
        config_path: String::new(),
        expected: ExpectedResult {
            velocity_moments: Some(VelocityMomentsCheck { tolerance: 0.2 }),
            ..ExpectedResult::default()
        },
    };
    assert!(!test.evaluate(&claimed, &sim).passed);
}
