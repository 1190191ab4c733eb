use super::*;

#[test]
fn defaults_validate() {
    assert!(GeneratorConfig::default().validate().is_ok());
}

#[test]
fn growth_rejects_out_of_range_values() {
    let base = GrowthConfig::default();
    assert!(
        GrowthConfig {
            initial_lines: 721,
            ..base
        }
        .validate()
        .is_err()
    );
    assert!(GrowthConfig { levels: 0, ..base }.validate().is_err());
    assert!(GrowthConfig { levels: 11, ..base }.validate().is_err());
    assert!(
        GrowthConfig {
            children_per_node: 9,
            ..base
        }
        .validate()
        .is_err()
    );
    assert!(
        GrowthConfig {
            base_radius: 0.0,
            ..base
        }
        .validate()
        .is_err()
    );
    assert!(
        GrowthConfig {
            angle_jitter: -1.0,
            ..base
        }
        .validate()
        .is_err()
    );
    assert!(
        GrowthConfig {
            branch_spread: 361.0,
            ..base
        }
        .validate()
        .is_err()
    );
}

#[test]
fn zero_initial_lines_is_a_valid_no_op() {
    let cfg = GrowthConfig {
        initial_lines: 0,
        ..GrowthConfig::default()
    };
    assert!(cfg.validate().is_ok());
    // The UI boundary still folds it back into the dialog range.
    assert_eq!(cfg.clamped().initial_lines, 1);
}

#[test]
fn timing_rejects_non_positive_durations() {
    let base = TimingConfig::default();
    assert!(
        TimingConfig {
            node_duration: 0.0,
            ..base
        }
        .validate()
        .is_err()
    );
    assert!(
        TimingConfig {
            line_duration: -0.1,
            ..base
        }
        .validate()
        .is_err()
    );
    assert!(
        TimingConfig {
            random_offset: -0.5,
            ..base
        }
        .validate()
        .is_err()
    );
}

#[test]
fn clamped_folds_everything_into_range() {
    let cfg = GeneratorConfig {
        growth: GrowthConfig {
            initial_lines: 10_000,
            levels: 99,
            children_per_node: 0,
            base_radius: -3.0,
            radius_step: -1.0,
            radius_jitter: -1.0,
            angle_jitter: -1.0,
            branch_spread: 720.0,
            seed: -7,
        },
        timing: TimingConfig {
            node_duration: 0.0,
            line_duration: -2.0,
            child_stagger: -0.1,
            random_offset: -0.1,
            simultaneous_root: true,
            smooth_flow: false,
        },
    }
    .clamped();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.growth.initial_lines, 720);
    assert_eq!(cfg.growth.levels, 10);
    assert_eq!(cfg.growth.children_per_node, 1);
    assert!(cfg.growth.base_radius > 0.0);
    assert_eq!(cfg.growth.branch_spread, 360.0);
    assert!(cfg.timing.node_duration > 0.0);
    assert!(cfg.timing.line_duration > 0.0);
    assert_eq!(cfg.timing.child_stagger, 0.0);
    // Flags and seed pass through untouched.
    assert!(cfg.timing.simultaneous_root);
    assert!(!cfg.timing.smooth_flow);
    assert_eq!(cfg.growth.seed, -7);
}

#[test]
fn json_roundtrip() {
    let cfg = GeneratorConfig::default();
    let s = serde_json::to_string_pretty(&cfg).unwrap();
    let de: GeneratorConfig = serde_json::from_str(&s).unwrap();
    assert_eq!(de.growth.initial_lines, cfg.growth.initial_lines);
    assert_eq!(de.timing.node_duration, cfg.timing.node_duration);
}
