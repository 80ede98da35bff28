//! Achievable-bound round trips.
//!
//! Feeding a bound back through the continuous model must reproduce the
//! voltage budget it was computed from.

use armff_feedforward::ArmFeedforward;

fn arms() -> Vec<ArmFeedforward> {
    vec![
        ArmFeedforward::new(0.2, 0.9, 1.8, 0.05).unwrap(),
        ArmFeedforward::new(0.5, -1.5, 2.0, 0.2).unwrap(),
        ArmFeedforward::new(-0.1, 3.0, 0.7, 1.1).unwrap(),
    ]
}

const ANGLES: [f64; 5] = [-1.2, 0.0, 0.4, 1.3, 2.9];

#[test]
fn max_velocity_round_trip() {
    for ff in arms() {
        for angle in ANGLES {
            for accel in [-2.0, 0.0, 1.5] {
                let v = ff.max_achievable_velocity(12.0, angle, accel);
                assert!(v > 0.0, "{ff:?} angle={angle} accel={accel} v={v}");
                let out = ff.calculate_with_acceleration(angle, v, accel);
                assert!((out - 12.0).abs() < 1e-9, "{out}");
            }
        }
    }
}

#[test]
fn min_velocity_round_trip() {
    for ff in arms() {
        for angle in ANGLES {
            for accel in [-2.0, 0.0, 1.5] {
                let v = ff.min_achievable_velocity(12.0, angle, accel);
                assert!(v < 0.0);
                let out = ff.calculate_with_acceleration(angle, v, accel);
                assert!((out + 12.0).abs() < 1e-9, "{out}");
            }
        }
    }
}

#[test]
fn acceleration_round_trip() {
    for ff in arms() {
        for angle in ANGLES {
            for velocity in [-3.0, 0.0, 2.5] {
                let a = ff.max_achievable_acceleration(12.0, angle, velocity);
                let out = ff.calculate_with_acceleration(angle, velocity, a);
                assert!((out - 12.0).abs() < 1e-9, "{out}");

                let a = ff.min_achievable_acceleration(12.0, angle, velocity);
                let out = ff.calculate_with_acceleration(angle, velocity, a);
                assert!((out + 12.0).abs() < 1e-9, "{out}");
            }
        }
    }
}

#[test]
fn min_acceleration_is_negated_max() {
    for ff in arms() {
        for angle in ANGLES {
            for velocity in [-3.0, 0.0, 2.5] {
                for voltage in [6.0, 12.0] {
                    assert_eq!(
                        ff.min_achievable_acceleration(voltage, angle, velocity),
                        ff.max_achievable_acceleration(-voltage, angle, velocity)
                    );
                }
            }
        }
    }
}

#[test]
fn min_never_exceeds_max() {
    for ff in arms() {
        for angle in ANGLES {
            assert!(
                ff.min_achievable_velocity(12.0, angle, 0.0)
                    < ff.max_achievable_velocity(12.0, angle, 0.0)
            );
            assert!(
                ff.min_achievable_acceleration(12.0, angle, 1.0)
                    < ff.max_achievable_acceleration(12.0, angle, 1.0)
            );
        }
    }
}
