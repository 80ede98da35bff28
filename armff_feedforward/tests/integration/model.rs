//! Construction and continuous-evaluator properties.

use armff_common::gains::ArmFeedforwardGains;
use armff_feedforward::{ArmFeedforward, FeedforwardError};

#[test]
fn construction_accepts_non_negative_gains() {
    for (ks, kg, kv, ka) in [
        (0.0, 0.0, 0.0, 0.0),
        (-1.0, -2.0, 3.0, 4.0),
        (0.5, 1.5, 0.0, 0.2),
        (0.5, 1.5, 2.0, 0.0),
    ] {
        let ff = ArmFeedforward::new(ks, kg, kv, ka).unwrap();
        assert_eq!(ff.gains(), ArmFeedforwardGains::new(ks, kg, kv, ka));
    }
}

#[test]
fn construction_rejects_negative_gains() {
    let err = ArmFeedforward::new(0.1, 0.2, -0.3, 0.4).unwrap_err();
    assert_eq!(
        err,
        FeedforwardError::InvalidArgument {
            parameter: "kv",
            value: -0.3,
            requirement: "a non-negative number",
        }
    );

    let err = ArmFeedforward::new(0.1, 0.2, 0.3, -0.4).unwrap_err();
    assert_eq!(err.parameter(), "ka");
    assert_eq!(
        err.to_string(),
        "invalid argument: ka must be a non-negative number, got -0.4"
    );
}

#[test]
fn velocity_only_form_assumes_zero_acceleration() {
    let ff = ArmFeedforward::new(0.4, 1.2, 2.5, 0.3).unwrap();
    for (position, velocity) in [(0.0, -3.0), (1.0, 0.0), (-0.5, 2.2)] {
        assert_eq!(
            ff.calculate(position, velocity),
            ff.calculate_with_acceleration(position, velocity, 0.0)
        );
    }
}

#[test]
fn static_friction_follows_velocity_sign() {
    let ff = ArmFeedforward::new(1.0, 0.0, 0.0, 0.0).unwrap();
    assert_eq!(ff.calculate(0.3, 5.0), 1.0);
    assert_eq!(ff.calculate(0.3, -5.0), -1.0);
    assert_eq!(ff.calculate(0.3, 0.0), 0.0);
}

#[test]
fn shared_across_threads() {
    let ff = ArmFeedforward::new(0.2, 0.9, 1.8, 0.05).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let v0 = i as f64;
                ff.calculate_discrete(0.1 * i as f64, v0, v0 + 0.5, 0.02)
                    .unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let v0 = i as f64;
        let expected = ff
            .calculate_discrete(0.1 * i as f64, v0, v0 + 0.5, 0.02)
            .unwrap();
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn serde_validates_on_deserialize() {
    let ff: ArmFeedforward =
        serde_json::from_str(r#"{"ks":0.2,"kg":0.9,"kv":1.8,"ka":0.05}"#).unwrap();
    assert_eq!(ff.kv(), 1.8);

    let json = serde_json::to_string(&ff).unwrap();
    assert_eq!(json, r#"{"ks":0.2,"kg":0.9,"kv":1.8,"ka":0.05}"#);

    let err = serde_json::from_str::<ArmFeedforward>(r#"{"ks":0.2,"kg":0.9,"kv":-1.0}"#)
        .unwrap_err();
    assert!(err.to_string().contains("kv must be a non-negative number"));
}
