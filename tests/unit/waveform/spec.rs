use super::*;

#[test]
fn family_names_round_trip_through_from_str() {
    for f in WaveformFamily::ALL {
        assert_eq!(f.as_str().parse::<WaveformFamily>().unwrap(), f);
        assert_eq!(f.to_string(), f.as_str());
    }
    assert_eq!(
        "Curved-Default".parse::<WaveformFamily>().unwrap(),
        WaveformFamily::Curved
    );
    assert_eq!(" NEON ".parse::<WaveformFamily>().unwrap(), WaveformFamily::Neon);
}

#[test]
fn unknown_family_is_invalid_parameter() {
    let err = "zigzag".parse::<WaveformFamily>().unwrap_err();
    assert!(err.is_invalid_parameter());
    assert!(err.to_string().contains("zigzag"));
}

#[test]
fn family_deserializes_aliases() {
    let f: WaveformFamily = serde_json::from_str("\"curved-default\"").unwrap();
    assert_eq!(f, WaveformFamily::Curved);
    assert!(serde_json::from_str::<WaveformFamily>("\"zigzag\"").is_err());
}

#[test]
fn default_phases_close_the_cycle() {
    assert!(default_phases(0).is_empty());
    assert_eq!(default_phases(1), vec![0.0]);
    let p = default_phases(5);
    assert_eq!(p.len(), 5);
    assert_eq!(p[0], 0.0);
    assert!((p[4] - TAU).abs() < 1e-12);
    assert!(p.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn validate_rejects_bad_geometry() {
    let ok = WaveformSpec::new(WaveformFamily::Sine, 800.0, 200.0);
    assert!(ok.validate().is_ok());

    let cases = [
        WaveformSpec::new(WaveformFamily::Sine, 0.0, 200.0),
        WaveformSpec::new(WaveformFamily::Sine, 800.0, -1.0),
        ok.clone().with_frequency(0.0),
        ok.clone().with_frequency(f64::NAN),
        ok.clone().with_phases(Vec::new()),
        ok.clone().with_phases(vec![0.0, f64::INFINITY]),
        ok.clone().with_layers(0),
        ok.clone().with_duration(0.0),
        ok.clone().with_amplitude(f64::NAN),
    ];
    for spec in cases {
        let err = spec.validate().unwrap_err();
        assert!(err.is_invalid_parameter(), "{spec:?}");
    }
}

#[test]
fn duty_cycle_only_matters_for_pulse() {
    let sine = WaveformSpec::new(WaveformFamily::Sine, 800.0, 200.0).with_duty_cycle(2.0);
    assert!(sine.validate().is_ok());

    let pulse = WaveformSpec::new(WaveformFamily::Pulse, 800.0, 200.0);
    assert!(pulse.clone().with_duty_cycle(0.0).validate().is_err());
    assert!(pulse.clone().with_duty_cycle(1.0).validate().is_err());
    assert!(pulse.with_duty_cycle(0.5).validate().is_ok());
}

#[test]
fn amplitude_is_clamped_to_half_height() {
    let spec = WaveformSpec::new(WaveformFamily::Sine, 800.0, 200.0);
    assert_eq!(spec.clone().with_amplitude(40.0).effective_amplitude(), 40.0);
    assert_eq!(spec.clone().with_amplitude(500.0).effective_amplitude(), 100.0);
    assert_eq!(spec.with_amplitude(-30.0).effective_amplitude(), 30.0);
}

#[test]
fn negative_in_range_amplitude_is_not_clamped() {
    let spec = WaveformSpec::new(WaveformFamily::Sine, 400.0, 100.0);
    assert!(!spec.clone().with_amplitude(-10.0).amplitude_is_clamped());
    assert!(!spec.clone().with_amplitude(50.0).amplitude_is_clamped());
    assert!(spec.clone().with_amplitude(-51.0).amplitude_is_clamped());
    assert!(spec.with_amplitude(1_000.0).amplitude_is_clamped());
}

#[test]
fn seed_ignores_phases_but_tracks_shape() {
    let a = WaveformSpec::new(WaveformFamily::Glitch, 800.0, 200.0);
    let b = a.clone().with_phases(vec![0.0, 1.0]);
    let c = a.clone().with_amplitude(12.0);
    assert_eq!(a.seed(), b.seed());
    assert_ne!(a.seed(), c.seed());
}

#[test]
fn background_layers_are_flatter_and_shifted() {
    let spec = WaveformSpec::new(WaveformFamily::Sine, 800.0, 200.0).with_amplitude(40.0);
    assert_eq!(spec.background_layer(0), WaveformSpec { layers: 1, ..spec.clone() });

    let bg = spec.background_layer(1);
    assert_eq!(bg.amplitude, 30.0);
    assert!(bg.duration_secs > spec.duration_secs);
    assert_eq!(bg.phase_samples.len(), spec.phase_samples.len());
    assert!((bg.phase_samples[0] - std::f64::consts::FRAC_PI_3).abs() < 1e-12);

    let deep = spec.background_layer(10);
    assert_eq!(deep.amplitude, 10.0);

    assert_eq!(WaveformSpec::layer_opacity(0), 1.0);
    assert!(WaveformSpec::layer_opacity(2) < WaveformSpec::layer_opacity(1));
}

#[test]
fn spec_json_fills_defaults() {
    let json = r#"{
        "family": "pulse",
        "width": 600,
        "height": 120,
        "amplitude": 30,
        "frequency": 4,
        "phase_samples": [0.0, 3.14]
    }"#;
    let spec: WaveformSpec = serde_json::from_str(json).unwrap();
    assert_eq!(spec.family, WaveformFamily::Pulse);
    assert_eq!(spec.duty_cycle, 0.3);
    assert_eq!(spec.layers, 3);
    assert_eq!(spec.ease, Ease::InOutSine);
}
