use super::*;
use crate::waveform::spec::default_phases;

fn spec(family: WaveformFamily) -> WaveformSpec {
    WaveformSpec::new(family, 900.0, 180.0)
        .with_amplitude(45.0)
        .with_frequency(3.0)
        .with_phases(default_phases(6))
}

#[test]
fn one_frame_per_phase_for_every_family() {
    for family in WaveformFamily::ALL {
        let frames = synthesize(&spec(family)).unwrap();
        assert_eq!(frames.len(), 6, "{family}");
        assert!(frames.iter().all(PathFrame::is_closed), "{family}");
    }
}

#[test]
fn frames_share_samples_and_structure() {
    for family in WaveformFamily::ALL {
        let frames = synthesize(&spec(family)).unwrap();
        let first = &frames[0];
        for f in &frames[1..] {
            assert_eq!(f.sample_count(), first.sample_count(), "{family}");
            assert!(f.is_interpolable_with(first), "{family}");
            if family != WaveformFamily::Glitch {
                assert!(f.xs().eq(first.xs()), "{family}");
            }
        }
    }
}

#[test]
fn synthesis_is_deterministic() {
    for family in WaveformFamily::ALL {
        let a = synthesize(&spec(family)).unwrap();
        let b = synthesize(&spec(family)).unwrap();
        let da: Vec<String> = a.iter().map(PathFrame::path_data).collect();
        let db: Vec<String> = b.iter().map(PathFrame::path_data).collect();
        assert_eq!(da, db, "{family}");
    }
}

#[test]
fn invalid_spec_yields_no_frames() {
    let bad = spec(WaveformFamily::Sine).with_frequency(-1.0);
    assert!(synthesize(&bad).unwrap_err().is_invalid_parameter());
    let bad = WaveformSpec::new(WaveformFamily::Square, 0.0, 100.0);
    assert!(synthesize(&bad).unwrap_err().is_invalid_parameter());
}

#[test]
fn oversized_amplitude_is_clamped() {
    let s = spec(WaveformFamily::Sine).with_amplitude(1_000.0);
    let frames = synthesize(&s).unwrap();
    for f in &frames {
        let b = f.bounds();
        assert!(b.y0 >= -1e-9);
        assert!(b.y1 <= 180.0 + 1e-9);
    }
}

#[test]
fn layers_follow_depth_rules() {
    let s = spec(WaveformFamily::Neon).with_layers(3).with_duration(6.0);
    let layers = synthesize_layers(&s).unwrap();
    assert_eq!(layers.layers.len(), 3);
    assert_eq!(layers.foreground().depth, 0);
    assert_eq!(layers.foreground().opacity, 1.0);
    assert_eq!(layers.backgrounds().len(), 2);
    assert_eq!(layers.foreground().timing.duration_secs, 6.0);

    let fg = layers.foreground();
    let bg = &layers.backgrounds()[0];
    assert!(bg.amplitude < fg.amplitude);
    assert!(bg.opacity < fg.opacity);
    assert!(bg.timing.duration_secs > fg.timing.duration_secs);
    assert_eq!(bg.frames.len(), fg.frames.len());
    assert_ne!(bg.frames[0].path_data(), fg.frames[0].path_data());

    let depths: Vec<usize> = layers.paint_order().map(|l| l.depth).collect();
    assert_eq!(depths, vec![2, 1, 0]);
}

#[test]
fn foreground_layer_matches_plain_synthesis() {
    let s = spec(WaveformFamily::Fluid);
    let layers = synthesize_layers(&s).unwrap();
    let frames = synthesize(&s).unwrap();
    let a: Vec<String> = layers.foreground().frames.iter().map(PathFrame::path_data).collect();
    let b: Vec<String> = frames.iter().map(PathFrame::path_data).collect();
    assert_eq!(a, b);
}

#[test]
fn batch_keeps_order_and_isolates_failures() {
    let specs = vec![
        spec(WaveformFamily::Sine),
        spec(WaveformFamily::Pulse).with_duty_cycle(1.5),
        spec(WaveformFamily::Glitch),
    ];
    let out = synthesize_batch(&specs);
    assert_eq!(out.len(), 3);
    assert_eq!(out[0].as_ref().unwrap().family, WaveformFamily::Sine);
    assert!(out[1].as_ref().is_err());
    assert_eq!(out[2].as_ref().unwrap().family, WaveformFamily::Glitch);
}
