use super::*;
use crate::waveform::spec::{WaveformFamily, WaveformSpec};

fn ctx(amplitude: f64) -> WaveCtx {
    let spec = WaveformSpec::new(WaveformFamily::Glitch, 640.0, 160.0).with_amplitude(amplitude);
    WaveCtx::from_spec(&spec).unwrap()
}

#[test]
fn same_inputs_give_same_frame() {
    let a = frame(&ctx(40.0), 1.25);
    let b = frame(&ctx(40.0), 1.25);
    assert_eq!(a.path_data(), b.path_data());
}

#[test]
fn different_phase_or_spec_changes_jitter() {
    let a = frame(&ctx(40.0), 1.25);
    let b = frame(&ctx(40.0), 2.5);
    let c = frame(&ctx(41.0), 1.25);
    assert_ne!(a.path_data(), b.path_data());
    assert_ne!(a.path_data(), c.path_data());
}

#[test]
fn ends_are_pinned_and_x_is_monotonic() {
    let f = frame(&ctx(40.0), 0.0);
    assert_eq!(f.sample_count(), SEGMENTS + 1);
    assert_eq!(f.points[0].x, 0.0);
    assert_eq!(f.points[SEGMENTS].x, 640.0);
    assert!(f.points.windows(2).all(|w| w[0].x < w[1].x));
}

#[test]
fn stays_inside_extent() {
    for phase in [0.0, 0.9, 3.3, 5.1] {
        let f = frame(&ctx(80.0), phase);
        for p in &f.points {
            assert!(p.y >= -1e-9 && p.y <= 160.0 + 1e-9);
        }
    }
}

#[test]
fn staircase_structure_is_constant() {
    let a = frame(&ctx(40.0), 0.0);
    let b = frame(&ctx(40.0), 4.0);
    assert!(a.is_interpolable_with(&b));
    // move + two lines per step + two corners + close
    assert_eq!(a.path.elements().len(), 1 + 2 * SEGMENTS + 3);
}
