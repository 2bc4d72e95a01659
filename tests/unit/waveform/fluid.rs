use super::*;
use crate::waveform::spec::{WaveformFamily, WaveformSpec};

fn ctx() -> WaveCtx {
    let spec = WaveformSpec::new(WaveformFamily::Fluid, 700.0, 140.0).with_amplitude(30.0);
    WaveCtx::from_spec(&spec).unwrap()
}

#[test]
fn nodes_span_the_width() {
    let f = frame(&ctx(), 0.0);
    assert_eq!(f.sample_count(), NODES);
    assert_eq!(f.points[0].x, 0.0);
    assert_eq!(f.points[NODES - 1].x, 700.0);
    assert_eq!(f.points[1].x, 100.0);
}

#[test]
fn nodes_stay_within_amplitude() {
    for phase in [0.0, 1.0, 2.5, 4.0] {
        let f = frame(&ctx(), phase);
        for p in &f.points {
            assert!((p.y - 70.0).abs() <= 30.0 + 1e-9);
        }
    }
}

#[test]
fn spans_are_cubic_curves() {
    let f = frame(&ctx(), 0.4);
    let cubics = f
        .path
        .elements()
        .iter()
        .filter(|e| matches!(e, kurbo::PathEl::CurveTo(..)))
        .count();
    assert_eq!(cubics, NODES - 1);
    assert!(
        !f.path.elements()[1..NODES]
            .iter()
            .any(|e| matches!(e, kurbo::PathEl::LineTo(..)))
    );
}

#[test]
fn loop_closes_after_full_cycle() {
    let a = frame(&ctx(), 0.0);
    let b = frame(&ctx(), TAU);
    for (p, q) in a.points.iter().zip(&b.points) {
        assert!((p.y - q.y).abs() < 1e-9);
    }
}
