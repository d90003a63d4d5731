// Tests for the slider quantizers: positions survive a round trip, physical
// values snap to the nearest position, and results stay inside the range.

use tso_config::quantize::{
    self, DIFFUSION_EXTENT, DIFFUSION_INTENSITY, FOVY_DEGREE, MORPH_CONTROL_MAX,
    OCCLUSION_INTENSITY, OCCLUSION_RADIUS, ROLL_DEGREE,
};
use tso_config::{ControlRange, Quantizer};

fn all_quantizers() -> Vec<(&'static str, Quantizer)> {
    vec![
        ("fovy", FOVY_DEGREE),
        ("roll", ROLL_DEGREE),
        ("occlusion intensity", OCCLUSION_INTENSITY),
        ("occlusion radius", OCCLUSION_RADIUS),
        ("diffusion intensity", DIFFUSION_INTENSITY),
        ("diffusion extent", DIFFUSION_EXTENT),
        ("morph", quantize::morph(MORPH_CONTROL_MAX)),
    ]
}

#[test]
fn every_position_round_trips() {
    for (name, q) in all_quantizers() {
        for position in q.range.positions() {
            let value = q.dequantize(position);
            assert_eq!(q.quantize(value), position, "{name} at {position}");
        }
    }
}

#[test]
fn fovy_slider_scenarios() {
    // Position 3 is 30 degrees
    assert_eq!(FOVY_DEGREE.dequantize(3), 30.0);
    assert_eq!(FOVY_DEGREE.quantize(30.0), 3);
    // 47 degrees shows as position 6 (45 degrees)
    assert_eq!(FOVY_DEGREE.quantize(47.0), 6);
    assert_eq!(FOVY_DEGREE.snap(47.0), 45.0);
}

#[test]
fn fraction_mappings() {
    assert_eq!(OCCLUSION_INTENSITY.dequantize(10), 0.5);
    assert_eq!(OCCLUSION_RADIUS.dequantize(10), 2.5);
    assert_eq!(DIFFUSION_EXTENT.dequantize(10), 1.0);
    assert_eq!(DIFFUSION_INTENSITY.quantize(0.55), 11);
}

#[test]
fn quantize_clamps_out_of_range_values() {
    for (name, q) in all_quantizers() {
        let below = q.dequantize(q.range.min) - 1000.0;
        let above = q.dequantize(q.range.max) + 1000.0;
        assert_eq!(q.quantize(below), q.range.min, "{name} below");
        assert_eq!(q.quantize(above), q.range.max, "{name} above");
        assert_eq!(q.quantize(f32::INFINITY), q.range.max, "{name} +inf");
        assert_eq!(q.quantize(f32::NEG_INFINITY), q.range.min, "{name} -inf");
    }
}

#[test]
fn nan_snaps_to_minimum() {
    for (name, q) in all_quantizers() {
        assert_eq!(q.quantize(f32::NAN), q.range.min, "{name}");
    }
}

#[test]
fn halves_round_away_from_zero() {
    // 17.5 degrees is exactly between positions 0 and 1
    assert_eq!(FOVY_DEGREE.quantize(17.5), 1);
    let q = Quantizer::fraction(2.0, ControlRange::new(-10, 10));
    assert_eq!(q.quantize(-0.25), -1);
    assert_eq!(q.quantize(0.25), 1);
}

#[test]
fn morph_quantizer_spans_unit_interval() {
    for max in [1, 5, 20, 100] {
        let q = quantize::morph(max);
        assert_eq!(q.range, ControlRange::new(0, max));
        assert_eq!(q.dequantize(0), 0.0);
        assert_eq!(q.dequantize(max), 1.0);
    }
    // A zero bound still yields a usable slider
    assert_eq!(quantize::morph(0).range.max, 1);
}

#[test]
fn control_range_helpers() {
    let r = ControlRange::new(0, 17);
    assert!(r.contains(0) && r.contains(17));
    assert!(!r.contains(18) && !r.contains(-1));
    assert_eq!(r.clamp(40), 17);
    assert_eq!(r.positions().count(), 18);
}
