// File: crates/smith-core/tests/grid.rs
// Purpose: Grid fit/draw behaviour: draw-call shapes, clipping, labels, padding, validation.

use std::f64::consts::{FRAC_PI_2, PI};

use smith_core::geometry::{DrawingArea, Padding};
use smith_core::grid::{label_padding, ArcSign};
use smith_core::surface::{DrawCall, TextAlign};
use smith_core::transform::forward;
use smith_core::{Bounds, GridPrimitive, Recorder, Scale, SmithError, SmithOptions, SmithScale};

fn bounds() -> Bounds {
    Bounds::from_ltrb(100.0, 100.0, 300.0, 300.0)
}

fn fitted(options: SmithOptions) -> (SmithScale, Recorder) {
    let rec = Recorder::new();
    let mut scale = SmithScale::new(options);
    scale.update(bounds(), &rec).expect("fit");
    (scale, rec)
}

fn no_labels() -> SmithOptions {
    let mut opts = SmithOptions::default();
    opts.ticks.display = false;
    opts
}

#[test]
fn hidden_scale_draws_nothing() {
    let mut opts = SmithOptions::default();
    opts.display = false;
    let (scale, mut rec) = fitted(opts);
    scale.draw(&mut rec);
    assert!(rec.calls.is_empty());
}

#[test]
fn without_grid_lines_only_the_border_is_stroked() {
    let mut opts = no_labels();
    opts.grid_lines.display = false;
    let (scale, mut rec) = fitted(opts);
    scale.draw(&mut rec);
    assert_eq!(rec.calls.len(), 1);
    match &rec.calls[0] {
        DrawCall::Arc { arc, style } => {
            assert_eq!((arc.center.x, arc.center.y, arc.radius), (200.0, 200.0, 100.0));
            assert_eq!(arc.start, 0.0);
            assert_eq!(arc.end, 2.0 * PI);
            assert!(!arc.counterclockwise);
            assert_eq!(style.width, 1.0);
        }
        other => panic!("expected the border arc, got {other:?}"),
    }

    // labels enabled still paint only the border
    let mut opts = SmithOptions::default();
    opts.grid_lines.display = false;
    let (scale, mut rec) = fitted(opts);
    scale.draw(&mut rec);
    assert_eq!(rec.calls.len(), 1);
    assert_eq!(rec.arcs().count(), 1);
}

#[test]
fn full_draw_order_and_counts() {
    let (scale, mut rec) = fitted(SmithOptions::default());
    scale.draw(&mut rec);

    // real axis first
    assert!(matches!(rec.calls[0], DrawCall::Line { .. }));
    let lines = rec.calls.iter().filter(|c| matches!(c, DrawCall::Line { .. })).count();
    assert_eq!(lines, 1, "the zero reactance tick shares the real axis stroke");
    assert_eq!(rec.arcs().count(), 22 + 24);
    assert_eq!(rec.texts().count(), 22 + 24);

    let first_text = rec.calls.iter().position(|c| matches!(c, DrawCall::Text(_))).unwrap();
    assert!(rec.calls[first_text..].iter().all(|c| matches!(c, DrawCall::Text(_))), "labels come last");
    assert_eq!(rec.texts().next().unwrap().text, "0");
    assert_eq!(rec.texts().nth(22).unwrap().text, "-50i");
}

#[test]
fn reactance_arcs_run_from_infinity_to_the_boundary() {
    let (scale, _) = fitted(no_labels());
    let layout = scale.layout().unwrap();
    let area = layout.area;
    let infinity = (area.center_x + area.half(), area.center_y);

    let mut seen = 0;
    for p in &layout.primitives {
        let GridPrimitive::Arc(arc) = p else { continue };
        seen += 1;
        let spec = arc.arc_spec();
        let s = spec.start_point();
        assert!((s.x - infinity.0).abs() < 1e-9 && (s.y - infinity.1).abs() < 1e-9);

        let e = spec.end_point();
        let clip = forward(&area, 0.0, arc.value).unwrap();
        assert!(e.distance(clip) < 1e-6, "tick {} ends at {:?}, boundary point {:?}", arc.value, e, clip);
        assert!((e.distance(area.center()) - area.half()).abs() < 1e-6);

        match arc.sign {
            ArcSign::Positive => {
                assert_eq!(arc.start_angle, FRAC_PI_2);
                assert!(spec.sweep() > 0.0 && spec.sweep() < PI);
            }
            ArcSign::Negative => {
                assert_eq!(arc.start_angle, -FRAC_PI_2);
                assert!(spec.sweep() < 0.0 && spec.sweep() > -PI);
            }
        }
    }
    assert_eq!(seen, 24);
}

#[test]
fn label_anchors_and_orientation() {
    let (scale, _) = fitted(no_labels());
    let layout = scale.layout().unwrap();

    let r0 = &layout.resistance_labels[0];
    assert_eq!((r0.anchor.x, r0.anchor.y), (100.0, 200.0));
    assert_eq!(r0.rotation, -FRAC_PI_2);
    assert_eq!(r0.align, TextAlign::Center);

    // zero reactance tick (index 12) carries no label
    assert!(layout.reactance_labels[12].is_none());

    // -0.2i sits left of center: flipped to read outward
    let left = layout.reactance_labels[11].as_ref().unwrap();
    assert_eq!(left.text, "-0.2i");
    assert!(left.anchor.x < 200.0 && left.anchor.y > 200.0);
    assert_eq!(left.align, TextAlign::Right);
    assert_eq!(left.offset, -5.0);
    let radial = (left.anchor.y - 200.0).atan2(left.anchor.x - 200.0);
    assert!((left.rotation - (radial + PI)).abs() < 1e-12);

    // 2i sits right of center
    let right = layout.reactance_labels[18].as_ref().unwrap();
    assert_eq!(right.text, "2i");
    assert!(right.anchor.x > 200.0 && right.anchor.y < 200.0);
    assert_eq!(right.align, TextAlign::Left);
    assert_eq!(right.offset, 5.0);
}

#[test]
fn label_padding_is_a_single_correction_pass() {
    let (scale, rec) = fitted(SmithOptions::default());
    let layout = scale.layout().unwrap();

    let pad = label_padding(
        &bounds(),
        scale.options.ticks.values.reactance.as_slice(),
        scale.reactance_labels(),
        &scale.options.ticks,
        &rec,
    )
    .unwrap();
    assert_eq!(layout.padding, pad);
    assert!(pad.left > 0.0, "left labels overflow a tight box");
    assert_eq!(layout.area, DrawingArea::padded(&bounds(), &pad));
    assert!(layout.area.min_dimension < 200.0);
    assert_eq!((layout.area.center_x, layout.area.center_y), (200.0, 200.0));

    let (plain, _) = fitted(no_labels());
    assert_eq!(plain.padding(), Padding::default());
    assert_eq!(plain.layout().unwrap().area.min_dimension, 200.0);
}

#[test]
fn fit_is_idempotent() {
    let rec = Recorder::new();
    let mut scale = SmithScale::default();
    scale.update(bounds(), &rec).unwrap();
    let first = scale.layout().unwrap().clone();
    scale.fit(&rec).unwrap();
    assert_eq!(scale.layout().unwrap(), &first);
    scale.update(bounds(), &rec).unwrap();
    assert_eq!(scale.layout().unwrap(), &first);
}

#[test]
fn invalid_configuration_is_rejected_at_fit() {
    let rec = Recorder::new();
    let cases: Vec<(Vec<f64>, Vec<f64>)> = vec![
        (vec![0.0, f64::NAN], vec![1.0]),
        (vec![0.0, 1.0, 1.0], vec![1.0]),
        (vec![-0.5], vec![1.0]),
        (vec![0.0], vec![-1.0, f64::INFINITY]),
        (vec![0.0], vec![0.5, 0.5]),
    ];
    for (r, x) in cases {
        let mut opts = SmithOptions::default();
        opts.ticks.values.resistance = r.clone();
        opts.ticks.values.reactance = x.clone();
        let mut scale = SmithScale::new(opts);
        match scale.update(bounds(), &rec) {
            Err(SmithError::Configuration(_)) => {}
            other => panic!("{r:?} / {x:?} should be rejected, got {other:?}"),
        }
        assert!(scale.layout().is_none());
    }

    let mut scale = SmithScale::default();
    let err = scale.update(Bounds::from_ltrb(10.0, 10.0, 10.0, 200.0), &rec).unwrap_err();
    assert!(matches!(err, SmithError::Configuration(_)));

    let mut unsized_scale = SmithScale::default();
    assert_eq!(unsized_scale.fit(&rec), Err(SmithError::NotSized));
    assert_eq!(unsized_scale.get_point_position(1.0, 0.0), Err(SmithError::NotSized));
}

#[test]
fn custom_ticks_and_formatters() {
    let mut opts = no_labels();
    opts.ticks.values.resistance = vec![0.0, 1.0];
    opts.ticks.values.reactance = vec![-1.0, 0.0, 1.0];
    opts.ticks.r_callback = smith_core::TickFormatter::new(|t, i, _| format!("R{i}={t:.1}"));
    let (scale, _) = fitted(opts);
    assert_eq!(scale.resistance_labels(), ["R0=0.0", "R1=1.0"]);
    assert_eq!(scale.reactance_labels(), ["-1i", "0i", "1i"]);
    assert_eq!(scale.layout().unwrap().primitives.len(), 5);
}

#[test]
fn near_zero_reactance_ticks_still_end_on_the_boundary() {
    let mut opts = no_labels();
    opts.ticks.values.reactance = vec![-1e-6, 5e-3, 1e-9];
    let (scale, _) = fitted(opts);
    let layout = scale.layout().unwrap();
    let area = layout.area;

    for p in &layout.primitives {
        let GridPrimitive::Arc(arc) = p else { continue };
        let spec = arc.arc_spec();
        let e = spec.end_point();
        let clip = forward(&area, 0.0, arc.value).unwrap();
        assert!(e.distance(clip) < 1e-3, "tick {} ends at {:?}, boundary point {:?}", arc.value, e, clip);
        // a short arc near the real axis, not a sweep around the huge circle
        assert!(spec.sweep().abs() < 0.1, "tick {} sweeps {}", arc.value, spec.sweep());
        assert_eq!(spec.sweep() > 0.0, arc.value > 0.0);
    }
}
