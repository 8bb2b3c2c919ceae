// File: crates/smith-core/tests/controller.rs
// Purpose: Series placement, skip handling, interpolation, hit-testing and tooltips.

use smith_core::line::{spline_control_points, LineController, PointModel};
use smith_core::surface::{DrawCall, PathSegment};
use smith_core::{
    Bounds, ComplexPoint, Dataset, DatasetStyle, PixelPoint, Recorder, SmithChart, SmithController, SmithOptions,
    TooltipFormatter,
};

fn chart_with(data: Vec<ComplexPoint>, tension: f64) -> (SmithChart, Recorder) {
    let mut opts = SmithOptions::default();
    opts.ticks.display = false;
    let mut chart = SmithChart::new(opts);
    let style = DatasetStyle { tension, ..DatasetStyle::default() };
    chart.add_dataset(Dataset::new("S11", data).with_style(style));
    let mut rec = Recorder::new();
    chart.render(Bounds::from_ltrb(100.0, 100.0, 300.0, 300.0), &mut rec).expect("render");
    (chart, rec)
}

#[test]
fn control_points_follow_neighbour_spacing() {
    let (cp, cn) = spline_control_points(
        PixelPoint::new(0.0, 0.0),
        PixelPoint::new(10.0, 0.0),
        PixelPoint::new(20.0, 0.0),
        0.4,
    );
    assert_eq!(cp, PixelPoint::new(6.0, 0.0));
    assert_eq!(cn, PixelPoint::new(14.0, 0.0));

    // coincident neighbours collapse onto the point
    let p = PixelPoint::new(5.0, 5.0);
    assert_eq!(spline_control_points(p, p, p, 0.4), (p, p));
}

#[test]
fn skipped_points_break_the_path() {
    let line = LineController::new(0.4);
    let mut pts = vec![
        PointModel::new(PixelPoint::new(0.0, 0.0), 3.0, 1.0),
        PointModel::new(PixelPoint::new(10.0, 5.0), 3.0, 1.0),
        PointModel::skipped(3.0, 1.0),
        PointModel::new(PixelPoint::new(30.0, 5.0), 3.0, 1.0),
        PointModel::new(PixelPoint::new(40.0, 0.0), 3.0, 1.0),
    ];
    line.update_control_points(&mut pts);
    // run ends use themselves as the missing neighbour
    assert_eq!(pts[1].control_next, pts[1].position);
    assert_eq!(pts[3].control_prev, pts[3].position);

    let path = line.path(&pts);
    let moves = path.iter().filter(|s| matches!(s, PathSegment::MoveTo(_))).count();
    assert_eq!(moves, 2);
    assert_eq!(path.len(), 4);
    assert!(matches!(path[1], PathSegment::CubicTo { .. }));

    let straight = LineController::new(0.0).path(&pts);
    assert!(matches!(straight[1], PathSegment::LineTo(_)));
}

#[test]
fn chart_places_samples_and_skips_unplottable_ones() {
    let data = vec![
        ComplexPoint::new(1.0, 1.0),
        ComplexPoint::new(-2.0, 0.5),
        ComplexPoint::new(1.0, -1.0),
        ComplexPoint::new(0.0, 0.0),
    ];
    let (chart, rec) = chart_with(data, 0.0);

    let models = chart.point_models(0).unwrap();
    assert_eq!(models.len(), 4);
    assert!(models[1].skip);
    assert!((models[0].position.x - 220.0).abs() < 1e-9 && (models[0].position.y - 160.0).abs() < 1e-9);
    assert!((models[2].position.x - 220.0).abs() < 1e-9 && (models[2].position.y - 240.0).abs() < 1e-9);

    let markers = rec.calls.iter().filter(|c| matches!(c, DrawCall::Circle { .. })).count();
    assert_eq!(markers, 3);
    let path = rec
        .calls
        .iter()
        .find_map(|c| match c {
            DrawCall::Path { path, .. } => Some(path.clone()),
            _ => None,
        })
        .expect("series path");
    assert_eq!(path.len(), 3);
    assert!(matches!(path[0], PathSegment::MoveTo(_)));
    assert!(matches!(path[1], PathSegment::MoveTo(_)));
    assert!(matches!(path[2], PathSegment::LineTo(_)));
}

#[test]
fn hover_and_tooltips() {
    let data = vec![ComplexPoint::new(1.0, 1.0), ComplexPoint::new(1.0, -1.0)];
    let (mut chart, _) = chart_with(data, 0.4);

    assert_eq!(chart.hover(PixelPoint::new(221.0, 241.0)), Some((0, 1)));
    assert_eq!(chart.hover(PixelPoint::new(150.0, 150.0)), None);

    assert_eq!(chart.tooltip(0, 0).as_deref(), Some("S11: 1 + 1i"));
    assert_eq!(chart.label_for_index(1, 0).as_deref(), Some("1 + -1i"));
    assert_eq!(chart.tooltip(0, 9), None);
    assert_eq!(chart.tooltip(3, 0), None);

    chart.tooltip = TooltipFormatter::new(|ds, i| format!("#{i} of {}", ds.data.len()));
    assert_eq!(chart.tooltip(0, 1).as_deref(), Some("#1 of 2"));
}

#[test]
fn controller_uses_any_point_transform() {
    let area = smith_core::DrawingArea::new(50.0, 50.0, 100.0);
    let ds = Dataset::new("raw", vec![ComplexPoint::new(1.0, 0.0), ComplexPoint::new(-1.0, 0.0)]);
    let ctrl = SmithController::new(&area, &ds);
    let pts = ctrl.update();
    assert_eq!(pts[0].position, PixelPoint::new(50.0, 50.0));
    assert!(pts[1].skip);
    assert_eq!(SmithController::hit_test(&pts, PixelPoint::new(52.0, 52.0)), Some(0));
}

#[test]
fn failed_layout_drops_previous_hover_state() {
    let (mut chart, _) = chart_with(vec![ComplexPoint::new(1.0, 1.0)], 0.4);
    let old = chart.point_models(0).expect("models")[0].position;
    assert_eq!(chart.hover(old), Some((0, 0)));

    let mut rec = Recorder::new();
    let err = chart.render(Bounds::from_ltrb(10.0, 10.0, 10.0, 200.0), &mut rec).unwrap_err();
    assert!(matches!(err, smith_core::SmithError::Configuration(_)));
    assert!(chart.scale.layout().is_none());
    assert!(chart.point_models(0).is_none());
    assert_eq!(chart.hover(old), None);
    assert!(rec.calls.is_empty());
}
