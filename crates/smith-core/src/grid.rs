// File: crates/smith-core/src/grid.rs
// Summary: Smith grid layout (resistance circles, clipped reactance arcs, tick labels) and drawing.

use std::f64::consts::{FRAC_PI_2, PI};

use tracing::debug;

use crate::error::{Result, SmithError};
use crate::geometry::{clip_angle, ArcSpec, Bounds, Circle, DrawingArea, Padding};
use crate::options::{SmithOptions, TickOptions};
use crate::surface::{StrokeStyle, Surface, TextAlign, TextMeasure, TextRun};
use crate::ticks::TickSet;
use crate::transform::{forward, near_real_axis, reactance_circle, resistance_circle};
use crate::types::PixelPoint;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArcSign {
    Positive,
    Negative,
}

/// Full circle of constant resistance; always inside the disk.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResistanceCircle {
    pub value: f64,
    pub center: PixelPoint,
    pub radius: f64,
}

/// Arc of constant reactance, clipped where it leaves the r = 0 circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReactanceArc {
    pub value: f64,
    pub center: PixelPoint,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub sign: ArcSign,
}

impl ReactanceArc {
    pub fn counterclockwise(&self) -> bool {
        self.sign == ArcSign::Negative
    }

    pub fn arc_spec(&self) -> ArcSpec {
        ArcSpec {
            center: self.center,
            radius: self.radius,
            start: self.start_angle,
            end: self.end_angle,
            counterclockwise: self.counterclockwise(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GridPrimitive {
    Circle(ResistanceCircle),
    Arc(ReactanceArc),
    /// The zero reactance tick: a diameter along the real axis.
    Line { from: PixelPoint, to: PixelPoint },
}

#[derive(Clone, Debug, PartialEq)]
pub struct TickLabel {
    pub text: String,
    pub anchor: PixelPoint,
    pub rotation: f64,
    pub align: TextAlign,
    pub offset: f64,
}

/// Everything `draw` needs, computed once per layout change.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLayout {
    pub area: DrawingArea,
    pub padding: Padding,
    pub primitives: Vec<GridPrimitive>,
    pub resistance_labels: Vec<TickLabel>,
    /// Parallel to the reactance ticks; the zero tick has no label.
    pub reactance_labels: Vec<Option<TickLabel>>,
}

/// Overhang of the reactance labels past `bounds`, measured against the
/// uncorrected disk. One pass only: the corrected disk is not re-measured.
pub fn label_padding(
    bounds: &Bounds,
    reactance: &[f64],
    labels: &[String],
    ticks: &TickOptions,
    measure: &dyn TextMeasure,
) -> Result<Padding> {
    let area = DrawingArea::from_bounds(bounds);
    let half = area.half();
    let fs = ticks.font_size;
    let mut padding = Padding::default();

    for (&x, text) in reactance.iter().zip(labels) {
        if x == 0.0 {
            continue;
        }
        let start = forward(&area, 0.0, x)
            .map_err(|e| SmithError::Configuration(format!("cannot place label for reactance tick {x}: {e}")))?;
        let cos_phi = (start.x - area.center_x) / half;
        let sin_phi = (start.y - area.center_y) / half;
        let w = measure.measure_text(text, fs) + ticks.padding;
        let corners = [
            PixelPoint::new(start.x + cos_phi * w + sin_phi * fs, start.y + sin_phi * w - cos_phi * fs),
            PixelPoint::new(start.x + cos_phi * w - sin_phi * fs, start.y + sin_phi * w + cos_phi * fs),
        ];
        for pt in corners {
            padding.include(bounds, pt);
        }
    }
    Ok(padding)
}

/// Compute the grid for `bounds`. Labels must be parallel to their ticks.
pub fn fit(
    bounds: &Bounds,
    ticks: &TickSet,
    resistance_labels: &[String],
    reactance_labels: &[String],
    options: &SmithOptions,
    measure: &dyn TextMeasure,
) -> Result<GridLayout> {
    ticks.validate()?;
    if resistance_labels.len() != ticks.resistance.len() || reactance_labels.len() != ticks.reactance.len() {
        return Err(SmithError::Configuration("tick labels are out of sync with tick values".into()));
    }
    if !DrawingArea::from_bounds(bounds).is_valid() {
        return Err(SmithError::Configuration(format!(
            "non-positive drawing dimension ({} x {})",
            bounds.width(),
            bounds.height()
        )));
    }

    let padding = if options.ticks.display {
        label_padding(bounds, &ticks.reactance, reactance_labels, &options.ticks, measure)?
    } else {
        Padding::default()
    };
    let area = DrawingArea::padded(bounds, &padding);
    if !area.is_valid() {
        return Err(SmithError::Configuration(format!(
            "labels leave no room for the chart (diameter {})",
            area.min_dimension
        )));
    }

    let mut primitives = Vec::with_capacity(ticks.resistance.len() + ticks.reactance.len());
    let mut r_labels = Vec::with_capacity(ticks.resistance.len());
    for (&r, text) in ticks.resistance.iter().zip(resistance_labels) {
        let c = resistance_circle(&area, r);
        primitives.push(GridPrimitive::Circle(ResistanceCircle { value: r, center: c.center, radius: c.radius }));
        r_labels.push(TickLabel {
            text: text.clone(),
            anchor: PixelPoint::new(c.center.x - c.radius, area.center_y),
            rotation: -FRAC_PI_2,
            align: TextAlign::Center,
            offset: 0.0,
        });
    }

    let boundary = area.boundary();
    let mut x_labels = Vec::with_capacity(ticks.reactance.len());
    for (&x, text) in ticks.reactance.iter().zip(reactance_labels) {
        if x == 0.0 {
            primitives.push(GridPrimitive::Line {
                from: PixelPoint::new(area.center_x - area.half(), area.center_y),
                to: PixelPoint::new(area.center_x + area.half(), area.center_y),
            });
            x_labels.push(None);
            continue;
        }
        let arc = clip_reactance(&area, &boundary, x)?;
        let end = Circle { center: arc.center, radius: arc.radius }.point_at(arc.end_angle);
        primitives.push(GridPrimitive::Arc(arc));
        x_labels.push(Some(reactance_label(&area, text, end, options.ticks.padding)));
    }

    debug!(
        min_dimension = area.min_dimension,
        pad_left = padding.left,
        pad_top = padding.top,
        pad_right = padding.right,
        pad_bottom = padding.bottom,
        primitives = primitives.len(),
        "fitted smith grid"
    );

    Ok(GridLayout { area, padding, primitives, resistance_labels: r_labels, reactance_labels: x_labels })
}

fn clip_reactance(area: &DrawingArea, boundary: &Circle, x: f64) -> Result<ReactanceArc> {
    let c = reactance_circle(area, x);
    let positive = x > 0.0;
    let clipped = if near_real_axis(0.0, x) {
        // the boundary meets this arc at the plotted r = 0 point
        forward(area, 0.0, x)
            .ok()
            .map(|p| (p.y - c.center.y).atan2(p.x - c.center.x))
            .filter(|phi| phi.is_finite() && c.radius.is_finite())
    } else {
        clip_angle(&c, boundary, positive)
    };
    let end_angle = clipped
        .ok_or_else(|| SmithError::Configuration(format!("reactance tick {x} cannot be clipped to the chart")))?;
    Ok(ReactanceArc {
        value: x,
        center: c.center,
        radius: c.radius,
        start_angle: if positive { FRAC_PI_2 } else { -FRAC_PI_2 },
        end_angle,
        sign: if positive { ArcSign::Positive } else { ArcSign::Negative },
    })
}

/// Labels run outward along the arc, which meets the boundary at a right
/// angle, so the radial direction from the center is the arc tangent there.
fn reactance_label(area: &DrawingArea, text: &str, anchor: PixelPoint, padding: f64) -> TickLabel {
    let mut rotation = (anchor.y - area.center_y).atan2(anchor.x - area.center_x);
    let (align, offset) = if anchor.x < area.center_x {
        rotation += PI;
        (TextAlign::Right, -padding)
    } else {
        (TextAlign::Left, padding)
    };
    TickLabel { text: text.to_owned(), anchor, rotation, align, offset }
}

/// Paint a fitted grid. Never fails.
pub fn draw(layout: &GridLayout, options: &SmithOptions, surface: &mut dyn Surface) {
    if !options.display {
        return;
    }
    let style = StrokeStyle { color: options.grid_lines.color, width: options.grid_lines.line_width };
    let area = &layout.area;

    if !options.grid_lines.display {
        surface.stroke_arc(&ArcSpec::full_circle(&area.boundary()), &style);
        return;
    }

    surface.stroke_line(
        PixelPoint::new(area.center_x - area.half(), area.center_y),
        PixelPoint::new(area.center_x + area.half(), area.center_y),
        &style,
    );
    for p in &layout.primitives {
        match p {
            GridPrimitive::Circle(c) => {
                surface.stroke_arc(&ArcSpec::full_circle(&Circle { center: c.center, radius: c.radius }), &style)
            }
            GridPrimitive::Arc(a) => surface.stroke_arc(&a.arc_spec(), &style),
            // the zero tick lies on the real axis, stroked above
            GridPrimitive::Line { .. } => {}
        }
    }

    if options.ticks.display {
        let labels = layout.resistance_labels.iter().chain(layout.reactance_labels.iter().flatten());
        for label in labels {
            surface.fill_text(&TextRun {
                text: label.text.clone(),
                anchor: label.anchor,
                rotation: label.rotation,
                align: label.align,
                offset: label.offset,
                font_size: options.ticks.font_size,
                color: options.ticks.font_color,
            });
        }
    }
}
