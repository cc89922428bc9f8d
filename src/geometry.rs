//! Geometry functions: polar conversion, triangle vertices, arc path data
//! and point-list serialization.
//!
//! Angles are in degrees, clockwise, with 0° pointing up (north). In SVG's
//! Y-down space that makes north the negative Y axis.

use std::f64::consts::PI;
use std::fmt;

use glam::{DVec2, dvec2};

use crate::format::{js_number_with, push_pair};

/// A 2D point or offset in SVG user units (Y down)
pub type Point2D = DVec2;

/// Default center for shapes drawn in the unit viewBox
pub const UNIT_CENTER: DVec2 = DVec2::new(0.5, 0.5);

/// Convert a radius and a clockwise-from-north angle into Cartesian offsets.
pub fn polar_to_cartesian(radius: f64, angle_degrees: f64) -> DVec2 {
    let r = (angle_degrees - 90.0) * PI / 180.0;
    dvec2(radius * r.cos(), radius * r.sin())
}

/// Vertices of an equilateral triangle inscribed in a circle of diameter
/// `scale`, centered at `center`.
///
/// With no rotation the first vertex points right (+X); `rotation_degrees`
/// turns the triangle clockwise on screen.
pub fn triangle_points(center: DVec2, rotation_degrees: f64, scale: f64) -> [DVec2; 3] {
    let rotation = PI * rotation_degrees / 180.0;
    [0.0, 1.0, 2.0].map(|i: f64| {
        let a = PI * 2.0 * i / 3.0 + rotation;
        dvec2(a.cos() * 0.5 * scale + center.x, a.sin() * 0.5 * scale + center.y)
    })
}

/// Circular arc around `center` sweeping from `start_angle` to `end_angle`.
///
/// The drawn radius is pulled in by half the stroke width so that the outer
/// edge of the stroke sits on `radius`. The path runs from the end angle back
/// to the start angle with the sweep flag fixed at 0.
///
/// A full 360° sweep puts both endpoints on the same spot, which SVG renders
/// as nothing. Callers wanting a full ring should draw a circle instead.
pub fn arc_path(
    center: DVec2,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    stroke_width: f64,
) -> PathData {
    let r = radius - stroke_width / 2.0;
    let p0 = polar_to_cartesian(r, end_angle) + center;
    let p1 = polar_to_cartesian(r, start_angle) + center;
    let large_arc = end_angle - start_angle > 180.0;

    PathData::new()
        .m(p0.x, p0.y)
        .a(r, r, 0.0, large_arc, false, p1.x, p1.y)
}

/// Serialize points as `x,y` pairs joined by `separator`.
///
/// Polygons take `", "` and polylines take `" "`. An empty slice yields an
/// empty string.
pub fn points_string(points: &[DVec2], separator: &str) -> String {
    let mut buf = ryu_js::Buffer::new();
    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        push_pair(&mut out, p.x, p.y, &mut buf);
    }
    out
}

/// A single path-data command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(DVec2),
    Arc {
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        to: DVec2,
    },
}

/// SVG path data (`d` attribute), built fluently.
///
/// Commands are written in absolute form, space separated:
/// `M x y A rx ry rot large sweep x y`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to an absolute point
    pub fn m(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::MoveTo(dvec2(x, y)));
        self
    }

    /// Elliptical arc to an absolute point
    #[allow(clippy::too_many_arguments)]
    pub fn a(
        mut self,
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> Self {
        self.commands.push(PathCommand::Arc {
            rx,
            ry,
            rotation,
            large_arc,
            sweep,
            to: dvec2(x, y),
        });
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = ryu_js::Buffer::new();
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match *cmd {
                PathCommand::MoveTo(p) => {
                    f.write_str("M ")?;
                    f.write_str(js_number_with(p.x, &mut buf))?;
                    f.write_str(" ")?;
                    f.write_str(js_number_with(p.y, &mut buf))?;
                }
                PathCommand::Arc {
                    rx,
                    ry,
                    rotation,
                    large_arc,
                    sweep,
                    to,
                } => {
                    f.write_str("A ")?;
                    for v in [rx, ry, rotation] {
                        f.write_str(js_number_with(v, &mut buf))?;
                        f.write_str(" ")?;
                    }
                    f.write_str(flag(large_arc))?;
                    f.write_str(" ")?;
                    f.write_str(flag(sweep))?;
                    f.write_str(" ")?;
                    f.write_str(js_number_with(to.x, &mut buf))?;
                    f.write_str(" ")?;
                    f.write_str(js_number_with(to.y, &mut buf))?;
                }
            }
        }
        Ok(())
    }
}

fn flag(set: bool) -> &'static str {
    if set { "1" } else { "0" }
}
