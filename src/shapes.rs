//! Shape generators.
//!
//! Each shape is its own type that knows how to:
//! - Pull its recognized keys out of a caller attribute bag
//! - Compute its geometry-derived attributes
//! - Describe itself as a [`ShapeNode`]
//!
//! The free functions at the bottom take a render callback and an attribute
//! bag, which is the surface most callers use.

use enum_dispatch::enum_dispatch;
use glam::{DVec2, dvec2};

use crate::attrs::{AttrValue, Attrs};
use crate::format::js_number;
use crate::geometry::{UNIT_CENTER, arc_path, points_string, triangle_points};
use crate::icons::Glyph;
use crate::log::debug;
use crate::render::{Render, ShapeNode};

/// Default viewport for a bare `svg` container
pub const SVG_VIEW_BOX: &str = "0 0 1 1";
/// Default width and height for a bare `svg` container
pub const SVG_SIZE: &str = "1em";

/// Common behavior for all shapes
#[enum_dispatch]
pub trait Shape {
    /// Element name
    fn tag(&self) -> &'static str;

    /// Final attributes: computed geometry plus pass-through keys
    fn attributes(&self) -> Attrs;

    fn children(&self) -> Vec<ShapeNode> {
        Vec::new()
    }

    fn to_node(&self) -> ShapeNode {
        ShapeNode::new(self.tag(), self.attributes()).with_children(self.children())
    }
}

/// Any shape this crate can generate
#[enum_dispatch(Shape)]
#[derive(Debug, Clone, PartialEq)]
pub enum AnyShape {
    Rect,
    Triangle,
    Arc,
    PolyLine,
    Icon,
}

// ============================================================================
// Shape Types
// ============================================================================

/// A rectangle. Attributes pass through untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rect {
    pub attrs: Attrs,
}

impl Rect {
    pub fn new(
        x: impl Into<AttrValue>,
        y: impl Into<AttrValue>,
        width: impl Into<AttrValue>,
        height: impl Into<AttrValue>,
    ) -> Self {
        Self {
            attrs: Attrs::new()
                .with("x", x)
                .with("y", y)
                .with("width", width)
                .with("height", height),
        }
    }

    pub fn from_attrs(attrs: Attrs) -> Self {
        Self { attrs }
    }

    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = self.attrs.merge(attrs);
        self
    }
}

impl Shape for Rect {
    fn tag(&self) -> &'static str {
        "rect"
    }

    fn attributes(&self) -> Attrs {
        self.attrs.clone()
    }
}

/// An equilateral triangle, drawn as a `polygon`.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    pub center: DVec2,
    /// Rotation in degrees
    pub angle: f64,
    /// Diameter of the circumscribed circle
    pub scale: f64,
    pub extra: Attrs,
}

impl Default for Triangle {
    fn default() -> Self {
        Self {
            center: UNIT_CENTER,
            angle: 0.0,
            scale: 1.0,
            extra: Attrs::new(),
        }
    }
}

impl Triangle {
    pub fn new(center: DVec2) -> Self {
        Self {
            center,
            ..Self::default()
        }
    }

    /// Recognizes `x`, `y`, `angle` and `scale`; the rest passes through.
    pub fn from_attrs(mut attrs: Attrs) -> Self {
        let angle = attrs.take_number("angle", 0.0);
        let scale = attrs.take_number("scale", 1.0);
        let x = attrs.take_number("x", UNIT_CENTER.x);
        let y = attrs.take_number("y", UNIT_CENTER.y);
        Self {
            center: dvec2(x, y),
            angle,
            scale,
            extra: attrs,
        }
    }

    pub fn angle(mut self, degrees: f64) -> Self {
        self.angle = degrees;
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.extra = self.extra.merge(attrs);
        self
    }

    pub fn points(&self) -> [DVec2; 3] {
        triangle_points(self.center, self.angle, self.scale)
    }
}

impl Shape for Triangle {
    fn tag(&self) -> &'static str {
        "polygon"
    }

    fn attributes(&self) -> Attrs {
        let mut extra = self.extra.clone();
        extra.remove("points");
        Attrs::new()
            .with("points", points_string(&self.points(), ", "))
            .merge(extra)
    }
}

/// A circular arc, drawn as a `path`.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    pub center: DVec2,
    pub radius: f64,
    /// Degrees clockwise from north
    pub start_angle: f64,
    /// Degrees clockwise from north
    pub end_angle: f64,
    pub stroke_width: f64,
    pub extra: Attrs,
}

impl Default for Arc {
    fn default() -> Self {
        Self {
            center: UNIT_CENTER,
            radius: 0.5,
            start_angle: 0.0,
            end_angle: 360.0,
            stroke_width: 0.0,
            extra: Attrs::new(),
        }
    }
}

impl Arc {
    pub fn new(center: DVec2, radius: f64) -> Self {
        Self {
            center,
            radius,
            ..Self::default()
        }
    }

    /// Recognizes `x`, `y`, `radius`, `startAngle`, `endAngle` and
    /// `strokeWidth`; the rest passes through.
    pub fn from_attrs(mut attrs: Attrs) -> Self {
        let x = attrs.take_number("x", UNIT_CENTER.x);
        let y = attrs.take_number("y", UNIT_CENTER.y);
        let radius = attrs.take_number("radius", 0.5);
        let start_angle = attrs.take_number("startAngle", 0.0);
        let end_angle = attrs.take_number("endAngle", 360.0);
        let stroke_width = attrs.take_number("strokeWidth", 0.0);
        Self {
            center: dvec2(x, y),
            radius,
            start_angle,
            end_angle,
            stroke_width,
            extra: attrs,
        }
    }

    pub fn sweep(mut self, start_angle: f64, end_angle: f64) -> Self {
        self.start_angle = start_angle;
        self.end_angle = end_angle;
        self
    }

    pub fn stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.extra = self.extra.merge(attrs);
        self
    }

    /// The `d` attribute for this arc
    pub fn path_data(&self) -> String {
        arc_path(
            self.center,
            self.radius,
            self.start_angle,
            self.end_angle,
            self.stroke_width,
        )
        .to_string()
    }
}

impl Shape for Arc {
    fn tag(&self) -> &'static str {
        "path"
    }

    fn attributes(&self) -> Attrs {
        let mut extra = self.extra.clone();
        extra.remove("d");
        Attrs::new()
            .with("d", self.path_data())
            .with("style", format!("stroke-width: {}", js_number(self.stroke_width)))
            .merge(extra)
    }
}

/// An open polyline through a list of points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolyLine {
    pub points: Vec<DVec2>,
    pub extra: Attrs,
}

impl PolyLine {
    pub fn new(points: impl Into<Vec<DVec2>>) -> Self {
        Self {
            points: points.into(),
            extra: Attrs::new(),
        }
    }

    /// `points` is computed from the point list; `pathLength` and every other
    /// key passes through.
    pub fn from_attrs(points: impl Into<Vec<DVec2>>, attrs: Attrs) -> Self {
        Self {
            points: points.into(),
            extra: attrs,
        }
    }

    pub fn path_length(mut self, length: f64) -> Self {
        self.extra.insert("pathLength", length);
        self
    }

    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.extra = self.extra.merge(attrs);
        self
    }
}

impl Shape for PolyLine {
    fn tag(&self) -> &'static str {
        "polyline"
    }

    fn attributes(&self) -> Attrs {
        let mut extra = self.extra.clone();
        extra.remove("points");
        Attrs::new()
            .with("points", points_string(&self.points, " "))
            .merge(extra)
    }
}

/// One of the built-in glyphs.
///
/// Grouped glyphs render as `<g attrs><path d/></g>`; the checkmark renders
/// as a bare `<path d attrs/>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    pub glyph: Glyph,
    pub attrs: Attrs,
}

impl Icon {
    pub fn new(glyph: Glyph) -> Self {
        Self {
            glyph,
            attrs: Attrs::new(),
        }
    }

    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = self.attrs.merge(attrs);
        self
    }

    fn path_node(&self) -> ShapeNode {
        ShapeNode::new("path", Attrs::new().with("d", self.glyph.path_data()))
    }
}

impl Shape for Icon {
    fn tag(&self) -> &'static str {
        if self.glyph.is_grouped() { "g" } else { "path" }
    }

    fn attributes(&self) -> Attrs {
        if self.glyph.is_grouped() {
            self.attrs.clone()
        } else {
            self.path_node().attrs.merge(self.attrs.clone())
        }
    }

    fn children(&self) -> Vec<ShapeNode> {
        if self.glyph.is_grouped() {
            vec![self.path_node()]
        } else {
            Vec::new()
        }
    }
}

// ============================================================================
// Render-callback surface
// ============================================================================

/// Default attributes of a bare `svg` container
pub fn svg_defaults() -> Attrs {
    Attrs::new()
        .with("viewBox", SVG_VIEW_BOX)
        .with("width", SVG_SIZE)
        .with("height", SVG_SIZE)
}

/// Render any shape through `render`.
pub fn render_shape<R, S>(render: &R, shape: &S) -> Result<R::Node, R::Error>
where
    R: Render + ?Sized,
    S: Shape + ?Sized,
{
    let node = shape.to_node();
    debug!(tag = node.tag.as_str(), attrs = node.attrs.len(), "render shape");
    node.render(render)
}

/// `svg` container around already rendered `children`.
///
/// `viewBox`, `width` and `height` default to the unit box at `1em`; caller
/// attributes win.
pub fn svg<R: Render + ?Sized>(
    render: &R,
    attrs: Attrs,
    children: Vec<R::Node>,
) -> Result<R::Node, R::Error> {
    let attrs = svg_defaults().merge(attrs);
    debug!(attrs = attrs.len(), children = children.len(), "render svg container");
    render.element("svg", attrs, children)
}

/// Rectangle; attributes pass through.
pub fn rect<R: Render + ?Sized>(render: &R, attrs: Attrs) -> Result<R::Node, R::Error> {
    render_shape(render, &Rect::from_attrs(attrs))
}

/// Equilateral triangle with any rotation.
pub fn triangle<R: Render + ?Sized>(render: &R, attrs: Attrs) -> Result<R::Node, R::Error> {
    render_shape(render, &Triangle::from_attrs(attrs))
}

/// Arc centered at `x`, `y` sweeping clockwise from `startAngle` to `endAngle`.
pub fn arc<R: Render + ?Sized>(render: &R, attrs: Attrs) -> Result<R::Node, R::Error> {
    render_shape(render, &Arc::from_attrs(attrs))
}

/// Polyline through `points`.
pub fn poly_line<R: Render + ?Sized>(
    render: &R,
    points: &[DVec2],
    attrs: Attrs,
) -> Result<R::Node, R::Error> {
    render_shape(render, &PolyLine::from_attrs(points, attrs))
}

pub fn download_icon<R: Render + ?Sized>(render: &R, attrs: Attrs) -> Result<R::Node, R::Error> {
    render_shape(render, &Icon::new(Glyph::Download).with_attrs(attrs))
}

pub fn share_icon<R: Render + ?Sized>(render: &R, attrs: Attrs) -> Result<R::Node, R::Error> {
    render_shape(render, &Icon::new(Glyph::Share).with_attrs(attrs))
}

pub fn checkmark<R: Render + ?Sized>(render: &R, attrs: Attrs) -> Result<R::Node, R::Error> {
    render_shape(render, &Icon::new(Glyph::Checkmark).with_attrs(attrs))
}
