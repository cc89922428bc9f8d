//! Shape kit: a render callback and default container attributes bound once.

use glam::DVec2;

use crate::attrs::{AttrValue, Attrs};
use crate::icons::Glyph;
use crate::log::debug;
use crate::render::Render;
use crate::shapes::{
    self, AnyShape, Arc, Icon, PolyLine, Rect, SVG_SIZE, SVG_VIEW_BOX, Triangle,
};

/// Default attributes for every container a kit produces
#[derive(Debug, Clone, PartialEq)]
pub struct KitConfig {
    pub width: AttrValue,
    pub height: AttrValue,
    pub view_box: AttrValue,
    /// Extra container attributes (class, fill, ...)
    pub extra: Attrs,
}

impl Default for KitConfig {
    fn default() -> Self {
        Self {
            width: SVG_SIZE.into(),
            height: SVG_SIZE.into(),
            view_box: SVG_VIEW_BOX.into(),
            extra: Attrs::new(),
        }
    }
}

impl KitConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an attribute bag.
    ///
    /// Missing `width`, `height` or `viewBox` keys fall back to the defaults.
    /// A supplied value is kept as given, even `0` or `""`. Any other key is
    /// kept as an extra container attribute.
    pub fn from_attrs(mut attrs: Attrs) -> Self {
        let defaults = Self::default();
        let mut pick = |key: &str, fallback: AttrValue| attrs.remove(key).unwrap_or(fallback);
        let width = pick("width", defaults.width);
        let height = pick("height", defaults.height);
        let view_box = pick("viewBox", defaults.view_box);
        Self {
            width,
            height,
            view_box,
            extra: attrs,
        }
    }

    /// Set the container width
    pub fn with_width(mut self, width: impl Into<AttrValue>) -> Self {
        self.width = width.into();
        self
    }

    /// Set the container height
    pub fn with_height(mut self, height: impl Into<AttrValue>) -> Self {
        self.height = height.into();
        self
    }

    /// Set the container viewBox
    pub fn with_view_box(mut self, view_box: impl Into<AttrValue>) -> Self {
        self.view_box = view_box.into();
        self
    }

    /// Add an extra container attribute
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.extra.insert(key, value);
        self
    }

    /// Container attributes: `width`, `height`, `viewBox`, then extras.
    pub fn to_attrs(&self) -> Attrs {
        Attrs::new()
            .with("width", self.width.clone())
            .with("height", self.height.clone())
            .with("viewBox", self.view_box.clone())
            .merge(self.extra.clone())
    }
}

/// A render callback with its defaults pre-bound.
///
/// Every `svg_*` method builds its container from the kit's config, then
/// any glyph-specific viewBox, then the per-call attributes, last one winning.
/// Only containers and `rect` read the config; bare shapes and icons do not.
/// Render errors come back exactly as the callback produced them.
#[derive(Debug, Clone)]
pub struct ShapeKit<R> {
    render: R,
    config: KitConfig,
}

/// Bind `render` and `config` once.
pub fn make_shape_kit<R: Render>(render: R, config: KitConfig) -> ShapeKit<R> {
    ShapeKit::new(render, config)
}

impl<R: Render> ShapeKit<R> {
    pub fn new(render: R, config: KitConfig) -> Self {
        debug!(
            width = %config.width,
            height = %config.height,
            view_box = %config.view_box,
            "shape kit created"
        );
        Self { render, config }
    }

    pub fn config(&self) -> &KitConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.render
    }

    /// Container attributes for one call
    fn container_attrs(&self, view_box: Option<&str>, attrs: Attrs) -> Attrs {
        let mut base = self.config.to_attrs();
        if let Some(view_box) = view_box {
            base.insert("viewBox", view_box);
        }
        base.merge(attrs)
    }

    fn contain(
        &self,
        view_box: Option<&str>,
        attrs: Attrs,
        shape: AnyShape,
    ) -> Result<R::Node, R::Error> {
        let child = shapes::render_shape(&self.render, &shape)?;
        shapes::svg(&self.render, self.container_attrs(view_box, attrs), vec![child])
    }

    /// `svg` element with attributes and children
    pub fn svg(&self, attrs: Attrs, children: Vec<R::Node>) -> Result<R::Node, R::Error> {
        shapes::svg(&self.render, self.container_attrs(None, attrs), children)
    }

    /// Rectangle covering the configured size unless overridden
    pub fn rect(&self, attrs: Attrs) -> Result<R::Node, R::Error> {
        let rect = Rect::new(0, 0, self.config.width.clone(), self.config.height.clone())
            .with_attrs(attrs);
        shapes::render_shape(&self.render, &rect)
    }

    /// Rectangle inside a container
    pub fn svg_rect(&self, attrs: Attrs, rect_attrs: Attrs) -> Result<R::Node, R::Error> {
        self.contain(None, attrs, Rect::from_attrs(rect_attrs).into())
    }

    /// Equilateral triangle
    pub fn triangle(&self, attrs: Attrs) -> Result<R::Node, R::Error> {
        shapes::triangle(&self.render, attrs)
    }

    /// Equilateral triangle inside a container
    pub fn svg_triangle(&self, attrs: Attrs, tri_attrs: Attrs) -> Result<R::Node, R::Error> {
        self.contain(None, attrs, Triangle::from_attrs(tri_attrs).into())
    }

    /// Arc path
    pub fn arc(&self, attrs: Attrs) -> Result<R::Node, R::Error> {
        shapes::arc(&self.render, attrs)
    }

    /// Arc inside a container
    pub fn svg_arc(&self, attrs: Attrs, arc_attrs: Attrs) -> Result<R::Node, R::Error> {
        self.contain(None, attrs, Arc::from_attrs(arc_attrs).into())
    }

    /// Polyline through `points`
    pub fn poly_line(&self, points: &[DVec2], attrs: Attrs) -> Result<R::Node, R::Error> {
        shapes::poly_line(&self.render, points, attrs)
    }

    /// Polyline inside a container
    pub fn svg_poly_line(
        &self,
        attrs: Attrs,
        points: &[DVec2],
        pl_attrs: Attrs,
    ) -> Result<R::Node, R::Error> {
        self.contain(None, attrs, PolyLine::from_attrs(points, pl_attrs).into())
    }

    pub fn download_icon(&self) -> Result<R::Node, R::Error> {
        shapes::download_icon(&self.render, Attrs::new())
    }

    pub fn svg_download_icon(&self, attrs: Attrs) -> Result<R::Node, R::Error> {
        self.glyph_in_container(Glyph::Download, attrs)
    }

    pub fn share_icon(&self) -> Result<R::Node, R::Error> {
        shapes::share_icon(&self.render, Attrs::new())
    }

    pub fn svg_share_icon(&self, attrs: Attrs) -> Result<R::Node, R::Error> {
        self.glyph_in_container(Glyph::Share, attrs)
    }

    pub fn checkmark(&self, attrs: Attrs) -> Result<R::Node, R::Error> {
        shapes::checkmark(&self.render, attrs)
    }

    pub fn svg_checkmark(&self, attrs: Attrs) -> Result<R::Node, R::Error> {
        self.glyph_in_container(Glyph::Checkmark, attrs)
    }

    fn glyph_in_container(&self, glyph: Glyph, attrs: Attrs) -> Result<R::Node, R::Error> {
        self.contain(Some(glyph.view_box()), attrs, Icon::new(glyph).into())
    }
}
