//! SVG shapes and icons over an injected render-element callback.
//!
//! The crate computes the geometry SVG needs (triangle vertices, circular arc
//! path data, point lists) and hands each element to a caller-supplied
//! [`Render`] implementation as a `(tag, attributes, children)` triple. What a
//! "node" is stays up to the caller: a DOM handle, a virtual-DOM value, a
//! string of markup.
//!
//! ```
//! use hypersvg::{KitConfig, Markup, attrs, make_shape_kit};
//!
//! let kit = make_shape_kit(Markup::new(), KitConfig::new().with_width(24).with_height(24));
//! let svg = kit.svg_arc(attrs! { "class" => "spinner" }, attrs! { "endAngle" => 90 }).unwrap();
//! assert!(svg.starts_with(r#"<svg viewBox="0 0 1 1" width="24" height="24" class="spinner">"#));
//! ```

pub mod attrs;
pub mod errors;
pub mod format;
pub mod geometry;
pub mod icons;
pub mod kit;
pub mod log;
pub mod markup;
pub mod render;
pub mod shapes;

pub use attrs::{AttrValue, Attrs};
pub use errors::MarkupError;
pub use geometry::{PathData, Point2D, polar_to_cartesian};
pub use icons::Glyph;
pub use kit::{KitConfig, ShapeKit, make_shape_kit};
pub use markup::Markup;
pub use render::{NodeTree, Render, ShapeNode, from_fn};
pub use shapes::{
    AnyShape, Arc, Icon, PolyLine, Rect, Shape, Triangle, arc, checkmark, download_icon,
    poly_line, rect, share_icon, svg, triangle,
};
