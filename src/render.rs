//! The render-element callback and the abstract node tree.
//!
//! Shape generators never build concrete UI nodes themselves. They describe
//! an element as a tag, an attribute bag and children, and hand that to a
//! caller-supplied [`Render`] implementation.

use std::convert::Infallible;
use std::marker::PhantomData;

use crate::attrs::Attrs;

/// Turns a `(tag, attributes, children)` triple into a concrete node.
///
/// The returned node is opaque to this crate; it is only ever passed back in
/// as a child of an enclosing element. Errors are propagated to the caller
/// untouched.
pub trait Render {
    type Node;
    type Error;

    fn element(
        &self,
        tag: &str,
        attrs: Attrs,
        children: Vec<Self::Node>,
    ) -> Result<Self::Node, Self::Error>;
}

impl<R: Render + ?Sized> Render for &R {
    type Node = R::Node;
    type Error = R::Error;

    fn element(
        &self,
        tag: &str,
        attrs: Attrs,
        children: Vec<Self::Node>,
    ) -> Result<Self::Node, Self::Error> {
        (**self).element(tag, attrs, children)
    }
}

/// Adapter returned by [`from_fn`]
pub struct FromFn<F, N, E> {
    f: F,
    _marker: PhantomData<fn() -> (N, E)>,
}

/// Use a closure as a render callback.
///
/// ```
/// use hypersvg::render::{Render, from_fn};
///
/// let count = from_fn(|tag: &str, _attrs, children: Vec<usize>| {
///     Ok::<_, std::convert::Infallible>(children.iter().sum::<usize>() + usize::from(!tag.is_empty()))
/// });
/// let leaf = count.element("rect", Default::default(), vec![]).unwrap();
/// assert_eq!(leaf, 1);
/// ```
pub fn from_fn<F, N, E>(f: F) -> FromFn<F, N, E>
where
    F: Fn(&str, Attrs, Vec<N>) -> Result<N, E>,
{
    FromFn {
        f,
        _marker: PhantomData,
    }
}

impl<F, N, E> Render for FromFn<F, N, E>
where
    F: Fn(&str, Attrs, Vec<N>) -> Result<N, E>,
{
    type Node = N;
    type Error = E;

    fn element(&self, tag: &str, attrs: Attrs, children: Vec<N>) -> Result<N, E> {
        (self.f)(tag, attrs, children)
    }
}

/// Abstract element description produced by the shape generators
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeNode {
    pub tag: String,
    pub attrs: Attrs,
    pub children: Vec<ShapeNode>,
}

impl ShapeNode {
    pub fn new(tag: impl Into<String>, attrs: Attrs) -> Self {
        Self {
            tag: tag.into(),
            attrs,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<ShapeNode>) -> Self {
        self.children = children;
        self
    }

    /// Render this node through `render`, children first.
    pub fn render<R: Render + ?Sized>(self, render: &R) -> Result<R::Node, R::Error> {
        let children = self
            .children
            .into_iter()
            .map(|child| child.render(render))
            .collect::<Result<Vec<_>, _>>()?;
        render.element(&self.tag, self.attrs, children)
    }
}

/// Identity renderer: produces [`ShapeNode`] trees.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeTree;

impl Render for NodeTree {
    type Node = ShapeNode;
    type Error = Infallible;

    fn element(
        &self,
        tag: &str,
        attrs: Attrs,
        children: Vec<ShapeNode>,
    ) -> Result<ShapeNode, Infallible> {
        Ok(ShapeNode::new(tag, attrs).with_children(children))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;
    use std::cell::RefCell;

    #[test]
    fn node_tree_is_identity() {
        let node = ShapeNode::new("g", attrs! { "class" => "icon" })
            .with_children(vec![ShapeNode::new("path", attrs! { "d" => "M 0 0" })]);
        let rendered = node.clone().render(&NodeTree).unwrap();
        assert_eq!(rendered, node);
    }

    #[test]
    fn children_render_before_parent() {
        let order = RefCell::new(Vec::new());
        let render = from_fn(|tag: &str, _attrs, _children: Vec<()>| {
            order.borrow_mut().push(tag.to_string());
            Ok::<_, Infallible>(())
        });

        ShapeNode::new("svg", Attrs::new())
            .with_children(vec![
                ShapeNode::new("rect", Attrs::new()),
                ShapeNode::new("path", Attrs::new()),
            ])
            .render(&render)
            .unwrap();

        assert_eq!(*order.borrow(), ["rect", "path", "svg"]);
    }

    #[test]
    fn render_errors_propagate() {
        let render = from_fn(|tag: &str, _attrs, _children: Vec<()>| {
            if tag == "path" {
                Err(format!("refusing {tag}"))
            } else {
                Ok(())
            }
        });

        let err = ShapeNode::new("g", Attrs::new())
            .with_children(vec![ShapeNode::new("path", Attrs::new())])
            .render(&render)
            .unwrap_err();
        assert_eq!(err, "refusing path");
    }
}
