//! Parse emitted path data and point lists back into numbers and check them
//! against independently computed geometry.

use std::convert::Infallible;

use hypersvg::{
    AttrValue, Attrs, KitConfig, NodeTree, Point2D, ShapeNode, attrs, from_fn, make_shape_kit,
    polar_to_cartesian,
};
use regex_lite::Regex;

struct ParsedArc {
    start: Point2D,
    rx: f64,
    ry: f64,
    large_arc: bool,
    end: Point2D,
}

fn parse_arc(d: &str) -> ParsedArc {
    let re = Regex::new(r"^M (\S+) (\S+) A (\S+) (\S+) 0 ([01]) 0 (\S+) (\S+)$").unwrap();
    let caps = re
        .captures(d)
        .unwrap_or_else(|| panic!("not a single-arc path: {d}"));
    let num = |i: usize| -> f64 { caps[i].parse().unwrap() };
    ParsedArc {
        start: Point2D::new(num(1), num(2)),
        rx: num(3),
        ry: num(4),
        large_arc: &caps[5] == "1",
        end: Point2D::new(num(6), num(7)),
    }
}

fn d_of(node: &ShapeNode) -> &str {
    node.attrs
        .get("d")
        .and_then(AttrValue::as_text)
        .expect("path data")
}

#[test]
fn arc_path_round_trips() {
    let cases = [
        (0.5, 0.5, 0.5, 0.0, 360.0, 0.0),
        (0.0, 0.0, 10.0, 0.0, 90.0, 0.0),
        (0.0, 0.0, 10.0, 0.0, 270.0, 0.0),
        (3.0, -2.0, 7.5, 45.0, 200.0, 1.0),
        (0.5, 0.5, 0.5, 300.0, 30.0, 0.1),
    ];

    for (x, y, radius, start, end, stroke) in cases {
        let node = hypersvg::arc(
            &NodeTree,
            attrs! {
                "x" => x,
                "y" => y,
                "radius" => radius,
                "startAngle" => start,
                "endAngle" => end,
                "strokeWidth" => stroke,
            },
        )
        .unwrap();
        let arc = parse_arc(d_of(&node));

        let r = radius - stroke / 2.0;
        let center = Point2D::new(x, y);
        assert_eq!(arc.start, polar_to_cartesian(r, end) + center);
        assert_eq!(arc.end, polar_to_cartesian(r, start) + center);
        assert_eq!(arc.rx, r);
        assert_eq!(arc.ry, r);
        assert_eq!(arc.large_arc, end - start > 180.0, "case {start}..{end}");
    }
}

#[test]
fn large_arc_flag_threshold() {
    let flag = |end: f64| {
        let node = hypersvg::arc(&NodeTree, attrs! { "radius" => 10, "endAngle" => end }).unwrap();
        parse_arc(d_of(&node)).large_arc
    };
    assert!(!flag(90.0));
    assert!(!flag(180.0));
    assert!(flag(180.5));
    assert!(flag(270.0));
}

#[test]
fn triangle_points_round_trip() {
    let node = hypersvg::triangle(
        &NodeTree,
        attrs! { "x" => 0, "y" => 0, "angle" => 0, "scale" => 1 },
    )
    .unwrap();
    let points: Vec<Point2D> = node
        .attrs
        .get("points")
        .and_then(AttrValue::as_text)
        .unwrap()
        .split(", ")
        .map(|pair| {
            let (x, y) = pair.split_once(',').unwrap();
            Point2D::new(x.parse().unwrap(), y.parse().unwrap())
        })
        .collect();

    assert_eq!(points.len(), 3);
    for p in &points {
        assert!((p.length() - 0.5).abs() < 1e-12);
    }
    for i in 0..3 {
        let a = points[i];
        let b = points[(i + 1) % 3];
        let cos = a.dot(b) / (a.length() * b.length());
        assert!((cos - (-0.5)).abs() < 1e-12, "vertices {i} are not 120 degrees apart");
    }
}

/// A stand-in for a virtual DOM: nodes are opaque to the kit.
#[derive(Debug, PartialEq)]
enum VNode {
    Element {
        tag: String,
        attr_count: usize,
        children: Vec<VNode>,
    },
}

#[test]
fn custom_nodes_pass_through_untouched() {
    let render = from_fn(|tag: &str, attrs: Attrs, children: Vec<VNode>| {
        Ok::<_, Infallible>(VNode::Element {
            tag: tag.to_string(),
            attr_count: attrs.len(),
            children,
        })
    });
    let kit = make_shape_kit(render, KitConfig::default());

    let check = kit.checkmark(Attrs::new()).unwrap();
    let tri = kit.triangle(Attrs::new()).unwrap();
    let svg = kit.svg(attrs! { "class" => "pair" }, vec![check, tri]).unwrap();

    assert_eq!(
        svg,
        VNode::Element {
            tag: "svg".to_string(),
            attr_count: 4,
            children: vec![
                VNode::Element {
                    tag: "path".to_string(),
                    attr_count: 1,
                    children: vec![],
                },
                VNode::Element {
                    tag: "polygon".to_string(),
                    attr_count: 1,
                    children: vec![],
                },
            ],
        }
    );
}

#[test]
fn repeated_calls_are_bit_identical() {
    let kit = make_shape_kit(NodeTree, KitConfig::default());
    let arc_attrs = || attrs! { "startAngle" => 33.3, "endAngle" => 222.2, "strokeWidth" => 0.05 };
    assert_eq!(
        kit.svg_arc(Attrs::new(), arc_attrs()).unwrap(),
        kit.svg_arc(Attrs::new(), arc_attrs()).unwrap()
    );
    assert_eq!(
        kit.triangle(attrs! { "angle" => 71 }).unwrap(),
        kit.triangle(attrs! { "angle" => 71 }).unwrap()
    );
}
