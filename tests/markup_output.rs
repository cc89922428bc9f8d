//! Serialized markup for kit-built shapes and icons.

use hypersvg::{Attrs, KitConfig, Markup, MarkupError, ShapeKit, attrs, make_shape_kit};
use insta::assert_snapshot;

fn kit() -> ShapeKit<Markup> {
    make_shape_kit(Markup::new(), KitConfig::default())
}

#[test]
fn rect_in_container() {
    let out = kit()
        .svg_rect(
            Attrs::new(),
            attrs! { "x" => 0, "y" => 0, "width" => 1, "height" => 1, "fill" => "red" },
        )
        .unwrap();
    assert_snapshot!(out, @r#"<svg viewBox="0 0 1 1" width="1em" height="1em"><rect x="0" y="0" width="1" height="1" fill="red"/></svg>"#);
}

#[test]
fn kit_rect_fills_configured_size() {
    let kit = make_shape_kit(Markup::new(), KitConfig::new().with_width(64).with_height(32));
    let out = kit.rect(attrs! { "rx" => 4 }).unwrap();
    assert_snapshot!(out, @r#"<rect x="0" y="0" width="64" height="32" rx="4"/>"#);
}

#[test]
fn standalone_checkmark() {
    let kit = make_shape_kit(Markup::new().standalone(true), KitConfig::default());
    let out = kit.svg_checkmark(Attrs::new()).unwrap();
    assert_snapshot!(out, @r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="1em" height="1em"><path d="M20.285 2l-11.285 11.567-5.286-5.011-3.714 3.716 9 8.728 15-15.285z"/></svg>"#);
}

#[test]
fn download_icon_is_grouped() {
    let out = kit().download_icon().unwrap();
    assert_snapshot!(out, @r#"<g><path d="M395.25,153h-102V0h-153v153h-102l178.5,178.5L395.25,153z M38.25,382.5v51h357v-51H38.25z"/></g>"#);
}

#[test]
fn poly_line_in_container() {
    let points = [
        hypersvg::Point2D::new(0.0, 0.0),
        hypersvg::Point2D::new(50.0, 25.0),
        hypersvg::Point2D::new(100.0, 0.0),
    ];
    let out = kit()
        .svg_poly_line(
            attrs! { "width" => 100, "height" => 50, "viewBox" => "0 0 100 50" },
            &points,
            attrs! { "pathLength" => 1, "fill" => "none" },
        )
        .unwrap();
    assert_snapshot!(out, @r#"<svg viewBox="0 0 100 50" width="100" height="50"><polyline points="0,0 50,25 100,0" pathLength="1" fill="none"/></svg>"#);
}

#[test]
fn collapsed_triangle() {
    let out = kit()
        .triangle(attrs! { "x" => 2, "y" => 3, "scale" => 0, "class" => "dot" })
        .unwrap();
    assert_snapshot!(out, @r#"<polygon points="2,3, 2,3, 2,3" class="dot"/>"#);
}

#[test]
fn arc_style_attribute() {
    let out = kit()
        .arc(attrs! { "strokeWidth" => 0.1, "stroke" => "currentColor" })
        .unwrap();
    assert!(out.starts_with("<path d=\"M "));
    assert!(out.ends_with(r#" style="stroke-width: 0.1" stroke="currentColor"/>"#));
}

#[test]
fn share_icon_accepts_group_attributes() {
    let out = hypersvg::share_icon(&Markup::new(), attrs! { "fill" => "#333" }).unwrap();
    assert!(out.starts_with(r##"<g fill="#333"><path d="M67.5,18c"##));
    assert!(out.ends_with("z\"/></g>"));
}

#[test]
fn markup_errors_reach_the_caller() {
    let err = kit().svg(attrs! { "bad name" => 1 }, vec![]).unwrap_err();
    assert_eq!(
        err,
        MarkupError::InvalidAttributeName {
            tag: "svg".to_string(),
            name: "bad name".to_string(),
        }
    );
}
