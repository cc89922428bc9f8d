use hypersvg::{Attrs, KitConfig, Markup, attrs, make_shape_kit};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let size = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(48.0);

    let kit = make_shape_kit(
        Markup::new().standalone(true),
        KitConfig::new().with_width(size).with_height(size),
    );

    let sheet = [
        kit.svg_download_icon(Attrs::new()),
        kit.svg_share_icon(Attrs::new()),
        kit.svg_checkmark(attrs! { "fill" => "green" }),
        kit.svg_triangle(Attrs::new(), attrs! { "angle" => -90, "fill" => "orange" }),
        kit.svg_arc(
            attrs! { "fill" => "none", "stroke" => "black" },
            attrs! { "startAngle" => 45, "endAngle" => 315, "strokeWidth" => 0.1 },
        ),
    ];

    for svg in sheet {
        match svg {
            Ok(svg) => println!("{}", svg),
            Err(e) => eprintln!("Error: {:?}", miette::Report::new(e)),
        }
    }
}
