//! Fixed icon glyphs.

/// Download arrow over a tray, drawn in a 433.5 unit box
pub const DOWNLOAD_PATH: &str =
    "M395.25,153h-102V0h-153v153h-102l178.5,178.5L395.25,153z M38.25,382.5v51h357v-51H38.25z";

/// Three connected nodes, drawn in a 96 unit box
pub const SHARE_PATH: &str = "M67.5,18c-5.1,0-9.3,4.2-9.3,9.3c0,0.5,0.1,1.1,0.2,1.6l-23,12.9c-1.7-1.8-4.1-3-6.8-3c-5.1,0-9.3,4.1-9.3,9.3c0,5.1,4.1,9.3,9.3,9.3c2.7,0,5.2-1.2,6.9-3.1l22.8,13.4c0,0.4-0.1,0.7-0.1,1.1c0,5.1,4.1,9.3,9.3,9.3c5.1,0,9.3-4.1,9.3-9.3c0-5.1-4.1-9.3-9.3-9.3c-2.8,0-5.4,1.3-7.1,3.3L37.7,49.4c0.1-0.4,0.1-0.9,0.1-1.3c0-0.5,0-1-0.1-1.5l23.1-13c1.7,1.8,4.1,3,6.8,3c5.1,0,9.3-4.1,9.3-9.3C76.8,22.2,72.6,18,67.5,18L67.5,18z";

/// Check mark, drawn in a 24 unit box
pub const CHECKMARK_PATH: &str = "M20.285 2l-11.285 11.567-5.286-5.011-3.714 3.716 9 8.728 15-15.285z";

/// The built-in glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Download,
    Share,
    Checkmark,
}

impl Glyph {
    pub fn path_data(self) -> &'static str {
        match self {
            Glyph::Download => DOWNLOAD_PATH,
            Glyph::Share => SHARE_PATH,
            Glyph::Checkmark => CHECKMARK_PATH,
        }
    }

    /// viewBox that frames the glyph's path data
    pub fn view_box(self) -> &'static str {
        match self {
            Glyph::Download => "0 0 433.5 433.5",
            Glyph::Share => "0 0 96 96",
            Glyph::Checkmark => "0 0 24 24",
        }
    }

    /// Whether the path is wrapped in a `g` group
    pub fn is_grouped(self) -> bool {
        !matches!(self, Glyph::Checkmark)
    }
}
