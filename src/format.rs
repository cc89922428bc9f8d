//! Number formatting for attribute values.
//!
//! Attribute values are written the way a JavaScript host would stringify
//! them: shortest round-trip decimal, no trailing `.0` on whole numbers,
//! `NaN`/`Infinity` for non-finite values.

/// Format a number with JavaScript `Number#toString` semantics.
///
/// Negative zero is written as `0`.
pub fn js_number(v: f64) -> String {
    let mut buf = ryu_js::Buffer::new();
    js_number_with(v, &mut buf).to_string()
}

/// Same as [`js_number`], reusing a caller-owned buffer.
pub fn js_number_with(mut v: f64, buf: &mut ryu_js::Buffer) -> &str {
    if v == 0.0 {
        // Covers -0.0 as well
        v = 0.0;
    }
    buf.format(v)
}

/// Append a point as `x,y`.
pub fn push_pair(out: &mut String, x: f64, y: f64, buf: &mut ryu_js::Buffer) {
    out.push_str(js_number_with(x, buf));
    out.push(',');
    out.push_str(js_number_with(y, buf));
}
