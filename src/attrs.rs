//! Attribute bags passed to and produced by shape generators.

use std::fmt;

use indexmap::IndexMap;

use crate::format::js_number;

/// A single attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Number(f64),
    Text(String),
    /// Nested mapping, e.g. an inline style object
    Map(Attrs),
}

impl AttrValue {
    /// Numeric view of this value.
    ///
    /// Numeric text is parsed; anything else coerces to NaN instead of failing.
    pub fn as_number(&self) -> f64 {
        match self {
            AttrValue::Number(n) => *n,
            AttrValue::Text(s) => s.trim().parse().unwrap_or(f64::NAN),
            AttrValue::Map(_) => f64::NAN,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Number(n) => f.write_str(&js_number(*n)),
            AttrValue::Text(s) => f.write_str(s),
            AttrValue::Map(m) => {
                for (i, (k, v)) in m.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                Ok(())
            }
        }
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        AttrValue::Number(n)
    }
}

impl From<f32> for AttrValue {
    fn from(n: f32) -> Self {
        AttrValue::Number(n as f64)
    }
}

impl From<i32> for AttrValue {
    fn from(n: i32) -> Self {
        AttrValue::Number(n as f64)
    }
}

impl From<u32> for AttrValue {
    fn from(n: u32) -> Self {
        AttrValue::Number(n as f64)
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

impl From<Attrs> for AttrValue {
    fn from(m: Attrs) -> Self {
        AttrValue::Map(m)
    }
}

/// Insertion-ordered attribute map.
///
/// Overriding an existing key replaces its value in place, so the first
/// insertion decides where a key appears in serialized output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attrs {
    entries: IndexMap<String, AttrValue>,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Insert only if `key` is not present yet.
    pub fn insert_default(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.entries.entry(key.into()).or_insert_with(|| value.into());
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove `key`, keeping the relative order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        self.entries.shift_remove(key)
    }

    /// Pull a numeric field out of the bag, falling back to `default` when absent.
    pub fn take_number(&mut self, key: &str, default: f64) -> f64 {
        self.remove(key).map_or(default, |v| v.as_number())
    }

    /// Layer `overrides` on top of `self`; keys in `overrides` win.
    pub fn merge(mut self, overrides: Attrs) -> Attrs {
        for (k, v) in overrides.entries {
            self.entries.insert(k, v);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attrs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attrs::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}

impl IntoIterator for Attrs {
    type Item = (String, AttrValue);
    type IntoIter = indexmap::map::IntoIter<String, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Build an [`Attrs`] from `key => value` pairs.
///
/// ```
/// use hypersvg::attrs;
///
/// let a = attrs! { "width" => 10, "fill" => "red" };
/// assert_eq!(a.len(), 2);
/// ```
#[macro_export]
macro_rules! attrs {
    () => { $crate::Attrs::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut attrs = $crate::Attrs::new();
        $( attrs.insert($key, $value); )+
        attrs
    }};
}
