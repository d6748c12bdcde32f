//! Body style configuration: an insertion-ordered property map serialized
//! into a CSS declaration block.
//!
//! Property names use the camelCase convention of the component's input
//! surface (`backgroundColor`, `wordWrap`) and are converted to kebab-case
//! when the map is serialized to CSS.

/// Insertion-ordered style property map.
///
/// `set` overwrites the value of an existing property in place, so layering
/// maps with [`merge`](StyleMap::merge) gives later-wins semantics while the
/// serialized declaration order stays stable. Stable order keeps the
/// generated document byte-identical across calls with identical inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StyleMap {
    properties: Vec<(String, String)>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, overwriting in place when it already exists.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.properties.iter_mut().find(|(k, _)| *k == property) {
            Some(entry) => entry.1 = value,
            None => self.properties.push((property, value)),
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(k, _)| k == property)
            .map(|(_, v)| v.as_str())
    }

    /// Overlay every property of `other` onto this map. Properties in
    /// `other` win on conflict.
    pub fn merge(&mut self, other: &StyleMap) {
        for (property, value) in &other.properties {
            self.set(property.clone(), value.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize into CSS declarations, one per line, camelCase property
    /// names converted to kebab-case.
    pub fn css(&self) -> String {
        self.properties
            .iter()
            .map(|(k, v)| format!("{}:{};", to_kebab_case(k), v))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = StyleMap::new();
        for (k, v) in iter {
            map.set(k, v);
        }
        map
    }
}

/// Convert camelCase to kebab-case for CSS serialization.
fn to_kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
