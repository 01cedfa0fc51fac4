//! Attribute Schema - ordered attribute names of a record shape

use std::fmt;

/// Ordered, duplicate-free list of the attribute names legal for a shape.
///
/// Order is significant: positional construction binds values in this order
/// and the textual forms list attributes in this order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AttributeSchema {
    names: Vec<String>,
}

impl AttributeSchema {
    /// Create an empty schema.
    #[must_use]
    pub const fn new() -> Self {
        Self { names: Vec::new() }
    }

    pub(crate) fn push(&mut self, name: String) {
        self.names.push(name);
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the schema declares no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Check if `name` is part of the schema.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Slot of `name` in schema order.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Attribute names in schema order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Iterate over attribute names in schema order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl fmt::Display for AttributeSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.names.join(", "))
    }
}

impl<'a> IntoIterator for &'a AttributeSchema {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter().map(String::as_str as fn(&'a String) -> &'a str)
    }
}
