//! Construction arguments for records

use crate::value::AttrValue;

/// Positional and keyword values handed to [`Record::construct`](super::Record::construct).
///
/// Positional values bind to schema attributes in schema order; keyword
/// values bind by name.
///
/// ```rust
/// use recordbook::Args;
///
/// let args = Args::new().arg("ana").kwarg("phone", 1234);
/// assert_eq!(args.positional_len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    pub(crate) positional: Vec<AttrValue>,
    pub(crate) keywords: Vec<(String, AttrValue)>,
}

impl Args {
    /// Create an empty argument list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arguments made only of positional values.
    #[must_use]
    pub fn positional<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<AttrValue>,
    {
        Self {
            positional: values.into_iter().map(Into::into).collect(),
            keywords: Vec::new(),
        }
    }

    /// Arguments made only of keyword values.
    #[must_use]
    pub fn keywords<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttrValue>,
    {
        Self {
            positional: Vec::new(),
            keywords: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Append a positional value.
    #[must_use]
    pub fn arg(mut self, value: impl Into<AttrValue>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Append a keyword value.
    #[must_use]
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.keywords.push((name.into(), value.into()));
        self
    }

    /// Number of positional values.
    #[must_use]
    pub fn positional_len(&self) -> usize {
        self.positional.len()
    }

    /// Number of keyword values.
    #[must_use]
    pub fn keyword_len(&self) -> usize {
        self.keywords.len()
    }
}
