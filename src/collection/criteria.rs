//! Search criteria - conjunctive exact-match filters

use crate::record::Record;
use crate::value::AttrValue;
use crate::Result;

/// Ordered list of `(attribute, value)` equality pairs.
///
/// A record matches when every pair matches; an empty list matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    pairs: Vec<(String, AttrValue)>,
}

impl Criteria {
    /// Criteria matching every record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require attribute `name` to equal `value`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.pairs.push((name.into(), value.into()));
        self
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if there are no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Check `record` against every pair, stopping at the first mismatch.
    ///
    /// # Errors
    ///
    /// Returns `UnknownAttribute` when a pair names an attribute the record
    /// does not have.
    pub fn matches(&self, record: &Record) -> Result<bool> {
        for (name, value) in &self.pairs {
            if record.get(name)? != value {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl<K, V> From<Vec<(K, V)>> for Criteria
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from(pairs: Vec<(K, V)>) -> Self {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
