//! Attribute values
//!
//! Records accept any value. `serde_json::Value` gives structural equality and
//! a recursive `Clone`, so duplicating a record never shares nested state.

use std::fmt;

/// Value stored in a record attribute.
pub type AttrValue = serde_json::Value;

/// Display adapter used by the textual record and collection forms.
///
/// Strings render bare (`ana`), everything else as compact JSON.
pub struct Rendered<'a>(pub &'a AttrValue);

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            AttrValue::String(s) => f.write_str(s),
            other => write!(f, "{other}"),
        }
    }
}
