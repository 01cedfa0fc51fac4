//! Schema Record - one entry conforming to a record shape
//!
//! A record is created in a single construction call that reconciles
//! positional and keyword arguments against the shape's schema. Once built it
//! is locked: values of schema attributes may be overwritten, but the set of
//! attribute names never changes.

mod args;

pub use args::Args;

use std::fmt;
use std::sync::Arc;

use crate::schema::{AttributeSchema, RecordShape};
use crate::value::{AttrValue, Rendered};
use crate::{Error, Result};

/// Lifecycle state of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordState {
    /// Slots are being seeded by the construction call.
    UnderConstruction,
    /// Construction finished; only schema attributes can be written.
    Locked,
}

/// A record whose attributes are exactly its shape's schema.
///
/// Values are stored in schema order, one slot per attribute. `Clone` copies
/// every value recursively, so a cloned record shares no mutable state with
/// the original.
#[derive(Clone)]
pub struct Record {
    shape: Arc<RecordShape>,
    values: Vec<AttrValue>,
    state: RecordState,
}

impl Record {
    /// Construct a record of `shape` from positional and keyword arguments.
    ///
    /// Checks, in order:
    /// 1. no more positional values than schema attributes (`TooManyArguments`)
    /// 2. no attribute bound twice (`DuplicateArgument`)
    /// 3. every schema attribute bound (`MissingAttributes`)
    /// 4. no name outside the schema (`UnexpectedAttributes`)
    ///
    /// # Errors
    ///
    /// Returns the first failed check above.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recordbook::{Args, Record, RecordShape};
    ///
    /// let shape = RecordShape::root("PhoneEntry", ["name", "phone"])?;
    /// let record = Record::construct(&shape, Args::new().arg("ana").kwarg("phone", 1234))?;
    /// assert_eq!(record.get("phone")?, &serde_json::json!(1234));
    /// # Ok::<(), recordbook::Error>(())
    /// ```
    pub fn construct(shape: &Arc<RecordShape>, args: Args) -> Result<Self> {
        let schema = shape.schema();
        let Args {
            positional,
            keywords,
        } = args;

        if positional.len() > schema.len() {
            return Err(Error::TooManyArguments {
                shape: shape.name().to_string(),
                given: positional.len(),
                max: schema.len(),
            });
        }

        let mut slots: Vec<Option<AttrValue>> = vec![None; schema.len()];
        for (slot, value) in positional.into_iter().enumerate() {
            slots[slot] = Some(value);
        }

        let mut duplicates: Vec<usize> = Vec::new();
        let mut unexpected: Vec<String> = Vec::new();
        for (name, value) in keywords {
            match schema.position(&name) {
                Some(slot) if slots[slot].is_some() => {
                    if !duplicates.contains(&slot) {
                        duplicates.push(slot);
                    }
                }
                Some(slot) => slots[slot] = Some(value),
                None => {
                    if !unexpected.contains(&name) {
                        unexpected.push(name);
                    }
                }
            }
        }

        if !duplicates.is_empty() {
            duplicates.sort_unstable();
            return Err(Error::DuplicateArgument {
                shape: shape.name().to_string(),
                names: names_at(schema, &duplicates),
            });
        }

        let missing: Vec<usize> = slots
            .iter()
            .enumerate()
            .filter_map(|(slot, value)| value.is_none().then_some(slot))
            .collect();
        if !missing.is_empty() {
            return Err(Error::MissingAttributes {
                shape: shape.name().to_string(),
                names: names_at(schema, &missing),
            });
        }

        if !unexpected.is_empty() {
            return Err(Error::UnexpectedAttributes {
                shape: shape.name().to_string(),
                names: unexpected,
            });
        }

        let mut record = Self {
            shape: Arc::clone(shape),
            values: Vec::with_capacity(slots.len()),
            state: RecordState::UnderConstruction,
        };
        record.values.extend(slots.into_iter().flatten());
        record.state = RecordState::Locked;
        Ok(record)
    }

    /// Get the record's shape.
    #[must_use]
    pub const fn shape(&self) -> &Arc<RecordShape> {
        &self.shape
    }

    /// Get the shape name.
    #[must_use]
    pub fn shape_name(&self) -> &str {
        self.shape.name()
    }

    /// Get the attribute schema.
    #[must_use]
    pub fn schema(&self) -> &AttributeSchema {
        self.shape.schema()
    }

    /// Get the lifecycle state.
    #[must_use]
    pub const fn state(&self) -> RecordState {
        self.state
    }

    /// Check if `name` is an attribute of this record.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.schema().contains(name)
    }

    fn slot(&self, name: &str) -> Result<usize> {
        self.schema()
            .position(name)
            .ok_or_else(|| Error::UnknownAttribute {
                shape: self.shape_name().to_string(),
                name: name.to_string(),
            })
    }

    /// Get the value of attribute `name`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownAttribute` if `name` is not in the schema.
    pub fn get(&self, name: &str) -> Result<&AttrValue> {
        let slot = self.slot(name)?;
        Ok(&self.values[slot])
    }

    /// Get a mutable reference to the value of attribute `name`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownAttribute` if `name` is not in the schema.
    pub fn get_mut(&mut self, name: &str) -> Result<&mut AttrValue> {
        let slot = self.slot(name)?;
        Ok(&mut self.values[slot])
    }

    /// Overwrite the value of attribute `name`.
    ///
    /// # Errors
    ///
    /// Returns `ForbiddenAttributeSet` if `name` is not in the schema; the
    /// record is left unchanged.
    pub fn set(&mut self, name: &str, value: impl Into<AttrValue>) -> Result<()> {
        let Some(slot) = self.schema().position(name) else {
            return Err(Error::ForbiddenAttributeSet {
                shape: self.shape_name().to_string(),
                name: name.to_string(),
            });
        };
        self.values[slot] = value.into();
        Ok(())
    }

    /// Iterate over `(name, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.schema().iter().zip(self.values.iter())
    }

    /// Render the record as a JSON object, keys in schema order.
    #[must_use]
    pub fn to_json(&self) -> AttrValue {
        AttrValue::Object(
            self.iter()
                .map(|(name, value)| (name.to_string(), value.clone()))
                .collect(),
        )
    }
}

fn names_at(schema: &AttributeSchema, slots: &[usize]) -> Vec<String> {
    slots
        .iter()
        .map(|&slot| schema.names()[slot].clone())
        .collect()
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.shape_name() == other.shape_name()
            && self.schema() == other.schema()
            && self.values == other.values
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{name}: {}", Rendered(value))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.shape_name())?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}={}", Rendered(value))?;
        }
        f.write_str(")")
    }
}
