//! Record Collection - ordered, homogeneous store of records
//!
//! A collection is bound to one [`RecordShape`] and only grows by appending.
//! Searching is a linear scan with exact value equality.
//!
//! ## Usage
//!
//! ```rust
//! use recordbook::{Args, Criteria, RecordCollection, RecordShape};
//!
//! let shape = RecordShape::root("PhoneEntry", ["name", "phone"])?;
//! let mut book = RecordCollection::new(shape).with_name("PhoneBook");
//!
//! book.add(Args::new().arg("ana").arg(1234))?;
//! book.add(Args::new().arg("bob").arg(5678))?;
//!
//! let matches = book.find(&Criteria::new().with("name", "ana"))?;
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].get("phone")?, &serde_json::json!(1234));
//! # Ok::<(), recordbook::Error>(())
//! ```

mod criteria;

pub use criteria::Criteria;

use std::fmt;
use std::sync::Arc;

use crate::record::{Args, Record};
use crate::schema::{AttributeSchema, RecordShape};
use crate::{Error, Result};

const DEFAULT_NAME: &str = "RecordCollection";
const EMPTY_MESSAGE: &str = "Your book has no entries yet";
/// Width of `--- Entry # ---` without the index digits.
const HEADER_WIDTH: usize = 15;

/// Ordered collection of records sharing one shape.
///
/// ## Design
///
/// Entries live in a vector in insertion order. Records are constructed by
/// the collection itself, so every entry satisfies the bound shape's schema.
/// `copy` (and `Clone`) duplicate every record value recursively; the shape is
/// immutable and stays shared.
#[derive(Clone)]
pub struct RecordCollection {
    name: String,
    shape: Arc<RecordShape>,
    entries: Vec<Record>,
}

impl RecordCollection {
    /// Create an empty collection bound to `shape`.
    #[must_use]
    pub fn new(shape: Arc<RecordShape>) -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            shape,
            entries: Vec::new(),
        }
    }

    /// Set the name shown by the debug form.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Get the collection name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the bound record shape.
    #[must_use]
    pub const fn shape(&self) -> &Arc<RecordShape> {
        &self.shape
    }

    /// Get the bound shape's attribute schema.
    #[must_use]
    pub fn schema(&self) -> &AttributeSchema {
        self.shape.schema()
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.entries.iter()
    }

    /// Construct a record of the bound shape and append it.
    ///
    /// # Errors
    ///
    /// Propagates any construction error from [`Record::construct`]. The
    /// collection is unchanged on error.
    pub fn add(&mut self, args: Args) -> Result<&Record> {
        let record = Record::construct(&self.shape, args)?;
        self.entries.push(record);
        tracing::debug!(
            collection = %self.name,
            shape = self.shape.name(),
            len = self.entries.len(),
            "appended record"
        );
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Records matching every pair of `criteria`, in insertion order.
    ///
    /// Empty criteria return every record; no match returns an empty vector.
    ///
    /// # Errors
    ///
    /// Returns `UnknownAttribute` if a criterion names an attribute outside
    /// the schema (and the collection is not empty).
    pub fn find(&self, criteria: &Criteria) -> Result<Vec<&Record>> {
        let mut matches = Vec::new();
        for record in &self.entries {
            if criteria.matches(record)? {
                matches.push(record);
            }
        }
        tracing::trace!(
            collection = %self.name,
            criteria = criteria.len(),
            matches = matches.len(),
            "searched collection"
        );
        Ok(matches)
    }

    /// Independent duplicate of this collection.
    ///
    /// Every record and every attribute value is copied, so mutating either
    /// collection never affects the other.
    #[must_use]
    pub fn copy(&self) -> Self {
        tracing::debug!(collection = %self.name, len = self.entries.len(), "copied collection");
        self.clone()
    }

    /// Get the record at `index` (0 is the first added).
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&Record> {
        let len = self.entries.len();
        self.entries
            .get(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Get a mutable reference to the record at `index`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Record> {
        let len = self.entries.len();
        self.entries
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }
}

impl PartialEq for RecordCollection {
    fn eq(&self, other: &Self) -> bool {
        self.shape.name() == other.shape.name() && self.entries == other.entries
    }
}

impl<'a> IntoIterator for &'a RecordCollection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for RecordCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return f.write_str(EMPTY_MESSAGE);
        }

        let width = self.entries.len().to_string().len();
        for (ix, entry) in self.entries.iter().enumerate() {
            write!(f, "--- Entry #{:0width$} ---\n{entry}\n\n", ix + 1)?;
        }
        f.write_str(&"-".repeat(HEADER_WIDTH + width))
    }
}

impl fmt::Debug for RecordCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return write!(f, "{} (Empty)", self.name);
        }
        write!(
            f,
            "{} ({} entries of type '{}' with attributes {})",
            self.name,
            self.entries.len(),
            self.shape.name(),
            self.shape.schema()
        )
    }
}
