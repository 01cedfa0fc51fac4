//! Record shapes and their attribute schemas
//!
//! A shape names an ordered list of attributes and optionally a parent shape.
//! Its full schema is the parent's schema followed by its own attributes, so
//! attributes accumulate from the most general shape down to the most specific:
//!
//! ```text
//! Entry (name, phone) ──> EntryExt (email) ──> EntryExt2 (age)
//!                                                  │
//!                                  schema: (name, phone, email, age)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use recordbook::schema::RecordShape;
//!
//! let entry = RecordShape::root("PhoneEntry", ["name", "phone"])?;
//! let ext = RecordShape::extend(&entry, "PhoneEntryExt", ["email"])?;
//!
//! assert_eq!(ext.schema().names(), ["name", "phone", "email"]);
//! # Ok::<(), recordbook::Error>(())
//! ```

mod attributes;
mod registry;
mod shape;

pub use attributes::AttributeSchema;
pub use registry::{ShapeDecl, ShapeRegistry};
pub use shape::RecordShape;
