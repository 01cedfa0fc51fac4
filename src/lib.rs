//! # recordbook: Schema-Composed Records and Collections
//!
//! Record shapes declare attributes incrementally on top of a parent shape;
//! the full attribute schema is composed once, most general shape first.
//! Records are built in a single construction call that must bind every
//! schema attribute exactly once, and are locked afterwards: values can be
//! overwritten, attribute names can never be added.
//!
//! A [`RecordCollection`] is bound to one shape and offers validated
//! insertion, conjunctive exact-match search, positional access and
//! independent deep copies.
//!
//! ## Example Usage
//!
//! ```rust
//! use recordbook::{Args, Criteria, RecordCollection, RecordShape};
//!
//! let entry = RecordShape::root("PhoneEntry", ["name", "phone"])?;
//! let entry_ext = RecordShape::extend(&entry, "PhoneEntryExt", ["email"])?;
//!
//! let mut book = RecordCollection::new(entry_ext).with_name("PhoneBook");
//! book.add(Args::new().arg("ana").arg(1234).arg("ana@mail.com"))?;
//! book.add(
//!     Args::new()
//!         .kwarg("name", "carl")
//!         .kwarg("phone", 9876)
//!         .kwarg("email", "carl@carl.carl"),
//! )?;
//!
//! let found = book.find(&Criteria::new().with("name", "carl"))?;
//! assert_eq!(found.len(), 1);
//! assert_eq!(book.get(0)?.get("email")?, "ana@mail.com");
//! # Ok::<(), recordbook::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod collection;
pub mod error;
pub mod logging;
pub mod record;
pub mod schema;
pub mod value;

pub use collection::{Criteria, RecordCollection};
pub use error::{Error, ErrorKind, Result};
pub use record::{Args, Record, RecordState};
pub use schema::{AttributeSchema, RecordShape, ShapeDecl, ShapeRegistry};
pub use value::AttrValue;
