//! Phone Book Example
//!
//! Declares a three-level phone entry hierarchy, fills a book and searches it.
//!
//! Run with: cargo run --example phone_book

use recordbook::logging::init_logging;
use recordbook::{Args, Criteria, RecordCollection, RecordShape};

fn main() -> anyhow::Result<()> {
    init_logging(None)?;

    println!("=== Recordbook Phone Book ===\n");

    // -------------------------------------------------------------------------
    // 1. Declare record shapes
    // -------------------------------------------------------------------------
    let entry = RecordShape::root("PhoneEntry", ["name", "phone"])?;
    let entry_ext = RecordShape::extend(&entry, "PhoneEntryExt", ["email"])?;
    let entry_ext2 = RecordShape::extend(&entry_ext, "PhoneEntryExt2", ["age"])?;

    println!("Schema: {}\n", entry_ext2.schema());

    // -------------------------------------------------------------------------
    // 2. Fill the book
    // -------------------------------------------------------------------------
    let mut book = RecordCollection::new(entry_ext2).with_name("PhoneBookExt2");
    book.add(Args::new().arg("ana").arg(1234).arg("ana@mail.com").arg(24))?;
    book.add(Args::new().arg("ana").arg(2345).arg("ana2@email.com").arg(19))?;
    book.add(Args::new().arg("bob").arg(1234).arg("bob@email.org").arg(21))?;
    book.add(
        Args::new()
            .kwarg("name", "carl")
            .kwarg("phone", 9876)
            .kwarg("email", "carl@carl.carl")
            .kwarg("age", 23),
    )?;

    println!("{book}\n");
    println!("{book:?}\n");

    // -------------------------------------------------------------------------
    // 3. Search
    // -------------------------------------------------------------------------
    println!("{:?}", book.find(&Criteria::new().with("name", "ana"))?);
    println!(
        "{:?}",
        book.find(&Criteria::new().with("name", "ana").with("phone", 1234))?
    );

    // -------------------------------------------------------------------------
    // 4. Rejected construction
    // -------------------------------------------------------------------------
    if let Err(e) = book.add(Args::new().arg("dave").arg(1).kwarg("phone", 2)) {
        println!("\nRejected: {e}");
    }

    Ok(())
}
