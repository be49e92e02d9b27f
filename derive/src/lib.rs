//! Derive macro backing `recordbind`'s `FromRow` and `Record` traits.
//!
//! Use through the `recordbind` crate, not directly.

use proc_macro::TokenStream;

mod record;

/// Derive `FromRow` (always) and `Record` (when `#[record(table = "...")]`
/// is present) for a struct with named fields.
///
/// Field attributes: `#[record(column = "name")]` maps a field to a column;
/// `#[record(key, column = "name")]` marks it as the identifying column.
/// At most one field may carry `key`. Fields without an attribute are
/// invisible to the mapper.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match record::expand(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
