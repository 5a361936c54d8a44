use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2, TokenTree};
use quote::{ToTokens, quote};
use syn::ext::IdentExt;
use syn::{
    Attribute, Data, DeriveInput, Error, Field, Fields, Generics, Ident, Index, LitStr, Member, Result, Type,
    parse_macro_input, parse_quote, spanned::Spanned,
};

mod parsed;

use parsed::ParsedRecord;

/// Derives `rxbind::Record` for a struct.
///
/// Fields take part in capture binding through `#[capture(...)]`:
///
/// - `<key> = "<name>"` binds the field under tag key `<key>`. Any identifier
///   can serve as a key and a field may carry several keys. If the field's
///   type is itself a record, its names are registered as `<name>__<inner>`.
/// - `flatten` merges the names of a nested record into the parent without a
///   prefix, unless the field is also tagged under the key being compiled.
///
/// Fields without `#[capture]` are left alone and may have any type. For a
/// generic struct, the derive bounds each captured field type that uses a type
/// parameter by `Capture`. The struct must implement `Default`.
#[proc_macro_derive(Record, attributes(capture))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match ParsedRecord::from_input(&input) {
        Ok(parsed) => parsed.emit().into(),
        Err(err) => err.to_compile_error().into(),
    }
}
