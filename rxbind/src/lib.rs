//! Bind named regex capture groups into struct fields.
//!
//! Fields opt in with a tag attribute whose key is chosen by the caller and
//! whose value names the capture group:
//!
//! ```
//! use rxbind::Record;
//!
//! #[derive(Debug, Default, PartialEq, Record)]
//! struct Pair {
//!     #[capture(rx = "k")]
//!     key: String,
//!     #[capture(rx = "v")]
//!     value: String,
//! }
//!
//! let re = rxbind::must_compile::<Pair>(r"^(?P<k>.*)=(?P<v>.*)$", "rx");
//! let pair = re.find("a=b").unwrap();
//! assert_eq!(pair, Pair { key: "a".into(), value: "b".into() });
//! ```
//!
//! A tagged field whose type is itself a record contributes its own names
//! prefixed with the field's tag and [`SEPARATOR`] (`address__city`). A field
//! marked `#[capture(flatten)]` contributes them unprefixed. `Option` fields are
//! allocated on first write.

extern crate self as rxbind;

pub mod bind;
pub mod builder;
pub mod errors;
pub mod matcher;
pub mod path;
pub mod populate;
pub mod record;
pub mod registry;
pub mod resolve;

pub use bind::Binding;
pub use builder::{DEFAULT_TAG, MatcherBuilder};
pub use errors::{Error, Result};
pub use matcher::{Matcher, Records, compile, must_compile};
pub use path::{FieldPath, PathError, Step};
pub use record::{Allocate, Assign, Capture, FieldDecl, Fields, Record, Schema, Shape, Slot};
pub use resolve::{FieldMap, SEPARATOR};
pub use rxbind_macros::Record;

// Re-exported so downstream crates can name the engine without a direct dependency.
pub use regex;
