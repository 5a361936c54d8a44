//! Record metadata emitted by `#[derive(Record)]`.
//!
//! A record describes itself twice: statically through [`Record::schema`], which
//! the resolver walks once per tag key, and dynamically through
//! [`Fields::field_mut`], which the deserializer uses to reach a field of a live
//! instance by its declaration index.

use std::sync::Arc;

/// Plain text assignment into a scalar field.
///
/// Implement this for your own types to make them capture targets, then use
/// [`scalar!`](crate::scalar) to register them as scalars. A scalar is written
/// as a whole and never walked by the resolver, so a type is either a scalar or
/// a derived [`Record`], not both.
pub trait Assign {
    fn assign(&mut self, text: &str);
}

impl Assign for String {
    fn assign(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

impl Assign for Box<str> {
    fn assign(&mut self, text: &str) {
        *self = Box::from(text);
    }
}

impl Assign for Arc<str> {
    fn assign(&mut self, text: &str) {
        *self = Arc::from(text);
    }
}

/// Static description of a field type.
#[derive(Debug, Clone)]
pub enum Shape {
    /// Written through [`Assign`].
    Scalar,
    /// A nested record, walked by the resolver.
    Record(fn() -> Schema),
    /// An `Option` around another shape, allocated on first write.
    Optional(Box<Shape>),
    /// A field without `#[capture]`. Never bound, and its type need not implement [`Capture`].
    Ignored,
}

impl Shape {
    /// Shape of a field left out of binding; usable as a `fn() -> Shape`.
    pub fn ignored() -> Shape {
        Shape::Ignored
    }
}

/// Mutable view of one field of a live instance.
pub enum Slot<'a> {
    Text(&'a mut dyn Assign),
    Record(&'a mut dyn Fields),
    Optional(&'a mut dyn Allocate),
}

impl Slot<'_> {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Slot::Text(_) => "scalar",
            Slot::Record(_) => "record",
            Slot::Optional(_) => "optional",
        }
    }
}

/// Ensure-present access to an optional field.
pub trait Allocate {
    /// Inserts a default value if the field is empty, then returns a view of it.
    fn ensure(&mut self) -> Slot<'_>;
}

impl<T: Capture + Default> Allocate for Option<T> {
    fn ensure(&mut self) -> Slot<'_> {
        self.get_or_insert_with(T::default).slot()
    }
}

/// A type that can appear as a field of a [`Record`].
pub trait Capture {
    fn shape() -> Shape;

    fn slot(&mut self) -> Slot<'_>;
}

impl<T: Capture + Default> Capture for Option<T> {
    fn shape() -> Shape {
        Shape::Optional(Box::new(T::shape()))
    }

    fn slot(&mut self) -> Slot<'_> {
        Slot::Optional(self)
    }
}

impl<T: Capture> Capture for Box<T> {
    fn shape() -> Shape {
        T::shape()
    }

    fn slot(&mut self) -> Slot<'_> {
        (**self).slot()
    }
}

/// Implements [`Capture`] as a scalar for types that implement [`Assign`].
///
/// ```
/// use rxbind::{Assign, scalar};
///
/// #[derive(Default)]
/// struct Upper(String);
///
/// impl Assign for Upper {
///     fn assign(&mut self, text: &str) {
///         self.0 = text.to_uppercase();
///     }
/// }
///
/// scalar!(Upper);
/// ```
#[macro_export]
macro_rules! scalar {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Capture for $ty {
                fn shape() -> $crate::Shape {
                    $crate::Shape::Scalar
                }

                fn slot(&mut self) -> $crate::Slot<'_> {
                    $crate::Slot::Text(self)
                }
            }
        )+
    };
}

scalar!(String, Box<str>, Arc<str>);

/// Object-safe access to the declared fields of a record instance.
pub trait Fields {
    /// Returns a view of the field declared at `index`, or `None` if out of range.
    fn field_mut(&mut self, index: usize) -> Option<Slot<'_>>;
}

/// A struct whose fields can receive captures.
///
/// Derive it with `#[derive(Record)]`; hand-written impls must keep
/// [`schema`](Record::schema) and [`Fields::field_mut`] in agreement.
pub trait Record: Fields + Capture + Default {
    fn schema() -> Schema;
}

/// Declared fields of a record type, in declaration order.
#[derive(Debug, Clone)]
pub struct Schema {
    pub type_name: &'static str,
    pub fields: Vec<FieldDecl>,
}

impl Schema {
    pub fn new(type_name: &'static str, fields: Vec<FieldDecl>) -> Self {
        Self { type_name, fields }
    }
}

/// One declared field: its tags, whether it is flattened, and its shape.
#[derive(Debug, Clone)]
pub struct FieldDecl {
    pub name: &'static str,
    pub tags: Vec<(&'static str, &'static str)>,
    pub flatten: bool,
    pub shape: fn() -> Shape,
}

impl FieldDecl {
    pub fn new(name: &'static str, shape: fn() -> Shape) -> Self {
        Self {
            name,
            tags: Vec::new(),
            flatten: false,
            shape,
        }
    }

    pub fn tag(mut self, key: &'static str, value: &'static str) -> Self {
        self.tags.push((key, value));
        self
    }

    pub fn flatten(mut self, flatten: bool) -> Self {
        self.flatten = flatten;
        self
    }

    /// Tag value under `key`; empty values count as absent.
    pub fn tag_value(&self, key: &str) -> Option<&'static str> {
        self.tags
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .filter(|v| !v.is_empty())
    }
}
