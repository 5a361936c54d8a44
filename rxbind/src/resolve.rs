//! Field resolution: from a record schema and a tag key to a mapping of
//! capture names onto field paths.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::errors::{Error, Result};
use crate::path::{FieldPath, Step};
use crate::record::{Schema, Shape};

/// Joins the tag of a nested record field with the names resolved inside it.
pub const SEPARATOR: &str = "__";

/// Capture names of a record type, each mapped to the path of its field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    paths: HashMap<String, FieldPath>,
}

impl FieldMap {
    pub fn get(&self, name: &str) -> Option<&FieldPath> {
        self.paths.get(name)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Capture names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.paths.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn insert(&mut self, name: String, path: FieldPath) {
        match self.paths.entry(name) {
            Entry::Occupied(mut slot) => {
                log::debug!("capture `{}` redeclared, {} replaces {}", slot.key(), path, slot.get());
                slot.insert(path);
            }
            Entry::Vacant(slot) => {
                slot.insert(path);
            }
        }
    }
}

/// Where a field's type ends up once its `Option` layers are peeled.
enum Target {
    Scalar,
    Record(fn() -> Schema),
    Ignored,
}

/// Strips `Optional` layers, returning one `Allocate` step per layer.
fn peel(shape: Shape) -> (Vec<Step>, Target) {
    let mut allocs = Vec::new();
    let mut shape = shape;
    loop {
        match shape {
            Shape::Optional(inner) => {
                allocs.push(Step::Allocate);
                shape = *inner;
            }
            Shape::Scalar => return (allocs, Target::Scalar),
            Shape::Record(schema) => return (allocs, Target::Record(schema)),
            Shape::Ignored => return (allocs, Target::Ignored),
        }
    }
}

/// Resolves every field of `schema` tagged with `tag`.
///
/// Fails when nothing is tagged or when the record reaches itself through the
/// fields being walked.
pub fn resolve(schema: &Schema, tag: &str) -> Result<FieldMap> {
    if tag.is_empty() {
        return Err(Error::EmptyTag);
    }
    let mut stack = Vec::new();
    let map = walk(schema, tag, &mut stack)?;
    if map.is_empty() {
        return Err(Error::NoTaggedFields {
            record: schema.type_name,
            tag: tag.to_string(),
        });
    }
    Ok(map)
}

fn walk(schema: &Schema, tag: &str, stack: &mut Vec<&'static str>) -> Result<FieldMap> {
    if stack.contains(&schema.type_name) {
        return Err(Error::RecursiveRecord {
            record: schema.type_name,
        });
    }
    stack.push(schema.type_name);

    let mut map = FieldMap::default();
    for (index, field) in schema.fields.iter().enumerate() {
        let (allocs, target) = peel((field.shape)());
        if matches!(target, Target::Ignored) {
            continue;
        }
        let mut prefix = Vec::with_capacity(allocs.len() + 1);
        prefix.push(Step::Field(index));
        prefix.extend(allocs);

        match (field.tag_value(tag), target) {
            (Some(name), Target::Scalar) => {
                map.insert(name.to_string(), FieldPath::new(prefix));
            }
            (Some(name), Target::Record(nested)) => {
                let inner = walk(&nested(), tag, stack)?;
                for (sub, path) in inner.paths {
                    map.insert(format!("{name}{SEPARATOR}{sub}"), path.prefixed(&prefix));
                }
            }
            (None, Target::Record(nested)) if field.flatten => {
                let inner = walk(&nested(), tag, stack)?;
                for (sub, path) in inner.paths {
                    map.insert(sub, path.prefixed(&prefix));
                }
            }
            _ => {}
        }
    }

    stack.pop();
    Ok(map)
}
