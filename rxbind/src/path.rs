use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::record::{Assign, Fields, Slot};

/// One traversal step of a [`FieldPath`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Select the field declared at this index.
    Field(usize),
    /// Dereference an `Option`, allocating a default value if it is `None`.
    Allocate,
}

/// Route from a record root to a single scalar location.
///
/// Paths are values: they are built once by the resolver and replayed against
/// every target instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    steps: Arc<[Step]>,
}

/// A path step that did not fit the instance it was replayed against.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("field path {path} failed at step {position}: expected {expected}, found {found}")]
pub struct PathError {
    pub path: FieldPath,
    pub position: usize,
    pub expected: &'static str,
    pub found: &'static str,
}

impl FieldPath {
    pub fn new(steps: impl Into<Arc<[Step]>>) -> Self {
        Self { steps: steps.into() }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns a path that runs `prefix` before this one.
    pub(crate) fn prefixed(&self, prefix: &[Step]) -> Self {
        let steps: Vec<Step> = prefix.iter().chain(self.steps.iter()).copied().collect();
        Self::new(steps)
    }

    /// Walks the path from `root`, allocating optional containers on the way,
    /// and returns the scalar it ends on.
    pub fn locate<'a>(&self, root: &'a mut dyn Fields) -> Result<&'a mut dyn Assign, PathError> {
        let mut slot = Slot::Record(root);
        for (position, step) in self.steps.iter().enumerate() {
            slot = match (*step, slot) {
                (Step::Field(index), Slot::Record(record)) => match record.field_mut(index) {
                    Some(next) => next,
                    None => return Err(self.error(position, "declared field", "no such field")),
                },
                (Step::Allocate, Slot::Optional(optional)) => optional.ensure(),
                (Step::Field(_), other) => return Err(self.error(position, "record", other.kind())),
                (Step::Allocate, other) => return Err(self.error(position, "optional", other.kind())),
            };
        }
        match slot {
            Slot::Text(text) => Ok(text),
            other => Err(self.error(self.steps.len(), "scalar", other.kind())),
        }
    }

    fn error(&self, position: usize, expected: &'static str, found: &'static str) -> PathError {
        PathError {
            path: self.clone(),
            position,
            expected,
            found,
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for step in self.steps.iter() {
            match step {
                Step::Field(index) => write!(f, ".{index}")?,
                Step::Allocate => f.write_str("?")?,
            }
        }
        Ok(())
    }
}
