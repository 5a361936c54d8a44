use regex::Captures;

use crate::bind::Binding;
use crate::path::PathError;
use crate::record::Fields;

/// Writes the groups of one match into `target`.
///
/// Groups that did not take part in the match are written as the empty string.
/// No trimming or conversion is applied.
pub fn populate(captures: &Captures<'_>, bindings: &[Binding], target: &mut dyn Fields) -> Result<(), PathError> {
    for binding in bindings {
        let text = captures.get(binding.group).map_or("", |m| m.as_str());
        binding.path.locate(target)?.assign(text);
    }
    Ok(())
}
