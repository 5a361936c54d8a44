use crate::path::FieldPath;
use crate::resolve::FieldMap;

/// A capture group ordinal and the field it is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub group: usize,
    pub name: String,
    pub path: FieldPath,
}

/// Pairs the engine's capture groups with resolved field paths.
///
/// `group_names` yields one entry per group ordinal, starting with the whole
/// match at ordinal 0, in the shape of [`regex::Regex::capture_names`].
/// Unnamed groups and names the record does not declare are skipped. The
/// result is ordered by ordinal.
pub fn bind<'a, I>(map: &FieldMap, group_names: I) -> Vec<Binding>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut bindings = Vec::new();
    for (group, name) in group_names.into_iter().enumerate().skip(1) {
        let Some(name) = name.filter(|name| !name.is_empty()) else {
            continue;
        };
        match map.get(name) {
            Some(path) => bindings.push(Binding {
                group,
                name: name.to_string(),
                path: path.clone(),
            }),
            None => log::trace!("capture group {group} `{name}` has no matching field"),
        }
    }
    bindings
}
