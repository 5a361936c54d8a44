//! Process-wide cache of resolved field maps, keyed by record type and tag key.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use crate::errors::Result;
use crate::record::Record;
use crate::resolve::{FieldMap, resolve};

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
struct MapKey {
    record: TypeId,
    tag: String,
}

static REGISTRY: OnceLock<RwLock<HashMap<MapKey, Arc<FieldMap>>>> = OnceLock::new();

fn registry() -> &'static RwLock<HashMap<MapKey, Arc<FieldMap>>> {
    REGISTRY.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Returns the field map of `T` under `tag`, resolving it on first use.
///
/// Resolution errors are not cached.
pub fn resolved<T: Record + 'static>(tag: &str) -> Result<Arc<FieldMap>> {
    let key = MapKey {
        record: TypeId::of::<T>(),
        tag: tag.to_string(),
    };
    if let Some(map) = registry().read().unwrap_or_else(PoisonError::into_inner).get(&key) {
        return Ok(Arc::clone(map));
    }

    let map = Arc::new(resolve(&T::schema(), tag)?);
    log::debug!(
        "registered {} capture names for {} under tag `{}`",
        map.len(),
        std::any::type_name::<T>(),
        tag
    );
    let mut registry = registry().write().unwrap_or_else(PoisonError::into_inner);
    Ok(Arc::clone(registry.entry(key).or_insert(map)))
}

/// Number of cached field maps.
///
/// Test and diagnostic hook; not part of the stable API.
#[doc(hidden)]
pub fn registered_count() -> usize {
    registry().read().unwrap_or_else(PoisonError::into_inner).len()
}

/// Drops every cached field map.
///
/// Test and diagnostic hook; not part of the stable API. Matchers already
/// compiled keep their bindings.
#[doc(hidden)]
pub fn clear_registry() {
    registry().write().unwrap_or_else(PoisonError::into_inner).clear();
}
