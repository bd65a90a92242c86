//! Per-run dimension key cache.

use std::collections::HashMap;

use matchday_core::{
  dimension::{DimensionValue, NaturalKey},
  store::WarehouseStore,
};

/// Memoises natural-key to surrogate-key lookups for one load run.
///
/// The store's own resolution is already idempotent; the cache just spares
/// a round-trip per repeated key, which dominates in real exports (a season
/// of rows shares a handful of dimension values).
pub struct Resolver<'a, S> {
  store: &'a S,
  keys:  HashMap<NaturalKey, i64>,
}

impl<'a, S: WarehouseStore> Resolver<'a, S> {
  pub fn new(store: &'a S) -> Self {
    Self {
      store,
      keys: HashMap::new(),
    }
  }

  /// Resolve `value` to its surrogate key, hitting the store only on the
  /// first sighting of each natural key.
  pub async fn resolve(
    &mut self,
    value: &DimensionValue,
  ) -> Result<i64, S::Error> {
    let key = value.natural_key();
    if let Some(&id) = self.keys.get(&key) {
      return Ok(id);
    }

    let id = self.store.resolve_dimension(value).await?;
    self.keys.insert(key, id);
    Ok(id)
  }
}
