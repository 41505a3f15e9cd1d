pub mod memory;

pub use memory::MemoryStore;

use serde_json::Value;

use crate::model::row::RowId;

/// Scalar keys of one card, named as the host persists them
pub mod keys {
    pub const INITIALIZED: &str = "initialized";
    pub const COLLAPSED: &str = "collapsed";
    pub const AUTHOR: &str = "author";
    pub const MANAGER: &str = "manager";
    pub const MAIN_CONTENT: &str = "mainContentText";
    pub const ON_PROGRESS: &str = "onProgress";
    pub const TROUBLE: &str = "trouble";
    pub const DONE: &str = "done";
    pub const ROW_ORDER: &str = "rowsNum";
    pub const COLOR: &str = "color";

    /// Named map holding row text under `<id>-header` / `<id>-body`
    pub const ROWS_MAP: &str = "rows";

    /// Locale the card was seeded with. Not read by the host.
    pub const LOCALE: &str = "locale";
}

/// Synchronized key/value state scoped to one card instance.
///
/// Mirrors the host's shared state: scalar values addressed by key, plus
/// named string maps. Implementations: [`MemoryStore`] (in-process, also the
/// on-disk format). Each call is applied before the next one starts, so a
/// read after a write observes the written value.
pub trait SyncedStore {
    fn get(&self, key: &str) -> Option<&Value>;

    fn set(&mut self, key: &str, value: Value);

    fn delete(&mut self, key: &str);

    fn map_get(&self, map: &str, key: &str) -> Option<&str>;

    fn map_set(&mut self, map: &str, key: &str, value: String);

    fn map_delete(&mut self, map: &str, key: &str);
}

// ---------------------------------------------------------------------------
// Typed accessors
// ---------------------------------------------------------------------------

pub fn get_bool<S: SyncedStore + ?Sized>(store: &S, key: &str) -> bool {
    store.get(key).and_then(Value::as_bool).unwrap_or(false)
}

pub fn set_bool<S: SyncedStore + ?Sized>(store: &mut S, key: &str, value: bool) {
    store.set(key, Value::Bool(value));
}

/// Read a string value; absent or non-string values read as `default`
pub fn get_string<S: SyncedStore + ?Sized>(store: &S, key: &str, default: &str) -> String {
    store
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

pub fn set_string<S: SyncedStore + ?Sized>(store: &mut S, key: &str, value: &str) {
    store.set(key, Value::String(value.to_string()));
}

/// Read the ordered row id list. Non-string entries are skipped.
pub fn get_row_ids<S: SyncedStore + ?Sized>(store: &S) -> Vec<RowId> {
    match store.get(keys::ROW_ORDER) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(RowId::from)
            .collect(),
        _ => Vec::new(),
    }
}

pub fn set_row_ids<S: SyncedStore + ?Sized>(store: &mut S, ids: &[RowId]) {
    let items = ids
        .iter()
        .map(|id| Value::String(id.as_str().to_string()))
        .collect();
    store.set(keys::ROW_ORDER, Value::Array(items));
}
