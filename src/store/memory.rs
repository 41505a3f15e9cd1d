use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::SyncedStore;

/// In-memory card state. Serializes to the card file format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryStore {
    #[serde(default)]
    state: IndexMap<String, Value>,
    #[serde(default)]
    maps: IndexMap<String, IndexMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SyncedStore for MemoryStore {
    fn get(&self, key: &str) -> Option<&Value> {
        self.state.get(key)
    }

    fn set(&mut self, key: &str, value: Value) {
        self.state.insert(key.to_string(), value);
    }

    fn delete(&mut self, key: &str) {
        self.state.shift_remove(key);
    }

    fn map_get(&self, map: &str, key: &str) -> Option<&str> {
        self.maps.get(map)?.get(key).map(String::as_str)
    }

    fn map_set(&mut self, map: &str, key: &str, value: String) {
        self.maps
            .entry(map.to_string())
            .or_default()
            .insert(key.to_string(), value);
    }

    fn map_delete(&mut self, map: &str, key: &str) {
        if let Some(entries) = self.maps.get_mut(map) {
            entries.shift_remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scalar_set_get_delete() {
        let mut store = MemoryStore::new();
        store.set("collapsed", Value::Bool(true));
        assert_eq!(store.get("collapsed"), Some(&Value::Bool(true)));
        store.delete("collapsed");
        assert_eq!(store.get("collapsed"), None);
        // deleting again is harmless
        store.delete("collapsed");
    }

    #[test]
    fn map_entries_are_independent_per_map() {
        let mut store = MemoryStore::new();
        store.map_set("rows", "date-header", "기간".into());
        store.map_set("other", "date-header", "x".into());
        assert_eq!(store.map_get("rows", "date-header"), Some("기간"));
        assert_eq!(store.map_get("other", "date-header"), Some("x"));
        store.map_delete("rows", "date-header");
        assert_eq!(store.map_get("rows", "date-header"), None);
        assert_eq!(store.map_get("other", "date-header"), Some("x"));
    }

    #[test]
    fn map_entries_serialize_in_insertion_order() {
        let mut store = MemoryStore::new();
        store.map_set("rows", "b", "1".into());
        store.map_set("rows", "a", "2".into());
        store.map_set("rows", "c", "3".into());
        store.map_delete("rows", "a");
        // deleting from a map that was never written is harmless
        store.map_delete("missing", "a");
        assert_eq!(store.map_get("missing", "a"), None);

        let json = serde_json::to_string(&store).unwrap();
        assert_eq!(json, r#"{"state":{},"maps":{"rows":{"b":"1","c":"3"}}}"#);
    }

    #[test]
    fn serde_shape() {
        let mut store = MemoryStore::new();
        store.set("done", Value::Bool(true));
        store.map_set("rows", "date-header", "Period".into());
        let json = serde_json::to_value(&store).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "state": { "done": true },
                "maps": { "rows": { "date-header": "Period" } }
            })
        );
        let back: MemoryStore = serde_json::from_value(json).unwrap();
        assert_eq!(back, store);
    }

    #[test]
    fn missing_sections_deserialize_empty() {
        let store: MemoryStore = serde_json::from_str("{}").unwrap();
        assert_eq!(store, MemoryStore::new());
    }
}
