use rand::Rng;

use crate::model::row::{RowId, Slot};
use crate::ops::id_gen::{self, IdError};
use crate::store::{self, SyncedStore, keys};

// ---------------------------------------------------------------------------
// Row order
// ---------------------------------------------------------------------------

/// Live row ids in display order
pub fn row_ids<S: SyncedStore + ?Sized>(store: &S) -> Vec<RowId> {
    store::get_row_ids(store)
}

pub fn contains_row<S: SyncedStore + ?Sized>(store: &S, id: &RowId) -> bool {
    row_ids(store).contains(id)
}

/// Append a new empty row with a freshly generated id. Returns the id.
pub fn add_row<S, R>(store: &mut S, rng: &mut R) -> Result<RowId, IdError>
where
    S: SyncedStore + ?Sized,
    R: Rng + ?Sized,
{
    let mut ids = row_ids(store);
    let id = id_gen::generate_row_id(&ids, rng)?;
    ids.push(id.clone());
    store::set_row_ids(store, &ids);
    log::debug!("[taskcard.rows.add] {} ({} rows)", id, ids.len());
    Ok(id)
}

/// Append a row with a caller-chosen id. No-op if the id is already live.
/// Returns whether the row was inserted.
pub fn insert_row<S: SyncedStore + ?Sized>(store: &mut S, id: RowId) -> bool {
    let mut ids = row_ids(store);
    if ids.contains(&id) {
        return false;
    }
    ids.push(id);
    store::set_row_ids(store, &ids);
    true
}

/// Remove a row and both of its cells.
///
/// Cells are cleared whether or not the id is listed, so text written for an
/// unlisted id cannot resurface if that id is generated later. The order is
/// only rewritten when the id was actually in it.
pub fn delete_row<S: SyncedStore + ?Sized>(store: &mut S, id: &RowId) {
    let mut ids = row_ids(store);
    let before = ids.len();
    ids.retain(|k| k != id);
    if ids.len() != before {
        store::set_row_ids(store, &ids);
    }
    for slot in Slot::ALL {
        store.map_delete(keys::ROWS_MAP, &id.content_key(slot));
    }
    log::debug!("[taskcard.rows.delete] {} ({} rows)", id, ids.len());
}

// ---------------------------------------------------------------------------
// Row content
// ---------------------------------------------------------------------------

/// Store text for one cell. Any text is accepted, including the empty string.
pub fn set_content<S: SyncedStore + ?Sized>(store: &mut S, id: &RowId, slot: Slot, text: &str) {
    store.map_set(keys::ROWS_MAP, &id.content_key(slot), text.to_string());
    log::debug!("[taskcard.rows.edit] {} {}", id, slot);
}

/// Text of one cell; empty when never written
pub fn get_content<S: SyncedStore + ?Sized>(store: &S, id: &RowId, slot: Slot) -> String {
    store
        .map_get(keys::ROWS_MAP, &id.content_key(slot))
        .unwrap_or("")
        .to_string()
}

/// Whether a cell has stored text (distinguishes "" from never written)
pub fn has_content<S: SyncedStore + ?Sized>(store: &S, id: &RowId, slot: Slot) -> bool {
    store.map_get(keys::ROWS_MAP, &id.content_key(slot)).is_some()
}
