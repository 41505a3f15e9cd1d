use serde::Serialize;

use crate::model::card::CardStatus;
use crate::model::row::{RowId, Slot};
use crate::ops::{row_ops, status_ops};
use crate::store::SyncedStore;

/// One row of the notes table as a renderer sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub id: RowId,
    pub header: String,
    pub body: String,
}

/// Everything a render pass reads, captured in one call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    #[serde(flatten)]
    pub status: CardStatus,
    pub rows: Vec<RowView>,
}

pub fn read_card<S: SyncedStore + ?Sized>(store: &S) -> CardView {
    let rows = row_ops::row_ids(store)
        .into_iter()
        .map(|id| RowView {
            header: row_ops::get_content(store, &id, Slot::Header),
            body: row_ops::get_content(store, &id, Slot::Body),
            id,
        })
        .collect();
    CardView {
        status: status_ops::read_status(store),
        rows,
    }
}
