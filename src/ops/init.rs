use crate::model::locale::Locale;
use crate::model::row::{RowId, Slot};
use crate::ops::{row_ops, status_ops};
use crate::store::{self, SyncedStore, keys};

/// Lifecycle of a card's one-time seeding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitState {
    Uninitialized,
    Initialized,
}

pub fn init_state<S: SyncedStore + ?Sized>(store: &S) -> InitState {
    if status_ops::is_initialized(store) {
        InitState::Initialized
    } else {
        InitState::Uninitialized
    }
}

/// Locale recorded when the card was seeded, if any
pub fn seeded_locale<S: SyncedStore + ?Sized>(store: &S) -> Option<Locale> {
    store
        .get(keys::LOCALE)
        .and_then(|v| v.as_str())
        .and_then(Locale::parse_locale)
}

/// Seed the locale's default rows, once per card.
///
/// Each default row is appended with its fixed id (the generator is not
/// used), gets its header label, and gets its body placeholder if it has one.
/// The initialized flag is latched last. On an already initialized card this
/// does nothing and returns `false`.
pub fn initialize<S: SyncedStore + ?Sized>(store: &mut S, locale: Locale) -> bool {
    if init_state(store) == InitState::Initialized {
        return false;
    }

    for row in locale.default_rows() {
        let id = RowId::from(row.id);
        row_ops::insert_row(store, id.clone());
        row_ops::set_content(store, &id, Slot::Header, row.header);
        if let Some(body) = row.body {
            row_ops::set_content(store, &id, Slot::Body, body);
        }
    }
    store::set_string(store, keys::LOCALE, &locale.to_string());
    status_ops::mark_initialized(store);

    log::debug!(
        "[taskcard.init] seeded {} default rows ({})",
        locale.default_rows().len(),
        locale
    );
    true
}
