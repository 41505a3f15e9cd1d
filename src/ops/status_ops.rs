use crate::model::card::{CardStatus, DEFAULT_COLOR, StatusFlag, TextField};
use crate::store::{self, SyncedStore, keys};

fn flag_key(flag: StatusFlag) -> &'static str {
    match flag {
        StatusFlag::OnProgress => keys::ON_PROGRESS,
        StatusFlag::Trouble => keys::TROUBLE,
        StatusFlag::Done => keys::DONE,
    }
}

fn text_key(field: TextField) -> &'static str {
    match field {
        TextField::Author => keys::AUTHOR,
        TextField::Manager => keys::MANAGER,
        TextField::MainContent => keys::MAIN_CONTENT,
    }
}

/// Read every scalar field of the card
pub fn read_status<S: SyncedStore + ?Sized>(store: &S) -> CardStatus {
    CardStatus {
        initialized: is_initialized(store),
        collapsed: is_collapsed(store),
        author: text(store, TextField::Author),
        manager: text(store, TextField::Manager),
        main_content: text(store, TextField::MainContent),
        on_progress: flag(store, StatusFlag::OnProgress),
        trouble: flag(store, StatusFlag::Trouble),
        done: flag(store, StatusFlag::Done),
        color: color(store),
    }
}

// ---------------------------------------------------------------------------
// Collapse
// ---------------------------------------------------------------------------

pub fn is_collapsed<S: SyncedStore + ?Sized>(store: &S) -> bool {
    store::get_bool(store, keys::COLLAPSED)
}

pub fn set_collapsed<S: SyncedStore + ?Sized>(store: &mut S, collapsed: bool) {
    store::set_bool(store, keys::COLLAPSED, collapsed);
}

/// Flip the collapse flag. Returns the new value.
pub fn toggle_collapsed<S: SyncedStore + ?Sized>(store: &mut S) -> bool {
    let collapsed = !is_collapsed(store);
    set_collapsed(store, collapsed);
    log::debug!("[taskcard.status] collapsed={}", collapsed);
    collapsed
}

// ---------------------------------------------------------------------------
// Status flags
// ---------------------------------------------------------------------------

pub fn flag<S: SyncedStore + ?Sized>(store: &S, flag: StatusFlag) -> bool {
    store::get_bool(store, flag_key(flag))
}

pub fn set_flag<S: SyncedStore + ?Sized>(store: &mut S, flag: StatusFlag, value: bool) {
    store::set_bool(store, flag_key(flag), value);
}

/// Flip one status flag; the other two are left alone. Returns the new value.
pub fn toggle_flag<S: SyncedStore + ?Sized>(store: &mut S, which: StatusFlag) -> bool {
    let value = !flag(store, which);
    set_flag(store, which, value);
    log::debug!("[taskcard.status] {}={}", which, value);
    value
}

pub fn toggle_on_progress<S: SyncedStore + ?Sized>(store: &mut S) -> bool {
    toggle_flag(store, StatusFlag::OnProgress)
}

pub fn toggle_trouble<S: SyncedStore + ?Sized>(store: &mut S) -> bool {
    toggle_flag(store, StatusFlag::Trouble)
}

pub fn toggle_done<S: SyncedStore + ?Sized>(store: &mut S) -> bool {
    toggle_flag(store, StatusFlag::Done)
}

// ---------------------------------------------------------------------------
// Text fields and color
// ---------------------------------------------------------------------------

pub fn text<S: SyncedStore + ?Sized>(store: &S, field: TextField) -> String {
    store::get_string(store, text_key(field), "")
}

/// Replace a text field. Any text is accepted, including the empty string.
pub fn set_text<S: SyncedStore + ?Sized>(store: &mut S, field: TextField, value: &str) {
    store::set_string(store, text_key(field), value);
    log::debug!("[taskcard.status] {:?} edited ({} chars)", field, value.chars().count());
}

pub fn set_author<S: SyncedStore + ?Sized>(store: &mut S, value: &str) {
    set_text(store, TextField::Author, value);
}

pub fn set_manager<S: SyncedStore + ?Sized>(store: &mut S, value: &str) {
    set_text(store, TextField::Manager, value);
}

pub fn set_main_content<S: SyncedStore + ?Sized>(store: &mut S, value: &str) {
    set_text(store, TextField::MainContent, value);
}

pub fn color<S: SyncedStore + ?Sized>(store: &S) -> String {
    store::get_string(store, keys::COLOR, DEFAULT_COLOR)
}

/// Set the card color. Values outside the palette are stored as given.
pub fn set_color<S: SyncedStore + ?Sized>(store: &mut S, value: &str) {
    store::set_string(store, keys::COLOR, value);
    log::debug!("[taskcard.status] color={}", value);
}

// ---------------------------------------------------------------------------
// Initialization flag
// ---------------------------------------------------------------------------

pub fn is_initialized<S: SyncedStore + ?Sized>(store: &S) -> bool {
    store::get_bool(store, keys::INITIALIZED)
}

/// Latch the initialized flag. There is no way to clear it.
pub(crate) fn mark_initialized<S: SyncedStore + ?Sized>(store: &mut S) {
    store::set_bool(store, keys::INITIALIZED, true);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use pretty_assertions::assert_eq;

    #[test]
    fn fresh_store_reads_defaults() {
        let store = MemoryStore::new();
        assert_eq!(read_status(&store), CardStatus::default());
    }

    #[test]
    fn toggle_done_twice_restores_and_leaves_others() {
        let mut store = MemoryStore::new();
        set_flag(&mut store, StatusFlag::OnProgress, true);

        assert!(toggle_done(&mut store));
        assert!(flag(&store, StatusFlag::OnProgress));
        assert!(!flag(&store, StatusFlag::Trouble));

        assert!(!toggle_done(&mut store));
        assert!(!flag(&store, StatusFlag::Done));
        assert!(flag(&store, StatusFlag::OnProgress));
        assert!(!flag(&store, StatusFlag::Trouble));
    }

    #[test]
    fn all_flags_can_be_set_together() {
        let mut store = MemoryStore::new();
        toggle_on_progress(&mut store);
        toggle_trouble(&mut store);
        toggle_done(&mut store);
        let status = read_status(&store);
        assert!(status.on_progress && status.trouble && status.done);
    }

    #[test]
    fn toggle_collapsed_flips() {
        let mut store = MemoryStore::new();
        assert!(toggle_collapsed(&mut store));
        assert!(is_collapsed(&store));
        assert!(!toggle_collapsed(&mut store));
        assert!(!is_collapsed(&store));
    }

    #[test]
    fn text_fields_accept_anything() {
        let mut store = MemoryStore::new();
        set_author(&mut store, "김철수 / 2024-05-01");
        set_manager(&mut store, "");
        set_main_content(&mut store, "Ship v2\nthen rest");
        let status = read_status(&store);
        assert_eq!(status.author, "김철수 / 2024-05-01");
        assert_eq!(status.manager, "");
        assert_eq!(status.main_content, "Ship v2\nthen rest");
    }

    #[test]
    fn color_outside_palette_is_kept() {
        let mut store = MemoryStore::new();
        assert_eq!(color(&store), "#BDE3FF");
        set_color(&mut store, "#123456");
        assert_eq!(color(&store), "#123456");
    }

    #[test]
    fn status_keys_match_host_names() {
        let mut store = MemoryStore::new();
        set_main_content(&mut store, "x");
        toggle_on_progress(&mut store);
        assert_eq!(store.get("mainContentText"), Some(&serde_json::json!("x")));
        assert_eq!(store.get("onProgress"), Some(&serde_json::json!(true)));
    }
}
