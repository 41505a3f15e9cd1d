//! Collapsible task card: status flags, owners, and a notes table kept in a
//! synchronized key/value store.
//!
//! `model` holds the plain data types, `store` the storage seam, `ops` every
//! mutation and read, `io` the file-backed host, and `cli` a thin adapter
//! that turns commands into `ops` calls.

pub mod cli;
pub mod io;
pub mod model;
pub mod ops;
pub mod store;
pub mod util;
