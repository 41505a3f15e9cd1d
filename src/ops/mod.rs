pub mod id_gen;
pub mod init;
pub mod menu;
pub mod row_ops;
pub mod status_ops;
pub mod view;
