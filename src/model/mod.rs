pub mod card;
pub mod config;
pub mod locale;
pub mod row;

pub use card::*;
pub use config::*;
pub use locale::*;
pub use row::*;
