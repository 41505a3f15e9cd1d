use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a row in the notes table.
///
/// Either a fixed default id seeded at initialization (`date`, `status`, ...)
/// or a zero-padded 6-digit decimal string generated for user-added rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(String);

impl RowId {
    pub fn new(id: impl Into<String>) -> Self {
        RowId(id.into())
    }

    /// Build a generated id from a number in `0..1_000_000`
    pub fn from_number(n: u32) -> Self {
        RowId(format!("{:06}", n))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for ids produced by the generator (exactly six ASCII digits)
    pub fn is_generated(&self) -> bool {
        self.0.len() == 6 && self.0.bytes().all(|b| b.is_ascii_digit())
    }

    /// Map key holding the given slot's text for this row
    pub fn content_key(&self, slot: Slot) -> String {
        format!("{}-{}", self.0, slot.suffix())
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RowId {
    fn from(s: &str) -> Self {
        RowId(s.to_string())
    }
}

impl From<String> for RowId {
    fn from(s: String) -> Self {
        RowId(s)
    }
}

/// Which cell of a row a piece of text belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Header,
    Body,
}

impl Slot {
    pub const ALL: [Slot; 2] = [Slot::Header, Slot::Body];

    fn suffix(self) -> &'static str {
        match self {
            Slot::Header => "header",
            Slot::Body => "body",
        }
    }

    pub fn parse_slot(s: &str) -> Option<Slot> {
        match s {
            "header" => Some(Slot::Header),
            "body" => Some(Slot::Body),
            _ => None,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}
