use std::fmt;

use serde::{Deserialize, Serialize};

/// Card background colors offered by the property menu, in menu order
pub const PALETTE: [&str; 4] = ["#FFA198", "#BDE3FF", "#AFF4C6", "#FFE8A3"];

/// Color of a freshly created card
pub const DEFAULT_COLOR: &str = PALETTE[1];

/// One of the three independent status checkboxes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFlag {
    OnProgress,
    Trouble,
    Done,
}

impl StatusFlag {
    pub const ALL: [StatusFlag; 3] = [StatusFlag::OnProgress, StatusFlag::Trouble, StatusFlag::Done];

    pub fn parse_flag(s: &str) -> Option<StatusFlag> {
        match s {
            "progress" | "onprogress" | "on-progress" => Some(StatusFlag::OnProgress),
            "trouble" | "issue" => Some(StatusFlag::Trouble),
            "done" => Some(StatusFlag::Done),
            _ => None,
        }
    }
}

impl fmt::Display for StatusFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFlag::OnProgress => write!(f, "progress"),
            StatusFlag::Trouble => write!(f, "trouble"),
            StatusFlag::Done => write!(f, "done"),
        }
    }
}

/// Free-form text fields on the card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextField {
    Author,
    Manager,
    MainContent,
}

impl TextField {
    pub fn parse_field(s: &str) -> Option<TextField> {
        match s {
            "author" => Some(TextField::Author),
            "manager" => Some(TextField::Manager),
            "content" | "main" => Some(TextField::MainContent),
            _ => None,
        }
    }
}

/// Snapshot of the card's scalar fields as read from the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardStatus {
    pub initialized: bool,
    pub collapsed: bool,
    pub author: String,
    pub manager: String,
    pub main_content: String,
    pub on_progress: bool,
    pub trouble: bool,
    pub done: bool,
    pub color: String,
}

impl CardStatus {
    pub fn flag(&self, flag: StatusFlag) -> bool {
        match flag {
            StatusFlag::OnProgress => self.on_progress,
            StatusFlag::Trouble => self.trouble,
            StatusFlag::Done => self.done,
        }
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Author => &self.author,
            TextField::Manager => &self.manager,
            TextField::MainContent => &self.main_content,
        }
    }
}

impl Default for CardStatus {
    fn default() -> Self {
        CardStatus {
            initialized: false,
            collapsed: false,
            author: String::new(),
            manager: String::new(),
            main_content: String::new(),
            on_progress: false,
            trouble: false,
            done: false,
            color: DEFAULT_COLOR.to_string(),
        }
    }
}

/// True if `color` is one of the palette entries
pub fn is_palette_color(color: &str) -> bool {
    PALETTE.iter().any(|c| c.eq_ignore_ascii_case(color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_status_uses_second_palette_color() {
        let status = CardStatus::default();
        assert_eq!(status.color, "#BDE3FF");
        assert!(!status.initialized);
        assert!(!status.collapsed);
        assert!(StatusFlag::ALL.iter().all(|f| !status.flag(*f)));
    }

    #[test]
    fn parse_flag_accepts_aliases() {
        assert_eq!(StatusFlag::parse_flag("progress"), Some(StatusFlag::OnProgress));
        assert_eq!(StatusFlag::parse_flag("issue"), Some(StatusFlag::Trouble));
        assert_eq!(StatusFlag::parse_flag("done"), Some(StatusFlag::Done));
        assert_eq!(StatusFlag::parse_flag("collapsed"), None);
    }

    #[test]
    fn palette_check_ignores_case() {
        assert!(is_palette_color("#ffa198"));
        assert!(!is_palette_color("#000000"));
    }
}
