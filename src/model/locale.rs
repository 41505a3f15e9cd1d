use std::fmt;

use serde::{Deserialize, Serialize};

use super::card::{StatusFlag, TextField};

/// A row seeded into every new card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultRow {
    pub id: &'static str,
    pub header: &'static str,
    /// Placeholder written into the body cell, if any
    pub body: Option<&'static str>,
}

const KOREAN_ROWS: &[DefaultRow] = &[
    DefaultRow { id: "date", header: "기간", body: None },
    DefaultRow { id: "status", header: "현재 상태", body: None },
    DefaultRow { id: "problem", header: "발생한 문제", body: None },
];

const ENGLISH_ROWS: &[DefaultRow] = &[
    DefaultRow { id: "date", header: "Period", body: None },
    DefaultRow {
        id: "status",
        header: "Current status",
        body: Some("What is happening right now?"),
    },
    DefaultRow {
        id: "problem",
        header: "Problems",
        body: Some("Describe any blockers."),
    },
];

/// Localized copy of the card. Variants differ only in text, never in behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "en")]
    English,
}

impl Locale {
    pub fn parse_locale(s: &str) -> Option<Locale> {
        match s.to_ascii_lowercase().as_str() {
            "ko" | "kr" | "korean" => Some(Locale::Korean),
            "en" | "english" => Some(Locale::English),
            _ => None,
        }
    }

    /// Rows seeded by the initialization routine, in table order
    pub fn default_rows(self) -> &'static [DefaultRow] {
        match self {
            Locale::Korean => KOREAN_ROWS,
            Locale::English => ENGLISH_ROWS,
        }
    }

    pub fn status_label(self, flag: StatusFlag) -> &'static str {
        match (self, flag) {
            (Locale::Korean, StatusFlag::OnProgress) => "진행",
            (Locale::Korean, StatusFlag::Trouble) => "이슈",
            (Locale::Korean, StatusFlag::Done) => "완료",
            (Locale::English, StatusFlag::OnProgress) => "In progress",
            (Locale::English, StatusFlag::Trouble) => "Issue",
            (Locale::English, StatusFlag::Done) => "Done",
        }
    }

    pub fn field_label(self, field: TextField) -> &'static str {
        match (self, field) {
            (Locale::Korean, TextField::Author) => "작성자 / 일시",
            (Locale::Korean, TextField::Manager) => "담당자",
            (Locale::Korean, TextField::MainContent) => "내용",
            (Locale::English, TextField::Author) => "Author / Date",
            (Locale::English, TextField::Manager) => "Manager",
            (Locale::English, TextField::MainContent) => "Content",
        }
    }

    /// Tooltip of the collapse toggle; names the action a click performs
    pub fn collapse_tooltip(self, collapsed: bool) -> &'static str {
        match (self, collapsed) {
            (Locale::Korean, true) => "펼치기",
            (Locale::Korean, false) => "접기",
            (Locale::English, true) => "Expand",
            (Locale::English, false) => "Collapse",
        }
    }

    pub fn color_tooltip(self) -> &'static str {
        match self {
            Locale::Korean => "카드 색상",
            Locale::English => "Card color",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Korean => write!(f, "ko"),
            Locale::English => write!(f, "en"),
        }
    }
}
