//! Transcript data model: parsed headers, finalized messages and page fragments.

use serde::{Deserialize, Serialize};

/// A header line split into its four captured fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageHeader {
    /// Calendar date exactly as written, e.g. `2024年5月1日`
    pub date: String,
    /// `H:MM` or `HH:MM`
    pub time: String,
    /// Raw sender token, including any `@` qualifier
    pub sender: String,
    /// Remainder of the header line, the first line of message text
    pub first_line: String,
}

/// A message after flushing: header fields plus every text line in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub date: String,
    pub time: String,
    pub sender: String,
    /// Relative avatar path derived from `sender`
    pub icon: String,
    pub lines: Vec<String>,
}

impl ChatMessage {
    /// Message body with continuation lines joined by `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// One self-contained piece of the page body, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Horizontal rule placed before every date label except the first
    Separator,
    DateLabel(String),
    Bubble(ChatMessage),
}

impl Fragment {
    pub fn as_message(&self) -> Option<&ChatMessage> {
        match self {
            Fragment::Bubble(msg) => Some(msg),
            _ => None,
        }
    }
}
