//! Chat transcript types and the canned coach replies.

use chrono::{DateTime, Local};
use serde::Serialize;

use super::catalog::{
    REPLY_CLEAR, REPLY_CONFIDENT, REPLY_DEFAULT, REPLY_PRONUNCIATION, REPLY_STORY,
};

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

/// A single chat bubble.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(id: u64, text: impl Into<String>, sender: Sender) -> Self {
        Self {
            id,
            text: text.into(),
            sender,
            timestamp: Local::now(),
        }
    }

    /// Short clock label shown under the bubble.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// Pick the coach reply for a user message by keyword.
///
/// Keywords are checked in a fixed order; the first group that matches wins.
pub fn reply_for(input: &str) -> &'static str {
    let input = input.to_lowercase();
    let has = |words: &[&str]| words.iter().any(|w| input.contains(w));

    if has(&["clear", "clarity"]) {
        REPLY_CLEAR
    } else if has(&["story", "read"]) {
        REPLY_STORY
    } else if has(&["confident", "confidence"]) {
        REPLY_CONFIDENT
    } else if has(&["pronunciation", "pronounce"]) {
        REPLY_PRONUNCIATION
    } else {
        REPLY_DEFAULT
    }
}
