//! UI-agnostic chat widget state
//!
//! This module contains the chat transcript, draft buffer, visibility flag and
//! capture status. Every mutation goes through a transition method, and the
//! renderer only reads through the accessors.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::voice::{CaptureEvent, SessionId};

/// A chat message in the assistant conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

/// The role of a chat message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: ChatRole::User, text: text.into() }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self { role: ChatRole::Assistant, text: text.into() }
    }

    pub fn is_user(&self) -> bool {
        self.role == ChatRole::User
    }
}

/// Where the voice capture lifecycle currently stands.
///
/// `Starting` covers the gap between asking the recognizer to start and its
/// start callback; the draft is only listening once `Started` arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureStatus {
    #[default]
    Idle,
    Starting(SessionId),
    Listening(SessionId),
}

impl CaptureStatus {
    pub fn session(&self) -> Option<SessionId> {
        match self {
            CaptureStatus::Idle => None,
            CaptureStatus::Starting(id) | CaptureStatus::Listening(id) => Some(*id),
        }
    }
}

/// What a capture event did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureTransition {
    /// Event belonged to another session, or arrived after this one finished.
    Ignored,
    StartedListening,
    /// A final transcript replaced the draft and closed the session.
    DraftReplaced,
    /// Session finished without a transcript.
    Stopped,
}

/// Convert a character index to a byte index for UTF-8 safe string operations
pub fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

#[derive(Debug, Clone, Default)]
pub struct ChatState {
    is_open: bool,
    messages: Vec<ChatMessage>,
    draft: String,
    capture: CaptureStatus,
}

impl ChatState {
    /// New closed widget whose transcript starts with an assistant greeting.
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::assistant(greeting)],
            ..Self::default()
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_listening(&self) -> bool {
        matches!(self.capture, CaptureStatus::Listening(_))
    }

    pub fn capture_status(&self) -> CaptureStatus {
        self.capture
    }

    // Visibility

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    // Draft editing

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Insert `c` before the character at `char_idx` (clamped to the end).
    pub fn insert_draft_char(&mut self, char_idx: usize, c: char) {
        let byte_pos = char_to_byte_index(&self.draft, char_idx);
        self.draft.insert(byte_pos, c);
    }

    /// Remove the character at `char_idx`. Returns false if out of range.
    pub fn remove_draft_char(&mut self, char_idx: usize) -> bool {
        if char_idx >= self.draft.chars().count() {
            return false;
        }
        let byte_pos = char_to_byte_index(&self.draft, char_idx);
        self.draft.remove(byte_pos);
        true
    }

    /// Append the draft to the transcript as a user message and clear it.
    ///
    /// Returns the submitted text so the caller can schedule a reply. Blank
    /// drafts are rejected with [`Error::EmptyInput`] and leave everything
    /// untouched.
    pub fn submit_draft(&mut self) -> Result<String> {
        if self.draft.trim().is_empty() {
            return Err(Error::EmptyInput);
        }
        let text = std::mem::take(&mut self.draft);
        self.messages.push(ChatMessage::user(text.clone()));
        Ok(text)
    }

    pub fn push_reply(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::assistant(text));
    }

    // Voice capture

    /// Reserve the capture slot for `session`. Fails if a session is active.
    pub fn begin_capture(&mut self, session: SessionId) -> Result<()> {
        if self.capture != CaptureStatus::Idle {
            return Err(Error::CaptureBusy);
        }
        self.capture = CaptureStatus::Starting(session);
        Ok(())
    }

    pub fn apply_capture(&mut self, session: SessionId, event: &CaptureEvent) -> CaptureTransition {
        if self.capture.session() != Some(session) {
            return CaptureTransition::Ignored;
        }

        match event {
            CaptureEvent::Started => {
                self.capture = CaptureStatus::Listening(session);
                CaptureTransition::StartedListening
            }
            CaptureEvent::Result { transcript, is_final } => {
                if !is_final {
                    return CaptureTransition::Ignored;
                }
                self.draft = transcript.clone();
                self.capture = CaptureStatus::Idle;
                CaptureTransition::DraftReplaced
            }
            CaptureEvent::Error(_) | CaptureEvent::Ended => {
                self.capture = CaptureStatus::Idle;
                CaptureTransition::Stopped
            }
        }
    }

    /// Drop any capture in progress without touching the draft.
    pub fn abort_capture(&mut self) {
        self.capture = CaptureStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn final_result(text: &str) -> CaptureEvent {
        CaptureEvent::Result { transcript: text.to_string(), is_final: true }
    }

    #[test]
    fn test_greeting_is_first_message() {
        let state = ChatState::with_greeting("Hello!");
        assert_eq!(state.messages(), &[ChatMessage::assistant("Hello!")]);
        assert!(!state.is_open());
        assert!(!state.is_listening());
    }

    #[test]
    fn test_blank_draft_is_ignored() {
        let mut state = ChatState::with_greeting("hi");
        for blank in ["", "   ", "\t\n"] {
            state.set_draft(blank);
            assert!(matches!(state.submit_draft(), Err(Error::EmptyInput)));
            assert_eq!(state.messages().len(), 1);
            assert_eq!(state.draft(), blank);
        }
    }

    #[test]
    fn test_submit_appends_user_message_and_clears_draft() {
        let mut state = ChatState::default();
        state.set_draft("  When should I water?  ");
        let sent = state.submit_draft().unwrap();
        assert_eq!(sent, "  When should I water?  ");
        assert_eq!(state.messages(), &[ChatMessage::user("  When should I water?  ")]);
        assert!(state.messages()[0].is_user());
        assert_eq!(state.draft(), "");
    }

    #[test]
    fn test_transcript_keeps_insertion_order() {
        let mut state = ChatState::default();
        state.set_draft("A");
        state.submit_draft().unwrap();
        state.set_draft("B");
        state.submit_draft().unwrap();
        state.push_reply("reply to A");
        let texts: Vec<&str> = state.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["A", "B", "reply to A"]);
    }

    #[test]
    fn test_open_close_leaves_transcript_and_draft() {
        let mut state = ChatState::with_greeting("hi");
        state.set_draft("half typed");
        let before = state.messages().to_vec();

        state.open();
        assert!(state.is_open());
        state.close();
        assert!(!state.is_open());
        state.toggle();
        state.toggle();

        assert_eq!(state.messages(), before.as_slice());
        assert_eq!(state.draft(), "half typed");
    }

    #[test]
    fn test_draft_editing_is_utf8_safe() {
        let mut state = ChatState::default();
        for (i, c) in "नमी".chars().enumerate() {
            state.insert_draft_char(i, c);
        }
        state.insert_draft_char(0, '>');
        assert_eq!(state.draft(), ">नमी");
        assert!(state.remove_draft_char(1));
        assert_eq!(state.draft(), ">मी");
        assert!(!state.remove_draft_char(10));
        state.insert_draft_char(99, '!');
        assert_eq!(state.draft(), ">मी!");
    }

    #[test]
    fn test_capture_lifecycle() {
        let mut state = ChatState::default();
        state.begin_capture(1).unwrap();
        assert!(!state.is_listening());
        assert_eq!(state.apply_capture(1, &CaptureEvent::Started), CaptureTransition::StartedListening);
        assert!(state.is_listening());
        assert_eq!(state.apply_capture(1, &CaptureEvent::Ended), CaptureTransition::Stopped);
        assert!(!state.is_listening());
        assert_eq!(state.capture_status(), CaptureStatus::Idle);
    }

    #[test]
    fn test_second_capture_is_rejected_while_active() {
        let mut state = ChatState::default();
        state.begin_capture(1).unwrap();
        assert!(matches!(state.begin_capture(2), Err(Error::CaptureBusy)));
        state.apply_capture(1, &CaptureEvent::Started);
        assert!(matches!(state.begin_capture(2), Err(Error::CaptureBusy)));
        state.apply_capture(1, &CaptureEvent::Error("no-speech".into()));
        assert!(state.begin_capture(2).is_ok());
    }

    #[test]
    fn test_result_replaces_draft() {
        let mut state = ChatState::default();
        state.set_draft("old text");
        state.begin_capture(7).unwrap();
        state.apply_capture(7, &CaptureEvent::Started);
        assert_eq!(state.apply_capture(7, &final_result("Hola")), CaptureTransition::DraftReplaced);
        assert_eq!(state.draft(), "Hola");
        assert!(!state.is_listening());
    }

    #[test]
    fn test_only_first_final_result_counts() {
        let mut state = ChatState::default();
        state.begin_capture(1).unwrap();
        state.apply_capture(1, &CaptureEvent::Started);
        let interim = CaptureEvent::Result { transcript: "Ho".into(), is_final: false };
        assert_eq!(state.apply_capture(1, &interim), CaptureTransition::Ignored);
        assert_eq!(state.draft(), "");
        state.apply_capture(1, &final_result("Hola"));
        assert_eq!(state.apply_capture(1, &final_result("Adiós")), CaptureTransition::Ignored);
        assert_eq!(state.draft(), "Hola");
    }

    #[test]
    fn test_capture_error_appends_nothing() {
        let mut state = ChatState::with_greeting("hi");
        state.set_draft("keep me");
        state.begin_capture(3).unwrap();
        state.apply_capture(3, &CaptureEvent::Started);
        state.apply_capture(3, &CaptureEvent::Error("network".into()));
        assert_eq!(state.messages().len(), 1);
        assert_eq!(state.draft(), "keep me");
        assert!(!state.is_listening());
    }

    #[test]
    fn test_stale_session_events_are_ignored() {
        let mut state = ChatState::default();
        state.begin_capture(1).unwrap();
        state.apply_capture(1, &CaptureEvent::Ended);
        state.begin_capture(2).unwrap();
        assert_eq!(state.apply_capture(1, &final_result("late")), CaptureTransition::Ignored);
        assert_eq!(state.draft(), "");
        assert_eq!(state.capture_status(), CaptureStatus::Starting(2));
    }
}
