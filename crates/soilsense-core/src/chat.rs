//! Chat widget controller.
//!
//! Ties [`ChatState`] to the reply timers and the voice recognizer. Timers and
//! recognizer callbacks only send [`ChatEvent`]s; state changes happen when
//! the owner feeds those events back through [`ChatController::handle_event`],
//! one at a time.

use std::collections::BTreeMap;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::error::{Error, Result};
use crate::i18n::Language;
use crate::reply::{ReplyHandle, ReplyPolicy, ReplyReady, ReplyScheduler, DEFAULT_REPLY_DELAY};
use crate::state::{CaptureTransition, ChatState};
use crate::voice::{CaptureEvent, SessionId, VoiceCapture};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    Reply(ReplyReady),
    Capture { session: SessionId, event: CaptureEvent },
}

impl From<ReplyReady> for ChatEvent {
    fn from(ready: ReplyReady) -> Self {
        ChatEvent::Reply(ready)
    }
}

/// What handling a [`ChatEvent`] changed, so the view knows what to refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Ignored,
    TranscriptChanged,
    DraftReplaced,
    ListeningChanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatOptions {
    pub reply_delay: Duration,
    pub reply_policy: ReplyPolicy,
}

impl Default for ChatOptions {
    fn default() -> Self {
        Self {
            reply_delay: DEFAULT_REPLY_DELAY,
            reply_policy: ReplyPolicy::default(),
        }
    }
}

pub struct ChatController {
    state: ChatState,
    scheduler: ReplyScheduler,
    policy: ReplyPolicy,
    pending: BTreeMap<u64, ReplyHandle>,
    /// Replies whose timer fired before an earlier reply's did.
    arrived: BTreeMap<u64, String>,
    voice: VoiceCapture,
    events: mpsc::UnboundedSender<ChatEvent>,
}

impl ChatController {
    pub fn new(
        state: ChatState,
        options: ChatOptions,
        voice: VoiceCapture,
        events: mpsc::UnboundedSender<ChatEvent>,
    ) -> Self {
        Self {
            state,
            scheduler: ReplyScheduler::new(options.reply_delay),
            policy: options.reply_policy,
            pending: BTreeMap::new(),
            arrived: BTreeMap::new(),
            voice,
            events,
        }
    }

    pub fn state(&self) -> &ChatState {
        &self.state
    }

    pub fn voice_supported(&self) -> bool {
        self.voice.is_supported()
    }

    pub fn pending_replies(&self) -> usize {
        self.pending.len()
    }

    pub fn open(&mut self) {
        self.state.open();
    }

    pub fn close(&mut self) {
        self.state.close();
        if self.policy == ReplyPolicy::SuppressWhenClosed {
            self.cancel_pending();
        }
    }

    pub fn toggle(&mut self) {
        if self.state.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.state.set_draft(text);
    }

    pub fn insert_draft_char(&mut self, char_idx: usize, c: char) {
        self.state.insert_draft_char(char_idx, c);
    }

    pub fn remove_draft_char(&mut self, char_idx: usize) -> bool {
        self.state.remove_draft_char(char_idx)
    }

    /// Send the draft and schedule the mock reply.
    ///
    /// Needs a tokio runtime. Blank drafts return [`Error::EmptyInput`]
    /// without touching anything.
    pub fn submit_draft(&mut self) -> Result<()> {
        let sent = self.state.submit_draft()?;
        let handle = self.scheduler.schedule(&sent, self.events.clone());
        self.pending.insert(handle.id(), handle);
        tracing::debug!(chars = sent.chars().count(), "message sent");
        Ok(())
    }

    /// Start dictating into the draft using `language`'s locale.
    pub fn start_capture(&mut self, language: Language) -> Result<()> {
        if !self.voice.is_supported() {
            return Err(Error::UnsupportedCapability);
        }
        if self.state.capture_status().session().is_some() {
            return Err(Error::CaptureBusy);
        }

        let tx = self.events.clone();
        let session = self.voice.start(language, move |session, event| {
            let _ = tx.send(ChatEvent::Capture { session, event });
        })?;
        self.state.begin_capture(session)?;
        Ok(())
    }

    pub fn handle_event(&mut self, event: ChatEvent) -> EventOutcome {
        match event {
            ChatEvent::Reply(ready) => self.apply_reply(ready),
            ChatEvent::Capture { session, event } => self.apply_capture(session, event),
        }
    }

    /// Timers race on a multi-threaded runtime, so a reply is only applied
    /// once every earlier pending reply has been applied.
    fn apply_reply(&mut self, ready: ReplyReady) -> EventOutcome {
        if !self.pending.contains_key(&ready.id) {
            tracing::debug!(id = ready.id, "dropping cancelled reply");
            return EventOutcome::Ignored;
        }
        self.arrived.insert(ready.id, ready.text);

        let mut outcome = EventOutcome::Ignored;
        while let Some(entry) = self.pending.first_entry() {
            let id = *entry.key();
            let Some(text) = self.arrived.remove(&id) else {
                if !self.arrived.is_empty() {
                    tracing::debug!(waiting_for = id, held = self.arrived.len(), "holding early replies");
                }
                break;
            };
            entry.remove();

            if self.policy == ReplyPolicy::SuppressWhenClosed && !self.state.is_open() {
                tracing::debug!(id, "chat closed, reply suppressed");
                continue;
            }
            self.state.push_reply(text);
            outcome = EventOutcome::TranscriptChanged;
        }
        outcome
    }

    fn apply_capture(&mut self, session: SessionId, event: CaptureEvent) -> EventOutcome {
        if let CaptureEvent::Error(msg) = &event {
            tracing::warn!(session, error = %msg, "voice capture failed");
        }

        match self.state.apply_capture(session, &event) {
            CaptureTransition::Ignored => EventOutcome::Ignored,
            CaptureTransition::StartedListening => EventOutcome::ListeningChanged,
            CaptureTransition::DraftReplaced => {
                self.voice.finish(session);
                EventOutcome::DraftReplaced
            }
            CaptureTransition::Stopped => {
                self.voice.finish(session);
                EventOutcome::ListeningChanged
            }
        }
    }

    fn cancel_pending(&mut self) {
        for (_, handle) in std::mem::take(&mut self.pending) {
            handle.cancel();
        }
        self.arrived.clear();
    }

    /// Cancel pending replies and any capture in progress.
    pub fn shutdown(&mut self) {
        self.cancel_pending();
        self.voice.cancel();
        self.state.abort_capture();
    }
}
