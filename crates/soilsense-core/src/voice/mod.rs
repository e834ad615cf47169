//! Speech-to-text draft input.
//!
//! A [`SpeechRecognizer`] is picked once at startup: either a real adapter
//! ([`CommandRecognizer`]) or [`UnsupportedRecognizer`] when no capability is
//! available. [`VoiceCapture`] wraps whichever one was picked and allows a
//! single session at a time.

mod command;

pub use command::CommandRecognizer;

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::error::{Error, Result};
use crate::i18n::Language;

pub type SessionId = u64;

/// Callback events from a recognizer, in the order a session emits them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureEvent {
    Started,
    Result { transcript: String, is_final: bool },
    Error(String),
    Ended,
}

pub type CaptureCallback = Arc<dyn Fn(CaptureEvent) + Send + Sync>;

/// A running capture. Dropping it cancels the session and releases its
/// event subscription.
#[derive(Debug, Default)]
pub struct CaptureSession {
    task: Option<JoinHandle<()>>,
}

impl CaptureSession {
    pub fn from_task(task: JoinHandle<()>) -> Self {
        Self { task: Some(task) }
    }

    /// Session with nothing to release, for recognizers that report synchronously.
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for CaptureSession {
    fn drop(&mut self) {
        self.cancel();
    }
}

pub trait SpeechRecognizer: Send + Sync {
    fn name(&self) -> &str;

    fn is_supported(&self) -> bool;

    /// Begin one capture session at `locale`. Every event of the session,
    /// including errors, is reported through `on_event`.
    fn start(&self, locale: &str, on_event: CaptureCallback) -> Result<CaptureSession>;
}

/// Null adapter used when the platform has no speech recognition.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedRecognizer;

impl SpeechRecognizer for UnsupportedRecognizer {
    fn name(&self) -> &str {
        "unsupported"
    }

    fn is_supported(&self) -> bool {
        false
    }

    fn start(&self, _locale: &str, _on_event: CaptureCallback) -> Result<CaptureSession> {
        Err(Error::UnsupportedCapability)
    }
}

/// Pick the recognizer for this run.
pub fn recognizer_from_config(command: Option<&[String]>, enabled: bool) -> Box<dyn SpeechRecognizer> {
    if !enabled {
        tracing::info!("voice capture disabled");
        return Box::new(UnsupportedRecognizer);
    }

    match command {
        Some(command) => match CommandRecognizer::new(command) {
            Ok(recognizer) => {
                tracing::info!(program = recognizer.program(), "voice capture via external command");
                Box::new(recognizer)
            }
            Err(e) => {
                tracing::warn!(error = %e, "ignoring voice command");
                Box::new(UnsupportedRecognizer)
            }
        },
        None => {
            tracing::info!("no voice command configured, voice capture unsupported");
            Box::new(UnsupportedRecognizer)
        }
    }
}

pub struct VoiceCapture {
    recognizer: Box<dyn SpeechRecognizer>,
    next_session: SessionId,
    active: Option<(SessionId, CaptureSession)>,
}

impl VoiceCapture {
    pub fn new(recognizer: Box<dyn SpeechRecognizer>) -> Self {
        Self {
            recognizer,
            next_session: 0,
            active: None,
        }
    }

    pub fn unsupported() -> Self {
        Self::new(Box::new(UnsupportedRecognizer))
    }

    pub fn is_supported(&self) -> bool {
        self.recognizer.is_supported()
    }

    pub fn active_session(&self) -> Option<SessionId> {
        self.active.as_ref().map(|(id, _)| *id)
    }

    /// Start a session in `language`'s locale. `on_event` receives each event
    /// tagged with the new session id.
    pub fn start<F>(&mut self, language: Language, on_event: F) -> Result<SessionId>
    where
        F: Fn(SessionId, CaptureEvent) + Send + Sync + 'static,
    {
        if !self.recognizer.is_supported() {
            return Err(Error::UnsupportedCapability);
        }
        if self.active.is_some() {
            return Err(Error::CaptureBusy);
        }

        self.next_session += 1;
        let id = self.next_session;
        let locale = language.locale_tag();
        let callback: CaptureCallback = Arc::new(move |event| on_event(id, event));

        let session = self.recognizer.start(locale, callback)?;
        tracing::debug!(session = id, locale, recognizer = self.recognizer.name(), "capture started");
        self.active = Some((id, session));
        Ok(id)
    }

    /// Release `session` if it is the active one.
    pub fn finish(&mut self, session: SessionId) {
        if self.active_session() == Some(session) {
            self.active = None;
            tracing::debug!(session, "capture finished");
        }
    }

    pub fn cancel(&mut self) {
        if let Some((id, mut session)) = self.active.take() {
            session.cancel();
            tracing::debug!(session = id, "capture cancelled");
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::*;

    /// Recognizer that replays a fixed script synchronously on start.
    pub struct ScriptedRecognizer {
        script: Vec<CaptureEvent>,
        pub locales: Arc<Mutex<Vec<String>>>,
    }

    impl ScriptedRecognizer {
        pub fn new(script: Vec<CaptureEvent>) -> Self {
            Self {
                script,
                locales: Arc::new(Mutex::new(Vec::new())),
            }
        }

        /// Start, one final transcript, end.
        pub fn hearing(text: &str) -> Self {
            Self::new(vec![
                CaptureEvent::Started,
                CaptureEvent::Result { transcript: text.to_string(), is_final: true },
                CaptureEvent::Ended,
            ])
        }
    }

    impl SpeechRecognizer for ScriptedRecognizer {
        fn name(&self) -> &str {
            "scripted"
        }

        fn is_supported(&self) -> bool {
            true
        }

        fn start(&self, locale: &str, on_event: CaptureCallback) -> Result<CaptureSession> {
            self.locales.lock().unwrap().push(locale.to_string());
            for event in &self.script {
                on_event(event.clone());
            }
            Ok(CaptureSession::detached())
        }
    }
}
