//! Mock assistant replies, delivered after a fixed delay.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::error::{Error, Result};

pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1000);

/// The canned assistant response for a user message.
pub fn mock_reply(original: &str) -> String {
    format!("I understand you're asking about {original}. Let me help you with that.")
}

/// What happens to a pending reply when the chat is closed before it lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReplyPolicy {
    /// Reply is appended regardless of visibility.
    #[default]
    Always,
    /// Closing the chat cancels pending replies.
    SuppressWhenClosed,
}

impl ReplyPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplyPolicy::Always => "always",
            ReplyPolicy::SuppressWhenClosed => "suppress-when-closed",
        }
    }

}

impl FromStr for ReplyPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "always" => Ok(ReplyPolicy::Always),
            "suppress-when-closed" | "suppress" => Ok(ReplyPolicy::SuppressWhenClosed),
            other => Err(Error::Config(format!(
                "unknown reply policy '{other}' (expected always or suppress-when-closed)"
            ))),
        }
    }
}

/// A reply whose delay has elapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyReady {
    pub id: u64,
    pub text: String,
}

/// Handle to a scheduled reply. Dropping it leaves the reply scheduled.
#[derive(Debug)]
pub struct ReplyHandle {
    id: u64,
    task: JoinHandle<()>,
}

impl ReplyHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn cancel(&self) {
        self.task.abort();
    }
}

/// Schedules one-shot reply timers on the tokio runtime.
///
/// Timers never touch chat state; they send a [`ReplyReady`] into the
/// channel and the event loop applies it.
#[derive(Debug)]
pub struct ReplyScheduler {
    delay: Duration,
    next_id: u64,
}

impl ReplyScheduler {
    pub fn new(delay: Duration) -> Self {
        Self { delay, next_id: 0 }
    }

    /// Must be called from within a tokio runtime.
    pub fn schedule<E>(&mut self, original: &str, tx: mpsc::UnboundedSender<E>) -> ReplyHandle
    where
        E: From<ReplyReady> + Send + 'static,
    {
        self.next_id += 1;
        let id = self.next_id;
        let text = mock_reply(original);
        let delay = self.delay;

        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(E::from(ReplyReady { id, text })).is_err() {
                tracing::debug!(id, "reply dropped, event loop is gone");
            }
        });

        tracing::debug!(id, delay_ms = delay.as_millis() as u64, "reply scheduled");
        ReplyHandle { id, task }
    }
}

impl Default for ReplyScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_REPLY_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_reply_contains_original() {
        let reply = mock_reply("soil pH");
        assert_eq!(reply, "I understand you're asking about soil pH. Let me help you with that.");
        assert_eq!(mock_reply("soil pH"), reply);
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("always".parse::<ReplyPolicy>().unwrap(), ReplyPolicy::Always);
        assert_eq!(
            "Suppress-When-Closed".parse::<ReplyPolicy>().unwrap(),
            ReplyPolicy::SuppressWhenClosed
        );
        assert!(matches!("never".parse::<ReplyPolicy>(), Err(Error::Config(_))));
        for policy in [ReplyPolicy::Always, ReplyPolicy::SuppressWhenClosed] {
            assert_eq!(policy.as_str().parse::<ReplyPolicy>().unwrap(), policy);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_arrives_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel::<ReplyReady>();
        let mut scheduler = ReplyScheduler::default();
        let start = tokio::time::Instant::now();

        let handle = scheduler.schedule("tomatoes", tx);
        let ready = rx.recv().await.unwrap();

        assert_eq!(ready.id, handle.id());
        assert!(ready.text.contains("tomatoes"));
        assert!(start.elapsed() >= DEFAULT_REPLY_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_nothing_arrives_before_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel::<ReplyReady>();
        let mut scheduler = ReplyScheduler::new(Duration::from_millis(1000));
        let _handle = scheduler.schedule("x", tx);

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert!(rx.try_recv().is_err());
        tokio::time::sleep(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_reply_never_arrives() {
        let (tx, mut rx) = mpsc::unbounded_channel::<ReplyReady>();
        let mut scheduler = ReplyScheduler::default();
        let handle = scheduler.schedule("x", tx);
        handle.cancel();

        // Sender is dropped with the aborted task, so the channel closes empty.
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_replies_arrive_in_schedule_order() {
        let (tx, mut rx) = mpsc::unbounded_channel::<ReplyReady>();
        let mut scheduler = ReplyScheduler::default();
        scheduler.schedule("first", tx.clone());
        tokio::time::sleep(Duration::from_millis(10)).await;
        scheduler.schedule("second", tx);

        let a = rx.recv().await.unwrap();
        let b = rx.recv().await.unwrap();
        assert!(a.id < b.id);
        assert!(a.text.contains("first"));
        assert!(b.text.contains("second"));
    }
}
