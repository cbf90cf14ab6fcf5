pub mod classifier;
pub mod composer;
pub mod detector;
pub mod rules;

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::engine::classifier::classify_language;
use crate::engine::rules::RuleTable;
use crate::session::{Message, Session};
use crate::settings::EngineConfig;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("analysis already in flight")]
    Busy,
    #[error("empty message")]
    EmptyText,
}

/// The advisory engine: owns the session state machine, composes replies
/// synchronously at submit time, and schedules their delivery after a
/// simulated thinking delay.
pub struct Advisor {
    session: Arc<Mutex<Session>>,
    rules: RuleTable,
    config: EngineConfig,
    rng: Mutex<fastrand::Rng>,
    events: broadcast::Sender<Message>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Advisor {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_rng(config, fastrand::Rng::new())
    }

    pub fn with_rng(config: EngineConfig, rng: fastrand::Rng) -> Self {
        let (events, _) = broadcast::channel(64);
        Self {
            session: Arc::new(Mutex::new(Session::new(Message::assistant(rules::WELCOME)))),
            rules: RuleTable::builtin(),
            config,
            rng: Mutex::new(rng),
            events,
            pending: Mutex::new(None),
        }
    }

    pub fn is_analyzing(&self) -> bool {
        lock(&self.session).is_analyzing()
    }

    pub fn messages(&self) -> Vec<Message> {
        lock(&self.session).messages().to_vec()
    }

    /// Append notifications for the host UI. The engine never depends on
    /// receivers being present.
    pub fn subscribe(&self) -> broadcast::Receiver<Message> {
        self.events.subscribe()
    }

    /// Engine-boundary contract: misuse is a silent no-op.
    pub fn submit(&self, text: &str) {
        if let Err(err) = self.try_submit(text) {
            debug!(%err, "submission ignored");
        }
    }

    pub fn try_submit(&self, text: &str) -> Result<(), SubmitError> {
        if text.trim().is_empty() {
            return Err(SubmitError::EmptyText);
        }
        if self.is_analyzing() {
            return Err(SubmitError::Busy);
        }

        let submission = detector::split_submission(text);
        let mut rng = lock(&self.rng);
        let (user_msg, reply) = match submission.code {
            Some(code) => {
                // Language is computed once, at message-creation time.
                let language = classify_language(&code);
                let reply = composer::compose_review(&code, &self.rules, &self.config, &mut rng);
                (Message::user_with_code(submission.content, code, language), reply)
            }
            None => (Message::user(submission.content), rules::ASK_FOR_CODE.to_string()),
        };
        let window = self.config.delay_max_ms.saturating_sub(self.config.delay_min_ms);
        let delay = Duration::from_millis(self.config.delay_min_ms + rng.u64(0..=window));
        drop(rng);

        if !lock(&self.session).begin_turn(user_msg.clone()) {
            return Err(SubmitError::Busy);
        }
        let _ = self.events.send(user_msg);
        debug!(delay_ms = delay.as_millis() as u64, "reply scheduled");

        let session = Arc::clone(&self.session);
        let events = self.events.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let appended = lock(&session).finish_turn(reply);
            if let Some(msg) = appended {
                let _ = events.send(msg);
            }
        });
        *lock(&self.pending) = Some(handle);
        Ok(())
    }
}

// Teardown extension: a dropped advisor cancels its scheduled reply.
impl Drop for Advisor {
    fn drop(&mut self) {
        if let Some(handle) = lock(&self.pending).take() {
            handle.abort();
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
