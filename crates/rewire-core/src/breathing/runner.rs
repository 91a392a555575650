//! Cancellable tick producer for a running session.
//!
//! Exactly one ticker drives one session. The tick task re-checks a
//! generation counter under the session lock before every mutation, and
//! `stop()` bumps the generation before taking the lock itself, so once
//! `stop()` returns no tick can mutate the session again - even a tick
//! that was already scheduled when stop was called.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::session::BreathingSession;
use crate::events::Event;

/// Handle to the periodic tick task of one session.
pub struct SessionTicker {
    session: Arc<Mutex<BreathingSession>>,
    generation: Arc<AtomicU64>,
    task: JoinHandle<()>,
}

impl SessionTicker {
    /// Spawn the tick loop for `session`.
    ///
    /// `period` is the wall-clock cadence between ticks (one second in
    /// production; each tick advances exactly one logical second
    /// regardless, which lets tests compress time). Every tick sends a
    /// `StateSnapshot` followed by any event the session produced. The
    /// task exits on completion, on `stop()`, or when the session is
    /// found inactive.
    pub fn spawn(
        session: Arc<Mutex<BreathingSession>>,
        period: Duration,
        events: UnboundedSender<Event>,
    ) -> Self {
        let generation = Arc::new(AtomicU64::new(0));
        let task_generation = Arc::clone(&generation);
        let task_session = Arc::clone(&session);

        let task = tokio::spawn(async move {
            let my_generation = task_generation.load(Ordering::SeqCst);
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // An interval's first tick resolves immediately; the session
            // starts at t=0, so consume it before the loop.
            interval.tick().await;

            loop {
                interval.tick().await;
                let completed = {
                    let Ok(mut session) = task_session.lock() else {
                        break;
                    };
                    if task_generation.load(Ordering::SeqCst) != my_generation
                        || !session.is_active()
                    {
                        break;
                    }
                    let event = session.tick();
                    let _ = events.send(session.snapshot());
                    match event {
                        Some(event) => {
                            let completed = matches!(event, Event::SessionCompleted { .. });
                            let _ = events.send(event);
                            completed
                        }
                        None => false,
                    }
                };
                if completed {
                    break;
                }
            }
        });

        Self {
            session,
            generation,
            task,
        }
    }

    /// Cancel the tick task and deactivate the session.
    ///
    /// Synchronous guarantee: the generation is invalidated before the
    /// session lock is taken, so any in-flight tick either ran to
    /// completion before this call acquired the lock or observes the stale
    /// generation and mutates nothing. No state field changes after this
    /// returns.
    pub fn stop(&self) -> Option<Event> {
        self.generation.fetch_add(1, Ordering::SeqCst);
        let stopped = match self.session.lock() {
            Ok(mut session) => session.stop(),
            Err(_) => None,
        };
        self.task.abort();
        stopped
    }

    /// Wait for the tick task to finish (completion or cancellation).
    pub async fn wait(self) {
        let _ = self.task.await;
    }
}
