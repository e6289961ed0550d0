//! Once-per-second drivers for the session countdowns.
//!
//! Each countdown gets its own tokio task. Tasks share the session through
//! an async mutex and forward the events their ticks produce. There is no
//! ordering between the hydration and eye-rest tasks.
//!
//! A [`CountdownTicker`] aborts its task when dropped, so replacing one in
//! [`Ticker`] never leaves two tasks driving the same countdown.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::countdown::CountdownKind;
use crate::error::ValidationError;
use crate::events::Event;
use crate::planner::{PlannerCommand, PlannerSession};

pub type SharedSession = Arc<Mutex<PlannerSession>>;

/// Default tick period.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Cancellation handle for one countdown task.
#[derive(Debug)]
pub struct CountdownTicker {
    kind: CountdownKind,
    handle: JoinHandle<()>,
}

impl CountdownTicker {
    /// Spawn a task that ticks `kind` every `period`, starting one period
    /// from now.
    pub fn spawn(
        kind: CountdownKind,
        session: SharedSession,
        events: UnboundedSender<Event>,
        period: Duration,
    ) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                let event = session.lock().await.tick(kind);
                if let Some(event) = event {
                    if events.send(event).is_err() {
                        tracing::debug!(countdown = %kind, "event receiver gone, stopping");
                        break;
                    }
                }
            }
        });
        tracing::debug!(countdown = %kind, "countdown task started");
        Self { kind, handle }
    }

    pub fn kind(&self) -> CountdownKind {
        self.kind
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for CountdownTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Owns both countdown tasks for one session.
#[derive(Debug)]
pub struct Ticker {
    session: SharedSession,
    events: UnboundedSender<Event>,
    period: Duration,
    hydration: Option<CountdownTicker>,
    eye: Option<CountdownTicker>,
}

impl Ticker {
    /// Start both countdowns with the default one second period.
    pub fn start(session: SharedSession, events: UnboundedSender<Event>) -> Self {
        Self::with_period(session, events, TICK_PERIOD)
    }

    pub fn with_period(
        session: SharedSession,
        events: UnboundedSender<Event>,
        period: Duration,
    ) -> Self {
        let mut ticker = Self {
            session,
            events,
            period,
            hydration: None,
            eye: None,
        };
        for kind in CountdownKind::ALL {
            ticker.reschedule(kind);
        }
        ticker
    }

    pub fn session(&self) -> &SharedSession {
        &self.session
    }

    /// Cancel the task for `kind` (if any) and start a fresh one.
    pub fn reschedule(&mut self, kind: CountdownKind) {
        let slot = match kind {
            CountdownKind::Hydration => &mut self.hydration,
            CountdownKind::EyeRest => &mut self.eye,
        };
        if let Some(old) = slot.take() {
            old.cancel();
        }
        *slot = Some(CountdownTicker::spawn(
            kind,
            Arc::clone(&self.session),
            self.events.clone(),
            self.period,
        ));
    }

    /// Apply a command to the session and realign any countdown it reset.
    pub async fn apply(&mut self, command: PlannerCommand) -> Result<Vec<Event>, ValidationError> {
        let events = self.session.lock().await.apply(command)?;
        for kind in events.iter().filter_map(Event::reset_countdown) {
            self.reschedule(kind);
        }
        Ok(events)
    }

    /// Number of countdown tasks still running.
    pub fn live_tasks(&self) -> usize {
        [&self.hydration, &self.eye]
            .into_iter()
            .flatten()
            .filter(|t| !t.is_finished())
            .count()
    }

    pub fn shutdown(&mut self) {
        for slot in [&mut self.hydration, &mut self.eye] {
            if let Some(task) = slot.take() {
                task.cancel();
            }
        }
        tracing::debug!("ticker shut down");
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
