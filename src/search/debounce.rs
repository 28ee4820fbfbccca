// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Debounced search: one pipeline run per burst of keystrokes.
//!
//! Every `submit` cancels the pending run and arms a new timer. When the timer
//! fires, the run reads whatever request is *latest at that moment*, so a slow
//! timer can never execute a stale query. `submit_now` is the blur/Enter path:
//! cancel and run immediately.
//!
//! Timers come from a [`Scheduler`], which keeps the pipeline testable without
//! real time. [`ManualScheduler`] is a fake clock for tests; `TokioScheduler`
//! (feature `tokio-scheduler`) uses the ambient tokio runtime.
//!
//! # Invariants
//!
//! - At most one run per debounce window.
//! - A superseded task that fires anyway is a no-op (ticket check).
//! - A run that has started always finishes; there is no mid-run cancellation.
//! - If a timer can't be armed, the search runs synchronously instead of being
//!   dropped.

use super::pipeline::{SearchOutcome, SearchRequest};
use crate::error::ScheduleError;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

/// Work handed to a scheduler.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Receives every completed search.
pub type ResultSink = Arc<dyn Fn(SearchOutcome) + Send + Sync>;

/// Delayed execution with cancellation.
pub trait Scheduler: Send + Sync {
    type Handle: Send + 'static;

    /// Run `task` after `delay`.
    fn schedule(&self, delay: Duration, task: Task) -> Result<Self::Handle, ScheduleError>;

    /// Cancel a scheduled task. Cancelling a task that already ran is a no-op.
    fn cancel(&self, handle: Self::Handle);
}

struct DebounceState<H> {
    ticket: u64,
    latest: Option<SearchRequest>,
    pending: Option<H>,
}

/// Collapses bursts of requests into single pipeline runs.
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay: Duration,
    sink: ResultSink,
    state: Arc<Mutex<DebounceState<S::Handle>>>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay: Duration, sink: ResultSink) -> Self {
        Self {
            scheduler,
            delay,
            sink,
            state: Arc::new(Mutex::new(DebounceState {
                ticket: 0,
                latest: None,
                pending: None,
            })),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Is a run armed and waiting for its timer?
    pub fn is_pending(&self) -> bool {
        self.state.lock().pending.is_some()
    }

    /// Replace the pending request and restart the timer.
    pub fn submit(&self, request: SearchRequest) {
        let mut state = self.state.lock();
        state.ticket += 1;
        let ticket = state.ticket;
        state.latest = Some(request);
        if let Some(handle) = state.pending.take() {
            self.scheduler.cancel(handle);
        }

        let shared = Arc::clone(&self.state);
        let sink = Arc::clone(&self.sink);
        let task: Task = Box::new(move || fire(&shared, &sink, ticket));

        match self.scheduler.schedule(self.delay, task) {
            Ok(handle) => {
                state.pending = Some(handle);
                tracing::debug!(ticket, delay_ms = self.delay.as_millis() as u64, "search scheduled");
            }
            Err(err) => {
                drop(state);
                tracing::warn!(%err, "debounce timer unavailable, searching immediately");
                fire(&self.state, &self.sink, ticket);
            }
        }
    }

    /// Cancel anything pending and run `request` right away.
    pub fn submit_now(&self, request: SearchRequest) {
        self.discard_pending();
        (self.sink)(request.execute());
    }

    /// Run the pending request now, if there is one. Returns whether it ran.
    pub fn flush(&self) -> bool {
        let request = {
            let mut state = self.state.lock();
            state.ticket += 1;
            if let Some(handle) = state.pending.take() {
                self.scheduler.cancel(handle);
            }
            state.latest.take()
        };
        match request {
            Some(request) => {
                (self.sink)(request.execute());
                true
            }
            None => false,
        }
    }

    /// Drop the pending request without running it.
    pub fn cancel(&self) {
        self.discard_pending();
    }

    fn discard_pending(&self) {
        let mut state = self.state.lock();
        state.ticket += 1;
        state.latest = None;
        if let Some(handle) = state.pending.take() {
            self.scheduler.cancel(handle);
        }
    }
}

fn fire<H>(state: &Mutex<DebounceState<H>>, sink: &ResultSink, ticket: u64) {
    let request = {
        let mut state = state.lock();
        if state.ticket != ticket {
            tracing::debug!(ticket, current = state.ticket, "skipping superseded search");
            return;
        }
        state.pending = None;
        state.latest.take()
    };

    if let Some(request) = request {
        sink(request.execute());
    }
}

// =============================================================================
// MANUAL SCHEDULER (fake clock)
// =============================================================================

/// Identifies a task armed on a [`ManualScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_id: u64,
    tasks: BTreeMap<TimerId, (Duration, Task)>,
}

/// A scheduler driven by hand: nothing fires until [`ManualScheduler::advance`].
///
/// Clones share one clock.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Arc<Mutex<ManualClock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the fake clock.
    pub fn now(&self) -> Duration {
        self.clock.lock().now
    }

    /// Tasks armed and not yet run or cancelled.
    pub fn pending(&self) -> usize {
        self.clock.lock().tasks.len()
    }

    /// Move the clock forward and run every task that came due, earliest first.
    /// Returns how many ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = {
            let mut clock = self.clock.lock();
            clock.now += by;
            clock.now
        };

        let mut ran = 0;
        loop {
            // Tasks run outside the lock so they can schedule or cancel.
            let next = {
                let mut clock = self.clock.lock();
                let due = clock
                    .tasks
                    .iter()
                    .filter(|(_, (at, _))| *at <= target)
                    .min_by_key(|(id, (at, _))| (*at, **id))
                    .map(|(id, _)| *id);
                due.and_then(|id| clock.tasks.remove(&id))
            };
            match next {
                Some((_, task)) => {
                    task();
                    ran += 1;
                }
                None => break,
            }
        }
        ran
    }
}

impl Scheduler for ManualScheduler {
    type Handle = TimerId;

    fn schedule(&self, delay: Duration, task: Task) -> Result<TimerId, ScheduleError> {
        let mut clock = self.clock.lock();
        let id = TimerId(clock.next_id);
        clock.next_id += 1;
        let at = clock.now + delay;
        clock.tasks.insert(id, (at, task));
        Ok(id)
    }

    fn cancel(&self, handle: TimerId) {
        self.clock.lock().tasks.remove(&handle);
    }
}

// =============================================================================
// TOKIO SCHEDULER
// =============================================================================

/// Timers on the current tokio runtime.
///
/// Outside a runtime `schedule` fails with `Unavailable`, which makes the
/// debouncer fall back to running synchronously.
#[cfg(feature = "tokio-scheduler")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

#[cfg(feature = "tokio-scheduler")]
impl Scheduler for TokioScheduler {
    type Handle = tokio::task::JoinHandle<()>;

    fn schedule(&self, delay: Duration, task: Task) -> Result<Self::Handle, ScheduleError> {
        let runtime =
            tokio::runtime::Handle::try_current().map_err(|_| ScheduleError::Unavailable)?;
        Ok(runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        }))
    }

    fn cancel(&self, handle: Self::Handle) {
        handle.abort();
    }
}
