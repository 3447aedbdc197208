use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use colloquy_core::models::conversation::Message;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::anchor::{AnchorHandle, ScrollOptions};

/// Quiet period between the last transcript update and the scroll.
pub const SCROLL_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollState {
    Idle,
    Pending { deadline: Instant },
}

/// The inputs of the last observation. Any difference, including text
/// streaming into the newest message, counts as an update.
#[derive(Debug, Clone, PartialEq)]
struct Snapshot {
    messages: Vec<Message>,
    is_loading: bool,
}

struct Timer {
    state: ScrollState,
    /// Bumped on every reschedule and teardown. A timer task only fires if
    /// the generation it was spawned with is still current.
    generation: u64,
    task: Option<JoinHandle<()>>,
}

/// Cloneable access to a controller's timer, for code that needs to query
/// or drive scheduling from elsewhere (a scroll target included).
#[derive(Clone)]
pub struct ScrollHandle {
    anchor: AnchorHandle,
    delay: Duration,
    timer: Arc<Mutex<Timer>>,
}

impl ScrollHandle {
    pub fn state(&self) -> ScrollState {
        lock(&self.timer).state
    }

    /// Cancel any pending scroll and schedule a new one `delay` from now.
    pub fn schedule(&self) {
        let mut timer = lock(&self.timer);
        timer.generation += 1;
        if let Some(task) = timer.task.take() {
            task.abort();
        }

        let deadline = Instant::now() + self.delay;
        let generation = timer.generation;
        let shared = Arc::clone(&self.timer);
        let anchor = self.anchor.clone();

        timer.state = ScrollState::Pending { deadline };
        timer.task = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            fire(&shared, generation, &anchor);
        }));
        tracing::trace!(generation, "scroll scheduled");
    }

    /// Cancel any pending scroll. Once this returns, no scroll that was
    /// still pending can fire.
    pub fn teardown(&self) {
        let mut timer = lock(&self.timer);
        timer.generation += 1;
        if let Some(task) = timer.task.take() {
            task.abort();
        }
        timer.state = ScrollState::Idle;
    }
}

/// Debounced scroll-to-newest-message behavior for one transcript view.
///
/// Timers are Tokio tasks, so [`AutoScroll::observe`] must be called from
/// within a Tokio runtime. Dropping the controller tears it down.
pub struct AutoScroll {
    handle: ScrollHandle,
    last_seen: Option<Snapshot>,
}

impl AutoScroll {
    pub fn new(anchor: AnchorHandle) -> Self {
        Self::with_delay(anchor, SCROLL_DELAY)
    }

    pub fn with_delay(anchor: AnchorHandle, delay: Duration) -> Self {
        Self {
            handle: ScrollHandle {
                anchor,
                delay,
                timer: Arc::new(Mutex::new(Timer {
                    state: ScrollState::Idle,
                    generation: 0,
                    task: None,
                })),
            },
            last_seen: None,
        }
    }

    /// The handle the rendering surface must attach at the end of the
    /// transcript.
    pub fn anchor(&self) -> &AnchorHandle {
        &self.handle.anchor
    }

    pub fn handle(&self) -> ScrollHandle {
        self.handle.clone()
    }

    pub fn state(&self) -> ScrollState {
        self.handle.state()
    }

    /// Report the transcript as currently rendered. Schedules a scroll
    /// unless the messages and loading flag are identical to the previous
    /// observation; the first observation always counts as a change.
    pub fn observe(&mut self, messages: &[Message], is_loading: bool) {
        if let Some(seen) = &self.last_seen
            && seen.is_loading == is_loading
            && seen.messages == messages
        {
            return;
        }
        self.last_seen = Some(Snapshot {
            messages: messages.to_vec(),
            is_loading,
        });
        self.handle.schedule();
    }

    pub fn schedule(&self) {
        self.handle.schedule();
    }

    pub fn teardown(&self) {
        self.handle.teardown();
    }
}

impl Drop for AutoScroll {
    fn drop(&mut self) {
        self.teardown();
    }
}

// The generation check and the transition to idle happen under the lock;
// the target runs after it is released so it may call back into the
// controller.
fn fire(shared: &Mutex<Timer>, generation: u64, anchor: &AnchorHandle) {
    {
        let mut timer = lock(shared);
        if timer.generation != generation {
            return;
        }
        timer.state = ScrollState::Idle;
        timer.task = None;
    }

    match anchor.current() {
        Some(target) => target.scroll_into_view(ScrollOptions::SMOOTH_TO_END),
        None => tracing::trace!("scroll anchor not attached, skipping"),
    }
}

fn lock(timer: &Mutex<Timer>) -> MutexGuard<'_, Timer> {
    timer.lock().unwrap_or_else(PoisonError::into_inner)
}
