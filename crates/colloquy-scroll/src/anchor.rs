use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

/// Something that can be scrolled into view, typically the element placed
/// after the last message of a transcript.
///
/// Called from a Tokio task with no controller lock held, so an
/// implementation may query or reschedule through a [`crate::ScrollHandle`].
pub trait ScrollTarget: Send + Sync {
    fn scroll_into_view(&self, options: ScrollOptions);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollOptions {
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

impl ScrollOptions {
    /// Smooth scroll, aligned to the end of the scroll container.
    pub const SMOOTH_TO_END: Self = Self {
        behavior: ScrollBehavior::Smooth,
        block: ScrollBlock::End,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBlock {
    Start,
    Center,
    End,
    Nearest,
}

/// Stable handle to the end-of-transcript anchor.
///
/// The controller holds one clone and the rendering surface another; the
/// surface attaches its target when mounted and detaches it when unmounted.
/// The target is resolved lazily when a scroll fires.
#[derive(Clone, Default)]
pub struct AnchorHandle {
    target: Arc<Mutex<Option<Arc<dyn ScrollTarget>>>>,
}

impl AnchorHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&self, target: Arc<dyn ScrollTarget>) {
        *self.slot() = Some(target);
    }

    pub fn detach(&self) {
        *self.slot() = None;
    }

    pub fn is_attached(&self) -> bool {
        self.slot().is_some()
    }

    pub(crate) fn current(&self) -> Option<Arc<dyn ScrollTarget>> {
        self.slot().clone()
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<Arc<dyn ScrollTarget>>> {
        self.target.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for AnchorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnchorHandle")
            .field("attached", &self.is_attached())
            .finish()
    }
}
