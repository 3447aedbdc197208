//! colloquy-scroll
//!
//! Keeps a chat transcript pinned to its newest message. Whenever the
//! observed transcript changes, a smooth scroll to the end-of-transcript
//! anchor is scheduled after a short debounce; bursts of updates collapse
//! into a single scroll timed from the last one.

pub mod anchor;
pub mod controller;

pub use anchor::{AnchorHandle, ScrollBehavior, ScrollBlock, ScrollOptions, ScrollTarget};
pub use controller::{AutoScroll, ScrollHandle, ScrollState, SCROLL_DELAY};
