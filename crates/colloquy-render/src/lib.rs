//! colloquy-render
//!
//! HTML pages for the chat routes: the chat surface shell, the client-side
//! redirect that mints a conversation id, and the not-found page.

pub mod error;
pub mod render;
