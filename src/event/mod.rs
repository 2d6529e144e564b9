//! Event layer: turns keyboard input into [`AppMessage`](crate::message::AppMessage)s.
//!
//! Focus decides where keys go:
//! - Input: printable keys edit the query, Enter submits
//! - Suggestions: ←/→ pick a preset, Enter runs it
//! - Results: ↑/↓ pick a card, Enter/Space expands or collapses it
//!
//! Tab / Shift+Tab move focus, Esc or Ctrl+C quit. Typing and activation are
//! ignored while a search is loading.

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
