//! PopcornPicks: terminal client for a movie recommendation backend.
//!
//! - **Model**: `models/` (wire types) and `state/` (search lifecycle, cards)
//! - **Message / Update**: `message.rs`, `update.rs`
//! - **View / Event**: `view/`, `event/`
//! - **Services**: `services/` (HTTP backend, poster loading)

pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod logging;
pub mod message;
pub mod models;
pub mod oneshot;
pub mod services;
pub mod state;
pub mod terminal;
pub mod update;
pub mod view;
