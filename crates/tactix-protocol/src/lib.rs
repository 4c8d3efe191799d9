//! Shared types for the Tactix match backend.
//!
//! This crate defines the "language" the backend speaks with its
//! consumers:
//!
//! - **Identity and state** ([`PlayerId`], [`GameId`], [`Symbol`],
//!   [`GameStatus`]) — the vocabulary every layer shares.
//! - **Events** ([`GameEvent`]) — the payload pushed to real-time
//!   subscribers after an accepted move.
//! - **Views** ([`GameView`], [`MoveView`], [`PlayerStats`]) — the
//!   snapshots returned to API consumers.
//!
//! The JSON shapes produced here are a compatibility contract with
//! existing clients (a 9-character board string, `"WAITING"`-style
//! statuses, a `{"type": "move", ...}` event envelope), so they are
//! pinned by tests rather than left to serde defaults.

mod event;
mod types;
mod view;

pub use event::{GameEvent, MovePayload};
pub use types::{GameId, GameStatus, PlayerId, Symbol};
pub use view::{GameView, MoveView, PlayerStats};
