//! The match engine: sessions, matchmaking, and move arbitration.
//!
//! This crate owns the only stateful logic in the backend:
//!
//! - [`Game`] — one match's lifecycle (players, move log, status), with
//!   the board always *derived* from the move log.
//! - [`matchmaker`] — pairs an incoming player with the oldest open game
//!   or opens a new one.
//! - [`arbiter`] — validates a move against a game and applies it,
//!   detecting terminal outcomes.
//! - [`GameStore`] — the seam to the external persistence collaborator,
//!   with [`MemoryStore`] as the in-process implementation.
//! - [`GameService`] — the facade consumers call; it layers the
//!   concurrency contract (atomic matchmaking, per-game serializability)
//!   and save-before-publish ordering on top of the pure pieces.
//!
//! # Concurrency
//!
//! Callers are concurrent and independent. The service serializes
//! matchmaking behind one mutex and each game's mutations behind a
//! per-game mutex; operations on different games only share map lookups.

pub mod arbiter;
pub mod matchmaker;

mod error;
mod game;
mod service;
mod store;

pub use error::MatchError;
pub use game::{Game, MoveRecord};
pub use service::GameService;
pub use store::{GameStore, MemoryStore};
