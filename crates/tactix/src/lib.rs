//! # Tactix
//!
//! A turn-based match backend. Tactix pairs two players into a game,
//! arbitrates move legality and turn order, detects wins and draws, and
//! fans out one event per accepted move to the game's subscribers.
//!
//! The crates layer bottom-up:
//!
//! ```text
//! tactix-protocol   ids, statuses, event payloads, consumer views
//! tactix-board      3×3 grid + terminal-condition evaluation
//! tactix-notify     per-game broadcast groups
//! tactix-match      Game model, matchmaker, arbiter, store, GameService
//! tactix            this meta crate: unified error + prelude
//! ```
//!
//! Identity, HTTP routing, wire framing, and durable storage engines are
//! external collaborators: callers hand in already-authenticated
//! [`PlayerId`]s, plug a [`GameStore`] implementation into
//! [`GameService`], and wire their connection lifecycle to
//! [`GameNotifier`] subscribe/unsubscribe.
//!
//! ## Quick start
//!
//! ```rust
//! use tactix::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let service = GameService::new(MemoryStore::new());
//!
//! let game = service.join_or_create(PlayerId(1)).await;
//! service.join_or_create(PlayerId(2)).await;
//!
//! let view = service.make_move(game.id, PlayerId(1), 4).await.unwrap();
//! assert_eq!(view.board, "    X    ");
//! # }
//! ```

mod error;

pub use error::TactixError;

pub use tactix_board::{Board, BoardError, Outcome};
pub use tactix_match::{
    arbiter, matchmaker, Game, GameService, GameStore, MatchError,
    MemoryStore, MoveRecord,
};
pub use tactix_notify::{GameNotifier, SubscriberId};
pub use tactix_protocol::{
    GameEvent, GameId, GameStatus, GameView, MovePayload, MoveView,
    PlayerId, PlayerStats, Symbol,
};

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use crate::{
        Board, GameEvent, GameId, GameService, GameStatus, GameStore,
        GameView, MatchError, MemoryStore, Outcome, PlayerId, PlayerStats,
        SubscriberId, Symbol, TactixError,
    };
}
