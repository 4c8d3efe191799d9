//! Read-only snapshots returned to API consumers.
//!
//! Views are what the service facade hands out: plain serializable
//! records with no behavior and no references back into engine state.
//! Mutating a view mutates nothing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{GameId, GameStatus, PlayerId, Symbol};

/// One applied move, as exposed to consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveView {
    /// The player who made the move.
    pub player: PlayerId,
    /// Board position 0–8, row-major.
    pub position: u8,
    /// The symbol that was placed.
    pub symbol: Symbol,
    /// 0-based index in the game's move sequence.
    pub order: u32,
    /// When the move was accepted.
    pub played_at: DateTime<Utc>,
}

/// A full snapshot of one game.
///
/// The `board` field is the derived 9-character projection of `moves`;
/// the two can never disagree because the board is rebuilt from the move
/// sequence at snapshot time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// The game's unique id.
    pub id: GameId,
    /// The first mover (plays `X`).
    pub player_x: PlayerId,
    /// The second mover (plays `O`); unset while the game is Waiting.
    pub player_o: Option<PlayerId>,
    /// Current lifecycle status.
    pub status: GameStatus,
    /// The winner, set only for games finished with a win.
    pub winner: Option<PlayerId>,
    /// 9-character board snapshot over `{' ', 'X', 'O'}`.
    pub board: String,
    /// Every applied move, in order.
    pub moves: Vec<MoveView>,
    /// When the game was created.
    pub started_at: DateTime<Utc>,
    /// When the game finished; unset until then.
    pub finished_at: Option<DateTime<Utc>>,
}

/// Simple win/loss counters for one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// The player the counters belong to.
    pub player: PlayerId,
    /// Games the player participated in, any status.
    pub games_played: u32,
    /// Finished games where this player is the recorded winner.
    pub games_won: u32,
}

// =========================================================================
// Tests
// =========================================================================
