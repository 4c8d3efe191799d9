//! Move arbitration: validate a move against a game and apply it.
//!
//! The arbiter is pure state transformation — no locking, no storage, no
//! fan-out. [`crate::GameService`] supplies those around it, which keeps
//! every rule here unit-testable without an async runtime.

use chrono::{DateTime, Utc};
use tactix_board::Outcome;
use tactix_protocol::PlayerId;

use crate::{Game, MatchError, MoveRecord};

/// Validates and applies one move.
///
/// Preconditions are checked in contract order:
/// 1. the game must be in progress ([`MatchError::GameNotActive`]);
/// 2. `player` must be the one whose turn it is
///    ([`MatchError::NotYourTurn`]);
/// 3. `position` must name an empty cell on the board
///    ([`MatchError::InvalidMove`]).
///
/// On success the move is appended to the game's log and the board is
/// re-evaluated: a win finishes the game with `player` as winner, a full
/// board without a win finishes it as a draw, otherwise the game stays
/// in progress. Any rejection leaves `game` untouched.
pub fn apply_move(
    game: &mut Game,
    player: PlayerId,
    position: u8,
    now: DateTime<Utc>,
) -> Result<MoveRecord, MatchError> {
    if !game.status().is_active() {
        return Err(MatchError::GameNotActive(game.id()));
    }

    let (expected, symbol) = game
        .turn()
        // In-progress games always have both seats filled.
        .expect("active game has a player to move");
    if player != expected {
        return Err(MatchError::NotYourTurn(player));
    }

    let mut board = game.board();
    board.apply(position as usize, symbol)?;

    let record = MoveRecord {
        order: game.moves().len() as u32,
        player,
        position,
        symbol,
        played_at: now,
    };
    game.push_move(record.clone());

    match board.evaluate() {
        Outcome::Win(_) => game.finish(Some(player), now),
        Outcome::Draw => game.finish(None, now),
        Outcome::Ongoing => {}
    }

    Ok(record)
}

// =========================================================================
// Tests
// =========================================================================
