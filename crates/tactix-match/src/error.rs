//! Error types for match operations.

use tactix_board::BoardError;
use tactix_protocol::{GameId, PlayerId};

/// Errors reported to callers of the match engine.
///
/// Every rejection leaves the targeted game unchanged and is safe to
/// retry with corrected input. Matchmaking and per-game locking are
/// pessimistic, so there is no lost-race variant to surface.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    /// No game exists with the given id.
    #[error("game {0} not found")]
    NotFound(GameId),

    /// The game is not in progress — still waiting for an opponent, or
    /// already finished.
    #[error("game {0} is not accepting moves")]
    GameNotActive(GameId),

    /// The acting player is not the one whose turn it is.
    #[error("it is not player {0}'s turn")]
    NotYourTurn(PlayerId),

    /// The requested placement was rejected by the board
    /// (out-of-range position or occupied cell).
    #[error("invalid move: {0}")]
    InvalidMove(#[from] BoardError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_converts_to_invalid_move() {
        let err: MatchError = BoardError::CellOccupied(4).into();
        assert!(matches!(err, MatchError::InvalidMove(_)));
        assert!(err.to_string().contains("occupied"));
    }

    #[test]
    fn test_display_names_the_game_and_player() {
        assert_eq!(
            MatchError::NotFound(GameId(9)).to_string(),
            "game G-9 not found"
        );
        assert_eq!(
            MatchError::NotYourTurn(PlayerId(2)).to_string(),
            "it is not player P-2's turn"
        );
    }
}
