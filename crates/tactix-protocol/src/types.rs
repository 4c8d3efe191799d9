//! Identity newtypes and the core state vocabulary.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// A unique identifier for a player.
///
/// The id is opaque to the backend: identity and authentication live in an
/// external service, and every call into the core arrives with an
/// already-authenticated `PlayerId`.
///
/// `#[serde(transparent)]` keeps the wire form a plain number, so
/// `PlayerId(42)` serializes as `42`, not `{"0": 42}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P-{}", self.0)
    }
}

/// A unique identifier for a game (one match between two players).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u64);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "G-{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Symbol
// ---------------------------------------------------------------------------

/// The marker a player places on the board.
///
/// `X` always belongs to the first mover, `O` to the second; the pairing
/// is fixed at matchmaking time and never changes mid-game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    /// The opposing symbol.
    pub fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    /// The single-character wire spelling used in board strings.
    pub fn mark(self) -> char {
        match self {
            Self::X => 'X',
            Self::O => 'O',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mark())
    }
}

// ---------------------------------------------------------------------------
// GameStatus
// ---------------------------------------------------------------------------

/// The lifecycle state of a game.
///
/// Transitions are strictly ordered and never go backward:
///
/// ```text
/// Waiting → InProgress → Finished
/// ```
///
/// - **Waiting**: created by matchmaking, second player slot still open.
/// - **InProgress**: both players seated, moves are being arbitrated.
/// - **Finished**: a terminal outcome (win or draw) was detected.
///
/// The `SCREAMING_SNAKE_CASE` wire spellings (`"WAITING"`,
/// `"IN_PROGRESS"`, `"FINISHED"`) are part of the consumer contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    Waiting,
    InProgress,
    Finished,
}

impl GameStatus {
    /// Returns `true` if the game is still accepting a second player.
    pub fn is_joinable(&self) -> bool {
        matches!(self, Self::Waiting)
    }

    /// Returns `true` if moves may be played.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::InProgress)
    }

    /// The next state in the lifecycle, or `None` from `Finished`.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Waiting => Some(Self::InProgress),
            Self::InProgress => Some(Self::Finished),
            Self::Finished => None,
        }
    }

    /// Returns `true` if moving directly to `target` is a legal transition.
    pub fn can_transition_to(self, target: Self) -> bool {
        self.next() == Some(target)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Waiting => write!(f, "WAITING"),
            Self::InProgress => write!(f, "IN_PROGRESS"),
            Self::Finished => write!(f, "FINISHED"),
        }
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_serializes_as_plain_number() {
        let json = serde_json::to_string(&PlayerId(42)).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn test_player_id_deserializes_from_plain_number() {
        let pid: PlayerId = serde_json::from_str("42").unwrap();
        assert_eq!(pid, PlayerId(42));
    }

    #[test]
    fn test_game_id_serializes_as_plain_number() {
        let json = serde_json::to_string(&GameId(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn test_id_display() {
        assert_eq!(PlayerId(7).to_string(), "P-7");
        assert_eq!(GameId(3).to_string(), "G-3");
    }

    #[test]
    fn test_game_id_orders_by_allocation() {
        // Matchmaking relies on ascending GameId meaning "oldest first".
        assert!(GameId(1) < GameId(2));
    }

    #[test]
    fn test_symbol_serializes_as_single_letter() {
        assert_eq!(serde_json::to_string(&Symbol::X).unwrap(), "\"X\"");
        assert_eq!(serde_json::to_string(&Symbol::O).unwrap(), "\"O\"");
    }

    #[test]
    fn test_symbol_opponent_flips() {
        assert_eq!(Symbol::X.opponent(), Symbol::O);
        assert_eq!(Symbol::O.opponent(), Symbol::X);
    }

    #[test]
    fn test_game_status_serializes_as_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&GameStatus::Waiting).unwrap(),
            "\"WAITING\""
        );
        assert_eq!(
            serde_json::to_string(&GameStatus::InProgress).unwrap(),
            "\"IN_PROGRESS\""
        );
        assert_eq!(
            serde_json::to_string(&GameStatus::Finished).unwrap(),
            "\"FINISHED\""
        );
    }

    #[test]
    fn test_game_status_next_follows_strict_order() {
        assert_eq!(GameStatus::Waiting.next(), Some(GameStatus::InProgress));
        assert_eq!(GameStatus::InProgress.next(), Some(GameStatus::Finished));
        assert_eq!(GameStatus::Finished.next(), None);
    }

    #[test]
    fn test_game_status_can_transition_to() {
        assert!(GameStatus::Waiting.can_transition_to(GameStatus::InProgress));
        assert!(!GameStatus::Waiting.can_transition_to(GameStatus::Finished));
        assert!(!GameStatus::Finished.can_transition_to(GameStatus::Waiting));
    }

    #[test]
    fn test_game_status_is_joinable_and_active() {
        assert!(GameStatus::Waiting.is_joinable());
        assert!(!GameStatus::InProgress.is_joinable());
        assert!(GameStatus::InProgress.is_active());
        assert!(!GameStatus::Finished.is_active());
    }
}
