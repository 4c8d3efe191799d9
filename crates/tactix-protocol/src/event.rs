//! Real-time event payloads pushed to game subscribers.

use serde::{Deserialize, Serialize};

use crate::{GameId, GameStatus, PlayerId, Symbol};

/// The move carried inside a [`GameEvent::Move`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovePayload {
    /// Board position 0–8, row-major.
    pub position: u8,
    /// The symbol that was placed.
    pub symbol: Symbol,
    /// The player who made the move.
    pub player: PlayerId,
    /// 0-based index of this move in the game's move sequence.
    pub order: u32,
}

/// An event fanned out to every subscriber of a game after an accepted
/// mutation.
///
/// Delivery is best-effort and at-most-once per subscriber; the payload
/// carries enough state (board snapshot, resulting status, winner) that a
/// client can update its UI without re-fetching, and the backing store is
/// guaranteed to be consistent with the event by the time it is published.
///
/// `#[serde(tag = "type")]` produces the internally tagged JSON consumers
/// expect:
///
/// ```json
/// {
///   "type": "move",
///   "game_id": 7,
///   "board": "XXO OX   ",
///   "move": { "position": 4, "symbol": "O", "player": 2, "order": 3 },
///   "winner": null,
///   "status": "IN_PROGRESS"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// A move was accepted and applied.
    Move {
        /// The game the move belongs to.
        game_id: GameId,
        /// 9-character board snapshot over `{' ', 'X', 'O'}`.
        board: String,
        /// The move that was just made.
        #[serde(rename = "move")]
        played: MovePayload,
        /// The winner, if this move ended the game with a win.
        winner: Option<PlayerId>,
        /// The game's status after the move.
        status: GameStatus,
    },
}

impl GameEvent {
    /// The game this event belongs to.
    pub fn game_id(&self) -> GameId {
        match self {
            Self::Move { game_id, .. } => *game_id,
        }
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    //! The event JSON shape is a compatibility contract with existing
    //! real-time consumers, so every field spelling is asserted exactly.

    use super::*;

    fn sample_event() -> GameEvent {
        GameEvent::Move {
            game_id: GameId(7),
            board: "XXO OX   ".into(),
            played: MovePayload {
                position: 4,
                symbol: Symbol::O,
                player: PlayerId(2),
                order: 3,
            },
            winner: None,
            status: GameStatus::InProgress,
        }
    }

    #[test]
    fn test_move_event_json_shape() {
        let json: serde_json::Value =
            serde_json::to_value(sample_event()).unwrap();

        assert_eq!(json["type"], "move");
        assert_eq!(json["game_id"], 7);
        assert_eq!(json["board"], "XXO OX   ");
        assert_eq!(json["move"]["position"], 4);
        assert_eq!(json["move"]["symbol"], "O");
        assert_eq!(json["move"]["player"], 2);
        assert_eq!(json["move"]["order"], 3);
        assert!(json["winner"].is_null());
        assert_eq!(json["status"], "IN_PROGRESS");
    }

    #[test]
    fn test_move_event_with_winner_json_shape() {
        let event = GameEvent::Move {
            game_id: GameId(1),
            board: "XXXOO    ".into(),
            played: MovePayload {
                position: 2,
                symbol: Symbol::X,
                player: PlayerId(1),
                order: 4,
            },
            winner: Some(PlayerId(1)),
            status: GameStatus::Finished,
        };
        let json: serde_json::Value = serde_json::to_value(&event).unwrap();

        assert_eq!(json["winner"], 1);
        assert_eq!(json["status"], "FINISHED");
    }

    #[test]
    fn test_move_event_round_trip() {
        let event = sample_event();
        let bytes = serde_json::to_vec(&event).unwrap();
        let decoded: GameEvent = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(event, decoded);
    }

    #[test]
    fn test_event_game_id_accessor() {
        assert_eq!(sample_event().game_id(), GameId(7));
    }

    #[test]
    fn test_decode_unknown_event_type_returns_error() {
        let unknown = r#"{"type": "chat", "game_id": 1, "text": "hi"}"#;
        let result: Result<GameEvent, _> = serde_json::from_str(unknown);
        assert!(result.is_err());
    }
}
