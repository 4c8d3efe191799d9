//! The `Game` session model: players, move log, lifecycle.
//!
//! A game's board is never stored — it is replayed from the move log on
//! demand, so the two can't diverge. All mutation goes through the three
//! lifecycle methods (`seat_opponent`, `push_move`, `finish`), which keep
//! the status machine strictly forward-moving:
//!
//! ```text
//! Waiting → InProgress → Finished
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tactix_board::Board;
use tactix_protocol::{
    GameId, GameStatus, GameView, MovePayload, MoveView, PlayerId, Symbol,
};

/// One applied move. Immutable once appended to a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 0-based index in the game's move sequence.
    pub order: u32,
    /// The player who made the move.
    pub player: PlayerId,
    /// Board position 0–8, row-major. Unique within a game.
    pub position: u8,
    /// The symbol that was placed.
    pub symbol: Symbol,
    /// When the move was accepted.
    pub played_at: DateTime<Utc>,
}

impl From<&MoveRecord> for MovePayload {
    fn from(record: &MoveRecord) -> Self {
        Self {
            position: record.position,
            symbol: record.symbol,
            player: record.player,
            order: record.order,
        }
    }
}

impl From<&MoveRecord> for MoveView {
    fn from(record: &MoveRecord) -> Self {
        Self {
            player: record.player,
            position: record.position,
            symbol: record.symbol,
            order: record.order,
            played_at: record.played_at,
        }
    }
}

/// One match between two players.
///
/// Invariants, upheld by the mutating methods:
/// - `status == Waiting` ⇔ `player_o` is unset, and Waiting games have
///   no moves;
/// - `status == Finished` ⇔ `finished_at` is set;
/// - `winner`, when set, is one of the two seated players;
/// - the move log replays cleanly onto an empty board (every move was
///   validated against the replayed board before being appended).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    id: GameId,
    player_x: PlayerId,
    player_o: Option<PlayerId>,
    moves: Vec<MoveRecord>,
    status: GameStatus,
    winner: Option<PlayerId>,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
}

impl Game {
    /// Creates a Waiting game with `player_x` seated as first mover.
    pub fn new(id: GameId, player_x: PlayerId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            player_x,
            player_o: None,
            moves: Vec::new(),
            status: GameStatus::Waiting,
            winner: None,
            started_at: now,
            finished_at: None,
        }
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn player_x(&self) -> PlayerId {
        self.player_x
    }

    pub fn player_o(&self) -> Option<PlayerId> {
        self.player_o
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// The applied moves, in order.
    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    /// Returns `true` if `player` occupies one of the two seats.
    pub fn is_participant(&self, player: PlayerId) -> bool {
        self.player_x == player || self.player_o == Some(player)
    }

    /// The player expected to move next, with their symbol.
    ///
    /// This is the *only* place the turn rule lives: even move count
    /// means the first mover plays `X`, odd means the second mover plays
    /// `O`. Returns `None` until both players are seated.
    pub fn turn(&self) -> Option<(PlayerId, Symbol)> {
        let player_o = self.player_o?;
        Some(if self.moves.len() % 2 == 0 {
            (self.player_x, Symbol::X)
        } else {
            (player_o, Symbol::O)
        })
    }

    /// The board, replayed from the move log.
    pub fn board(&self) -> Board {
        Board::replay(
            self.moves
                .iter()
                .map(|m| (m.position as usize, m.symbol)),
        )
        // Safe by construction: every move in the log was validated
        // against the replayed board before it was appended.
        .expect("move log replays cleanly")
    }

    /// Seats `opponent` as second mover and starts the game.
    ///
    /// Caller must have selected this game as joinable; the matchmaker
    /// does so while holding the matchmaking lock.
    pub fn seat_opponent(&mut self, opponent: PlayerId) {
        debug_assert!(self.status.is_joinable());
        debug_assert_ne!(opponent, self.player_x);
        self.player_o = Some(opponent);
        self.status = GameStatus::InProgress;
    }

    /// Appends a validated move. Arbiter-internal.
    pub(crate) fn push_move(&mut self, record: MoveRecord) {
        debug_assert!(self.status.is_active());
        debug_assert_eq!(record.order as usize, self.moves.len());
        self.moves.push(record);
    }

    /// Marks the game Finished with the given winner (`None` = draw).
    pub(crate) fn finish(
        &mut self,
        winner: Option<PlayerId>,
        now: DateTime<Utc>,
    ) {
        debug_assert!(self.status.is_active());
        self.status = GameStatus::Finished;
        self.winner = winner;
        self.finished_at = Some(now);
    }

    /// Builds the consumer-facing snapshot, board included.
    pub fn to_view(&self) -> GameView {
        GameView {
            id: self.id,
            player_x: self.player_x,
            player_o: self.player_o,
            status: self.status,
            winner: self.winner,
            board: self.board().encode(),
            moves: self.moves.iter().map(MoveView::from).collect(),
            started_at: self.started_at,
            finished_at: self.finished_at,
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
