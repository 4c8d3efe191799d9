//! The `GameService` facade: what API layers call into.
//!
//! The service adds three things around the pure matchmaker/arbiter:
//!
//! 1. **Atomic matchmaking** — one mutex held across find-waiting +
//!    attach, so concurrent joiners never double-book a waiting game and
//!    never open redundant games.
//! 2. **Per-game serializability** — a lock table hands out one mutex per
//!    game id; moves on the same game are applied one at a time while
//!    distinct games proceed in parallel.
//! 3. **Save-before-publish** — an accepted move is persisted first, then
//!    exactly one event is fanned out, so any receiver can immediately
//!    re-read consistent state. Fan-out results never reach the caller.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tactix_notify::GameNotifier;
use tactix_protocol::{
    GameEvent, GameId, GameStatus, GameView, PlayerId, PlayerStats,
};
use tokio::sync::Mutex;

use crate::{arbiter, matchmaker, GameStore, MatchError};

/// The match engine's public surface.
///
/// Cheap to share: wrap in an `Arc` and clone the handle into each
/// connection task.
pub struct GameService<S: GameStore> {
    store: Arc<S>,
    notifier: Arc<GameNotifier>,
    /// Serializes the find-waiting-then-attach sequence.
    match_lock: Mutex<()>,
    /// One mutex per live game; entries are dropped once a game finishes
    /// (finished games reject moves before any write).
    game_locks: Mutex<HashMap<GameId, Arc<Mutex<()>>>>,
}

impl<S: GameStore> GameService<S> {
    /// Creates a service over `store` with a fresh notifier registry.
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
            notifier: Arc::new(GameNotifier::new()),
            match_lock: Mutex::new(()),
            game_locks: Mutex::new(HashMap::new()),
        }
    }

    /// The notifier registry, for wiring connection subscribe/unsubscribe.
    pub fn notifier(&self) -> &Arc<GameNotifier> {
        &self.notifier
    }

    /// Joins the oldest open game not created by `player`, or opens a new
    /// Waiting game. Atomic with respect to other join calls.
    pub async fn join_or_create(&self, player: PlayerId) -> GameView {
        let _guard = self.match_lock.lock().await;
        let game =
            matchmaker::join_or_create(self.store.as_ref(), player, Utc::now())
                .await;
        game.to_view()
    }

    /// Validates and applies one move, persists the game, and publishes
    /// one [`GameEvent`] to the game's subscribers.
    ///
    /// # Errors
    /// [`MatchError::NotFound`], [`MatchError::GameNotActive`],
    /// [`MatchError::NotYourTurn`], or [`MatchError::InvalidMove`] —
    /// each leaves the game unchanged and emits no event.
    pub async fn make_move(
        &self,
        game_id: GameId,
        player: PlayerId,
        position: u8,
    ) -> Result<GameView, MatchError> {
        let lock = self.lock_for(game_id).await;
        let _guard = lock.lock().await;

        let mut game = self
            .store
            .load(game_id)
            .await
            .ok_or(MatchError::NotFound(game_id))?;

        let record =
            match arbiter::apply_move(&mut game, player, position, Utc::now())
            {
                Ok(record) => record,
                Err(e) => {
                    tracing::debug!(
                        %game_id,
                        %player,
                        position,
                        error = %e,
                        "move rejected"
                    );
                    return Err(e);
                }
            };

        // Persist before fan-out: subscribers reacting to the event must
        // be able to re-read the move they were told about.
        self.store.save(&game).await;

        let event = GameEvent::Move {
            game_id,
            board: game.board().encode(),
            played: (&record).into(),
            winner: game.winner(),
            status: game.status(),
        };
        self.notifier.publish(game_id, event).await;

        tracing::info!(
            %game_id,
            %player,
            position = record.position,
            order = record.order,
            "move applied"
        );

        if game.status() == GameStatus::Finished {
            self.game_locks.lock().await.remove(&game_id);
            match game.winner() {
                Some(winner) => {
                    tracing::info!(%game_id, %winner, "game finished")
                }
                None => tracing::info!(%game_id, "game drawn"),
            }
        }

        Ok(game.to_view())
    }

    /// Fetches a game snapshot. Read-only and idempotent.
    pub async fn get(
        &self,
        game_id: GameId,
    ) -> Result<GameView, MatchError> {
        self.store
            .load(game_id)
            .await
            .map(|g| g.to_view())
            .ok_or(MatchError::NotFound(game_id))
    }

    /// Games visible to `player`: their own (any status) plus other
    /// players' open Waiting games. Newest first.
    pub async fn list_for(&self, player: PlayerId) -> Vec<GameView> {
        self.store
            .list_for(player)
            .await
            .iter()
            .map(|g| g.to_view())
            .collect()
    }

    /// Games `player` participated in, newest first.
    pub async fn history_for(&self, player: PlayerId) -> Vec<GameView> {
        self.store
            .history_for(player)
            .await
            .iter()
            .map(|g| g.to_view())
            .collect()
    }

    /// Win/loss counters derived from `player`'s history.
    pub async fn stats_for(&self, player: PlayerId) -> PlayerStats {
        let games = self.store.history_for(player).await;
        let games_won = games
            .iter()
            .filter(|g| g.winner() == Some(player))
            .count() as u32;
        PlayerStats {
            player,
            games_played: games.len() as u32,
            games_won,
        }
    }

    /// The serialization mutex for `game_id`, created on first use.
    async fn lock_for(&self, game_id: GameId) -> Arc<Mutex<()>> {
        let mut locks = self.game_locks.lock().await;
        Arc::clone(locks.entry(game_id).or_default())
    }
}

// =========================================================================
// Tests
// =========================================================================
