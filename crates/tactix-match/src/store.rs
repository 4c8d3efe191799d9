//! The persistence seam and its in-process implementation.
//!
//! Durable storage is an external collaborator; the engine only states
//! *what* must be stored and *when* (a game plus its full move log, as
//! one atomic upsert, before the matching event is published). The
//! [`GameStore`] trait is that contract. [`MemoryStore`] backs tests and
//! demos; a database-backed implementation slots in without touching the
//! engine.

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use tactix_protocol::{GameId, PlayerId};
use tokio::sync::RwLock;

use crate::Game;

/// Storage contract consumed by matchmaking and move arbitration.
///
/// Implementations must make [`save`](Self::save) atomic per game (the
/// record and its move log are never observable half-written) and keep
/// [`find_waiting_excluding`](Self::find_waiting_excluding) deterministic
/// (oldest game first). They do not need cross-game transactions — the
/// service layers its own serialization on top.
pub trait GameStore: Send + Sync + 'static {
    /// Reserves a fresh, never-reused game id.
    fn allocate_id(&self) -> impl Future<Output = GameId> + Send;

    /// Fetches a game by id.
    fn load(&self, id: GameId)
    -> impl Future<Output = Option<Game>> + Send;

    /// Upserts a game together with its full move log.
    fn save(&self, game: &Game) -> impl Future<Output = ()> + Send;

    /// The oldest Waiting game whose first mover is not `player`.
    fn find_waiting_excluding(
        &self,
        player: PlayerId,
    ) -> impl Future<Output = Option<Game>> + Send;

    /// Games visible to `player` in listings: every game they participate
    /// in (any status) plus other players' open Waiting games. Newest
    /// first.
    fn list_for(
        &self,
        player: PlayerId,
    ) -> impl Future<Output = Vec<Game>> + Send;

    /// Games `player` participates in, any status. Newest first.
    fn history_for(
        &self,
        player: PlayerId,
    ) -> impl Future<Output = Vec<Game>> + Send;
}

/// In-process [`GameStore`] over a locked map.
///
/// Ids are allocation-ordered, which is what makes "oldest first" a
/// simple min-by-id scan.
#[derive(Debug)]
pub struct MemoryStore {
    games: RwLock<HashMap<GameId, Game>>,
    next_id: AtomicU64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            games: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Number of stored games.
    pub async fn len(&self) -> usize {
        self.games.read().await.len()
    }

    /// Returns `true` if no games are stored.
    pub async fn is_empty(&self) -> bool {
        self.games.read().await.is_empty()
    }
}

/// Newest first: by creation time, then by id for games created within
/// the same tick.
fn sort_newest_first(games: &mut [Game]) {
    games.sort_by(|a, b| {
        b.started_at()
            .cmp(&a.started_at())
            .then(b.id().cmp(&a.id()))
    });
}

impl GameStore for MemoryStore {
    async fn allocate_id(&self) -> GameId {
        GameId(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    async fn load(&self, id: GameId) -> Option<Game> {
        self.games.read().await.get(&id).cloned()
    }

    async fn save(&self, game: &Game) {
        self.games.write().await.insert(game.id(), game.clone());
    }

    async fn find_waiting_excluding(
        &self,
        player: PlayerId,
    ) -> Option<Game> {
        self.games
            .read()
            .await
            .values()
            .filter(|g| g.status().is_joinable() && g.player_x() != player)
            .min_by_key(|g| g.id())
            .cloned()
    }

    async fn list_for(&self, player: PlayerId) -> Vec<Game> {
        let mut games: Vec<Game> = self
            .games
            .read()
            .await
            .values()
            .filter(|g| {
                g.is_participant(player)
                    || (g.status().is_joinable() && g.player_x() != player)
            })
            .cloned()
            .collect();
        sort_newest_first(&mut games);
        games
    }

    async fn history_for(&self, player: PlayerId) -> Vec<Game> {
        let mut games: Vec<Game> = self
            .games
            .read()
            .await
            .values()
            .filter(|g| g.is_participant(player))
            .cloned()
            .collect();
        sort_newest_first(&mut games);
        games
    }
}

// =========================================================================
// Tests
// =========================================================================
