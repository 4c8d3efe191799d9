//! Matchmaking: attach a player to the oldest open game or open a new one.

use chrono::{DateTime, Utc};
use tactix_protocol::PlayerId;

use crate::{Game, GameStore};

/// Finds a game for `player`: the oldest Waiting game opened by someone
/// else, or a fresh Waiting game with `player` as first mover.
///
/// The oldest-first selection keeps long-waiting games from being starved
/// by newer ones. A player never joins their own waiting game, but may
/// open several.
///
/// The find-then-attach sequence is **not** atomic by itself — the caller
/// must serialize invocations (the service holds its matchmaking mutex
/// across this call), otherwise two concurrent players could both seat
/// themselves in the same waiting game.
pub async fn join_or_create<S: GameStore>(
    store: &S,
    player: PlayerId,
    now: DateTime<Utc>,
) -> Game {
    if let Some(mut game) = store.find_waiting_excluding(player).await {
        game.seat_opponent(player);
        store.save(&game).await;
        tracing::info!(game_id = %game.id(), %player, "opponent seated, game started");
        return game;
    }

    let game = Game::new(store.allocate_id().await, player, now);
    store.save(&game).await;
    tracing::info!(game_id = %game.id(), %player, "game created, waiting for opponent");
    game
}

// =========================================================================
// Tests
// =========================================================================
