//! Plays a handful of random games through the backend and logs the
//! event stream a real-time consumer would see.
//!
//! Run with `RUST_LOG=debug` to also see rejection and fan-out logs.

use std::sync::Arc;

use rand::Rng;
use tactix::prelude::*;
use tracing_subscriber::EnvFilter;

const GAMES: usize = 3;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let service = Arc::new(GameService::new(MemoryStore::new()));

    for round in 0..GAMES as u64 {
        let (p1, p2) = (PlayerId(1), PlayerId(2));

        let game = service.join_or_create(p1).await;
        service.join_or_create(p2).await;
        let game_id = game.id;
        tracing::info!(%game_id, "match paired");

        // A spectator tails the game's event stream.
        let mut events = service
            .notifier()
            .subscribe(game_id, SubscriberId(round))
            .await;
        let tail = tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                let GameEvent::Move { board, played, status, winner, .. } =
                    event;
                tracing::info!(
                    %game_id,
                    %board,
                    position = played.position,
                    symbol = %played.symbol,
                    %status,
                    ?winner,
                    "spectator update"
                );
            }
        });

        play_random_game(&service, game_id, p1, p2).await?;

        service.notifier().unsubscribe(game_id, SubscriberId(round)).await;
        tail.await?;
    }

    for player in [PlayerId(1), PlayerId(2)] {
        let stats = service.stats_for(player).await;
        tracing::info!(
            %player,
            games_played = stats.games_played,
            games_won = stats.games_won,
            "final record"
        );
    }

    Ok(())
}

/// Alternates random legal moves until the game finishes.
async fn play_random_game(
    service: &GameService<MemoryStore>,
    game_id: GameId,
    p1: PlayerId,
    p2: PlayerId,
) -> Result<(), MatchError> {
    loop {
        let view = service.get(game_id).await?;
        if view.status == GameStatus::Finished {
            match view.winner {
                Some(winner) => {
                    tracing::info!(%game_id, %winner, "game over")
                }
                None => tracing::info!(%game_id, "game over: draw"),
            }
            return Ok(());
        }

        let to_move = if view.moves.len() % 2 == 0 { p1 } else { p2 };
        let position = random_open_cell(&view.board);
        service.make_move(game_id, to_move, position).await?;
    }
}

/// Picks a random empty cell from a 9-character board snapshot.
fn random_open_cell(board: &str) -> u8 {
    let open: Vec<u8> = board
        .char_indices()
        .filter(|(_, c)| *c == ' ')
        .map(|(i, _)| i as u8)
        .collect();
    let pick = rand::rng().random_range(0..open.len());
    open[pick]
}
