//! End-to-end acceptance tests for the assembled backend.

use tactix::prelude::*;

fn service() -> GameService<MemoryStore> {
    GameService::new(MemoryStore::new())
}

const P1: PlayerId = PlayerId(1);
const P2: PlayerId = PlayerId(2);

/// Pairs P1 (X) and P2 (O) and returns the shared game id.
async fn paired(service: &GameService<MemoryStore>) -> GameId {
    let id = service.join_or_create(P1).await.id;
    let joined = service.join_or_create(P2).await;
    assert_eq!(joined.id, id);
    id
}

#[tokio::test]
async fn test_waiting_iff_second_seat_open() {
    let service = service();

    let waiting = service.join_or_create(P1).await;
    assert_eq!(waiting.status, GameStatus::Waiting);
    assert!(waiting.player_o.is_none());
    assert!(waiting.moves.is_empty());

    let started = service.join_or_create(P2).await;
    assert_eq!(started.status, GameStatus::InProgress);
    assert_eq!(started.player_o, Some(P2));
}

#[tokio::test]
async fn test_opening_move_rejections_then_progress() {
    // The canonical arbitration script:
    //   P2 opens      → NotYourTurn
    //   P1 plays 0    → ok, board "X        "
    //   P1 plays 1    → NotYourTurn (P1 just moved)
    //   P2 plays 0    → InvalidMove (occupied)
    let service = service();
    let game_id = paired(&service).await;

    assert!(matches!(
        service.make_move(game_id, P2, 0).await,
        Err(MatchError::NotYourTurn(p)) if p == P2
    ));

    let view = service.make_move(game_id, P1, 0).await.unwrap();
    assert_eq!(view.board, "X        ");

    assert!(matches!(
        service.make_move(game_id, P1, 1).await,
        Err(MatchError::NotYourTurn(p)) if p == P1
    ));

    assert!(matches!(
        service.make_move(game_id, P2, 0).await,
        Err(MatchError::InvalidMove(_))
    ));

    // Nothing after the accepted move changed the game.
    assert_eq!(service.get(game_id).await.unwrap().board, "X        ");
}

#[tokio::test]
async fn test_top_row_win_finishes_with_first_mover() {
    let service = service();
    let game_id = paired(&service).await;

    for (player, pos) in [(P1, 0), (P2, 3), (P1, 1), (P2, 4), (P1, 2)] {
        service.make_move(game_id, player, pos).await.unwrap();
    }

    let game = service.get(game_id).await.unwrap();
    assert_eq!(game.board, "XXXOO    ");
    assert_eq!(game.status, GameStatus::Finished);
    assert_eq!(game.winner, Some(P1));
    assert!(game.finished_at.is_some());
}

#[tokio::test]
async fn test_full_board_without_line_is_a_draw() {
    let service = service();
    let game_id = paired(&service).await;

    // X O X / X O X / O X O
    for (player, pos) in [
        (P1, 0),
        (P2, 1),
        (P1, 2),
        (P2, 4),
        (P1, 3),
        (P2, 6),
        (P1, 5),
        (P2, 8),
        (P1, 7),
    ] {
        service.make_move(game_id, player, pos).await.unwrap();
    }

    let game = service.get(game_id).await.unwrap();
    assert_eq!(game.status, GameStatus::Finished);
    assert_eq!(game.winner, None);
    assert!(game.finished_at.is_some());
}

#[tokio::test]
async fn test_get_without_intervening_move_is_identical() {
    let service = service();
    let game_id = paired(&service).await;
    service.make_move(game_id, P1, 4).await.unwrap();

    assert_eq!(
        service.get(game_id).await.unwrap(),
        service.get(game_id).await.unwrap()
    );
}

#[tokio::test]
async fn test_move_event_wire_shape_from_live_game() {
    let service = service();
    let game_id = paired(&service).await;
    let mut rx = service
        .notifier()
        .subscribe(game_id, SubscriberId(1))
        .await;

    service.make_move(game_id, P1, 0).await.unwrap();

    let event = rx.try_recv().unwrap();
    let json: serde_json::Value = serde_json::to_value(&event).unwrap();
    assert_eq!(json["type"], "move");
    assert_eq!(json["game_id"], game_id.0);
    assert_eq!(json["board"], "X        ");
    assert_eq!(json["move"]["position"], 0);
    assert_eq!(json["move"]["symbol"], "X");
    assert_eq!(json["move"]["player"], 1);
    assert_eq!(json["move"]["order"], 0);
    assert!(json["winner"].is_null());
    assert_eq!(json["status"], "IN_PROGRESS");
}

#[tokio::test]
async fn test_subscriber_lifecycle_around_a_game() {
    let service = service();
    let game_id = paired(&service).await;
    let notifier = service.notifier();

    // A spectator joins mid-game and sees only subsequent moves.
    service.make_move(game_id, P1, 0).await.unwrap();
    let mut spectator = notifier.subscribe(game_id, SubscriberId(9)).await;

    service.make_move(game_id, P2, 4).await.unwrap();

    let GameEvent::Move { played, .. } = spectator.try_recv().unwrap();
    assert_eq!(played.order, 1, "the pre-subscription move is not replayed");

    notifier.unsubscribe(game_id, SubscriberId(9)).await;
    service.make_move(game_id, P1, 1).await.unwrap();
    assert!(spectator.try_recv().is_err());

    // Unsubscribing again stays a no-op.
    notifier.unsubscribe(game_id, SubscriberId(9)).await;
}

#[tokio::test]
async fn test_listings_and_stats_across_games() {
    let service = service();

    // Finished game: P1 beats P2.
    let g1 = paired(&service).await;
    for (player, pos) in [(P1, 0), (P2, 3), (P1, 1), (P2, 4), (P1, 2)] {
        service.make_move(g1, player, pos).await.unwrap();
    }
    // P1 opens a fresh game that stays waiting.
    let g2 = service.join_or_create(P1).await.id;

    let history = service.history_for(P1).await;
    let ids: Vec<GameId> = history.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![g2, g1], "history is newest first");

    // P2's listing shows their finished game plus P1's open seat.
    let listed = service.list_for(P2).await;
    let ids: Vec<GameId> = listed.iter().map(|g| g.id).collect();
    assert!(ids.contains(&g1));
    assert!(ids.contains(&g2));

    let stats = service.stats_for(P1).await;
    assert_eq!(stats.games_played, 2);
    assert_eq!(stats.games_won, 1);
    let stats = service.stats_for(P2).await;
    assert_eq!(stats.games_played, 1);
    assert_eq!(stats.games_won, 0);
}
