//! Per-game broadcast groups.
//!
//! The notifier is a process-wide registry mapping each game to the set of
//! currently subscribed connection handles. The move arbiter publishes one
//! [`GameEvent`] per accepted mutation; the connection layer subscribes and
//! unsubscribes as sockets come and go.
//!
//! Delivery contract:
//! - best-effort, at-most-once per subscriber per event;
//! - no replay — a subscriber only sees events published after it joined;
//! - group membership follows *connection* lifecycle, not game lifecycle;
//! - publish failures (closed receivers) are pruned, never surfaced.

use std::collections::HashMap;
use std::fmt;

use tactix_protocol::{GameEvent, GameId};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::RwLock;

/// An opaque handle identifying one subscriber (typically one connection).
///
/// Chosen by the connection layer; the notifier only uses it as a map key,
/// so re-subscribing with the same handle replaces the previous channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(pub u64);

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S-{}", self.0)
    }
}

/// Registry of per-game subscriber groups.
///
/// Safe to share behind an `Arc`: subscribe/unsubscribe (connection
/// lifecycle) and publish (move arbitration) run concurrently against the
/// same table. Fan-out does not need transactional semantics — a
/// subscriber racing a publish either receives the event or re-reads the
/// already-saved game state.
#[derive(Default)]
pub struct GameNotifier {
    groups: RwLock<GroupTable>,
}

type GroupTable =
    HashMap<GameId, HashMap<SubscriberId, UnboundedSender<GameEvent>>>;

impl GameNotifier {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `subscriber` to `game_id`'s group and returns the receiving
    /// end of its event channel.
    ///
    /// Subscribing an already-present handle replaces its channel; the old
    /// receiver sees no further events.
    pub async fn subscribe(
        &self,
        game_id: GameId,
        subscriber: SubscriberId,
    ) -> UnboundedReceiver<GameEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut groups = self.groups.write().await;
        groups.entry(game_id).or_default().insert(subscriber, tx);
        tracing::debug!(%game_id, %subscriber, "subscribed");
        rx
    }

    /// Removes `subscriber` from `game_id`'s group.
    ///
    /// Idempotent: unsubscribing an absent handle (or from an unknown
    /// game) is a no-op. Empty groups are dropped from the table.
    pub async fn unsubscribe(
        &self,
        game_id: GameId,
        subscriber: SubscriberId,
    ) {
        let mut groups = self.groups.write().await;
        if let Some(group) = groups.get_mut(&game_id) {
            if group.remove(&subscriber).is_some() {
                tracing::debug!(%game_id, %subscriber, "unsubscribed");
            }
            if group.is_empty() {
                groups.remove(&game_id);
            }
        }
    }

    /// Delivers `event` to every current subscriber of `game_id`.
    ///
    /// Subscribers whose receiving end is gone are pruned in passing.
    /// Returns the number of subscribers the event was handed to.
    pub async fn publish(&self, game_id: GameId, event: GameEvent) -> usize {
        let mut groups = self.groups.write().await;
        let Some(group) = groups.get_mut(&game_id) else {
            return 0;
        };

        group.retain(|subscriber, tx| {
            if tx.send(event.clone()).is_ok() {
                true
            } else {
                tracing::debug!(
                    %game_id,
                    %subscriber,
                    "pruning closed subscriber"
                );
                false
            }
        });

        let delivered = group.len();
        if group.is_empty() {
            groups.remove(&game_id);
        }
        tracing::debug!(%game_id, delivered, "event published");
        delivered
    }

    /// Number of live subscribers for `game_id`.
    pub async fn subscriber_count(&self, game_id: GameId) -> usize {
        self.groups
            .read()
            .await
            .get(&game_id)
            .map_or(0, HashMap::len)
    }
}

// =========================================================================
// Tests
// =========================================================================
