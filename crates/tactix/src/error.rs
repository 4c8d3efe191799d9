//! Unified error type for the Tactix backend.

use tactix_board::BoardError;
use tactix_match::MatchError;

/// Top-level error that wraps the crate-specific errors.
///
/// When using the `tactix` meta-crate, callers deal with this single
/// type; the `#[from]` impls let `?` convert sub-crate errors
/// automatically.
#[derive(Debug, thiserror::Error)]
pub enum TactixError {
    /// A match-level rejection (unknown game, wrong turn, inactive game,
    /// illegal placement).
    #[error(transparent)]
    Match(#[from] MatchError),

    /// A raw board error, from driving [`tactix_board::Board`] directly.
    #[error(transparent)]
    Board(#[from] BoardError),
}
