//! Error types for match simulation.
//!
//! Game-rule failures (an unaffordable play, a discard of a slot not in
//! hand) are never errors: they commit no event. `EngineError` is reserved
//! for defects that make continuing a match meaningless.

use thiserror::Error;

use crate::actions::ActionKind;
use crate::cards::CardId;
use crate::zones::{Slot, Zone};

use super::PlayerId;

/// Result type alias using [`EngineError`].
pub type Result<T> = std::result::Result<T, EngineError>;

/// Fatal engine errors. Any of these aborts the match in progress.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The ruleset in force does not handle this kind of action.
    #[error("Rules '{rules}' do not support action {action}")]
    UnsupportedAction {
        /// Name of the active ruleset.
        rules: &'static str,
        /// The rejected action kind.
        action: ActionKind,
    },

    /// A zone move named the deck as its destination.
    #[error("{player}: cannot move slot {slot} from {from} into the deck")]
    DeckDestination {
        /// Owner of the card.
        player: PlayerId,
        /// Slot being moved.
        slot: Slot,
        /// Source zone of the move.
        from: Zone,
    },

    /// A deck references a card that is not registered.
    #[error("Unknown card: {0}")]
    UnknownCard(CardId),

    /// No deck registered under this name.
    #[error("Unknown deck: {0}")]
    UnknownDeck(String),

    /// No policy registered under this name.
    #[error("Unknown policy: {0}")]
    UnknownPolicy(String),

    /// A match was configured without seats.
    #[error("A match needs at least one seat")]
    NoSeats,

    /// More seats than a `PlayerId` can number.
    #[error("{count} seats configured, at most 255 supported")]
    TooManySeats {
        /// Seats in the rejected configuration.
        count: usize,
    },

    /// A seat sits at a position other than its own `PlayerId`.
    #[error("Seat {index} is bound to {player}")]
    SeatMismatch {
        /// Position in the seat list.
        index: usize,
        /// Id carried by the seat.
        player: PlayerId,
    },

    /// Seats kept injecting reactions past the configured limit.
    #[error("Reaction window exceeded {limit} injected requests")]
    ReactionOverflow {
        /// Configured `max_reactions_per_window`.
        limit: usize,
    },

    /// Hand-limit discards did not bring a seat under the threshold.
    #[error("{player} still over hand limit after {rounds} discard rounds")]
    HandLimitUnresolved {
        /// Seat whose hand stayed too large.
        player: PlayerId,
        /// Rounds attempted.
        rounds: usize,
    },

    /// Event serialization failed.
    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl From<bincode::Error> for EngineError {
    fn from(err: bincode::Error) -> Self {
        EngineError::Encoding(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::DeckDestination {
            player: PlayerId::new(1),
            slot: Slot::new(4),
            from: Zone::Hand,
        };
        assert_eq!(err.to_string(), "Player 1: cannot move slot #4 from Hand into the deck");

        let err = EngineError::UnknownDeck("missing".to_string());
        assert_eq!(err.to_string(), "Unknown deck: missing");

        let err = EngineError::TooManySeats { count: 256 };
        assert_eq!(err.to_string(), "256 seats configured, at most 255 supported");

        let err = EngineError::SeatMismatch {
            index: 0,
            player: PlayerId::new(1),
        };
        assert_eq!(err.to_string(), "Seat 0 is bound to Player 1");
    }

    #[test]
    fn test_unsupported_action_message() {
        let err = EngineError::UnsupportedAction {
            rules: "throne",
            action: ActionKind::TutorCard,
        };
        assert_eq!(err.to_string(), "Rules 'throne' do not support action TutorCard");
    }
}
