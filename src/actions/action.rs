//! Intentions: state changes that have been asked for but not validated.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::zones::Slot;

/// An intention not yet checked against state.
///
/// Interpreting an action may commit zero, one or several events, and may
/// produce further actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameAction {
    /// `player` concedes; the match ends.
    EndGame { player: PlayerId },
    /// Open the current seat's turn.
    TurnStart,
    /// `player` must discard `count` cards of their choosing.
    Discard { player: PlayerId, count: usize },
    DiscardCard { player: PlayerId, slot: Slot },
    /// Close the current seat's turn.
    TurnEnd,
    /// Draw the top card.
    DrawCard { player: PlayerId },
    /// Draw a named slot from anywhere in the deck.
    TutorCard { player: PlayerId, slot: Slot },
    PlayCard { player: PlayerId, slot: Slot },
    /// The active seat is done acting this turn. Commits nothing.
    PassTurn { player: PlayerId },
}

/// Payload-free discriminant of [`GameAction`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    EndGame,
    TurnStart,
    Discard,
    DiscardCard,
    TurnEnd,
    DrawCard,
    TutorCard,
    PlayCard,
    PassTurn,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl GameAction {
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            GameAction::EndGame { .. } => ActionKind::EndGame,
            GameAction::TurnStart => ActionKind::TurnStart,
            GameAction::Discard { .. } => ActionKind::Discard,
            GameAction::DiscardCard { .. } => ActionKind::DiscardCard,
            GameAction::TurnEnd => ActionKind::TurnEnd,
            GameAction::DrawCard { .. } => ActionKind::DrawCard,
            GameAction::TutorCard { .. } => ActionKind::TutorCard,
            GameAction::PlayCard { .. } => ActionKind::PlayCard,
            GameAction::PassTurn { .. } => ActionKind::PassTurn,
        }
    }

    /// Seat that owns this intention.
    ///
    /// Turn-structural actions carry no seat and belong to `current`.
    #[must_use]
    pub fn actor(&self, current: PlayerId) -> PlayerId {
        match *self {
            GameAction::TurnStart | GameAction::TurnEnd => current,
            GameAction::EndGame { player }
            | GameAction::Discard { player, .. }
            | GameAction::DiscardCard { player, .. }
            | GameAction::DrawCard { player }
            | GameAction::TutorCard { player, .. }
            | GameAction::PlayCard { player, .. }
            | GameAction::PassTurn { player } => player,
        }
    }
}
