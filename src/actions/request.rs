//! Requests a seat's policy actually emits.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::zones::Slot;

use super::action::GameAction;

/// A concrete request from a seat. Each maps onto exactly one `GameAction`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerRequest {
    Discard { player: PlayerId, slot: Slot },
    /// Draw a named slot (a tutor, not a top draw).
    DrawCard { player: PlayerId, slot: Slot },
    PlayCard { player: PlayerId, slot: Slot },
    EndTurn { player: PlayerId },
    EndGame { player: PlayerId },
}

impl PlayerRequest {
    /// The intention this request stands for.
    #[must_use]
    pub fn action(&self) -> GameAction {
        match *self {
            PlayerRequest::Discard { player, slot } => GameAction::DiscardCard { player, slot },
            PlayerRequest::DrawCard { player, slot } => GameAction::TutorCard { player, slot },
            PlayerRequest::PlayCard { player, slot } => GameAction::PlayCard { player, slot },
            PlayerRequest::EndTurn { player } => GameAction::PassTurn { player },
            PlayerRequest::EndGame { player } => GameAction::EndGame { player },
        }
    }

    #[must_use]
    pub fn player(&self) -> PlayerId {
        match *self {
            PlayerRequest::Discard { player, .. }
            | PlayerRequest::DrawCard { player, .. }
            | PlayerRequest::PlayCard { player, .. }
            | PlayerRequest::EndTurn { player }
            | PlayerRequest::EndGame { player } => player,
        }
    }

    /// Ends the action phase once resolved.
    #[must_use]
    pub fn is_final(&self) -> bool {
        matches!(self, PlayerRequest::EndTurn { .. } | PlayerRequest::EndGame { .. })
    }

    /// The only kind accepted as a reaction.
    #[must_use]
    pub fn is_discard(&self) -> bool {
        matches!(self, PlayerRequest::Discard { .. })
    }
}
