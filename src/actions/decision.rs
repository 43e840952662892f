//! Forced sub-choices with a pure default.
//!
//! The owning seat's policy gets first refusal; if it answers with nothing,
//! the default computed from the log projection is used. A match therefore
//! always completes even under a policy that ignores decisions entirely.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::log::LogProjection;

use super::request::PlayerRequest;

/// A decision forced on one seat mid-resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    /// Search the deck for a power card.
    SeekPower { player: PlayerId },
    /// Choose `count` cards to discard.
    Discard { player: PlayerId, count: usize },
}

/// A decision not yet bound to a seat, as printed on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecisionKind {
    SeekPower,
    Discard { count: usize },
}

impl DecisionKind {
    #[must_use]
    pub fn bind(self, player: PlayerId) -> Decision {
        match self {
            DecisionKind::SeekPower => Decision::SeekPower { player },
            DecisionKind::Discard { count } => Decision::Discard { player, count },
        }
    }
}

impl Decision {
    /// Seat that must answer.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match *self {
            Decision::SeekPower { player } | Decision::Discard { player, .. } => player,
        }
    }

    /// Resolution used when the policy offers none.
    ///
    /// Seeking tutors the first power card from the top of the deck, or
    /// nothing if there is none. Discarding picks the lowest slots.
    #[must_use]
    pub fn default_requests(&self, log: &LogProjection<'_>) -> Vec<PlayerRequest> {
        let Some(state) = log.player(self.player()) else {
            return Vec::new();
        };
        match *self {
            Decision::SeekPower { player } => state
                .deck
                .find(|c| c.is_power())
                .next()
                .map(|c| PlayerRequest::DrawCard { player, slot: c.slot })
                .into_iter()
                .collect(),
            Decision::Discard { player, count } => state
                .hand
                .slots()
                .take(count)
                .map(|slot| PlayerRequest::Discard { player, slot })
                .collect(),
        }
    }
}
