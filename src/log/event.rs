//! Committed facts.

use serde::{Deserialize, Serialize};

use crate::cards::Influences;
use crate::core::PlayerId;
use crate::zones::Slot;

/// A committed, irreversible state change.
///
/// Events are the only way to change a `GameState`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Hand to void, charging the card's power cost.
    CardPlayed { player: PlayerId, slot: Slot },
    /// Deck to hand, from the top or tutored.
    CardDrawn { player: PlayerId, slot: Slot },
    TurnFinished { player: PlayerId },
    /// The match is over and `player` lost it.
    GameFinished { player: PlayerId },
    TurnStarted { player: PlayerId },
    PowerReplenished { player: PlayerId },
    CardDiscarded { player: PlayerId, slot: Slot },
    /// A power source resolved for `player`.
    PowerAdded {
        player: PlayerId,
        depleted: bool,
        influences: Influences,
    },
}

impl GameEvent {
    /// Seat this event concerns.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match *self {
            GameEvent::CardPlayed { player, .. }
            | GameEvent::CardDrawn { player, .. }
            | GameEvent::TurnFinished { player }
            | GameEvent::GameFinished { player }
            | GameEvent::TurnStarted { player }
            | GameEvent::PowerReplenished { player }
            | GameEvent::CardDiscarded { player, .. }
            | GameEvent::PowerAdded { player, .. } => player,
        }
    }

    /// Power bookkeeping, left out of narratives.
    #[must_use]
    pub fn is_power_event(&self) -> bool {
        matches!(
            self,
            GameEvent::PowerReplenished { .. } | GameEvent::PowerAdded { .. }
        )
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::CardPlayed { player, slot } => write!(f, "Play {} by {}", slot, player),
            GameEvent::CardDrawn { player, slot } => write!(f, "Draw {} by {}", slot, player),
            GameEvent::TurnFinished { player } => write!(f, "Turn finished by {}", player),
            GameEvent::GameFinished { player } => write!(f, "Game finished, {} loses", player),
            GameEvent::TurnStarted { player } => write!(f, "Turn started by {}", player),
            GameEvent::PowerReplenished { player } => write!(f, "Power replenished for {}", player),
            GameEvent::CardDiscarded { player, slot } => write!(f, "Discard {} by {}", slot, player),
            GameEvent::PowerAdded {
                player,
                depleted,
                influences,
            } => write!(
                f,
                "Power added for {} ({}{})",
                player,
                influences.summary(),
                if *depleted { ", depleted" } else { "" }
            ),
        }
    }
}
