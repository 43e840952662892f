//! Reference chain engines.

use tracing::debug;

use crate::actions::{Decision, PlayerRequest};
use crate::cards::CardId;
use crate::core::PlayerId;
use crate::log::LogProjection;
use crate::zones::Hand;

use super::chain::{ActionEngine, MulliganCheck, SpecialEngine};

/// Keeps a hand holding at least `min_powers` power cards.
#[derive(Clone, Copy, Debug)]
pub struct PowerCheck {
    pub min_powers: usize,
}

impl PowerCheck {
    #[must_use]
    pub fn at_least(min_powers: usize) -> Self {
        Self { min_powers }
    }
}

impl MulliganCheck for PowerCheck {
    fn accept(&self, _order: usize, hand: &Hand, _attempt: usize) -> bool {
        hand.powers().count() >= self.min_powers
    }
}

/// Concedes once the turn counter reaches `turns`.
#[derive(Clone, Copy, Debug)]
pub struct TurnLimiter {
    pub player: PlayerId,
    pub turns: u32,
}

impl TurnLimiter {
    #[must_use]
    pub fn new(player: PlayerId, turns: u32) -> Self {
        Self { player, turns }
    }
}

impl ActionEngine for TurnLimiter {
    fn action(&self, log: &LogProjection<'_>) -> Option<PlayerRequest> {
        let turn = log.state().turn;
        if turn < self.turns || !log.is_idle() {
            return None;
        }
        debug!(player = %self.player, turn, "end requested");
        Some(PlayerRequest::EndGame { player: self.player })
    }
}

/// Plays the first power card in hand, once per turn.
#[derive(Clone, Copy, Debug)]
pub struct PlayPower {
    pub player: PlayerId,
}

impl PlayPower {
    #[must_use]
    pub fn new(player: PlayerId) -> Self {
        Self { player }
    }
}

impl ActionEngine for PlayPower {
    fn action(&self, log: &LogProjection<'_>) -> Option<PlayerRequest> {
        if !log.is_idle() {
            return None;
        }
        let me = log.player(self.player)?;
        if me.power_played {
            return None;
        }
        let card = me.hand.powers().next()?;
        debug!(player = %self.player, card = %card, turn = log.state().turn, "playing power");
        Some(PlayerRequest::PlayCard {
            player: self.player,
            slot: card.slot,
        })
    }
}

/// Plays a copy of one specific card whenever it is playable.
#[derive(Clone, Copy, Debug)]
pub struct PlayCardOf {
    pub player: PlayerId,
    pub card: CardId,
}

impl PlayCardOf {
    #[must_use]
    pub fn new(player: PlayerId, card: CardId) -> Self {
        Self { player, card }
    }
}

impl ActionEngine for PlayCardOf {
    fn action(&self, log: &LogProjection<'_>) -> Option<PlayerRequest> {
        if !log.is_idle() {
            return None;
        }
        let me = log.player(self.player)?;
        let card = me.hand.iter().find(|c| c.card.id == self.card)?;
        if !me.can_play(card.slot) {
            return None;
        }
        debug!(player = %self.player, card = %card, "playing card");
        Some(PlayerRequest::PlayCard {
            player: self.player,
            slot: card.slot,
        })
    }
}

/// Answers discard decisions with non-power cards before power cards.
#[derive(Clone, Copy, Debug)]
pub struct DiscardNonPowerFirst {
    pub player: PlayerId,
}

impl DiscardNonPowerFirst {
    #[must_use]
    pub fn new(player: PlayerId) -> Self {
        Self { player }
    }
}

impl SpecialEngine for DiscardNonPowerFirst {
    fn make(&self, decision: &Decision, log: &LogProjection<'_>) -> Vec<PlayerRequest> {
        let Decision::Discard { player, count } = *decision else {
            return Vec::new();
        };
        if player != self.player {
            return Vec::new();
        }
        let Some(me) = log.player(player) else {
            return Vec::new();
        };
        let requests: Vec<_> = me
            .hand
            .non_powers()
            .chain(me.hand.powers())
            .take(count)
            .map(|c| PlayerRequest::Discard { player, slot: c.slot })
            .collect();
        debug!(%player, count, ?requests, "discarding non-powers first");
        requests
    }
}
