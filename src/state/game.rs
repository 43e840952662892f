//! Full-match snapshot and the event reducer.

use std::sync::Arc;

use im::OrdMap;

use crate::cards::Requirements;
use crate::core::PlayerId;
use crate::log::{GameEvent, SetupLog};
use crate::zones::{Slot, ZoneChange};

use super::player::PlayerState;

/// Match snapshot at one point in the event history.
///
/// Always the left fold of [`GameState::receive`] over the committed events,
/// starting from [`GameState::init`]. Cloning is cheap: seat states live
/// in a persistent map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// Turn order, copied from the setup.
    pub order: Arc<[PlayerId]>,
    pub turn: u32,
    pub end: bool,
    pub night: bool,
    /// Seat named by the `GameFinished` event, once there is one.
    pub loser: Option<PlayerId>,
    pub players: OrdMap<PlayerId, PlayerState>,
}

impl GameState {
    /// State before the first event: every seat holds its kept draw.
    #[must_use]
    pub fn init(setup: &SetupLog) -> Self {
        let players = setup
            .draws
            .iter()
            .filter_map(|(&player, draws)| {
                draws
                    .last()
                    .map(|d| (player, PlayerState::new(d.hand.clone(), d.deck.clone())))
            })
            .collect();
        Self {
            order: setup.order.iter().copied().collect(),
            turn: 0,
            end: false,
            night: setup.night,
            loser: None,
            players,
        }
    }

    /// Seat whose turn it is.
    ///
    /// Panics if the order is empty; the engine never builds such a state.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.order[self.turn as usize % self.order.len()]
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> Option<&PlayerState> {
        self.players.get(&player)
    }

    /// Seats with their state, in turn order.
    pub fn players_in_order(&self) -> impl Iterator<Item = (PlayerId, &PlayerState)> {
        self.order
            .iter()
            .filter_map(move |&p| self.players.get(&p).map(|s| (p, s)))
    }

    fn with(&self, player: PlayerId, state: PlayerState) -> Self {
        Self {
            players: self.players.update(player, state),
            ..self.clone()
        }
    }

    fn update<F>(&self, player: PlayerId, f: F) -> Self
    where
        F: FnOnce(&PlayerState) -> PlayerState,
    {
        match self.players.get(&player) {
            Some(state) => self.with(player, f(state)),
            None => self.clone(),
        }
    }

    fn cost_of(&self, player: PlayerId, slot: Slot) -> Option<Requirements> {
        self.player(player)?.hand.get(slot).map(|c| c.card.requirements)
    }

    /// Fold one event into a new state.
    ///
    /// Total: an event naming an unknown seat or an absent slot returns an
    /// equal state.
    #[must_use]
    pub fn receive(&self, event: &GameEvent) -> GameState {
        match *event {
            GameEvent::CardDrawn { player, slot } => {
                self.update(player, |s| s.change(&ZoneChange::draw(player, slot)))
            }
            GameEvent::TurnFinished { .. } => Self {
                turn: self.turn + 1,
                ..self.clone()
            },
            GameEvent::GameFinished { player } => Self {
                end: true,
                loser: Some(player),
                ..self.clone()
            },
            GameEvent::TurnStarted { player } => self.update(player, |s| {
                let mut builder = s.builder();
                builder.power_played = false;
                builder.build()
            }),
            GameEvent::PowerReplenished { player } => self.update(player, |s| {
                let mut builder = s.builder();
                builder.power = s.power.replenish();
                builder.build()
            }),
            GameEvent::CardPlayed { player, slot } => match self.cost_of(player, slot) {
                Some(cost) => self.update(player, |s| {
                    let mut builder = s.builder();
                    builder.power = s.power.expense(&cost);
                    builder.build().change(&ZoneChange::discard(player, slot))
                }),
                None => self.clone(),
            },
            GameEvent::PowerAdded {
                player,
                depleted,
                ref influences,
            } => self.update(player, |s| {
                let mut builder = s.builder();
                builder.power_played = true;
                builder.power = s
                    .power
                    .add(influences)
                    .increment_max()
                    .increment_power_if(!depleted);
                builder.build()
            }),
            GameEvent::CardDiscarded { player, slot } => {
                self.update(player, |s| s.change(&ZoneChange::discard(player, slot)))
            }
        }
    }

    /// One-line rendering for turn logs.
    #[must_use]
    pub fn summary(&self) -> String {
        let seats = self
            .players
            .iter()
            .map(|(p, s)| format!("{}: {}", p, s.summary()))
            .collect::<Vec<_>>()
            .join("; ");
        let night = if self.night { " night" } else { "" };
        format!("turn {}{} | {}", self.turn, night, seats)
    }
}
