//! Reactive collection and interpretation of pending intentions.
//!
//! `Resolver::submit` is the single entry point. It runs two stages:
//!
//! 1. **Reaction window**: every seat other than the acting one, in turn
//!    order starting after the current seat, may inject a discard ahead of
//!    the pending intentions. Passes repeat until one injects nothing.
//! 2. **Interpretation**: the queue is drained front to back, each action
//!    committing zero or more events. Actions may push follow-ups to the
//!    front of the queue (draws after a turn start, hand-limit discards
//!    before a turn end), and decisions re-enter `submit` for each request
//!    they produce.
//!
//! A committed `GameFinished` stops interpretation at every depth.

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::actions::{Decision, GameAction, PlayerRequest};
use crate::core::{EngineError, Limits, PlayerId, PlayerMap, Result};
use crate::log::{GameEvent, GameLog};
use crate::rules::Rules;
use crate::seats::Seat;
use crate::zones::Slot;

/// Turns intentions into committed events.
pub struct Resolver<'a, R: Rules + ?Sized> {
    rules: &'a R,
    seats: &'a PlayerMap<Seat>,
    limits: &'a Limits,
}

impl<'a, R: Rules + ?Sized> Resolver<'a, R> {
    pub fn new(rules: &'a R, seats: &'a PlayerMap<Seat>, limits: &'a Limits) -> Self {
        Self {
            rules,
            seats,
            limits,
        }
    }

    /// Open `actions` to reactions, then interpret the resulting queue.
    pub fn submit(&self, log: GameLog, actions: Vec<GameAction>) -> Result<GameLog> {
        if actions.is_empty() || log.state().end {
            return Ok(log);
        }
        let queue = self.collect_reactions(&log, actions)?;
        self.interpret(log, queue)
    }

    /// Submit a request made by a seat.
    pub fn submit_request(&self, log: GameLog, request: PlayerRequest) -> Result<GameLog> {
        self.submit(log, vec![request.action()])
    }

    fn collect_reactions(&self, log: &GameLog, actions: Vec<GameAction>) -> Result<Vec<GameAction>> {
        let current = log.current_player();
        let actor = actions
            .last()
            .map_or(current, |action| action.actor(current));
        let reactors: Vec<PlayerId> = log
            .setup()
            .order_after(current)
            .into_iter()
            .filter(|&p| p != actor)
            .collect();

        let mut queue = actions;
        let mut injected = 0;
        loop {
            let mut pass_injected = false;
            for &player in &reactors {
                let Some(seat) = self.seats.get(player) else {
                    continue;
                };
                let Some(request) = seat.act(&log.projection(&queue)) else {
                    continue;
                };
                if !request.is_discard() {
                    warn!(%player, ?request, "ignoring reaction that is not a discard");
                    continue;
                }
                injected += 1;
                if injected > self.limits.max_reactions_per_window {
                    return Err(EngineError::ReactionOverflow {
                        limit: self.limits.max_reactions_per_window,
                    });
                }
                debug!(%player, ?request, "reaction injected");
                queue.insert(0, request.action());
                pass_injected = true;
            }
            if !pass_injected {
                return Ok(queue);
            }
        }
    }

    fn interpret(&self, mut log: GameLog, actions: Vec<GameAction>) -> Result<GameLog> {
        let mut queue: VecDeque<GameAction> = actions.into();
        let mut hand_limit_rounds = 0;

        while let Some(action) = queue.pop_front() {
            if log.state().end {
                break;
            }
            if !self.rules.supports(action.kind()) {
                return Err(EngineError::UnsupportedAction {
                    rules: self.rules.name(),
                    action: action.kind(),
                });
            }

            match action {
                GameAction::EndGame { player } => {
                    log = log.receive(GameEvent::GameFinished { player });
                }
                GameAction::DiscardCard { player, slot } => {
                    if log.player(player).is_some_and(|p| p.hand.contains(slot)) {
                        log = log.receive(GameEvent::CardDiscarded { player, slot });
                    }
                }
                GameAction::Discard { player, count } => {
                    let decision = Decision::Discard { player, count };
                    let pending = pending_with(action, &queue);
                    log = self.resolve_decision(log, &decision, &pending)?;
                }
                GameAction::DrawCard { player } => {
                    let Some(state) = log.player(player) else {
                        continue;
                    };
                    let event = match state.deck.top() {
                        Some(slot) => GameEvent::CardDrawn { player, slot },
                        None => GameEvent::GameFinished { player },
                    };
                    log = log.receive(event);
                }
                GameAction::TutorCard { player, slot } => {
                    if log.player(player).is_some_and(|p| p.deck.contains(slot)) {
                        log = log.receive(GameEvent::CardDrawn { player, slot });
                    }
                }
                GameAction::PlayCard { player, slot } => {
                    let pending = pending_with(action, &queue);
                    log = self.play_card(log, player, slot, &pending)?;
                }
                GameAction::TurnEnd => {
                    if let Some(loser) = self.rules.check_game_end(&log) {
                        log = log.receive(GameEvent::GameFinished { player: loser });
                        continue;
                    }
                    let discards = self.rules.exceed_amount(&log);
                    if discards.is_empty() {
                        let player = log.current_player();
                        log = log.receive(GameEvent::TurnFinished { player });
                        continue;
                    }
                    hand_limit_rounds += 1;
                    if hand_limit_rounds > self.limits.max_hand_limit_rounds {
                        let current = log.current_player();
                        return Err(EngineError::HandLimitUnresolved {
                            player: discards[0].actor(current),
                            rounds: self.limits.max_hand_limit_rounds,
                        });
                    }
                    queue.push_front(action);
                    for discard in discards.into_iter().rev() {
                        queue.push_front(discard);
                    }
                }
                GameAction::TurnStart => {
                    if let Some(loser) = self.rules.check_game_end(&log) {
                        log = log.receive(GameEvent::GameFinished { player: loser });
                        continue;
                    }
                    let player = log.current_player();
                    log = log.receive_all([
                        GameEvent::TurnStarted { player },
                        GameEvent::PowerReplenished { player },
                    ]);
                    for draw in self.rules.turn_draws(&log).into_iter().rev() {
                        queue.push_front(draw);
                    }
                }
                GameAction::PassTurn { .. } => {}
            }
        }
        Ok(log)
    }

    /// Play a card from hand.
    ///
    /// Summon decisions resolve first, depth-first; the play is then
    /// validated again against the state they left behind.
    fn play_card(
        &self,
        mut log: GameLog,
        player: PlayerId,
        slot: Slot,
        pending: &[GameAction],
    ) -> Result<GameLog> {
        if !can_play(&log, player, slot) {
            return Ok(log);
        }
        let Some(card) = log
            .player(player)
            .and_then(|p| p.hand.get(slot))
            .map(|c| c.card.clone())
        else {
            return Ok(log);
        };

        for decision in card.act(player) {
            log = self.resolve_decision(log, &decision, pending)?;
            if log.state().end {
                return Ok(log);
            }
        }
        if !can_play(&log, player, slot) {
            return Ok(log);
        }

        log = log.receive(GameEvent::CardPlayed { player, slot });
        if let Some(power) = card.power {
            log = log.receive(GameEvent::PowerAdded {
                player,
                depleted: power.depleted,
                influences: power.influences,
            });
        }
        Ok(log)
    }

    /// Ask the owning seat, then resolve each request in order.
    fn resolve_decision(
        &self,
        mut log: GameLog,
        decision: &Decision,
        pending: &[GameAction],
    ) -> Result<GameLog> {
        let view = log.projection(pending);
        let requests = match self.seats.get(decision.player()) {
            Some(seat) => seat.decide(decision, &view),
            None => decision.default_requests(&view),
        };
        debug!(?decision, ?requests, "decision resolved");
        for request in requests {
            log = self.submit_request(log, request)?;
            if log.state().end {
                break;
            }
        }
        Ok(log)
    }
}

fn can_play(log: &GameLog, player: PlayerId, slot: Slot) -> bool {
    log.current_player() == player && log.player(player).is_some_and(|p| p.can_play(slot))
}

fn pending_with(action: GameAction, queue: &VecDeque<GameAction>) -> Vec<GameAction> {
    std::iter::once(action).chain(queue.iter().copied()).collect()
}
