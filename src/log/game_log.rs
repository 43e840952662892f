//! The append-only event log.

use std::sync::Arc;

use im::Vector;
use tracing::debug;

use crate::actions::GameAction;
use crate::core::{PlayerId, Result};
use crate::state::{GameState, PlayerState};

use super::event::GameEvent;
use super::setup::SetupLog;

/// Setup, committed events, and the state they fold to.
///
/// `state` is always the fold of `events` over `GameState::init(setup)`;
/// [`GameLog::verify_replay`] checks it. Values are immutable: `receive`
/// returns a new log and leaves this one valid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameLog {
    setup: Arc<SetupLog>,
    state: GameState,
    events: Vector<GameEvent>,
}

impl GameLog {
    /// Empty log for a finished setup.
    #[must_use]
    pub fn new(setup: SetupLog) -> Self {
        let state = GameState::init(&setup);
        Self {
            setup: Arc::new(setup),
            state,
            events: Vector::new(),
        }
    }

    #[must_use]
    pub fn setup(&self) -> &SetupLog {
        &self.setup
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn events(&self) -> &Vector<GameEvent> {
        &self.events
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.state.current_player()
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> Option<&PlayerState> {
        self.state.player(player)
    }

    /// Commit one event.
    #[must_use]
    pub fn receive(&self, event: GameEvent) -> GameLog {
        debug!(turn = self.state.turn, event = %event, "commit");
        let state = self.state.receive(&event);
        let mut events = self.events.clone();
        events.push_back(event);
        GameLog {
            setup: Arc::clone(&self.setup),
            state,
            events,
        }
    }

    /// Commit events in order.
    #[must_use]
    pub fn receive_all(&self, events: impl IntoIterator<Item = GameEvent>) -> GameLog {
        events
            .into_iter()
            .fold(self.clone(), |log, event| log.receive(event))
    }

    /// Read-only view with `pending` intentions not yet committed.
    #[must_use]
    pub fn projection<'a>(&'a self, pending: &'a [GameAction]) -> LogProjection<'a> {
        LogProjection { log: self, pending }
    }

    /// `(state before, event, state after)` for every event, in order.
    #[must_use]
    pub fn replay(&self) -> Replay<'_> {
        Replay {
            state: GameState::init(&self.setup),
            events: self.events.iter(),
        }
    }

    /// Whether folding the history from setup reproduces `state`.
    #[must_use]
    pub fn verify_replay(&self) -> bool {
        let folded = self
            .events
            .iter()
            .fold(GameState::init(&self.setup), |state, e| state.receive(e));
        folded == self.state
    }

    /// Event history as bytes. Equal histories give equal bytes.
    pub fn encode_events(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(&self.events)?)
    }

    /// Chronological human-readable rendering.
    ///
    /// Draws and plays name their card; power bookkeeping is left out.
    #[must_use]
    pub fn narrative(&self) -> String {
        let name = |player: PlayerId, slot| {
            self.setup
                .card_name(player, slot)
                .map_or_else(|| slot.to_string(), str::to_string)
        };
        self.events
            .iter()
            .filter(|e| !e.is_power_event())
            .map(|e| match *e {
                GameEvent::CardDrawn { player, slot } => {
                    format!("Draw {} by {}", name(player, slot), player)
                }
                GameEvent::CardPlayed { player, slot } => {
                    format!("Play {} by {}", name(player, slot), player)
                }
                _ => e.to_string(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Iterator returned by [`GameLog::replay`].
pub struct Replay<'a> {
    state: GameState,
    events: im::vector::Iter<'a, GameEvent>,
}

impl<'a> Iterator for Replay<'a> {
    type Item = (GameState, &'a GameEvent, GameState);

    fn next(&mut self) -> Option<Self::Item> {
        let event = self.events.next()?;
        let after = self.state.receive(event);
        let before = std::mem::replace(&mut self.state, after.clone());
        Some((before, event, after))
    }
}

/// What a policy sees: the committed log plus the intentions queued ahead
/// of commitment.
#[derive(Clone, Copy, Debug)]
pub struct LogProjection<'a> {
    pub log: &'a GameLog,
    pub pending: &'a [GameAction],
}

impl<'a> LogProjection<'a> {
    #[must_use]
    pub fn state(&self) -> &'a GameState {
        &self.log.state
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> Option<&'a PlayerState> {
        self.log.state.player(player)
    }

    #[must_use]
    pub fn setup(&self) -> &'a SetupLog {
        &self.log.setup
    }

    /// Nothing is queued ahead of commitment.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardId, Influences};
    use crate::log::InitialDraw;
    use crate::zones::{OrderedCard, OrderedDeck, Slot};
    use std::collections::BTreeMap;

    const P0: PlayerId = PlayerId::new(0);

    fn log() -> GameLog {
        let card = Arc::new(Card::new(CardId::new(0), "Filler"));
        let draw = InitialDraw {
            hand: vec![OrderedCard::new(Slot::new(0), card.clone())].into_iter().collect(),
            deck: OrderedDeck::new(vec![
                OrderedCard::new(Slot::new(1), card.clone()),
                OrderedCard::new(Slot::new(2), card),
            ]),
        };
        let mut draws = BTreeMap::new();
        draws.insert(P0, vec![draw]);
        GameLog::new(SetupLog {
            order: vec![P0],
            draws,
            night: false,
            seed: 3,
        })
    }

    fn played() -> GameLog {
        log().receive_all([
            GameEvent::TurnStarted { player: P0 },
            GameEvent::PowerReplenished { player: P0 },
            GameEvent::CardDrawn { player: P0, slot: Slot::new(1) },
            GameEvent::CardPlayed { player: P0, slot: Slot::new(0) },
            GameEvent::TurnFinished { player: P0 },
        ])
    }

    #[test]
    fn test_receive_keeps_prior_log() {
        let before = log();
        let after = before.receive(GameEvent::CardDrawn { player: P0, slot: Slot::new(1) });

        assert!(before.events().is_empty());
        assert_eq!(before.player(P0).unwrap().hand.len(), 1);
        assert_eq!(after.events().len(), 1);
        assert_eq!(after.player(P0).unwrap().hand.len(), 2);
    }

    #[test]
    fn test_verify_replay() {
        assert!(log().verify_replay());
        assert!(played().verify_replay());
    }

    #[test]
    fn test_replay_triples() {
        let log = played();
        let triples: Vec<_> = log.replay().collect();

        assert_eq!(triples.len(), 5);
        for (before, event, after) in &triples {
            assert_eq!(&before.receive(event), after);
        }
        assert_eq!(&triples.last().unwrap().2, log.state());
    }

    #[test]
    fn test_narrative() {
        let narrative = played().narrative();
        assert_eq!(
            narrative,
            "Turn started by Player 0\nDraw Filler by Player 0\nPlay Filler by Player 0\nTurn finished by Player 0"
        );
    }

    #[test]
    fn test_narrative_hides_power_added() {
        let log = log().receive(GameEvent::PowerAdded {
            player: P0,
            depleted: false,
            influences: Influences::none(),
        });
        assert_eq!(log.narrative(), "");
    }

    #[test]
    fn test_encode_events_deterministic() {
        let a = played().encode_events().unwrap();
        let b = played().encode_events().unwrap();
        assert_eq!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn test_projection() {
        let log = log();
        let pending = [GameAction::TurnEnd];
        let view = log.projection(&pending);

        assert!(!view.is_idle());
        assert_eq!(view.state().turn, 0);
        assert_eq!(view.player(P0).unwrap().deck.len(), 2);
        assert!(log.projection(&[]).is_idle());
    }
}
