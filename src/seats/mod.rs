//! Seat policies and seat composition.
//!
//! A `Policy` is the decision-making half of a seat. Every capability has
//! either a default or is required, so a policy implements only what it
//! cares about. `Seat` binds a policy to a deck and forwards each capability
//! to it explicitly.

use crate::actions::{Decision, PlayerRequest};
use crate::cards::Deck;
use crate::core::PlayerId;
use crate::log::LogProjection;
use crate::zones::Hand;

/// Decision-making capabilities of a seat.
///
/// Policies must be deterministic for a match to be reproducible from its
/// seed.
pub trait Policy {
    /// Keep this opening hand?
    ///
    /// `order` is the seat's position in turn order and `attempt` the
    /// zero-based mulligan index. Defaults to keeping.
    fn accept_hand(&self, _order: usize, _hand: &Hand, _attempt: usize) -> bool {
        true
    }

    /// Next request, or `None` to stop acting.
    ///
    /// Called for the active seat during its action phase and for every
    /// other seat while an intention is open to reactions.
    fn act(&self, log: &LogProjection<'_>) -> Option<PlayerRequest>;

    /// Answer a forced decision. Returning nothing accepts `default`.
    fn decide(
        &self,
        _decision: &Decision,
        _log: &LogProjection<'_>,
        default: Vec<PlayerRequest>,
    ) -> Vec<PlayerRequest> {
        default
    }
}

/// One participating position: identity, deck and policy.
pub struct Seat {
    pub id: PlayerId,
    /// Policy name, for logs.
    pub name: String,
    pub deck: Deck,
    policy: Box<dyn Policy>,
}

impl Seat {
    pub fn new(id: PlayerId, name: impl Into<String>, deck: Deck, policy: Box<dyn Policy>) -> Self {
        Self {
            id,
            name: name.into(),
            deck,
            policy,
        }
    }

    pub fn accept_hand(&self, order: usize, hand: &Hand, attempt: usize) -> bool {
        self.policy.accept_hand(order, hand, attempt)
    }

    pub fn act(&self, log: &LogProjection<'_>) -> Option<PlayerRequest> {
        self.policy.act(log)
    }

    /// Resolve a decision. An empty answer from the policy falls back to
    /// the decision's default.
    pub fn decide(&self, decision: &Decision, log: &LogProjection<'_>) -> Vec<PlayerRequest> {
        let default = decision.default_requests(log);
        let answer = self.policy.decide(decision, log, default.clone());
        if answer.is_empty() {
            default
        } else {
            answer
        }
    }
}

impl std::fmt::Debug for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Seat")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("deck", &self.deck.name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardId};
    use crate::log::{GameLog, InitialDraw, SetupLog};
    use crate::zones::{OrderedCard, OrderedDeck, Slot};
    use std::collections::BTreeMap;
    use std::sync::Arc;

    const P0: PlayerId = PlayerId::new(0);

    struct Passive;

    impl Policy for Passive {
        fn act(&self, _log: &LogProjection<'_>) -> Option<PlayerRequest> {
            None
        }
    }

    struct HighestFirst;

    impl Policy for HighestFirst {
        fn accept_hand(&self, _order: usize, hand: &Hand, _attempt: usize) -> bool {
            hand.len() > 1
        }

        fn act(&self, _log: &LogProjection<'_>) -> Option<PlayerRequest> {
            Some(PlayerRequest::EndTurn { player: P0 })
        }

        fn decide(
            &self,
            decision: &Decision,
            log: &LogProjection<'_>,
            _default: Vec<PlayerRequest>,
        ) -> Vec<PlayerRequest> {
            match *decision {
                Decision::Discard { player, count } => log
                    .player(player)
                    .map(|p| {
                        let mut slots: Vec<_> = p.hand.slots().collect();
                        slots.reverse();
                        slots.truncate(count);
                        slots
                    })
                    .unwrap_or_default()
                    .into_iter()
                    .map(|slot| PlayerRequest::Discard { player, slot })
                    .collect(),
                Decision::SeekPower { .. } => Vec::new(),
            }
        }
    }

    fn log() -> GameLog {
        let card = Arc::new(Card::new(CardId::new(0), "Filler"));
        let hand = (0..3).map(|i| OrderedCard::new(Slot::new(i), card.clone())).collect();
        let mut draws = BTreeMap::new();
        draws.insert(
            P0,
            vec![InitialDraw {
                hand,
                deck: OrderedDeck::default(),
            }],
        );
        GameLog::new(SetupLog {
            order: vec![P0],
            draws,
            night: false,
            seed: 0,
        })
    }

    fn seat(policy: Box<dyn Policy>) -> Seat {
        Seat::new(P0, "test", Deck::new("none"), policy)
    }

    #[test]
    fn test_defaults_forwarded() {
        let seat = seat(Box::new(Passive));
        let log = log();
        let view = log.projection(&[]);

        assert!(seat.accept_hand(0, &Hand::new(), 0));
        assert_eq!(seat.act(&view), None);
        assert_eq!(
            seat.decide(&Decision::Discard { player: P0, count: 1 }, &view),
            vec![PlayerRequest::Discard { player: P0, slot: Slot::new(0) }]
        );
    }

    #[test]
    fn test_override_forwarded() {
        let seat = seat(Box::new(HighestFirst));
        let log = log();
        let view = log.projection(&[]);

        assert!(!seat.accept_hand(0, &Hand::new(), 0));
        assert_eq!(seat.act(&view), Some(PlayerRequest::EndTurn { player: P0 }));
        assert_eq!(
            seat.decide(&Decision::Discard { player: P0, count: 2 }, &view),
            vec![
                PlayerRequest::Discard { player: P0, slot: Slot::new(2) },
                PlayerRequest::Discard { player: P0, slot: Slot::new(1) },
            ]
        );
    }

    #[test]
    fn test_empty_answer_falls_back_to_default() {
        let seat = seat(Box::new(HighestFirst));
        let log = log();
        // Nothing in deck, so the default is empty too
        assert!(seat
            .decide(&Decision::SeekPower { player: P0 }, &log.projection(&[]))
            .is_empty());
    }
}
