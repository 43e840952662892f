//! Policy built from a chain of small engines.
//!
//! Acting asks each action engine in order and takes the first answer.
//! Decisions ask each special engine in order and take the first non-empty
//! answer, falling back to the decision's default.

use crate::actions::{Decision, PlayerRequest};
use crate::core::PlayerId;
use crate::log::LogProjection;
use crate::seats::Policy;
use crate::zones::Hand;

/// Mulligan check: keep this opening hand?
pub trait MulliganCheck {
    fn accept(&self, order: usize, hand: &Hand, attempt: usize) -> bool;
}

/// Proposes the next request, or passes to the next engine.
pub trait ActionEngine {
    fn action(&self, log: &LogProjection<'_>) -> Option<PlayerRequest>;
}

/// Answers forced decisions it knows about; empty means "not mine".
pub trait SpecialEngine {
    fn make(&self, decision: &Decision, log: &LogProjection<'_>) -> Vec<PlayerRequest>;
}

/// Keeps every hand.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeepAll;

impl MulliganCheck for KeepAll {
    fn accept(&self, _order: usize, _hand: &Hand, _attempt: usize) -> bool {
        true
    }
}

/// Policy composed of a mulligan check, action engines and special engines.
pub struct ChainPolicy {
    player: PlayerId,
    mulligan: Box<dyn MulliganCheck>,
    engines: Vec<Box<dyn ActionEngine>>,
    specials: Vec<Box<dyn SpecialEngine>>,
}

impl ChainPolicy {
    /// Start a chain for `player` that keeps every hand and never acts.
    #[must_use]
    pub fn builder(player: PlayerId) -> ChainPolicyBuilder {
        ChainPolicyBuilder {
            policy: ChainPolicy {
                player,
                mulligan: Box::new(KeepAll),
                engines: Vec::new(),
                specials: Vec::new(),
            },
        }
    }

    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }
}

impl Policy for ChainPolicy {
    fn accept_hand(&self, order: usize, hand: &Hand, attempt: usize) -> bool {
        self.mulligan.accept(order, hand, attempt)
    }

    fn act(&self, log: &LogProjection<'_>) -> Option<PlayerRequest> {
        self.engines.iter().find_map(|e| e.action(log))
    }

    fn decide(
        &self,
        decision: &Decision,
        log: &LogProjection<'_>,
        default: Vec<PlayerRequest>,
    ) -> Vec<PlayerRequest> {
        self.specials
            .iter()
            .map(|s| s.make(decision, log))
            .find(|answer| !answer.is_empty())
            .unwrap_or(default)
    }
}

/// Builder for [`ChainPolicy`].
pub struct ChainPolicyBuilder {
    policy: ChainPolicy,
}

impl ChainPolicyBuilder {
    #[must_use]
    pub fn mulligan(mut self, check: impl MulliganCheck + 'static) -> Self {
        self.policy.mulligan = Box::new(check);
        self
    }

    /// Append an action engine; earlier engines win.
    #[must_use]
    pub fn engine(mut self, engine: impl ActionEngine + 'static) -> Self {
        self.policy.engines.push(Box::new(engine));
        self
    }

    /// Append a special engine; earlier engines win.
    #[must_use]
    pub fn special(mut self, special: impl SpecialEngine + 'static) -> Self {
        self.policy.specials.push(Box::new(special));
        self
    }

    #[must_use]
    pub fn build(self) -> ChainPolicy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::{GameLog, SetupLog};
    use crate::zones::Slot;

    const P0: PlayerId = PlayerId::new(0);

    struct Fixed(Option<PlayerRequest>);

    impl ActionEngine for Fixed {
        fn action(&self, _log: &LogProjection<'_>) -> Option<PlayerRequest> {
            self.0
        }
    }

    struct Answer(Vec<PlayerRequest>);

    impl SpecialEngine for Answer {
        fn make(&self, _decision: &Decision, _log: &LogProjection<'_>) -> Vec<PlayerRequest> {
            self.0.clone()
        }
    }

    fn log() -> GameLog {
        GameLog::new(SetupLog {
            order: vec![P0],
            draws: Default::default(),
            night: false,
            seed: 0,
        })
    }

    #[test]
    fn test_first_answer_wins() {
        let end = PlayerRequest::EndTurn { player: P0 };
        let policy = ChainPolicy::builder(P0)
            .engine(Fixed(None))
            .engine(Fixed(Some(end)))
            .engine(Fixed(Some(PlayerRequest::EndGame { player: P0 })))
            .build();

        assert_eq!(policy.act(&log().projection(&[])), Some(end));
        assert!(policy.accept_hand(0, &Hand::new(), 0));
    }

    #[test]
    fn test_special_falls_back_to_default() {
        let discard = PlayerRequest::Discard { player: P0, slot: Slot::new(4) };
        let decision = Decision::Discard { player: P0, count: 1 };
        let log = log();
        let view = log.projection(&[]);

        let empty = ChainPolicy::builder(P0).special(Answer(Vec::new())).build();
        assert_eq!(empty.decide(&decision, &view, vec![discard]), vec![discard]);

        let other = PlayerRequest::Discard { player: P0, slot: Slot::new(7) };
        let chained = ChainPolicy::builder(P0)
            .special(Answer(Vec::new()))
            .special(Answer(vec![other]))
            .build();
        assert_eq!(chained.decide(&decision, &view, vec![discard]), vec![other]);
    }
}
