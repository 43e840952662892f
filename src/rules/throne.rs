//! The reference ruleset.

use crate::actions::GameAction;
use crate::core::PlayerId;
use crate::log::GameLog;

use super::draw::{InitialDrawStrategy, PowerCurve, Uniform};
use super::ruleset::Rules;

/// Reference ruleset.
///
/// - Three opening attempts: seven cards, seven, then six
/// - The first attempt is a plain shuffle; later ones guarantee 2-4 powers
/// - Hand limit of 11, checked at end of turn
/// - The first seat in turn order found with an empty deck loses
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Throne {
    pub night: bool,
}

impl Throne {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Play every turn at night.
    #[must_use]
    pub fn with_night(mut self, night: bool) -> Self {
        self.night = night;
        self
    }
}

impl Rules for Throne {
    fn name(&self) -> &'static str {
        "throne"
    }

    fn num_mulligans(&self) -> usize {
        3
    }

    fn initial_hand(&self, attempt: usize) -> usize {
        if attempt < 2 {
            7
        } else {
            6
        }
    }

    fn initial_draw_strategy(&self, attempt: usize) -> Box<dyn InitialDrawStrategy> {
        let hand_size = self.initial_hand(attempt);
        if attempt == 0 {
            Box::new(Uniform::new(hand_size))
        } else {
            Box::new(PowerCurve::new(hand_size))
        }
    }

    fn hand_threshold(&self) -> usize {
        11
    }

    fn night(&self) -> bool {
        self.night
    }

    fn check_game_end(&self, log: &GameLog) -> Option<PlayerId> {
        log.state()
            .players_in_order()
            .find(|(_, p)| p.has_empty_deck())
            .map(|(id, _)| id)
    }

    fn exceed_amount(&self, log: &GameLog) -> Vec<GameAction> {
        let threshold = self.hand_threshold();
        log.state()
            .players_in_order()
            .filter(|(_, p)| p.hand.len() > threshold)
            .map(|(player, p)| GameAction::Discard {
                player,
                count: p.hand.len() - threshold,
            })
            .collect()
    }
}
