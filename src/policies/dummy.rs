use crate::actions::PlayerRequest;
use crate::log::LogProjection;
use crate::seats::Policy;
use crate::zones::Hand;

/// Never keeps a hand and never acts.
///
/// With mulligans exhausted it plays out its last opening hand, drawing
/// each turn until its deck runs out.
#[derive(Clone, Copy, Debug, Default)]
pub struct Dummy;

impl Policy for Dummy {
    fn accept_hand(&self, _order: usize, _hand: &Hand, _attempt: usize) -> bool {
        false
    }

    fn act(&self, _log: &LogProjection<'_>) -> Option<PlayerRequest> {
        None
    }
}
