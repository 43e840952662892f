//! The ruleset contract.

use crate::actions::{ActionKind, GameAction};
use crate::core::PlayerId;
use crate::log::GameLog;

use super::draw::InitialDrawStrategy;

/// Match-level policy the engine defers to.
///
/// The engine owns the resolution protocol; a ruleset decides how many
/// mulligans there are, how opening hands are drawn, when the match is
/// over and which intentions open and close a turn.
///
/// ## Implementation Notes
///
/// - `check_game_end`: return the losing seat, or `None` to continue
/// - `exceed_amount`: return one `GameAction::Discard` per seat over the limit
/// - `supports`: the engine refuses to interpret any kind answered `false`
pub trait Rules {
    /// Short identifier used in errors and logs.
    fn name(&self) -> &'static str;

    /// Maximum opening-hand attempts per seat.
    fn num_mulligans(&self) -> usize;

    /// Hand size for the attempt with this index.
    fn initial_hand(&self, attempt: usize) -> usize;

    fn initial_draw_strategy(&self, attempt: usize) -> Box<dyn InitialDrawStrategy>;

    fn hand_threshold(&self) -> usize;

    /// Whether this match is played at night (two draws per turn).
    fn night(&self) -> bool {
        false
    }

    fn check_game_end(&self, log: &GameLog) -> Option<PlayerId>;

    fn exceed_amount(&self, log: &GameLog) -> Vec<GameAction>;

    /// Intentions that open a turn.
    fn turn_opening(&self, _log: &GameLog) -> Vec<GameAction> {
        vec![GameAction::TurnStart]
    }

    /// Draws owed to the current seat once its turn has started.
    fn turn_draws(&self, log: &GameLog) -> Vec<GameAction> {
        let player = log.current_player();
        let count = if log.state().night { 2 } else { 1 };
        vec![GameAction::DrawCard { player }; count]
    }

    /// Intentions that close a turn.
    fn turn_closing(&self, _log: &GameLog) -> Vec<GameAction> {
        vec![GameAction::TurnEnd]
    }

    /// Whether the engine may interpret actions of this kind.
    fn supports(&self, _kind: ActionKind) -> bool {
        true
    }
}
