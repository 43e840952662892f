//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::cell::Cell;
use std::collections::BTreeMap;

use eternal_sim::actions::PlayerRequest;
use eternal_sim::cards::{CardId, CardRegistry, Deck};
use eternal_sim::core::{PlayerId, PlayerMap};
use eternal_sim::library::reference_cards;
use eternal_sim::log::{GameLog, InitialDraw, LogProjection, SetupLog};
use eternal_sim::policies::Dummy;
use eternal_sim::seats::{Policy, Seat};
use eternal_sim::zones::{OrderedCard, OrderedDeck, Slot};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const P0: PlayerId = PlayerId::new(0);
pub const P1: PlayerId = PlayerId::new(1);

/// Route engine logs to the test harness; filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init();
}

/// Opening hand and deck (top first) for one seat.
pub struct Layout {
    pub player: PlayerId,
    pub hand: Vec<CardId>,
    pub deck: Vec<CardId>,
}

impl Layout {
    pub fn new(player: PlayerId, hand: Vec<CardId>, deck: Vec<CardId>) -> Self {
        Self { player, hand, deck }
    }
}

/// A setup holding exactly these layouts. Hand cards get slots `0..h`,
/// deck cards `h..h+d`.
pub fn setup_with(order: Vec<PlayerId>, layouts: &[Layout]) -> SetupLog {
    let cards = reference_cards();
    let bind = |cards: &CardRegistry, ids: &[CardId], offset: usize| -> Vec<OrderedCard> {
        ids.iter()
            .enumerate()
            .map(|(i, &id)| OrderedCard::new(Slot::new((offset + i) as u32), cards.resolve(id).unwrap()))
            .collect()
    };

    let mut draws = BTreeMap::new();
    for layout in layouts {
        let hand = bind(&cards, &layout.hand, 0).into_iter().collect();
        let deck = OrderedDeck::new(bind(&cards, &layout.deck, layout.hand.len()));
        draws.insert(layout.player, vec![InitialDraw { hand, deck }]);
    }
    SetupLog {
        order,
        draws,
        night: false,
        seed: 0,
    }
}

pub fn log_with(order: Vec<PlayerId>, layouts: &[Layout]) -> GameLog {
    GameLog::new(setup_with(order, layouts))
}

pub fn seat(id: PlayerId, policy: Box<dyn Policy>) -> Seat {
    Seat::new(id, "test", Deck::new("test"), policy)
}

/// Two `Dummy` seats.
pub fn dummies() -> PlayerMap<Seat> {
    PlayerMap::from_vec(vec![seat(P0, Box::new(Dummy)), seat(P1, Box::new(Dummy))])
}

/// Reacts to the first open window with one discard, then stays quiet.
pub struct DiscardOnce {
    pub player: PlayerId,
    pub slot: Slot,
    pub fired: Cell<bool>,
}

impl DiscardOnce {
    pub fn new(player: PlayerId, slot: Slot) -> Self {
        Self {
            player,
            slot,
            fired: Cell::new(false),
        }
    }
}

impl Policy for DiscardOnce {
    fn act(&self, log: &LogProjection<'_>) -> Option<PlayerRequest> {
        if log.is_idle() || self.fired.replace(true) {
            return None;
        }
        Some(PlayerRequest::Discard {
            player: self.player,
            slot: self.slot,
        })
    }
}

/// Reacts to every window pass with a discard.
pub struct DiscardForever(pub PlayerId);

impl Policy for DiscardForever {
    fn act(&self, log: &LogProjection<'_>) -> Option<PlayerRequest> {
        if log.is_idle() {
            return None;
        }
        Some(PlayerRequest::Discard {
            player: self.0,
            slot: Slot::new(0),
        })
    }
}

/// Tries to end the match whenever a window is open.
pub struct Meddler(pub PlayerId);

impl Policy for Meddler {
    fn act(&self, log: &LogProjection<'_>) -> Option<PlayerRequest> {
        if log.is_idle() {
            return None;
        }
        Some(PlayerRequest::EndGame { player: self.0 })
    }
}

pub fn repeat(count: usize, id: CardId) -> Vec<CardId> {
    vec![id; count]
}
