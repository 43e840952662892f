//! Turn-loop driver.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{info, warn};

use crate::cards::CardRegistry;
use crate::core::{EngineError, GameRng, Limits, PlayerMap, Result, MAX_SEATS};
use crate::log::{GameLog, InitialDraw, SetupLog};
use crate::resolution::Resolver;
use crate::rules::Rules;
use crate::seats::Seat;
use crate::zones::{OrderedCard, Slot};

/// Drives one match from mulligans to the final event.
///
/// ## Example
///
/// ```
/// use eternal_sim::engine::MatchEngine;
/// use eternal_sim::library::Catalog;
/// use eternal_sim::core::MatchConfig;
///
/// let catalog = Catalog::reference();
/// let engine = catalog.engine(&MatchConfig::default()).unwrap();
/// let log = engine.ignite(7).unwrap();
///
/// assert!(log.state().end);
/// assert!(log.verify_replay());
/// ```
pub struct MatchEngine<R: Rules> {
    rules: R,
    cards: Arc<CardRegistry>,
    seats: PlayerMap<Seat>,
    limits: Limits,
}

impl<R: Rules> MatchEngine<R> {
    /// Build an engine. Seat `i` must carry `PlayerId(i)`.
    pub fn new(rules: R, cards: Arc<CardRegistry>, seats: Vec<Seat>, limits: Limits) -> Result<Self> {
        if seats.is_empty() {
            return Err(EngineError::NoSeats);
        }
        if seats.len() > MAX_SEATS {
            return Err(EngineError::TooManySeats { count: seats.len() });
        }
        if let Some((index, seat)) = seats.iter().enumerate().find(|(i, s)| s.id.index() != *i) {
            return Err(EngineError::SeatMismatch {
                index,
                player: seat.id,
            });
        }
        Ok(Self {
            rules,
            cards,
            seats: PlayerMap::from_vec(seats),
            limits,
        })
    }

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    #[must_use]
    pub fn seats(&self) -> &PlayerMap<Seat> {
        &self.seats
    }

    /// Play a whole match from `seed`.
    pub fn ignite(&self, seed: u64) -> Result<GameLog> {
        let mut rng = GameRng::new(seed);
        let mut log = GameLog::new(self.setup(&mut rng, seed)?);
        info!(seed, setup = %log.setup().summary(), "mulligan finished");

        let resolver = Resolver::new(&self.rules, &self.seats, &self.limits);
        while !log.state().end {
            log = self.play_turn(&resolver, log)?;
            info!(state = %log.state().summary(), "turn finished");
        }
        Ok(log)
    }

    fn setup(&self, rng: &mut GameRng, seed: u64) -> Result<SetupLog> {
        let mut order: Vec<_> = self.seats.player_ids().collect();
        rng.shuffle(&mut order);

        let attempts = self.rules.num_mulligans().max(1);
        let mut draws = BTreeMap::new();
        for (id, seat) in self.seats.iter() {
            let cards = self.bind_deck(seat)?;
            let position = order.iter().position(|&p| p == id).unwrap_or_default();
            let mut taken: Vec<InitialDraw> = Vec::with_capacity(attempts);
            for attempt in 0..attempts {
                let draw = self.rules.initial_draw_strategy(attempt).extract(&cards, rng);
                let accept = seat.accept_hand(position, &draw.hand, attempt);
                taken.push(draw);
                if accept {
                    break;
                }
            }
            draws.insert(id, taken);
        }

        Ok(SetupLog {
            order,
            draws,
            night: self.rules.night(),
            seed,
        })
    }

    /// Deck list to slot-bound cards, slot `i` for position `i`.
    fn bind_deck(&self, seat: &Seat) -> Result<Vec<OrderedCard>> {
        seat.deck
            .cards
            .iter()
            .enumerate()
            .map(|(i, &id)| {
                self.cards
                    .resolve(id)
                    .map(|card| OrderedCard::new(Slot::new(i as u32), card))
            })
            .collect()
    }

    fn play_turn(&self, resolver: &Resolver<'_, R>, log: GameLog) -> Result<GameLog> {
        let log = self.start_phase(resolver, log)?;
        let log = self.action_phase(resolver, log)?;
        self.end_phase(resolver, log)
    }

    fn start_phase(&self, resolver: &Resolver<'_, R>, log: GameLog) -> Result<GameLog> {
        let opening = self.rules.turn_opening(&log);
        resolver.submit(log, opening)
    }

    /// Poll the active seat until it passes, concedes, or stops answering.
    fn action_phase(&self, resolver: &Resolver<'_, R>, mut log: GameLog) -> Result<GameLog> {
        let current = log.current_player();
        let Some(seat) = self.seats.get(current) else {
            return Ok(log);
        };

        let mut taken = 0;
        while !log.state().end {
            let Some(request) = seat.act(&log.projection(&[])) else {
                break;
            };
            if taken == self.limits.max_actions_per_turn {
                warn!(player = %current, turn = log.state().turn, limit = taken, "action phase cut short");
                break;
            }
            taken += 1;
            log = resolver.submit_request(log, request)?;
            if request.is_final() {
                break;
            }
        }
        Ok(log)
    }

    fn end_phase(&self, resolver: &Resolver<'_, R>, log: GameLog) -> Result<GameLog> {
        let closing = self.rules.turn_closing(&log);
        resolver.submit(log, closing)
    }
}

impl<R: Rules> std::fmt::Debug for MatchEngine<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchEngine")
            .field("rules", &self.rules.name())
            .field("seats", &self.seats)
            .field("limits", &self.limits)
            .finish()
    }
}
