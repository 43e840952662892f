//! Name-to-content binding for configured matches.

use std::sync::Arc;

use tracing::debug;

use crate::cards::{CardRegistry, DeckRegistry};
use crate::core::{EngineError, MatchConfig, PlayerId, Result, MAX_SEATS};
use crate::engine::MatchEngine;
use crate::policies::PolicyRegistry;
use crate::rules::Throne;
use crate::seats::Seat;

use super::cards::reference_cards;
use super::decks::reference_decks;

/// Cards, decks and policies a `MatchConfig` can name.
#[derive(Clone, Debug)]
pub struct Catalog {
    pub cards: Arc<CardRegistry>,
    pub decks: DeckRegistry,
    pub policies: PolicyRegistry,
}

impl Catalog {
    #[must_use]
    pub fn new(cards: CardRegistry, decks: DeckRegistry, policies: PolicyRegistry) -> Self {
        Self {
            cards: Arc::new(cards),
            decks,
            policies,
        }
    }

    /// The built-in cards, decks and policies.
    #[must_use]
    pub fn reference() -> Self {
        Self::new(reference_cards(), reference_decks(), PolicyRegistry::reference())
    }

    /// Build seats for `config` in order, seat `i` as `PlayerId(i)`.
    pub fn seats(&self, config: &MatchConfig) -> Result<Vec<Seat>> {
        let count = config.seats.len();
        if count == 0 {
            return Err(EngineError::NoSeats);
        }
        if count > MAX_SEATS {
            return Err(EngineError::TooManySeats { count });
        }
        config
            .seats
            .iter()
            .enumerate()
            .map(|(i, seat)| {
                let id = u8::try_from(i)
                    .map(PlayerId::new)
                    .map_err(|_| EngineError::TooManySeats { count })?;
                let deck = self.decks.resolve(&seat.deck)?.clone();
                if let Some(&missing) = deck.cards.iter().find(|&&c| !self.cards.contains(c)) {
                    return Err(EngineError::UnknownCard(missing));
                }
                let policy = self.policies.resolve(&seat.policy, id)?;
                debug!(player = %id, policy = %seat.policy, deck = %seat.deck, "seat bound");
                Ok(Seat::new(id, seat.policy.clone(), deck, policy))
            })
            .collect()
    }

    /// Engine for `config` under the reference ruleset.
    pub fn engine(&self, config: &MatchConfig) -> Result<MatchEngine<Throne>> {
        let seats = self.seats(config)?;
        MatchEngine::new(Throne::new(), self.cards.clone(), seats, config.limits.clone())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::reference()
    }
}
