use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{all_ranks, all_suits, Card, Rank, Suit};
use crate::errors::DeckError;

const RANK_SLOTS: usize = 13;
const SUIT_SLOTS: usize = 4;

/// Composition of a shoe: which suits and denominations it holds, how many
/// packs are merged together, and the reshuffle threshold.
///
/// When `reset_when_remaining` cards or fewer are left, the next uniform draw
/// transparently rebuilds the shoe to this composition before sampling.
/// Targeted draws are exempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckConfig {
    pub suits: Vec<Suit>,
    pub ranks: Vec<Rank>,
    pub packs: u32,
    pub reset_when_remaining: u32,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            suits: all_suits().to_vec(),
            ranks: all_ranks().to_vec(),
            packs: 1,
            reset_when_remaining: 0,
        }
    }
}

/// A multi-pack shoe kept as per-denomination and per-suit counts rather than
/// a materialized card list, so draws and analytics stay O(ranks + suits)
/// regardless of how many packs are merged in.
///
/// Invariants: each rank's remaining count equals the sum of its per-suit
/// counts, `cards_remaining` equals the sum over ranks, and no count is ever
/// negative.
#[derive(Debug)]
pub struct Deck {
    config: DeckConfig,
    rank_counts: [u32; RANK_SLOTS],
    suit_counts: [[u32; SUIT_SLOTS]; RANK_SLOTS],
    cards_remaining: u32,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Build a shoe with the given composition. `seed` makes every draw
    /// reproducible; pass `None` for a random session.
    pub fn new(config: DeckConfig, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        let mut deck = Self {
            config,
            rank_counts: [0; RANK_SLOTS],
            suit_counts: [[0; SUIT_SLOTS]; RANK_SLOTS],
            cards_remaining: 0,
            rng: ChaCha20Rng::seed_from_u64(seed),
        };
        deck.rebuild();
        deck
    }

    /// Standard single-pack 52-card shoe with a random seed.
    pub fn standard() -> Self {
        Self::new(DeckConfig::default(), None)
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    pub fn cards_remaining(&self) -> u32 {
        self.cards_remaining
    }

    /// Rebuild the inventory to the current composition.
    pub fn reset(&mut self) {
        self.rebuild();
    }

    /// Rebuild the inventory, replacing any of the composition parameters;
    /// omitted parameters keep their current value. The reshuffle threshold
    /// is not part of the reset surface and stays as configured.
    pub fn reset_with(
        &mut self,
        suits: Option<Vec<Suit>>,
        ranks: Option<Vec<Rank>>,
        packs: Option<u32>,
    ) {
        if let Some(suits) = suits {
            self.config.suits = suits;
        }
        if let Some(ranks) = ranks {
            self.config.ranks = ranks;
        }
        if let Some(packs) = packs {
            self.config.packs = packs;
        }
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.rank_counts = [0; RANK_SLOTS];
        self.suit_counts = [[0; SUIT_SLOTS]; RANK_SLOTS];
        let per_suit = self.config.packs;
        let per_rank = self.config.suits.len() as u32 * per_suit;
        for &rank in &self.config.ranks {
            self.rank_counts[rank.index()] = per_rank;
            for &suit in &self.config.suits {
                self.suit_counts[rank.index()][suit.index()] = per_suit;
            }
        }
        self.cards_remaining =
            self.config.suits.len() as u32 * self.config.ranks.len() as u32 * self.config.packs;
    }

    /// Draw a uniformly random card from the remaining physical cards without
    /// enumerating them: pick a window in `[0, cards_remaining)`, then walk
    /// denominations and suits consuming the window against their counts.
    ///
    /// Reshuffles to the full composition first when the threshold is met.
    ///
    /// # Errors
    ///
    /// [`DeckError::InternalInconsistency`] if the window cannot be resolved
    /// against the counts; unreachable while the inventory invariants hold.
    pub fn draw_card(&mut self) -> Result<Card, DeckError> {
        if self.cards_remaining <= self.config.reset_when_remaining {
            self.reset();
        }
        if self.cards_remaining == 0 {
            return Err(DeckError::InternalInconsistency(0));
        }
        let mut window = self.rng.random_range(0..self.cards_remaining);
        for i in 0..self.config.ranks.len() {
            let rank = self.config.ranks[i];
            let held = self.rank_counts[rank.index()];
            if window < held {
                for j in 0..self.config.suits.len() {
                    let suit = self.config.suits[j];
                    let of_suit = self.suit_counts[rank.index()][suit.index()];
                    if window < of_suit {
                        self.take_one(suit, rank);
                        return Ok(Card { suit, rank });
                    }
                    window -= of_suit;
                }
                // the rank count claimed the window but its suits could not cover it
                return Err(DeckError::InternalInconsistency(window));
            }
            window -= held;
        }
        Err(DeckError::InternalInconsistency(window))
    }

    /// Draw one specific card, for deterministic setups. Exempt from the
    /// automatic reshuffle.
    ///
    /// # Errors
    ///
    /// [`DeckError::DenominationNotFound`] / [`DeckError::SuitNotFound`] when
    /// the pair is outside the configured composition,
    /// [`DeckError::CardExhausted`] when no copy of it is left.
    pub fn draw_specific(&mut self, suit: Suit, rank: Rank) -> Result<Card, DeckError> {
        if !self.config.ranks.contains(&rank) {
            return Err(DeckError::DenominationNotFound(rank));
        }
        if !self.config.suits.contains(&suit) {
            return Err(DeckError::SuitNotFound(suit));
        }
        if self.suit_counts[rank.index()][suit.index()] == 0 {
            return Err(DeckError::CardExhausted { suit, rank });
        }
        self.take_one(suit, rank);
        Ok(Card { suit, rank })
    }

    fn take_one(&mut self, suit: Suit, rank: Rank) {
        self.suit_counts[rank.index()][suit.index()] -= 1;
        self.rank_counts[rank.index()] -= 1;
        self.cards_remaining -= 1;
    }

    /// Plain value-weighted sum of the remaining cards (identity weights).
    pub fn weighted_sum(&self) -> f64 {
        self.weighted_sum_by(f64::from, false)
    }

    /// Sum over denominations of `weight(value) * remaining`, the single
    /// primitive behind all deck analytics. With `aces_high`, optional-ten
    /// denominations are weighted as `weight(value + 10)` instead, evaluating
    /// the shoe as if every ace were taken high.
    pub fn weighted_sum_by<F>(&self, weight: F, aces_high: bool) -> f64
    where
        F: Fn(u32) -> f64,
    {
        let mut sum = 0.0;
        for &rank in &self.config.ranks {
            let v = rank.value();
            let w = if aces_high && rank.optional_ten() {
                weight(v + 10)
            } else {
                weight(v)
            };
            sum += w * f64::from(self.rank_counts[rank.index()]);
        }
        sum
    }

    /// Expected value of the next card drawn; 0.0 on an empty shoe.
    pub fn expectation(&self) -> f64 {
        if self.cards_remaining == 0 {
            return 0.0;
        }
        self.weighted_sum() / f64::from(self.cards_remaining)
    }

    /// Hi-Lo count of the *remaining* composition: a fresh shoe scores 0,
    /// drawing a low card raises the count, drawing a high card lowers it.
    /// Equivalent to the running count a counter keeps over cards seen.
    pub fn hi_low_count(&self) -> i64 {
        self.weighted_sum_by(
            |v| match v {
                1 => 1.0,
                2..=6 => -1.0,
                7..=9 => 0.0,
                _ => 1.0,
            },
            false,
        ) as i64
    }

    /// Probability that the next card's base value is `<= value`; 0.0 on an
    /// empty shoe.
    pub fn probability_less_or_equal(&self, value: u32) -> f64 {
        if self.cards_remaining == 0 {
            return 0.0;
        }
        self.weighted_sum_by(|v| if v <= value { 1.0 } else { 0.0 }, false)
            / f64::from(self.cards_remaining)
    }
}
