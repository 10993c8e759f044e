//! Baseline policy implementation for blackjack simulation.
//!
//! Provides a simple automated player that can be used for testing and
//! benchmarking. Implements a threshold strategy with a bust-probability
//! check in the middle range and a hi-lo informed bet sizing rule.

use crate::PlayerPolicy;
use blackjack_engine::deck::Deck;
use blackjack_engine::hand::{Hand, HandAction, HandStatus};

/// Simple baseline policy for testing and comparison.
///
/// This policy serves as a reference implementation and baseline for
/// performance comparison. It is fully deterministic for a given shoe
/// composition, which keeps seeded simulations reproducible.
///
/// # Strategy
///
/// **Playing:**
/// - Best value at 17 or above: stick
/// - Two cards totalling a hard 10 or 11: double
/// - Minimum value at 11 or below: hit (no draw can bust)
/// - Hard 12 to 16: hit when the chance that the next card fits under
///   the limit is at least even, stick otherwise
///
/// **Betting:**
/// - Stake grows with the shoe's hi-lo count, one extra base unit per
///   four points of positive count, clamped to the bankroll
///
/// # Example
///
/// ```rust
/// use blackjack_ai::baseline::BaselinePolicy;
/// use blackjack_ai::PlayerPolicy;
/// use blackjack_engine::deck::{Deck, DeckConfig};
/// use blackjack_engine::hand::Hand;
///
/// let policy = BaselinePolicy::new();
/// assert_eq!(policy.name(), "BaselinePolicy");
///
/// let mut deck = Deck::new(DeckConfig::default(), Some(42));
/// let hand = Hand::deal(&mut deck, 21).expect("deal");
/// let action = policy.choose_action(&hand, &deck);
/// // Action will be determined by the hand value and shoe composition
/// ```
#[derive(Debug, Clone)]
pub struct BaselinePolicy;

impl BaselinePolicy {
    /// Create a new BaselinePolicy instance.
    pub fn new() -> Self {
        Self
    }

    /// Decide the play action for a hand that is in play.
    ///
    /// # Arguments
    ///
    /// * `hand` - The in-play hand
    /// * `deck` - The shoe the next card would come from
    ///
    /// # Returns
    ///
    /// `Stick`, `Double` or `Hit` according to the strategy table
    fn decide_play(hand: &Hand, deck: &Deck) -> HandAction {
        if hand.best_value() >= 17 {
            return HandAction::Stick;
        }

        let min = hand.min_value();
        if hand.cards().len() == 2 && (10..=11).contains(&min) {
            return HandAction::Double;
        }
        if min <= 11 {
            return HandAction::Hit;
        }

        // hard 12-16: compare the odds of the next card fitting
        let headroom = hand.value_limit().saturating_sub(min);
        if deck.probability_less_or_equal(headroom) >= 0.5 {
            HandAction::Hit
        } else {
            HandAction::Stick
        }
    }
}

impl Default for BaselinePolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerPolicy for BaselinePolicy {
    /// Pick the next action for the baseline policy.
    ///
    /// Hands that are not in play map straight onto the single sensible
    /// action for their status, so a simulation loop can feed every
    /// status through this method.
    fn choose_action(&self, hand: &Hand, deck: &Deck) -> HandAction {
        match hand.status() {
            HandStatus::NotBetted => HandAction::PlaceBet,
            HandStatus::InPlay => Self::decide_play(hand, deck),
            HandStatus::Finished => HandAction::NewHand,
            HandStatus::Surrendered
            | HandStatus::Stuck
            | HandStatus::Bust
            | HandStatus::Blackjack => HandAction::CollectWinnings,
        }
    }

    /// Size the stake from the shoe's hi-lo count.
    ///
    /// A positive count means the remaining shoe is rich in tens and
    /// aces, so the stake is raised by one base unit per four points.
    /// The result never exceeds the bankroll.
    fn bet_size(&self, deck: &Deck, base_bet: u32, balance: u32) -> u32 {
        let count = deck.hi_low_count();
        let extra_units = if count > 0 { (count / 4) as u32 } else { 0 };
        base_bet
            .saturating_add(base_bet.saturating_mul(extra_units))
            .min(balance)
    }

    /// Return the name of this policy implementation.
    fn name(&self) -> &str {
        "BaselinePolicy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackjack_engine::cards::{Rank, Suit};
    use blackjack_engine::deck::DeckConfig;

    fn fresh_deck() -> Deck {
        Deck::new(DeckConfig::default(), Some(42))
    }

    fn forced_hand(deck: &mut Deck, first: Rank, second: Rank) -> Hand {
        let mut hand = Hand::deal_forced(deck, 21, (Suit::Spades, first), (Suit::Hearts, second))
            .expect("forced deal");
        hand.place_bet(5).expect("bet");
        hand
    }

    #[test]
    fn test_baseline_policy_creation() {
        let policy = BaselinePolicy::new();
        assert_eq!(policy.name(), "BaselinePolicy");
    }

    #[test]
    fn test_unbetted_hand_places_a_bet() {
        let policy = BaselinePolicy::new();
        let mut deck = fresh_deck();
        let hand = Hand::deal(&mut deck, 21).expect("deal");
        if hand.status() == HandStatus::NotBetted {
            assert_eq!(policy.choose_action(&hand, &deck), HandAction::PlaceBet);
        }
    }

    #[test]
    fn test_high_totals_stick() {
        let policy = BaselinePolicy::new();
        let mut deck = fresh_deck();
        let hand = forced_hand(&mut deck, Rank::King, Rank::Queen);
        assert_eq!(policy.choose_action(&hand, &deck), HandAction::Stick);
    }

    #[test]
    fn test_soft_seventeen_sticks() {
        let policy = BaselinePolicy::new();
        let mut deck = fresh_deck();
        let hand = forced_hand(&mut deck, Rank::Ace, Rank::Six);
        assert_eq!(hand.best_value(), 17);
        assert_eq!(policy.choose_action(&hand, &deck), HandAction::Stick);
    }

    #[test]
    fn test_low_totals_hit() {
        let policy = BaselinePolicy::new();
        let mut deck = fresh_deck();
        let hand = forced_hand(&mut deck, Rank::Four, Rank::Five);
        // 9 on two cards is below the doubling window
        assert_eq!(policy.choose_action(&hand, &deck), HandAction::Hit);
    }

    #[test]
    fn test_hard_eleven_doubles_on_two_cards() {
        let policy = BaselinePolicy::new();
        let mut deck = fresh_deck();
        let hand = forced_hand(&mut deck, Rank::Six, Rank::Five);
        assert_eq!(policy.choose_action(&hand, &deck), HandAction::Double);
    }

    #[test]
    fn test_hard_sixteen_sticks_against_a_fresh_shoe() {
        let policy = BaselinePolicy::new();
        let mut deck = fresh_deck();
        let hand = forced_hand(&mut deck, Rank::King, Rank::Six);
        // only 2-5 fit under the limit, well below even odds
        assert_eq!(policy.choose_action(&hand, &deck), HandAction::Stick);
    }

    #[test]
    fn test_hard_twelve_hits_against_a_fresh_shoe() {
        let policy = BaselinePolicy::new();
        let mut deck = fresh_deck();
        let hand = forced_hand(&mut deck, Rank::King, Rank::Two);
        // 2-9 fit under the limit, better than even odds
        assert_eq!(policy.choose_action(&hand, &deck), HandAction::Hit);
    }

    #[test]
    fn test_settled_hands_collect_and_finished_hands_redeal() {
        let policy = BaselinePolicy::new();
        let mut deck = fresh_deck();
        let mut hand = forced_hand(&mut deck, Rank::King, Rank::Queen);
        hand.stick().expect("stick");
        assert_eq!(
            policy.choose_action(&hand, &deck),
            HandAction::CollectWinnings
        );

        hand.get_winnings(18, false).expect("collect");
        assert_eq!(policy.choose_action(&hand, &deck), HandAction::NewHand);
    }

    #[test]
    fn test_bet_size_is_flat_on_a_fresh_shoe() {
        let policy = BaselinePolicy::new();
        let deck = fresh_deck();
        assert_eq!(deck.hi_low_count(), 0);
        assert_eq!(policy.bet_size(&deck, 5, 1000), 5);
    }

    #[test]
    fn test_bet_size_ramps_with_a_positive_count() {
        let policy = BaselinePolicy::new();
        let mut deck = fresh_deck();
        // pull four low cards out of the shoe to push the count to +4
        for rank in [Rank::Two, Rank::Three, Rank::Four, Rank::Five] {
            deck.draw_specific(Suit::Hearts, rank).expect("targeted draw");
        }
        assert_eq!(deck.hi_low_count(), 4);
        assert_eq!(policy.bet_size(&deck, 5, 1000), 10);
    }

    #[test]
    fn test_bet_size_never_exceeds_the_bankroll() {
        let policy = BaselinePolicy::new();
        let deck = fresh_deck();
        assert_eq!(policy.bet_size(&deck, 5, 3), 3);
    }
}
