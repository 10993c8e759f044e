//! # blackjack-ai: Automated Players for Blackjack Simulation
//!
//! Provides automated betting and playing policies for blackjack rounds.
//! Supports multiple strategies with a common interface for decision-making.
//!
//! ## Core Components
//!
//! - [`PlayerPolicy`] - Trait defining the interface for policy decision-making
//! - [`baseline`] - Baseline policy implementation for testing and comparison
//! - [`create_policy`] - Factory function for creating policies
//!
//! ## Quick Start
//!
//! ```rust
//! use blackjack_ai::{create_policy, PlayerPolicy};
//! use blackjack_engine::deck::{Deck, DeckConfig};
//! use blackjack_engine::hand::Hand;
//!
//! // Create a baseline policy
//! let policy = create_policy("baseline");
//!
//! // Use the policy to drive a round
//! let mut deck = Deck::new(DeckConfig::default(), Some(42));
//! let hand = Hand::deal(&mut deck, 21).expect("deal");
//!
//! let action = policy.choose_action(&hand, &deck);
//! println!("Policy chose action: {:?}", action);
//! ```
//!
//! ## Policy Types
//!
//! Currently supported policy types:
//! - `"baseline"` - Simple threshold policy for testing and benchmarking

use blackjack_engine::deck::Deck;
use blackjack_engine::hand::{Hand, HandAction};

pub mod baseline;

/// Trait defining the interface for automated blackjack players.
/// Implementors must provide methods for decision-making and identification.
///
/// # Required Methods
///
/// - [`choose_action`](PlayerPolicy::choose_action) - Pick the next action for a hand
/// - [`bet_size`](PlayerPolicy::bet_size) - Size the stake before a round starts
/// - [`name`](PlayerPolicy::name) - Return the policy's identifier/name
///
/// # Example Implementation
///
/// ```rust
/// use blackjack_ai::PlayerPolicy;
/// use blackjack_engine::deck::Deck;
/// use blackjack_engine::hand::{Hand, HandAction, HandStatus};
///
/// struct Timid;
///
/// impl PlayerPolicy for Timid {
///     fn choose_action(&self, hand: &Hand, _deck: &Deck) -> HandAction {
///         match hand.status() {
///             HandStatus::NotBetted => HandAction::PlaceBet,
///             HandStatus::InPlay => HandAction::Stick,
///             HandStatus::Finished => HandAction::NewHand,
///             _ => HandAction::CollectWinnings,
///         }
///     }
///
///     fn bet_size(&self, _deck: &Deck, base_bet: u32, balance: u32) -> u32 {
///         base_bet.min(balance)
///     }
///
///     fn name(&self) -> &str {
///         "Timid"
///     }
/// }
/// ```
pub trait PlayerPolicy: Send + Sync {
    /// Pick the next action for the given hand.
    ///
    /// # Arguments
    ///
    /// * `hand` - The hand awaiting a decision
    /// * `deck` - The shoe the hand draws from, for composition-aware play
    ///
    /// # Returns
    ///
    /// A `HandAction` that is legal for the hand's current status
    fn choose_action(&self, hand: &Hand, deck: &Deck) -> HandAction;

    /// Size the stake for the next round.
    ///
    /// # Arguments
    ///
    /// * `deck` - The shoe, for count-aware sizing
    /// * `base_bet` - The table's base stake
    /// * `balance` - The bankroll available to bet from
    ///
    /// # Returns
    ///
    /// The chosen stake, never exceeding `balance`
    fn bet_size(&self, deck: &Deck, base_bet: u32, balance: u32) -> u32;

    /// Return the name/identifier of this policy implementation.
    fn name(&self) -> &str;
}

/// Factory function to create policies by type string.
///
/// # Arguments
///
/// * `policy_type` - String identifier for the policy (e.g., "baseline")
///
/// # Returns
///
/// A boxed trait object implementing `PlayerPolicy`
///
/// # Supported Policy Types
///
/// - `"baseline"` - Simple threshold policy for testing
///
/// # Example
///
/// ```rust
/// use blackjack_ai::create_policy;
///
/// let policy = create_policy("baseline");
/// assert_eq!(policy.name(), "BaselinePolicy");
/// ```
///
/// # Panics
///
/// Panics if an unknown policy type is requested. Currently only "baseline"
/// is supported.
pub fn create_policy(policy_type: &str) -> Box<dyn PlayerPolicy> {
    match policy_type {
        "baseline" => Box::new(baseline::BaselinePolicy::new()),
        _ => panic!("Unknown policy type: {}", policy_type),
    }
}
