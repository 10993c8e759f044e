//! # blackjack-engine: Blackjack Rules Engine Core
//!
//! The rules engine for a blackjack simulator: a count-based card shoe that
//! supports uniform and targeted draws plus probability/count analytics, and
//! a per-round hand state machine implementing bet placement, hit/stand/
//! double/surrender, bust/blackjack detection, and payout computation.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card)
//! - [`deck`] - Multi-pack shoe with weighted random sampling and analytics
//! - [`hand`] - Betting/playing state machine and payout logic
//! - [`dealer`] - Dealer wrapper with the fixed house drawing policy
//! - [`player`] - Passive balance/bet/hand holder
//! - [`logger`] - Round history records and JSONL serialization
//! - [`errors`] - Error types for deck and hand operations
//!
//! ## Quick Start
//!
//! ```rust
//! use blackjack_engine::deck::{Deck, DeckConfig};
//! use blackjack_engine::hand::Hand;
//!
//! let mut deck = Deck::new(DeckConfig::default(), Some(42));
//! let mut hand = Hand::deal(&mut deck, 21).expect("fresh deck holds two cards");
//! hand.place_bet(10).expect("fresh hands accept one bet");
//! assert!(hand.best_value() <= 21);
//! ```
//!
//! ## Deterministic Draws
//!
//! All draws are reproducible using seeded RNG:
//!
//! ```rust
//! use blackjack_engine::deck::{Deck, DeckConfig};
//!
//! let mut d1 = Deck::new(DeckConfig::default(), Some(7));
//! let mut d2 = Deck::new(DeckConfig::default(), Some(7));
//! assert_eq!(d1.draw_card().unwrap(), d2.draw_card().unwrap());
//! ```
//!
//! ## Concurrency
//!
//! The engine is single-threaded and synchronous. A `Deck` is shared by the
//! hands of a round strictly sequentially; embedding in a multi-threaded
//! host requires external mutual exclusion per instance.

pub mod cards;
pub mod dealer;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod player;
