use blackjack_engine::cards::{Rank, Suit};
use blackjack_engine::deck::{Deck, DeckConfig};

const EPS: f64 = 1e-9;

#[test]
fn constant_one_weight_counts_the_remaining_cards() {
    let mut deck = Deck::new(DeckConfig::default(), Some(11));
    for _ in 0..17 {
        deck.draw_card().unwrap();
    }
    let sum = deck.weighted_sum_by(|_| 1.0, false);
    assert!((sum - f64::from(deck.cards_remaining())).abs() < EPS);
}

#[test]
fn fresh_deck_expectation() {
    let deck = Deck::new(DeckConfig::default(), Some(1));
    // values 1..=9 once each plus four denominations worth 10
    let expected = (1 + 2 + 3 + 4 + 5 + 6 + 7 + 8 + 9 + 10 * 4) as f64 / 13.0;
    assert!((deck.expectation() - expected).abs() < EPS);
}

#[test]
fn fresh_deck_hi_low_count_is_zero() {
    let deck = Deck::new(DeckConfig::default(), Some(1));
    assert_eq!(deck.hi_low_count(), 0);
}

#[test]
fn hi_low_count_tracks_a_drawn_sequence() {
    let mut deck = Deck::new(DeckConfig::default(), Some(1));
    let sequence = [
        (Suit::Hearts, Rank::Two, 1),
        (Suit::Clubs, Rank::Three, 2),
        (Suit::Clubs, Rank::Ace, 1),
        (Suit::Hearts, Rank::Nine, 1),
        (Suit::Clubs, Rank::Ten, 0),
        (Suit::Clubs, Rank::Jack, -1),
        (Suit::Diamonds, Rank::Eight, -1),
        (Suit::Diamonds, Rank::King, -2),
        (Suit::Spades, Rank::King, -3),
    ];
    for (suit, rank, count) in sequence {
        deck.draw_specific(suit, rank).expect("card available");
        assert_eq!(
            deck.hi_low_count(),
            count,
            "count after drawing {:?} of {:?}",
            rank,
            suit
        );
    }
}

#[test]
fn probability_of_low_cards_on_a_fresh_deck() {
    let deck = Deck::new(DeckConfig::default(), Some(1));
    for v in 1..=9u32 {
        let expected = f64::from(v) * 4.0 / 52.0;
        let p = deck.probability_less_or_equal(v);
        assert!(
            (p - expected).abs() < EPS,
            "P(value <= {}) should be {}, got {}",
            v,
            expected,
            p
        );
    }
    assert!((deck.probability_less_or_equal(10) - 1.0).abs() < EPS);
}

#[test]
fn probability_renormalizes_as_aces_leave_the_deck() {
    let mut deck = Deck::new(DeckConfig::default(), Some(1));
    deck.draw_specific(Suit::Spades, Rank::Ace).unwrap();
    assert!((deck.probability_less_or_equal(1) - 3.0 / 51.0).abs() < EPS);
    deck.draw_specific(Suit::Hearts, Rank::Ace).unwrap();
    assert!((deck.probability_less_or_equal(1) - 2.0 / 50.0).abs() < EPS);
}

#[test]
fn aces_high_weighting_maps_aces_through_eleven() {
    let deck = Deck::new(DeckConfig::default(), Some(1));
    // weight only value 11: with aces taken high exactly the 4 aces match
    let high_aces = deck.weighted_sum_by(|v| if v == 11 { 1.0 } else { 0.0 }, true);
    assert!((high_aces - 4.0).abs() < EPS);
    // without the flag nothing has base value 11
    let none = deck.weighted_sum_by(|v| if v == 11 { 1.0 } else { 0.0 }, false);
    assert!(none.abs() < EPS);
}

#[test]
fn weighted_sum_defaults_to_identity_weights() {
    let mut deck = Deck::new(DeckConfig::default(), Some(5));
    assert!((deck.weighted_sum() - 340.0).abs() < EPS, "4 * (1+..+9+40)");
    deck.draw_specific(Suit::Hearts, Rank::King).unwrap();
    assert!((deck.weighted_sum() - 330.0).abs() < EPS);
}

#[test]
fn empty_shoe_analytics_are_zero_not_nan() {
    let config = DeckConfig {
        suits: vec![Suit::Hearts],
        ranks: vec![Rank::Ace],
        packs: 1,
        reset_when_remaining: 0,
    };
    let mut deck = Deck::new(config, Some(1));
    deck.draw_specific(Suit::Hearts, Rank::Ace).unwrap();
    assert_eq!(deck.cards_remaining(), 0);
    assert_eq!(deck.expectation(), 0.0);
    assert_eq!(deck.probability_less_or_equal(10), 0.0);
}
