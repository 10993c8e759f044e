//! Output formatting for cards, hands and table state.
//!
//! Commands write their own prose; this module only turns engine values into
//! short display strings so the formats stay consistent across commands.

use blackjack_engine::cards::Card;
use blackjack_engine::hand::Hand;

/// Format a single card as rank-then-suit, e.g. "A♠" or "10♦".
pub fn format_card(card: &Card) -> String {
    card.label()
}

/// Format a sequence of cards separated by spaces.
pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a hand with its best value, e.g. "A♥ 6♥ (17)".
pub fn format_hand(hand: &Hand) -> String {
    format!("{} ({})", format_cards(hand.cards()), hand.best_value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackjack_engine::cards::{Rank, Suit};
    use blackjack_engine::deck::{Deck, DeckConfig};

    #[test]
    fn test_format_card_rank_then_suit() {
        let ace = Card {
            suit: Suit::Spades,
            rank: Rank::Ace,
        };
        assert_eq!(format_card(&ace), "A♠");

        let ten = Card {
            suit: Suit::Diamonds,
            rank: Rank::Ten,
        };
        assert_eq!(format_card(&ten), "10♦");
    }

    #[test]
    fn test_format_cards_space_separated() {
        let cards = [
            Card {
                suit: Suit::Hearts,
                rank: Rank::King,
            },
            Card {
                suit: Suit::Clubs,
                rank: Rank::Two,
            },
        ];
        assert_eq!(format_cards(&cards), "K♥ 2♣");
    }

    #[test]
    fn test_format_hand_shows_best_value() {
        let mut deck = Deck::new(DeckConfig::default(), Some(1));
        let hand = Hand::deal_forced(
            &mut deck,
            21,
            (Suit::Hearts, Rank::Ace),
            (Suit::Hearts, Rank::Six),
        )
        .expect("forced deal");
        assert_eq!(format_hand(&hand), "A♥ 6♥ (17)");
    }
}
