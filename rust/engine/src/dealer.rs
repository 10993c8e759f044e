use crate::deck::Deck;
use crate::errors::HandError;
use crate::hand::{Hand, HandStatus};

/// Wrapper around the dealer's hand and its fixed drawing policy. The hand
/// carries a zero bet so it starts in play (or on blackjack) immediately.
#[derive(Debug)]
pub struct Dealer {
    hand: Hand,
    value_stop: u32,
    value_limit: u32,
}

impl Dealer {
    /// Deal the dealer in: a fresh hand against `deck` with a zero bet placed.
    /// `value_stop` is the total at which the dealer stops hitting (17 in
    /// standard play); a soft stop total is still hit.
    pub fn new(deck: &mut Deck, value_limit: u32, value_stop: u32) -> Result<Self, HandError> {
        let mut hand = Hand::deal(deck, value_limit)?;
        hand.place_bet(0)?;
        Ok(Self {
            hand,
            value_stop,
            value_limit,
        })
    }

    /// Replace the dealer's hand for a new round.
    pub fn reset_hand(&mut self, deck: &mut Deck) -> Result<(), HandError> {
        let mut hand = Hand::deal(deck, self.value_limit)?;
        hand.place_bet(0)?;
        self.hand = hand;
        Ok(())
    }

    /// Play out the dealer's hand: hit while the best value is below the stop
    /// value, or exactly at it while the hand is still soft (an unpromoted
    /// ace remains); otherwise stick. Ends Stuck, Bust, or Blackjack.
    pub fn resolve_hand(&mut self, deck: &mut Deck) -> Result<(), HandError> {
        while self.hand.status() == HandStatus::InPlay {
            let best = self.hand.best_value();
            if best < self.value_stop {
                self.hand.hit(deck)?;
            } else if best == self.value_stop && self.hand.min_value() < self.value_stop {
                self.hand.hit(deck)?;
            } else {
                self.hand.stick()?;
            }
        }
        Ok(())
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn best_value(&self) -> u32 {
        self.hand.best_value()
    }

    /// A zero-bet hand can still reach blackjack status on the initial two
    /// cards, which is what settlement needs to know.
    pub fn has_blackjack(&self) -> bool {
        self.hand.status() == HandStatus::Blackjack
    }

    pub fn value_stop(&self) -> u32 {
        self.value_stop
    }
}
