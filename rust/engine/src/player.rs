use crate::deck::Deck;
use crate::errors::HandError;
use crate::hand::Hand;

/// A player at the table: a hand plus the chip balance and the bet they will
/// place each round. Purely a holder; all round logic lives on [`Hand`].
#[derive(Debug)]
pub struct Player {
    hand: Hand,
    balance: u32,
    current_bet: u32,
    value_limit: u32,
}

impl Player {
    pub fn new(
        deck: &mut Deck,
        starting_balance: u32,
        value_limit: u32,
        current_bet: u32,
    ) -> Result<Self, HandError> {
        Ok(Self {
            hand: Hand::deal(deck, value_limit)?,
            balance: starting_balance,
            current_bet,
            value_limit,
        })
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub fn balance(&self) -> u32 {
        self.balance
    }

    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }

    pub fn set_current_bet(&mut self, bet: u32) {
        self.current_bet = bet;
    }

    pub fn value_limit(&self) -> u32 {
        self.value_limit
    }

    pub fn credit(&mut self, amount: u32) {
        self.balance = self.balance.saturating_add(amount);
    }

    pub fn debit(&mut self, amount: u32) -> Result<(), String> {
        if amount > self.balance {
            return Err("Insufficient balance".to_string());
        }
        self.balance -= amount;
        Ok(())
    }

    /// Start a new round with a fresh hand off the same deck and limit.
    pub fn replace_hand(&mut self, deck: &mut Deck) -> Result<(), HandError> {
        self.hand = Hand::deal(deck, self.value_limit)?;
        Ok(())
    }
}
