use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit};
use crate::deck::Deck;
use crate::errors::HandError;

/// Status of a hand in terms of the last action taken on it. A hand never
/// moves back to an earlier status; it is replaced when a new round begins.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum HandStatus {
    /// Dealt, no bet placed yet
    NotBetted,
    /// Bet placed, may still draw
    InPlay,
    /// Forfeited for half the bet
    Surrendered,
    /// Voluntarily stopped drawing
    Stuck,
    /// Minimum value exceeded the limit
    Bust,
    /// Best value hit the limit on the initial two cards
    Blackjack,
    /// Winnings collected; terminal
    Finished,
}

/// Category of a legal next action, used by orchestrators to decide what
/// input (if any) to gather before dispatching.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum ActionKind {
    /// Takes a chip amount
    Betting,
    /// Takes no arguments, draws or stops
    Playing,
    /// Resolves the round against the dealer
    Winnings,
    /// Starts a fresh hand off the same deck and limit
    Finished,
}

/// A legal next action on a hand, as data. Dispatching back to the matching
/// [`Hand`] method is the orchestrator's job; no state-machine logic lives
/// here.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum HandAction {
    PlaceBet,
    Abstain,
    Hit,
    Stick,
    Surrender,
    Double,
    CollectWinnings,
    NewHand,
}

impl HandAction {
    pub fn kind(self) -> ActionKind {
        match self {
            HandAction::PlaceBet | HandAction::Double => ActionKind::Betting,
            HandAction::Hit | HandAction::Stick | HandAction::Surrender => ActionKind::Playing,
            HandAction::Abstain | HandAction::CollectWinnings => ActionKind::Winnings,
            HandAction::NewHand => ActionKind::Finished,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HandAction::PlaceBet => "Place Bet",
            HandAction::Abstain => "Abstain From Betting",
            HandAction::Hit => "Hit",
            HandAction::Stick => "Stick",
            HandAction::Surrender => "Surrender",
            HandAction::Double => "Double",
            HandAction::CollectWinnings => "Collect Winnings",
            HandAction::NewHand => "Create New Hand",
        }
    }
}

/// One round's hand: the drawn cards, the running minimum value (aces low),
/// the optional-ten tally, the bet, and the status machine driving the legal
/// transitions.
#[derive(Debug, Clone)]
pub struct Hand {
    cards: Vec<Card>,
    bet: u32,
    status: HandStatus,
    min_value: u32,
    value_limit: u32,
    optional_tens: u32,
}

impl Hand {
    /// Deal a fresh hand of exactly two random cards from the deck.
    pub fn deal(deck: &mut Deck, value_limit: u32) -> Result<Self, HandError> {
        let mut hand = Self::empty(value_limit);
        hand.draw_from(deck, None)?;
        hand.draw_from(deck, None)?;
        Ok(hand)
    }

    /// Deal a hand with both cards forced to specific suit/rank pairs, for
    /// deterministic setups and tests.
    pub fn deal_forced(
        deck: &mut Deck,
        value_limit: u32,
        first: (Suit, Rank),
        second: (Suit, Rank),
    ) -> Result<Self, HandError> {
        let mut hand = Self::empty(value_limit);
        hand.draw_from(deck, Some(first))?;
        hand.draw_from(deck, Some(second))?;
        Ok(hand)
    }

    fn empty(value_limit: u32) -> Self {
        Self {
            cards: Vec::with_capacity(2),
            bet: 0,
            status: HandStatus::NotBetted,
            min_value: 0,
            value_limit,
            optional_tens: 0,
        }
    }

    /// Shared draw path for construction, hit, and double. The bust check
    /// runs on every draw, independent of any betting-state gating.
    fn draw_from(&mut self, deck: &mut Deck, forced: Option<(Suit, Rank)>) -> Result<(), HandError> {
        let card = match forced {
            Some((suit, rank)) => deck.draw_specific(suit, rank)?,
            None => deck.draw_card()?,
        };
        self.cards.push(card);
        self.min_value += card.value();
        if card.optional_ten() {
            self.optional_tens += 1;
        }
        if self.min_value > self.value_limit {
            self.status = HandStatus::Bust;
        }
        Ok(())
    }

    pub fn status(&self) -> HandStatus {
        self.status
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn bet(&self) -> u32 {
        self.bet
    }

    pub fn value_limit(&self) -> u32 {
        self.value_limit
    }

    /// Value of the hand with every ace counted low.
    pub fn min_value(&self) -> u32 {
        self.min_value
    }

    /// Highest value the hand can take without exceeding the limit (if
    /// possible): each held ace may be promoted from 1 to 11 (+10), so
    /// promote as many as fit in the remaining headroom, capped by how many
    /// are held.
    pub fn best_value(&self) -> u32 {
        let promotions_that_fit = self.value_limit.saturating_sub(self.min_value) / 10;
        self.min_value + self.optional_tens.min(promotions_that_fit) * 10
    }

    /// Record the bet and enter play; a two-card hand whose best value
    /// already sits on the limit goes straight to blackjack.
    ///
    /// # Errors
    ///
    /// [`HandError::AlreadyBetted`] outside `NotBetted`.
    pub fn place_bet(&mut self, amount: u32) -> Result<u32, HandError> {
        if self.status != HandStatus::NotBetted {
            return Err(HandError::AlreadyBetted);
        }
        self.bet = amount;
        self.status = if self.best_value() == self.value_limit {
            HandStatus::Blackjack
        } else {
            HandStatus::InPlay
        };
        Ok(amount)
    }

    /// Draw one card; may bust the hand.
    pub fn hit(&mut self, deck: &mut Deck) -> Result<(), HandError> {
        if self.status != HandStatus::InPlay {
            return Err(HandError::NotInPlay);
        }
        self.draw_from(deck, None)
    }

    /// Stop drawing so winnings can be computed. Sticking a blackjack hand is
    /// a no-op rather than an error: the round already cannot continue.
    pub fn stick(&mut self) -> Result<(), HandError> {
        match self.status {
            HandStatus::InPlay => {
                self.status = HandStatus::Stuck;
                Ok(())
            }
            HandStatus::Blackjack => Ok(()),
            _ => Err(HandError::NotInPlay),
        }
    }

    /// Forfeit the hand for half the original bet back.
    pub fn surrender(&mut self) -> Result<(), HandError> {
        if self.status != HandStatus::InPlay {
            return Err(HandError::NotInPlay);
        }
        self.status = HandStatus::Surrendered;
        Ok(())
    }

    /// Draw exactly one more card and stick, raising the bet by up to its
    /// original amount. Returns the extra amount actually charged,
    /// `min(extra ?? bet, bet)`.
    pub fn double(&mut self, deck: &mut Deck, extra: Option<u32>) -> Result<u32, HandError> {
        if self.status != HandStatus::InPlay {
            return Err(HandError::NotInPlay);
        }
        let extra = extra.unwrap_or(self.bet).min(self.bet);
        self.bet += extra;
        self.hit(deck)?;
        match self.stick() {
            Ok(()) => {}
            // the hit above may have busted this hand; that is not the
            // caller's contract violation
            Err(HandError::NotInPlay) => {}
            Err(e) => return Err(e),
        }
        Ok(extra)
    }

    /// Compute the amount to credit back to the owner's balance (the original
    /// bet is assumed already debited) and finish the hand. One-shot: only
    /// the first call can succeed.
    ///
    /// Payout by status at call time: never betted and bust pay 0, surrender
    /// pays half the bet back, a stuck hand compares best values against the
    /// dealer (dealer bust or a win pays 2x, a push returns the stake),
    /// blackjack pushes against a dealer blackjack and pays 5/2 otherwise.
    ///
    /// # Errors
    ///
    /// [`HandError::RoundNotFinished`] while in play,
    /// [`HandError::WinningsAlreadyCollected`] once finished.
    pub fn get_winnings(
        &mut self,
        dealer_value: u32,
        dealer_blackjack: bool,
    ) -> Result<u32, HandError> {
        match self.status {
            HandStatus::NotBetted => {
                self.status = HandStatus::Finished;
                Ok(0)
            }
            HandStatus::InPlay => Err(HandError::RoundNotFinished),
            HandStatus::Finished => Err(HandError::WinningsAlreadyCollected),
            HandStatus::Bust => {
                self.status = HandStatus::Finished;
                Ok(0)
            }
            HandStatus::Surrendered => {
                self.status = HandStatus::Finished;
                Ok(self.bet / 2)
            }
            HandStatus::Stuck => {
                self.status = HandStatus::Finished;
                if dealer_value > self.value_limit {
                    Ok(self.bet * 2)
                } else if dealer_blackjack {
                    Ok(0)
                } else {
                    match self.best_value().cmp(&dealer_value) {
                        std::cmp::Ordering::Greater => Ok(self.bet * 2),
                        std::cmp::Ordering::Less => Ok(0),
                        std::cmp::Ordering::Equal => Ok(self.bet),
                    }
                }
            }
            HandStatus::Blackjack => {
                self.status = HandStatus::Finished;
                if dealer_blackjack {
                    Ok(self.bet)
                } else {
                    Ok(self.bet * 5 / 2)
                }
            }
        }
    }

    /// Decline to bet on this hand, collecting the zero winnings of the
    /// never-betted state. Bound form of `get_winnings(limit, true)`.
    pub fn abstain(&mut self) -> Result<u32, HandError> {
        let limit = self.value_limit;
        self.get_winnings(limit, true)
    }

    /// Legal next actions for the current status, for driving a UI or
    /// orchestrator. Pure enumeration; all transitions stay in the methods
    /// above.
    pub fn available_actions(&self) -> &'static [HandAction] {
        match self.status {
            HandStatus::NotBetted => &[HandAction::PlaceBet, HandAction::Abstain],
            HandStatus::InPlay => &[
                HandAction::Hit,
                HandAction::Stick,
                HandAction::Surrender,
                HandAction::Double,
            ],
            HandStatus::Finished => &[HandAction::NewHand],
            // bust, stuck, surrendered, blackjack all wait on settlement
            _ => &[HandAction::CollectWinnings],
        }
    }
}
