use thiserror::Error;

use crate::cards::{Rank, Suit};

/// Errors raised by deck draws. All of these are caller-contract violations
/// rather than recoverable runtime conditions; `InternalInconsistency` in
/// particular indicates corrupted inventory bookkeeping and is treated as
/// fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("denomination {0:?} is not in the deck")]
    DenominationNotFound(Rank),
    #[error("suit {0:?} is not in the deck")]
    SuitNotFound(Suit),
    #[error("no {rank:?} of {suit:?} left in the deck")]
    CardExhausted { suit: Suit, rank: Rank },
    #[error("uniform draw left {0} positions unresolved against the inventory")]
    InternalInconsistency(u32),
}

/// Errors raised by hand transitions. The orchestrating UI must only offer
/// actions present in [`crate::hand::Hand::available_actions`]; any of these
/// reaching it indicates a logic bug in the orchestrator, not bad user input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HandError {
    #[error("a bet has already been placed on this hand")]
    AlreadyBetted,
    #[error("hand is not in play")]
    NotInPlay,
    #[error("the round must finish before winnings can be claimed")]
    RoundNotFinished,
    #[error("winnings already collected")]
    WinningsAlreadyCollected,
    #[error(transparent)]
    Deck(#[from] DeckError),
}
