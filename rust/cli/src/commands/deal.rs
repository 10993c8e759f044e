//! Deal command handler for drawing cards and inspecting the shoe.
//!
//! This module provides the `deal` command which draws a number of cards from
//! a fresh shoe and prints the analytics of what remains. The command supports
//! optional seeding for deterministic draws.

use crate::error::CliError;
use crate::formatters::format_card;
use blackjack_engine::deck::{Deck, DeckConfig};
use std::io::Write;

/// Handle the deal command.
///
/// Draws `count` cards from a fresh shoe of `packs` packs and displays the
/// drawn cards followed by the remaining shoe's analytics: card count,
/// expected value of the next draw, hi-lo running count and the chance that
/// the next card is a nine or lower.
///
/// # Arguments
///
/// * `count` - Number of cards to draw (default: 5)
/// * `seed` - Optional RNG seed for deterministic draws
/// * `packs` - Number of 52-card packs in the shoe (default: 1)
/// * `out` - Output stream for command results
///
/// # Returns
///
/// Returns `Ok(())` on success, or `CliError` on draw or I/O errors.
pub fn handle_deal_command(
    count: Option<u32>,
    seed: Option<u64>,
    packs: Option<u32>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let count = count.unwrap_or(5);
    let packs = packs.unwrap_or(1).max(1);
    let base_seed = seed.unwrap_or_else(rand::random);

    let mut deck = Deck::new(
        DeckConfig {
            packs,
            ..DeckConfig::default()
        },
        Some(base_seed),
    );

    writeln!(
        out,
        "deal: count={} seed={} packs={}",
        count, base_seed, packs
    )?;

    let mut drawn = Vec::with_capacity(count as usize);
    for _ in 0..count {
        drawn.push(format_card(&deck.draw_card()?));
    }
    writeln!(out, "Drawn: {}", drawn.join(" "))?;

    writeln!(out, "Remaining: {}", deck.cards_remaining())?;
    writeln!(out, "Expected value: {:.3}", deck.expectation())?;
    writeln!(out, "Hi-lo count: {:+}", deck.hi_low_count())?;
    writeln!(
        out,
        "P(next <= 9): {:.3}",
        deck.probability_less_or_equal(9)
    )?;
    Ok(())
}
