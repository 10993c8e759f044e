//! # Play Command
//!
//! Interactive blackjack rounds against the house.
//!
//! This module provides the `handle_play_command` function for playing rounds
//! at the table. The player enters table commands via stdin; the dealer is
//! resolved automatically once the player's hand settles.
//!
//! ## Features
//!
//! - Interactive input validation with clear error messages
//! - Bankroll tracking across rounds (bets debited, winnings credited)
//! - Graceful quit handling (user can exit with 'q' or 'quit')
//! - Real-time table display (dealer upcard, hand values, balance)

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_card, format_hand};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, TableCommand, parse_table_command};
use blackjack_engine::dealer::Dealer;
use blackjack_engine::deck::{Deck, DeckConfig};
use blackjack_engine::hand::HandStatus;
use blackjack_engine::player::Player;
use std::io::{BufRead, Write};

/// Handle the play command: interactive blackjack rounds
///
/// # Arguments
///
/// * `rounds` - Number of rounds to play (must be >= 1, default: 1)
/// * `seed` - RNG seed for reproducibility (default: config seed, then random)
/// * `bet` - Default stake per round (default: from configuration)
/// * `out` - Output stream for table display
/// * `err` - Error stream for warnings and errors
/// * `stdin` - Input stream for table commands
///
/// # Returns
///
/// * `Ok(())` on successful completion
/// * `Err(CliError)` if rounds < 1, configuration loading fails, or I/O errors occur
pub fn handle_play_command(
    rounds: Option<u32>,
    seed: Option<u64>,
    bet: Option<u32>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let rounds = rounds.unwrap_or(1);
    execute_play_command(rounds, seed, bet, stdin, out, err)
}

/// Execute the play command with specified parameters (module-private helper)
///
/// This is the core implementation that handles the round loop, player
/// interaction and dealer resolution.
fn execute_play_command(
    rounds: u32,
    seed: Option<u64>,
    bet: Option<u32>,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if rounds == 0 {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }

    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let base_bet = bet.unwrap_or(cfg.default_bet);

    let mut deck = Deck::new(
        DeckConfig {
            packs: cfg.packs,
            reset_when_remaining: cfg.reset_when_remaining,
            ..DeckConfig::default()
        },
        Some(seed),
    );
    let mut player = Player::new(&mut deck, cfg.starting_balance, cfg.value_limit, base_bet)?;
    let mut dealer = Dealer::new(&mut deck, cfg.value_limit, cfg.dealer_stop)?;

    writeln!(out, "play: rounds={} seed={}", rounds, seed)?;
    writeln!(out, "Balance: {}", player.balance())?;

    let mut played = 0u32;
    let mut quit_requested = false;

    for i in 1..=rounds {
        if quit_requested {
            break;
        }
        if i > 1 {
            player.replace_hand(&mut deck)?;
            dealer.reset_hand(&mut deck)?;
        }

        writeln!(out, "Round {}", i)?;
        let upcard = dealer.hand().cards()[0];
        writeln!(out, "Dealer shows: {}", format_card(&upcard))?;
        writeln!(out, "Your hand: {}", format_hand(player.hand()))?;

        loop {
            match player.hand().status() {
                HandStatus::NotBetted => {
                    write!(out, "Enter command (bet [n]/abstain/q): ")?;
                    out.flush()?;
                    match read_stdin_line(stdin) {
                        None => {
                            quit_requested = true;
                            break;
                        }
                        Some(input) => match parse_table_command(&input) {
                            ParseResult::Quit => {
                                quit_requested = true;
                                break;
                            }
                            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
                            ParseResult::Command(TableCommand::Abstain) => {
                                player.hand_mut().abstain()?;
                                writeln!(out, "Round sat out.")?;
                            }
                            ParseResult::Command(TableCommand::Bet(amount)) => {
                                let stake = amount.unwrap_or(base_bet);
                                if let Err(msg) = player.debit(stake) {
                                    ui::write_error(err, &msg)?;
                                    continue;
                                }
                                player.hand_mut().place_bet(stake)?;
                                writeln!(out, "Bet: {}", stake)?;
                                if player.hand().status() == HandStatus::Blackjack {
                                    writeln!(out, "Blackjack!")?;
                                }
                            }
                            ParseResult::Command(_) => {
                                ui::write_error(err, "Place a bet before playing the hand")?
                            }
                        },
                    }
                }
                HandStatus::InPlay => {
                    write!(out, "Enter command (hit/stick/double [n]/surrender/q): ")?;
                    out.flush()?;
                    match read_stdin_line(stdin) {
                        None => {
                            quit_requested = true;
                            break;
                        }
                        Some(input) => match parse_table_command(&input) {
                            ParseResult::Quit => {
                                quit_requested = true;
                                break;
                            }
                            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
                            ParseResult::Command(TableCommand::Hit) => {
                                player.hand_mut().hit(&mut deck)?;
                                writeln!(out, "Your hand: {}", format_hand(player.hand()))?;
                                if player.hand().status() == HandStatus::Bust {
                                    writeln!(out, "Bust.")?;
                                }
                            }
                            ParseResult::Command(TableCommand::Stick) => {
                                player.hand_mut().stick()?;
                            }
                            ParseResult::Command(TableCommand::Surrender) => {
                                player.hand_mut().surrender()?;
                                writeln!(out, "Surrendered.")?;
                            }
                            ParseResult::Command(TableCommand::Double(amount)) => {
                                // never stake more than the original bet or the bankroll
                                let cap = amount
                                    .unwrap_or(player.hand().bet())
                                    .min(player.hand().bet())
                                    .min(player.balance());
                                let extra = player.hand_mut().double(&mut deck, Some(cap))?;
                                player.debit(extra)?;
                                writeln!(out, "Bet raised to {}", player.hand().bet())?;
                                writeln!(out, "Your hand: {}", format_hand(player.hand()))?;
                                if player.hand().status() == HandStatus::Bust {
                                    writeln!(out, "Bust.")?;
                                }
                            }
                            ParseResult::Command(_) => {
                                ui::write_error(err, "The bet is already placed")?
                            }
                        },
                    }
                }
                // hand settled: resolve the dealer, pay out and close the round
                _ => {
                    if player.hand().status() != HandStatus::Finished {
                        dealer.resolve_hand(&mut deck)?;
                        writeln!(out, "Dealer hand: {}", format_hand(dealer.hand()))?;
                        let winnings = player
                            .hand_mut()
                            .get_winnings(dealer.best_value(), dealer.has_blackjack())?;
                        player.credit(winnings);
                        writeln!(out, "Winnings: {}", winnings)?;
                    }
                    writeln!(out, "Balance: {}", player.balance())?;
                    break;
                }
            }
        }

        if quit_requested {
            break;
        }
        played += 1;
    }

    writeln!(out, "Session rounds={}", rounds)?;
    writeln!(out, "Rounds played: {}", played)?;
    Ok(())
}
