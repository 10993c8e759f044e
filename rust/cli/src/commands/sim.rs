//! Simulation command handler for automated round generation.
//!
//! This module runs rounds of blackjack with an automated policy and
//! optionally records each round as a JSONL line via the engine's round
//! logger. A summary of outcomes and the final bankroll is printed at the
//! end of the run.

use crate::config;
use crate::error::CliError;
use crate::io_utils::ensure_parent_dir;
use crate::ui;
use blackjack_ai::{PlayerPolicy, create_policy};
use blackjack_engine::dealer::Dealer;
use blackjack_engine::deck::{Deck, DeckConfig};
use blackjack_engine::hand::{HandAction, HandStatus};
use blackjack_engine::logger::{ActionRecord, Actor, RoundLogger, RoundRecord};
use blackjack_engine::player::Player;
use std::io::Write;

/// Handle the sim command: run automated blackjack rounds.
///
/// Plays `rounds` rounds with the named policy against the house and prints
/// a summary. When `output` is given, every played round is appended to the
/// file in JSONL format.
///
/// # Arguments
///
/// * `rounds` - Number of rounds to simulate (must be >= 1)
/// * `seed` - RNG seed for a reproducible shoe (default: config seed, then random)
/// * `output` - Optional path for JSONL round records
/// * `policy` - Policy name (default: "baseline")
/// * `out` - Output stream for normal messages
/// * `err` - Output stream for error messages
///
/// # Returns
///
/// `Ok(())` on success, or `CliError` on failure
pub fn handle_sim_command(
    rounds: u64,
    seed: Option<u64>,
    output: Option<String>,
    policy: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if rounds == 0 {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }

    let policy_name = policy.unwrap_or_else(|| "baseline".to_string());
    if policy_name != "baseline" {
        ui::write_error(err, &format!("unknown policy '{}'", policy_name))?;
        return Err(CliError::InvalidInput(format!(
            "unknown policy '{}'",
            policy_name
        )));
    }
    let policy = create_policy(&policy_name);

    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let base_seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let mut logger = match output {
        Some(path) => {
            let path = std::path::PathBuf::from(path);
            if let Err(e) = ensure_parent_dir(&path) {
                ui::write_error(err, &e)?;
                return Err(CliError::Io(std::io::Error::other(e)));
            }
            Some(RoundLogger::create(&path)?)
        }
        None => None,
    };

    let mut deck = Deck::new(
        DeckConfig {
            packs: cfg.packs,
            reset_when_remaining: cfg.reset_when_remaining,
            ..DeckConfig::default()
        },
        Some(base_seed),
    );
    let mut player = Player::new(&mut deck, cfg.starting_balance, cfg.value_limit, cfg.default_bet)?;
    let mut dealer = Dealer::new(&mut deck, cfg.value_limit, cfg.dealer_stop)?;

    writeln!(
        out,
        "sim: rounds={} seed={} policy={}",
        rounds,
        base_seed,
        policy.name()
    )?;

    let mut wins = 0u64;
    let mut losses = 0u64;
    let mut pushes = 0u64;
    let mut abstained = 0u64;

    for i in 0..rounds {
        if i > 0 {
            player.replace_hand(&mut deck)?;
            dealer.reset_hand(&mut deck)?;
        }

        let (bet, winnings, actions) =
            play_one_round(policy.as_ref(), &mut deck, &mut player, &mut dealer, cfg.default_bet)?;

        if bet == 0 {
            abstained += 1;
        } else if winnings > bet {
            wins += 1;
        } else if winnings == bet {
            pushes += 1;
        } else {
            losses += 1;
        }

        if let Some(logger) = logger.as_mut() {
            let record = RoundRecord {
                round_id: logger.next_id(),
                seed: Some(base_seed),
                actions,
                player_cards: player.hand().cards().to_vec(),
                dealer_cards: dealer.hand().cards().to_vec(),
                player_status: player.hand().status(),
                player_value: player.hand().best_value(),
                dealer_value: dealer.best_value(),
                bet,
                winnings,
                ts: None,
                meta: None,
            };
            logger.write(&record)?;
        }
    }

    let net = i64::from(player.balance()) - i64::from(cfg.starting_balance);
    writeln!(
        out,
        "Wins: {} Losses: {} Pushes: {} Abstained: {}",
        wins, losses, pushes, abstained
    )?;
    writeln!(out, "Final balance: {} (net {:+})", player.balance(), net)?;
    Ok(())
}

/// Drive a single round with the policy until the winnings are collected
/// (module-private helper). Returns the stake, the winnings and the action
/// trail for logging.
fn play_one_round(
    policy: &dyn PlayerPolicy,
    deck: &mut Deck,
    player: &mut Player,
    dealer: &mut Dealer,
    base_bet: u32,
) -> Result<(u32, u32, Vec<ActionRecord>), CliError> {
    let mut actions = Vec::new();

    loop {
        let action = policy.choose_action(player.hand(), deck);
        match action {
            HandAction::PlaceBet => {
                let stake = policy.bet_size(deck, base_bet, player.balance());
                if stake == 0 {
                    // bankroll cannot cover any stake: sit the round out
                    player.hand_mut().abstain()?;
                    actions.push(ActionRecord {
                        actor: Actor::Player,
                        action: HandAction::Abstain,
                    });
                    return Ok((0, 0, actions));
                }
                player.debit(stake)?;
                player.hand_mut().place_bet(stake)?;
            }
            HandAction::Hit => {
                player.hand_mut().hit(deck)?;
            }
            HandAction::Stick => {
                player.hand_mut().stick()?;
            }
            HandAction::Surrender => {
                player.hand_mut().surrender()?;
            }
            HandAction::Double => {
                let cap = player.hand().bet().min(player.balance());
                let extra = player.hand_mut().double(deck, Some(cap))?;
                player.debit(extra)?;
            }
            HandAction::CollectWinnings => {
                dealer.resolve_hand(deck)?;
                actions.push(ActionRecord {
                    actor: Actor::Dealer,
                    action: if dealer.hand().status() == HandStatus::Stuck {
                        HandAction::Stick
                    } else {
                        HandAction::CollectWinnings
                    },
                });
                let bet = player.hand().bet();
                let winnings = player
                    .hand_mut()
                    .get_winnings(dealer.best_value(), dealer.has_blackjack())?;
                player.credit(winnings);
                actions.push(ActionRecord {
                    actor: Actor::Player,
                    action: HandAction::CollectWinnings,
                });
                return Ok((bet, winnings, actions));
            }
            HandAction::Abstain | HandAction::NewHand => {
                // the policy never asks for these mid-round
                return Err(CliError::Engine(format!(
                    "policy returned {:?} during a round",
                    action
                )));
            }
        }
        actions.push(ActionRecord {
            actor: Actor::Player,
            action,
        });
    }
}
