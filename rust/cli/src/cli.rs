//! Command-line argument definitions for the blackjack CLI.
//!
//! This module defines the clap parser types shared by the binary and the
//! integration tests. Keeping the types in their own module lets tests parse
//! argument vectors without going through `run`.

use clap::{Parser, Subcommand};

/// Top-level argument parser for the `blackjack` binary.
#[derive(Debug, Parser)]
#[command(name = "blackjack", version, about = "Blackjack table simulator")]
pub struct BlackjackCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

/// All subcommands understood by the CLI.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play rounds interactively at the table
    Play {
        /// Number of rounds to play (default: 1)
        #[arg(long)]
        rounds: Option<u32>,
        /// RNG seed for a reproducible shoe
        #[arg(long)]
        seed: Option<u64>,
        /// Default stake per round, overriding the configuration
        #[arg(long)]
        bet: Option<u32>,
    },
    /// Run automated rounds with a policy and record them
    Sim {
        /// Number of rounds to simulate (default: 100)
        #[arg(long)]
        rounds: Option<u64>,
        /// RNG seed for a reproducible shoe
        #[arg(long)]
        seed: Option<u64>,
        /// Path to save round records (JSONL format)
        #[arg(long)]
        output: Option<String>,
        /// Policy driving the automated player (default: baseline)
        #[arg(long)]
        policy: Option<String>,
    },
    /// Draw cards from a fresh shoe and show its analytics
    Deal {
        /// Number of cards to draw (default: 5)
        #[arg(long)]
        count: Option<u32>,
        /// RNG seed for a reproducible shoe
        #[arg(long)]
        seed: Option<u64>,
        /// Number of 52-card packs in the shoe (default: 1)
        #[arg(long)]
        packs: Option<u32>,
    },
    /// Display current configuration settings
    Cfg,
}
