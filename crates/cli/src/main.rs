// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI, ranks and compares five cards Poker hands.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use clap::{Parser, Subcommand};
use log::error;
use std::process::ExitCode;

mod commands;

#[derive(Debug, Parser)]
#[clap(name = "showdown", version, about)]
struct Cli {
    /// Enable debug logging.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Prints a hand category and tie breakers.
    Rank {
        /// The hand cards, e.g. "AH KH QH JH TH".
        cards: String,
    },
    /// Compares a hand against an opponent hand.
    Compare {
        /// The hand cards.
        hand: String,
        /// The opponent hand cards.
        other: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let res = match &cli.command {
        Command::Rank { cards } => commands::rank(cards),
        Command::Compare { hand, other } => commands::compare(hand, other),
    };

    match res {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
