// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! CLI commands.
use anyhow::{Context, Result};
use showdown_eval::{Hand, Rank, parse_cards};

/// Ranks a hand and returns its category and tie breakers.
pub fn rank(cards: &str) -> Result<String> {
    let hand = parse_hand(cards)?;
    let ranked = hand.ranked().with_context(|| format!("cannot rank '{cards}'"))?;

    Ok(format!(
        "{} {} [{}]",
        ranked,
        ranked.category(),
        join_ranks(ranked.tie_breakers())
    ))
}

/// Compares two hands and returns the outcome for the first hand.
pub fn compare(hand: &str, other: &str) -> Result<String> {
    let (hand, other) = (parse_hand(hand)?, parse_hand(other)?);
    let outcome = hand.compare(&other).context("cannot compare hands")?;

    // Both hands are complete after compare succeeds.
    let (h1, h2) = (hand.ranked()?, other.ranked()?);
    Ok(format!(
        "{outcome}: {h1} {} vs {h2} {}",
        h1.category(),
        h2.category()
    ))
}

fn parse_hand(cards: &str) -> Result<Hand> {
    let cards = parse_cards(cards).with_context(|| format!("invalid cards '{cards}'"))?;
    let hand = Hand::new(cards)?;
    Ok(hand)
}

fn join_ranks(ranks: &[Rank]) -> String {
    ranks
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
