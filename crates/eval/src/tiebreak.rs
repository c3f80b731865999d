// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Tie breakers for hands with the same ranking category.
use crate::{
    Card, HAND_SIZE, HandRank, Rank,
    rank::{WHEEL, classify_sorted, rank_groups},
};

/// Builds the ranks used to compare two hands with the same category.
///
/// The ranks are ordered from the most to the least significant:
///
/// ```text
///   StraightFlush, Straight  [high]  (Five for A-2-3-4-5)
///   FourOfAKind              [quads, kicker]
///   FullHouse                [trips, pair]
///   ThreeOfAKind             [trips, kicker, kicker]
///   TwoPairs                 [high pair, low pair, kicker]
///   Pair                     [pair, kicker, kicker, kicker]
///   Flush, HighCard          [all five ranks descending]
/// ```
///
/// The `rank` must be the category of `cards`, a mismatch is a bug and panics.
///
/// ```
/// # use showdown_eval::*;
/// let cards: [Card; 5] = parse_cards("JH 3C AS JD AC").unwrap().try_into().unwrap();
/// let ranks = tie_breakers(&cards, HandRank::TwoPairs);
/// assert_eq!(ranks, vec![Rank::Ace, Rank::Jack, Rank::Trey]);
/// ```
pub fn tie_breakers(cards: &[Card; HAND_SIZE], rank: HandRank) -> Vec<Rank> {
    let mut cards = *cards;
    cards.sort_by_key(Card::rank);
    assert_eq!(
        classify_sorted(&cards),
        rank,
        "category {rank} doesn't match cards {cards:?}"
    );
    sorted_tie_breakers(&cards, rank)
}

/// Builds the tie breakers for cards sorted by rank and their category.
pub(crate) fn sorted_tie_breakers(cards: &[Card; HAND_SIZE], rank: HandRank) -> Vec<Rank> {
    debug_assert_eq!(
        classify_sorted(cards),
        rank,
        "category {rank} doesn't match cards {cards:?}"
    );

    let ranks = cards.map(|c| c.rank());
    match rank {
        HandRank::StraightFlush | HandRank::Straight => {
            let high = if ranks == WHEEL {
                Rank::Five
            } else {
                ranks[HAND_SIZE - 1]
            };
            vec![high]
        }
        // Groups are sorted by size first, the largest group comes first
        // followed by the smaller ones and by kickers, each by descending rank.
        HandRank::FourOfAKind
        | HandRank::FullHouse
        | HandRank::ThreeOfAKind
        | HandRank::TwoPairs
        | HandRank::Pair => rank_groups(cards).into_iter().map(|(r, _)| r).collect(),
        HandRank::Flush | HandRank::HighCard => ranks.into_iter().rev().collect(),
    }
}
