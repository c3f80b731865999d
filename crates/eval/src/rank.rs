// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand ranking classification.
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Card, HAND_SIZE, HandError, Rank};

/// The A-2-3-4-5 straight ranks sorted by rank, the Ace plays low.
pub(crate) const WHEEL: [Rank; HAND_SIZE] = [
    Rank::Deuce,
    Rank::Trey,
    Rank::Four,
    Rank::Five,
    Rank::Ace,
];

/// The hand ranking category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// No other category applies.
    HighCard = 0,
    /// Two cards of the same rank.
    Pair,
    /// Two different pairs.
    TwoPairs,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five cards of consecutive rank.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight of the same suit.
    StraightFlush,
}

impl HandRank {
    /// Returns all ranking categories from weakest to strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            Pair,
            TwoPairs,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::Pair => "Pair",
            HandRank::TwoPairs => "Two Pairs",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{name}")
    }
}

/// Classifies a five cards hand, the cards can be in any order.
///
/// Returns [HandError::IncompleteHand] if there are not exactly 5 cards.
///
/// ```
/// # use showdown_eval::*;
/// let cards = parse_cards("5H 4D 3S 2C AH").unwrap();
/// assert_eq!(classify(&cards), Ok(HandRank::Straight));
/// assert!(classify(&cards[..4]).is_err());
/// ```
pub fn classify(cards: &[Card]) -> Result<HandRank, HandError> {
    let mut cards: [Card; HAND_SIZE] = cards
        .try_into()
        .map_err(|_| HandError::IncompleteHand(cards.len()))?;
    cards.sort_by_key(Card::rank);
    Ok(classify_sorted(&cards))
}

/// Classifies five cards sorted by rank.
pub(crate) fn classify_sorted(cards: &[Card; HAND_SIZE]) -> HandRank {
    let flush = is_flush(cards);
    let straight = is_straight(cards);
    let groups = rank_groups(cards);
    let largest = groups[0].1;

    // First match wins, a 4+1 split is claimed by quads before the two ranks
    // check so two distinct ranks can only be a full house.
    match (straight && flush, largest, groups.len(), flush, straight) {
        (true, ..) => HandRank::StraightFlush,
        (_, 4, ..) => HandRank::FourOfAKind,
        (_, _, 2, ..) => HandRank::FullHouse,
        (_, _, _, true, _) => HandRank::Flush,
        (_, _, _, _, true) => HandRank::Straight,
        (_, 3, ..) => HandRank::ThreeOfAKind,
        (_, _, 3, ..) => HandRank::TwoPairs,
        (_, _, 4, ..) => HandRank::Pair,
        _ => HandRank::HighCard,
    }
}

/// Checks if all cards have the same suit.
pub(crate) fn is_flush(cards: &[Card; HAND_SIZE]) -> bool {
    let suit = cards[0].suit();
    cards.iter().all(|c| c.suit() == suit)
}

/// Checks if cards sorted by rank are a straight, including the wheel.
pub(crate) fn is_straight(cards: &[Card; HAND_SIZE]) -> bool {
    let ranks = cards.map(|c| c.rank());
    ranks == WHEEL || ranks.windows(2).all(|w| w[0].index() + 1 == w[1].index())
}

/// Groups cards by rank.
///
/// Returns (rank, count) pairs sorted by count and then by rank, both
/// descending, so for two pairs the first entry is the higher pair.
pub(crate) fn rank_groups(cards: &[Card]) -> Vec<(Rank, usize)> {
    let mut counts = AHashMap::<Rank, usize>::with_capacity(cards.len());
    for card in cards {
        *counts.entry(card.rank()).or_default() += 1;
    }

    let mut groups = counts.into_iter().collect::<Vec<_>>();
    groups.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Suit, parse_cards};

    fn sorted(s: &str) -> [Card; HAND_SIZE] {
        let mut cards: [Card; HAND_SIZE] = parse_cards(s).unwrap().try_into().unwrap();
        cards.sort_by_key(Card::rank);
        cards
    }

    fn rank_of(s: &str) -> HandRank {
        classify(&parse_cards(s).unwrap()).unwrap()
    }

    fn all_cards() -> Vec<Card> {
        Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect()
    }

    #[test]
    fn straight_detection() {
        assert!(is_straight(&sorted("AH 2C 3S 4D 5H")));
        assert!(is_straight(&sorted("TC JS QD KH AH")));
        assert!(is_straight(&sorted("2C 3S 4D 5H 6H")));
        assert!(is_straight(&sorted("8C 9S TD JH QH")));
        assert!(is_straight(&sorted("6C 4S 7D 5H 8H")));

        assert!(!is_straight(&sorted("2C 3S 4D 5H 8H")));
        // No wrap around.
        assert!(!is_straight(&sorted("QC KS AD 2H 3H")));
        assert!(!is_straight(&sorted("2C 2S 3D 4H 5H")));
    }

    #[test]
    fn flush_detection() {
        for suit in ["H", "D", "C", "S"] {
            let hand = ["2", "3", "4", "5", "8"]
                .iter()
                .map(|r| format!("{r}{suit}"))
                .collect::<Vec<_>>()
                .join(" ");
            assert!(is_flush(&sorted(&hand)));
        }

        assert!(!is_flush(&sorted("2S 3D 4H 5C 8H")));
    }

    #[test]
    fn groups_order() {
        let groups = rank_groups(&sorted("JH JD AC AS 3H"));
        assert_eq!(groups, vec![(Rank::Ace, 2), (Rank::Jack, 2), (Rank::Trey, 1)]);

        let groups = rank_groups(&sorted("2H 2D 2C 6S 6H"));
        assert_eq!(groups, vec![(Rank::Deuce, 3), (Rank::Six, 2)]);
    }

    #[test]
    fn classify_categories() {
        assert_eq!(rank_of("AS 2S 3S 4S 5S"), HandRank::StraightFlush);
        assert_eq!(rank_of("TS JS QS KS AS"), HandRank::StraightFlush);
        assert_eq!(rank_of("4S 5S 6S 7S 8S"), HandRank::StraightFlush);

        assert_eq!(rank_of("AH AD AC AS 2H"), HandRank::FourOfAKind);
        assert_eq!(rank_of("4H 4D 4C 4S KH"), HandRank::FourOfAKind);
        assert_eq!(rank_of("QH QD QC QS 3H"), HandRank::FourOfAKind);

        assert_eq!(rank_of("AH AD AC 2S 2H"), HandRank::FullHouse);
        assert_eq!(rank_of("4H 4D 4C KS KH"), HandRank::FullHouse);
        assert_eq!(rank_of("QH QD QC 3S 3H"), HandRank::FullHouse);

        assert_eq!(rank_of("2H 3H 4H 5H 8H"), HandRank::Flush);
        assert_eq!(rank_of("2C 9C 4C JC 8C"), HandRank::Flush);

        assert_eq!(rank_of("AH 2S 3D 4C 5H"), HandRank::Straight);
        assert_eq!(rank_of("TH JS QD KC AH"), HandRank::Straight);
        assert_eq!(rank_of("4H 5S 6D 7C 8H"), HandRank::Straight);

        assert_eq!(rank_of("AH AS AD 4C 5H"), HandRank::ThreeOfAKind);
        assert_eq!(rank_of("TH TS TD KC AH"), HandRank::ThreeOfAKind);

        assert_eq!(rank_of("QH QS 6D 6C 5H"), HandRank::TwoPairs);
        assert_eq!(rank_of("9H 9S KD KC 2H"), HandRank::TwoPairs);

        assert_eq!(rank_of("QH QS 6D 5C 8H"), HandRank::Pair);
        assert_eq!(rank_of("4H 4S AD 8C 2H"), HandRank::Pair);

        assert_eq!(rank_of("QH 6S 5D 8C 7H"), HandRank::HighCard);
        assert_eq!(rank_of("4H AS 8D 2C QH"), HandRank::HighCard);
    }

    #[test]
    fn classify_needs_five_cards() {
        let cards = parse_cards("AH KH QH JH TH 9H").unwrap();
        assert_eq!(classify(&[]), Err(HandError::IncompleteHand(0)));
        assert_eq!(classify(&cards[..4]), Err(HandError::IncompleteHand(4)));
        assert_eq!(classify(&cards), Err(HandError::IncompleteHand(6)));
        assert_eq!(classify(&cards[..5]), Ok(HandRank::StraightFlush));
    }

    #[test]
    fn classify_all_hands() {
        let cards = all_cards();
        let n = cards.len();
        let mut counts = AHashMap::<HandRank, usize>::default();

        for c1 in 0..n {
            for c2 in (c1 + 1)..n {
                for c3 in (c2 + 1)..n {
                    for c4 in (c3 + 1)..n {
                        for c5 in (c4 + 1)..n {
                            let mut hand = [cards[c1], cards[c2], cards[c3], cards[c4], cards[c5]];
                            hand.sort_by_key(Card::rank);
                            *counts.entry(classify_sorted(&hand)).or_default() += 1;
                        }
                    }
                }
            }
        }

        assert_eq!(counts.values().sum::<usize>(), 2_598_960);
        assert_eq!(counts[&HandRank::StraightFlush], 40);
        assert_eq!(counts[&HandRank::FourOfAKind], 624);
        assert_eq!(counts[&HandRank::FullHouse], 3_744);
        assert_eq!(counts[&HandRank::Flush], 5_108);
        assert_eq!(counts[&HandRank::Straight], 10_200);
        assert_eq!(counts[&HandRank::ThreeOfAKind], 54_912);
        assert_eq!(counts[&HandRank::TwoPairs], 123_552);
        assert_eq!(counts[&HandRank::Pair], 1_098_240);
        assert_eq!(counts[&HandRank::HighCard], 1_302_540);
    }

    #[test]
    fn hand_rank_ordering() {
        let ranks = HandRank::ranks().collect::<Vec<_>>();
        assert_eq!(ranks.len(), 9);
        assert!(ranks.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(HandRank::TwoPairs.to_string(), "Two Pairs");
        assert_eq!(HandRank::StraightFlush.to_string(), "Straight Flush");
    }
}
