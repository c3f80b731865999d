// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hands accumulation and comparison.
use log::{debug, trace};
use std::{cmp::Ordering, fmt};
use thiserror::Error;

use crate::{
    Card, HandRank, Outcome, Rank, rank::classify_sorted, tiebreak::sorted_tie_breakers,
};

/// The number of cards in a complete hand.
pub const HAND_SIZE: usize = 5;

/// Hand errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// Adding cards would push the hand past 5 cards.
    #[error("a hand may not exceed 5 cards, got {0}")]
    CapacityExceeded(usize),
    /// The hand needs exactly 5 cards to be ranked.
    #[error("a hand must contain 5 cards to be ranked, got {0}")]
    IncompleteHand(usize),
}

/// A complete five cards hand with its category and tie breakers.
///
/// Ranked hands are ordered by strength: first by category and then by tie
/// breakers, two hands are equal if they have the same strength even if they
/// hold different cards.
#[derive(Debug, Clone)]
pub struct RankedHand {
    cards: [Card; HAND_SIZE],
    category: HandRank,
    tie_breakers: Vec<Rank>,
}

impl RankedHand {
    /// Ranks five cards in any order.
    pub fn new(mut cards: [Card; HAND_SIZE]) -> Self {
        cards.sort_by_key(Card::rank);
        Self::from_sorted(cards)
    }

    fn from_sorted(cards: [Card; HAND_SIZE]) -> Self {
        let category = classify_sorted(&cards);
        let tie_breakers = sorted_tie_breakers(&cards, category);
        Self {
            cards,
            category,
            tie_breakers,
        }
    }

    /// The hand cards sorted by rank.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// The hand ranking category.
    pub fn category(&self) -> HandRank {
        self.category
    }

    /// The ranks that break ties between hands of the same category.
    pub fn tie_breakers(&self) -> &[Rank] {
        &self.tie_breakers
    }

    /// Compares this hand against an opponent hand.
    pub fn compare(&self, other: &RankedHand) -> Outcome {
        let outcome = Outcome::from(self.cmp(other));
        trace!("Hand {self} vs {other}: {outcome}");
        outcome
    }
}

impl Ord for RankedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        // Hands with the same category have tie breakers of the same length
        // so this is an element by element comparison.
        self.category
            .cmp(&other.category)
            .then_with(|| self.tie_breakers.cmp(&other.tie_breakers))
    }
}

impl PartialOrd for RankedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for RankedHand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankedHand {}

impl fmt::Display for RankedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_cards(f, &self.cards)
    }
}

/// A Poker hand that accumulates up to five cards.
///
/// The cards are kept sorted by rank, when the fifth card is added the hand is
/// ranked and its category and tie breakers don't change after that:
///
/// ```
/// # use showdown_eval::*;
/// let mut hand = Hand::new(parse_cards("AH AD").unwrap()).unwrap();
/// assert_eq!(hand.category(), Err(HandError::IncompleteHand(2)));
///
/// hand.add_cards(parse_cards("AC KS KH").unwrap()).unwrap();
/// assert_eq!(hand.category(), Ok(HandRank::FullHouse));
/// assert_eq!(hand.tie_breakers(), Ok(&[Rank::Ace, Rank::King][..]));
///
/// let other = Hand::new(parse_cards("2S 3S 4S 5S 6S").unwrap()).unwrap();
/// assert_eq!(hand.compare(&other), Ok(Outcome::Loss));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Hand(HandState);

#[derive(Debug, Clone)]
enum HandState {
    /// Less than five cards sorted by rank.
    Incomplete(Vec<Card>),
    /// Five cards ranked.
    Complete(RankedHand),
}

impl Default for HandState {
    fn default() -> Self {
        HandState::Incomplete(Vec::with_capacity(HAND_SIZE))
    }
}

impl Hand {
    /// Creates a hand with the given cards.
    ///
    /// This is the same as adding the cards to an empty hand.
    pub fn new<I>(cards: I) -> Result<Self, HandError>
    where
        I: IntoIterator<Item = Card>,
    {
        let mut hand = Self::default();
        hand.add_cards(cards)?;
        Ok(hand)
    }

    /// Adds cards to this hand.
    ///
    /// Returns [HandError::CapacityExceeded] and leaves the hand unchanged if
    /// the hand would have more than 5 cards.
    pub fn add_cards<I>(&mut self, cards: I) -> Result<(), HandError>
    where
        I: IntoIterator<Item = Card>,
    {
        let new_cards = cards.into_iter().collect::<Vec<_>>();
        if new_cards.is_empty() {
            return Ok(());
        }

        let total = self.len() + new_cards.len();
        if total > HAND_SIZE {
            return Err(HandError::CapacityExceeded(total));
        }

        // A complete hand has no room left so this is an incomplete hand.
        let HandState::Incomplete(current) = &mut self.0 else {
            return Err(HandError::CapacityExceeded(total));
        };

        current.extend(new_cards);
        current.sort_by_key(Card::rank);

        if let Ok(cards) = <[Card; HAND_SIZE]>::try_from(current.as_slice()) {
            let ranked = RankedHand::from_sorted(cards);
            debug!(
                "Hand {ranked} ranked {} {:?}",
                ranked.category, ranked.tie_breakers
            );
            self.0 = HandState::Complete(ranked);
        }

        Ok(())
    }

    /// The hand cards sorted by rank.
    pub fn cards(&self) -> &[Card] {
        match &self.0 {
            HandState::Incomplete(cards) => cards.as_slice(),
            HandState::Complete(ranked) => ranked.cards().as_slice(),
        }
    }

    /// The number of cards in this hand.
    pub fn len(&self) -> usize {
        self.cards().len()
    }

    /// Checks if this hand has no cards.
    pub fn is_empty(&self) -> bool {
        self.cards().is_empty()
    }

    /// Checks if this hand has five cards.
    pub fn is_complete(&self) -> bool {
        matches!(self.0, HandState::Complete(_))
    }

    /// The ranked hand if this hand is complete.
    pub fn ranked(&self) -> Result<&RankedHand, HandError> {
        match &self.0 {
            HandState::Complete(ranked) => Ok(ranked),
            HandState::Incomplete(cards) => Err(HandError::IncompleteHand(cards.len())),
        }
    }

    /// The hand ranking category.
    pub fn category(&self) -> Result<HandRank, HandError> {
        self.ranked().map(RankedHand::category)
    }

    /// The ranks that break ties between hands of the same category.
    pub fn tie_breakers(&self) -> Result<&[Rank], HandError> {
        self.ranked().map(RankedHand::tie_breakers)
    }

    /// Compares this hand against an opponent hand, both hands must be complete.
    pub fn compare(&self, other: &Hand) -> Result<Outcome, HandError> {
        Ok(self.ranked()?.compare(other.ranked()?))
    }
}

impl From<RankedHand> for Hand {
    fn from(ranked: RankedHand) -> Self {
        Hand(HandState::Complete(ranked))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_cards(f, self.cards())
    }
}

fn write_cards(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
    for (idx, card) in cards.iter().enumerate() {
        if idx > 0 {
            write!(f, " ")?;
        }
        write!(f, "{card}")?;
    }

    Ok(())
}
