// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker five cards hand evaluator.
//!
//! The evaluator classifies a five cards hand into one of nine ranking
//! categories from [HandRank::HighCard] to [HandRank::StraightFlush] and
//! builds the tie breakers ranks used to compare hands of the same category.
//!
//! To use the evaluator create a [Hand] with five cards and compare it with
//! another hand:
//!
//! ```
//! # use showdown_eval::*;
//! let wheel = Hand::new(parse_cards("AH 2C 3S 4D 5H").unwrap()).unwrap();
//! let six_high = Hand::new(parse_cards("2C 3S 4D 5H 6H").unwrap()).unwrap();
//! assert_eq!(wheel.category(), Ok(HandRank::Straight));
//! assert_eq!(wheel.compare(&six_high), Ok(Outcome::Loss));
//! assert_eq!(six_high.compare(&wheel), Ok(Outcome::Win));
//! ```
//!
//! A hand can also be built incrementally with [Hand::add_cards], it is ranked
//! when the fifth card is added.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod hand;
pub mod outcome;
pub mod rank;
pub mod tiebreak;

pub use hand::{HAND_SIZE, Hand, HandError, RankedHand};
pub use outcome::Outcome;
pub use rank::{HandRank, classify};
pub use tiebreak::tie_breakers;

// Reexport cards types.
pub use showdown_cards::{Card, ParseCardError, Rank, Suit, parse_cards};
