// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert!(ah.rank() > kd.rank());
//! ```
//!
//! cards can also be parsed from their text form, a rank character followed by
//! a suit character:
//!
//! ```
//! # use showdown_cards::{parse_cards, Card, Rank, Suit};
//! let td: Card = "TD".parse().unwrap();
//! assert_eq!(td, Card::new(Rank::Ten, Suit::Diamonds));
//!
//! let hand = parse_cards("AH KH QH JH TH").unwrap();
//! assert_eq!(hand.len(), 5);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, ParseCardError, Rank, Suit, parse_cards};
