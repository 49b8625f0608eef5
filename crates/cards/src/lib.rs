// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown playing cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td: Card = "td".parse().unwrap();
//! assert_eq!(ah.rank().high_value(), 14);
//! assert_eq!(td.to_string(), "TD");
//! ```
//!
//! and a [Deck] type for shuffling and dealing cards from the top of the deck:
//!
//! ```
//! # use showdown_cards::{Deck, DeckError};
//! let mut deck = Deck::new(true);
//! let hole = deck.deal(2).unwrap();
//! deck.burn().unwrap();
//! let flop = deck.deal(3).unwrap();
//! assert_eq!(hole.len() + flop.len(), 5);
//! assert_eq!(deck.count(), Deck::SIZE - 6);
//!
//! // Dealing more cards than left fails and leaves the deck untouched.
//! let err = deck.deal(50).unwrap_err();
//! assert_eq!(err, DeckError::Exhausted { requested: 50, remaining: 46 });
//! assert_eq!(deck.count(), 46);
//! ```
//!
//! The deck can also iterate through all k-cards hands, for example all the
//! 5-cards hands:
//!
//! ```no_run
//! # use showdown_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, DeckError, ParseCardError, Rank, Suit};
