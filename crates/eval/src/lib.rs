// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown poker hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. The evaluator builds rank
//! and suit histograms for the hand and returns a [HandValue] with the hand
//! category and the keys used to break ties between hands of the same category.
//!
//! To use the evaluator create a hand and use [HandValue::eval] to evaluate the
//! hand and get its value:
//!
//! ```
//! # use showdown_eval::*;
//! let cards = ["kh", "kd", "ks", "8c", "8h", "3d", "3s"]
//!     .iter()
//!     .map(|c| c.parse::<Card>())
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//!
//! let value = HandValue::eval(&cards).unwrap();
//! assert_eq!(value.rank(), HandRank::FullHouse);
//! assert_eq!(value.tiebreak_keys(), [13, 8]);
//! ```
//!
//! Values of different categories compare by category, values with the same
//! category use the category tie-break keys:
//!
//! ```
//! # use showdown_eval::*;
//! let flush1 = HandValue::Flush([13, 11, 9, 7, 3]);
//! let flush2 = HandValue::Flush([13, 11, 9, 7, 2]);
//! assert_eq!(break_tie(&flush1, &flush2), Outcome::FirstWins);
//! assert!(flush1 > flush2);
//! assert!(HandValue::OnePair(2) > HandValue::HighCard(14));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{EvalError, HandRank, HandValue, InputError, Outcome, break_tie, compare, evaluate};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, DeckError, ParseCardError, Rank, Suit};
