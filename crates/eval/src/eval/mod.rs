// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The [evaluate] function classifies a 5, 6 or 7 cards hand into the best
//! five cards category it contains and returns a [HandValue] that carries the
//! category specific tie-break keys. [compare] decides a showdown between two
//! values comparing categories first and calling [break_tie] only when the
//! categories are equal.
//!
//! All ranks in the tie-break keys are ace high values from 2 to 14, with the
//! exception of the A-2-3-4-5 straight whose key is 5.

mod evaluator;
pub use evaluator::{EvalError, InputError, evaluate};

mod value;
pub use value::{HandRank, HandValue, Outcome, break_tie, compare};
