// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories and values.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use showdown_cards::{Card, Rank};

use super::evaluator::{self, EvalError};

/// A poker hand category from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
    /// Royal straight flush, never returned by the evaluator that reports an
    /// ace high straight flush as [HandRank::StraightFlush].
    RoyalStraightFlush,
}

impl HandRank {
    /// The number of categories.
    pub const COUNT: usize = 10;

    /// Returns all categories from the weakest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalStraightFlush,
        ]
        .into_iter()
    }

    /// Returns the categories the evaluator can produce.
    pub fn reachable() -> impl DoubleEndedIterator<Item = HandRank> {
        Self::ranks().filter(|r| *r != HandRank::RoyalStraightFlush)
    }

    /// The category index from 0 for [HandRank::HighCard].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalStraightFlush => "Royal Straight Flush",
        };

        write!(f, "{name}")
    }
}

/// The value of a poker hand.
///
/// Each variant is a category with its tie-break payload, ranks are ace high
/// values (2..=14), the A-2-3-4-5 straight has value 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandValue {
    /// The highest rank in the hand.
    HighCard(u8),
    /// The pair rank.
    OnePair(u8),
    /// The highest pair rank and the second highest pair rank.
    TwoPair(u8, u8),
    /// The three of a kind rank.
    ThreeOfAKind(u8),
    /// The straight highest rank.
    Straight(u8),
    /// The five highest flush ranks in descending order.
    Flush([u8; 5]),
    /// The three of a kind rank and the pair rank.
    FullHouse(u8, u8),
    /// The four of a kind rank.
    FourOfAKind(u8),
    /// The straight flush highest rank.
    StraightFlush(u8),
    /// Royal straight flush.
    RoyalStraightFlush,
}

impl HandValue {
    /// Evaluates a 5, 6 or 7 cards hand.
    pub fn eval(cards: &[Card]) -> Result<Self, EvalError> {
        evaluator::evaluate(cards)
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        match self {
            HandValue::HighCard(_) => HandRank::HighCard,
            HandValue::OnePair(_) => HandRank::OnePair,
            HandValue::TwoPair(..) => HandRank::TwoPair,
            HandValue::ThreeOfAKind(_) => HandRank::ThreeOfAKind,
            HandValue::Straight(_) => HandRank::Straight,
            HandValue::Flush(_) => HandRank::Flush,
            HandValue::FullHouse(..) => HandRank::FullHouse,
            HandValue::FourOfAKind(_) => HandRank::FourOfAKind,
            HandValue::StraightFlush(_) => HandRank::StraightFlush,
            HandValue::RoyalStraightFlush => HandRank::RoyalStraightFlush,
        }
    }

    /// The keys used to break a tie with a hand of the same category.
    pub fn tiebreak_keys(&self) -> Vec<u8> {
        match *self {
            HandValue::HighCard(r)
            | HandValue::OnePair(r)
            | HandValue::ThreeOfAKind(r)
            | HandValue::Straight(r)
            | HandValue::FourOfAKind(r)
            | HandValue::StraightFlush(r) => vec![r],
            HandValue::TwoPair(r1, r2) | HandValue::FullHouse(r1, r2) => vec![r1, r2],
            HandValue::Flush(ranks) => ranks.to_vec(),
            HandValue::RoyalStraightFlush => vec![Rank::Ace.high_value()],
        }
    }
}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other).into()
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rank())?;

        let keys = self.tiebreak_keys();
        if !matches!(self, HandValue::RoyalStraightFlush) && !keys.is_empty() {
            write!(f, " ")?;
            for value in keys {
                match Rank::from_value(value) {
                    Some(rank) => write!(f, "{rank}")?,
                    None => write!(f, "?")?,
                }
            }
        }

        Ok(())
    }
}

/// The outcome of a showdown between two hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The first hand wins.
    FirstWins,
    /// The second hand wins.
    SecondWins,
    /// The hands are tied.
    Tie,
}

impl Outcome {
    /// The outcome with the hands swapped.
    pub fn reverse(self) -> Outcome {
        match self {
            Outcome::FirstWins => Outcome::SecondWins,
            Outcome::SecondWins => Outcome::FirstWins,
            Outcome::Tie => Outcome::Tie,
        }
    }
}

impl From<Ordering> for Outcome {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Outcome::FirstWins,
            Ordering::Less => Outcome::SecondWins,
            Ordering::Equal => Outcome::Tie,
        }
    }
}

impl From<Outcome> for Ordering {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::FirstWins => Ordering::Greater,
            Outcome::SecondWins => Ordering::Less,
            Outcome::Tie => Ordering::Equal,
        }
    }
}

/// Compares two hands, the categories decide unless they are equal in which
/// case the tie is broken with [break_tie].
pub fn compare(a: &HandValue, b: &HandValue) -> Outcome {
    match a.rank().cmp(&b.rank()) {
        Ordering::Equal => break_tie(a, b),
        ord => ord.into(),
    }
}

/// Breaks a tie between two hands of the same category.
///
/// Single key categories compare their key, two pair and full house compare
/// the first key and then the second, flushes compare all five ranks from the
/// highest. Hands of different categories are a [Outcome::Tie], use [compare]
/// for those.
pub fn break_tie(a: &HandValue, b: &HandValue) -> Outcome {
    use HandValue::*;

    let ord = match (a, b) {
        (HighCard(r1), HighCard(r2))
        | (OnePair(r1), OnePair(r2))
        | (ThreeOfAKind(r1), ThreeOfAKind(r2))
        | (Straight(r1), Straight(r2))
        | (FourOfAKind(r1), FourOfAKind(r2))
        | (StraightFlush(r1), StraightFlush(r2)) => r1.cmp(r2),
        (TwoPair(h1, l1), TwoPair(h2, l2)) | (FullHouse(h1, l1), FullHouse(h2, l2)) => {
            h1.cmp(h2).then(l1.cmp(l2))
        }
        (Flush(r1), Flush(r2)) => r1
            .iter()
            .zip(r2)
            .map(|(v1, v2)| v1.cmp(v2))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    };

    ord.into()
}
