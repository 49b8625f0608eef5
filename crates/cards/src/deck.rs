// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Playing cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A playing card.
///
/// A card is an immutable rank and suit pair, its [id](Card::id) packs both
/// codes in a byte:
///
/// ```text
///   +--------+
///   |ssssrrrr|
///   +--------+
///   s = suit code (hearts=1,diamonds=2,clubs=3,spades=4)
///   r = rank code (ace=1,deuce=2,...,king=13)
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a rank and a suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self { rank, suit }
    }

    /// This card unique id.
    pub fn id(&self) -> u8 {
        (self.suit.code() << 4) | self.rank.code()
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

/// Error returned when parsing a card from a string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The string is not a rank character followed by a suit character.
    #[error("invalid card '{0}', expected a rank and a suit like 'ah' or 'td'")]
    Format(String),
    /// Unknown rank character.
    #[error("invalid rank '{0}', expected one of a23456789tjqk")]
    Rank(char),
    /// Unknown suit character.
    #[error("invalid suit '{0}', expected one of hdcs")]
    Suit(char),
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a card from a rank and a suit character, case insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rank_char), Some(suit_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(ParseCardError::Format(s.to_string()));
        };

        let rank = match rank_char.to_ascii_lowercase() {
            'a' => Rank::Ace,
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            't' => Rank::Ten,
            'j' => Rank::Jack,
            'q' => Rank::Queen,
            'k' => Rank::King,
            _ => return Err(ParseCardError::Rank(rank_char)),
        };

        let suit = match suit_char.to_ascii_lowercase() {
            'h' => Suit::Hearts,
            'd' => Suit::Diamonds,
            'c' => Suit::Clubs,
            's' => Suit::Spades,
            _ => return Err(ParseCardError::Suit(suit_char)),
        };

        Ok(Card::new(rank, suit))
    }
}

/// Card rank.
///
/// The ace code is 1, use [Rank::high_value] where the ace ranks above the king.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Ace
    Ace = 1,
    /// Deuce
    Deuce,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Ace, Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King,
        ]
        .into_iter()
    }

    /// The rank code, 1 for the ace up to 13 for the king.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// The rank value with the ace high, 2 for the deuce up to 14 for the ace.
    pub const fn high_value(self) -> u8 {
        match self {
            Rank::Ace => 14,
            rank => rank as u8,
        }
    }

    /// Gets a rank from a value, accepts both 1 and 14 for the ace.
    pub fn from_value(value: u8) -> Option<Rank> {
        match value {
            14 => Some(Rank::Ace),
            v => Rank::ranks().find(|r| r.code() == v),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Ace => 'A',
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts suit.
    Hearts = 1,
    /// Diamonds suit.
    Diamonds = 2,
    /// Clubs suit.
    Clubs = 3,
    /// Spades suit.
    Spades = 4,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades].into_iter()
    }

    /// The suit code from 1 to 4.
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

/// Error returned by a deck operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Requested more cards than there are left in the deck.
    #[error("deck exhausted: requested {requested} cards with {remaining} remaining")]
    Exhausted {
        /// The number of requested cards.
        requested: usize,
        /// The number of cards left in the deck.
        remaining: usize,
    },
}

/// A cards Deck.
///
/// Cards are dealt from the end of the deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new deck shuffled with the thread rng if `shuffled` is true.
    pub fn new(shuffled: bool) -> Self {
        let mut deck = Self::default();
        if shuffled {
            deck.shuffle(&mut rand::rng());
        }

        deck
    }

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Shuffles the cards left in the deck.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals `n` cards from the deck.
    ///
    /// The returned cards are in dealing order, the deck is unchanged on error.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        let remaining = self.cards.len();
        if n > remaining {
            return Err(DeckError::Exhausted {
                requested: n,
                remaining,
            });
        }

        Ok(self.cards.drain(remaining - n..).rev().collect())
    }

    /// Deals a card from the deck.
    pub fn deal_one(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Exhausted {
            requested: 1,
            remaining: 0,
        })
    }

    /// Discards a card from the deck.
    pub fn burn(&mut self) -> Result<(), DeckError> {
        self.deal_one().map(|_| ())
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        if k > self.cards.len() {
            return;
        }

        // Indices of the current combination, advanced like an odometer
        // where each position stays strictly above the previous one.
        let n = self.cards.len();
        let mut idx = (0..k).collect::<Vec<_>>();
        let mut h = idx.iter().map(|&i| self.cards[i]).collect::<Vec<_>>();

        loop {
            f(&h);

            // Find the rightmost position that can still move right.
            let Some(pos) = (0..k).rev().find(|&p| idx[p] < n - k + p) else {
                break;
            };

            idx[pos] += 1;
            h[pos] = self.cards[idx[pos]];
            for p in pos + 1..k {
                idx[p] = idx[p - 1] + 1;
                h[p] = self.cards[idx[p]];
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
