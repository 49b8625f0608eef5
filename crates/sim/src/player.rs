// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table player types.
use std::fmt;

use showdown_eval::{Card, EvalError, HandValue};

/// A player identifier unique within a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(u32);

impl PlayerId {
    /// The first player id.
    pub const FIRST: PlayerId = PlayerId(0);

    /// The id after this one.
    pub fn next(self) -> PlayerId {
        PlayerId(self.0 + 1)
    }

    /// The integer id.
    pub fn id(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// A player and its hole cards.
#[derive(Debug, Clone)]
pub struct Player {
    /// The player id.
    pub id: PlayerId,
    /// The player private cards.
    hole_cards: Vec<Card>,
}

impl Player {
    /// Creates a new player with no cards.
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            hole_cards: Vec::new(),
        }
    }

    /// Sets the player hole cards.
    pub fn set_hole_cards(&mut self, cards: Vec<Card>) {
        self.hole_cards = cards;
    }

    /// The player hole cards.
    pub fn hole_cards(&self) -> &[Card] {
        &self.hole_cards
    }

    /// Evaluates this player hand with the community cards.
    pub fn eval_hand(&self, community: &[Card]) -> Result<HandValue, EvalError> {
        let cards = community
            .iter()
            .chain(&self.hole_cards)
            .copied()
            .collect::<Vec<_>>();
        HandValue::eval(&cards)
    }
}
