// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Texas Hold'em table dealing and showdown.
use log::debug;
use rand::prelude::*;

use showdown_eval::{Card, Deck, DeckError, EvalError, HandValue, Outcome, compare};

use crate::player::{Player, PlayerId};

/// The number of private cards for each player.
pub const HOLE_CARDS: usize = 2;

/// The number of community cards dealt on the flop.
pub const FLOP_CARDS: usize = 3;

/// The number of community cards at showdown.
pub const BOARD_CARDS: usize = 5;

/// The showdown winners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Showdown {
    /// The player at this seat has the best hand.
    Winner(usize),
    /// The players at these seats tie with the best hand.
    Tie(Vec<usize>),
}

/// The result of a dealt hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialResult {
    /// The hand value for each seat.
    pub values: Vec<HandValue>,
    /// The showdown winners.
    pub showdown: Showdown,
}

/// A table with seated players.
#[derive(Debug)]
pub struct Table {
    players: Vec<Player>,
    community: Vec<Card>,
}

impl Table {
    /// Creates a table with the given number of players.
    pub fn new(num_players: usize) -> Self {
        let players = std::iter::successors(Some(PlayerId::FIRST), |id| Some(id.next()))
            .take(num_players)
            .map(Player::new)
            .collect();

        Self {
            players,
            community: Vec::with_capacity(BOARD_CARDS),
        }
    }

    /// The table players.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The community cards.
    pub fn community(&self) -> &[Card] {
        &self.community
    }

    /// Deals a new hand from a new shuffled deck.
    ///
    /// Each player gets the hole cards, then the dealer burns a card before
    /// dealing the flop, the turn, and the river.
    pub fn deal<R: Rng>(&mut self, rng: &mut R) -> Result<(), DeckError> {
        let mut deck = Deck::new_and_shuffled(rng);

        for player in &mut self.players {
            player.set_hole_cards(deck.deal(HOLE_CARDS)?);
        }

        deck.burn()?;
        let mut community = deck.deal(FLOP_CARDS)?;

        // Turn and river.
        for _ in 0..2 {
            deck.burn()?;
            community.push(deck.deal_one()?);
        }

        self.community = community;
        Ok(())
    }

    /// Evaluates each player hand and finds the winners.
    pub fn showdown(&self) -> Result<TrialResult, EvalError> {
        let values = self
            .players
            .iter()
            .map(|p| p.eval_hand(&self.community))
            .collect::<Result<Vec<_>, _>>()?;

        let showdown = find_winners(&values);
        Ok(TrialResult { values, showdown })
    }

    /// Deals a hand and plays it to showdown.
    pub fn play<R: Rng>(&mut self, rng: &mut R) -> anyhow::Result<TrialResult> {
        self.deal(rng)?;
        let result = self.showdown()?;

        debug!(
            "Board {:?} values {:?} {:?}",
            self.community, result.values, result.showdown
        );

        Ok(result)
    }
}

/// Finds the seats with the best hand.
fn find_winners(values: &[HandValue]) -> Showdown {
    let mut winners: Vec<usize> = Vec::with_capacity(values.len());

    for (seat, value) in values.iter().enumerate() {
        match winners.first() {
            None => winners.push(seat),
            Some(&best) => match compare(value, &values[best]) {
                Outcome::FirstWins => {
                    winners.clear();
                    winners.push(seat);
                }
                Outcome::Tie => winners.push(seat),
                Outcome::SecondWins => {}
            },
        }
    }

    if winners.len() == 1 {
        Showdown::Winner(winners[0])
    } else {
        Showdown::Tie(winners)
    }
}
