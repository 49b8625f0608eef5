// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Histogram based hand evaluation.
use ahash::AHashSet;
use thiserror::Error;

use showdown_cards::{Card, Rank, Suit};

use super::HandValue;

/// The minimum number of cards in a hand.
const MIN_CARDS: usize = 5;

/// The maximum number of cards in a hand.
const MAX_CARDS: usize = 7;

/// Evaluation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The cards are not a valid hand.
    #[error("invalid hand input: {0}")]
    InvalidHandInput(InputError),
}

/// Why a hand is not valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// The hand has too few or too many cards.
    #[error("expected 5 to 7 cards, got {0}")]
    CardCount(usize),
    /// A card appears more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
}

impl From<InputError> for EvalError {
    fn from(err: InputError) -> Self {
        EvalError::InvalidHandInput(err)
    }
}

/// Evaluates a 5, 6 or 7 cards hand.
///
/// Returns the strongest category the hand contains with its tie-break keys.
/// The order of the cards doesn't change the result.
pub fn evaluate(cards: &[Card]) -> Result<HandValue, EvalError> {
    check_hand(cards)?;

    let hist = Histogram::new(cards);
    let value = hist
        .straight_flush()
        .or_else(|| hist.four_of_a_kind())
        .or_else(|| hist.full_house())
        .or_else(|| hist.flush())
        .or_else(|| hist.straight())
        .or_else(|| hist.three_of_a_kind())
        .or_else(|| hist.pairs())
        .unwrap_or_else(|| hist.high_card());

    Ok(value)
}

fn check_hand(cards: &[Card]) -> Result<(), InputError> {
    if !(MIN_CARDS..=MAX_CARDS).contains(&cards.len()) {
        return Err(InputError::CardCount(cards.len()));
    }

    let mut seen = AHashSet::with_capacity(cards.len());
    match cards.iter().find(|c| !seen.insert(**c)) {
        Some(card) => Err(InputError::DuplicateCard(*card)),
        None => Ok(()),
    }
}

/// Rank and suit histograms for a hand.
struct Histogram<'a> {
    cards: &'a [Card],
    /// Count for each ace high rank value, index 0 and 1 unused.
    ranks: [u8; 15],
    /// Count for each suit code, index 0 unused.
    suits: [u8; 5],
}

impl<'a> Histogram<'a> {
    fn new(cards: &'a [Card]) -> Self {
        let mut ranks = [0; 15];
        let mut suits = [0; 5];

        for card in cards {
            ranks[card.rank().high_value() as usize] += 1;
            suits[card.suit().code() as usize] += 1;
        }

        Self {
            cards,
            ranks,
            suits,
        }
    }

    /// Rank values that appear exactly `count` times from the highest.
    fn ranks_with(&self, count: u8) -> impl Iterator<Item = u8> + '_ {
        (2..=14u8)
            .rev()
            .filter(move |&v| self.ranks[v as usize] == count)
    }

    /// Distinct rank values from the highest.
    fn distinct_ranks(&self) -> Vec<u8> {
        (2..=14u8)
            .rev()
            .filter(|&v| self.ranks[v as usize] > 0)
            .collect()
    }

    /// The suit with five or more cards.
    fn flush_suit(&self) -> Option<Suit> {
        Suit::suits().find(|s| self.suits[s.code() as usize] >= 5)
    }

    /// The flush suit rank values from the highest.
    fn flush_ranks(&self) -> Option<Vec<u8>> {
        let suit = self.flush_suit()?;
        let mut ranks = self
            .cards
            .iter()
            .filter(|c| c.suit() == suit)
            .map(|c| c.rank().high_value())
            .collect::<Vec<_>>();
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        Some(ranks)
    }

    fn straight_flush(&self) -> Option<HandValue> {
        let ranks = self.flush_ranks()?;
        straight_high(&ranks).map(HandValue::StraightFlush)
    }

    fn four_of_a_kind(&self) -> Option<HandValue> {
        self.ranks_with(4).next().map(HandValue::FourOfAKind)
    }

    fn full_house(&self) -> Option<HandValue> {
        let trips = self.ranks_with(3).next()?;

        // With 7 cards the pair can come from a second three of a kind.
        let pair = (2..=14u8)
            .rev()
            .find(|&v| v != trips && self.ranks[v as usize] >= 2)?;

        Some(HandValue::FullHouse(trips, pair))
    }

    fn flush(&self) -> Option<HandValue> {
        let ranks = self.flush_ranks()?;
        let mut best = [0; 5];
        best.copy_from_slice(&ranks[..5]);
        Some(HandValue::Flush(best))
    }

    fn straight(&self) -> Option<HandValue> {
        straight_high(&self.distinct_ranks()).map(HandValue::Straight)
    }

    fn three_of_a_kind(&self) -> Option<HandValue> {
        self.ranks_with(3).next().map(HandValue::ThreeOfAKind)
    }

    fn pairs(&self) -> Option<HandValue> {
        let mut pairs = self.ranks_with(2);
        let high = pairs.next()?;
        match pairs.next() {
            Some(low) => Some(HandValue::TwoPair(high, low)),
            None => Some(HandValue::OnePair(high)),
        }
    }

    fn high_card(&self) -> HandValue {
        let high = self.distinct_ranks().first().copied().unwrap_or_default();
        HandValue::HighCard(high)
    }
}

/// Returns the highest straight in a list of distinct rank values sorted from
/// the highest.
///
/// Scans the differences between consecutive ranks for four differences of 1
/// in a row, the first run found is the highest straight. The A-2-3-4-5
/// straight is reported with value 5.
fn straight_high(ranks: &[u8]) -> Option<u8> {
    let mut run = 0;
    let mut start = 0;

    for (idx, pair) in ranks.windows(2).enumerate() {
        if pair[0] - pair[1] == 1 {
            if run == 0 {
                start = idx;
            }

            run += 1;
            if run == 4 {
                return Some(ranks[start]);
            }
        } else {
            run = 0;
        }
    }

    let ace = Rank::Ace.high_value();
    let is_wheel =
        ranks.first() == Some(&ace) && [5, 4, 3, 2].iter().all(|v| ranks.contains(v));
    is_wheel.then_some(5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Deck, HandRank};
    use rand::prelude::*;

    fn cards(hand: &str) -> Vec<Card> {
        hand.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn eval(hand: &str) -> HandValue {
        evaluate(&cards(hand)).unwrap()
    }

    #[test]
    fn high_card() {
        assert_eq!(eval("2h 5d 9c jc kh"), HandValue::HighCard(13));
        assert_eq!(eval("2h 5d 9c jc ah 3s 7d"), HandValue::HighCard(14));
    }

    #[test]
    fn pairs() {
        assert_eq!(eval("2h 2d 9c jc kh"), HandValue::OnePair(2));
        assert_eq!(eval("ah ad 9c jc kh 3s 7d"), HandValue::OnePair(14));
        assert_eq!(eval("9h 9d 7c 7s 4h 3s kd"), HandValue::TwoPair(9, 7));
    }

    #[test]
    fn two_pair_best_of_three() {
        assert_eq!(eval("9h 9d 7c 7s 4h 4s 2d"), HandValue::TwoPair(9, 7));
        assert_eq!(eval("2d 4s 7s 9h 4h 7c 9d"), HandValue::TwoPair(9, 7));
        assert_eq!(eval("ah ad 2c 2s 3h 3s kd"), HandValue::TwoPair(14, 3));
    }

    #[test]
    fn three_of_a_kind() {
        assert_eq!(eval("8h 8d 8c jc kh"), HandValue::ThreeOfAKind(8));
        assert_eq!(eval("ah ad ac 2c 9h 3s 7d"), HandValue::ThreeOfAKind(14));
    }

    #[test]
    fn full_house() {
        assert_eq!(eval("kh kd ks 8c 8h 3d 3s"), HandValue::FullHouse(13, 8));
        assert_eq!(eval("3h 3d 3s 8c 8h"), HandValue::FullHouse(3, 8));

        // Two three of a kind, the lower one gives the pair.
        assert_eq!(eval("kh kd ks 8c 8h 8d 3s"), HandValue::FullHouse(13, 8));

        // A pair above the three of a kind.
        assert_eq!(eval("4h 4d 4s ac ah 8d 3s"), HandValue::FullHouse(4, 14));
    }

    #[test]
    fn four_of_a_kind() {
        assert_eq!(eval("7h 7d 7c 7s kh"), HandValue::FourOfAKind(7));

        // Beats the full house and the three of a kind.
        assert_eq!(eval("7h 7d 7c 7s kh kd ks"), HandValue::FourOfAKind(7));
        assert_eq!(eval("ah ad ac as 2h").rank(), HandRank::FourOfAKind);
    }

    #[test]
    fn straights() {
        assert_eq!(eval("th jd qc ks ah"), HandValue::Straight(14));
        assert_eq!(eval("ah 2d 3c 4s 5h"), HandValue::Straight(5));
        assert_eq!(eval("5h 6d 7c 8s 9h"), HandValue::Straight(9));

        // The highest of two straights.
        assert_eq!(eval("ah 2d 3c 4s 5h 6d 7c"), HandValue::Straight(7));
        assert_eq!(eval("9h td jc qs kh ad 2c"), HandValue::Straight(14));

        // A pair inside the straight.
        assert_eq!(eval("9h 8d 8c 7s 6h 5d 2c"), HandValue::Straight(9));

        // A straight beats a three of a kind.
        assert_eq!(eval("9h 9d 9c 8s 7h 6d 5c"), HandValue::Straight(9));

        // Ace with four to a straight is not a wheel.
        assert_eq!(eval("ah kd qc js 2h"), HandValue::HighCard(14));
        assert_eq!(eval("ah 9d 8c 7s 6h"), HandValue::HighCard(14));
        assert_eq!(eval("ah 2d 3c 4s 6h"), HandValue::HighCard(14));

        // Ranks don't wrap around the ace.
        assert_eq!(eval("qh kd ac 2s 3h"), HandValue::HighCard(14));
    }

    #[test]
    fn flushes() {
        assert_eq!(eval("2h 5h 9h jh kh"), HandValue::Flush([13, 11, 9, 5, 2]));
        assert_eq!(
            eval("2h 5h 9h jh kh 3d ac"),
            HandValue::Flush([13, 11, 9, 5, 2])
        );

        // Six and seven suited cards keep the five highest.
        assert_eq!(
            eval("2h 5h 9h jh kh 3h ac"),
            HandValue::Flush([13, 11, 9, 5, 3])
        );
        assert_eq!(
            eval("2h 5h 9h jh kh 3h ah"),
            HandValue::Flush([14, 13, 11, 9, 5])
        );

        // A flush beats a straight and a three of a kind.
        assert_eq!(
            eval("9h th jh 2h 4h qd kc"),
            HandValue::Flush([11, 10, 9, 4, 2])
        );
        assert_eq!(
            eval("9h 9s 9d 2h 4h 6h 8h"),
            HandValue::Flush([9, 8, 6, 4, 2])
        );
    }

    #[test]
    fn straight_flushes() {
        assert_eq!(eval("5s 6s 7s 8s 9s"), HandValue::StraightFlush(9));
        assert_eq!(eval("ts js qs ks as"), HandValue::StraightFlush(14));
        assert_eq!(eval("as 2s 3s 4s 5s kd kh"), HandValue::StraightFlush(5));

        // Straight and flush with different cards.
        assert_eq!(
            eval("5s 6s 7s 8s 9d 2s ks"),
            HandValue::Flush([13, 8, 7, 6, 5])
        );

        // A higher straight off the flush suit.
        assert_eq!(eval("5s 6s 7s 8s 9s td"), HandValue::StraightFlush(9));

        // Beats four of a kind.
        assert_eq!(eval("5s 6s 7s 8s 9s 9d 9h"), HandValue::StraightFlush(9));
    }

    #[test]
    fn invalid_input() {
        let four = cards("2h 5d 9c jc");
        assert_eq!(
            evaluate(&four),
            Err(EvalError::InvalidHandInput(InputError::CardCount(4)))
        );

        let eight = cards("2h 5d 9c jc kh 3s 7d 8c");
        assert_eq!(
            evaluate(&eight),
            Err(EvalError::InvalidHandInput(InputError::CardCount(8)))
        );

        assert!(evaluate(&[]).is_err());

        let dup = cards("2h 5d 9c jc 5d");
        assert_eq!(
            evaluate(&dup),
            Err(EvalError::InvalidHandInput(InputError::DuplicateCard(
                "5d".parse().unwrap()
            )))
        );
    }

    #[test]
    fn order_independent() {
        let mut rng = SmallRng::seed_from_u64(1);

        for _ in 0..1_000 {
            let mut hand = Deck::new_and_shuffled(&mut rng)
                .into_iter()
                .take(7)
                .collect::<Vec<_>>();

            let value = evaluate(&hand).unwrap();
            hand.shuffle(&mut rng);
            assert_eq!(evaluate(&hand).unwrap(), value);
            hand.reverse();
            assert_eq!(evaluate(&hand).unwrap(), value);
        }
    }

    #[test]
    fn best_five_of_seven() {
        // The 7 cards value is the best of the 5 cards subsets values.
        let mut rng = SmallRng::seed_from_u64(2);

        for _ in 0..500 {
            let hand = Deck::new_and_shuffled(&mut rng)
                .into_iter()
                .take(7)
                .collect::<Vec<_>>();
            let value = evaluate(&hand).unwrap();

            let mut deck = Deck::default();
            for card in Deck::default() {
                if !hand.contains(&card) {
                    deck.remove(card);
                }
            }

            let mut best_rank = HandRank::HighCard;
            deck.for_each(5, |five| {
                best_rank = best_rank.max(evaluate(five).unwrap().rank());
            });
            assert_eq!(value.rank(), best_rank, "{hand:?}");
        }
    }

    #[test]
    fn all_5cards_hands() {
        let mut counts = [0usize; HandRank::COUNT];
        Deck::default().for_each(5, |hand| {
            let value = evaluate(hand).unwrap();
            counts[value.rank().index()] += 1;
        });

        assert_eq!(counts[HandRank::HighCard.index()], 1_302_540);
        assert_eq!(counts[HandRank::OnePair.index()], 1_098_240);
        assert_eq!(counts[HandRank::TwoPair.index()], 123_552);
        assert_eq!(counts[HandRank::ThreeOfAKind.index()], 54_912);
        assert_eq!(counts[HandRank::Straight.index()], 10_200);
        assert_eq!(counts[HandRank::Flush.index()], 5_108);
        assert_eq!(counts[HandRank::FullHouse.index()], 3_744);
        assert_eq!(counts[HandRank::FourOfAKind.index()], 624);
        assert_eq!(counts[HandRank::StraightFlush.index()], 40);
        assert_eq!(counts[HandRank::RoyalStraightFlush.index()], 0);
    }

    // This takes a while to run in debug mode as it goes through 133M hands.
    #[test]
    #[ignore]
    fn all_7cards_hands() {
        let mut counts = [0usize; HandRank::COUNT];
        Deck::default().for_each(7, |hand| {
            let value = evaluate(hand).unwrap();
            counts[value.rank().index()] += 1;
        });

        assert_eq!(counts[HandRank::HighCard.index()], 23_294_460);
        assert_eq!(counts[HandRank::OnePair.index()], 58_627_800);
        assert_eq!(counts[HandRank::TwoPair.index()], 31_433_400);
        assert_eq!(counts[HandRank::ThreeOfAKind.index()], 6_461_620);
        assert_eq!(counts[HandRank::Straight.index()], 6_180_020);
        assert_eq!(counts[HandRank::Flush.index()], 4_047_644);
        assert_eq!(counts[HandRank::FullHouse.index()], 3_473_184);
        assert_eq!(counts[HandRank::FourOfAKind.index()], 224_848);
        assert_eq!(counts[HandRank::StraightFlush.index()], 41_584);
    }
}
