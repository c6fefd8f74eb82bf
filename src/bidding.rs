//! Bidding heuristic: scores a hand against a candidate trump suit.

use crate::card::{Card, Suit};
use crate::hand::HandRegistry;
use crate::options::{BidThresholds, GameOptions, LonerPolicy};

/// A trump decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Call {
    /// Decline to name trump.
    Pass,
    /// Name trump and play with the partner.
    OrderUp,
    /// Name trump and play without the partner.
    Alone,
}

impl Call {
    /// Returns whether the call names trump.
    #[must_use]
    pub const fn is_call(self) -> bool {
        !matches!(self, Self::Pass)
    }
}

/// Result of running the bidding heuristic for one suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BidEvaluation {
    /// The suit that was scored.
    pub suit: Suit,
    /// Hand score including any pickup adjustment.
    pub score: i32,
    /// [`Call::OrderUp`] when the score reaches the minimum, else [`Call::Pass`].
    pub call: Call,
    /// Whether the score reaches the loner threshold.
    ///
    /// The heuristic never goes alone on its own; see [`BidEvaluation::resolve`].
    pub loner_eligible: bool,
}

impl BidEvaluation {
    fn new(suit: Suit, score: i32, thresholds: &BidThresholds) -> Self {
        Self {
            suit,
            score,
            call: determine_call(score, thresholds),
            loner_eligible: is_loner_eligible(score, thresholds),
        }
    }

    /// Applies a loner policy to the evaluation.
    #[must_use]
    pub const fn resolve(&self, policy: LonerPolicy) -> Call {
        match (self.call, policy) {
            (Call::Pass, _) => Call::Pass,
            (_, LonerPolicy::WhenEligible) if self.loner_eligible => Call::Alone,
            _ => Call::OrderUp,
        }
    }
}

/// Maps a hand score to a call.
///
/// Scores at or above the loner threshold are still reported as
/// [`Call::OrderUp`]; callers that want to go alone check
/// [`is_loner_eligible`].
#[must_use]
pub const fn determine_call(score: i32, thresholds: &BidThresholds) -> Call {
    if score >= thresholds.minimum || score >= thresholds.loner {
        Call::OrderUp
    } else {
        Call::Pass
    }
}

/// Returns whether a hand score is strong enough to go alone.
#[must_use]
pub const fn is_loner_eligible(score: i32, thresholds: &BidThresholds) -> bool {
    score >= thresholds.loner
}

impl HandRegistry {
    /// Scores the hand with `trump` as trump.
    ///
    /// Right bower 3, other trump 2 each, left bower 3 with other trump or 2
    /// on its own, off-suit Aces 1 each, and 1 per void effective suit.
    #[must_use]
    pub fn w_score(&self, trump: Suit) -> i32 {
        let mut score = 0;
        let mut has_trump = false;
        let mut has_left = false;

        for card in self.iter() {
            if card.is_right_bower(trump) {
                score += 3;
                has_trump = true;
            } else if card.is_left_bower(trump) {
                has_left = true;
            } else if card.suit() == trump {
                score += 2;
                has_trump = true;
            } else if card.is_ace() {
                score += 1;
            }
        }

        if has_left {
            score += if has_trump { 3 } else { 2 };
        }

        score + self.count_suits(trump).voids() as i32
    }

    /// Finds the best-scoring trump suit other than `excluded`.
    ///
    /// Ties go to the earliest suit in [`Suit::ALL`].
    #[must_use]
    pub fn best_trump_score(&self, excluded: Suit) -> (Suit, i32) {
        let mut best: Option<(Suit, i32)> = None;
        for suit in Suit::ALL {
            if suit == excluded {
                continue;
            }
            let score = self.w_score(suit);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((suit, score));
            }
        }
        best.unwrap_or((excluded.weak_color(), 0))
    }

    /// First-round decision on ordering up `trump`.
    ///
    /// `partner_would_pick_up` is set when the dealer is on the bidder's team;
    /// the pickup bonus is added in that case and subtracted otherwise.
    #[must_use]
    pub fn call_or_pass(
        &self,
        trump: Suit,
        partner_would_pick_up: bool,
        options: &GameOptions,
    ) -> BidEvaluation {
        let adjustment = if partner_would_pick_up {
            options.partner_pickup_bonus
        } else {
            -options.partner_pickup_bonus
        };
        BidEvaluation::new(
            trump,
            self.w_score(trump) + adjustment,
            &options.thresholds,
        )
    }

    /// Second-round decision: the best suit other than the turned-down one.
    #[must_use]
    pub fn declare_trump(&self, turned_down: Suit, thresholds: &BidThresholds) -> BidEvaluation {
        let (suit, score) = self.best_trump_score(turned_down);
        BidEvaluation::new(suit, score, thresholds)
    }
}

/// Scores an arbitrary set of cards; convenient for evaluating a hand before
/// it is registered to a player.
#[must_use]
pub fn score_cards(cards: &[Card], trump: Suit) -> i32 {
    let mut hand = HandRegistry::new();
    hand.add_cards(cards);
    hand.w_score(trump)
}
