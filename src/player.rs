//! Players, seats, and partnerships.

use alloc::string::String;

use crate::ai;
use crate::bidding::BidEvaluation;
use crate::card::{Card, Suit};
use crate::hand::HandRegistry;
use crate::options::{BidThresholds, GameOptions};
use crate::trick::Trick;

/// Seat index around the table, `0..SEATS`.
pub type Seat = usize;

/// Number of seats at a Euchre table.
pub const SEATS: usize = 4;

/// Cards dealt to each seat.
pub const HAND_SIZE: usize = 5;

/// Returns the seat to the left of `seat`.
#[must_use]
pub const fn next_seat(seat: Seat) -> Seat {
    (seat + 1) % SEATS
}

/// Returns the partner of `seat`, who sits opposite.
#[must_use]
pub const fn partner_seat(seat: Seat) -> Seat {
    (seat + 2) % SEATS
}

/// Returns whether two seats play on the same team.
#[must_use]
pub const fn same_team(a: Seat, b: Seat) -> bool {
    a % 2 == b % 2
}

/// Who makes decisions for a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Controller {
    /// Decisions are submitted from outside the engine.
    Human,
    /// Decisions come from the built-in heuristics.
    #[default]
    Automated,
}

/// A player at the table.
#[derive(Debug, Clone, Default)]
pub struct Player {
    name: String,
    controller: Controller,
    seat: Seat,
    hand: HandRegistry,
    score: u32,
    wins: u32,
    losses: u32,
    tricks_won: u8,
    is_playing: bool,
}

impl Player {
    /// Creates a player.
    #[must_use]
    pub fn new(name: impl Into<String>, controller: Controller) -> Self {
        Self {
            name: name.into(),
            controller,
            is_playing: true,
            ..Self::default()
        }
    }

    /// Creates a human-controlled player.
    #[must_use]
    pub fn human(name: impl Into<String>) -> Self {
        Self::new(name, Controller::Human)
    }

    /// Creates an automated player.
    #[must_use]
    pub fn automated(name: impl Into<String>) -> Self {
        Self::new(name, Controller::Automated)
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns who makes this player's decisions.
    #[must_use]
    pub const fn controller(&self) -> Controller {
        self.controller
    }

    /// Returns whether the player is human-controlled.
    #[must_use]
    pub const fn is_human(&self) -> bool {
        matches!(self.controller, Controller::Human)
    }

    /// Returns the seat the player occupies.
    #[must_use]
    pub const fn seat(&self) -> Seat {
        self.seat
    }

    pub(crate) const fn set_seat(&mut self, seat: Seat) {
        self.seat = seat;
    }

    /// Returns the partner's seat.
    #[must_use]
    pub const fn partner(&self) -> Seat {
        partner_seat(self.seat)
    }

    /// Returns the player's hand registry.
    #[must_use]
    pub const fn hand(&self) -> &HandRegistry {
        &self.hand
    }

    pub(crate) const fn hand_mut(&mut self) -> &mut HandRegistry {
        &mut self.hand
    }

    /// Returns the game score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Adds points to the game score.
    pub const fn add_points(&mut self, points: u32) {
        self.score += points;
    }

    /// Resets the game score to zero.
    pub const fn clear_score(&mut self) {
        self.score = 0;
    }

    /// Returns games won.
    #[must_use]
    pub const fn wins(&self) -> u32 {
        self.wins
    }

    /// Returns games lost.
    #[must_use]
    pub const fn losses(&self) -> u32 {
        self.losses
    }

    pub(crate) const fn record_result(&mut self, won: bool) {
        if won {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
    }

    /// Returns tricks won in the current round.
    #[must_use]
    pub const fn tricks_won(&self) -> u8 {
        self.tricks_won
    }

    pub(crate) const fn add_trick(&mut self) {
        self.tricks_won += 1;
    }

    /// Returns whether the player takes part in the current round.
    ///
    /// Only the partner of a player going alone sits out.
    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub(crate) const fn set_playing(&mut self, playing: bool) {
        self.is_playing = playing;
    }

    /// Clears the hand and per-round counters before a deal.
    pub fn reset_for_round(&mut self) {
        self.hand.clear();
        self.tricks_won = 0;
        self.is_playing = true;
    }

    /// Removes a card from the hand and returns it.
    pub fn play_card(&mut self, card: Card) -> Card {
        self.hand.remove_from_hand(card);
        card
    }

    /// Takes a card into the hand, face down.
    pub fn pick_up(&mut self, mut card: Card) {
        card.turn_face_down();
        self.hand.add_to_hand(card);
    }

    /// Discards a card from the hand.
    pub fn discard(&mut self, card: Card) -> Card {
        self.play_card(card)
    }

    /// First-round bidding decision on the turned-up suit.
    #[must_use]
    pub fn call_or_pass(
        &self,
        trump: Suit,
        partner_would_pick_up: bool,
        options: &GameOptions,
    ) -> BidEvaluation {
        self.hand.call_or_pass(trump, partner_would_pick_up, options)
    }

    /// Second-round bidding decision, naming any suit but `turned_down`.
    #[must_use]
    pub fn declare_trump(&self, turned_down: Suit, thresholds: &BidThresholds) -> BidEvaluation {
        self.hand.declare_trump(turned_down, thresholds)
    }

    /// Chooses a card for the current trick.
    ///
    /// Returns `None` only when the hand is empty.
    #[must_use]
    pub fn best_play(&self, trick: &Trick, trump: Suit, caller: Seat) -> Option<Card> {
        ai::best_play(&self.hand, self.seat, trick, trump, caller)
    }
}
