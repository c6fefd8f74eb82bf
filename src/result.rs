//! Outcome types reported by rounds and games.

use crate::card::{Card, Suit};
use crate::player::{SEATS, Seat, same_team};
use crate::trick::CompletedTrick;

/// Result of a single card play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOutcome {
    /// The card that was played.
    pub card: Card,
    /// The trick, if this play completed it.
    pub completed_trick: Option<CompletedTrick>,
}

/// Summary of a finished round, for external scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRecord {
    /// The dealer's seat.
    pub dealer: Seat,
    /// The trump suit.
    pub trump: Suit,
    /// The seat that named trump.
    pub caller: Seat,
    /// Whether the caller played alone.
    pub alone: bool,
    /// Tricks won, indexed by seat.
    pub tricks_won: [u8; SEATS],
}

impl RoundRecord {
    /// Tricks taken by the caller's partnership.
    #[must_use]
    pub fn makers_tricks(&self) -> u8 {
        self.team_tricks(self.caller)
    }

    /// Tricks taken by the partnership opposing the caller.
    #[must_use]
    pub fn defenders_tricks(&self) -> u8 {
        self.team_tricks(self.caller + 1)
    }

    fn team_tricks(&self, seat: Seat) -> u8 {
        (0..SEATS)
            .filter(|&other| same_team(seat, other))
            .map(|other| self.tricks_won[other])
            .sum()
    }
}

/// What happened when a round was closed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    /// A player reached the score limit; wins and losses were tallied.
    GameOver,
    /// The next round was dealt.
    NextRound,
}
