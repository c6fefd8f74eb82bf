//! Round state types.

use crate::bidding::Call;
use crate::card::{Card, Suit};
use crate::player::{Controller, Seat};

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for the deal.
    Dealing,
    /// Seats may order up the turned-up kitty card.
    SelectingTrumpRound1,
    /// Seats may name any suit except the turned-down one.
    SelectingTrumpRound2,
    /// Everyone passed twice; the dealer has to name a suit.
    DealerForced,
    /// A human dealer picked up the kitty card and has to discard.
    DealerDiscard,
    /// Tricks are being played.
    Playing,
    /// All tricks have been played.
    Complete,
}

impl RoundState {
    /// Returns whether trump is still being chosen.
    #[must_use]
    pub const fn is_selecting_trump(self) -> bool {
        matches!(
            self,
            Self::SelectingTrumpRound1 | Self::SelectingTrumpRound2 | Self::DealerForced
        )
    }
}

/// What the round is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionKind {
    /// Pass, or order up (possibly alone) the turned-up suit.
    OrderUp {
        /// The kitty suit.
        suit: Suit,
    },
    /// Pass, or name any suit but the excluded one.
    NameTrump {
        /// The turned-down suit.
        excluded: Suit,
    },
    /// Name any suit but the excluded one; passing is not allowed.
    DealerMustName {
        /// The turned-down suit.
        excluded: Suit,
    },
    /// Discard one card after picking up the kitty card.
    Discard,
    /// Play a card to the current trick.
    Play,
}

/// A decision the round is waiting on, regardless of who supplies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingDecision {
    /// The seat that has to decide.
    pub seat: Seat,
    /// Who controls that seat.
    pub controller: Controller,
    /// What has to be decided.
    pub kind: DecisionKind,
}

/// A decision submitted on behalf of a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// A trump call for the named suit. The suit is ignored for passes.
    Trump {
        /// The call.
        call: Call,
        /// The suit being named.
        suit: Suit,
    },
    /// The dealer's discard.
    Discard(Card),
    /// A card played to the trick.
    Play(Card),
}
