//! Error types for engine operations.

use thiserror::Error;

/// Errors that can occur when constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank outside `1..=13`.
    #[error("invalid card rank {0}, expected 1..=13")]
    InvalidRank(u8),
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The round has already been dealt.
    #[error("invalid round state for dealing")]
    InvalidState,
    /// Not enough cards in the deck to give every seat a full hand and turn
    /// up a kitty card.
    #[error("not enough cards to deal: needed {needed}, {remaining} remaining")]
    NotEnoughCards {
        /// Cards required for a full deal plus the turned-up card.
        needed: usize,
        /// Cards left in the deck.
        remaining: usize,
    },
}

/// Errors that can occur during trump selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrumpError {
    /// The round is not selecting trump.
    #[error("invalid round state for trump selection")]
    InvalidState,
    /// Not this seat's turn.
    #[error("not this seat's turn")]
    NotYourTurn,
    /// A human selection was submitted for an automated seat.
    #[error("active seat is not controlled by a human")]
    NotHumanSeat,
    /// An automated selection was submitted for a human seat.
    #[error("active seat is not automated")]
    NotAutomatedSeat,
    /// In the first bidding round only the kitty suit may be ordered up.
    #[error("only the turned-up suit can be ordered")]
    WrongSuit,
    /// The suit turned down from the kitty cannot be named.
    #[error("the turned-down suit cannot be named")]
    SuitTurnedDown,
    /// The dealer has to name a suit after everyone passed twice.
    #[error("dealer must name trump")]
    DealerMustCall,
}

/// Errors that can occur when the dealer discards after picking up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiscardError {
    /// The round is not waiting for a discard.
    #[error("invalid round state for discarding")]
    InvalidState,
    /// Only the dealer discards.
    #[error("not this seat's turn")]
    NotYourTurn,
    /// The card is not in the dealer's hand.
    #[error("card is not in hand")]
    CardNotInHand,
}

/// Errors that can occur when playing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The round is not in the playing phase.
    #[error("invalid round state for playing")]
    InvalidState,
    /// Not this seat's turn.
    #[error("not this seat's turn")]
    NotYourTurn,
    /// The seat is sitting out while its partner plays alone.
    #[error("seat is sitting out this round")]
    SittingOut,
    /// The card is not in the player's hand.
    #[error("card is not in hand")]
    CardNotInHand,
    /// The player holds the led suit and must follow it.
    #[error("must follow the led suit")]
    MustFollowSuit,
}

/// Errors from submitting a decision through [`Round::submit`].
///
/// [`Round::submit`]: crate::Round::submit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecisionError {
    /// Trump selection was rejected.
    #[error(transparent)]
    Trump(#[from] TrumpError),
    /// The discard was rejected.
    #[error(transparent)]
    Discard(#[from] DiscardError),
    /// The card play was rejected.
    #[error(transparent)]
    Play(#[from] PlayError),
}
