//! A Euchre rules and decision engine with optional `no_std` support.
//!
//! The crate models the 24-card Euchre deck with its bower ranking, the
//! two-round trump bidding protocol, trick resolution, and heuristic bidding
//! and card-play for automated seats. A [`Game`] sequences [`Round`]s; each
//! round waits on one [`PendingDecision`] at a time, which a human or the
//! built-in heuristics answer.
//!
//! # Example
//!
//! ```no_run
//! use euchrs::{Game, GameOptions, Player};
//!
//! let players = [
//!     Player::automated("North"),
//!     Player::automated("East"),
//!     Player::automated("South"),
//!     Player::automated("West"),
//! ];
//! let mut game = Game::new(players, GameOptions::default(), 42);
//! game.new_round().unwrap();
//! game.round_mut().run_automated().unwrap();
//! assert!(game.round().is_complete());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod ai;
pub mod bidding;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod round;
pub mod trick;

// Re-export main types
pub use bidding::{BidEvaluation, Call, determine_call, is_loner_eligible};
pub use card::{Card, Color, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{CardError, DealError, DecisionError, DiscardError, PlayError, TrumpError};
pub use game::Game;
pub use hand::{HandRegistry, SuitCounts};
pub use options::{BidThresholds, GameOptions, LonerPolicy};
pub use player::{Controller, HAND_SIZE, Player, SEATS, Seat, next_seat, partner_seat, same_team};
pub use result::{PlayOutcome, RoundEnd, RoundRecord};
pub use round::{Decision, DecisionKind, PendingDecision, Round, RoundState};
pub use trick::{CompletedTrick, Trick, determine_trick_winner};
