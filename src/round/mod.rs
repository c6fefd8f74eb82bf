//! One hand of Euchre: the deal, trump bidding, and trick play.

use alloc::vec::Vec;

use rand::Rng;
use tracing::debug;

use crate::card::{Card, Suit};
use crate::deck::Deck;
use crate::error::DealError;
use crate::options::GameOptions;
use crate::player::{HAND_SIZE, Player, SEATS, Seat, next_seat};
use crate::result::RoundRecord;
use crate::trick::{CompletedTrick, Trick};

mod bidding;
mod play;
pub mod state;

pub use state::{Decision, DecisionKind, PendingDecision, RoundState};

/// A single hand of play at a four-seat table.
///
/// The round owns the players for its duration. Every mutating entry point
/// checks the current state and the acting seat first and rejects the call
/// without side effects when either is wrong.
#[derive(Debug, Clone)]
pub struct Round {
    players: [Player; SEATS],
    options: GameOptions,
    state: RoundState,
    dealer: Seat,
    /// Undealt cards. The front card is the one turned up for bidding.
    kitty: Deck,
    trump: Option<Suit>,
    turned_down: Option<Suit>,
    caller: Option<Seat>,
    alone: bool,
    lead: Seat,
    active: Seat,
    trick: Trick,
    tricks: Vec<CompletedTrick>,
    discarded: Option<Card>,
}

impl Round {
    /// Seats `players` in order and prepares a round for `dealer` to deal.
    #[must_use]
    pub fn new(mut players: [Player; SEATS], dealer: Seat, options: GameOptions) -> Self {
        for (seat, player) in players.iter_mut().enumerate() {
            player.set_seat(seat);
        }
        let dealer = dealer % SEATS;
        let first = next_seat(dealer);

        Self {
            players,
            options,
            state: RoundState::Dealing,
            dealer,
            kitty: Deck::default(),
            trump: None,
            turned_down: None,
            caller: None,
            alone: false,
            lead: first,
            active: first,
            trick: Trick::new(first),
            tricks: Vec::new(),
            discarded: None,
        }
    }

    /// Shuffles a fresh Euchre deck and deals it.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has already been dealt.
    pub fn begin<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), DealError> {
        let mut deck = Deck::euchre();
        deck.shuffle(rng);
        self.begin_with_deck(deck)
    }

    /// Deals `deck` as ordered, without shuffling.
    ///
    /// Five cards go to each seat in turn starting left of the dealer; the
    /// rest form the kitty with its front card turned face up.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has already been dealt, or if the deck
    /// cannot give every seat a full hand and still turn up a kitty card.
    /// Nothing is dealt in either case.
    pub fn begin_with_deck(&mut self, mut deck: Deck) -> Result<(), DealError> {
        if self.state != RoundState::Dealing {
            return Err(DealError::InvalidState);
        }

        // Full hands plus the card turned up for bidding.
        let needed = HAND_SIZE * SEATS + 1;
        if deck.len() < needed {
            return Err(DealError::NotEnoughCards {
                needed,
                remaining: deck.len(),
            });
        }

        let mut seat = next_seat(self.dealer);
        for _ in 0..SEATS {
            let cards = deck.deal_quantity(HAND_SIZE);
            let player = &mut self.players[seat];
            player.reset_for_round();
            player.hand_mut().add_cards(&cards);
            seat = next_seat(seat);
        }

        if let Some(top) = deck.top_mut() {
            top.turn_face_up();
        }
        self.kitty = deck;
        self.active = next_seat(self.dealer);
        self.state = RoundState::SelectingTrumpRound1;

        debug!(
            dealer = self.dealer,
            kitty_top = ?self.kitty_top(),
            "round dealt"
        );

        Ok(())
    }

    /// Returns the round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns whether trump is still being chosen.
    #[must_use]
    pub const fn is_selecting_trump(&self) -> bool {
        self.state.is_selecting_trump()
    }

    /// Returns whether every trick has been played.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == RoundState::Complete
    }

    /// Returns the seat expected to act next.
    #[must_use]
    pub const fn active_player(&self) -> Seat {
        self.active
    }

    /// Returns the dealer's seat.
    #[must_use]
    pub const fn dealer(&self) -> Seat {
        self.dealer
    }

    /// Returns the trump suit once it has been named.
    #[must_use]
    pub const fn trump(&self) -> Option<Suit> {
        self.trump
    }

    /// Returns the suit turned down after the first bidding round.
    #[must_use]
    pub const fn turned_down_suit(&self) -> Option<Suit> {
        self.turned_down
    }

    /// Returns the seat that named trump.
    #[must_use]
    pub const fn caller(&self) -> Option<Seat> {
        self.caller
    }

    /// Returns whether the caller is playing alone.
    #[must_use]
    pub const fn is_alone(&self) -> bool {
        self.alone
    }

    /// Returns the seat leading the current trick.
    #[must_use]
    pub const fn lead(&self) -> Seat {
        self.lead
    }

    /// Returns the undealt cards.
    #[must_use]
    pub fn kitty(&self) -> &[Card] {
        self.kitty.cards()
    }

    /// Returns the top kitty card.
    #[must_use]
    pub fn kitty_top(&self) -> Option<Card> {
        self.kitty.top().copied()
    }

    /// Returns the card the dealer discarded after picking up, if any.
    #[must_use]
    pub const fn discarded(&self) -> Option<Card> {
        self.discarded
    }

    /// Returns the players in seat order.
    #[must_use]
    pub const fn players(&self) -> &[Player; SEATS] {
        &self.players
    }

    /// Returns the player in `seat`.
    #[must_use]
    pub fn player(&self, seat: Seat) -> Option<&Player> {
        self.players.get(seat)
    }

    pub(crate) const fn players_mut(&mut self) -> &mut [Player; SEATS] {
        &mut self.players
    }

    pub(crate) fn take_players(&mut self) -> [Player; SEATS] {
        core::mem::take(&mut self.players)
    }

    /// Returns the options the round was created with.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the trick in progress.
    #[must_use]
    pub const fn current_trick(&self) -> &Trick {
        &self.trick
    }

    /// Returns the finished tricks in order.
    #[must_use]
    pub fn tricks(&self) -> &[CompletedTrick] {
        &self.tricks
    }

    /// Returns tricks won by `seat` this round.
    #[must_use]
    pub fn tricks_won(&self, seat: Seat) -> u8 {
        self.players.get(seat).map_or(0, Player::tricks_won)
    }

    /// Returns the summary of a finished round.
    #[must_use]
    pub fn record(&self) -> Option<RoundRecord> {
        if self.state != RoundState::Complete {
            return None;
        }
        Some(RoundRecord {
            dealer: self.dealer,
            trump: self.trump?,
            caller: self.caller?,
            alone: self.alone,
            tricks_won: core::array::from_fn(|seat| self.players[seat].tricks_won()),
        })
    }

    /// Returns the decision the round is waiting for.
    #[must_use]
    pub fn pending_decision(&self) -> Option<PendingDecision> {
        let kind = match self.state {
            RoundState::Dealing | RoundState::Complete => return None,
            RoundState::SelectingTrumpRound1 => DecisionKind::OrderUp {
                suit: self.kitty_top()?.suit(),
            },
            RoundState::SelectingTrumpRound2 => DecisionKind::NameTrump {
                excluded: self.turned_down?,
            },
            RoundState::DealerForced => DecisionKind::DealerMustName {
                excluded: self.turned_down?,
            },
            RoundState::DealerDiscard => DecisionKind::Discard,
            RoundState::Playing => DecisionKind::Play,
        };
        Some(PendingDecision {
            seat: self.active,
            controller: self.players[self.active].controller(),
            kind,
        })
    }
}
