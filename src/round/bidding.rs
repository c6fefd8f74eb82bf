use tracing::{debug, info};

use crate::ai;
use crate::bidding::Call;
use crate::card::{Card, Suit};
use crate::error::{DiscardError, TrumpError};
use crate::player::{Controller, SEATS, Seat, next_seat, partner_seat, same_team};
use crate::trick::Trick;

use super::{Round, RoundState};

impl Round {
    fn ensure_bidding_turn(&self, seat: Seat) -> Result<(), TrumpError> {
        if !self.state.is_selecting_trump() {
            return Err(TrumpError::InvalidState);
        }
        if seat != self.active {
            return Err(TrumpError::NotYourTurn);
        }
        Ok(())
    }

    /// Submits a trump decision for `seat`.
    ///
    /// In the first bidding round an order-up must name the turned-up suit and
    /// makes the dealer pick up the kitty card. In the second round any suit
    /// but the turned-down one may be named. After everyone passes twice the
    /// dealer has to name a suit.
    ///
    /// # Errors
    ///
    /// Returns an error if trump is not being selected, it is not `seat`'s
    /// turn, the suit is not allowed in the current bidding round, or the
    /// forced dealer tries to pass. The round is unchanged on error.
    pub fn select_trump(&mut self, seat: Seat, call: Call, suit: Suit) -> Result<(), TrumpError> {
        self.ensure_bidding_turn(seat)?;

        match self.state {
            RoundState::SelectingTrumpRound1 => {
                let kitty_suit = self.kitty_top().ok_or(TrumpError::InvalidState)?.suit();
                if !call.is_call() {
                    debug!(seat, suit = %kitty_suit, "pass");
                    if seat == self.dealer {
                        if let Some(top) = self.kitty.top_mut() {
                            top.turn_face_down();
                        }
                        self.turned_down = Some(kitty_suit);
                        self.state = RoundState::SelectingTrumpRound2;
                    }
                    self.active = next_seat(seat);
                    return Ok(());
                }
                if suit != kitty_suit {
                    return Err(TrumpError::WrongSuit);
                }
                self.record_call(seat, call, suit);
                self.pick_up_kitty();
            }
            RoundState::SelectingTrumpRound2 | RoundState::DealerForced => {
                let turned_down = self.turned_down.ok_or(TrumpError::InvalidState)?;
                if !call.is_call() {
                    if self.state == RoundState::DealerForced {
                        return Err(TrumpError::DealerMustCall);
                    }
                    debug!(seat, "pass");
                    if seat == self.dealer {
                        self.state = RoundState::DealerForced;
                    } else {
                        self.active = next_seat(seat);
                    }
                    return Ok(());
                }
                if suit == turned_down {
                    return Err(TrumpError::SuitTurnedDown);
                }
                self.record_call(seat, call, suit);
                self.begin_play();
            }
            _ => return Err(TrumpError::InvalidState),
        }

        Ok(())
    }

    /// Submits a trump decision made by the human in the active seat.
    ///
    /// # Errors
    ///
    /// Returns [`TrumpError::NotHumanSeat`] if the active seat is automated,
    /// otherwise the errors of [`Round::select_trump`].
    pub fn human_trump_selection(&mut self, call: Call, suit: Suit) -> Result<(), TrumpError> {
        self.ensure_bidding_turn(self.active)?;
        if self.players[self.active].controller() != Controller::Human {
            return Err(TrumpError::NotHumanSeat);
        }
        self.select_trump(self.active, call, suit)
    }

    /// Submits a trump decision for the automated active seat.
    ///
    /// # Errors
    ///
    /// Returns [`TrumpError::NotAutomatedSeat`] if the active seat is human,
    /// otherwise the errors of [`Round::select_trump`].
    pub fn computer_trump_selection(&mut self, call: Call, suit: Suit) -> Result<(), TrumpError> {
        self.ensure_bidding_turn(self.active)?;
        if self.players[self.active].controller() != Controller::Automated {
            return Err(TrumpError::NotAutomatedSeat);
        }
        self.select_trump(self.active, call, suit)
    }

    /// Returns the call the bidding heuristic makes for the active seat.
    ///
    /// When the dealer is forced and the heuristic would still pass, the first
    /// allowed suit in [`Suit::ALL`] is named so bidding always ends.
    #[must_use]
    pub fn automated_trump_decision(&self) -> Option<(Call, Suit)> {
        let player = &self.players[self.active];
        let policy = self.options.loner_policy;

        match self.state {
            RoundState::SelectingTrumpRound1 => {
                let suit = self.kitty_top()?.suit();
                let partner_picks_up = same_team(self.active, self.dealer);
                let evaluation = player.call_or_pass(suit, partner_picks_up, &self.options);
                Some((evaluation.resolve(policy), suit))
            }
            RoundState::SelectingTrumpRound2 => {
                let evaluation = player.declare_trump(self.turned_down?, &self.options.thresholds);
                Some((evaluation.resolve(policy), evaluation.suit))
            }
            RoundState::DealerForced => {
                let turned_down = self.turned_down?;
                let evaluation = player.declare_trump(turned_down, &self.options.thresholds);
                match evaluation.resolve(policy) {
                    Call::Pass => {
                        let suit = Suit::ALL.into_iter().find(|&suit| suit != turned_down)?;
                        Some((Call::OrderUp, suit))
                    }
                    call => Some((call, evaluation.suit)),
                }
            }
            _ => None,
        }
    }

    /// Discards a card for the dealer after picking up the kitty card.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not waiting for a discard, `seat` is
    /// not the dealer, or the dealer does not hold `card`.
    pub fn discard(&mut self, seat: Seat, card: Card) -> Result<(), DiscardError> {
        if self.state != RoundState::DealerDiscard {
            return Err(DiscardError::InvalidState);
        }
        if seat != self.dealer {
            return Err(DiscardError::NotYourTurn);
        }
        if !self.players[seat].hand().has_in_hand(card) {
            return Err(DiscardError::CardNotInHand);
        }

        self.players[seat].discard(card);
        self.discarded = Some(card);
        debug!(seat, card = %card, "dealer discard");
        self.begin_play();
        Ok(())
    }

    /// Returns the discard the AI would make for the dealer.
    #[must_use]
    pub fn automated_discard(&self) -> Option<Card> {
        ai::choose_discard(self.players[self.dealer].hand(), self.trump?)
    }

    fn record_call(&mut self, seat: Seat, call: Call, suit: Suit) {
        self.trump = Some(suit);
        self.caller = Some(seat);
        self.alone = call == Call::Alone;
        info!(seat, suit = %suit, alone = self.alone, "trump called");
    }

    /// Moves the turned-up card into the dealer's hand.
    ///
    /// A human dealer then has to discard; an automated dealer discards
    /// straight away. A dealer whose partner went alone sits out instead.
    fn pick_up_kitty(&mut self) {
        let caller = self.caller.unwrap_or(self.active);
        if self.alone
            && partner_seat(caller) == self.dealer
            && self.options.dealer_partner_sits_out_on_pickup
        {
            debug!(dealer = self.dealer, "dealer sits out, kitty card stays");
            self.begin_play();
            return;
        }

        let Some(card) = self.kitty.deal() else {
            self.begin_play();
            return;
        };
        self.players[self.dealer].pick_up(card);
        debug!(dealer = self.dealer, card = %card, "dealer picks up");

        if self.players[self.dealer].is_human() {
            self.active = self.dealer;
            self.state = RoundState::DealerDiscard;
            return;
        }

        if let Some(discard) = self.automated_discard() {
            self.players[self.dealer].discard(discard);
            self.discarded = Some(discard);
            debug!(seat = self.dealer, card = %discard, "dealer discard");
        }
        self.begin_play();
    }

    /// Starts trick play once trump is settled.
    fn begin_play(&mut self) {
        for player in &mut self.players {
            player.set_playing(true);
        }
        if self.alone {
            if let Some(caller) = self.caller {
                self.players[partner_seat(caller)].set_playing(false);
            }
        }

        if let Some(top) = self.kitty.top_mut() {
            top.turn_face_down();
        }

        self.lead = self.next_playing_seat(self.dealer);
        self.active = self.lead;
        self.trick = Trick::new(self.lead);
        self.state = RoundState::Playing;
        debug!(lead = self.lead, "play begins");
    }

    /// The first seat after `seat` that takes part in the round.
    pub(super) fn next_playing_seat(&self, seat: Seat) -> Seat {
        let mut next = next_seat(seat);
        for _ in 0..SEATS {
            if self.players[next].is_playing() {
                return next;
            }
            next = next_seat(next);
        }
        next
    }
}
