use tracing::{debug, info};

use crate::card::{Card, Suit};
use crate::error::{DecisionError, PlayError};
use crate::player::{Controller, HAND_SIZE, Seat};
use crate::result::PlayOutcome;
use crate::trick::{CompletedTrick, Trick, determine_trick_winner};

use super::{Decision, Round, RoundState};

impl Round {
    /// Plays `card` from `seat` to the current trick.
    ///
    /// When every playing seat has a card on the table the trick is resolved,
    /// its winner is credited and leads the next trick. After the fifth trick
    /// the round is complete.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in play, `seat` is sitting out or
    /// is not the active seat, the card is not in hand, or the card revokes
    /// while follow-suit enforcement is on. The round is unchanged on error.
    pub fn play_card(&mut self, seat: Seat, card: Card) -> Result<PlayOutcome, PlayError> {
        if self.state != RoundState::Playing {
            return Err(PlayError::InvalidState);
        }
        let player = self.players.get(seat).ok_or(PlayError::NotYourTurn)?;
        if !player.is_playing() {
            return Err(PlayError::SittingOut);
        }
        if seat != self.active {
            return Err(PlayError::NotYourTurn);
        }
        if !player.hand().has_in_hand(card) {
            return Err(PlayError::CardNotInHand);
        }
        let trump = self.trump.ok_or(PlayError::InvalidState)?;
        if self.options.enforce_follow_suit {
            if let Some(lead_suit) = self.trick.lead_suit(trump) {
                let revokes = card.effective_suit(trump) != lead_suit
                    && player
                        .hand()
                        .iter()
                        .any(|held| held.effective_suit(trump) == lead_suit);
                if revokes {
                    return Err(PlayError::MustFollowSuit);
                }
            }
        }

        let card = self.players[seat].play_card(card);
        for other in &mut self.players {
            other.hand_mut().mark_seen(card);
        }
        self.trick.play(seat, card);
        debug!(seat, card = %card, "card played");

        let playing = self.players.iter().filter(|p| p.is_playing()).count();
        if self.trick.len() < playing {
            self.active = self.next_playing_seat(seat);
            return Ok(PlayOutcome {
                card,
                completed_trick: None,
            });
        }

        let completed = self.finish_trick(trump);
        Ok(PlayOutcome {
            card,
            completed_trick: Some(completed),
        })
    }

    fn finish_trick(&mut self, trump: Suit) -> CompletedTrick {
        let winner = determine_trick_winner(self.trick.cards(), self.lead, trump);
        self.players[winner].add_trick();

        let completed = CompletedTrick {
            trick: self.trick,
            winner,
        };
        self.tricks.push(completed);
        info!(
            winner,
            tricks = self.players[winner].tricks_won(),
            "trick won"
        );

        self.lead = winner;
        self.active = winner;
        self.trick = Trick::new(winner);

        if self.tricks.len() >= HAND_SIZE {
            self.state = RoundState::Complete;
            info!(
                caller = ?self.caller,
                alone = self.alone,
                "round complete"
            );
        }

        completed
    }

    /// Returns the card the AI would play for the active seat.
    #[must_use]
    pub fn automated_play(&self) -> Option<Card> {
        if self.state != RoundState::Playing {
            return None;
        }
        let player = &self.players[self.active];
        player.best_play(&self.trick, self.trump?, self.caller?)
    }

    /// Returns what the built-in heuristics would decide for the active seat.
    #[must_use]
    pub fn automated_decision(&self) -> Option<Decision> {
        match self.state {
            RoundState::SelectingTrumpRound1
            | RoundState::SelectingTrumpRound2
            | RoundState::DealerForced => self
                .automated_trump_decision()
                .map(|(call, suit)| Decision::Trump { call, suit }),
            RoundState::DealerDiscard => self.automated_discard().map(Decision::Discard),
            RoundState::Playing => self.automated_play().map(Decision::Play),
            RoundState::Dealing | RoundState::Complete => None,
        }
    }

    /// Applies a decision for `seat`, whoever made it.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying trump selection, discard, or play.
    pub fn submit(&mut self, seat: Seat, decision: Decision) -> Result<(), DecisionError> {
        match decision {
            Decision::Trump { call, suit } => self.select_trump(seat, call, suit)?,
            Decision::Discard(card) => self.discard(seat, card)?,
            Decision::Play(card) => {
                self.play_card(seat, card)?;
            }
        }
        Ok(())
    }

    /// Makes decisions for automated seats until a human has to act or the
    /// round is complete. Returns the number of decisions made.
    ///
    /// # Errors
    ///
    /// Returns an error if a heuristic decision is rejected.
    pub fn run_automated(&mut self) -> Result<usize, DecisionError> {
        let mut steps = 0;
        while let Some(pending) = self.pending_decision() {
            if pending.controller == Controller::Human {
                break;
            }
            let Some(decision) = self.automated_decision() else {
                break;
            };
            self.submit(pending.seat, decision)?;
            steps += 1;
        }
        Ok(steps)
    }
}
