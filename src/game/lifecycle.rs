use rand::seq::SliceRandom;
use tracing::info;

use crate::error::DealError;
use crate::player::{Player, SEATS, next_seat};
use crate::result::RoundEnd;
use crate::round::{Round, RoundState};

use super::Game;

/// Tournament rotation: seat 0 stays, the last player moves to seat 1, and
/// everyone else shifts one seat to the left of where they were.
fn rotate(players: &mut [Player; SEATS]) {
    players[1..].rotate_right(1);
}

impl Game {
    /// Starts a new game, optionally rotating seats to change partnerships.
    ///
    /// Scores are cleared and the current round is replaced by an undealt
    /// one. Wins, losses, and the round history carry over.
    pub fn new_game(&mut self, change_teams: bool) {
        self.reseat(|players, _| {
            if change_teams {
                rotate(players);
            }
            for player in players.iter_mut() {
                player.clear_score();
                player.reset_for_round();
            }
        });
        self.game_over = false;
        info!(change_teams, "new game");
    }

    /// Rotates seats so three players get new partners.
    ///
    /// Any round in progress is abandoned and replaced by an undealt one.
    pub fn rotate_seats(&mut self) {
        self.reseat(|players, _| rotate(players));
    }

    /// Shuffles the seating order.
    ///
    /// Any round in progress is abandoned and replaced by an undealt one.
    pub fn randomize_seats(&mut self) {
        self.reseat(|players, rng| players.shuffle(rng));
    }

    /// Resets every player's score to zero.
    pub fn clear_scores(&mut self) {
        for player in self.round.players_mut() {
            player.clear_score();
        }
    }

    /// Returns whether any player has reached the score limit.
    #[must_use]
    pub fn someone_won(&self) -> bool {
        self.players()
            .iter()
            .any(|player| player.score() >= self.options.score_limit)
    }

    /// Tallies a win for every player at or above the score limit and a loss
    /// for everyone else.
    pub fn add_results(&mut self) {
        let limit = self.options.score_limit;
        for player in self.round.players_mut() {
            player.record_result(player.score() >= limit);
        }
    }

    /// Deals the next round.
    ///
    /// The first call deals the round created with the game. Later calls
    /// archive the current round, pass the deal to the left, and deal a fresh
    /// round.
    ///
    /// # Errors
    ///
    /// Returns an error if dealing fails.
    pub fn new_round(&mut self) -> Result<(), DealError> {
        if self.round.state() != RoundState::Dealing {
            self.archive_round();
            self.dealer = next_seat(self.dealer);
            let players = self.round.take_players();
            self.round = Round::new(players, self.dealer, self.options);
            self.archived = false;
        }
        self.round.begin(&mut self.rng)
    }

    /// Closes out the current round.
    ///
    /// If someone has reached the score limit, wins and losses are tallied
    /// (once per game) and the game is over. Otherwise the next round is
    /// dealt.
    ///
    /// # Errors
    ///
    /// Returns an error if dealing the next round fails.
    pub fn end_round(&mut self) -> Result<RoundEnd, DealError> {
        self.archive_round();
        if self.someone_won() {
            if !self.game_over {
                self.add_results();
                self.game_over = true;
                info!(rounds = self.history.len(), "game over");
            }
            return Ok(RoundEnd::GameOver);
        }
        self.new_round()?;
        Ok(RoundEnd::NextRound)
    }
}
