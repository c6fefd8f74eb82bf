//! Game engine and round history.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::options::GameOptions;
use crate::player::{Player, SEATS, Seat, same_team};
use crate::result::RoundRecord;
use crate::round::Round;

mod lifecycle;

/// A Euchre game: four seated players, a sequence of rounds, and the tallies
/// that carry across them.
///
/// The game owns the current [`Round`], which in turn owns the players while
/// it is in progress. Scoring is external: tricks won are reported through
/// [`RoundRecord`] and points are credited with [`Game::add_points`].
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// The round being played, or waiting to be dealt.
    round: Round,
    /// Seat of the current dealer.
    dealer: Seat,
    /// Finished rounds, oldest first.
    history: Vec<RoundRecord>,
    /// Whether the current round is already in the history.
    archived: bool,
    /// Whether wins and losses were tallied for the current game.
    game_over: bool,
    /// Random number generator for shuffling.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed. Seat 0 deals first.
    ///
    /// No cards are dealt until [`Game::new_round`] is called.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use euchrs::{Game, GameOptions, Player};
    ///
    /// let players = [
    ///     Player::automated("North"),
    ///     Player::automated("East"),
    ///     Player::human("South"),
    ///     Player::automated("West"),
    /// ];
    /// let mut game = Game::new(players, GameOptions::default(), 42);
    /// game.new_round().unwrap();
    /// ```
    #[must_use]
    pub fn new(players: [Player; SEATS], options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            round: Round::new(players, 0, options),
            dealer: 0,
            history: Vec::new(),
            archived: false,
            game_over: false,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the current round.
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    /// Returns the current round for submitting decisions.
    pub const fn round_mut(&mut self) -> &mut Round {
        &mut self.round
    }

    /// Returns the players in seat order.
    #[must_use]
    pub const fn players(&self) -> &[Player; SEATS] {
        self.round.players()
    }

    /// Returns the player in `seat`.
    #[must_use]
    pub fn player(&self, seat: Seat) -> Option<&Player> {
        self.round.player(seat)
    }

    /// Returns the current dealer's seat.
    #[must_use]
    pub const fn dealer(&self) -> Seat {
        self.dealer
    }

    /// Returns finished rounds, oldest first.
    #[must_use]
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// Returns whether the game has ended.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.game_over
    }

    /// Credits `points` to the player in `seat`.
    ///
    /// Returns `false` if the seat does not exist.
    pub fn add_points(&mut self, seat: Seat, points: u32) -> bool {
        let Some(player) = self.round.players_mut().get_mut(seat) else {
            return false;
        };
        player.add_points(points);
        true
    }

    /// Credits `points` to both players of `seat`'s partnership.
    pub fn add_team_points(&mut self, seat: Seat, points: u32) {
        for player in self.round.players_mut() {
            if same_team(player.seat(), seat) {
                player.add_points(points);
            }
        }
    }

    /// Appends the current round to the history once it is complete.
    fn archive_round(&mut self) {
        if self.archived {
            return;
        }
        if let Some(record) = self.round.record() {
            self.history.push(record);
            self.archived = true;
        }
    }

    /// Replaces the current round with an undealt one over the same players.
    fn reseat(&mut self, arrange: impl FnOnce(&mut [Player; SEATS], &mut ChaCha8Rng)) {
        self.archive_round();
        let mut players = self.round.take_players();
        arrange(&mut players, &mut self.rng);
        self.round = Round::new(players, self.dealer, self.options);
        self.archived = false;
    }
}
