//! Game configuration options.

/// Score thresholds used by the bidding heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BidThresholds {
    /// Minimum hand score to order up.
    pub minimum: i32,
    /// Hand score at which going alone becomes an option.
    pub loner: i32,
}

impl Default for BidThresholds {
    fn default() -> Self {
        Self {
            minimum: 7,
            loner: 10,
        }
    }
}

/// How automated seats treat a loner-eligible hand.
///
/// The bidding heuristic only reports eligibility; this policy decides
/// whether an automated seat converts it into a loner call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum LonerPolicy {
    /// Always order up with the partner.
    #[default]
    Never,
    /// Go alone whenever the hand reaches the loner threshold.
    WhenEligible,
}

/// Configuration options for a Euchre game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use euchrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_minimum_bid(6)
///     .with_score_limit(11)
///     .with_enforce_follow_suit(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Bidding thresholds.
    pub thresholds: BidThresholds,
    /// Points added to a first-round bid when the dealer is a partner, and
    /// subtracted when the dealer is an opponent.
    pub partner_pickup_bonus: i32,
    /// Score that ends the game.
    pub score_limit: u32,
    /// Policy automated seats use for loner-eligible hands.
    pub loner_policy: LonerPolicy,
    /// Whether plays that fail to follow the led suit are rejected.
    pub enforce_follow_suit: bool,
    /// Whether a dealer whose partner goes alone sits out without picking up.
    pub dealer_partner_sits_out_on_pickup: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            thresholds: BidThresholds::default(),
            partner_pickup_bonus: 2,
            score_limit: 10,
            loner_policy: LonerPolicy::Never,
            enforce_follow_suit: true,
            dealer_partner_sits_out_on_pickup: true,
        }
    }
}

impl GameOptions {
    /// Sets the minimum hand score to order up.
    ///
    /// # Example
    ///
    /// ```
    /// use euchrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_minimum_bid(8);
    /// assert_eq!(options.thresholds.minimum, 8);
    /// ```
    #[must_use]
    pub const fn with_minimum_bid(mut self, minimum: i32) -> Self {
        self.thresholds.minimum = minimum;
        self
    }

    /// Sets the hand score at which going alone becomes an option.
    ///
    /// # Example
    ///
    /// ```
    /// use euchrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_loner_bid(12);
    /// assert_eq!(options.thresholds.loner, 12);
    /// ```
    #[must_use]
    pub const fn with_loner_bid(mut self, loner: i32) -> Self {
        self.thresholds.loner = loner;
        self
    }

    /// Sets the partner pickup bonus.
    #[must_use]
    pub const fn with_partner_pickup_bonus(mut self, bonus: i32) -> Self {
        self.partner_pickup_bonus = bonus;
        self
    }

    /// Sets the score that ends the game.
    ///
    /// # Example
    ///
    /// ```
    /// use euchrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_score_limit(5);
    /// assert_eq!(options.score_limit, 5);
    /// ```
    #[must_use]
    pub const fn with_score_limit(mut self, limit: u32) -> Self {
        self.score_limit = limit;
        self
    }

    /// Sets the loner policy for automated seats.
    ///
    /// # Example
    ///
    /// ```
    /// use euchrs::{GameOptions, LonerPolicy};
    ///
    /// let options = GameOptions::default().with_loner_policy(LonerPolicy::WhenEligible);
    /// assert_eq!(options.loner_policy, LonerPolicy::WhenEligible);
    /// ```
    #[must_use]
    pub const fn with_loner_policy(mut self, policy: LonerPolicy) -> Self {
        self.loner_policy = policy;
        self
    }

    /// Sets whether plays must follow the led suit.
    #[must_use]
    pub const fn with_enforce_follow_suit(mut self, enforce: bool) -> Self {
        self.enforce_follow_suit = enforce;
        self
    }

    /// Sets whether the dealer sits out without picking up when the dealer's
    /// partner orders the card up alone.
    #[must_use]
    pub const fn with_dealer_partner_sits_out_on_pickup(mut self, sits_out: bool) -> Self {
        self.dealer_partner_sits_out_on_pickup = sits_out;
        self
    }
}
