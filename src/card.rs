//! Card and suit types, including the bower relationships between suits.

use core::fmt;
use core::hash::{Hash, Hasher};

use crate::error::CardError;

/// Rank of an Ace.
pub const ACE: u8 = 1;
/// Rank of a Jack.
pub const JACK: u8 = 11;
/// Rank of a Queen.
pub const QUEEN: u8 = 12;
/// Rank of a King.
pub const KING: u8 = 13;

/// Ranks that make up a Euchre deck, in dealing order.
pub const EUCHRE_RANKS: [u8; 6] = [9, 10, JACK, QUEEN, KING, ACE];

/// Number of cards in a Euchre deck.
pub const DECK_SIZE: usize = 24;

/// Suit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Spades and Clubs.
    Black,
    /// Diamonds and Hearts.
    Red,
}

impl Color {
    /// Returns a human readable name for the color.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "Black",
            Self::Red => "Red",
        }
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
}

impl Suit {
    /// All suits in canonical enumeration order.
    ///
    /// Tie-breaks in the bidding heuristic and the dealer-forced fallback
    /// follow this order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Diamonds, Self::Clubs, Self::Hearts];

    /// Returns the position of the suit in [`Suit::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the suit at `index` in [`Suit::ALL`].
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Spades),
            1 => Some(Self::Diamonds),
            2 => Some(Self::Clubs),
            3 => Some(Self::Hearts),
            _ => None,
        }
    }

    /// Returns the color of the suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Spades | Self::Clubs => Color::Black,
            Self::Diamonds | Self::Hearts => Color::Red,
        }
    }

    /// Returns whether `other` is the *other* suit of the same color.
    ///
    /// A suit is never the same color as itself under this definition, which
    /// is what bower detection needs.
    #[must_use]
    pub fn same_color(self, other: Self) -> bool {
        self != other && self.color() == other.color()
    }

    /// Returns the suit sharing this suit's color.
    ///
    /// With `self` as trump, the Jack of the returned suit is the left bower.
    #[must_use]
    pub const fn weak_color(self) -> Self {
        match self {
            Self::Spades => Self::Clubs,
            Self::Clubs => Self::Spades,
            Self::Diamonds => Self::Hearts,
            Self::Hearts => Self::Diamonds,
        }
    }

    /// Returns the two suits of the opposite color, in canonical order.
    #[must_use]
    pub const fn opposite_colors(self) -> [Self; 2] {
        match self.color() {
            Color::Black => [Self::Diamonds, Self::Hearts],
            Color::Red => [Self::Spades, Self::Clubs],
        }
    }

    /// Returns a human readable name for the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "Spades",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Hearts => "Hearts",
        }
    }

    const fn symbol(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Hearts => '♥',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
///
/// Equality and hashing only consider rank and suit; `face_up` is display
/// state that matters while the card sits on top of the kitty.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    suit: Suit,
    rank: u8,
    face_up: bool,
}

impl Card {
    /// Creates a new face-down card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `rank` is outside `1..=13`.
    pub const fn new(suit: Suit, rank: u8) -> Result<Self, CardError> {
        if rank < ACE || rank > KING {
            return Err(CardError::InvalidRank(rank));
        }
        Ok(Self::new_unchecked(suit, rank))
    }

    /// Builds a card whose rank is already known to be valid.
    pub(crate) const fn new_unchecked(suit: Suit, rank: u8) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// The suit printed on the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns whether the card is face up.
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Turns the card face up.
    pub const fn turn_face_up(&mut self) {
        self.face_up = true;
    }

    /// Turns the card face down.
    pub const fn turn_face_down(&mut self) {
        self.face_up = false;
    }

    /// Returns the color of the card's suit.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    /// Rank with the Ace moved above the King (Ace = 14).
    ///
    /// Every ordering inside a suit goes through this value; the raw rank
    /// puts the Ace at the bottom.
    #[must_use]
    pub const fn high_rank(&self) -> u8 {
        if self.rank == ACE { 14 } else { self.rank }
    }

    /// Returns whether the card is the Ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == ACE
    }

    /// Returns whether the card is the Jack of trump.
    #[must_use]
    pub fn is_right_bower(&self, trump: Suit) -> bool {
        self.rank == JACK && self.suit == trump
    }

    /// Returns whether the card is the Jack of the suit sharing trump's color.
    #[must_use]
    pub fn is_left_bower(&self, trump: Suit) -> bool {
        self.rank == JACK && self.suit.same_color(trump)
    }

    /// Returns whether the card is either bower.
    #[must_use]
    pub fn is_bower(&self, trump: Suit) -> bool {
        self.is_right_bower(trump) || self.is_left_bower(trump)
    }

    /// Returns the suit the card plays as: the left bower belongs to trump.
    #[must_use]
    pub fn effective_suit(&self, trump: Suit) -> Suit {
        if self.is_left_bower(trump) {
            trump
        } else {
            self.suit
        }
    }

    /// Returns whether the card plays as trump.
    #[must_use]
    pub fn is_trump(&self, trump: Suit) -> bool {
        self.effective_suit(trump) == trump
    }

    /// Returns whether this card beats `other` in a trick led with `lead`.
    ///
    /// Precedence is right bower, left bower, other trump, lead suit, then
    /// everything else. Within a suit the Ace is high. When neither card is
    /// trump or lead suit and the suits differ, neither beats the other.
    #[must_use]
    pub fn beats(&self, other: &Self, lead: Suit, trump: Suit) -> bool {
        if self.is_right_bower(trump) {
            return true;
        }
        if other.is_right_bower(trump) {
            return false;
        }
        if self.is_left_bower(trump) {
            return true;
        }
        if other.is_left_bower(trump) {
            return false;
        }

        match (self.suit == trump, other.suit == trump) {
            (true, false) => return true,
            (false, true) => return false,
            _ => {}
        }

        if self.suit == other.suit {
            return self.high_rank() > other.high_rank();
        }

        self.suit == lead && other.suit != lead
    }

    fn rank_symbol(self) -> &'static str {
        match self.rank {
            ACE => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            JACK => "J",
            QUEEN => "Q",
            _ => "K",
        }
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.suit.hash(state);
        self.rank.hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_symbol(), self.suit.symbol())
    }
}
