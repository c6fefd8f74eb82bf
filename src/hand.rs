//! Per-player record of held and seen cards.

use alloc::vec::Vec;

use crate::card::{ACE, Card, JACK, KING, Suit};

/// Rank slots per suit. Index 0 is unused so ranks index directly.
const RANK_SLOTS: usize = 14;

type PresenceMatrix = [[bool; RANK_SLOTS]; 4];

/// Card counts indexed by suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SuitCounts([usize; 4]);

impl SuitCounts {
    /// Returns the count for `suit`.
    #[must_use]
    pub const fn get(&self, suit: Suit) -> usize {
        self.0[suit.index()]
    }

    /// Iterates `(suit, count)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Suit, usize)> + '_ {
        Suit::ALL.into_iter().map(move |suit| (suit, self.get(suit)))
    }

    /// Returns how many suits have no cards.
    #[must_use]
    pub fn voids(&self) -> usize {
        self.0.iter().filter(|&&count| count == 0).count()
    }
}

/// Which cards a player holds and which cards the player has seen leave play.
///
/// Both sets are fixed-size presence matrices over suit and rank. Removing a
/// card from the hand always marks it seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandRegistry {
    held: PresenceMatrix,
    seen: PresenceMatrix,
}

impl HandRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            held: [[false; RANK_SLOTS]; 4],
            seen: [[false; RANK_SLOTS]; 4],
        }
    }

    /// Forgets every held and seen card.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Adds a card to the hand.
    pub fn add_to_hand(&mut self, card: Card) {
        self.held[card.suit().index()][card.rank() as usize] = true;
    }

    /// Adds several cards to the hand.
    pub fn add_cards(&mut self, cards: &[Card]) {
        for &card in cards {
            self.add_to_hand(card);
        }
    }

    /// Removes a card from the hand and marks it seen.
    ///
    /// Removing a card that is not held only marks it seen.
    pub fn remove_from_hand(&mut self, card: Card) {
        let (suit, rank) = (card.suit().index(), card.rank() as usize);
        self.held[suit][rank] = false;
        self.seen[suit][rank] = true;
    }

    /// Records that a card has been seen.
    pub fn mark_seen(&mut self, card: Card) {
        self.seen[card.suit().index()][card.rank() as usize] = true;
    }

    /// Returns whether the card is in the hand.
    #[must_use]
    pub fn has_in_hand(&self, card: Card) -> bool {
        self.held[card.suit().index()][card.rank() as usize]
    }

    /// Returns whether the card has been seen.
    #[must_use]
    pub fn has_seen(&self, card: Card) -> bool {
        self.seen[card.suit().index()][card.rank() as usize]
    }

    fn holds(&self, suit: Suit, rank: u8) -> bool {
        self.held[suit.index()][rank as usize]
    }

    /// Iterates held cards in suit order, raw rank ascending.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        Suit::ALL.into_iter().flat_map(move |suit| self.suit_iter(suit))
    }

    fn suit_iter(&self, suit: Suit) -> impl Iterator<Item = Card> + '_ {
        (ACE..=KING)
            .filter(move |&rank| self.holds(suit, rank))
            .map(move |rank| Card::new_unchecked(suit, rank))
    }

    /// Returns the held cards.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Card> {
        self.iter().collect()
    }

    /// Returns the held cards of the literal `suit`.
    #[must_use]
    pub fn cards_in_suit(&self, suit: Suit) -> Vec<Card> {
        self.suit_iter(suit).collect()
    }

    /// Returns the number of held cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.held.iter().flatten().filter(|&&held| held).count()
    }

    /// Returns whether no cards are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Counts held cards of the literal `suit`.
    #[must_use]
    pub fn count_suit(&self, suit: Suit) -> usize {
        self.held[suit.index()].iter().filter(|&&held| held).count()
    }

    /// Counts held cards per effective suit: the left bower counts as trump.
    #[must_use]
    pub fn count_suits(&self, trump: Suit) -> SuitCounts {
        let mut counts = [0; 4];
        for card in self.iter() {
            counts[card.effective_suit(trump).index()] += 1;
        }
        SuitCounts(counts)
    }

    /// Returns whether the hand holds the left bower for `trump`.
    #[must_use]
    pub fn has_left_bower(&self, trump: Suit) -> bool {
        self.holds(trump.weak_color(), JACK)
    }

    /// Returns the held cards of `suit`, weakest first.
    ///
    /// Plain ranks come in ascending order with the Ace last. When `is_trump`
    /// is set the left bower and then the right bower trail the sequence, so
    /// the strongest trump is the last element. Without `is_trump` the Jack is
    /// an ordinary card between the Ten and the Queen.
    #[must_use]
    pub fn sort(&self, suit: Suit, is_trump: bool) -> Vec<Card> {
        let mut cards = Vec::new();
        for rank in 2..=KING {
            if rank == JACK && is_trump {
                continue;
            }
            if self.holds(suit, rank) {
                cards.push(Card::new_unchecked(suit, rank));
            }
        }
        if self.holds(suit, ACE) {
            cards.push(Card::new_unchecked(suit, ACE));
        }
        if is_trump {
            if self.has_left_bower(suit) {
                cards.push(Card::new_unchecked(suit.weak_color(), JACK));
            }
            if self.holds(suit, JACK) {
                cards.push(Card::new_unchecked(suit, JACK));
            }
        }
        cards
    }

    /// Picks a lead card from outside trump.
    ///
    /// In order of preference: the card of an opposite-color suit held as a
    /// singleton (leading it creates a void), the highest card among the
    /// opposite-color suits, then the highest non-trump card of any suit.
    /// Returns `None` when every held card is trump.
    #[must_use]
    pub fn strongest_offsuit(&self, trump: Suit) -> Option<Card> {
        let opposite = trump.opposite_colors();

        for suit in opposite {
            if self.count_suit(suit) == 1 {
                return self.suit_iter(suit).next();
            }
        }

        strongest_by_rank(opposite.into_iter().flat_map(|suit| self.suit_iter(suit))).or_else(
            || strongest_by_rank(self.iter().filter(|card| !card.is_trump(trump))),
        )
    }
}

/// Highest card by Ace-high rank; the first one seen wins ties.
fn strongest_by_rank(cards: impl Iterator<Item = Card>) -> Option<Card> {
    cards.fold(None, |best: Option<Card>, card| match best {
        Some(current) if current.high_rank() >= card.high_rank() => Some(current),
        _ => Some(card),
    })
}
