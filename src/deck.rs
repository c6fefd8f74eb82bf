//! Deck construction, shuffling, and dealing.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{ACE, Card, DECK_SIZE, EUCHRE_RANKS, KING, Suit};
use crate::error::CardError;

/// An ordered pile of cards. Cards are dealt from the front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates the 24-card Euchre deck in canonical order.
    #[must_use]
    pub fn euchre() -> Self {
        Self::from_ranks(&EUCHRE_RANKS, &Suit::ALL)
    }

    /// Creates a full 52-card deck in canonical order.
    #[must_use]
    pub fn standard() -> Self {
        let ranks: Vec<u8> = (ACE..=KING).collect();
        Self::from_ranks(&ranks, &Suit::ALL)
    }

    /// Creates a deck containing every combination of `ranks` and `suits`,
    /// suit by suit.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] for the first rank outside
    /// `1..=13`.
    pub fn specific(ranks: &[u8], suits: &[Suit]) -> Result<Self, CardError> {
        let mut cards = Vec::with_capacity(ranks.len() * suits.len());
        for &suit in suits {
            for &rank in ranks {
                cards.push(Card::new(suit, rank)?);
            }
        }
        Ok(Self { cards })
    }

    /// Builds a deck from rank tables known to be in range.
    fn from_ranks(ranks: &[u8], suits: &[Suit]) -> Self {
        let cards = suits
            .iter()
            .flat_map(|&suit| ranks.iter().map(move |&rank| Card::new_unchecked(suit, rank)))
            .collect();
        Self { cards }
    }

    /// Wraps an explicit card order, front first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the deck in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals the front card.
    pub fn deal(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Deals up to `quantity` cards from the front.
    ///
    /// Returns fewer cards if the deck runs out.
    pub fn deal_quantity(&mut self, quantity: usize) -> Vec<Card> {
        let take = quantity.min(self.cards.len());
        self.cards.drain(..take).collect()
    }

    /// Removes the first card equal to `card`. Returns whether it was found.
    pub fn remove(&mut self, card: &Card) -> bool {
        self.cards
            .iter()
            .position(|c| c == card)
            .map(|index| self.cards.remove(index))
            .is_some()
    }

    /// Returns the front card.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the front card mutably.
    pub fn top_mut(&mut self) -> Option<&mut Card> {
        self.cards.first_mut()
    }

    /// Returns the cards, front first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the deck holds exactly the 24 Euchre cards.
    #[must_use]
    pub fn is_complete_euchre(&self) -> bool {
        self.cards.len() == DECK_SIZE
            && Self::euchre().cards.iter().all(|c| self.cards.contains(c))
    }
}
