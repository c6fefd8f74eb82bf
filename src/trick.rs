//! Tricks and trick resolution.

use crate::card::{Card, Suit};
use crate::player::{SEATS, Seat, next_seat};

/// Cards played to a trick, indexed by seat.
///
/// A trick may be partial while play is in progress, and a seat sitting out
/// for a loner never has a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trick {
    lead: Seat,
    cards: [Option<Card>; SEATS],
}

impl Trick {
    /// Creates an empty trick led by `lead`.
    #[must_use]
    pub const fn new(lead: Seat) -> Self {
        Self {
            lead: lead % SEATS,
            cards: [None; SEATS],
        }
    }

    /// Builds a trick from cards already on the table.
    #[must_use]
    pub const fn from_cards(lead: Seat, cards: [Option<Card>; SEATS]) -> Self {
        Self {
            lead: lead % SEATS,
            cards,
        }
    }

    /// Returns the leading seat.
    #[must_use]
    pub const fn lead(&self) -> Seat {
        self.lead
    }

    /// Returns the card played by the leading seat.
    #[must_use]
    pub const fn lead_card(&self) -> Option<Card> {
        self.cards[self.lead]
    }

    /// Returns the suit that must be followed: the led card's effective suit.
    #[must_use]
    pub fn lead_suit(&self, trump: Suit) -> Option<Suit> {
        self.lead_card().map(|card| card.effective_suit(trump))
    }

    /// Returns the card played by `seat`.
    #[must_use]
    pub fn card(&self, seat: Seat) -> Option<Card> {
        self.cards.get(seat).copied().flatten()
    }

    /// Returns the cards indexed by seat.
    #[must_use]
    pub const fn cards(&self) -> &[Option<Card>; SEATS] {
        &self.cards
    }

    pub(crate) const fn play(&mut self, seat: Seat, card: Card) {
        self.cards[seat] = Some(card);
    }

    /// Iterates `(seat, card)` in playing order from the lead.
    pub fn played(&self) -> impl Iterator<Item = (Seat, Card)> + '_ {
        let mut seat = self.lead;
        (0..SEATS).filter_map(move |_| {
            let current = seat;
            seat = next_seat(seat);
            self.cards[current].map(|card| (current, card))
        })
    }

    /// Returns the number of cards played.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.iter().flatten().count()
    }

    /// Returns whether nothing has been played yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.iter().all(Option::is_none)
    }

    /// Returns the seat and card currently winning the trick.
    #[must_use]
    pub fn current_winner(&self, trump: Suit) -> Option<(Seat, Card)> {
        let lead_card = self.lead_card()?;
        let winner = determine_trick_winner(&self.cards, self.lead, trump);
        Some((winner, self.cards[winner].unwrap_or(lead_card)))
    }
}

/// Returns the seat whose card wins `cards`.
///
/// Starting from `lead`, each later seat in order takes over when its card
/// beats the current winner under the led suit and `trump`. Seats without a
/// card are skipped. If the lead has not played, the lead is returned.
#[must_use]
pub fn determine_trick_winner(cards: &[Option<Card>; SEATS], lead: Seat, trump: Suit) -> Seat {
    let lead = lead % SEATS;
    let Some(lead_card) = cards[lead] else {
        return lead;
    };
    let lead_suit = lead_card.effective_suit(trump);

    let mut winner = lead;
    let mut winning_card = lead_card;
    let mut seat = next_seat(lead);
    while seat != lead {
        if let Some(card) = cards[seat] {
            if card.beats(&winning_card, lead_suit, trump) {
                winner = seat;
                winning_card = card;
            }
        }
        seat = next_seat(seat);
    }
    winner
}

/// A finished trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedTrick {
    /// The cards as played.
    pub trick: Trick,
    /// The seat that won.
    pub winner: Seat,
}
