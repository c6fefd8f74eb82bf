//! Card-play heuristics for automated seats.
//!
//! A single pass over the hand and the cards already on the table; there is
//! no look-ahead.

use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::hand::HandRegistry;
use crate::player::{Seat, partner_seat, same_team};
use crate::trick::Trick;

/// Chooses the card `seat` should play to `trick`.
///
/// Leading: the partnership that named trump leads its strongest trump,
/// otherwise the hand leads off-suit. Following: follow suit as cheaply as
/// possible while still trying to take the trick, unless the partner already
/// wins it with an Ace; when void, trump in with the lowest winning trump or
/// throw off.
///
/// Returns `None` only when the hand is empty.
#[must_use]
pub fn best_play(
    hand: &HandRegistry,
    seat: Seat,
    trick: &Trick,
    trump: Suit,
    caller: Seat,
) -> Option<Card> {
    let strongest_trump = || hand.sort(trump, true).last().copied();

    let (Some((winning_seat, winning_card)), Some(lead_suit)) =
        (trick.current_winner(trump), trick.lead_suit(trump))
    else {
        if same_team(seat, caller) {
            if let Some(card) = strongest_trump() {
                return Some(card);
            }
        }
        return hand.strongest_offsuit(trump).or_else(strongest_trump);
    };

    let team_winning = winning_seat == partner_seat(seat);

    let mut in_suit = Vec::new();
    let mut trumps = Vec::new();
    let mut other = Vec::new();
    for card in hand.iter() {
        let suit = card.effective_suit(trump);
        if suit == lead_suit {
            in_suit.push(card);
        } else if suit == trump {
            trumps.push(card);
        } else {
            other.push(card);
        }
    }

    if !in_suit.is_empty() {
        if !team_winning || !winning_card.is_ace() {
            let winners = in_suit
                .iter()
                .copied()
                .filter(|card| card.beats(&winning_card, lead_suit, trump));
            if let Some(card) = lowest(winners, lead_suit, trump) {
                return Some(card);
            }
        }
        return lowest(in_suit.into_iter(), lead_suit, trump);
    }

    if !team_winning {
        let winners = trumps
            .iter()
            .copied()
            .filter(|card| card.beats(&winning_card, lead_suit, trump));
        if let Some(card) = lowest(winners, lead_suit, trump) {
            return Some(card);
        }
    } else if let Some(card) = short_suit_card(hand, trump) {
        return Some(card);
    }

    lowest(other.into_iter(), lead_suit, trump)
        .or_else(|| lowest(trumps.into_iter(), lead_suit, trump))
}

/// Chooses the card a dealer throws away after picking up the kitty card.
///
/// The lowest non-trump card, or the lowest trump if the hand is all trump.
#[must_use]
pub fn choose_discard(hand: &HandRegistry, trump: Suit) -> Option<Card> {
    let (trumps, other): (Vec<Card>, Vec<Card>) =
        hand.iter().partition(|card| card.is_trump(trump));
    lowest(other.into_iter(), trump, trump).or_else(|| lowest(trumps.into_iter(), trump, trump))
}

/// Whether `a` ranks below `b` in the current trick.
///
/// Falls back to Ace-high rank when neither card can beat the other.
fn is_weaker(a: &Card, b: &Card, lead: Suit, trump: Suit) -> bool {
    b.beats(a, lead, trump) || (!a.beats(b, lead, trump) && a.high_rank() < b.high_rank())
}

fn lowest(cards: impl Iterator<Item = Card>, lead: Suit, trump: Suit) -> Option<Card> {
    cards.fold(None, |low: Option<Card>, card| match low {
        Some(current) if !is_weaker(&card, &current, lead, trump) => Some(current),
        _ => Some(card),
    })
}

/// The only card of a non-trump suit held as a singleton, if any.
fn short_suit_card(hand: &HandRegistry, trump: Suit) -> Option<Card> {
    let counts = hand.count_suits(trump);
    let suit = Suit::ALL
        .into_iter()
        .find(|&suit| suit != trump && counts.get(suit) == 1)?;
    hand.iter().find(|card| card.effective_suit(trump) == suit)
}
