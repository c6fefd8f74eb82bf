//! Round tests over stacked decks.

use euchrs::card::{ACE, JACK, KING, QUEEN};
use euchrs::{
    Call, Card, DealError, Decision, DecisionKind, Deck, DiscardError, GameOptions, LonerPolicy,
    PlayError, Player, Round, RoundState, SEATS, Suit, TrumpError,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank).unwrap()
}

fn automated_players() -> [Player; SEATS] {
    [
        Player::automated("North"),
        Player::automated("East"),
        Player::automated("South"),
        Player::automated("West"),
    ]
}

/// Hands for seats 1, 2, 3 and 0 (deal order with seat 0 dealing), then
/// the kitty with the nine of hearts on top.
fn stacked_deck() -> Deck {
    Deck::from_cards(vec![
        // Seat 1
        card(Suit::Hearts, JACK),
        card(Suit::Diamonds, JACK),
        card(Suit::Hearts, ACE),
        card(Suit::Hearts, KING),
        card(Suit::Hearts, QUEEN),
        // Seat 2
        card(Suit::Spades, 9),
        card(Suit::Spades, 10),
        card(Suit::Clubs, 9),
        card(Suit::Clubs, 10),
        card(Suit::Diamonds, 9),
        // Seat 3
        card(Suit::Spades, ACE),
        card(Suit::Spades, KING),
        card(Suit::Spades, QUEEN),
        card(Suit::Clubs, ACE),
        card(Suit::Clubs, KING),
        // Seat 0
        card(Suit::Diamonds, 10),
        card(Suit::Diamonds, QUEEN),
        card(Suit::Diamonds, KING),
        card(Suit::Diamonds, ACE),
        card(Suit::Clubs, QUEEN),
        // Kitty
        card(Suit::Hearts, 9),
        card(Suit::Hearts, 10),
        card(Suit::Spades, JACK),
        card(Suit::Clubs, JACK),
    ])
}

fn dealt_round(players: [Player; SEATS], options: GameOptions) -> Round {
    let mut round = Round::new(players, 0, options);
    round.begin_with_deck(stacked_deck()).unwrap();
    round
}

fn pass_all(round: &mut Round, times: usize) {
    for _ in 0..times {
        let seat = round.active_player();
        round.select_trump(seat, Call::Pass, Suit::Spades).unwrap();
    }
}

/// Every card is in exactly one place: a hand, the kitty, a trick, or the
/// dealer's discard.
fn assert_cards_conserved(round: &Round) {
    let mut all: Vec<Card> = Vec::new();
    for player in round.players() {
        all.extend(player.hand().iter());
    }
    all.extend(round.kitty().iter().copied());
    for completed in round.tricks() {
        all.extend(completed.trick.played().map(|(_, c)| c));
    }
    all.extend(round.current_trick().played().map(|(_, c)| c));
    all.extend(round.discarded());

    assert_eq!(all.len(), 24);
    let mut deck = Deck::from_cards(all);
    for suit in Suit::ALL {
        for rank in [9, 10, JACK, QUEEN, KING, ACE] {
            assert!(deck.remove(&card(suit, rank)), "missing {}", card(suit, rank));
        }
    }
    assert!(deck.is_empty());
}

#[test]
fn deal_gives_five_cards_each_and_turns_up_kitty() {
    let round = dealt_round(automated_players(), GameOptions::default());

    assert_eq!(round.state(), RoundState::SelectingTrumpRound1);
    for player in round.players() {
        assert_eq!(player.hand().len(), 5);
    }
    assert_eq!(round.kitty().len(), 4);
    let top = round.kitty_top().unwrap();
    assert_eq!(top, card(Suit::Hearts, 9));
    assert!(top.is_face_up());
    assert_eq!(round.active_player(), 1);
    assert!(round.players()[1].hand().has_in_hand(card(Suit::Hearts, JACK)));
    assert!(round.players()[0].hand().has_in_hand(card(Suit::Clubs, QUEEN)));
    assert_cards_conserved(&round);
}

#[test]
fn shuffled_deal_keeps_every_card() {
    let mut round = Round::new(automated_players(), 2, GameOptions::default());
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    round.begin(&mut rng).unwrap();

    assert_eq!(round.active_player(), 3);
    assert_cards_conserved(&round);
}

#[test]
fn dealing_twice_is_rejected() {
    let mut round = dealt_round(automated_players(), GameOptions::default());
    assert_eq!(
        round.begin_with_deck(Deck::euchre()),
        Err(DealError::InvalidState)
    );
}

#[test]
fn short_deck_is_rejected_without_dealing() {
    let mut round = Round::new(automated_players(), 0, GameOptions::default());
    let mut deck = Deck::euchre();
    deck.deal_quantity(5);

    assert_eq!(
        round.begin_with_deck(deck),
        Err(DealError::NotEnoughCards {
            needed: 21,
            remaining: 19,
        })
    );
    assert_eq!(round.state(), RoundState::Dealing);
    assert!(round.players().iter().all(|p| p.hand().is_empty()));
}

#[test]
fn deal_needs_a_card_to_turn_up() {
    let mut round = Round::new(automated_players(), 0, GameOptions::default());
    let twenty = Deck::from_cards(Deck::euchre().cards()[..20].to_vec());

    assert_eq!(
        round.begin_with_deck(twenty),
        Err(DealError::NotEnoughCards {
            needed: 21,
            remaining: 20,
        })
    );
    assert_eq!(round.state(), RoundState::Dealing);
    assert!(round.players().iter().all(|p| p.hand().is_empty()));

    let twenty_one = Deck::from_cards(Deck::euchre().cards()[..21].to_vec());
    round.begin_with_deck(twenty_one).unwrap();
    assert_eq!(round.kitty().len(), 1);
    assert!(round.pending_decision().is_some());
    round.run_automated().unwrap();
    assert!(round.is_complete());
}

#[test]
fn automated_seat_orders_up_and_dealer_discards() {
    let mut round = dealt_round(automated_players(), GameOptions::default());

    let decision = round.automated_decision().unwrap();
    assert_eq!(
        decision,
        Decision::Trump {
            call: Call::OrderUp,
            suit: Suit::Hearts,
        }
    );
    round.submit(1, decision).unwrap();

    assert_eq!(round.state(), RoundState::Playing);
    assert_eq!(round.trump(), Some(Suit::Hearts));
    assert_eq!(round.caller(), Some(1));
    assert!(!round.is_alone());

    let dealer = round.player(0).unwrap();
    assert_eq!(dealer.hand().len(), 5);
    assert!(dealer.hand().has_in_hand(card(Suit::Hearts, 9)));
    assert!(!dealer.hand().has_in_hand(card(Suit::Diamonds, 10)));
    assert_eq!(round.discarded(), Some(card(Suit::Diamonds, 10)));
    assert_eq!(round.kitty().len(), 3);

    assert_eq!(round.lead(), 1);
    assert_eq!(round.active_player(), 1);
    assert_cards_conserved(&round);
}

#[test]
fn order_up_must_name_kitty_suit() {
    let mut round = dealt_round(automated_players(), GameOptions::default());
    assert_eq!(
        round.select_trump(1, Call::OrderUp, Suit::Spades),
        Err(TrumpError::WrongSuit)
    );
    assert_eq!(round.state(), RoundState::SelectingTrumpRound1);
}

#[test]
fn out_of_turn_bids_are_rejected() {
    let mut round = dealt_round(automated_players(), GameOptions::default());
    assert_eq!(
        round.select_trump(2, Call::Pass, Suit::Hearts),
        Err(TrumpError::NotYourTurn)
    );
    assert_eq!(round.active_player(), 1);
    assert_eq!(
        round.play_card(1, card(Suit::Hearts, JACK)),
        Err(PlayError::InvalidState)
    );
}

#[test]
fn dealer_pass_turns_kitty_down() {
    let mut round = dealt_round(automated_players(), GameOptions::default());
    pass_all(&mut round, 4);

    assert_eq!(round.state(), RoundState::SelectingTrumpRound2);
    assert_eq!(round.turned_down_suit(), Some(Suit::Hearts));
    assert!(!round.kitty_top().unwrap().is_face_up());
    assert_eq!(round.active_player(), 1);
    assert_eq!(
        round.pending_decision().unwrap().kind,
        DecisionKind::NameTrump {
            excluded: Suit::Hearts,
        }
    );
}

#[test]
fn second_round_rejects_turned_down_suit() {
    let mut round = dealt_round(automated_players(), GameOptions::default());
    pass_all(&mut round, 4);

    assert_eq!(
        round.select_trump(1, Call::OrderUp, Suit::Hearts),
        Err(TrumpError::SuitTurnedDown)
    );
    round.select_trump(1, Call::OrderUp, Suit::Spades).unwrap();

    assert_eq!(round.state(), RoundState::Playing);
    assert_eq!(round.trump(), Some(Suit::Spades));
    assert_eq!(round.caller(), Some(1));
    assert_eq!(round.kitty().len(), 4);
    assert_eq!(round.discarded(), None);
    assert!(round.players().iter().all(|p| p.hand().len() == 5));
}

#[test]
fn dealer_is_forced_after_two_rounds_of_passing() {
    let mut round = dealt_round(automated_players(), GameOptions::default());
    pass_all(&mut round, 8);

    assert_eq!(round.state(), RoundState::DealerForced);
    assert_eq!(round.active_player(), 0);
    assert_eq!(
        round.select_trump(0, Call::Pass, Suit::Spades),
        Err(TrumpError::DealerMustCall)
    );
    assert_eq!(
        round.automated_trump_decision(),
        Some((Call::OrderUp, Suit::Diamonds))
    );
}

#[test]
fn forced_dealer_names_first_legal_suit_when_heuristic_passes() {
    let options = GameOptions::default()
        .with_minimum_bid(100)
        .with_loner_bid(200);
    let mut round = dealt_round(automated_players(), options);
    round.run_automated().unwrap();

    assert_eq!(round.trump(), Some(Suit::Spades));
    assert_eq!(round.caller(), Some(0));
    assert!(round.is_complete());
}

#[test]
fn controller_checks_on_trump_selection() {
    let players = [
        Player::automated("North"),
        Player::human("East"),
        Player::automated("South"),
        Player::automated("West"),
    ];
    let mut round = dealt_round(players, GameOptions::default());

    assert_eq!(
        round.computer_trump_selection(Call::Pass, Suit::Hearts),
        Err(TrumpError::NotAutomatedSeat)
    );
    round
        .human_trump_selection(Call::Pass, Suit::Hearts)
        .unwrap();
    assert_eq!(
        round.human_trump_selection(Call::Pass, Suit::Hearts),
        Err(TrumpError::NotHumanSeat)
    );
    round
        .computer_trump_selection(Call::Pass, Suit::Hearts)
        .unwrap();
    assert_eq!(round.active_player(), 3);
}

#[test]
fn run_automated_stops_for_human() {
    let players = [
        Player::automated("North"),
        Player::automated("East"),
        Player::human("South"),
        Player::automated("West"),
    ];
    let mut round = Round::new(players, 1, GameOptions::default());
    round.begin(&mut ChaCha8Rng::seed_from_u64(3)).unwrap();

    round.run_automated().unwrap();
    let pending = round.pending_decision().unwrap();
    assert_eq!(pending.seat, 2);
    assert_eq!(round.run_automated().unwrap(), 0);
}

#[test]
fn human_dealer_discards_after_pickup() {
    let players = [
        Player::human("North"),
        Player::automated("East"),
        Player::automated("South"),
        Player::automated("West"),
    ];
    let mut round = dealt_round(players, GameOptions::default());
    round.select_trump(1, Call::OrderUp, Suit::Hearts).unwrap();

    assert_eq!(round.state(), RoundState::DealerDiscard);
    assert_eq!(round.active_player(), 0);
    assert_eq!(round.player(0).unwrap().hand().len(), 6);
    assert_eq!(
        round.pending_decision().unwrap().kind,
        DecisionKind::Discard
    );

    assert_eq!(
        round.play_card(1, card(Suit::Hearts, JACK)),
        Err(PlayError::InvalidState)
    );
    assert_eq!(
        round.discard(1, card(Suit::Hearts, JACK)),
        Err(DiscardError::NotYourTurn)
    );
    assert_eq!(
        round.discard(0, card(Suit::Spades, JACK)),
        Err(DiscardError::CardNotInHand)
    );

    round.discard(0, card(Suit::Clubs, QUEEN)).unwrap();
    assert_eq!(round.state(), RoundState::Playing);
    assert_eq!(round.player(0).unwrap().hand().len(), 5);
    assert_eq!(round.discarded(), Some(card(Suit::Clubs, QUEEN)));
    assert_eq!(round.active_player(), 1);
    assert_cards_conserved(&round);
}

#[test]
fn discard_outside_pickup_is_rejected() {
    let mut round = dealt_round(automated_players(), GameOptions::default());
    assert_eq!(
        round.discard(0, card(Suit::Clubs, QUEEN)),
        Err(DiscardError::InvalidState)
    );
}

#[test]
fn play_enforces_turn_hand_and_follow_suit() {
    let mut round = dealt_round(automated_players(), GameOptions::default());
    round.select_trump(1, Call::OrderUp, Suit::Hearts).unwrap();

    assert_eq!(
        round.play_card(2, card(Suit::Spades, 9)),
        Err(PlayError::NotYourTurn)
    );
    assert_eq!(
        round.play_card(1, card(Suit::Spades, 9)),
        Err(PlayError::CardNotInHand)
    );

    let outcome = round.play_card(1, card(Suit::Hearts, JACK)).unwrap();
    assert_eq!(outcome.completed_trick, None);
    assert_eq!(round.active_player(), 2);
    assert!(
        round
            .players()
            .iter()
            .all(|p| p.hand().has_seen(card(Suit::Hearts, JACK)))
    );

    round.play_card(2, card(Suit::Spades, 9)).unwrap();
    round.play_card(3, card(Suit::Spades, ACE)).unwrap();

    // The dealer picked up the nine of hearts and has to follow.
    assert_eq!(
        round.play_card(0, card(Suit::Diamonds, QUEEN)),
        Err(PlayError::MustFollowSuit)
    );
    let outcome = round.play_card(0, card(Suit::Hearts, 9)).unwrap();

    let completed = outcome.completed_trick.unwrap();
    assert_eq!(completed.winner, 1);
    assert_eq!(round.tricks_won(1), 1);
    assert_eq!(round.tricks().len(), 1);
    assert_eq!(round.lead(), 1);
    assert_eq!(round.active_player(), 1);
    assert!(round.current_trick().is_empty());
}

#[test]
fn led_left_bower_is_followed_as_trump() {
    let mut round = dealt_round(automated_players(), GameOptions::default());
    round.select_trump(1, Call::OrderUp, Suit::Hearts).unwrap();
    round.play_card(1, card(Suit::Hearts, JACK)).unwrap();
    round.play_card(2, card(Suit::Spades, 9)).unwrap();
    round.play_card(3, card(Suit::Spades, ACE)).unwrap();
    round.play_card(0, card(Suit::Hearts, 9)).unwrap();

    // The Jack of Diamonds leads hearts, so a seat holding only a plain
    // diamond is free to play anything.
    round.play_card(1, card(Suit::Diamonds, JACK)).unwrap();
    round.play_card(2, card(Suit::Clubs, 10)).unwrap();
    round.play_card(3, card(Suit::Clubs, ACE)).unwrap();
    let outcome = round.play_card(0, card(Suit::Diamonds, ACE)).unwrap();

    assert_eq!(outcome.completed_trick.unwrap().winner, 1);
    assert_eq!(round.tricks_won(1), 2);
}

#[test]
fn revoking_is_allowed_when_enforcement_is_off() {
    let options = GameOptions::default().with_enforce_follow_suit(false);
    let mut round = dealt_round(automated_players(), options);
    round.select_trump(1, Call::OrderUp, Suit::Hearts).unwrap();
    round.play_card(1, card(Suit::Hearts, JACK)).unwrap();
    round.play_card(2, card(Suit::Spades, 9)).unwrap();
    round.play_card(3, card(Suit::Spades, ACE)).unwrap();

    assert!(round.play_card(0, card(Suit::Diamonds, QUEEN)).is_ok());
}

#[test]
fn loner_partner_sits_out() {
    let options = GameOptions::default().with_loner_policy(LonerPolicy::WhenEligible);
    let mut round = dealt_round(automated_players(), options);

    assert_eq!(
        round.automated_trump_decision(),
        Some((Call::Alone, Suit::Hearts))
    );
    round.run_automated().unwrap();

    assert!(round.is_alone());
    assert!(round.is_complete());
    assert!(!round.player(3).unwrap().is_playing());
    assert_eq!(round.player(3).unwrap().hand().len(), 5);
    assert_eq!(round.tricks_won(3), 0);
    assert!(
        round
            .tricks()
            .iter()
            .all(|t| t.trick.card(3).is_none() && t.trick.len() == 3)
    );
    assert_cards_conserved(&round);
}

#[test]
fn sitting_out_seat_cannot_play() {
    let mut round = dealt_round(automated_players(), GameOptions::default());
    round.select_trump(1, Call::Alone, Suit::Hearts).unwrap();

    assert_eq!(
        round.play_card(3, card(Suit::Spades, ACE)),
        Err(PlayError::SittingOut)
    );
}

#[test]
fn dealer_sits_out_when_partner_goes_alone() {
    let mut round = dealt_round(automated_players(), GameOptions::default());
    round.select_trump(1, Call::Pass, Suit::Hearts).unwrap();
    round.select_trump(2, Call::Alone, Suit::Hearts).unwrap();

    assert_eq!(round.state(), RoundState::Playing);
    assert!(!round.player(0).unwrap().is_playing());
    assert_eq!(round.kitty().len(), 4);
    assert!(!round.player(0).unwrap().hand().has_in_hand(card(Suit::Hearts, 9)));
    assert_eq!(round.lead(), 1);
    assert_eq!(round.caller(), Some(2));
}

#[test]
fn full_automated_round_records_five_tricks() {
    let mut round = Round::new(automated_players(), 3, GameOptions::default());
    round.begin(&mut ChaCha8Rng::seed_from_u64(2024)).unwrap();
    let steps = round.run_automated().unwrap();

    assert!(steps >= 20);
    assert!(round.is_complete());
    assert_eq!(round.pending_decision(), None);
    assert!(round.players().iter().all(|p| p.hand().is_empty() || !p.is_playing()));

    let record = round.record().unwrap();
    let total: u8 = record.tricks_won.iter().sum();
    assert_eq!(total, 5);
    assert_eq!(record.makers_tricks() + record.defenders_tricks(), 5);
    assert_eq!(record.dealer, 3);
    assert_cards_conserved(&round);
}

#[test]
fn record_is_absent_until_complete() {
    let round = dealt_round(automated_players(), GameOptions::default());
    assert_eq!(round.record(), None);
}
