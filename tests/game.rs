//! Card, hand, deck, and turn integration tests.

use std::collections::BTreeSet;

use bjsim::strategy::{self, Inactive, Threshold};
use bjsim::{
    Card, DEALER_STANDS_ON, DECK_SIZE, DealError, Deck, Event, GameState, Hand, Owner, Suit,
    TurnStatus, hand_total,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn ranks(ranks: &[u8]) -> Vec<Card> {
    ranks.iter().map(|&rank| card(Suit::Clubs, rank)).collect()
}

/// A deck that deals `draws` first, followed by low filler cards.
fn deck_from_draws(draws: &[Card]) -> Deck {
    let mut cards = draws.to_vec();
    cards.extend((2..=6).map(|rank| card(Suit::Diamonds, rank)));
    Deck::from_cards(cards)
}

#[test]
fn card_values_and_names() {
    assert_eq!(card(Suit::Hearts, 1).value(), 11);
    assert_eq!(card(Suit::Hearts, 2).value(), 2);
    assert_eq!(card(Suit::Hearts, 10).value(), 10);
    assert_eq!(card(Suit::Hearts, 11).value(), 10);
    assert_eq!(card(Suit::Hearts, 13).value(), 10);

    assert_eq!(card(Suit::Spades, 1).to_string(), "Ace of Spades");
    assert_eq!(card(Suit::Diamonds, 7).to_string(), "7 of Diamonds");
    assert_eq!(card(Suit::Clubs, 12).to_string(), "Queen of Clubs");
}

#[test]
fn hand_totals_follow_ace_rules() {
    assert_eq!(hand_total(&[]), 0);
    assert_eq!(hand_total(&ranks(&[1, 1])), 12);
    assert_eq!(hand_total(&ranks(&[1, 13])), 21);
    assert_eq!(hand_total(&ranks(&[13, 12, 5])), 25);
    assert_eq!(hand_total(&ranks(&[1, 13, 12])), 21);
    assert_eq!(hand_total(&ranks(&[1, 1, 9])), 21);
    assert_eq!(hand_total(&ranks(&[1, 1, 1, 1, 7])), 21);
    assert_eq!(hand_total(&ranks(&[1, 1, 1, 1, 13, 13])), 24);
}

#[test]
fn hands_without_aces_sum_face_values() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for _ in 0..500 {
        let len = rng.random_range(0..8);
        let cards: Vec<Card> = (0..len)
            .map(|_| card(Suit::Spades, rng.random_range(2..=13)))
            .collect();
        let expected: u16 = cards.iter().map(|c| u16::from(c.rank.min(10))).sum();
        assert_eq!(hand_total(&cards), expected);
    }
}

#[test]
fn ace_adjustment_only_lowers_busting_sums() {
    let mut rng = ChaCha8Rng::seed_from_u64(12);
    for _ in 0..500 {
        let len = rng.random_range(0..8);
        let cards: Vec<Card> = (0..len)
            .map(|_| card(Suit::Hearts, rng.random_range(1..=13)))
            .collect();
        let raw: u16 = cards.iter().map(|c| c.value()).sum();
        let total = hand_total(&cards);

        assert!(total <= raw);
        if raw <= 21 {
            assert_eq!(total, raw);
        }
        if cards.iter().any(|c| c.is_ace()) && raw > 21 {
            assert_eq!((raw - total) % 10, 0);
        }
    }
}

#[test]
fn hand_prepends_and_reports_softness() {
    let mut hand = Hand::new();
    assert!(hand.is_empty());

    hand.add_card(card(Suit::Hearts, 1));
    hand.add_card(card(Suit::Clubs, 6));
    assert_eq!(hand.cards()[0], card(Suit::Clubs, 6));
    assert_eq!(hand.total(), 17);
    assert!(hand.is_soft());

    hand.add_card(card(Suit::Spades, 13));
    assert_eq!(hand.total(), 17);
    assert!(!hand.is_soft());
    assert!(!hand.is_bust());

    hand.add_card(card(Suit::Spades, 9));
    assert!(hand.is_bust());
    assert_eq!(hand.len(), 4);
}

#[test]
fn ordered_deck_has_every_card_once() {
    let deck = Deck::ordered();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: BTreeSet<Card> = deck.cards().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    for suit in Suit::ALL {
        assert_eq!(deck.cards().filter(|c| c.suit == suit).count(), 13);
    }
    for rank in 1..=13 {
        assert_eq!(deck.cards().filter(|c| c.rank == rank).count(), 4);
    }
}

#[test]
fn shuffle_preserves_cards_and_reorders() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let deck = Deck::shuffled(&mut rng);

    assert_ne!(deck, Deck::ordered());

    let mut shuffled: Vec<Card> = deck.cards().copied().collect();
    let mut ordered: Vec<Card> = Deck::ordered().cards().copied().collect();
    shuffled.sort();
    ordered.sort();
    assert_eq!(shuffled, ordered);
}

#[test]
fn shuffle_spreads_a_card_over_every_position() {
    const TRIALS: usize = 5200;
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let tracked = card(Suit::Spades, 1);
    let mut positions = [0_usize; DECK_SIZE];

    for _ in 0..TRIALS {
        let deck = Deck::shuffled(&mut rng);
        let position = deck
            .cards()
            .position(|&c| c == tracked)
            .expect("every card stays in the deck");
        positions[position] += 1;
    }

    // Expect 100 per position; allow about five standard deviations.
    for count in positions {
        assert!((50..=160).contains(&count), "skewed position count {count}");
    }
}

#[test]
fn new_game_deals_two_cards_each() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    for _ in 0..50 {
        let state = GameState::new_game(&mut rng);
        assert_eq!(state.player().len(), 2);
        assert_eq!(state.dealer().len(), 2);
        assert_eq!(state.cards_remaining(), 48);

        let mut seen = BTreeSet::new();
        let all = state
            .player()
            .cards()
            .iter()
            .chain(state.dealer().cards())
            .chain(state.deck().cards());
        for &c in all {
            assert!(seen.insert(c), "{c} dealt twice");
        }
        assert_eq!(seen, Deck::ordered().cards().copied().collect::<BTreeSet<_>>());
    }
}

#[test]
fn deal_alternates_between_player_and_dealer() {
    let draws = [
        card(Suit::Hearts, 2),
        card(Suit::Hearts, 3),
        card(Suit::Hearts, 4),
        card(Suit::Hearts, 5),
        card(Suit::Hearts, 6),
    ];
    let state = GameState::deal(Deck::from_cards(draws.to_vec())).unwrap();

    assert_eq!(state.player().cards(), &[draws[2], draws[0]]);
    assert_eq!(state.dealer().cards(), &[draws[3], draws[1]]);
    assert_eq!(state.deck().cards().copied().collect::<Vec<_>>(), vec![draws[4]]);
}

#[test]
fn deal_requires_four_cards() {
    let deck = Deck::from_cards(ranks(&[2, 3, 4]));
    assert_eq!(GameState::deal(deck).unwrap_err(), DealError::NotEnoughCards);
}

#[test]
fn hit_moves_front_card_to_one_hand() {
    let state = GameState::deal(deck_from_draws(&ranks(&[2, 3, 4, 5, 9]))).unwrap();
    let dealer_before = state.dealer().clone();
    let remaining = state.cards_remaining();

    let state = state.hit(Owner::Player).unwrap();
    assert_eq!(state.player().cards()[0], card(Suit::Clubs, 9));
    assert_eq!(state.player().len(), 3);
    assert_eq!(state.dealer(), &dealer_before);
    assert_eq!(state.cards_remaining(), remaining - 1);
    assert_eq!(state.hand(Owner::Player), state.player());
}

#[test]
fn hit_with_empty_deck_returns_error() {
    let state = GameState::deal(Deck::from_cards(ranks(&[2, 3, 4, 5]))).unwrap();
    assert_eq!(state.cards_remaining(), 0);
    assert_eq!(state.hit(Owner::Dealer).unwrap_err(), DealError::EmptyDeck);
}

#[test]
fn dealer_stands_on_seventeen_without_drawing() {
    let state = GameState::deal(deck_from_draws(&ranks(&[2, 10, 3, 7]))).unwrap();
    let mut events: Vec<Event> = Vec::new();

    let (state, status) = state.dealer_turn(&mut events).unwrap();
    assert_eq!(status, TurnStatus::Standing);
    assert_eq!(state.dealer().len(), 2);
    assert_eq!(
        events,
        vec![Event::Stand {
            owner: Owner::Dealer,
            total: 17
        }]
    );
}

#[test]
fn dealer_stands_on_soft_seventeen() {
    let state = GameState::deal(deck_from_draws(&ranks(&[2, 1, 3, 6]))).unwrap();
    let (state, status) = state.dealer_turn(&mut ()).unwrap();
    assert_eq!(status, TurnStatus::Standing);
    assert_eq!(state.dealer().total(), 17);
    assert!(state.dealer().is_soft());
}

#[test]
fn dealer_draws_below_seventeen_and_can_bust() {
    let state = GameState::deal(deck_from_draws(&ranks(&[2, 10, 3, 6, 13]))).unwrap();
    let mut events: Vec<Event> = Vec::new();

    let (state, status) = state.dealer_turn(&mut events).unwrap();
    assert_eq!(status, TurnStatus::Busted);
    assert_eq!(state.dealer().total(), 26);
    assert_eq!(
        events,
        vec![
            Event::Hit {
                owner: Owner::Dealer,
                card: card(Suit::Clubs, 13),
                total: 26
            },
            Event::Bust {
                owner: Owner::Dealer,
                total: 26
            },
        ]
    );
}

#[test]
fn dealer_only_hits_below_seventeen() {
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    for _ in 0..500 {
        let (state, status) = GameState::new_game(&mut rng).dealer_turn(&mut ()).unwrap();
        let cards = state.dealer().cards();
        let total = state.dealer().total();

        assert!(total >= DEALER_STANDS_ON);
        assert_eq!(status == TurnStatus::Busted, total > 21);

        // Every hand the dealer drew to, oldest cards first, was below 17.
        for dealt in 2..cards.len() {
            let before = &cards[cards.len() - dealt..];
            assert!(hand_total(before) < DEALER_STANDS_ON);
        }
    }
}

#[test]
fn player_turn_follows_strategy() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let state = GameState::deal(deck_from_draws(&ranks(&[2, 10, 3, 7, 4, 5, 13]))).unwrap();
    let (stood, status) = state
        .clone()
        .player_turn(&mut Inactive, &mut rng, &mut ())
        .unwrap();
    assert_eq!(status, TurnStatus::Standing);
    assert_eq!(stood.player().len(), 2);

    let (hit, status) = state
        .player_turn(&mut Threshold::cautious(), &mut rng, &mut ())
        .unwrap();
    // 5 -> 9 -> 14 -> 24
    assert_eq!(status, TurnStatus::Busted);
    assert_eq!(hit.player().total(), 24);
    assert_eq!(hit.dealer().len(), 2);
}

#[test]
fn strategy_is_not_asked_after_bust() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let mut asked = 0;
    let mut always_hit = strategy::from_fn(|_: &GameState| {
        asked += 1;
        true
    });

    let state = GameState::deal(deck_from_draws(&ranks(&[10, 2, 9, 3, 5]))).unwrap();
    let (state, status) = state.player_turn(&mut always_hit, &mut rng, &mut ()).unwrap();

    assert_eq!(status, TurnStatus::Busted);
    assert_eq!(state.player().total(), 24);
    drop(always_hit);
    assert_eq!(asked, 1);
}

#[test]
fn player_turn_reports_empty_deck() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let state = GameState::deal(Deck::from_cards(ranks(&[2, 2, 3, 3]))).unwrap();
    let err = state
        .player_turn(&mut Threshold::greedy(), &mut rng, &mut ())
        .unwrap_err();
    assert_eq!(err, DealError::EmptyDeck);
}
