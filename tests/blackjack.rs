//! Deck, hand and table integration tests.

use std::collections::HashSet;

use bjcore::{
    Card, DECK_SIZE, DealError, Dealer, Deck, FACE_DOWN_LABEL, Hand, Participant, Player, Rank,
    RevealError, Suit, Table, TableError, TableOptions, TextReport,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn hand_of(cards: &[Card]) -> Hand {
    let mut hand = Hand::new();
    for &card in cards {
        hand.add_card(card);
    }
    hand
}

fn sorted(cards: impl Iterator<Item = Card>) -> Vec<Card> {
    let mut cards: Vec<Card> = cards.collect();
    cards.sort_by_key(|card| (card.suit() as u8, card.rank()));
    cards
}

#[test]
fn card_values_and_description() {
    let expected = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10];
    for (rank, value) in Rank::ALL.into_iter().zip(expected) {
        assert_eq!(card(Suit::Clubs, rank).value(), value);
    }

    assert!(card(Suit::Hearts, Rank::Ace).is_ace());
    assert!(!card(Suit::Hearts, Rank::King).is_ace());
    assert_eq!(card(Suit::Spades, Rank::Ace).to_string(), "Ace of Spades");
    assert_eq!(card(Suit::Diamonds, Rank::Ten).to_string(), "Ten of Diamonds");
}

#[test]
fn fresh_deck_is_the_full_product() {
    let deck = Deck::new(3);
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert!(unique.contains(&card(suit, rank)));
        }
    }
}

#[test]
fn unshuffled_deck_is_in_construction_order() {
    let mut deck = Deck::unshuffled();
    assert_eq!(deck.deal_card(), Some(card(Suit::Hearts, Rank::Ace)));
    assert_eq!(deck.deal_card(), Some(card(Suit::Hearts, Rank::Two)));
    assert_eq!(deck.cards().last(), Some(&card(Suit::Spades, Rank::King)));
}

#[test]
fn same_seed_same_order() {
    let a: Vec<Card> = Deck::new(99).cards().copied().collect();
    let b: Vec<Card> = Deck::new(99).cards().copied().collect();
    assert_eq!(a, b);

    let unshuffled: Vec<Card> = Deck::unshuffled().cards().copied().collect();
    assert_ne!(a, unshuffled);
}

#[test]
fn shuffle_preserves_remaining_cards() {
    let mut deck = Deck::new(5);
    for _ in 0..10 {
        deck.deal_card();
    }

    let before = sorted(deck.cards().copied());
    deck.shuffle();
    let after = sorted(deck.cards().copied());

    assert_eq!(deck.len(), DECK_SIZE - 10);
    assert_eq!(before, after);
}

#[test]
fn dealing_drains_the_deck() {
    let mut deck = Deck::new(11);
    let mut dealt = HashSet::new();

    for k in 1..=DECK_SIZE {
        let card = deck.deal_card().unwrap();
        assert!(dealt.insert(card));
        assert_eq!(deck.len(), DECK_SIZE - k);
    }

    assert!(deck.is_empty());
    assert_eq!(deck.deal_card(), None);

    deck.shuffle();
    assert!(deck.is_empty());
}

#[test]
fn deal_takes_the_top_card() {
    let mut deck = Deck::new(8);
    let top = *deck.cards().next().unwrap();
    assert_eq!(deck.deal_card(), Some(top));
}

#[test]
fn restock_refills_the_deck() {
    let mut deck = Deck::new(2);
    for _ in 0..30 {
        deck.deal_card();
    }

    deck.restock();
    assert_eq!(deck.len(), DECK_SIZE);
    let unique: HashSet<Card> = deck.cards().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn hand_values_with_aces() {
    let ace = card(Suit::Spades, Rank::Ace);

    let blackjack = hand_of(&[ace, card(Suit::Hearts, Rank::King)]);
    assert_eq!(blackjack.value(), 21);
    assert!(blackjack.is_soft());

    let two_aces_ten = hand_of(&[ace, card(Suit::Hearts, Rank::Ace), card(Suit::Clubs, Rank::Ten)]);
    assert_eq!(two_aces_ten.value(), 12);
    assert!(!two_aces_ten.is_soft());

    let soft_twenty = hand_of(&[ace, card(Suit::Diamonds, Rank::Nine)]);
    assert_eq!(soft_twenty.value(), 20);
    assert!(soft_twenty.is_soft());

    let two_aces = hand_of(&[ace, card(Suit::Hearts, Rank::Ace)]);
    assert_eq!(two_aces.value(), 12);
}

#[test]
fn hand_values_without_aces() {
    let bust = hand_of(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Spades, Rank::Five),
    ]);
    assert_eq!(bust.value(), 24);
    assert!(!bust.is_soft());

    assert_eq!(Hand::new().value(), 0);
}

#[test]
fn whole_deck_in_one_hand() {
    let mut deck = Deck::new(4);
    let mut hand = Hand::new();
    while let Some(card) = deck.deal_card() {
        hand.add_card(card);
    }

    assert_eq!(hand.len(), DECK_SIZE);
    assert_eq!(hand.value(), 340);
}

#[test]
fn hand_describes_cards_in_order() {
    let hand = hand_of(&[card(Suit::Hearts, Rank::Seven), card(Suit::Clubs, Rank::Queen)]);
    assert_eq!(hand.to_string(), "Seven of Hearts\nQueen of Clubs\n");
    assert_eq!(Hand::new().to_string(), "");
}

#[test]
fn participant_reset_discards_hand() {
    let mut player = Player::new("Alice");
    player.add_card_to_hand(card(Suit::Hearts, Rank::Ace));
    player.add_card_to_hand(card(Suit::Spades, Rank::Jack));
    assert_eq!(player.hand_value(), 21);
    assert_eq!(player.to_string(), "Alice's Hand:\nAce of Hearts\nJack of Spades\n");

    player.reset_hand();
    assert_eq!(player.hand_value(), 0);
    assert!(player.hand().is_empty());
    assert_eq!(player.hand().to_string(), "");
    assert_eq!(player.name(), "Alice");

    let mut dealer = Dealer::new();
    dealer.add_card_to_hand(card(Suit::Clubs, Rank::Four));
    dealer.reset_hand();
    assert_eq!(dealer.hand_value(), 0);
    assert_eq!(dealer.name(), "Dealer");
}

#[test]
fn dealer_partial_reveal_hides_hole_card() {
    let mut dealer = Dealer::new();
    dealer.add_card_to_hand(card(Suit::Spades, Rank::Queen));
    dealer.add_card_to_hand(card(Suit::Hearts, Rank::Five));

    let reveal = dealer.reveal_partial().unwrap();
    let text = reveal.to_string();

    assert_eq!(text, "Dealer's Hand:\nFace-down card\nFive of Hearts\n");
    assert!(text.contains(FACE_DOWN_LABEL));
    assert!(!text.contains("Queen"));
    assert!(!text.contains("Spades"));
    assert!(!text.contains("15"));
    assert_eq!(dealer.hand().len(), 2);
}

#[test]
fn dealer_partial_reveal_needs_two_cards() {
    let mut dealer = Dealer::new();
    assert_eq!(dealer.reveal_partial(), Err(RevealError::CardCount(0)));

    dealer.add_card_to_hand(card(Suit::Clubs, Rank::Two));
    assert_eq!(dealer.reveal_partial(), Err(RevealError::CardCount(1)));

    dealer.add_card_to_hand(card(Suit::Clubs, Rank::Three));
    dealer.add_card_to_hand(card(Suit::Clubs, Rank::Four));
    assert_eq!(dealer.reveal_partial(), Err(RevealError::CardCount(3)));
}

#[test]
fn table_deals_player_then_dealer() {
    let deck = Deck::new(21);
    let order: Vec<Card> = deck.cards().take(4).copied().collect();

    let mut table = Table::with_deck(TableOptions::default(), deck);
    table.deal_opening().unwrap();

    assert_eq!(table.player().hand().cards(), &[order[0], order[2]]);
    assert_eq!(table.dealer().hand().cards(), &[order[1], order[3]]);
    assert_eq!(table.cards_remaining(), DECK_SIZE - 4);
    assert_eq!(table.deal_opening(), Err(DealError::InvalidState));
}

#[test]
fn table_refuses_partial_opening() {
    let mut deck = Deck::new(6);
    for _ in 0..DECK_SIZE - 3 {
        deck.deal_card();
    }

    let mut table = Table::with_deck(TableOptions::default(), deck);
    assert_eq!(table.deal_opening(), Err(DealError::NotEnoughCards));
    assert!(table.player().hand().is_empty());
    assert!(table.dealer().hand().is_empty());
    assert_eq!(table.cards_remaining(), 3);
}

#[test]
fn table_reports_opening() {
    let mut deck = Deck::unshuffled();
    deck.deal_card();
    let options = TableOptions::default().with_player_name("Alice");
    let mut table = Table::with_deck(options, deck);
    table.deal_opening().unwrap();

    let mut report = TextReport::new(String::new());
    table.report_opening(&mut report).unwrap();

    // Unshuffled hearts after the Ace: Two, Three, Four, Five.
    assert_eq!(
        report.into_inner(),
        "Alice's Hand:\nTwo of Hearts\nFour of Hearts\n\n\
         Alice's hand value: 6\n\
         Dealer's Hand:\nFace-down card\nFive of Hearts\n"
    );
}

#[test]
fn table_report_before_deal_fails() {
    let table = Table::new(TableOptions::default(), 1);
    let mut report = TextReport::new(String::new());

    assert_eq!(
        table.report_opening(&mut report),
        Err(TableError::Reveal(RevealError::CardCount(0)))
    );
    assert!(report.into_inner().is_empty());
}

#[test]
fn new_round_keeps_or_restocks_the_deck() {
    let mut table = Table::new(TableOptions::default(), 12);
    table.deal_opening().unwrap();
    assert!(!table.new_round());
    assert!(table.player().hand().is_empty());
    assert!(table.dealer().hand().is_empty());
    assert_eq!(table.cards_remaining(), DECK_SIZE - 4);

    let options = TableOptions::default().with_reshuffle_below(50);
    let mut table = Table::new(options, 12);
    table.deal_opening().unwrap();
    assert!(table.new_round());
    assert_eq!(table.cards_remaining(), DECK_SIZE);
    assert_eq!(table.options().reshuffle_below, 50);
}

#[test]
fn oversized_hand_value_saturates() {
    let mut hand = Hand::new();
    for _ in 0..6554 {
        hand.add_card(card(Suit::Spades, Rank::King));
    }
    assert_eq!(hand.value(), u16::MAX);

    hand.add_card(card(Suit::Hearts, Rank::Ace));
    assert_eq!(hand.value(), u16::MAX);
    assert!(!hand.is_soft());
}

#[cfg(feature = "std")]
#[test]
fn os_seeded_deck_and_table() {
    let deck = Deck::from_os_rng();
    let unique: HashSet<Card> = deck.cards().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    let mut table = Table::from_os_rng(TableOptions::default());
    table.deal_opening().unwrap();
    assert_eq!(table.player().hand().len(), 2);
    assert_eq!(table.dealer().hand().len(), 2);
    assert_eq!(table.cards_remaining(), DECK_SIZE - 4);
}

#[test]
fn dealer_describes_full_hand() {
    let mut dealer = Dealer::new();
    assert_eq!(dealer.to_string(), "Dealer's Hand:\n");

    dealer.add_card_to_hand(card(Suit::Diamonds, Rank::Eight));
    dealer.add_card_to_hand(card(Suit::Clubs, Rank::Ace));
    assert_eq!(
        dealer.to_string(),
        "Dealer's Hand:\nEight of Diamonds\nAce of Clubs\n"
    );
}
