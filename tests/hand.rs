//! Hand and discard rule tests.

use ringdeal::{Card, Hand};

#[test]
fn uniform_hand_discards_first_card() {
    let mut hand = Hand::from([1, 1, 1, 1]);
    assert!(hand.is_uniform(1));
    assert_eq!(hand.discard_index(1), 0);

    let discarded = hand.exchange(Card::new(2), 1);
    assert_eq!(discarded, Card::new(1));
    assert_eq!(hand.values(), [2, 1, 1, 1]);

    let twos = hand.values().iter().filter(|&&v| v == 2).count();
    let ones = hand.values().iter().filter(|&&v| v == 1).count();
    assert_eq!((twos, ones), (1, 3));
}

#[test]
fn discards_first_unwanted_card() {
    let mut hand = Hand::from([1, 1, 5, 7]);
    assert_eq!(hand.discard_index(1), 2);

    let discarded = hand.exchange(Card::new(2), 1);
    assert_eq!(discarded, Card::new(5));
    assert_eq!(hand.values(), [1, 1, 2, 7]);

    // The freshly drawn 2 now comes before the 7.
    assert_eq!(hand.exchange(Card::new(1), 1), Card::new(2));
    assert_eq!(hand.values(), [1, 1, 1, 7]);
    assert_eq!(hand.exchange(Card::new(1), 1), Card::new(7));
    assert!(hand.is_uniform(1));
}

#[test]
fn replace_swaps_in_place() {
    let mut hand = Hand::from([4, 3, 2, 1]);
    assert_eq!(hand.replace(3, Card::new(9)), Card::new(1));
    assert_eq!(hand.cards().len(), 4);
    assert_eq!(hand.values(), [4, 3, 2, 9]);
}

#[test]
fn displays_space_separated() {
    let hand = Hand::from([1, 10, 0, 3]);
    assert_eq!(hand.to_string(), "1 10 0 3");
    assert!(!hand.is_uniform(1));
}
