//! Deck integration tests.

use std::sync::Barrier;
use std::thread;

use ringdeal::{Card, Deck, lock_pair};

fn values(cards: &[Card]) -> Vec<u32> {
    cards.iter().map(Card::value).collect()
}

#[test]
fn draws_follow_discard_order() {
    let deck = Deck::new(1);
    for value in [5, 3, 9, 3, 0] {
        deck.discard(Card::new(value));
    }

    let drawn: Vec<u32> = std::iter::from_fn(|| deck.draw()).map(|c| c.value()).collect();
    assert_eq!(drawn, vec![5, 3, 9, 3, 0]);
    assert!(deck.is_empty());
}

#[test]
fn empty_draw_and_none_discard() {
    let deck = Deck::with_cards(2, [Card::new(7)]);
    assert_eq!(deck.id(), 2);

    deck.discard(None);
    assert_eq!(deck.len(), 1);

    assert_eq!(deck.draw(), Some(Card::new(7)));
    assert_eq!(deck.draw(), None);
    assert_eq!(deck.draw(), None);
    assert_eq!(deck.len(), 0);
}

#[test]
fn snapshot_is_front_to_back() {
    let deck = Deck::with_cards(3, [1, 2, 3].map(Card::new));
    deck.discard(Card::new(4));
    assert_eq!(deck.draw(), Some(Card::new(1)));

    assert_eq!(deck.snapshot_values(), vec![2, 3, 4]);
    assert_eq!(values(&deck.into_cards()), vec![2, 3, 4]);
}

#[test]
fn guard_operations_see_each_other() {
    let deck = Deck::new(1);
    let mut guard = deck.lock();
    assert_eq!(guard.id(), 1);

    guard.discard(Card::new(8));
    guard.discard(Card::new(6));
    assert_eq!(guard.len(), 2);
    assert_eq!(guard.snapshot_values(), vec![8, 6]);
    assert_eq!(guard.draw(), Some(Card::new(8)));
    drop(guard);

    assert_eq!(deck.snapshot_values(), vec![6]);
}

#[test]
fn concurrent_discards_and_draws_conserve_cards() {
    const PRODUCERS: u32 = 4;
    const PER_PRODUCER: u32 = 2_000;

    let deck = Deck::new(1);
    let barrier = Barrier::new(PRODUCERS as usize * 2);

    let drawn: Vec<Vec<u32>> = thread::scope(|scope| {
        for producer in 0..PRODUCERS {
            let deck = &deck;
            let barrier = &barrier;
            scope.spawn(move || {
                barrier.wait();
                for n in 0..PER_PRODUCER {
                    deck.discard(Card::new(producer * PER_PRODUCER + n));
                }
            });
        }

        let consumers: Vec<_> = (0..PRODUCERS)
            .map(|_| {
                let deck = &deck;
                let barrier = &barrier;
                scope.spawn(move || {
                    barrier.wait();
                    let mut seen = Vec::new();
                    while seen.len() < PER_PRODUCER as usize {
                        match deck.draw() {
                            Some(card) => seen.push(card.value()),
                            None => thread::yield_now(),
                        }
                    }
                    seen
                })
            })
            .collect();

        consumers.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let mut all: Vec<u32> = drawn.iter().flatten().copied().collect();
    all.sort_unstable();
    let expected: Vec<u32> = (0..PRODUCERS * PER_PRODUCER).collect();
    assert_eq!(all, expected);
    assert!(deck.is_empty());

    // Each producer's cards come out in the order they went in.
    for seen in &drawn {
        for producer in 0..PRODUCERS {
            let range = producer * PER_PRODUCER..(producer + 1) * PER_PRODUCER;
            let mine: Vec<u32> = seen.iter().copied().filter(|v| range.contains(v)).collect();
            assert!(mine.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

#[test]
fn lock_pair_returns_left_then_right() {
    let low = Deck::with_cards(1, [Card::new(1)]);
    let high = Deck::with_cards(2, [Card::new(2)]);

    let (left, right) = lock_pair(&high, &low);
    assert_eq!(left.id(), 2);
    assert_eq!(right.id(), 1);
    drop((left, right));

    let (left, right) = lock_pair(&low, &high);
    assert_eq!(left.id(), 1);
    assert_eq!(right.id(), 2);
}

#[test]
#[should_panic(expected = "two distinct decks")]
fn lock_pair_rejects_same_deck() {
    let deck = Deck::new(1);
    let _guards = lock_pair(&deck, &deck);
}

#[test]
fn reversed_pairs_do_not_deadlock() {
    const ROUNDS: usize = 20_000;

    let a = Deck::with_cards(1, (0..64).map(Card::new));
    let b = Deck::with_cards(2, (64..128).map(Card::new));

    thread::scope(|scope| {
        for (from, to) in [(&a, &b), (&b, &a)] {
            scope.spawn(move || {
                for _ in 0..ROUNDS {
                    let (mut left, mut right) = lock_pair(from, to);
                    if let Some(card) = left.draw() {
                        right.discard(card);
                    }
                }
            });
        }
    });

    let mut all = a.snapshot_values();
    all.extend(b.snapshot_values());
    all.sort_unstable();
    assert_eq!(all, (0..128).collect::<Vec<_>>());
}
