//! Winner registry integration tests.

use std::sync::Barrier;
use std::thread;

use ringdeal::WinnerRegistry;

#[test]
fn open_registry_has_no_winner() {
    let registry = WinnerRegistry::new();
    assert!(!registry.is_ended());
    assert!(!registry.is_aborted());
    assert_eq!(registry.winner(), None);
}

#[test]
fn first_claim_wins_and_sticks() {
    let registry = WinnerRegistry::new();
    assert!(registry.try_claim(2));
    assert!(registry.is_ended());
    assert_eq!(registry.winner(), Some(2));

    assert!(!registry.try_claim(1));
    assert!(!registry.try_claim(2));
    assert!(!registry.abort());
    assert_eq!(registry.winner(), Some(2));
    assert!(!registry.is_aborted());
}

#[test]
fn exactly_one_concurrent_claim_succeeds() {
    const CLAIMANTS: u32 = 64;

    for _ in 0..50 {
        let registry = WinnerRegistry::new();
        let barrier = Barrier::new(CLAIMANTS as usize);

        let winners: Vec<u32> = thread::scope(|scope| {
            let handles: Vec<_> = (1..=CLAIMANTS)
                .map(|id| {
                    let registry = &registry;
                    let barrier = &barrier;
                    scope.spawn(move || {
                        barrier.wait();
                        let won = registry.try_claim(id);
                        // Anyone who sees the end also sees the winner.
                        assert!(registry.is_ended());
                        assert!(registry.winner().is_some());
                        won.then_some(id)
                    })
                })
                .collect();
            handles
                .into_iter()
                .filter_map(|h| h.join().unwrap())
                .collect()
        });

        assert_eq!(winners.len(), 1);
        assert_eq!(registry.winner(), Some(winners[0]));
    }
}

#[test]
fn abort_ends_without_winner() {
    let registry = WinnerRegistry::new();
    assert!(registry.abort());
    assert!(registry.is_ended());
    assert!(registry.is_aborted());
    assert_eq!(registry.winner(), None);
    assert!(!registry.try_claim(1));
}

#[test]
fn reset_reopens_for_another_run() {
    let mut registry = WinnerRegistry::new();
    assert!(registry.try_claim(4));

    registry.reset();
    assert!(!registry.is_ended());
    assert!(registry.try_claim(3));
    assert_eq!(registry.winner(), Some(3));
}

#[test]
#[should_panic(expected = "cannot claim")]
fn zero_cannot_claim() {
    let registry = WinnerRegistry::new();
    let _ = registry.try_claim(0);
}
