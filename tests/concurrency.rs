use std::thread;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use teller::notify::ChannelNotifier;
use teller::service::{InMemoryLedger, Ledger, LedgerError};
use teller::store::StoreError;
use teller::transfer::TransferError;

fn dec(value: u32) -> Decimal {
    Decimal::from_u32(value).unwrap()
}

fn ledger() -> InMemoryLedger {
    InMemoryLedger::new(Box::new(ChannelNotifier::spawn()))
}

/// Two threads hammering the same pair in opposite directions must
/// terminate: both callers ask for the locks in identifier order, so
/// neither can hold one lock while waiting for the other.
#[test]
fn opposite_direction_transfers_terminate() {
    let ledger = ledger();
    ledger.create_account("Id-A".into(), dec(10_000)).unwrap();
    ledger.create_account("Id-B".into(), dec(10_000)).unwrap();

    thread::scope(|s| {
        let l = &ledger;
        s.spawn(move || {
            for _ in 0..10_000 {
                let _ = l.transfer("Id-A", "Id-B", dec(1));
            }
        });
        s.spawn(move || {
            for _ in 0..10_000 {
                let _ = l.transfer("Id-B", "Id-A", dec(1));
            }
        });
    });

    let total =
        ledger.account("Id-A").unwrap().balance() + ledger.account("Id-B").unwrap().balance();
    assert_eq!(total, dec(20_000));
}

/// No committed transfer creates or destroys money, whatever the mix of
/// concurrent pairs.
#[test]
fn conservation_across_many_pairs() {
    let ledger = ledger();
    let ids = ["Id-1", "Id-2", "Id-3", "Id-4"];
    for id in ids {
        ledger.create_account(id.into(), dec(1_000)).unwrap();
    }

    thread::scope(|s| {
        for worker in 0..8usize {
            let l = &ledger;
            s.spawn(move || {
                for round in 0..1_000usize {
                    let source = ids[(worker + round) % ids.len()];
                    let destination = ids[(worker + round * 3 + 1) % ids.len()];
                    let _ = l.transfer(source, destination, dec((round % 7) as u32));
                }
            });
        }
    });

    let total: Decimal = ids
        .iter()
        .map(|id| ledger.account(id).unwrap().balance())
        .sum();
    assert_eq!(total, dec(4_000));
}

/// Alternating same-amount transfers over one pair: the combined balance
/// never changes and neither side can be driven below zero, so both end in
/// [0, combined].
#[test]
fn atomicity_on_an_alternating_pair() {
    let ledger = ledger();
    ledger.create_account("Id-A".into(), dec(100)).unwrap();
    ledger.create_account("Id-B".into(), dec(100)).unwrap();

    thread::scope(|s| {
        let l = &ledger;
        s.spawn(move || {
            for _ in 0..1_000 {
                if let Err(err) = l.transfer("Id-A", "Id-B", dec(10)) {
                    assert!(matches!(
                        err,
                        LedgerError::Transfer(TransferError::InsufficientFunds(_))
                    ));
                }
            }
        });
        s.spawn(move || {
            for _ in 0..1_000 {
                if let Err(err) = l.transfer("Id-B", "Id-A", dec(10)) {
                    assert!(matches!(
                        err,
                        LedgerError::Transfer(TransferError::InsufficientFunds(_))
                    ));
                }
            }
        });
    });

    let a = ledger.account("Id-A").unwrap().balance();
    let b = ledger.account("Id-B").unwrap().balance();
    assert_eq!(a + b, dec(200));
    assert!(a >= Decimal::ZERO && a <= dec(200));
    assert!(b >= Decimal::ZERO && b <= dec(200));
}

/// Many threads draining one source: the in-lock funds re-check means
/// exactly as much money moves as the source held, never more.
#[test]
fn concurrent_drain_never_overdraws() {
    let ledger = ledger();
    ledger.create_account("Id-Hot".into(), dec(100)).unwrap();
    for worker in 0..8usize {
        ledger
            .create_account(format!("Id-Sink-{worker}"), dec(0))
            .unwrap();
    }

    let moved: u32 = thread::scope(|s| {
        let handles: Vec<_> = (0..8usize)
            .map(|worker| {
                let l = &ledger;
                s.spawn(move || {
                    let sink = format!("Id-Sink-{worker}");
                    let mut committed = 0u32;
                    for _ in 0..30 {
                        if l.transfer("Id-Hot", &sink, dec(1)).is_ok() {
                            committed += 1;
                        }
                    }
                    committed
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).sum()
    });

    assert_eq!(moved, 100);
    assert_eq!(ledger.account("Id-Hot").unwrap().balance(), dec(0));

    let sinks: Decimal = (0..8usize)
        .map(|worker| {
            ledger
                .account(&format!("Id-Sink-{worker}"))
                .unwrap()
                .balance()
        })
        .sum();
    assert_eq!(sinks, dec(100));
}

/// Racing creations of one identifier: exactly one wins and its balance is
/// the one that sticks.
#[test]
fn concurrent_create_has_a_single_winner() {
    let ledger = ledger();

    let outcomes: Vec<(u32, Result<(), LedgerError>)> = thread::scope(|s| {
        let handles: Vec<_> = (0..8u32)
            .map(|worker| {
                let l = &ledger;
                s.spawn(move || (worker, l.create_account("Id-Race".into(), dec(worker + 1))))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let winners: Vec<u32> = outcomes
        .iter()
        .filter(|(_, outcome)| outcome.is_ok())
        .map(|(worker, _)| *worker)
        .collect();
    assert_eq!(winners.len(), 1);
    for (_, outcome) in &outcomes {
        if let Err(err) = outcome {
            assert!(matches!(
                err,
                LedgerError::Store(StoreError::DuplicateAccount(_))
            ));
        }
    }
    assert_eq!(
        ledger.account("Id-Race").unwrap().balance(),
        dec(winners[0] + 1)
    );
}
