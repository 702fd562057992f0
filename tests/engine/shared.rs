//! SharedEngine Tests
//!
//! One lock hold per call, shared state across clones and threads.

use crate::common::*;
use std::thread;

#[test]
fn clones_see_one_transaction_log() {
    let db = SharedEngine::new();
    let other = db.clone();

    db.set(key("a"), 10).unwrap();
    other.begin();
    db.set(key("a"), 20).unwrap();

    assert_eq!(other.rollback(), RollbackOutcome::Reverted);
    assert_eq!(db.get("a"), Some(10));
}

#[test]
fn with_runs_a_block_atomically() {
    let db = SharedEngine::new();
    let count = db.with(|engine| {
        engine.begin();
        engine.set(key("a"), 1).unwrap();
        engine.set(key("b"), 1).unwrap();
        let count = engine.count_equal(1);
        engine.rollback();
        count
    });

    assert_eq!(count, 2);
    assert_eq!(db.count_equal(1), 0);
}

#[test]
fn concurrent_writers_never_observe_an_open_implicit_transaction() {
    let db = SharedEngine::new();

    let writers: Vec<_> = (0..4)
        .map(|t| {
            let db = db.clone();
            thread::spawn(move || {
                for i in 0..200 {
                    db.set(key(&format!("w{}", t)), i).unwrap();
                }
            })
        })
        .collect();

    let observer = {
        let db = db.clone();
        thread::spawn(move || {
            for _ in 0..200 {
                assert_eq!(db.depth(), 0);
            }
        })
    };

    for handle in writers {
        handle.join().unwrap();
    }
    observer.join().unwrap();

    for t in 0..4 {
        assert_eq!(db.get(&format!("w{}", t)), Some(199));
    }
}
