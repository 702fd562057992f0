//! Transaction Semantics Tests
//!
//! Nested begin/rollback/commit behaviour through the public engine API.

use crate::common::*;

// ============================================================================
// Basic CRUD
// ============================================================================

#[test]
fn set_then_get() {
    let mut db = TransactionEngine::new();
    db.set(key("a"), 10).unwrap();
    assert_eq!(db.get("a"), Some(10));
}

#[test]
fn get_never_set_returns_none() {
    let db = TransactionEngine::new();
    assert_eq!(db.get("b"), None);
}

#[test]
fn empty_key_is_unrepresentable() {
    let err = Key::new("").unwrap_err();
    assert!(err.is_invalid_input());
}

// ============================================================================
// Rollback
// ============================================================================

#[test]
fn rollback_restores_committed_value() {
    let mut db = TransactionEngine::new();
    db.set(key("a"), 10).unwrap();
    db.begin();
    db.set(key("a"), 20).unwrap();

    assert_eq!(db.rollback(), RollbackOutcome::Reverted);
    assert_eq!(db.get("a"), Some(10));
}

#[test]
fn rollback_reverts_one_level_at_a_time() {
    let mut db = TransactionEngine::new();
    db.begin();
    db.set(key("a"), 10).unwrap();
    db.begin();
    db.set(key("a"), 20).unwrap();

    db.rollback();
    assert_eq!(db.get("a"), Some(10));

    db.rollback();
    assert_eq!(db.get("a"), None);
    assert_eq!(db.depth(), 0);
}

#[test]
fn rollback_with_nothing_open() {
    let mut db = TransactionEngine::new();
    db.set(key("a"), 1).unwrap();

    assert_eq!(db.rollback(), RollbackOutcome::NoTransaction);
    assert_eq!(db.get("a"), Some(1));
}

#[test]
fn rollback_restores_key_deleted_in_transaction() {
    let mut db = TransactionEngine::new();
    db.set(key("a"), 10).unwrap();
    db.begin();
    assert_eq!(db.unset(&key("a")).unwrap(), Some(10));
    assert_eq!(db.get("a"), None);

    db.rollback();
    assert_eq!(db.get("a"), Some(10));
}

#[test]
fn rollback_redeletes_key_created_in_transaction() {
    let mut db = TransactionEngine::new();
    db.begin();
    db.set(key("new"), 1).unwrap();
    db.set(key("new"), 2).unwrap();

    db.rollback();
    assert_eq!(db.get("new"), None);
    assert!(db.is_empty());
}

#[test]
fn inner_rollback_keeps_outer_writes() {
    let mut db = TransactionEngine::new();
    db.begin();
    db.set(key("outer"), 1).unwrap();
    db.begin();
    db.set(key("inner"), 2).unwrap();
    db.set(key("outer"), 3).unwrap();

    db.rollback();
    assert_eq!(db.get("outer"), Some(1));
    assert_eq!(db.get("inner"), None);
    assert_eq!(db.depth(), 1);
}

// ============================================================================
// Commit
// ============================================================================

#[test]
fn commit_discards_whole_log() {
    let mut db = TransactionEngine::new();
    db.begin();
    db.set(key("a"), 10).unwrap();

    assert_eq!(db.commit(), CommitOutcome::Committed);
    assert_eq!(db.rollback(), RollbackOutcome::NoTransaction);
    assert_eq!(db.get("a"), Some(10));
}

#[test]
fn commit_flattens_nested_levels() {
    let mut db = TransactionEngine::new();
    db.begin();
    db.set(key("a"), 30).unwrap();
    db.begin();
    db.set(key("a"), 40).unwrap();

    assert_eq!(db.commit(), CommitOutcome::Committed);
    assert_eq!(db.get("a"), Some(40));
    assert_eq!(db.depth(), 0);
    assert_eq!(db.rollback(), RollbackOutcome::NoTransaction);
}

#[test]
fn commit_twice_reports_no_transaction() {
    let mut db = TransactionEngine::new();
    assert_eq!(db.commit(), CommitOutcome::NoTransaction);
    assert_eq!(db.commit(), CommitOutcome::NoTransaction);

    db.begin();
    assert_eq!(db.commit(), CommitOutcome::Committed);
    assert_eq!(db.commit(), CommitOutcome::NoTransaction);
}

// ============================================================================
// Unset
// ============================================================================

#[test]
fn unset_absent_key_opens_nothing() {
    let mut db = TransactionEngine::new();
    assert_eq!(db.unset(&key("missing")).unwrap(), None);
    assert_eq!(db.depth(), 0);
    assert_eq!(db.commit(), CommitOutcome::NoTransaction);
}

// ============================================================================
// Counting
// ============================================================================

#[test]
fn count_equal_follows_transactions() {
    let mut db = TransactionEngine::new();
    db.set(key("a"), 10).unwrap();
    db.set(key("b"), 10).unwrap();
    assert_eq!(db.count_equal(10), 2);
    assert_eq!(db.count_equal(20), 0);

    db.begin();
    db.set(key("b"), 30).unwrap();
    assert_eq!(db.count_equal(10), 1);

    db.rollback();
    assert_eq!(db.count_equal(10), 2);

    db.unset(&key("a")).unwrap();
    assert_eq!(db.count_equal(10), 1);
}
