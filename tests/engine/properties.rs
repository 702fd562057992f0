//! Property Tests
//!
//! Generated write sequences checked against a direct, transaction-free model.

use crate::common::*;
use nestkv::Store;
use proptest::prelude::*;

fn arb_mutation() -> impl Strategy<Value = Mutation> {
    prop_oneof![
        ("[a-d]", -2i32..3).prop_map(|(k, v)| Mutation::Set(k, v)),
        "[a-d]".prop_map(Mutation::Unset),
    ]
}

proptest! {
    /// Bare writes leave the same state as writing the store directly.
    #[test]
    fn implicit_transactions_are_transparent(
        writes in prop::collection::vec(arb_mutation(), 0..50)
    ) {
        let mut db = TransactionEngine::new();
        let mut model = Store::new();
        for write in &writes {
            write.apply_to(&mut db);
            write.apply_direct(&mut model);
            prop_assert_eq!(db.depth(), 0);
        }
        prop_assert_eq!(snapshot(&db), store_snapshot(&model));
    }

    /// Rolling back a scope restores exactly the state at its `begin`.
    #[test]
    fn rollback_restores_state_at_begin(
        before in prop::collection::vec(arb_mutation(), 0..20),
        inside in prop::collection::vec(arb_mutation(), 0..20),
    ) {
        let mut db = TransactionEngine::new();
        for write in &before {
            write.apply_to(&mut db);
        }
        let at_begin = snapshot(&db);

        db.begin();
        for write in &inside {
            write.apply_to(&mut db);
        }
        prop_assert_eq!(db.rollback(), RollbackOutcome::Reverted);
        prop_assert_eq!(snapshot(&db), at_begin);
    }

    /// Nested scopes unwind level by level.
    #[test]
    fn nested_rollbacks_unwind_in_order(
        levels in prop::collection::vec(prop::collection::vec(arb_mutation(), 0..8), 1..5)
    ) {
        let mut db = TransactionEngine::new();
        let mut checkpoints = Vec::new();
        for level in &levels {
            checkpoints.push(snapshot(&db));
            db.begin();
            for write in level {
                write.apply_to(&mut db);
            }
        }
        while let Some(expected) = checkpoints.pop() {
            prop_assert_eq!(db.rollback(), RollbackOutcome::Reverted);
            prop_assert_eq!(snapshot(&db), expected);
        }
        prop_assert_eq!(db.rollback(), RollbackOutcome::NoTransaction);
    }

    /// Commit keeps the current state and leaves nothing to roll back.
    #[test]
    fn commit_keeps_state(
        depth in 1usize..4,
        writes in prop::collection::vec(arb_mutation(), 0..20),
    ) {
        let mut db = TransactionEngine::new();
        for _ in 0..depth {
            db.begin();
        }
        for write in &writes {
            write.apply_to(&mut db);
        }
        let before_commit = snapshot(&db);

        prop_assert_eq!(db.commit(), CommitOutcome::Committed);
        prop_assert_eq!(snapshot(&db), before_commit);
        prop_assert_eq!(db.rollback(), RollbackOutcome::NoTransaction);
    }

    /// `count_equal` matches a brute-force count over the contents.
    #[test]
    fn count_equal_matches_scan(
        writes in prop::collection::vec(arb_mutation(), 0..40),
        target in -2i32..3,
    ) {
        let mut db = TransactionEngine::new();
        for write in &writes {
            write.apply_to(&mut db);
        }
        let expected = snapshot(&db).iter().filter(|(_, v)| *v == target).count();
        prop_assert_eq!(db.count_equal(target), expected);
    }
}
