//! Shared helpers for nestkv integration tests.

#![allow(dead_code)]

pub use nestkv::prelude::*;

/// Build a key, panicking on invalid input
pub fn key(name: &str) -> Key {
    Key::new(name).unwrap()
}

/// One bare write for scripted and generated sequences
#[derive(Debug, Clone)]
pub enum Mutation {
    Set(String, Value),
    Unset(String),
}

impl Mutation {
    /// Apply through the engine (implicit transaction per write)
    pub fn apply_to(&self, db: &mut TransactionEngine) {
        match self {
            Mutation::Set(name, value) => db.set(key(name), *value).unwrap(),
            Mutation::Unset(name) => {
                db.unset(&key(name)).unwrap();
            }
        }
    }

    /// Apply straight to a store, bypassing every transaction
    pub fn apply_direct(&self, store: &mut nestkv::Store) {
        match self {
            Mutation::Set(name, value) => nestkv::apply(store, &key(name), Some(*value)),
            Mutation::Unset(name) => nestkv::apply(store, &key(name), None),
        }
    }
}

/// Snapshot of an engine's contents in key order
pub fn snapshot(db: &TransactionEngine) -> Vec<(String, Value)> {
    db.iter().map(|(k, v)| (k.to_string(), v)).collect()
}

/// Snapshot of a store's contents in key order
pub fn store_snapshot(store: &nestkv::Store) -> Vec<(String, Value)> {
    store.iter().map(|(k, v)| (k.to_string(), v)).collect()
}
