//! Property tests for the transactional store.
//!
//! The store is checked against a deliberately naive reference model (a
//! plain `Vec<HashMap>`) under random operation sequences, plus a few
//! targeted properties for the transaction lifecycle.

use std::collections::HashMap;

use proptest::prelude::*;
use proptest::sample::select;

use nestkv_engine::{StoreError, TransactionalStore};

/// Small closed universes so sequences actually collide on keys and values.
const KEYS: &[&str] = &["a", "b", "c", "d", "e"];
const VALUES: &[&str] = &["0", "1", "2", ""];

#[derive(Debug, Clone)]
enum Op {
    Set(String, String),
    Get(String),
    Delete(String),
    Count(String),
    Begin,
    Commit,
    Rollback,
}

fn op() -> impl Strategy<Value = Op> {
    let key = select(KEYS.to_vec()).prop_map(str::to_string);
    let value = select(VALUES.to_vec()).prop_map(str::to_string);
    prop_oneof![
        4 => (key.clone(), value.clone()).prop_map(|(k, v)| Op::Set(k, v)),
        3 => key.clone().prop_map(Op::Get),
        2 => key.prop_map(Op::Delete),
        2 => value.prop_map(Op::Count),
        2 => Just(Op::Begin),
        1 => Just(Op::Commit),
        1 => Just(Op::Rollback),
    ]
}

/// Reference model: the same frame-stack semantics written with no regard
/// for anything but obviousness.
struct Model {
    frames: Vec<HashMap<String, String>>,
}

impl Model {
    fn new() -> Self {
        Self {
            frames: vec![HashMap::new()],
        }
    }

    fn top(&mut self) -> &mut HashMap<String, String> {
        self.frames.last_mut().unwrap()
    }

    /// Apply one op; returns what the store is expected to observe.
    fn apply(&mut self, op: &Op) -> Expected {
        match op {
            Op::Set(k, v) => {
                self.top().insert(k.clone(), v.clone());
                Expected::Unit
            }
            Op::Get(k) => Expected::Value(self.top().get(k).cloned()),
            Op::Delete(k) => {
                self.top().remove(k);
                Expected::Unit
            }
            Op::Count(v) => Expected::Count(self.top().values().filter(|x| *x == v).count()),
            Op::Begin => {
                let copy = self.frames.last().unwrap().clone();
                self.frames.push(copy);
                Expected::Unit
            }
            Op::Commit => {
                if self.frames.len() == 1 {
                    Expected::NoActiveTransaction
                } else {
                    let popped = self.frames.pop().unwrap();
                    self.top().extend(popped);
                    Expected::Unit
                }
            }
            Op::Rollback => {
                if self.frames.len() == 1 {
                    Expected::NoActiveTransaction
                } else {
                    self.frames.pop();
                    Expected::Unit
                }
            }
        }
    }
}

#[derive(Debug, PartialEq)]
enum Expected {
    Unit,
    Value(Option<String>),
    Count(usize),
    NoActiveTransaction,
}

/// Observable state of the active frame over the closed key universe.
fn observe(store: &TransactionalStore) -> Vec<(&'static str, Option<String>)> {
    KEYS.iter()
        .map(|k| (*k, store.get(k).map(str::to_string)))
        .collect()
}

proptest! {
    /// Random sequences agree with the reference model, op by op and in
    /// final observable state.
    #[test]
    fn store_matches_reference_model(ops in prop::collection::vec(op(), 0..200)) {
        let mut store = TransactionalStore::new();
        let mut model = Model::new();

        for op in &ops {
            let expected = model.apply(op);
            match op {
                Op::Set(k, v) => store.set(k.clone(), v.clone()),
                Op::Get(k) => {
                    prop_assert_eq!(
                        Expected::Value(store.get(k).map(str::to_string)),
                        expected
                    );
                }
                Op::Delete(k) => {
                    store.delete(k);
                }
                Op::Count(v) => {
                    prop_assert_eq!(Expected::Count(store.count(v)), expected);
                }
                Op::Begin => store.begin(),
                Op::Commit => {
                    let got = match store.commit() {
                        Ok(()) => Expected::Unit,
                        Err(StoreError::NoActiveTransaction) => Expected::NoActiveTransaction,
                    };
                    prop_assert_eq!(got, expected);
                }
                Op::Rollback => {
                    let got = match store.rollback() {
                        Ok(()) => Expected::Unit,
                        Err(StoreError::NoActiveTransaction) => Expected::NoActiveTransaction,
                    };
                    prop_assert_eq!(got, expected);
                }
            }
            prop_assert_eq!(store.depth(), model.frames.len());
        }

        for (key, value) in observe(&store) {
            prop_assert_eq!(model.frames.last().unwrap().get(key).cloned(), value);
        }
    }

    /// begin → arbitrary mutations → rollback restores the exact frame
    /// state that existed before the begin.
    #[test]
    fn rollback_restores_frame(
        setup in prop::collection::vec(op(), 0..50),
        mutations in prop::collection::vec(op(), 0..50),
    ) {
        let mut store = TransactionalStore::new();
        for op in &setup {
            // Lifecycle ops in the setup are fine; errors are ignored.
            apply_ignoring_errors(&mut store, op);
        }

        let before = observe(&store);
        let depth = store.depth();
        store.begin();

        for op in &mutations {
            match op {
                Op::Set(k, v) => store.set(k.clone(), v.clone()),
                Op::Delete(k) => {
                    store.delete(k);
                }
                // Keep the nesting balanced inside the probe window so the
                // rollback below closes the frame we opened.
                _ => {}
            }
        }

        store.rollback().unwrap();
        prop_assert_eq!(store.depth(), depth);
        prop_assert_eq!(observe(&store), before);
    }

    /// N opens need exactly N closes to return to the idle state.
    #[test]
    fn nesting_is_symmetric(n in 1usize..32, close_with_commit in any::<bool>()) {
        let mut store = TransactionalStore::new();
        for _ in 0..n {
            store.begin();
        }
        for i in 0..n {
            prop_assert!(store.in_transaction(), "still open before close {i}");
            let result = if close_with_commit {
                store.commit()
            } else {
                store.rollback()
            };
            prop_assert_eq!(result, Ok(()));
        }
        prop_assert_eq!(store.depth(), 1);
        prop_assert_eq!(store.commit(), Err(StoreError::NoActiveTransaction));
        prop_assert_eq!(store.rollback(), Err(StoreError::NoActiveTransaction));
    }
}

fn apply_ignoring_errors(store: &mut TransactionalStore, op: &Op) {
    match op {
        Op::Set(k, v) => store.set(k.clone(), v.clone()),
        Op::Get(_) | Op::Count(_) => {}
        Op::Delete(k) => {
            store.delete(k);
        }
        Op::Begin => store.begin(),
        Op::Commit => {
            let _ = store.commit();
        }
        Op::Rollback => {
            let _ = store.rollback();
        }
    }
}
