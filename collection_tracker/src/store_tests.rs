//! Unit tests for the owned collection store

use super::*;
use std::cell::RefCell;
use std::rc::Rc;

fn ids(store: &OwnedCollectionStore) -> Vec<&str> {
    store.iter().map(|(id, _)| id).collect()
}

// ============================================================================
// Basic operations
// ============================================================================

mod basic_tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let store = OwnedCollectionStore::new();
        assert!(store.is_empty());
        assert!(!store.has("A1-001"));
        assert_eq!(store.get("A1-001"), None);
    }

    #[test]
    fn test_set_marks_owned() {
        let mut store = OwnedCollectionStore::new();
        store.set("A1-001", OwnedEntry::default());

        assert!(store.has("A1-001"));
        assert_eq!(store.get("A1-001"), Some(&OwnedEntry { duplicates: None }));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_set_overwrites_wholesale() {
        let mut store = OwnedCollectionStore::new();
        store.set("A1-001", OwnedEntry::with_duplicates(3));
        store.set("A1-001", OwnedEntry::default());

        // Not merged: the earlier duplicate count is gone
        assert_eq!(store.get("A1-001").and_then(|e| e.duplicates), None);
        assert!(store.has("A1-001"));
    }

    #[test]
    fn test_delete_removes_entry() {
        let mut store = OwnedCollectionStore::new();
        store.set("A1-001", OwnedEntry::with_duplicates(1));
        store.delete("A1-001");

        assert!(!store.has("A1-001"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_iteration_keeps_insertion_order() {
        let mut store = OwnedCollectionStore::new();
        store.set("c", OwnedEntry::default());
        store.set("a", OwnedEntry::default());
        store.set("b", OwnedEntry::default());
        store.set("c", OwnedEntry::with_duplicates(2));

        assert_eq!(ids(&store), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_delete_in_middle_keeps_lookup_consistent() {
        let mut store = OwnedCollectionStore::new();
        store.set("a", OwnedEntry::with_duplicates(1));
        store.set("b", OwnedEntry::with_duplicates(2));
        store.set("c", OwnedEntry::with_duplicates(3));
        store.delete("a");

        assert_eq!(ids(&store), vec!["b", "c"]);
        assert_eq!(store.get("c").and_then(|e| e.duplicates), Some(3));
        store.set("c", OwnedEntry::with_duplicates(4));
        assert_eq!(ids(&store), vec!["b", "c"]);
        assert_eq!(store.get("c").and_then(|e| e.duplicates), Some(4));
    }
}

// ============================================================================
// Idempotence
// ============================================================================

mod idempotence_tests {
    use super::*;

    #[test]
    fn test_delete_twice_same_as_once() {
        let mut once = OwnedCollectionStore::new();
        once.set("a", OwnedEntry::default());
        once.set("b", OwnedEntry::default());
        once.delete("a");

        let mut twice = OwnedCollectionStore::new();
        twice.set("a", OwnedEntry::default());
        twice.set("b", OwnedEntry::default());
        twice.delete("a");
        twice.delete("a");

        assert_eq!(once.cards(), twice.cards());
    }

    #[test]
    fn test_set_twice_same_as_once() {
        let mut once = OwnedCollectionStore::new();
        once.set("a", OwnedEntry::with_duplicates(5));

        let mut twice = OwnedCollectionStore::new();
        twice.set("a", OwnedEntry::with_duplicates(5));
        twice.set("a", OwnedEntry::with_duplicates(5));

        assert_eq!(once.cards(), twice.cards());
    }
}

// ============================================================================
// Subscriptions
// ============================================================================

mod subscription_tests {
    use super::*;

    #[test]
    fn test_subscribers_see_applied_mutation() {
        let mut store = OwnedCollectionStore::new();
        let seen: Rc<RefCell<Vec<(StoreChange, usize, bool)>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |cards, change| {
            sink.borrow_mut()
                .push((change.clone(), cards.len(), cards.has(change.card_id())));
        });

        store.set("a", OwnedEntry::default());
        store.delete("a");

        let seen = seen.borrow();
        assert_eq!(
            *seen,
            vec![
                (
                    StoreChange::Set {
                        card_id: "a".to_string()
                    },
                    1,
                    true
                ),
                (
                    StoreChange::Deleted {
                        card_id: "a".to_string()
                    },
                    0,
                    false
                ),
            ]
        );
    }

    #[test]
    fn test_delete_of_absent_card_does_not_notify() {
        let mut store = OwnedCollectionStore::new();
        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        store.subscribe(move |_, _| *counter.borrow_mut() += 1);

        store.delete("missing");
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_every_subscriber_is_notified() {
        let mut store = OwnedCollectionStore::new();
        let count = Rc::new(RefCell::new(0));
        for _ in 0..3 {
            let counter = Rc::clone(&count);
            store.subscribe(move |_, _| *counter.borrow_mut() += 1);
        }

        store.set("a", OwnedEntry::default());
        assert_eq!(*count.borrow(), 3);
    }

    #[test]
    fn test_from_entries_does_not_notify() {
        let store = OwnedCollectionStore::from_entries(vec![
            ("a".to_string(), OwnedEntry::default()),
            ("b".to_string(), OwnedEntry::with_duplicates(2)),
        ]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("b").and_then(|e| e.duplicates), Some(2));
    }
}

#[test]
fn test_owned_entry_serialization_omits_missing_duplicates() {
    assert_eq!(
        serde_json::to_string(&OwnedEntry::default()).unwrap(),
        "{}"
    );
    assert_eq!(
        serde_json::to_string(&OwnedEntry::with_duplicates(2)).unwrap(),
        r#"{"duplicates":2}"#
    );
}
