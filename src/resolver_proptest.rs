//! Property-based tests for model resolution.
//!
//! These tests use proptest to generate random acyclic model sets, shuffle
//! them, and check that resolution behaves the same for every input order.

#[cfg(test)]
mod proptest_tests {
    use crate::resolver::{resolve, Markers, Record};
    use proptest::prelude::*;
    use proptest::sample::Index;

    fn name(i: usize) -> String {
        format!("ns:m{}", i)
    }

    /// Acyclic record sets: record `i` may only inherit from a record `j < i`.
    fn forest() -> impl Strategy<Value = Vec<Record>> {
        prop::collection::vec(prop::option::of(any::<Index>()), 1..60).prop_map(|parents| {
            parents
                .iter()
                .enumerate()
                .map(|(i, parent)| match parent {
                    Some(index) if i > 0 => Record::child(name(i), name(index.index(i))),
                    _ => Record::root(name(i)),
                })
                .collect()
        })
    }

    fn shuffled_forest() -> impl Strategy<Value = (Vec<Record>, Vec<Record>)> {
        forest().prop_flat_map(|records| (Just(records.clone()), Just(records).prop_shuffle()))
    }

    proptest! {
        /// Property: every record of an acyclic, closed set gets exactly one node
        #[test]
        fn resolve_attaches_every_record(records in forest()) {
            let root = resolve("ns", &records, &Markers::default()).unwrap();
            prop_assert_eq!(root.size(), records.len() + 1);
            for record in &records {
                prop_assert!(root.find(&record.qualified_name).is_some());
            }
        }

        /// Property: each node sits under the node of its record's parent
        #[test]
        fn resolve_follows_parent_edges((_, records) in shuffled_forest()) {
            let root = resolve("ns", &records, &Markers::default()).unwrap();
            for record in &records {
                let parent = match &record.parent {
                    Some(parent) => root.find(parent).unwrap(),
                    None => &root,
                };
                prop_assert!(
                    parent.children.iter().any(|child| child.label == record.qualified_name),
                    "{} is not a child of {}",
                    record.qualified_name,
                    parent.label
                );
            }
        }

        /// Property: input order only changes sibling order
        #[test]
        fn resolve_is_order_independent((records, shuffled) in shuffled_forest()) {
            let first = resolve("ns", &records, &Markers::default()).unwrap();
            let second = resolve("ns", &shuffled, &Markers::default()).unwrap();
            prop_assert_eq!(first.canonical(), second.canonical());
        }

        /// Property: a two-record cycle always fails, wherever it sits in the input
        #[test]
        fn resolve_rejects_cycles((_, mut records) in shuffled_forest(), at in any::<Index>()) {
            let position = at.index(records.len() + 1);
            records.insert(position, Record::child("ns:x", "ns:y"));
            records.push(Record::child("ns:y", "ns:x"));

            let err = resolve("ns", &records, &Markers::default()).unwrap_err();
            prop_assert!(err.pending.contains(&"ns:x".to_string()));
            prop_assert!(err.pending.contains(&"ns:y".to_string()));
            prop_assert_eq!(err.unresolved, err.queued);
        }

        /// Property: a reference to a record outside the set always fails
        #[test]
        fn resolve_rejects_dangling_parents((_, mut records) in shuffled_forest(), at in any::<Index>()) {
            let position = at.index(records.len() + 1);
            records.insert(position, Record::child("ns:orphan", "ns:missing"));

            let err = resolve("ns", &records, &Markers::default()).unwrap_err();
            prop_assert!(err.pending.contains(&"ns:orphan".to_string()));
        }
    }
}
