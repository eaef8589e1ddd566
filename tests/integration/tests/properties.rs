//! Property tests: friendship edits keep the graph consistent, and the
//! derived views behave the same on every graph those edits can reach.

use std::collections::{BTreeSet, HashSet};

use kinship_graph::SocialGraph;
use kinship_integration_tests::{isolated_users, secret_for};
use proptest::prelude::*;

const USERS: usize = 7;

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum Edit {
    Add(usize, usize),
    Remove(usize, usize),
}

fn arb_edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        (0..USERS, 0..USERS).prop_map(|(a, b)| Edit::Add(a, b)),
        (0..USERS, 0..USERS).prop_map(|(a, b)| Edit::Remove(a, b)),
    ]
}

fn arb_edits() -> impl Strategy<Value = Vec<Edit>> {
    prop::collection::vec(arb_edit(), 0..40)
}

fn name(i: usize) -> String {
    format!("u{}", i)
}

/// Apply edits, ignoring the ones the graph rejects.
fn build(edits: &[Edit]) -> SocialGraph {
    let mut graph = isolated_users(USERS);
    for edit in edits {
        let _ = match edit {
            Edit::Add(a, b) => graph.add_friend(&name(*a), &secret_for(&name(*a)), &name(*b)),
            Edit::Remove(a, b) => {
                graph.remove_friend(&name(*a), &secret_for(&name(*a)), &name(*b))
            }
        };
    }
    graph
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Every reachable graph is symmetric, irreflexive and duplicate-free.
    #[test]
    fn edits_preserve_invariants(edits in arb_edits()) {
        let graph = build(&edits);
        prop_assert!(graph.check_invariants().is_ok());
    }

    /// Adding a missing friendship and removing it again restores the graph.
    #[test]
    fn add_remove_round_trip(edits in arb_edits(), a in 0..USERS, b in 0..USERS) {
        let mut graph = build(&edits);
        let (a, b) = (name(a), name(b));
        prop_assume!(a != b);
        prop_assume!(!graph.get(&a).unwrap().is_friend(&b));

        let before = graph.clone();
        graph.add_friend(&a, &secret_for(&a), &b).unwrap();
        graph.remove_friend(&a, &secret_for(&a), &b).unwrap();
        prop_assert_eq!(graph, before);
    }

    /// A rejected edit never changes the graph.
    #[test]
    fn rejected_edits_leave_graph_untouched(edits in arb_edits(), a in 0..USERS, b in 0..USERS) {
        let mut graph = build(&edits);
        let (a, b) = (name(a), name(b));
        let before = graph.clone();

        if graph.add_friend(&a, "not-the-secret", &b).is_ok()
            || graph.remove_friend(&a, "not-the-secret", &b).is_ok()
        {
            prop_assert!(false, "wrong secret was accepted");
        }
        prop_assert_eq!(&graph, &before);

        if graph.get(&a).unwrap().is_friend(&b) {
            prop_assert!(graph.add_friend(&a, &secret_for(&a), &b).is_err());
        } else if a != b {
            prop_assert!(graph.remove_friend(&a, &secret_for(&a), &b).is_err());
        }
        prop_assert_eq!(graph, before);
    }

    /// Sorting keeps the same friends and is idempotent.
    #[test]
    fn sort_preserves_membership(edits in arb_edits(), who in 0..USERS) {
        let mut graph = build(&edits);
        let who = name(who);
        let pw = secret_for(&who);
        let members: BTreeSet<String> = graph.get(&who).unwrap().friends.iter().cloned().collect();

        graph.sort_friends(&who, &pw).unwrap();
        let once = graph.get(&who).unwrap().friends.clone();
        prop_assert_eq!(once.iter().cloned().collect::<BTreeSet<_>>(), members);

        graph.sort_friends(&who, &pw).unwrap();
        prop_assert_eq!(&graph.get(&who).unwrap().friends, &once);
    }

    /// Levels partition the reachable users: no user appears at two degrees,
    /// level one is the friend list, and the origin only appears at level zero.
    #[test]
    fn levels_partition_reachable_users(edits in arb_edits(), who in 0..USERS) {
        let graph = build(&edits);
        let who = name(who);
        let pw = secret_for(&who);

        prop_assert_eq!(graph.friends_at_level(&who, &pw, 0).unwrap(), vec![who.clone()]);
        prop_assert_eq!(
            graph.friends_at_level(&who, &pw, 1).unwrap(),
            graph.get(&who).unwrap().friends.clone()
        );

        let mut seen = HashSet::new();
        for degree in 1..=(USERS as i64) {
            for user in graph.friends_at_level(&who, &pw, degree).unwrap() {
                prop_assert!(user != who);
                prop_assert!(seen.insert(user), "user reported at two degrees");
            }
        }
        prop_assert!(graph.friends_at_level(&who, &pw, -1).unwrap().is_empty());
    }

    /// Country counts cover exactly the direct friends.
    #[test]
    fn country_counts_sum_to_friend_count(edits in arb_edits(), who in 0..USERS) {
        let graph = build(&edits);
        let who = name(who);
        let counts = graph.friend_countries_by_count(&who, &secret_for(&who)).unwrap();

        prop_assert!(counts.values().all(|&n| n >= 1));
        prop_assert_eq!(
            counts.values().sum::<usize>(),
            graph.get(&who).unwrap().friends.len()
        );
    }
}
