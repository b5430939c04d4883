//! Audit graph invariants on real crawler searches.

use std::collections::{BTreeMap, BTreeSet};

use crawler_harness::worlds::crawler::{CrawlerSearchResult, CrawlerWorld};
use crawler_harness::worlds::fixtures;
use crawler_search::graph::{CandidateOutcome, TerminationReason};

fn default_search(capacity: usize) -> CrawlerSearchResult {
    CrawlerWorld::with_default_stamina(fixtures::default_grid().unwrap())
        .search(capacity)
        .unwrap()
}

#[test]
fn frontier_never_exceeds_capacity() {
    for capacity in [1, 2, 4, 8] {
        let result = default_search(capacity);
        for event in &result.graph.expansions {
            assert!(
                event.frontier_size <= capacity as u64,
                "capacity {capacity}: frontier {} at expansion {}",
                event.frontier_size,
                event.expansion_order
            );
        }
    }
}

#[test]
fn expanded_nodes_were_admitted_by_their_parent() {
    let result = default_search(6);
    let mut admitted_by: BTreeMap<u64, u64> = BTreeMap::new();
    for (i, event) in result.graph.expansions.iter().enumerate() {
        assert_eq!(event.expansion_order, i as u64 + 1);
        if i == 0 {
            assert_eq!(event.node_id, 0);
            assert_eq!(event.parent_id, None);
        } else {
            let parent = admitted_by
                .get(&event.node_id)
                .copied()
                .unwrap_or_else(|| panic!("node {} expanded but never admitted", event.node_id));
            assert_eq!(event.parent_id, Some(parent));
        }
        for candidate in &event.candidates {
            if let CandidateOutcome::Admitted { to_node } = candidate.outcome {
                assert!(admitted_by.insert(to_node, event.node_id).is_none());
            }
        }
    }
}

#[test]
fn pruned_nodes_are_never_expanded() {
    let result = default_search(2);
    let pruned: BTreeSet<u64> = result
        .graph
        .expansions
        .iter()
        .flat_map(|e| e.pruned_node_ids.iter().copied())
        .collect();
    assert_eq!(pruned.len() as u64, result.graph.metadata.total_pruned);
    for event in &result.graph.expansions {
        assert!(!pruned.contains(&event.node_id));
    }
}

#[test]
fn no_state_is_expanded_twice() {
    let result = default_search(1000);
    let mut seen = BTreeSet::new();
    for event in &result.graph.expansions {
        assert!(
            seen.insert(event.state_fingerprint.clone()),
            "state {} expanded twice",
            event.state_fingerprint
        );
    }
}

#[test]
fn goal_event_closes_the_log() {
    let result = default_search(1000);
    let TerminationReason::GoalReached { node_id } = result.termination_reason() else {
        panic!("expected a goal, got {:?}", result.termination_reason());
    };
    let last = result.graph.expansions.last().unwrap();
    assert!(last.is_goal);
    assert!(last.candidates.is_empty());
    assert_eq!(last.node_id, node_id);
    assert!(result.graph.expansions[..result.graph.expansions.len() - 1]
        .iter()
        .all(|e| !e.is_goal));
}

#[test]
fn counters_agree_with_events() {
    let result = default_search(3);
    let meta = &result.graph.metadata;
    let candidates: u64 = result
        .graph
        .expansions
        .iter()
        .map(|e| e.candidates.len() as u64)
        .sum();
    let duplicates = result
        .graph
        .expansions
        .iter()
        .flat_map(|e| &e.candidates)
        .filter(|c| c.outcome.is_duplicate())
        .count() as u64;
    assert_eq!(meta.total_candidates_generated, candidates);
    assert_eq!(meta.total_duplicates_suppressed, duplicates);
    assert_eq!(meta.total_expansions, result.expansions);
    assert_eq!(meta.world_id, "crawler");
    assert_eq!(
        meta.root_state_fingerprint,
        fixtures::default_grid()
            .unwrap()
            .initial_state()
            .fingerprint()
            .as_str()
    );
}

#[test]
fn graph_json_has_the_documented_shape() {
    let result = default_search(4);
    let value: serde_json::Value =
        serde_json::from_slice(&result.graph.to_json_bytes().unwrap()).unwrap();
    let first = &value["expansions"][0];
    assert_eq!(first["expansion_order"], 1);
    assert_eq!(first["head"]["x"], 1);
    assert_eq!(first["head"]["y"], 1);
    assert_eq!(first["candidates"][0]["move"], "R");
    assert_eq!(first["candidates"][0]["outcome"]["type"], "Admitted");
    assert!(value["metadata"]["termination_reason"]["type"].is_string());
}
