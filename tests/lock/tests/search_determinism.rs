//! In-process determinism: repeated searches over the same grid and policy
//! produce byte-identical audit graphs, paths, and expansion counts.

use crawler_harness::worlds::crawler::CrawlerWorld;
use crawler_harness::worlds::fixtures;
use crawler_search::policy::SearchPolicy;

const RUNS: usize = 10;

fn assert_deterministic(world: &CrawlerWorld, capacity: usize) {
    let policy = SearchPolicy::with_capacity(capacity);
    let first = world.search_with(&policy).unwrap();
    let first_bytes = first.graph.to_json_bytes().unwrap();
    let first_digest = first.graph.digest().unwrap();

    for run in 1..RUNS {
        let again = world.search_with(&policy).unwrap();
        assert_eq!(
            again.graph.to_json_bytes().unwrap(),
            first_bytes,
            "graph bytes differ on run {run} (capacity {capacity})"
        );
        assert_eq!(again.graph.digest().unwrap(), first_digest);
        assert_eq!(again.expansions, first.expansions);
        assert_eq!(again.path(), first.path());
        assert_eq!(again.termination_reason(), first.termination_reason());
    }
}

#[test]
fn default_grid_is_deterministic_across_capacities() {
    let world = CrawlerWorld::with_default_stamina(fixtures::default_grid().unwrap());
    for capacity in [1, 2, 3, 5, 10, 1000] {
        assert_deterministic(&world, capacity);
    }
}

#[test]
fn corridor_is_deterministic() {
    let world = CrawlerWorld::with_default_stamina(fixtures::corridor_grid().unwrap());
    assert_deterministic(&world, 4);
}

#[test]
fn independent_worlds_agree() {
    // Two worlds built from the same text share no allocations.
    let a = CrawlerWorld::with_default_stamina(fixtures::default_grid().unwrap());
    let b = CrawlerWorld::with_default_stamina(fixtures::default_grid().unwrap());
    let ra = a.search(7).unwrap();
    let rb = b.search(7).unwrap();
    assert_eq!(ra.graph.digest().unwrap(), rb.graph.digest().unwrap());
}
