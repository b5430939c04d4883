//! End-to-end crawler scenarios through the loader, world, and search.

use crawler_harness::loader::parse_grid;
use crawler_harness::runner::{run, RunConfig};
use crawler_harness::worlds::crawler::CrawlerWorld;
use crawler_harness::worlds::fixtures;
use crawler_kernel::carrier::grid::GridModel;
use crawler_kernel::carrier::position::Position;
use crawler_kernel::operators::cost::step_cost;
use crawler_kernel::operators::moves::Move;
use crawler_search::contract::SearchWorld;
use crawler_search::graph::TerminationReason;

#[test]
fn corridor_needs_exactly_three_rights() {
    let world = CrawlerWorld::with_default_stamina(fixtures::corridor_grid().unwrap());
    for capacity in [4, 10, 100] {
        let result = world.search(capacity).unwrap();
        assert_eq!(result.path(), Some(vec![Move::Right, Move::Right, Move::Right]));
        let goal = result.goal_node.as_ref().unwrap();
        assert_eq!(goal.path_cost, 6);
        assert_eq!(goal.state.head(), Position::new(4, 1));
        assert_eq!(result.expansions, 4);
    }
}

#[test]
fn open_row_uses_the_grid_edge_as_ground() {
    // No walls: the edge of a 4x1 grid is the only floor and ceiling.
    let grid = GridModel::new(
        Vec::new(),
        Position::new(3, 0),
        Position::new(0, 0),
        Vec::new(),
        (4, 1),
    )
    .unwrap();
    let world = CrawlerWorld::with_default_stamina(grid);
    assert_eq!(world.enumerate_moves(&world.root_state()), vec![Move::Right]);

    for capacity in [1, 4, 10] {
        let result = world.search(capacity).unwrap();
        assert_eq!(result.path(), Some(vec![Move::Right; 3]));
        assert_eq!(result.goal_node.as_ref().unwrap().path_cost, 6);
        assert_eq!(result.expansions, 4);
    }
}

#[test]
fn default_grid_is_solved_with_large_capacity() {
    let config = RunConfig {
        capacity: 1000,
        ..RunConfig::default()
    };
    let report = run(fixtures::default_grid().unwrap(), &config).unwrap();
    assert!(report.is_goal_reached(), "got {:?}", report.termination);
    let moves = report.moves.unwrap();
    assert!(!moves.is_empty());
    assert_eq!(
        report.cost,
        Some(moves.iter().map(|&m| step_cost(m)).sum())
    );
}

#[test]
fn capacity_one_terminates_on_default_grid() {
    let world = CrawlerWorld::with_default_stamina(fixtures::default_grid().unwrap());
    let result = world.search(1).unwrap();
    assert!(matches!(
        result.termination_reason(),
        TerminationReason::GoalReached { .. } | TerminationReason::FrontierExhausted
    ));
    assert_eq!(result.graph.metadata.capacity, 1);
}

#[test]
fn start_on_goal_returns_empty_path() {
    // Text has no glyph for a head on the goal; build the grid directly.
    let world = CrawlerWorld::with_default_stamina(
        GridModel::new(
            [Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)],
            Position::new(1, 1),
            Position::new(1, 1),
            Vec::new(),
            (3, 2),
        )
        .unwrap(),
    );
    let result = world.search(1).unwrap();
    assert_eq!(result.path(), Some(vec![]));
    assert_eq!(result.expansions, 1);
    assert_eq!(world.replay(&[]).unwrap().cost, 0);
}

#[test]
fn unsupported_head_can_only_fall() {
    let grid = parse_grid(
        "\
= = = = =
= . @ . =
= . . . =
= x . . =
= = = = =
",
    )
    .unwrap();
    let world = CrawlerWorld::with_default_stamina(grid);
    let root = world.root_state();
    assert_eq!(world.enumerate_moves(&root), vec![Move::Down]);

    let once = world.apply_move(&root, Move::Down).unwrap();
    assert_eq!(world.enumerate_moves(&once), vec![Move::Down]);
    let landed = world.apply_move(&once, Move::Down).unwrap();
    assert_eq!(landed.head(), Position::new(2, 1));
    assert_eq!(landed.stamina(), 0);
    assert!(!world.enumerate_moves(&landed).is_empty());
    assert!(!world.enumerate_moves(&landed).contains(&Move::Down));

    let result = world.search(10).unwrap();
    assert!(result.is_goal_reached());
    assert_eq!(result.path().unwrap()[..2], [Move::Down, Move::Down]);
}

#[test]
fn walled_in_head_exhausts_frontier() {
    let grid = parse_grid(
        "\
= = = = =
= @ = x =
= = = = =
",
    )
    .unwrap();
    let world = CrawlerWorld::with_default_stamina(grid);
    let result = world.search(5).unwrap();
    assert_eq!(result.termination_reason(), TerminationReason::FrontierExhausted);
    assert!(result.goal_node.is_none());
    assert_eq!(result.expansions, 1);
}

#[test]
fn trail_cells_from_the_grid_block_movement() {
    let grid = parse_grid(
        "\
= = = = = =
= o @ . x =
= = = = = =
",
    )
    .unwrap();
    let world = CrawlerWorld::with_default_stamina(grid);
    let root = world.root_state();
    assert_eq!(root.trail_len(), 1);
    assert_eq!(world.enumerate_moves(&root), vec![Move::Right]);
    assert_eq!(world.search(2).unwrap().path(), Some(vec![Move::Right; 2]));
}
