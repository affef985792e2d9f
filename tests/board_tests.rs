/// Board producer integration tests: wiring rules and rendered walks.
use rand::rngs::StdRng;
use rand::SeedableRng;

use chainwalk::board::{self, Cell, BOARD_SIZE, DICE_MAX, MAX_WALK_STEPS};

fn cell(number: u32) -> Cell {
    board::build_board()[(number - 1) as usize]
}

#[test]
fn jump_cell_has_exactly_one_transition() {
    let chain = board::build_chain().unwrap();
    let id = chain.lookup(&cell(13)).unwrap();
    let node = chain.node(id).unwrap();

    assert_eq!(node.out_degree(), 1);
    let transition = node.transitions()[0];
    assert_eq!(transition.frequency, 1);
    assert_eq!(chain.payload(transition.target).unwrap().number, 4);
}

#[test]
fn plain_cell_fans_out_per_die_face() {
    let chain = board::build_chain().unwrap();
    let id = chain.lookup(&cell(1)).unwrap();
    let node = chain.node(id).unwrap();

    assert_eq!(node.out_degree(), DICE_MAX as usize);
    for (face, transition) in (1..=DICE_MAX).zip(node.transitions()) {
        assert_eq!(transition.frequency, 1);
        assert_eq!(chain.payload(transition.target).unwrap().number, 1 + face);
    }
}

#[test]
fn fan_out_truncates_at_the_boundary() {
    let chain = board::build_chain().unwrap();
    // 96 is jump-free; only 97..=100 fit on the board
    let id = chain.lookup(&cell(96)).unwrap();
    assert_eq!(chain.node(id).unwrap().out_degree(), 4);

    let id = chain.lookup(&cell(99)).unwrap();
    assert_eq!(chain.node(id).unwrap().out_degree(), 1);
}

#[test]
fn last_cell_is_a_leaf() {
    let chain = board::build_chain().unwrap();
    let id = chain.lookup(&cell(BOARD_SIZE)).unwrap();
    assert!(chain.node(id).unwrap().is_leaf());
}

#[test]
fn chain_holds_one_node_per_cell() {
    let chain = board::build_chain().unwrap();
    assert_eq!(chain.len(), BOARD_SIZE as usize);
}

#[test]
fn walks_start_at_cell_one() {
    let chain = board::build_chain().unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..10 {
        let walk = board::random_walk(&chain, &mut rng, MAX_WALK_STEPS).unwrap();
        assert!(walk.starts_with("[1]"), "walk started elsewhere: {}", walk);
    }
}

#[test]
fn walks_respect_the_step_cap() {
    let chain = board::build_chain().unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..25 {
        let walk = board::random_walk(&chain, &mut rng, MAX_WALK_STEPS).unwrap();
        assert!(walk.split(" -> ").count() <= MAX_WALK_STEPS);
    }
}

#[test]
fn walks_are_reproducible_for_a_fixed_seed() {
    let chain = board::build_chain().unwrap();
    let mut rng1 = StdRng::seed_from_u64(77);
    let mut rng2 = StdRng::seed_from_u64(77);
    for _ in 0..5 {
        let w1 = board::random_walk(&chain, &mut rng1, MAX_WALK_STEPS).unwrap();
        let w2 = board::random_walk(&chain, &mut rng2, MAX_WALK_STEPS).unwrap();
        assert_eq!(w1, w2);
    }
}

#[test]
fn finished_walk_ends_at_the_last_cell_or_the_cap() {
    let chain = board::build_chain().unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..25 {
        let walk = board::random_walk(&chain, &mut rng, MAX_WALK_STEPS).unwrap();
        let steps: Vec<&str> = walk.split(" -> ").collect();
        if steps.len() < MAX_WALK_STEPS {
            // Stopped early: only the leaf cell 100 can do that
            assert_eq!(*steps.last().unwrap(), "[100]");
        }
    }
}
