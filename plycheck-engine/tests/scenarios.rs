//! Scenarios
//!
//! Small trees whose best move is worked out by hand, searched with every algorithm.

use plycheck_engine::search::{self, Algorithm};
use plycheck_engine::*;

const OPENING: &str = "0,
- 10, a2a4
-- 0, a7a5
-- 5, a7a6
- 5, a2a3
-- 0, a7a6
-- -5, a7a5
";

fn opening() -> Node {
    OPENING.parse().unwrap()
}

#[test]
fn opening_full_depth() {
    let tree = opening();
    for algorithm in Algorithm::ALL {
        let result = search::search(&tree, Player::White, Depth::Full, algorithm);
        assert_eq!(result.best_move.as_deref(), Some("a2a4"), "{}", algorithm);
        assert_eq!(result.score, Score(0), "{}", algorithm);
        assert_eq!(result.depth, 2);
        assert_eq!(
            result.root_scores,
            vec![("a2a4".to_string(), Score(0)), ("a2a3".to_string(), Score(-5))]
        );
    }
}

#[test]
fn opening_depth_one_reads_child_values() {
    let tree = opening();
    for algorithm in Algorithm::ALL {
        let result = search::search(&tree, Player::White, Depth::Plies(1), algorithm);
        assert_eq!(result.best_move.as_deref(), Some("a2a4"), "{}", algorithm);
        assert_eq!(result.score, Score(10), "{}", algorithm);
        // Root and its two children only.
        assert_eq!(result.nodes, 3, "{}", algorithm);
    }
}

#[test]
fn opening_black_to_move() {
    let tree = opening();
    for algorithm in Algorithm::ALL {
        let full = search::search(&tree, Player::Black, Depth::Full, algorithm);
        assert_eq!(full.best_move.as_deref(), Some("a2a3"), "{}", algorithm);
        assert_eq!(full.score, Score(0), "{}", algorithm);

        let shallow = search::search(&tree, Player::Black, Depth::Plies(1), algorithm);
        assert_eq!(shallow.best_move.as_deref(), Some("a2a3"), "{}", algorithm);
        assert_eq!(shallow.score, Score(-5), "{}", algorithm);
        assert_eq!(shallow.absolute_score(), Score(5), "{}", algorithm);
    }
}

#[test]
fn horizon_effect_changes_move() {
    // `a` looks best from its own value, but Black's reply refutes it.
    let tree: Node = "0,
- 50, a
-- -100, a1
-- 20, a2
- 10, b
-- 5, b1
-- 8, b2
"
    .parse()
    .unwrap();

    for algorithm in Algorithm::ALL {
        let shallow = search::search(&tree, Player::White, Depth::Plies(1), algorithm);
        let full = search::search(&tree, Player::White, Depth::Full, algorithm);
        assert_eq!(shallow.best_move.as_deref(), Some("a"), "{}", algorithm);
        assert_eq!(shallow.score, Score(50));
        assert_eq!(full.best_move.as_deref(), Some("b"), "{}", algorithm);
        assert_eq!(full.score, Score(5));
    }
}

#[test]
fn depth_beyond_height_is_full_search() {
    let tree = opening();
    for algorithm in Algorithm::ALL {
        let deep = search::search(&tree, Player::White, Depth::Plies(9), algorithm);
        let full = search::search(&tree, Player::White, Depth::Full, algorithm);
        assert_eq!(deep.best_move, full.best_move);
        assert_eq!(deep.score, full.score);
        assert_eq!(deep.depth, 9);
    }
}

#[test]
fn ties_go_to_earliest_move() {
    let tree: Node = "0,
- 0, c0
-- 1, c0a
- 0, c1
-- 3, c1a
-- 4, c1b
- 0, c2
-- 7, c2a
-- 3, c2b
"
    .parse()
    .unwrap();

    for algorithm in Algorithm::ALL {
        let result = search::search(&tree, Player::White, Depth::Full, algorithm);
        assert_eq!(result.best_move.as_deref(), Some("c1"), "{}", algorithm);
        assert_eq!(result.score, Score(3), "{}", algorithm);
    }
}

#[test]
fn ties_go_to_earliest_move_for_black() {
    let tree: Node = "0,\n- 4, x\n- -2, y\n- -2, z\n- 9, w\n".parse().unwrap();
    for algorithm in Algorithm::ALL {
        let result = search::search(&tree, Player::Black, Depth::Full, algorithm);
        assert_eq!(result.best_move.as_deref(), Some("y"), "{}", algorithm);
        assert_eq!(result.absolute_score(), Score(-2), "{}", algorithm);
    }
}

#[test]
fn uneven_depths_use_leaf_values() {
    // `a` is a leaf at ply 1 while `b` goes two plies deeper.
    let tree: Node = "0,
- 3, a
- 100, b
-- 100, b1
--- 1, b1a
--- 2, b1b
"
    .parse()
    .unwrap();

    for algorithm in Algorithm::ALL {
        let result = search::search(&tree, Player::White, Depth::Full, algorithm);
        // b -> b1 is Black's only reply, then White picks 2.
        assert_eq!(result.root_scores[1], ("b".to_string(), Score(2)));
        assert_eq!(result.best_move.as_deref(), Some("a"), "{}", algorithm);
        assert_eq!(result.score, Score(3), "{}", algorithm);
    }
}

#[test]
fn pruning_visits_fewer_nodes() {
    // Black to move at `m`. Once `a` is known to cost 5, the first reply of `b`
    // shows it costs at least 7, so `b2` is never looked at.
    let tree: Node = "0,
- 0, m
-- 0, a
--- 5, a1
--- 1, a2
-- 0, b
--- 7, b1
--- 9, b2
"
    .parse()
    .unwrap();

    let negamax = search::negamax(&tree, Player::White, Depth::Full);
    let alpha_beta = search::alpha_beta(&tree, Player::White, Depth::Full);
    let negascout = search::negascout(&tree, Player::White, Depth::Full);

    assert_eq!(negamax.nodes, 8);
    assert_eq!(alpha_beta.nodes, 7);
    assert_eq!(negascout.nodes, 7);
    assert_eq!(negamax.score, Score(5));
    assert_eq!(alpha_beta.score, Score(5));
    assert_eq!(negascout.score, Score(5));

    let skipped = tree.get(&[0, 1, 1]).unwrap();
    for algorithm in [Algorithm::AlphaBeta, Algorithm::NegaScout] {
        let visited = search::trace(&tree, Player::White, Depth::Full, algorithm);
        assert!(visited.iter().all(|node| !std::ptr::eq(*node, skipped)));
    }
}
