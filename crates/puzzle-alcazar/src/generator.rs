//! Alcazar generator (spec.md §4.6.2): same shape as the Walls generator,
//! but with one combined candidate list instead of a border/interior split,
//! a flat (not difficulty-scaled) border-reduce cap, and a corner-cell rule
//! that is re-checked after every erasure, not only before a border one
//! (`original_source/Unfinished/alcazar.c`, see SPEC_FULL.md §7).

use crate::board::{Board, EdgeState};
use crate::propagator::solve_to_quiescence;
use puzzle_core::{generate_hamiltonian_path, Difficulty, LoopFinder, PuzzleRng, Size, Verdict};

const MAX_OUTER_RESTARTS: usize = 200;

/// Flat border-reduce cap (spec.md §4.6.2: "a fixed cap, ≈200 default"),
/// not scaled per difficulty the way the Walls `bordernum/4`..`bordernum`
/// split is.
const BORDER_REDUCE_CAP: usize = 200;

pub fn generate(size: Size, difficulty: Difficulty, rng: &mut PuzzleRng) -> Board {
    for attempt in 0..MAX_OUTER_RESTARTS {
        if let Some(board) = try_generate_once(size, difficulty, rng) {
            return board;
        }
        log::warn!("alcazar generator restart {attempt} (difficulty-monotonicity check failed)");
    }
    log::warn!("alcazar generator exceeded {MAX_OUTER_RESTARTS} restarts, returning unchecked puzzle");
    try_generate_once_unchecked(size, difficulty, rng)
}

fn try_generate_once(size: Size, difficulty: Difficulty, rng: &mut PuzzleRng) -> Option<Board> {
    let board = try_generate_once_unchecked(size, difficulty, rng);

    // Border-wall reduction can open a second route between two interior
    // cells without ever violating the degree-2 PATH rule; that shows up
    // as a loop in the dual graph of non-WALL edges, distinct from the
    // single carved path. Reject and let the caller restart.
    if has_structural_loop(&board) {
        return None;
    }

    if let Some(lower) = lower_tier(difficulty) {
        let mut check = board.clone();
        if solve_to_quiescence(&mut check, lower).map(|v| v == Verdict::Solved).unwrap_or(false) {
            return None;
        }
    }
    Some(board)
}

fn lower_tier(d: Difficulty) -> Option<Difficulty> {
    match d {
        Difficulty::Easy => None,
        Difficulty::Normal => Some(Difficulty::Easy),
        Difficulty::Hard => Some(Difficulty::Normal),
        Difficulty::Tricky => unreachable!("Alcazar has no TRICKY tier"),
    }
}

/// `true` if the dual graph of non-WALL edges (cells plus the outside
/// sentinel) contains a cycle, i.e. the carved-and-reduced wall layout
/// offers more than one route between some pair of cells.
fn has_structural_loop(board: &Board) -> bool {
    let (w, h) = (board.width(), board.height());
    let outside = (w * h) as usize;
    let mut adj: Vec<Vec<usize>> = vec![Vec::new(); outside + 1];
    for p in board.cells() {
        let this = board.point_to_index(p) as usize;
        let edges = board.incident_edges(p);
        let neighbors = [(p.x, p.y - 1), (p.x + 1, p.y), (p.x, p.y + 1), (p.x - 1, p.y)];
        for (i, &e) in edges.iter().enumerate() {
            if board.state_by_id(e) == EdgeState::Wall {
                continue;
            }
            let (nx, ny) = neighbors[i];
            let other = if nx < 0 || nx >= w || ny < 0 || ny >= h {
                outside
            } else {
                (ny * w + nx) as usize
            };
            adj[this].push(other);
        }
    }
    let loops = LoopFinder::build(outside + 1, |v| adj[v].clone().into_iter());
    adj.iter().enumerate().any(|(v, ns)| ns.iter().any(|&u| loops.is_loop_edge(v, u)))
}

/// `true` iff every corner cell keeps at least one of its two border edges
/// WALL (spec.md §4.6.2's corner-cell rule, re-checked post-erasure per
/// SPEC_FULL.md §7).
fn corner_rule_holds(board: &Board) -> bool {
    let (w, h) = (board.width(), board.height());
    let corners = [
        puzzle_core::Point::new(0, 0),
        puzzle_core::Point::new(w - 1, 0),
        puzzle_core::Point::new(0, h - 1),
        puzzle_core::Point::new(w - 1, h - 1),
    ];
    corners.iter().all(|&p| {
        let [a, b] = board.corner_border_edges(p);
        !(board.state_by_id(a) != EdgeState::Wall && board.state_by_id(b) != EdgeState::Wall)
    })
}

fn try_generate_once_unchecked(size: Size, difficulty: Difficulty, rng: &mut PuzzleRng) -> Board {
    let path = generate_hamiltonian_path(size, rng);
    let mut board = Board::new(size);
    for id in board.all_edge_ids() {
        board.set_state_by_id(id, EdgeState::Wall);
    }
    for w in path.windows(2) {
        carve(&mut board, w[0], w[1]);
    }
    carve_exit_stub(&mut board, path[0]);
    carve_exit_stub(&mut board, *path.last().unwrap());

    let mut border_walls = Vec::new();
    let mut interior_walls = Vec::new();
    for id in board.all_edge_ids() {
        if board.state_by_id(id) == EdgeState::Wall {
            if board.is_border_edge(id) {
                border_walls.push(id);
            } else {
                interior_walls.push(id);
            }
        }
    }
    rng.shuffle(&mut border_walls);
    border_walls.truncate(BORDER_REDUCE_CAP);

    let mut candidates = interior_walls;
    candidates.extend(border_walls);
    rng.shuffle(&mut candidates);

    for id in candidates {
        let mut trial = board.clone();
        trial.set_state_by_id(id, EdgeState::None);
        if !corner_rule_holds(&trial) {
            log::trace!("alcazar generator: reverted erasure of edge {id} (corner-cell rule)");
            continue;
        }
        match solve_to_quiescence(&mut trial, difficulty) {
            Ok(Verdict::Solved) => {
                board.set_state_by_id(id, EdgeState::None);
                log::debug!("alcazar generator: committed erasure of edge {id}");
            }
            _ => {
                log::trace!("alcazar generator: reverted erasure of edge {id}");
            }
        }
    }

    let mut fixed_puzzle = Board::new(size);
    for id in board.all_edge_ids() {
        if board.state_by_id(id) == EdgeState::Wall {
            fixed_puzzle.set_fixed_by_id(id, EdgeState::Wall);
        }
    }
    fixed_puzzle
}

fn carve(board: &mut Board, a: puzzle_core::Point, b: puzzle_core::Point) {
    let (o, x, y) = edge_between(a, b);
    board.set_state(x, y, o, EdgeState::None);
}

fn carve_exit_stub(board: &mut Board, endpoint: puzzle_core::Point) {
    use puzzle_core::{Move, Orientation};
    let (w, h) = (board.width(), board.height());
    let dirs_and_edges: &[(Move, Orientation, i32, i32)] = &[
        (Move::UP, Orientation::Horizontal, endpoint.x, endpoint.y),
        (Move::DOWN, Orientation::Horizontal, endpoint.x, endpoint.y + 1),
        (Move::LEFT, Orientation::Vertical, endpoint.x, endpoint.y),
        (Move::RIGHT, Orientation::Vertical, endpoint.x + 1, endpoint.y),
    ];
    for &(dir, o, x, y) in dirs_and_edges {
        let neighbor = endpoint + dir;
        let off_grid = neighbor.x < 0 || neighbor.x >= w || neighbor.y < 0 || neighbor.y >= h;
        if off_grid {
            board.set_state(x, y, o, EdgeState::None);
            return;
        }
    }
}

fn edge_between(a: puzzle_core::Point, b: puzzle_core::Point) -> (puzzle_core::Orientation, i32, i32) {
    use puzzle_core::Orientation;
    if a.y == b.y {
        (Orientation::Vertical, a.x.max(b.x), a.y)
    } else {
        (Orientation::Horizontal, a.x, a.y.max(b.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::validate;

    #[test]
    fn same_seed_same_description() {
        let size = Size::new(4, 4);
        let mut rng1 = PuzzleRng::from_seed_str("123456");
        let mut rng2 = PuzzleRng::from_seed_str("123456");
        let b1 = generate(size, Difficulty::Normal, &mut rng1);
        let b2 = generate(size, Difficulty::Normal, &mut rng2);
        assert_eq!(crate::desc::encode(&b1), crate::desc::encode(&b2));
    }

    #[test]
    fn generated_puzzle_respects_corner_rule() {
        let size = Size::new(5, 5);
        let mut rng = PuzzleRng::from_u64(7);
        let board = generate(size, Difficulty::Normal, &mut rng);
        assert!(corner_rule_holds(&board));
        let mut check = board.clone();
        assert_eq!(validate(&mut check), Verdict::Ambiguous);
    }
}
