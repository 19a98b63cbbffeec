//! Alcazar validator (spec.md §4.3.2).
//!
//! Deliberately minimal: every cell must show exactly two PATH and two WALL
//! edges to count as solved; anything short of that is AMBIGUOUS. The
//! source this is grounded on never checks that the PATH edges form one
//! connected route with exactly two border exits (spec.md §9's Open
//! Question) — DESIGN.md records the decision to keep that limitation
//! rather than silently tighten it.

use crate::board::{Board, EdgeState};
use puzzle_core::Verdict;

pub fn validate(board: &mut Board) -> Verdict {
    board.clear_errors();

    let mut solved = true;
    for p in board.cells().collect::<Vec<_>>() {
        let edges = board.incident_edges(p);
        let mut n_path = 0;
        let mut n_wall = 0;
        for &e in &edges {
            match board.state_by_id(e) {
                EdgeState::Path => n_path += 1,
                EdgeState::Wall => n_wall += 1,
                EdgeState::None => {}
            }
        }
        if n_path > 2 || n_wall > 2 {
            solved = false;
            for &e in &edges {
                let bad = if n_path > 2 {
                    board.state_by_id(e) == EdgeState::Path
                } else {
                    board.state_by_id(e) == EdgeState::Wall
                };
                if bad {
                    board.mark_error_by_id(e);
                }
            }
            continue;
        }
        if n_path != 2 || n_wall != 2 {
            solved = false;
        }
    }

    if solved {
        Verdict::Solved
    } else {
        Verdict::Ambiguous
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use puzzle_core::{Orientation, Size};

    #[test]
    fn all_none_is_ambiguous() {
        let mut board = Board::new(Size::new(3, 3));
        assert_eq!(validate(&mut board), Verdict::Ambiguous);
    }

    #[test]
    fn fully_determined_cell_contributes_to_solved() {
        let mut board = Board::new(Size::new(1, 1));
        board.set_state(0, 0, Orientation::Horizontal, EdgeState::Path);
        board.set_state(0, 1, Orientation::Horizontal, EdgeState::Path);
        board.set_state(0, 0, Orientation::Vertical, EdgeState::Wall);
        board.set_state(1, 0, Orientation::Vertical, EdgeState::Wall);
        assert_eq!(validate(&mut board), Verdict::Solved);
    }

    #[test]
    fn surplus_path_marks_error_and_is_ambiguous() {
        let mut board = Board::new(Size::new(1, 1));
        board.set_state(0, 0, Orientation::Horizontal, EdgeState::Path);
        board.set_state(0, 1, Orientation::Horizontal, EdgeState::Path);
        board.set_state(0, 0, Orientation::Vertical, EdgeState::Path);
        board.set_state(1, 0, Orientation::Vertical, EdgeState::Wall);
        assert_eq!(validate(&mut board), Verdict::Ambiguous);
        let id = puzzle_core::edge_id(1, 1, 0, 0, Orientation::Vertical);
        assert!(board.flags_by_id(id).contains(crate::board::EdgeFlags::ERROR));
    }
}
