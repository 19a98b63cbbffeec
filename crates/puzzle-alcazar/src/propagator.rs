//! Alcazar single-cell propagator (spec.md §4.4.2) and hypothetical probe,
//! mirroring `puzzle_walls::propagator` with PATH/WALL in place of LINE/WALL.

use crate::board::{Board, EdgeState};
use crate::validator::validate;
use puzzle_core::{Difficulty, Verdict};

#[derive(Debug, Clone, Copy)]
pub struct Contradiction;

fn single_cell_pass(board: &mut Board) -> Result<bool, Contradiction> {
    let mut changed = false;
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
            return Err(Contradiction);
        }
        let force_to = if n_wall == 2 {
            Some(EdgeState::Path)
        } else if n_path == 2 {
            Some(EdgeState::Wall)
        } else {
            None
        };
        if let Some(target) = force_to {
            for &e in &edges {
                if board.state_by_id(e) == EdgeState::None {
                    board.set_state_by_id(e, target);
                    changed = true;
                }
            }
        }
    }
    Ok(changed)
}

pub fn propagate_single_cell(board: &mut Board) -> Result<bool, Contradiction> {
    propagate_capped(board, None)
}

fn probe_iteration_cap(difficulty: Difficulty) -> Option<usize> {
    match difficulty {
        Difficulty::Easy => None,
        Difficulty::Normal => Some(2),
        Difficulty::Tricky | Difficulty::Hard => None,
    }
}

fn propagate_capped(board: &mut Board, cap: Option<usize>) -> Result<bool, Contradiction> {
    let mut any_changed = false;
    let mut iters = 0usize;
    loop {
        let changed = single_cell_pass(board)?;
        if changed {
            any_changed = true;
        } else {
            break;
        }
        iters += 1;
        if let Some(max_iters) = cap {
            if iters >= max_iters {
                break;
            }
        }
    }
    Ok(any_changed)
}

/// Hypothetical probe, identical shape to Walls' (spec.md §4.4.3 "applies in
/// spirit" to Alcazar's propagator per §4.4.2's opening line).
pub fn hypothetical_probe(board: &mut Board, difficulty: Difficulty) -> bool {
    if difficulty == Difficulty::Easy {
        return false;
    }
    let cap = probe_iteration_cap(difficulty);
    let mut changed = false;

    for id in board.all_edge_ids() {
        if board.state_by_id(id) != EdgeState::None {
            continue;
        }

        let mut trial_wall = board.clone();
        trial_wall.set_state_by_id(id, EdgeState::Wall);
        let wall_is_dead = propagate_capped(&mut trial_wall, cap).is_err()
            || validate(&mut trial_wall) == Verdict::Invalid;

        if wall_is_dead {
            log::trace!("hypothetical_probe: edge {id} cannot be WALL, committing PATH");
            board.set_state_by_id(id, EdgeState::Path);
            changed = true;
            continue;
        }

        let mut trial_path = board.clone();
        trial_path.set_state_by_id(id, EdgeState::Path);
        let path_is_dead = propagate_capped(&mut trial_path, cap).is_err()
            || validate(&mut trial_path) == Verdict::Invalid;

        if path_is_dead {
            log::trace!("hypothetical_probe: edge {id} cannot be PATH, committing WALL");
            board.set_state_by_id(id, EdgeState::Wall);
            changed = true;
        }
    }

    changed
}

pub fn solve_to_quiescence(board: &mut Board, difficulty: Difficulty) -> Result<Verdict, Contradiction> {
    loop {
        let changed_single = propagate_single_cell(board)?;
        let changed_probe = hypothetical_probe(board, difficulty);
        if !changed_single && !changed_probe {
            break;
        }
    }
    Ok(validate(board))
}

#[cfg(test)]
mod tests {
    use super::*;
    use puzzle_core::{Orientation, Size};

    #[test]
    fn single_cell_rule_forces_completion() {
        let mut board = Board::new(Size::new(3, 3));
        board.set_state(0, 0, Orientation::Vertical, EdgeState::Wall);
        board.set_state(0, 0, Orientation::Horizontal, EdgeState::Wall);
        board.set_state(1, 0, Orientation::Vertical, EdgeState::Path);
        board.set_state(0, 1, Orientation::Horizontal, EdgeState::Path);
        propagate_single_cell(&mut board).unwrap();
        assert_eq!(board.state(0, 0, Orientation::Vertical), EdgeState::Wall);
        assert_eq!(board.state(0, 0, Orientation::Horizontal), EdgeState::Wall);
    }

    #[test]
    fn contradiction_on_three_paths() {
        let mut board = Board::new(Size::new(3, 3));
        board.set_state(0, 0, Orientation::Vertical, EdgeState::Path);
        board.set_state(0, 0, Orientation::Horizontal, EdgeState::Path);
        board.set_state(1, 0, Orientation::Vertical, EdgeState::Path);
        board.set_state(0, 1, Orientation::Horizontal, EdgeState::Path);
        assert!(propagate_single_cell(&mut board).is_err());
    }
}
