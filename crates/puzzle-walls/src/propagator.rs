//! Walls propagators (spec.md §4.4.1, §4.4.3).

use crate::board::{Board, EdgeState};
use crate::validator::validate;
use puzzle_core::{Difficulty, Verdict};

/// A local degree-count contradiction: some cell has more than two LINE or
/// more than two WALL edges. Internal control-flow signal, not part of the
/// public error enum (spec.md §7 treats it as a solver-internal signal).
#[derive(Debug, Clone, Copy)]
pub struct Contradiction;

/// One sweep of the single-cell rule over every cell. Returns `Ok(changed)`
/// or `Err(Contradiction)` if a cell ever exceeds degree 2.
fn single_cell_pass(board: &mut Board) -> Result<bool, Contradiction> {
    let mut changed = false;
    for p in board.cells().collect::<Vec<_>>() {
        let edges = board.incident_edges(p);
        let mut n_line = 0;
        let mut n_wall = 0;
        for &e in &edges {
            match board.state_by_id(e) {
                EdgeState::Line => n_line += 1,
                EdgeState::Wall => n_wall += 1,
                EdgeState::Unknown => {}
            }
        }
        if n_line > 2 || n_wall > 2 {
            return Err(Contradiction);
        }
        let force_to = if n_wall == 2 {
            Some(EdgeState::Line)
        } else if n_line == 2 {
            Some(EdgeState::Wall)
        } else {
            None
        };
        if let Some(target) = force_to {
            for &e in &edges {
                if board.state_by_id(e) == EdgeState::Unknown {
                    board.set_state_by_id(e, target);
                    changed = true;
                }
            }
        }
    }
    Ok(changed)
}

/// Single-cell rule (spec.md §4.4.1): run to a fixed point. Returns
/// `Ok(changed)` or `Err(Contradiction)` if a cell ever exceeds degree 2.
pub fn propagate_single_cell(board: &mut Board) -> Result<bool, Contradiction> {
    propagate_capped(board, None)
}

/// How many single-cell passes a hypothetical trial is allowed before the
/// probe gives up on that trial (spec.md §4.4.3's difficulty-gated cap).
fn probe_iteration_cap(difficulty: Difficulty) -> Option<usize> {
    match difficulty {
        Difficulty::Easy => None, // probe not used at EASY at all
        Difficulty::Normal => Some(2),
        Difficulty::Tricky | Difficulty::Hard => None, // full quiescence
    }
}

/// Run [`single_cell_pass`] repeatedly, either to a fixed point (`cap ==
/// None`) or for at most `cap` passes (spec.md §4.4.3's capped probe mode).
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

/// Hypothetical probe / "loop check" (spec.md §4.4.3): for each UNKNOWN
/// edge, tentatively commit one value, propagate, and if that leads to
/// INVALID, commit the opposite value on the real board. Returns `true` if
/// any edge was committed this way.
pub fn hypothetical_probe(board: &mut Board, difficulty: Difficulty) -> bool {
    if difficulty == Difficulty::Easy {
        return false;
    }
    let cap = probe_iteration_cap(difficulty);
    let mut changed = false;

    for id in board.all_edge_ids() {
        if board.state_by_id(id) != EdgeState::Unknown {
            continue;
        }

        let mut trial_wall = board.clone();
        trial_wall.set_state_by_id(id, EdgeState::Wall);
        let wall_is_dead = propagate_capped(&mut trial_wall, cap).is_err()
            || validate(&mut trial_wall) == Verdict::Invalid;

        if wall_is_dead {
            log::trace!("hypothetical_probe: edge {id} cannot be WALL, committing LINE");
            board.set_state_by_id(id, EdgeState::Line);
            changed = true;
            continue;
        }

        let mut trial_line = board.clone();
        trial_line.set_state_by_id(id, EdgeState::Line);
        let line_is_dead = propagate_capped(&mut trial_line, cap).is_err()
            || validate(&mut trial_line) == Verdict::Invalid;

        if line_is_dead {
            log::trace!("hypothetical_probe: edge {id} cannot be LINE, committing WALL");
            board.set_state_by_id(id, EdgeState::Wall);
            changed = true;
        }
    }

    changed
}

/// Full propagation fixed point (spec.md §5's fixed order: single-cell
/// rule first, hypothetical probe second, iterate until a full pass makes
/// no change).
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
        // Give cell (0,0) two LINE edges (top and left border stubs off,
        // so use right+down as LINE) and expect the other two to become
        // WALL.
        board.set_state(0, 0, Orientation::Vertical, EdgeState::Wall); // left
        board.set_state(0, 0, Orientation::Horizontal, EdgeState::Wall); // top
        board.set_state(1, 0, Orientation::Vertical, EdgeState::Line); // right
        board.set_state(0, 1, Orientation::Horizontal, EdgeState::Line); // bottom
        propagate_single_cell(&mut board).unwrap();
        assert_eq!(board.state(0, 0, Orientation::Vertical), EdgeState::Wall);
        assert_eq!(board.state(0, 0, Orientation::Horizontal), EdgeState::Wall);
    }

    #[test]
    fn contradiction_on_three_lines() {
        let mut board = Board::new(Size::new(3, 3));
        board.set_state(0, 0, Orientation::Vertical, EdgeState::Line);
        board.set_state(0, 0, Orientation::Horizontal, EdgeState::Line);
        board.set_state(1, 0, Orientation::Vertical, EdgeState::Line);
        board.set_state(0, 1, Orientation::Horizontal, EdgeState::Line);
        assert!(propagate_single_cell(&mut board).is_err());
    }
}
