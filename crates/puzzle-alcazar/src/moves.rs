//! Move grammar for Alcazar (spec.md §4.7): `W<i>` wall, `P<i>` path,
//! `C<i>` clear, `S` solver-origin marker.

use crate::board::{Board, EdgeState};
use crate::validator::validate;
use puzzle_core::{MoveError, Verdict};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    SetWall(usize),
    SetPath(usize),
    Clear(usize),
    SolverOrigin,
}

fn parse_move(s: &str) -> Result<Vec<Op>, MoveError> {
    let mut ops = Vec::new();
    for token in s.split(';') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let mut chars = token.chars();
        let opcode = chars.next().unwrap();
        let rest: String = chars.collect();

        if opcode == 'S' && rest.is_empty() {
            ops.push(Op::SolverOrigin);
            continue;
        }

        let bad_char = rest.chars().find(|c| !c.is_ascii_digit()).unwrap_or(opcode);
        let index: usize = rest.parse().map_err(|_| MoveError::NonNumericIndex(bad_char))?;

        let op = match opcode {
            'W' => Op::SetWall(index),
            'P' => Op::SetPath(index),
            'C' => Op::Clear(index),
            other => return Err(MoveError::UnknownOpcode(other)),
        };
        ops.push(op);
    }
    Ok(ops)
}

pub fn execute_move(board: &mut Board, move_str: &str) -> Result<bool, MoveError> {
    let ops = parse_move(move_str)?;

    for op in &ops {
        if let Op::SetWall(i) | Op::SetPath(i) | Op::Clear(i) = *op {
            if i >= board.total_edges() {
                return Err(MoveError::IndexOutOfRange(i));
            }
        }
    }

    let mut solver_origin = false;
    let mut working = board.clone();
    for op in ops {
        match op {
            Op::SetWall(i) => {
                working.set_state_by_id(i, EdgeState::Wall);
            }
            Op::SetPath(i) => {
                working.set_state_by_id(i, EdgeState::Path);
            }
            Op::Clear(i) => {
                working.set_state_by_id(i, EdgeState::None);
            }
            Op::SolverOrigin => solver_origin = true,
        }
    }

    *board = working;
    let completed = !solver_origin && validate(board) == Verdict::Solved;
    Ok(completed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use puzzle_core::Size;

    #[test]
    fn clear_is_idempotent() {
        let mut board = Board::new(Size::new(3, 3));
        let before = board.clone();
        execute_move(&mut board, "C0").unwrap();
        for id in board.all_edge_ids() {
            assert_eq!(board.state_by_id(id), before.state_by_id(id));
        }
    }

    #[test]
    fn malformed_move_leaves_board_untouched() {
        let mut board = Board::new(Size::new(3, 3));
        board.set_state_by_id(0, EdgeState::Wall);
        let before = board.clone();
        assert!(execute_move(&mut board, "Q5").is_err());
        for id in board.all_edge_ids() {
            assert_eq!(board.state_by_id(id), before.state_by_id(id));
        }
    }

    #[test]
    fn fixed_edge_rejects_mutation_silently() {
        let mut board = Board::new(Size::new(3, 3));
        board.set_fixed(0, 0, puzzle_core::Orientation::Horizontal, EdgeState::Wall);
        let id = puzzle_core::edge_id(3, 3, 0, 0, puzzle_core::Orientation::Horizontal);
        execute_move(&mut board, &format!("P{id}")).unwrap();
        assert_eq!(board.state_by_id(id), EdgeState::Wall);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut board = Board::new(Size::new(3, 3));
        let total = board.total_edges();
        assert!(execute_move(&mut board, &format!("W{total}")).is_err());
    }
}
