//! Move grammar for Stellar (spec.md §4.7): `S<i>`/`C<i>`/`X<i>` set cell
//! `i` to STAR/CLOUD/CROSS, `R` marks the move as solver-origin (Stellar
//! reuses `S` for "set star", so the solver-origin marker is `R` instead of
//! Walls/Alcazar's `S`).

use crate::board::{Cell, Content};
use crate::validator::validate;
use crate::Board;
use puzzle_core::{MoveError, Verdict};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    SetStar(usize),
    SetCloud(usize),
    SetCross(usize),
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

        if opcode == 'R' && rest.is_empty() {
            ops.push(Op::SolverOrigin);
            continue;
        }

        let bad_char = rest.chars().find(|c| !c.is_ascii_digit()).unwrap_or(opcode);
        let index: usize = rest.parse().map_err(|_| MoveError::NonNumericIndex(bad_char))?;

        let op = match opcode {
            'S' => Op::SetStar(index),
            'C' => Op::SetCloud(index),
            'X' => Op::SetCross(index),
            other => return Err(MoveError::UnknownOpcode(other)),
        };
        ops.push(op);
    }
    Ok(ops)
}

pub fn execute_move(board: &mut Board, move_str: &str) -> Result<bool, MoveError> {
    let ops = parse_move(move_str)?;

    for op in &ops {
        if let Op::SetStar(i) | Op::SetCloud(i) | Op::SetCross(i) = *op {
            if i >= board.total_cells() {
                return Err(MoveError::IndexOutOfRange(i));
            }
            if matches!(board.cell_by_index(i), Cell::Committed(Content::Planet(_))) {
                return Err(MoveError::TargetIsFixed);
            }
        }
    }

    let mut solver_origin = false;
    let mut working = board.clone();
    for op in ops {
        match op {
            Op::SetStar(i) => working.set_cell_by_index(i, Cell::Committed(Content::Star)),
            Op::SetCloud(i) => working.set_cell_by_index(i, Cell::Committed(Content::Cloud)),
            Op::SetCross(i) => working.set_cell_by_index(i, Cell::Committed(Content::Cross)),
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
    use crate::board::Illumination;
    use puzzle_core::{Point, Size};

    #[test]
    fn planet_cell_rejects_mutation() {
        let mut board = Board::new(Size::new(3, 3));
        board.set_cell(Point::new(0, 0), Cell::Committed(Content::Planet(Illumination::Dark)));
        assert!(execute_move(&mut board, "S0").is_err());
    }

    #[test]
    fn set_star_commits_cell() {
        let mut board = Board::new(Size::new(3, 3));
        execute_move(&mut board, "S4").unwrap();
        assert!(board.cell_by_index(4).is_committed(Content::Star));
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut board = Board::new(Size::new(3, 3));
        let total = board.total_cells();
        assert!(execute_move(&mut board, &format!("S{total}")).is_err());
    }
}
