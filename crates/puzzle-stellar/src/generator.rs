//! Stellar generator (spec.md §4.6.3): random one-planet-per-row placement,
//! solved-uniqueness check, then iterative clue minimization.

use crate::board::{Board, Cell, Content, Illumination};
use crate::propagator::solve;
use puzzle_core::{Difficulty, Point, PuzzleRng, Size, Verdict};

const MAX_OUTER_RESTARTS: usize = 200;

pub fn generate(n: i32, difficulty: Difficulty, rng: &mut PuzzleRng) -> Board {
    assert!(
        matches!(difficulty, Difficulty::Normal | Difficulty::Hard),
        "Stellar only accepts NORMAL or HARD"
    );

    for attempt in 0..MAX_OUTER_RESTARTS {
        if let Some(board) = try_generate_once(n, difficulty, rng) {
            return board;
        }
        log::warn!("stellar generator restart {attempt} (placement did not solve uniquely)");
    }
    log::warn!("stellar generator exceeded {MAX_OUTER_RESTARTS} restarts, returning best-effort placement");
    place_random(n, rng)
}

fn try_generate_once(n: i32, difficulty: Difficulty, rng: &mut PuzzleRng) -> Option<Board> {
    let mut board = place_random(n, rng);

    let mut check = board.clone();
    if solve(&mut check, Difficulty::Normal) != Ok(Verdict::Solved) {
        return None;
    }

    minimize(&mut board, difficulty);
    Some(board)
}

/// One planet per row at a shuffled column permutation, each with a
/// uniformly random illumination (spec.md §4.6.3 step 1).
fn place_random(n: i32, rng: &mut PuzzleRng) -> Board {
    let size = Size::new(n, n);
    let mut board = Board::new(size);
    let mut columns: Vec<i32> = (0..n).collect();
    rng.shuffle(&mut columns);

    for (row, &col) in columns.iter().enumerate() {
        let illum = Illumination::ALL_NINE[rng.random_upto(9) as usize];
        board.set_cell(Point::new(col, row as i32), Cell::Committed(Content::Planet(illum)));
    }
    board
}

/// Tentatively erase each planet; keep the erasure iff the board still
/// solves uniquely at `difficulty` (spec.md §4.6.3 step 3). Falls back to
/// HARD if the fully-minimized board no longer solves uniquely at NORMAL
/// (step 4).
fn minimize(board: &mut Board, difficulty: Difficulty) {
    let planet_cells: Vec<usize> = (0..board.total_cells())
        .filter(|&i| matches!(board.cell_by_index(i), Cell::Committed(Content::Planet(_))))
        .collect();

    for i in planet_cells {
        let saved = board.cell_by_index(i);
        board.set_cell_by_index(i, Cell::Guess(crate::board::Candidates::all()));
        let mut trial = board.clone();
        if solve(&mut trial, difficulty) != Ok(Verdict::Solved) {
            board.set_cell_by_index(i, saved);
            log::trace!("stellar generator: reverted erasure of planet at cell {i}");
        } else {
            log::debug!("stellar generator: committed erasure of planet at cell {i}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_description() {
        let mut rng1 = PuzzleRng::from_seed_str("stellar-seed");
        let mut rng2 = PuzzleRng::from_seed_str("stellar-seed");
        let b1 = generate(5, Difficulty::Normal, &mut rng1);
        let b2 = generate(5, Difficulty::Normal, &mut rng2);
        assert_eq!(crate::desc::encode(&b1), crate::desc::encode(&b2));
    }

    #[test]
    fn generated_puzzle_solves_uniquely() {
        let mut rng = PuzzleRng::from_u64(42);
        let board = generate(6, Difficulty::Normal, &mut rng);
        let mut check = board.clone();
        assert_eq!(solve(&mut check, Difficulty::Normal), Ok(Verdict::Solved));
    }
}
