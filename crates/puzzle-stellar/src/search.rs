//! Stellar recursive search (spec.md §4.4.5), the HARD-tier uniqueness
//! check: depth-first branch on STAR/CLOUD for the next free guess cell,
//! comparing any two distinct SOLVED completions it finds.

use crate::board::{Board, Candidates, Cell, Content};
use crate::propagator::{propagate_to_fixed_point, Contradiction};
use crate::validator::validate;
use puzzle_core::Verdict;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SearchResult {
    Unique,
    Ambiguous,
    Impossible,
}

/// The first still-undetermined guess cell, in row-major order.
fn next_free_cell(board: &Board) -> Option<usize> {
    (0..board.total_cells()).find(|&i| matches!(board.cell_by_index(i), Cell::Guess(_)))
}

fn solved_signature(board: &Board) -> Vec<Content> {
    (0..board.total_cells())
        .map(|i| match board.cell_by_index(i) {
            Cell::Committed(c) => c,
            Cell::Guess(_) => Content::Empty,
        })
        .collect()
}

/// Search for a unique completion of `board`, starting from `found` (any
/// unique solution already on hand from a sibling branch, for cross-branch
/// comparison). Recursion depth is bounded by the number of free cells.
pub fn search(board: &mut Board, found: &mut Option<Vec<Content>>) -> SearchResult {
    match propagate_to_fixed_point(board) {
        Err(Contradiction) => return SearchResult::Impossible,
        Ok(()) => {}
    }

    let free = match next_free_cell(board) {
        Some(i) => i,
        None => {
            return match validate(board) {
                Verdict::Solved => {
                    let sig = solved_signature(board);
                    match found {
                        Some(prev) if *prev != sig => SearchResult::Ambiguous,
                        Some(_) => SearchResult::Unique,
                        None => {
                            *found = Some(sig);
                            SearchResult::Unique
                        }
                    }
                }
                _ => SearchResult::Impossible,
            };
        }
    };

    let candidates = match board.cell_by_index(free) {
        Cell::Guess(c) => c,
        Cell::Committed(_) => unreachable!("free cell index must be a Guess"),
    };

    if candidates.contains(Candidates::STAR) {
        let mut trial = board.clone();
        trial.set_cell_by_index(free, Cell::Committed(Content::Star));
        match search(&mut trial, found) {
            SearchResult::Unique => {
                *board = trial;
                SearchResult::Unique
            }
            SearchResult::Ambiguous => SearchResult::Ambiguous,
            SearchResult::Impossible => {
                // STAR is dead at this cell: drop it and retry with
                // whatever candidate remains (spec.md §4.4.5 "the first
                // branch returning IMPOSSIBLE commits the complement").
                board.set_cell_by_index(free, Cell::Guess(candidates - Candidates::STAR));
                search(board, found)
            }
        }
    } else if candidates.contains(Candidates::CLOUD) {
        let mut trial = board.clone();
        trial.set_cell_by_index(free, Cell::Committed(Content::Cloud));
        match search(&mut trial, found) {
            SearchResult::Unique => {
                *board = trial;
                SearchResult::Unique
            }
            other => other,
        }
    } else {
        // Only CROSS remains; commit it and keep going.
        board.set_cell_by_index(free, Cell::Committed(Content::Cross));
        search(board, found)
    }
}

/// Entry point: `UNIQUE` iff the board has exactly one SOLVED completion.
pub fn has_unique_solution(board: &Board) -> bool {
    let mut working = board.clone();
    let mut found = None;
    matches!(search(&mut working, &mut found), SearchResult::Unique)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Illumination;
    use puzzle_core::{Point, Size};

    #[test]
    fn single_row_with_one_planet_has_unique_solution() {
        // 4x1, DARK planet at col 2: of the 6 ways to assign star/cloud to
        // the remaining 3 cells, only star@0, cloud@1 satisfies
        // `star < cloud < planet`.
        let size = Size::new(4, 1);
        let mut board = Board::new(size);
        board.set_cell(Point::new(2, 0), Cell::Committed(Content::Planet(Illumination::Dark)));
        assert!(has_unique_solution(&board));

        let mut working = board.clone();
        search(&mut working, &mut None);
        assert!(working.cell(Point::new(0, 0)).is_committed(Content::Star));
        assert!(working.cell(Point::new(1, 0)).is_committed(Content::Cloud));
        assert!(working.cell(Point::new(3, 0)).is_committed(Content::Cross));
    }
}
