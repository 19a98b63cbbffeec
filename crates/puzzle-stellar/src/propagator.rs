//! Stellar propagators: Combinations and Singles (spec.md §4.4.4), plus a
//! cross-cleanup sweep recovered from `original_source/Unfinished/
//! stellar.c` (SPEC_FULL.md §7) that commits fully-eliminated cells to
//! CROSS as soon as they're provably neither STAR nor CLOUD, instead of
//! waiting for end-of-quiescence clean-up.

use crate::board::{Candidates, Cell, Content, Illumination};
use crate::validator::validate;
use puzzle_core::{Point, Verdict};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Contradiction;

#[derive(Clone, Copy)]
enum Axis {
    Row,
    Col,
}

fn axis_illum(illum: Illumination, axis: Axis) -> Option<bool> {
    match axis {
        Axis::Row => {
            if illum.left() {
                Some(true)
            } else if illum.right() {
                Some(false)
            } else {
                None
            }
        }
        Axis::Col => {
            if illum.top() {
                Some(true)
            } else if illum.bottom() {
                Some(false)
            } else {
                None
            }
        }
    }
}

fn check_line(star: i32, cloud: i32, planet: i32, lit_low: Option<bool>) -> bool {
    match lit_low {
        Some(true) => star < planet && (cloud < star || planet < cloud),
        Some(false) => planet < star && (star < cloud || cloud < planet),
        None => (star < cloud && cloud < planet) || (planet < cloud && cloud < star),
    }
}

/// Commit `p` to `content`, clearing the matching candidate bit from the
/// rest of `p`'s row and column (spec.md §4.4.4's Singles propagation step).
fn commit(board: &mut crate::board::Board, p: Point, content: Content) {
    board.set_cell(p, Cell::Committed(content));
    let bit = match content {
        Content::Star => Candidates::STAR,
        Content::Cloud => Candidates::CLOUD,
        _ => return,
    };
    for q in board.row(p.y).into_iter().chain(board.column(p.x)) {
        if q == p {
            continue;
        }
        if let Cell::Guess(c) = board.cell(q) {
            board.set_cell(q, Cell::Guess(c - bit));
        }
    }
}

/// Combinations sweep: for each axis line containing one or more planets,
/// compute the set of positions still consistent with `check_line` for
/// every planet in that line, then drop the STAR/CLOUD candidate bit from
/// any guess cell not in the matching set.
fn combinations_pass(board: &mut crate::board::Board) -> Result<bool, Contradiction> {
    let (w, h) = (board.width(), board.height());
    let mut changed = false;

    let mut lines: Vec<(Vec<Point>, Axis)> = Vec::new();
    for y in 0..h {
        lines.push((board.row(y), Axis::Row));
    }
    for x in 0..w {
        lines.push((board.column(x), Axis::Col));
    }

    for (line, axis) in lines {
        let planets: Vec<(i32, Illumination)> = line
            .iter()
            .enumerate()
            .filter_map(|(pos, &p)| match board.cell(p) {
                Cell::Committed(Content::Planet(illum)) => Some((pos as i32, illum)),
                _ => None,
            })
            .collect();
        if planets.is_empty() {
            continue;
        }

        let star_candidates: Vec<i32> = line
            .iter()
            .enumerate()
            .filter(|(_, &p)| star_possible(board, p))
            .map(|(pos, _)| pos as i32)
            .collect();
        let cloud_candidates: Vec<i32> = line
            .iter()
            .enumerate()
            .filter(|(_, &p)| cloud_possible(board, p))
            .map(|(pos, _)| pos as i32)
            .collect();

        let mut star_ok = vec![false; line.len()];
        let mut cloud_ok = vec![false; line.len()];
        let mut any_combo = false;
        for &ts in &star_candidates {
            for &tc in &cloud_candidates {
                if ts == tc {
                    continue;
                }
                if planets.iter().any(|&(pp, _)| ts == pp || tc == pp) {
                    continue;
                }
                let consistent = planets
                    .iter()
                    .all(|&(pp, illum)| check_line(ts, tc, pp, axis_illum(illum, axis)));
                if consistent {
                    any_combo = true;
                    star_ok[ts as usize] = true;
                    cloud_ok[tc as usize] = true;
                }
            }
        }
        if !any_combo {
            return Err(Contradiction);
        }

        for (pos, &p) in line.iter().enumerate() {
            if let Cell::Guess(c) = board.cell(p) {
                let mut new_c = c;
                if c.contains(Candidates::STAR) && !star_ok[pos] {
                    new_c -= Candidates::STAR;
                }
                if c.contains(Candidates::CLOUD) && !cloud_ok[pos] {
                    new_c -= Candidates::CLOUD;
                }
                if new_c != c {
                    board.set_cell(p, Cell::Guess(new_c));
                    changed = true;
                }
            }
        }
    }

    Ok(changed)
}

fn star_possible(board: &crate::board::Board, p: Point) -> bool {
    matches!(board.cell(p), Cell::Committed(Content::Star))
        || matches!(board.cell(p), Cell::Guess(c) if c.contains(Candidates::STAR))
}

fn cloud_possible(board: &crate::board::Board, p: Point) -> bool {
    matches!(board.cell(p), Cell::Committed(Content::Cloud))
        || matches!(board.cell(p), Cell::Guess(c) if c.contains(Candidates::CLOUD))
}

/// Singles sweep: if a row/column's STAR (or CLOUD) candidates collapse to
/// one cell, commit it.
fn singles_pass(board: &mut crate::board::Board) -> Result<bool, Contradiction> {
    let (w, h) = (board.width(), board.height());
    let mut changed = false;

    let mut lines = Vec::new();
    for y in 0..h {
        lines.push(board.row(y));
    }
    for x in 0..w {
        lines.push(board.column(x));
    }

    for line in lines {
        let has_star = line.iter().any(|&p| board.cell(p).is_committed(Content::Star));
        if !has_star {
            let candidates: Vec<Point> =
                line.iter().copied().filter(|&p| star_possible(board, p)).collect();
            match candidates.len() {
                0 => return Err(Contradiction),
                1 => {
                    commit(board, candidates[0], Content::Star);
                    changed = true;
                }
                _ => {}
            }
        }
        let has_cloud = line.iter().any(|&p| board.cell(p).is_committed(Content::Cloud));
        if !has_cloud {
            let candidates: Vec<Point> =
                line.iter().copied().filter(|&p| cloud_possible(board, p)).collect();
            match candidates.len() {
                0 => return Err(Contradiction),
                1 => {
                    commit(board, candidates[0], Content::Cloud);
                    changed = true;
                }
                _ => {}
            }
        }
    }

    Ok(changed)
}

/// Commit any guess cell whose candidates have been whittled down to just
/// CROSS (or nothing, a contradiction).
fn cross_cleanup_pass(board: &mut crate::board::Board) -> Result<bool, Contradiction> {
    let mut changed = false;
    for p in board.cells_iter().collect::<Vec<_>>() {
        if let Cell::Guess(c) = board.cell(p) {
            if c.is_empty() {
                return Err(Contradiction);
            }
            if c == Candidates::CROSS {
                board.set_cell(p, Cell::Committed(Content::Cross));
                changed = true;
            }
        }
    }
    Ok(changed)
}

pub fn propagate_to_fixed_point(board: &mut crate::board::Board) -> Result<(), Contradiction> {
    loop {
        let a = combinations_pass(board)?;
        let b = singles_pass(board)?;
        let c = cross_cleanup_pass(board)?;
        if !a && !b && !c {
            break;
        }
    }
    Ok(())
}

/// Commit every remaining pure-guess cell with no narrower candidate set to
/// EMPTY (spec.md §4.4.4's final paragraph) and classify.
pub fn solve_sequential(board: &mut crate::board::Board) -> Result<Verdict, Contradiction> {
    propagate_to_fixed_point(board)?;
    for p in board.cells_iter().collect::<Vec<_>>() {
        if matches!(board.cell(p), Cell::Guess(_)) {
            board.set_cell(p, Cell::Committed(Content::Empty));
        }
    }
    Ok(validate(board))
}

/// Full solve entry point. NORMAL stops at deductive quiescence; HARD falls
/// back to the recursive search (spec.md §4.4.5) when deduction alone
/// leaves the board AMBIGUOUS, since the recursive search can tell apart
/// "genuinely has two solutions" from "just needs a guess to finish".
pub fn solve(board: &mut crate::board::Board, difficulty: puzzle_core::Difficulty) -> Result<Verdict, Contradiction> {
    propagate_to_fixed_point(board)?;
    let verdict = validate(board);
    if difficulty == puzzle_core::Difficulty::Hard && verdict == Verdict::Ambiguous {
        if crate::search::has_unique_solution(board) {
            return Ok(Verdict::Solved);
        }
    }
    Ok(verdict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use puzzle_core::Size;

    #[test]
    fn singles_commits_lone_star_candidate() {
        let mut board = Board::new(Size::new(3, 3));
        // Clear STAR everywhere in row 0 except (1,0).
        for x in [0, 2] {
            let p = Point::new(x, 0);
            if let Cell::Guess(c) = board.cell(p) {
                board.set_cell(p, Cell::Guess(c - Candidates::STAR));
            }
        }
        singles_pass(&mut board).unwrap();
        assert!(board.cell(Point::new(1, 0)).is_committed(Content::Star));
    }

    #[test]
    fn cross_cleanup_commits_fully_eliminated_cell() {
        let mut board = Board::new(Size::new(2, 2));
        let p = Point::new(0, 0);
        board.set_cell(p, Cell::Guess(Candidates::CROSS));
        cross_cleanup_pass(&mut board).unwrap();
        assert!(board.cell(p).is_committed(Content::Cross));
    }
}
