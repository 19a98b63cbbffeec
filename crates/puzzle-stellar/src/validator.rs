//! Stellar validator (spec.md §4.3.3): per row, mirrored per column, check
//! star/cloud cardinality, the planet adjacency rule, and the line-order
//! rule (`check_line`).

use crate::board::{Board, Cell, Content, ErrorFlags, Illumination};
use puzzle_core::{Point, Verdict};

#[derive(Clone, Copy)]
enum Axis {
    Row,
    Col,
}

/// `Some(true)` if `illum` lights toward the low-index end of `axis`,
/// `Some(false)` toward the high-index end, `None` if dark along this axis.
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

/// `check_line` (spec.md §4.3.3's table): positions are 1-D indices along
/// the scanned axis.
fn check_line(star: i32, cloud: i32, planet: i32, lit_low: Option<bool>) -> bool {
    match lit_low {
        Some(true) => star < planet && (cloud < star || planet < cloud),
        Some(false) => planet < star && (star < cloud || cloud < planet),
        None => (star < cloud && cloud < planet) || (planet < cloud && cloud < star),
    }
}

fn low_high_flags(axis: Axis) -> (ErrorFlags, ErrorFlags) {
    match axis {
        Axis::Row => (ErrorFlags::LEFT, ErrorFlags::RIGHT),
        Axis::Col => (ErrorFlags::TOP, ErrorFlags::BOTTOM),
    }
}

/// Validate one row or column. Returns `(has_error, exactly_one_star_and_cloud)`.
fn validate_line(board: &mut Board, line: &[Point], axis: Axis) -> (bool, bool) {
    let mut stars = Vec::new();
    let mut clouds = Vec::new();
    let mut planets = Vec::new();

    for (pos, &p) in line.iter().enumerate() {
        match board.cell(p) {
            Cell::Committed(Content::Star) => stars.push((pos as i32, p)),
            Cell::Committed(Content::Cloud) => clouds.push((pos as i32, p)),
            Cell::Committed(Content::Planet(illum)) => planets.push((pos as i32, p, illum)),
            _ => {}
        }
    }

    let mut has_error = false;
    if stars.len() > 1 {
        has_error = true;
        for &(_, p) in &stars {
            board.mark_error(p, ErrorFlags::STAR);
        }
    }
    if clouds.len() > 1 {
        has_error = true;
        for &(_, p) in &clouds {
            board.mark_error(p, ErrorFlags::CLOUD);
        }
    }

    let (low_flag, high_flag) = low_high_flags(axis);
    if stars.len() == 1 && clouds.len() == 1 {
        let (star_pos, _) = stars[0];
        let (cloud_pos, _) = clouds[0];
        for &(planet_pos, planet_cell, illum) in &planets {
            let lit_low = axis_illum(illum, axis);

            // Adjacency rule.
            if star_pos == planet_pos - 1 && lit_low != Some(true) {
                has_error = true;
                board.mark_error(planet_cell, low_flag);
            } else if star_pos == planet_pos + 1 && lit_low != Some(false) {
                has_error = true;
                board.mark_error(planet_cell, high_flag);
            }

            // Line-order rule.
            if !check_line(star_pos, cloud_pos, planet_pos, lit_low) {
                has_error = true;
                match lit_low {
                    Some(true) => board.mark_error(planet_cell, low_flag),
                    Some(false) => board.mark_error(planet_cell, high_flag),
                    None => board.mark_error(planet_cell, low_flag | high_flag),
                }
            }
        }
    }

    (has_error, stars.len() == 1 && clouds.len() == 1)
}

pub fn validate(board: &mut Board) -> Verdict {
    board.clear_errors();
    let (w, h) = (board.width(), board.height());

    let mut any_error = false;
    let mut all_exact = true;

    for y in 0..h {
        let row = board.row(y);
        let (err, exact) = validate_line(board, &row, Axis::Row);
        any_error |= err;
        all_exact &= exact;
    }
    for x in 0..w {
        let col = board.column(x);
        let (err, exact) = validate_line(board, &col, Axis::Col);
        any_error |= err;
        all_exact &= exact;
    }

    if any_error {
        Verdict::Invalid
    } else if all_exact {
        Verdict::Solved
    } else {
        Verdict::Ambiguous
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Candidates;
    use puzzle_core::Size;

    fn place(board: &mut Board, x: i32, y: i32, content: Content) {
        board.set_cell(Point::new(x, y), Cell::Committed(content));
    }

    fn fill_cross(board: &mut Board) {
        for p in board.cells_iter().collect::<Vec<_>>() {
            if matches!(board.cell(p), Cell::Guess(_)) {
                board.set_cell(p, Cell::Committed(Content::Cross));
            }
        }
    }

    /// spec.md §8 scenario 5 (four worked examples) — LEFTTOP illumination
    /// accepts `star < planet` with the cloud outside `[star, planet)`.
    #[test]
    fn lefttop_accepts_cloud_outside_span() {
        let size = Size::new(5, 1);
        let mut board = Board::new(size);
        place(&mut board, 0, 0, Content::Star);
        place(&mut board, 4, 0, Content::Cloud);
        place(&mut board, 2, 0, Content::Planet(Illumination::Left));
        fill_cross(&mut board);
        let row0 = board.row(0);
        let (err, _) = validate_line(&mut board, &row0, Axis::Row);
        assert!(!err);
    }

    #[test]
    fn lefttop_rejects_cloud_inside_span() {
        let size = Size::new(5, 1);
        let mut board = Board::new(size);
        place(&mut board, 0, 0, Content::Star);
        place(&mut board, 1, 0, Content::Cloud);
        place(&mut board, 2, 0, Content::Planet(Illumination::Left));
        fill_cross(&mut board);
        let row0 = board.row(0);
        let (err, _) = validate_line(&mut board, &row0, Axis::Row);
        assert!(err);
    }

    #[test]
    fn dark_requires_cloud_strictly_between() {
        let size = Size::new(5, 1);
        let mut board = Board::new(size);
        place(&mut board, 0, 0, Content::Star);
        place(&mut board, 2, 0, Content::Cloud);
        place(&mut board, 4, 0, Content::Planet(Illumination::Dark));
        fill_cross(&mut board);
        let row0 = board.row(0);
        let (err, _) = validate_line(&mut board, &row0, Axis::Row);
        assert!(!err);
    }

    #[test]
    fn surplus_star_marks_error() {
        let size = Size::new(3, 1);
        let mut board = Board::new(size);
        place(&mut board, 0, 0, Content::Star);
        place(&mut board, 1, 0, Content::Star);
        board.set_cell(Point::new(2, 0), Cell::Guess(Candidates::all()));
        let verdict = validate(&mut board);
        assert_eq!(verdict, Verdict::Invalid);
    }
}
