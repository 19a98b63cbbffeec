//! Builds the "Solve output" move string (spec.md §6): a solver-origin move
//! string that, applied to the original board, reproduces the solved one.

pub fn diff_walls(original: &puzzle_walls::Board, solved: &puzzle_walls::Board) -> String {
    use puzzle_walls::EdgeState;
    let mut ops = vec!["S".to_string()];
    for id in original.all_edge_ids() {
        let before = original.state_by_id(id);
        let after = solved.state_by_id(id);
        if before == after {
            continue;
        }
        match after {
            EdgeState::Wall => ops.push(format!("W{id}")),
            EdgeState::Line => ops.push(format!("L{id}")),
            EdgeState::Unknown => {}
        }
    }
    ops.join(";")
}

pub fn diff_alcazar(original: &puzzle_alcazar::Board, solved: &puzzle_alcazar::Board) -> String {
    use puzzle_alcazar::EdgeState;
    let mut ops = vec!["S".to_string()];
    for id in original.all_edge_ids() {
        let before = original.state_by_id(id);
        let after = solved.state_by_id(id);
        if before == after {
            continue;
        }
        match after {
            EdgeState::Wall => ops.push(format!("W{id}")),
            EdgeState::Path => ops.push(format!("P{id}")),
            EdgeState::None => {}
        }
    }
    ops.join(";")
}

pub fn diff_stellar(original: &puzzle_stellar::Board, solved: &puzzle_stellar::Board) -> String {
    use puzzle_stellar::Content;
    let mut ops = vec!["R".to_string()];
    for i in 0..original.total_cells() {
        let before = original.cell_by_index(i);
        let after = solved.cell_by_index(i);
        if before == after {
            continue;
        }
        match after {
            puzzle_stellar::Cell::Committed(Content::Star) => ops.push(format!("S{i}")),
            puzzle_stellar::Cell::Committed(Content::Cloud) => ops.push(format!("C{i}")),
            puzzle_stellar::Cell::Committed(Content::Cross) => ops.push(format!("X{i}")),
            _ => {}
        }
    }
    ops.join(";")
}

#[cfg(test)]
mod tests {
    use super::*;
    use puzzle_core::{Orientation, Size};

    #[test]
    fn walls_diff_reports_only_changed_edges() {
        let original = puzzle_walls::Board::new(Size::new(3, 3));
        let mut solved = original.clone();
        solved.set_state(0, 0, Orientation::Horizontal, puzzle_walls::EdgeState::Line);
        let diff = diff_walls(&original, &solved);
        assert!(diff.starts_with("S;"));
        assert_eq!(diff.matches(';').count(), 1);
    }
}
