//! ASCII board rendering, grounded on `cli/src/pprint.rs`'s `Table` /
//! `EdgeRow` / `CellRow` / `Corner` row-builder structure. The teacher
//! colorizes inside/outside regions with `term::Terminal` when stdout is a
//! tty and falls back to monochrome otherwise; we drop the `term`/`libc`
//! dependency entirely (see DESIGN.md) and always render plain ASCII box
//! characters, using the tty probe only to decide whether `--no-pretty`'s
//! absence should still suppress rendering on a piped stdout.

use std::io::IsTerminal;

pub fn is_pprintable() -> bool {
    std::io::stdout().is_terminal()
}

fn corner_char(up: bool, down: bool, left: bool, right: bool) -> char {
    match (up || down, left || right) {
        (true, true) => '+',
        (true, false) => '|',
        (false, true) => '-',
        (false, false) => '+',
    }
}

/// Renders a `w`x`h` edge grid (Walls/Alcazar share this topology): a solid
/// border line is drawn wherever `h_filled`/`v_filled` report `true` for the
/// horizontal edge at `(x, y)` / vertical edge at `(x, y)`.
pub fn render_edge_grid(
    w: i32,
    h: i32,
    h_filled: impl Fn(i32, i32) -> bool,
    v_filled: impl Fn(i32, i32) -> bool,
) -> String {
    let mut out = String::new();
    for y in 0..=h {
        for x in 0..=w {
            let up = y > 0 && v_filled(x, y - 1);
            let down = y < h && v_filled(x, y);
            let left = x > 0 && h_filled(x - 1, y);
            let right = x < w && h_filled(x, y);
            out.push(corner_char(up, down, left, right));
            if x < w {
                out.push(if h_filled(x, y) { '-' } else { ' ' });
            }
        }
        out.push('\n');
        if y < h {
            for x in 0..=w {
                out.push(if v_filled(x, y) { '|' } else { ' ' });
                if x < w {
                    out.push(' ');
                }
            }
            out.push('\n');
        }
    }
    out
}

pub fn render_walls(board: &puzzle_walls::Board) -> String {
    use puzzle_core::Orientation;
    use puzzle_walls::EdgeState;
    let (w, h) = (board.width(), board.height());
    render_edge_grid(
        w,
        h,
        |x, y| board.state(x, y, Orientation::Horizontal) == EdgeState::Line,
        |x, y| board.state(x, y, Orientation::Vertical) == EdgeState::Line,
    )
}

pub fn render_alcazar(board: &puzzle_alcazar::Board) -> String {
    use puzzle_alcazar::EdgeState;
    use puzzle_core::Orientation;
    let (w, h) = (board.width(), board.height());
    render_edge_grid(
        w,
        h,
        |x, y| board.state(x, y, Orientation::Horizontal) == EdgeState::Path,
        |x, y| board.state(x, y, Orientation::Vertical) == EdgeState::Path,
    )
}

pub fn render_stellar(board: &puzzle_stellar::Board) -> String {
    use puzzle_stellar::{Cell, Content, Illumination};
    let mut out = String::new();
    for y in 0..board.height() {
        for x in 0..board.width() {
            let p = puzzle_core::Point::new(x, y);
            let c = match board.cell(p) {
                Cell::Guess(_) => '.',
                Cell::Committed(Content::Empty) => ' ',
                Cell::Committed(Content::Star) => '*',
                Cell::Committed(Content::Cloud) => '~',
                Cell::Committed(Content::Cross) => 'x',
                Cell::Committed(Content::Planet(illum)) => match illum {
                    Illumination::Dark => '@',
                    Illumination::Left => '<',
                    Illumination::Right => '>',
                    Illumination::Top => '^',
                    Illumination::Bottom => 'v',
                    Illumination::LeftTop => '7',
                    Illumination::LeftBottom => 'J',
                    Illumination::RightTop => 'r',
                    Illumination::RightBottom => 'L',
                },
            };
            out.push(c);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grid_is_all_corners() {
        let rendered = render_edge_grid(2, 1, |_, _| false, |_, _| false);
        assert!(rendered.contains('+'));
        assert_eq!(rendered.lines().count(), 3);
    }

    #[test]
    fn filled_horizontal_edge_draws_dashes() {
        let rendered = render_edge_grid(1, 1, |_, _| true, |_, _| false);
        assert!(rendered.lines().next().unwrap().contains('-'));
    }
}
