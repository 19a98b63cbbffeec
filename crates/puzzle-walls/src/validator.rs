//! Walls validator (spec.md §4.3.1).

use crate::board::{Board, EdgeState};
use puzzle_core::{Dsf, LoopFinder, Verdict};

/// Run the validator. If `board` is passed, ERROR flags are written back
/// for offending edges before returning; pass `None` to just classify.
pub fn validate(board: &mut Board) -> Verdict {
    board.clear_errors();

    // Step 1: clone the edge array and, for every cell with exactly two
    // LINE edges, upgrade its remaining UNKNOWN edges to WALL in the clone
    // (spec.md §4.3.1 step 1). A shared edge forced to WALL this way can
    // push a *neighboring* cell's own WALL count past two even though the
    // real board still shows that edge as UNKNOWN — exactly the
    // degree-5+ contradiction a capped, non-quiescent propagation pass can
    // leave behind (see `propagator::hypothetical_probe`'s `Normal`-tier
    // two-pass cap). Counting straight off the real board would miss it.
    let (w, h) = (board.width(), board.height());
    let mut effective: Vec<EdgeState> = board.all_edge_ids().map(|id| board.state_by_id(id)).collect();
    for p in board.cells() {
        let edges = board.incident_edges(p);
        let n_line = edges.iter().filter(|&&e| board.state_by_id(e) == EdgeState::Line).count();
        if n_line == 2 {
            for &e in &edges {
                if effective[e] == EdgeState::Unknown {
                    effective[e] = EdgeState::Wall;
                }
            }
        }
    }

    let mut invalid = false;
    let mut has_free = false;

    for p in board.cells().collect::<Vec<_>>() {
        let edges = board.incident_edges(p);
        let mut n_line = 0;
        let mut n_wall = 0;
        let mut n_unknown = 0;
        for &e in &edges {
            match effective[e] {
                EdgeState::Line => n_line += 1,
                EdgeState::Wall => n_wall += 1,
                EdgeState::Unknown => n_unknown += 1,
            }
        }

        if n_unknown > 0 {
            has_free = true;
        }
        if n_line > 2 || n_wall > 2 {
            invalid = true;
            for &e in &edges {
                let bad = if n_line > 2 {
                    effective[e] == EdgeState::Line
                } else {
                    effective[e] == EdgeState::Wall
                };
                if bad {
                    board.mark_error_by_id(e);
                }
            }
        }
    }

    // Step 3: connectivity. Merge neighboring cells whose shared edge is
    // not WALL and the cell has fewer than three LINE edges (the forced
    // degree check above already caught >2, so "fewer than three" is
    // simply "not already flagged invalid for this cell"); outside is cell
    // index `w*h`.
    let outside = (w * h) as usize;
    let mut dsf = Dsf::new(outside + 1);

    for p in board.cells() {
        let this = board.point_to_index(p) as usize;
        let edges = board.incident_edges(p);
        // up, right, down, left neighbors in the same order as incident_edges
        let neighbors = [
            (p.x, p.y - 1),
            (p.x + 1, p.y),
            (p.x, p.y + 1),
            (p.x - 1, p.y),
        ];
        for (i, &e) in edges.iter().enumerate() {
            if board.state_by_id(e) == EdgeState::Wall {
                continue;
            }
            let (nx, ny) = neighbors[i];
            let other = if nx < 0 || nx >= w || ny < 0 || ny >= h {
                outside
            } else {
                (ny * w + nx) as usize
            };
            dsf.merge(this, other);
        }
    }

    // Step 4: exits — border LINE edges.
    let mut exits = 0usize;
    let mut exit_ids = Vec::new();
    for id in board.all_edge_ids() {
        if board.is_border_edge(id) && board.state_by_id(id) == EdgeState::Line {
            exits += 1;
            exit_ids.push(id);
        }
    }
    if exits > 2 {
        invalid = true;
        for &id in &exit_ids {
            board.mark_error_by_id(id);
        }
    }

    // A closed loop of committed LINE edges is an unrecoverable
    // contradiction the moment it forms, whether or not the rest of the
    // board still has UNKNOWN edges left — exactly the case a capped,
    // non-quiescent propagation pass (`propagator::hypothetical_probe`'s
    // `Normal`-tier two-pass cap) can leave behind without ever setting
    // `has_free` to false. Build the dual graph of current LINE edges,
    // giving each border exit its own leaf vertex rather than merging them
    // into one "outside" node (merging them would make even a genuine,
    // still-incomplete path look like it closes a cycle through that
    // shared node), and flag every edge LoopFinder classifies as lying on
    // a cycle.
    let exit_vertex_of: std::collections::HashMap<usize, usize> =
        exit_ids.iter().enumerate().map(|(i, &id)| (id, outside + i)).collect();
    let mut adj: Vec<Vec<(usize, usize)>> = vec![Vec::new(); outside + exit_ids.len()];
    for p in board.cells() {
        let this = board.point_to_index(p) as usize;
        let edges = board.incident_edges(p);
        let neighbors = [(p.x, p.y - 1), (p.x + 1, p.y), (p.x, p.y + 1), (p.x - 1, p.y)];
        for (i, &e) in edges.iter().enumerate() {
            if board.state_by_id(e) != EdgeState::Line {
                continue;
            }
            let other = if let Some(&v) = exit_vertex_of.get(&e) {
                v
            } else {
                let (nx, ny) = neighbors[i];
                (ny * w + nx) as usize
            };
            adj[this].push((e, other));
        }
    }
    let loops = LoopFinder::build(adj.len(), |v| adj[v].iter().map(|&(_, u)| u).collect::<Vec<_>>().into_iter());
    for (v, neighbors) in adj.iter().enumerate() {
        for &(e, u) in neighbors {
            if loops.is_loop_edge(v, u) {
                invalid = true;
                board.mark_error_by_id(e);
            }
        }
    }

    if invalid {
        return Verdict::Invalid;
    }

    let root0 = dsf.canonify(0);
    let all_connected = (0..outside + 1).all(|i| dsf.canonify(i) == root0);
    if !all_connected {
        return Verdict::Invalid;
    }

    if has_free {
        return Verdict::Ambiguous;
    }

    if exits != 2 {
        return Verdict::Invalid;
    }

    Verdict::Solved
}
