//! Local deduction rules: cheap single-pass filters run ahead of full
//! propagation. Neither rule is required for correctness; both only ever
//! remove candidates that full propagation (or the search) would rule out
//! anyway.

use crate::solver::{
    board::{Board, Digit},
    groups::Groups,
};

/// Naked Single: within each group, a cell that is down to one candidate
/// excludes that digit from every other cell of the group.
///
/// A single in-place pass over the groups, not a fixed-point loop. Cells
/// collapsed earlier in the pass do take part in later eliminations, since
/// the pass reads the live board. The rule does not detect contradictions:
/// a domain may end up empty, and it is the caller's job to notice.
pub fn naked_singles(board: &mut Board, groups: &Groups) {
    for group in groups.iter() {
        for &cell in group.cells() {
            if let Some(digit) = board.singleton(cell) {
                for &other in group.cells() {
                    if other != cell {
                        board.remove(other, digit);
                    }
                }
            }
        }
    }
}

/// Hidden Single: within each group, a digit that only one cell still lists
/// must go in that cell, so that cell's domain collapses to the singleton.
///
/// A single in-place pass over the groups, not a fixed-point loop.
pub fn hidden_singles(board: &mut Board, groups: &Groups) {
    for group in groups.iter() {
        for digit in Digit::ALL {
            let mut count = 0;
            let mut last = None;
            for &cell in group.cells() {
                if board.domain(cell).contains(&digit) {
                    count += 1;
                    last = Some(cell);
                }
            }
            if count == 1 {
                if let Some(cell) = last {
                    board.assign(cell, digit);
                }
            }
        }
    }
}
