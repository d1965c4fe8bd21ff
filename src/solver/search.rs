//! The backtracking search driver tying the engine together: heuristic cell
//! selection, branch-and-prune over candidate digits, and propagation on
//! every branch.

use tracing::debug;

use crate::solver::{
    board::Board,
    deduction,
    groups::Groups,
    heuristics::{
        cell::{CellSelectionHeuristic, DegreeHeuristic, MinimumRemainingValuesHeuristic},
        value::{AscendingValueOrder, ValueOrderingHeuristic},
    },
    propagation,
    stats::SearchStats,
};

/// The terminal result of a solve.
///
/// `Exhausted` is not an error: it is the proof that the input board (or the
/// branch it was reached from) admits no satisfying assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Every cell narrowed to a single digit consistent with all groups.
    Solved(Board),
    /// No satisfying assignment exists.
    Exhausted,
}

impl SearchOutcome {
    /// The solved board, if there is one.
    pub fn solved(self) -> Option<Board> {
        match self {
            SearchOutcome::Solved(board) => Some(board),
            SearchOutcome::Exhausted => None,
        }
    }
}

/// Depth-first branch-and-prune search.
///
/// Each branch operates on its own snapshot of the board (snapshots are
/// cheap, the domain store is persistent), so abandoning a branch can never
/// corrupt the state a sibling or ancestor continues from. The first
/// solution found is returned immediately; the search never enumerates
/// alternatives.
///
/// Cell selection consults the primary heuristic and falls back to the
/// secondary only when the primary reports nothing to select. With the
/// stock pairing (minimum-remaining-values over degree) both report `None`
/// under exactly the same condition, so the fallback never actually picks a
/// different cell on the standard grid; the seam exists for layouts where
/// group membership varies.
pub struct BacktrackingSearch {
    primary: Box<dyn CellSelectionHeuristic>,
    fallback: Box<dyn CellSelectionHeuristic>,
    value_order: Box<dyn ValueOrderingHeuristic>,
    deduction_prepass: bool,
}

impl Default for BacktrackingSearch {
    fn default() -> Self {
        Self::new(
            Box::new(MinimumRemainingValuesHeuristic),
            Box::new(DegreeHeuristic),
            Box::new(AscendingValueOrder),
        )
    }
}

impl BacktrackingSearch {
    pub fn new(
        primary: Box<dyn CellSelectionHeuristic>,
        fallback: Box<dyn CellSelectionHeuristic>,
        value_order: Box<dyn ValueOrderingHeuristic>,
    ) -> Self {
        Self {
            primary,
            fallback,
            value_order,
            deduction_prepass: false,
        }
    }

    /// Runs the naked-single and hidden-single passes on every board before
    /// it is propagated. Off by default; propagation alone is complete.
    pub fn with_deduction_prepass(mut self) -> Self {
        self.deduction_prepass = true;
        self
    }

    /// Solves `board` against the constraint topology in `groups`.
    ///
    /// The root board is propagated once before any branching; a root that
    /// propagation proves inconsistent is reported as
    /// [`SearchOutcome::Exhausted`] without entering the search.
    pub fn solve(&self, board: Board, groups: &Groups) -> (SearchOutcome, SearchStats) {
        let mut stats = SearchStats::default();
        let mut root = board;

        if self.deduction_prepass {
            deduction::naked_singles(&mut root, groups);
            deduction::hidden_singles(&mut root, groups);
        }
        if !propagation::enforce_with_stats(&mut root, groups, &mut stats.propagation) {
            return (SearchOutcome::Exhausted, stats);
        }

        match self.search(root, groups, &mut stats) {
            Some(solved) => (SearchOutcome::Solved(solved), stats),
            None => (SearchOutcome::Exhausted, stats),
        }
    }

    fn search(&self, board: Board, groups: &Groups, stats: &mut SearchStats) -> Option<Board> {
        stats.nodes_visited += 1;

        if board.is_complete() {
            return Some(board);
        }

        let cell = self
            .primary
            .select_cell(&board, groups)
            .or_else(|| self.fallback.select_cell(&board, groups))?;

        for digit in self.value_order.order_values(board.domain(cell)) {
            let mut candidate = board.clone();
            candidate.assign(cell, digit);

            if self.deduction_prepass {
                deduction::naked_singles(&mut candidate, groups);
                deduction::hidden_singles(&mut candidate, groups);
            }

            if propagation::enforce_with_stats(&mut candidate, groups, &mut stats.propagation) {
                debug!(cell = %cell, digit = %digit, "assigned");
                stats.assignments += 1;
                if let Some(solved) = self.search(candidate, groups, stats) {
                    return Some(solved);
                }
            }
            stats.backtracks += 1;
        }

        None
    }
}
