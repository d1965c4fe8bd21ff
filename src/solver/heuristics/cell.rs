//! Heuristics for choosing which unassigned cell the search branches on
//! next. A good choice here is the difference between milliseconds and
//! minutes on hard boards.

use std::cell::RefCell;
use std::cmp::Reverse;

use rand::{seq::IteratorRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::solver::{
    board::{Board, Cell},
    groups::Groups,
};

/// A strategy for selecting the next cell to branch on.
///
/// Selection is read-only: implementations must not mutate the board or the
/// groups, and must return `None` exactly when no unassigned cell remains.
pub trait CellSelectionHeuristic {
    fn select_cell(&self, board: &Board, groups: &Groups) -> Option<Cell>;
}

/// Picks the first unassigned cell in row-major scan order.
pub struct SelectFirstHeuristic;

impl CellSelectionHeuristic for SelectFirstHeuristic {
    fn select_cell(&self, board: &Board, _groups: &Groups) -> Option<Cell> {
        board.unassigned().next()
    }
}

/// Minimum Remaining Values: picks the unassigned cell with the smallest
/// domain, a fail-first strategy that tackles the most constrained cell
/// before its alternatives run out. Ties go to the earliest cell in scan
/// order, keeping selection deterministic.
pub struct MinimumRemainingValuesHeuristic;

impl CellSelectionHeuristic for MinimumRemainingValuesHeuristic {
    fn select_cell(&self, board: &Board, _groups: &Groups) -> Option<Cell> {
        board.unassigned().min_by_key(|&cell| board.domain(cell).len())
    }
}

/// Degree heuristic: picks the unassigned cell belonging to the most
/// constraint groups, first maximal in scan order.
///
/// On the standard grid every cell belongs to exactly three groups, so the
/// count carries no signal there; the heuristic is a structural tie-break
/// for layouts where membership varies.
pub struct DegreeHeuristic;

impl CellSelectionHeuristic for DegreeHeuristic {
    fn select_cell(&self, board: &Board, groups: &Groups) -> Option<Cell> {
        board
            .unassigned()
            .min_by_key(|&cell| Reverse(groups.degree(cell)))
    }
}

/// Picks an unassigned cell uniformly at random from a seeded generator, so
/// a given seed still yields a reproducible solve.
pub struct RandomCellHeuristic {
    rng: RefCell<ChaCha8Rng>,
}

impl RandomCellHeuristic {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: RefCell::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl CellSelectionHeuristic for RandomCellHeuristic {
    fn select_cell(&self, board: &Board, _groups: &Groups) -> Option<Cell> {
        board.unassigned().choose(&mut *self.rng.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::board::Digit;

    fn solved_clues() -> [[u8; 9]; 9] {
        let mut clues = [[0u8; 9]; 9];
        for (r, row) in clues.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = ((r + c) % 9 + 1) as u8;
            }
        }
        clues
    }

    fn narrow(board: &mut Board, cell: Cell, width: u8) {
        let domain = (1..=width).map(|d| Digit::new(d).unwrap()).collect();
        board.set_domain(cell, domain);
    }

    #[test]
    fn select_first_scans_row_major() {
        let mut clues = [[0u8; 9]; 9];
        clues[0][0] = 1;
        clues[0][1] = 2;
        let board = Board::from_clues(clues);
        let groups = Groups::standard();

        assert_eq!(
            SelectFirstHeuristic.select_cell(&board, &groups),
            Some(Cell::new(0, 2))
        );
    }

    #[test]
    fn mrv_prefers_the_narrowest_domain() {
        let mut board = Board::from_clues([[0; 9]; 9]);
        let groups = Groups::standard();
        narrow(&mut board, Cell::new(4, 4), 3);
        narrow(&mut board, Cell::new(7, 1), 2);

        assert_eq!(
            MinimumRemainingValuesHeuristic.select_cell(&board, &groups),
            Some(Cell::new(7, 1))
        );
    }

    #[test]
    fn mrv_breaks_ties_by_scan_order() {
        let mut board = Board::from_clues([[0; 9]; 9]);
        let groups = Groups::standard();
        narrow(&mut board, Cell::new(5, 5), 2);
        narrow(&mut board, Cell::new(2, 8), 2);

        assert_eq!(
            MinimumRemainingValuesHeuristic.select_cell(&board, &groups),
            Some(Cell::new(2, 8))
        );
    }

    #[test]
    fn selectors_agree_there_is_nothing_to_pick_on_a_complete_board() {
        let board = Board::from_clues(solved_clues());
        let groups = Groups::standard();

        assert_eq!(SelectFirstHeuristic.select_cell(&board, &groups), None);
        assert_eq!(
            MinimumRemainingValuesHeuristic.select_cell(&board, &groups),
            None
        );
        assert_eq!(DegreeHeuristic.select_cell(&board, &groups), None);
        assert_eq!(
            RandomCellHeuristic::with_seed(7).select_cell(&board, &groups),
            None
        );
    }

    #[test]
    fn degree_returns_first_maximal_cell_on_the_uniform_grid() {
        let mut clues = [[0u8; 9]; 9];
        clues[0][0] = 1;
        let board = Board::from_clues(clues);
        let groups = Groups::standard();

        // All unassigned cells share degree 3, so the first one wins.
        assert_eq!(
            DegreeHeuristic.select_cell(&board, &groups),
            Some(Cell::new(0, 1))
        );
    }

    #[test]
    fn seeded_random_selection_is_reproducible() {
        let board = Board::from_clues([[0; 9]; 9]);
        let groups = Groups::standard();

        let picks = |seed| {
            let heuristic = RandomCellHeuristic::with_seed(seed);
            (0..5)
                .map(|_| heuristic.select_cell(&board, &groups))
                .collect::<Vec<_>>()
        };

        assert_eq!(picks(42), picks(42));
    }
}
