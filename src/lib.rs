//! Nonet is a finite-domain constraint solver specialized to 9x9 grid
//! puzzles with row, column and box uniqueness rules.
//!
//! The engine keeps one candidate-digit domain per cell and combines three
//! mechanisms to narrow them down to a single assignment:
//!
//! - **[Local deductions]**: the Naked Single and Hidden Single passes,
//!   cheap one-shot filters.
//! - **[Arc consistency]**: a worklist implementation of AC-3, the
//!   authoritative pruning engine, run on every search branch.
//! - **[Backtracking search]**: a depth-first driver that branches on the
//!   cell chosen by a [selection heuristic] and hands every branch its own
//!   snapshot of the board.
//!
//! [Local deductions]: solver::deduction
//! [Arc consistency]: solver::propagation
//! [Backtracking search]: solver::search
//! [selection heuristic]: solver::heuristics::cell
//!
//! # Example
//!
//! ```
//! use nonet::solver::board::Board;
//! use nonet::solver::groups::Groups;
//! use nonet::solver::search::{BacktrackingSearch, SearchOutcome};
//!
//! let board = Board::from_clues([
//!     [5, 3, 0, 0, 7, 0, 0, 0, 0],
//!     [6, 0, 0, 1, 9, 5, 0, 0, 0],
//!     [0, 9, 8, 0, 0, 0, 0, 6, 0],
//!     [8, 0, 0, 0, 6, 0, 0, 0, 3],
//!     [4, 0, 0, 8, 0, 3, 0, 0, 1],
//!     [7, 0, 0, 0, 2, 0, 0, 0, 6],
//!     [0, 6, 0, 0, 0, 0, 2, 8, 0],
//!     [0, 0, 0, 4, 1, 9, 0, 0, 5],
//!     [0, 0, 0, 0, 8, 0, 0, 7, 9],
//! ]);
//!
//! let groups = Groups::standard();
//! let (outcome, stats) = BacktrackingSearch::default().solve(board, &groups);
//!
//! match outcome {
//!     SearchOutcome::Solved(solved) => assert!(solved.is_complete()),
//!     SearchOutcome::Exhausted => panic!("this board is satisfiable"),
//! }
//! assert!(stats.nodes_visited >= 1);
//! ```
//!
//! Boards can also be loaded from the 81-line text format via [`io`], one
//! candidate set per cell in row-major order.

pub mod error;
pub mod io;
pub mod solver;
