//! The arc-consistency engine (AC-3).
//!
//! This is the authoritative pruning mechanism of the solver: a worklist of
//! directed arcs is drained to a fixed point, at which no further candidate
//! can be removed without branching. The local rules in
//! [`deduction`](crate::solver::deduction) are optional pre-filters; this
//! engine is what the search relies on.

use std::time::Instant;

use tracing::debug;

use crate::solver::{
    board::{Board, Cell, Domain},
    groups::Groups,
    stats::PropagationStats,
    work_list::WorkList,
};

/// Enforces arc consistency on `board`, removing provably-impossible
/// candidates in place.
///
/// Returns `true` if every domain is still non-empty afterwards, `false` as
/// soon as a revision empties one (the board is then in a partially revised
/// state and should be discarded by the caller).
pub fn enforce(board: &mut Board, groups: &Groups) -> bool {
    enforce_with_stats(board, groups, &mut PropagationStats::default())
}

/// [`enforce`], accumulating revision counters and elapsed time into
/// `stats`.
pub fn enforce_with_stats(
    board: &mut Board,
    groups: &Groups,
    stats: &mut PropagationStats,
) -> bool {
    let start = Instant::now();
    stats.runs += 1;

    // Seed the worklist with every ordered arc of every group. The worklist
    // deduplicates, so cells sharing several groups contribute one arc each
    // way.
    let mut worklist = WorkList::new();
    for group in groups.iter() {
        for &target in group.cells() {
            for &against in group.cells() {
                if target != against {
                    worklist.push_back(target, against);
                }
            }
        }
    }

    while let Some((target, against)) = worklist.pop_front() {
        stats.revisions += 1;
        let removed = revise(board, target, against);
        if removed == 0 {
            continue;
        }
        stats.removals += removed as u64;

        if board.domain(target).is_empty() {
            stats.contradictions += 1;
            stats.time_spent_micros += start.elapsed().as_micros() as u64;
            debug!(cell = %target, "domain wiped out, propagation failed");
            return false;
        }

        // The target shrank: every arc pointing at it may now prune further,
        // except the one we just used as support.
        for &peer in groups.peers(target) {
            if peer != against {
                worklist.push_back(peer, target);
            }
        }
    }

    stats.time_spent_micros += start.elapsed().as_micros() as u64;
    true
}

/// Revises the arc `(target, against)`: removes every candidate of `target`
/// that has no differing supporting value in the domain of `against`.
/// Returns the number of candidates removed.
fn revise(board: &mut Board, target: Cell, against: Cell) -> usize {
    let support = board.domain(against).clone();
    let current = board.domain(target);

    let kept: Domain = current
        .iter()
        .filter(|&&x| support.iter().any(|&y| y != x))
        .copied()
        .collect();

    let removed = current.len() - kept.len();
    if removed > 0 {
        board.set_domain(target, kept);
    }
    removed
}
