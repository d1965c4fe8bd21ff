use prettytable::{Cell, Row, Table};
use serde::Serialize;

/// Counters accumulated by the arc-consistency engine.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct PropagationStats {
    /// Number of times the engine ran to a fixed point (or failed).
    pub runs: u64,
    /// Arcs revised across all runs.
    pub revisions: u64,
    /// Candidate values removed across all runs.
    pub removals: u64,
    /// Runs that ended by emptying a domain.
    pub contradictions: u64,
    /// Total time spent propagating, in microseconds.
    pub time_spent_micros: u64,
}

/// Counters accumulated over one whole solve.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Search nodes entered, including the root.
    pub nodes_visited: u64,
    /// Branch commits: assignments that survived propagation.
    pub assignments: u64,
    /// Branches abandoned after propagation failure or a fruitless subtree.
    pub backtracks: u64,
    pub propagation: PropagationStats,
}

/// Renders a human-readable table of the solve counters.
pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Value")]));

    let rows: [(&str, String); 8] = [
        ("Nodes visited", stats.nodes_visited.to_string()),
        ("Assignments", stats.assignments.to_string()),
        ("Backtracks", stats.backtracks.to_string()),
        ("Propagation runs", stats.propagation.runs.to_string()),
        ("Arc revisions", stats.propagation.revisions.to_string()),
        ("Values pruned", stats.propagation.removals.to_string()),
        ("Contradictions", stats.propagation.contradictions.to_string()),
        (
            "Propagation time (ms)",
            format!("{:.2}", stats.propagation.time_spent_micros as f64 / 1000.0),
        ),
    ];
    for (metric, value) in rows {
        table.add_row(Row::new(vec![Cell::new(metric), Cell::new(&value)]));
    }

    table.to_string()
}
