pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised at the I/O boundary of the crate.
///
/// The solver itself cannot fail: an unsatisfiable board is reported through
/// [`SearchOutcome::Exhausted`], not through this type. Everything here is a
/// validation or environment failure detected before the engine runs.
///
/// [`SearchOutcome::Exhausted`]: crate::solver::search::SearchOutcome
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("puzzle must contain exactly 81 cell lines, found {0}")]
    WrongLineCount(usize),

    #[error("line {line}: cell has no candidates")]
    EmptyCell { line: usize },

    #[error("line {line}: invalid candidate {found:?}, expected a digit 1-9")]
    InvalidCandidate { line: usize, found: char },

    #[error("no puzzle file given")]
    NoPuzzle,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
