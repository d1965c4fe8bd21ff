//! Loading and rendering of boards.
//!
//! The on-disk format is one line per cell, 81 lines, row-major: a line is
//! the cell's candidate set, so `7` is a given clue and `123456789` is a
//! blank cell. Validation happens entirely here; the solver never sees a
//! malformed board.

use std::fs;
use std::path::Path;

use crate::{
    error::{Error, Result},
    solver::board::{Board, Cell, Digit, Domain},
};

/// Parses a board from the 81-line candidate-set format.
pub fn parse_board(input: &str) -> Result<Board> {
    let lines: Vec<&str> = input.lines().collect();
    if lines.len() != 81 {
        return Err(Error::WrongLineCount(lines.len()));
    }

    let mut domains: Vec<Domain> = Vec::with_capacity(81);
    for (i, raw) in lines.iter().enumerate() {
        let line = i + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyCell { line });
        }
        let mut domain = Domain::new();
        for c in trimmed.chars() {
            let digit = Digit::from_char(c).ok_or(Error::InvalidCandidate { line, found: c })?;
            domain.insert(digit);
        }
        domains.push(domain);
    }

    Ok(Board::from_fn(|cell| domains[cell.index()].clone()))
}

/// Reads and parses a board file.
pub fn load_board(path: &Path) -> Result<Board> {
    parse_board(&fs::read_to_string(path)?)
}

/// Renders a board as nine space-separated rows, printing `.` for any cell
/// not yet narrowed to a single digit.
pub fn render_board(board: &Board) -> String {
    render_rows(board)
        .iter()
        .map(|row| {
            row.chars()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders a board as nine compact row strings, `.` for unsolved cells.
pub fn render_rows(board: &Board) -> Vec<String> {
    (0..9)
        .map(|row| {
            (0..9)
                .map(|col| match board.singleton(Cell::new(row, col)) {
                    Some(digit) => char::from(b'0' + digit.get()),
                    None => '.',
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn lines_for(clues: [[u8; 9]; 9]) -> String {
        let mut out = String::new();
        for row in clues {
            for value in row {
                if value == 0 {
                    out.push_str("123456789\n");
                } else {
                    out.push(char::from(b'0' + value));
                    out.push('\n');
                }
            }
        }
        out
    }

    #[test]
    fn parses_clues_and_blanks() {
        let mut clues = [[0u8; 9]; 9];
        clues[0][0] = 5;
        clues[4][7] = 9;
        let board = parse_board(&lines_for(clues)).unwrap();

        assert_eq!(board.singleton(Cell::new(0, 0)), Digit::new(5));
        assert_eq!(board.singleton(Cell::new(4, 7)), Digit::new(9));
        assert_eq!(board.domain(Cell::new(1, 1)).len(), 9);
    }

    #[test]
    fn parses_partial_candidate_sets() {
        let mut input = lines_for([[0; 9]; 9]);
        // First cell: only 2, 4 and 7 remain. Duplicates collapse.
        input = input.replacen("123456789", "2477", 1);
        let board = parse_board(&input).unwrap();

        let domain = board.domain(Cell::new(0, 0));
        assert_eq!(domain.len(), 3);
        assert!(domain.contains(&Digit::new(2).unwrap()));
        assert!(domain.contains(&Digit::new(4).unwrap()));
        assert!(domain.contains(&Digit::new(7).unwrap()));
    }

    #[test]
    fn rejects_wrong_line_counts() {
        let input = lines_for([[0; 9]; 9]);
        let eighty: String = input.lines().take(80).collect::<Vec<_>>().join("\n");
        let mut eighty_two = input.clone();
        eighty_two.push_str("5\n");

        assert!(matches!(
            parse_board(&eighty),
            Err(Error::WrongLineCount(80))
        ));
        assert!(matches!(
            parse_board(&eighty_two),
            Err(Error::WrongLineCount(82))
        ));
    }

    #[test]
    fn rejects_invalid_candidates() {
        let input = lines_for([[0; 9]; 9]).replacen("123456789", "12x", 1);
        assert!(matches!(
            parse_board(&input),
            Err(Error::InvalidCandidate { line: 1, found: 'x' })
        ));

        let zero = lines_for([[0; 9]; 9]).replacen("123456789", "0", 1);
        assert!(matches!(
            parse_board(&zero),
            Err(Error::InvalidCandidate { line: 1, found: '0' })
        ));
    }

    #[test]
    fn rejects_empty_cell_lines() {
        let input = lines_for([[0; 9]; 9]).replacen("123456789", "  ", 1);
        assert!(matches!(parse_board(&input), Err(Error::EmptyCell { line: 1 })));
    }

    #[test]
    fn load_board_surfaces_io_errors() {
        let missing = Path::new("does/not/exist.txt");
        assert!(matches!(load_board(missing), Err(Error::Io(_))));
    }

    #[test]
    fn renders_unsolved_cells_as_dots() {
        let mut clues = [[0u8; 9]; 9];
        clues[0][0] = 3;
        clues[0][1] = 6;
        let board = parse_board(&lines_for(clues)).unwrap();

        let rows = render_rows(&board);
        assert_eq!(rows[0], "36.......");

        let rendered = render_board(&board);
        assert!(rendered.starts_with("3 6 . . . . . . ."));
        assert_eq!(rendered.lines().count(), 9);
    }
}
