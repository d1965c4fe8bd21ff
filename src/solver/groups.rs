//! The constraint group generator: the 27 mutual-exclusion groups of the
//! standard grid (9 rows, 9 columns, 9 boxes) and the peer lists derived
//! from them.

use std::fmt;

use crate::solver::board::Cell;

/// The flavour of a constraint group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    Row,
    Column,
    Block,
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKind::Row => write!(f, "row"),
            GroupKind::Column => write!(f, "column"),
            GroupKind::Block => write!(f, "box"),
        }
    }
}

/// An ordered set of nine cells that must hold pairwise different digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    kind: GroupKind,
    index: u8,
    cells: Vec<Cell>,
}

impl Group {
    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    pub fn index(&self) -> u8 {
        self.index
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.index + 1)
    }
}

/// The immutable constraint topology of a solve: the 27 groups plus, for
/// every cell, the list of its 20 distinct peers (cells sharing at least one
/// group with it).
///
/// Generated once via [`Groups::standard`] and passed explicitly into
/// propagation, heuristics and search; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Groups {
    groups: Vec<Group>,
    peers: Vec<Vec<Cell>>,
}

impl Groups {
    /// Builds the standard grouping: 9 rows, 9 columns and 9 non-overlapping
    /// 3x3 boxes. Deterministic; every cell belongs to exactly three groups.
    pub fn standard() -> Groups {
        let mut groups = Vec::with_capacity(27);

        for row in 0..9 {
            groups.push(Group {
                kind: GroupKind::Row,
                index: row,
                cells: (0..9).map(|col| Cell::new(row, col)).collect(),
            });
        }
        for col in 0..9 {
            groups.push(Group {
                kind: GroupKind::Column,
                index: col,
                cells: (0..9).map(|row| Cell::new(row, col)).collect(),
            });
        }
        for block in 0..9 {
            let base_row = block / 3 * 3;
            let base_col = block % 3 * 3;
            let cells = (0..3)
                .flat_map(|r| (0..3).map(move |c| Cell::new(base_row + r, base_col + c)))
                .collect();
            groups.push(Group {
                kind: GroupKind::Block,
                index: block,
                cells,
            });
        }

        let peers = Self::collect_peers(&groups);
        Groups { groups, peers }
    }

    fn collect_peers(groups: &[Group]) -> Vec<Vec<Cell>> {
        let mut peers: Vec<Vec<Cell>> = vec![Vec::new(); 81];
        for group in groups {
            for &cell in &group.cells {
                for &other in &group.cells {
                    if other != cell && !peers[cell.index()].contains(&other) {
                        peers[cell.index()].push(other);
                    }
                }
            }
        }
        peers
    }

    pub fn iter(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The distinct cells sharing at least one group with `cell`, in the
    /// deterministic order they were first encountered (row, column, block).
    pub fn peers(&self, cell: Cell) -> &[Cell] {
        &self.peers[cell.index()]
    }

    /// How many groups contain `cell`. Uniformly 3 on the standard grid.
    pub fn degree(&self, cell: Cell) -> usize {
        self.groups.iter().filter(|g| g.contains(cell)).count()
    }
}
