use serde::{Deserialize, Serialize};

/// Side length of the board.
pub const GRID_SIZE: usize = 9;
/// Side length of one box.
pub const BOX_SIZE: usize = 3;

/// A cell coordinate on the 9x9 board. Rows and columns are 0-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < GRID_SIZE && col < GRID_SIZE);
        Self { row, col }
    }

    /// Iterate all 81 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| Position::new(row, col)))
    }

    /// Top-left corner of the 3x3 box containing this position.
    pub fn box_origin(&self) -> (usize, usize) {
        (self.row / BOX_SIZE * BOX_SIZE, self.col / BOX_SIZE * BOX_SIZE)
    }

    /// Index 0-8 of the box containing this position.
    pub fn box_index(&self) -> usize {
        (self.row / BOX_SIZE) * BOX_SIZE + self.col / BOX_SIZE
    }
}

/// A 9x9 Sudoku grid. Each cell holds a value 1-9 or is empty.
///
/// Dimensions are fixed for the lifetime of the grid; the only mutation
/// is writing or clearing individual cell values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Grid {
    cells: [[Option<u8>; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value at a position.
    pub fn get(&self, pos: Position) -> Option<u8> {
        self.cells[pos.row][pos.col]
    }

    /// Set or clear the value at a position.
    pub fn set(&mut self, pos: Position, value: Option<u8>) {
        debug_assert!(value.is_none_or(|v| (1..=9).contains(&v)));
        self.cells[pos.row][pos.col] = value;
    }

    /// Check whether a cell is empty.
    pub fn is_empty_cell(&self, pos: Position) -> bool {
        self.cells[pos.row][pos.col].is_none()
    }

    /// All empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::all().filter(|&pos| self.is_empty_cell(pos)).collect()
    }

    /// First empty position in row-major order, if any.
    pub fn first_empty(&self) -> Option<Position> {
        Position::all().find(|&pos| self.is_empty_cell(pos))
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        Position::all().filter(|&pos| !self.is_empty_cell(pos)).count()
    }

    /// Whether every cell is filled.
    pub fn is_full(&self) -> bool {
        self.first_empty().is_none()
    }

    /// Raw cell values, row-major.
    pub fn values(&self) -> &[[Option<u8>; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Parse a grid from an 81-character string.
    ///
    /// Digits 1-9 are values; `0` and `.` are empty cells. Whitespace is
    /// ignored. Returns `None` if the input is malformed.
    pub fn from_string(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != GRID_SIZE * GRID_SIZE {
            return None;
        }

        let mut grid = Self::new();
        for (i, c) in chars.iter().enumerate() {
            let value = match c {
                '0' | '.' => None,
                '1'..='9' => Some(*c as u8 - b'0'),
                _ => return None,
            };
            grid.cells[i / GRID_SIZE][i % GRID_SIZE] = value;
        }
        Some(grid)
    }

    /// Render as an 81-character string, `0` for empty cells.
    pub fn to_string_compact(&self) -> String {
        let mut s = String::with_capacity(GRID_SIZE * GRID_SIZE);
        for pos in Position::all() {
            match self.get(pos) {
                Some(v) => s.push((b'0' + v) as char),
                None => s.push('0'),
            }
        }
        s
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..GRID_SIZE {
            if row % BOX_SIZE == 0 {
                writeln!(f, "+-------+-------+-------+")?;
            }
            for col in 0..GRID_SIZE {
                if col % BOX_SIZE == 0 {
                    write!(f, "| ")?;
                }
                match self.cells[row][col] {
                    Some(v) => write!(f, "{} ", v)?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f, "|")?;
        }
        write!(f, "+-------+-------+-------+")
    }
}
