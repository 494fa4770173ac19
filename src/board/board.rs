//! Board structure with scoped move/undo

use std::fmt;
use std::ops::{Deref, DerefMut};

use super::{Cell, Player, Pos, MAX_BOARD_SIZE};

/// Square game board, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty `size`×`size` board.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero or larger than [`MAX_BOARD_SIZE`].
    pub fn new(size: usize) -> Self {
        assert!(
            (1..=MAX_BOARD_SIZE).contains(&size),
            "board size {size} outside 1..={MAX_BOARD_SIZE}"
        );
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Build a board from text rows: `O` is Computer, `X` is Human,
    /// `.` or a space is empty.
    ///
    /// # Panics
    ///
    /// Panics if the rows are not square or contain other characters.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new(rows.len());
        for (r, line) in rows.iter().enumerate() {
            assert_eq!(line.chars().count(), board.size, "row {r} has wrong length");
            for (c, ch) in line.chars().enumerate() {
                let pos = Pos::new(r as u8, c as u8);
                match ch {
                    'O' | 'o' => board.apply(pos, Player::Computer),
                    'X' | 'x' => board.apply(pos, Player::Human),
                    '.' | ' ' => {}
                    other => panic!("unexpected board character {other:?}"),
                }
            }
        }
        board
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the signed coordinate lies on the board
    #[inline]
    pub fn contains(&self, row: i32, col: i32) -> bool {
        let n = self.size as i32;
        row >= 0 && row < n && col >= 0 && col < n
    }

    /// Row-major slot of `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is off the board.
    #[inline]
    fn slot(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) is off the {n}x{n} board",
            n = self.size
        );
        row * self.size + col
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        self.slot(pos.row as usize, pos.col as usize)
    }

    /// Get the cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[self.index(pos)]
    }

    /// Get the cell at an unsigned coordinate pair
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[self.slot(row, col)]
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Write `player`'s mark into an empty cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell is occupied. Callers validate moves first.
    #[inline]
    pub fn apply(&mut self, pos: Pos, player: Player) {
        let idx = self.index(pos);
        assert!(
            self.cells[idx] == Cell::Empty,
            "cell ({}, {}) is already occupied",
            pos.row,
            pos.col
        );
        self.cells[idx] = player.into();
    }

    /// Reset a cell to empty
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        let idx = self.index(pos);
        self.cells[idx] = Cell::Empty;
    }

    /// Place a mark for the lifetime of the returned guard.
    ///
    /// The guard dereferences to the board, so a search can recurse through
    /// it. Dropping it clears the cell again, whichever way the caller leaves
    /// the scope.
    #[inline]
    pub fn place(&mut self, pos: Pos, player: Player) -> Placement<'_> {
        self.apply(pos, player);
        Placement { board: self, pos }
    }

    /// True iff no empty cells remain
    #[inline]
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Empty coordinates in row-major order
    pub fn empty_cells(&self) -> EmptyCells<'_> {
        EmptyCells {
            board: self,
            next: 0,
        }
    }

    /// Number of occupied cells
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Clear every cell
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Copy of this board with Computer and Human marks exchanged
    pub fn swapped(&self) -> Board {
        Board {
            size: self.size,
            cells: self.cells.iter().map(|c| c.swapped()).collect(),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            for cell in row {
                write!(f, "|{}", cell.symbol())?;
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}

/// Lazy row-major scan over empty cells. Call [`Board::empty_cells`] again
/// to restart.
#[derive(Debug, Clone)]
pub struct EmptyCells<'a> {
    board: &'a Board,
    next: usize,
}

impl Iterator for EmptyCells<'_> {
    type Item = Pos;

    fn next(&mut self) -> Option<Pos> {
        let n = self.board.size;
        while self.next < self.board.cells.len() {
            let idx = self.next;
            self.next += 1;
            if self.board.cells[idx] == Cell::Empty {
                return Some(Pos::new((idx / n) as u8, (idx % n) as u8));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.board.cells.len() - self.next))
    }
}

/// A mark that is removed again when this guard goes out of scope
#[derive(Debug)]
pub struct Placement<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl Placement<'_> {
    /// Cell held by this guard
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.clear(self.pos);
    }
}
