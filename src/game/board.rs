use super::player::Player;

/// Width and height of the (square) board.
pub const SIZE: usize = 19;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// The player owning this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A board coordinate. `x` indexes rows (top to bottom), `y` indexes columns
/// (left to right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    pub const fn new(x: usize, y: usize) -> Self {
        Pos { x, y }
    }

    pub fn in_bounds(self) -> bool {
        self.x < SIZE && self.y < SIZE
    }

    /// Step `step` times along `(dx, dy)`, or `None` if that leaves the board.
    pub fn offset(self, dx: isize, dy: isize, step: isize) -> Option<Pos> {
        let x = self.x.checked_add_signed(dx * step)?;
        let y = self.y.checked_add_signed(dy * step)?;
        let pos = Pos { x, y };
        pos.in_bounds().then_some(pos)
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One immutable snapshot of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Get the cell at `pos`, or `None` when `pos` is off the board
    pub fn get(&self, pos: Pos) -> Option<Cell> {
        self.cells.get(pos.x)?.get(pos.y).copied()
    }

    /// True if `pos` is on the board and holds no stone
    pub fn is_vacant(&self, pos: Pos) -> bool {
        self.get(pos) == Some(Cell::Empty)
    }

    /// Return a copy of this board with `player`'s stone at `pos`.
    ///
    /// The receiver is left untouched so earlier snapshots stay valid.
    /// Panics if `pos` is off the board; callers validate first.
    pub fn with_stone(&self, pos: Pos, player: Player) -> Board {
        let mut next = *self;
        next.cells[pos.x][pos.y] = player.to_cell();
        next
    }

    /// Number of stones on the board
    #[cfg(test)]
    pub(crate) fn stone_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// All occupied cells in row-major order
    pub fn stones(&self) -> impl Iterator<Item = (Pos, Player)> + '_ {
        self.cells.iter().enumerate().flat_map(|(x, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(y, cell)| cell.player().map(|p| (Pos::new(x, y), p)))
        })
    }

    /// The first cell that is empty here but occupied in `next`.
    ///
    /// For consecutive history snapshots this is the move that separates them.
    pub fn placed_between(&self, next: &Board) -> Option<Pos> {
        next.stones()
            .map(|(pos, _)| pos)
            .find(|&pos| self.is_vacant(pos))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
