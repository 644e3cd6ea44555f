//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{game::Outcome, lines::LineAnalyzer};

/// Side length of the grid
pub const BOARD_SIZE: usize = 3;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this mark, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Utility of a game this player has won
    pub fn win_utility(self) -> i32 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A `(row, col)` coordinate, 0-indexed.
///
/// Coordinates are not range-checked on construction; [`Board::apply_move`]
/// rejects anything outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub const fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }

    /// Row-major cell index, or `None` when off the board
    pub fn index(self) -> Option<usize> {
        (self.row < BOARD_SIZE && self.col < BOARD_SIZE).then_some(self.row * BOARD_SIZE + self.col)
    }

    /// Move addressing a row-major cell index (0-8)
    pub fn from_index(index: usize) -> Self {
        Move::new(index / BOARD_SIZE, index % BOARD_SIZE)
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Move::new(row, col)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A 3x3 grid of cells stored row-major.
///
/// Boards are 9-byte `Copy` values. The player to move is not stored; it is
/// inferred from piece counts, so a board must be reached by alternating
/// moves starting with X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; 9],
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
    empty: usize,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    fn count_pieces(cells: &[Cell; 9]) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for cell in cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Create a board from a string representation.
    ///
    /// The string holds 9 cell characters in row-major order. Whitespace and
    /// `|`/`/` row separators are ignored, so `"X.O/.X./..O"` and
    /// `"X.O .X. ..O"` are both accepted.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The board does not have exactly 9 cell characters
    /// - Any character is not a valid cell representation
    /// - The piece counts could not arise from alternating play with X first
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != '/')
            .collect();

        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let count = Self::count_pieces(&cells);
        if count.x != count.o && count.x != count.o + 1 {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        Ok(Board { cells })
    }

    /// Player to move, inferred from the X minus O tally.
    pub fn whose_turn(&self) -> Player {
        let count = Self::count_pieces(&self.cells);
        if count.x <= count.o {
            Player::X
        } else {
            Player::O
        }
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        9 - Self::count_pieces(&self.cells).empty
    }

    /// Cell at the given coordinate, or `None` when off the board
    pub fn get(&self, mv: Move) -> Option<Cell> {
        mv.index().map(|idx| self.cells[idx])
    }

    /// Every empty coordinate, in row-major order.
    ///
    /// Terminal boards still report their empty cells. Callers that need a
    /// particular order should sort the result themselves.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Move::from_index(i))
            .collect()
    }

    /// Place the current player's mark and return the new board
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMove`] when the coordinate is off the
    /// board or the cell is occupied.
    #[must_use = "apply_move returns a new board; the original is unchanged"]
    pub fn apply_move(&self, mv: Move) -> Result<Board, crate::Error> {
        let invalid = || crate::Error::InvalidMove {
            row: mv.row,
            col: mv.col,
        };
        let idx = mv.index().ok_or_else(invalid)?;
        if self.cells[idx] != Cell::Empty {
            return Err(invalid());
        }

        let mut next = *self;
        next.cells[idx] = self.whose_turn().to_cell();
        Ok(next)
    }

    /// Each legal move paired with the board it produces
    pub fn successors(&self) -> impl Iterator<Item = (Move, Board)> + '_ {
        let mark = self.whose_turn().to_cell();
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(move |(i, _)| {
                let mut next = *self;
                next.cells[i] = mark;
                (Move::from_index(i), next)
            })
    }

    /// Winner by rows, then columns, then diagonals
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::first_complete_line(&self.cells)
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }

    /// +1 if X has won, -1 if O has won, 0 for a draw.
    ///
    /// Returns `None` for a board that is still in progress, which has no
    /// utility.
    pub fn utility(&self) -> Option<i32> {
        match self.winner() {
            Some(player) => Some(player.win_utility()),
            None if self.is_full() => Some(0),
            None => None,
        }
    }

    pub fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(player) => Outcome::Win(player),
            None if self.is_full() => Outcome::Draw,
            None => Outcome::InProgress,
        }
    }

    /// Moves that complete a line for `player`, in row-major order
    pub fn winning_moves(&self, player: Player) -> Vec<Move> {
        LineAnalyzer::winning_moves(&self.cells, player)
            .into_iter()
            .map(Move::from_index)
            .collect()
    }

    /// Check if the player to move can win on this turn
    pub fn has_immediate_win(&self) -> bool {
        LineAnalyzer::has_immediate_win(&self.cells, self.whose_turn())
    }

    /// Compact single-line encoding, e.g. `"X.O.X...O"`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_string(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(BOARD_SIZE) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
