use tracing::{debug, info};

use super::win::{self, WinLine};
use super::{Board, Player, Pos};
use crate::error::{HistoryError, MoveError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Place `player`'s stone at `pos`, returning the next snapshot.
///
/// Rejected if the cell is taken or off the board, or if `board` already has a
/// winner. `board` itself is never modified.
pub fn apply_move(board: &Board, pos: Pos, player: Player) -> Result<Board, MoveError> {
    if !pos.in_bounds() {
        return Err(MoveError::OutOfBounds(pos));
    }
    if !board.is_vacant(pos) {
        return Err(MoveError::Occupied(pos));
    }
    if win::winner(board).is_some() {
        return Err(MoveError::GameOver);
    }
    Ok(board.with_stone(pos, player))
}

/// Keep `history[..=current_move]`, append `new_board`, and return the new
/// history with the index of the appended entry.
///
/// Any snapshots after `current_move` are discarded.
pub fn record_move(history: &[Board], current_move: usize, new_board: Board) -> (Vec<Board>, usize) {
    let keep = (current_move + 1).min(history.len());
    let mut next = Vec::with_capacity(keep + 1);
    next.extend_from_slice(&history[..keep]);
    next.push(new_board);
    let cursor = next.len() - 1;
    (next, cursor)
}

/// The move history with a cursor on the snapshot being shown.
///
/// The player to move is never stored: it is derived from the cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    history: Vec<Board>,
    current_move: usize,
}

impl GameState {
    /// Create initial game state: one empty board
    pub fn new() -> Self {
        GameState {
            history: vec![Board::new()],
            current_move: 0,
        }
    }

    /// Throw away the whole history and start over
    pub fn reset(&mut self) {
        info!(discarded = self.history.len() - 1, "new game");
        *self = GameState::new();
    }

    pub fn history(&self) -> &[Board] {
        &self.history
    }

    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Index of the newest snapshot
    pub fn latest_move(&self) -> usize {
        self.history.len() - 1
    }

    pub fn is_at_latest(&self) -> bool {
        self.current_move == self.latest_move()
    }

    /// The snapshot at the cursor
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Whose turn it is at the cursor
    pub fn next_player(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Outcome of the board at the cursor, if the game is over there
    pub fn outcome(&self) -> Option<GameOutcome> {
        let board = self.current_board();
        if let Some(player) = win::winner(board) {
            Some(GameOutcome::Winner(player))
        } else if board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }

    /// The winning run on the board at the cursor
    pub fn winning_line(&self) -> Option<WinLine> {
        win::find_win(self.current_board())
    }

    /// The cell played by move `index` (1-based: move 1 is the first stone).
    pub fn move_at(&self, index: usize) -> Option<Pos> {
        let before = self.history.get(index.checked_sub(1)?)?;
        let after = self.history.get(index)?;
        before.placed_between(after)
    }

    /// The cell played to reach the snapshot at the cursor
    pub fn last_move(&self) -> Option<Pos> {
        self.move_at(self.current_move)
    }

    /// Play `pos` for the player to move at the cursor.
    ///
    /// On success any snapshots after the cursor are discarded and the cursor
    /// moves to the new snapshot. On error nothing changes.
    pub fn play(&mut self, pos: Pos) -> Result<(), MoveError> {
        let player = self.next_player();
        let board = match apply_move(self.current_board(), pos, player) {
            Ok(board) => board,
            Err(err) => {
                debug!(%pos, error = %err, "move rejected");
                return Err(err);
            }
        };

        let discarded = self.latest_move() - self.current_move;
        let (history, cursor) = record_move(&self.history, self.current_move, board);
        self.history = history;
        self.current_move = cursor;
        info!(move_number = cursor, %player, %pos, discarded, "move played");

        if let Some(winner) = win::winner_at(self.current_board(), pos) {
            info!(%winner, moves = cursor, "game won");
        }
        Ok(())
    }

    /// Show snapshot `index` without touching the history.
    pub fn jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        if index >= self.history.len() {
            return Err(HistoryError::OutOfRange {
                requested: index,
                len: self.history.len(),
            });
        }
        debug!(from = self.current_move, to = index, "jump");
        self.current_move = index;
        Ok(())
    }

    /// Move the cursor one snapshot back. Returns false at the start.
    pub fn step_back(&mut self) -> bool {
        match self.current_move.checked_sub(1) {
            Some(index) => self.jump_to(index).is_ok(),
            None => false,
        }
    }

    /// Move the cursor one snapshot forward. Returns false at the latest.
    pub fn step_forward(&mut self) -> bool {
        self.jump_to(self.current_move + 1).is_ok()
    }

    pub fn jump_to_latest(&mut self) {
        self.current_move = self.latest_move();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
