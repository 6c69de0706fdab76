//! Core game logic: board snapshots, players, five-in-a-row detection, and the
//! move history with its time-travel cursor.

mod board;
mod player;
mod state;
pub mod win;

pub use crate::error::{HistoryError, MoveError};
pub use board::{Board, Cell, Pos, SIZE};
pub use player::Player;
pub use state::{apply_move, record_move, GameOutcome, GameState};
pub use win::{winner, winner_at, WinLine, WIN_LENGTH};
