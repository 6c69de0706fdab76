//! Terminal UI: the board, a status line, and the clickable move history.

mod app;
pub mod board_widget;
mod game_view;
pub mod layout;
pub mod move_list;

pub use app::App;
pub use game_view::{status_line, Focus};
