use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::board_widget::{self, BoardGeometry};

/// Screen regions for one frame. Kept by the app so mouse events can be
/// mapped back onto what was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLayout {
    pub board: BoardGeometry,
    pub status: Rect,
    pub moves: Rect,
    pub message: Rect,
    pub controls: Rect,
}

impl GameLayout {
    pub fn new(area: Rect, show_coordinates: bool) -> Self {
        let (board_w, board_h) = board_widget::outer_size(show_coordinates);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(board_w), // Board
                Constraint::Min(24),        // Side panel
            ])
            .split(area);

        let board_area = Rect {
            height: board_h.min(columns[0].height),
            ..columns[0]
        };

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Status
                Constraint::Min(3),    // Move list
                Constraint::Length(3), // Message
                Constraint::Length(5), // Controls
            ])
            .split(columns[1]);

        GameLayout {
            board: BoardGeometry::new(board_area, show_coordinates),
            status: side[0],
            moves: side[1],
            message: side[2],
            controls: side[3],
        }
    }
}
