use crate::config::UiConfig;
use crate::game::{Board, Cell, Pos, WinLine, SIZE};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Terminal columns per board cell: the stone plus a gap.
pub const CELL_WIDTH: u16 = 2;
/// Row label gutter ("19 ") when coordinates are shown.
const LABEL_WIDTH: u16 = 3;

/// Outer (width, height) of the board block including borders.
pub fn outer_size(show_coordinates: bool) -> (u16, u16) {
    let (label_w, header_h) = if show_coordinates { (LABEL_WIDTH, 1) } else { (0, 0) };
    let width = label_w + SIZE as u16 * CELL_WIDTH + 2;
    let height = header_h + SIZE as u16 + 2;
    (width, height)
}

/// Column letter: a..s on a 19-wide board.
pub fn column_label(y: usize) -> char {
    (b'a' + y as u8) as char
}

/// Human label for a cell as drawn on screen, e.g. `c4` for row 3, column 2.
pub fn coord_label(pos: Pos) -> String {
    format!("{}{}", column_label(pos.y), pos.x + 1)
}

/// Where the cells of a board block land on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    area: Rect,
    origin_x: u16,
    origin_y: u16,
}

impl BoardGeometry {
    pub fn new(area: Rect, show_coordinates: bool) -> Self {
        let (label_w, header_h) = if show_coordinates { (LABEL_WIDTH, 1) } else { (0, 0) };
        BoardGeometry {
            area,
            origin_x: area.x + 1 + label_w,
            origin_y: area.y + 1 + header_h,
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// The board cell under a terminal position, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Pos> {
        let inner_right = self.area.right().saturating_sub(1);
        let inner_bottom = self.area.bottom().saturating_sub(1);
        if column < self.origin_x || row < self.origin_y || column >= inner_right || row >= inner_bottom {
            return None;
        }
        let y = ((column - self.origin_x) / CELL_WIDTH) as usize;
        let x = (row - self.origin_y) as usize;
        let pos = Pos::new(x, y);
        pos.in_bounds().then_some(pos)
    }

    /// Terminal position of the stone in `pos`
    pub fn screen_pos(&self, pos: Pos) -> (u16, u16) {
        (
            self.origin_x + pos.y as u16 * CELL_WIDTH,
            self.origin_y + pos.x as u16,
        )
    }
}

/// Per-frame decorations on top of the stones.
#[derive(Debug, Default)]
pub struct BoardMarks<'a> {
    pub cursor: Option<Pos>,
    pub last_move: Option<Pos>,
    pub winning_line: Option<&'a WinLine>,
}

fn cell_style(cell: Cell) -> Style {
    match cell {
        Cell::Empty => Style::default().fg(Color::DarkGray),
        Cell::X => Style::default().fg(Color::LightRed),
        Cell::O => Style::default().fg(Color::LightBlue),
    }
}

fn cell_symbol(cell: Cell, config: &UiConfig) -> char {
    match cell {
        Cell::Empty => '·',
        Cell::X => config.x_symbol,
        Cell::O => config.o_symbol,
    }
}

/// Build the text lines of the board (without the surrounding block).
pub fn board_lines(board: &Board, marks: &BoardMarks, config: &UiConfig) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(SIZE + 1);

    if config.show_coordinates {
        let mut header = String::from("   ");
        for y in 0..SIZE {
            header.push(column_label(y));
            header.push(' ');
        }
        lines.push(Line::styled(header, Style::default().fg(Color::Gray)));
    }

    for x in 0..SIZE {
        let mut spans = Vec::with_capacity(SIZE + 1);
        if config.show_coordinates {
            spans.push(Span::styled(
                format!("{:>2} ", x + 1),
                Style::default().fg(Color::Gray),
            ));
        }
        for y in 0..SIZE {
            let pos = Pos::new(x, y);
            let cell = board.get(pos).unwrap_or(Cell::Empty);
            let mut style = cell_style(cell);

            if config.highlight_winning_line && marks.winning_line.is_some_and(|l| l.contains(pos)) {
                style = style.bg(Color::Green).fg(Color::Black).add_modifier(Modifier::BOLD);
            } else if config.highlight_last_move && marks.last_move == Some(pos) {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            if marks.cursor == Some(pos) {
                style = style.add_modifier(Modifier::REVERSED);
            }

            spans.push(Span::styled(cell_symbol(cell, config).to_string(), style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    lines
}

/// Render the board block into `geometry.area()`.
pub fn render_board(
    frame: &mut Frame,
    geometry: &BoardGeometry,
    board: &Board,
    marks: &BoardMarks,
    config: &UiConfig,
    focused: bool,
) {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let widget = Paragraph::new(board_lines(board, marks, config)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title("Gomoku"),
    );
    frame.render_widget(widget, geometry.area());
}
