use crate::game::{GameState, Player};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::coord_label;

/// Selection and scroll position of the "go to move" list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveList {
    selected: usize,
    offset: usize,
    follow_selection: bool,
}

impl MoveList {
    pub fn new() -> Self {
        MoveList {
            selected: 0,
            offset: 0,
            follow_selection: true,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Select `index` (clamped to the list) and scroll it into view on the
    /// next render.
    pub fn select(&mut self, index: usize, len: usize) {
        self.selected = index.min(len.saturating_sub(1));
        self.follow_selection = true;
    }

    pub fn select_prev(&mut self, len: usize) {
        self.select(self.selected.saturating_sub(1), len);
    }

    pub fn select_next(&mut self, len: usize) {
        self.select(self.selected + 1, len);
    }

    /// Scroll without changing the selection.
    pub fn scroll(&mut self, delta: isize, len: usize) {
        self.offset = self
            .offset
            .saturating_add_signed(delta)
            .min(len.saturating_sub(1));
        self.follow_selection = false;
    }

    /// Fix up the offset for a viewport of `visible` rows.
    fn fit(&mut self, visible: usize, len: usize) {
        if visible == 0 {
            return;
        }
        if self.follow_selection {
            if self.selected < self.offset {
                self.offset = self.selected;
            } else if self.selected >= self.offset + visible {
                self.offset = self.selected + 1 - visible;
            }
        }
        self.offset = self.offset.min(len.saturating_sub(visible));
    }

    /// The entry drawn at a terminal position inside `area` (the list block).
    pub fn index_at(&self, area: Rect, column: u16, row: u16, len: usize) -> Option<usize> {
        let inner = inner_area(area);
        if column < inner.x || column >= inner.right() || row < inner.y || row >= inner.bottom() {
            return None;
        }
        let index = self.offset + (row - inner.y) as usize;
        (index < len).then_some(index)
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

fn inner_area(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

/// Text for history entry `index`.
pub fn entry_label(game: &GameState, index: usize) -> String {
    if index == 0 {
        return "Go to game start".to_string();
    }
    match game.move_at(index) {
        Some(pos) => format!(
            "Go to move #{index}  {} {}",
            Player::for_move(index - 1),
            coord_label(pos)
        ),
        None => format!("Go to move #{index}"),
    }
}

/// Render the move list block into `area`.
pub fn render(frame: &mut Frame, area: Rect, game: &GameState, list: &mut MoveList, focused: bool) {
    let len = game.history().len();
    let visible = inner_area(area).height as usize;
    list.fit(visible, len);

    let lines: Vec<Line> = (list.offset..len.min(list.offset + visible))
        .map(|index| {
            let is_current = index == game.current_move();
            let marker = if is_current { "▶ " } else { "  " };

            let mut style = Style::default();
            if is_current {
                style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
            }
            if focused && index == list.selected {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Line::from(vec![
                Span::raw(marker),
                Span::styled(entry_label(game, index), style),
            ])
        })
        .collect();

    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let title = format!("Moves ({})", len - 1);
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(title),
    );
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Pos;

    fn game_with_moves(n: usize) -> GameState {
        let mut game = GameState::new();
        for i in 0..n {
            game.play(Pos::new(i / 10 * 2, i % 10)).unwrap();
        }
        game
    }

    #[test]
    fn test_entry_labels() {
        let game = game_with_moves(2);
        assert_eq!(entry_label(&game, 0), "Go to game start");
        assert_eq!(entry_label(&game, 1), "Go to move #1  X a1");
        assert_eq!(entry_label(&game, 2), "Go to move #2  O b1");
    }

    #[test]
    fn test_select_clamps() {
        let mut list = MoveList::new();
        list.select(10, 4);
        assert_eq!(list.selected(), 3);
        list.select_next(4);
        assert_eq!(list.selected(), 3);
        list.select_prev(4);
        list.select_prev(4);
        list.select_prev(4);
        list.select_prev(4);
        assert_eq!(list.selected(), 0);
    }

    #[test]
    fn test_fit_follows_selection() {
        let mut list = MoveList::new();
        list.select(12, 20);
        list.fit(5, 20);
        assert_eq!(list.offset(), 8);

        list.select(2, 20);
        list.fit(5, 20);
        assert_eq!(list.offset(), 2);
    }

    #[test]
    fn test_scroll_is_clamped_on_fit() {
        let mut list = MoveList::new();
        list.scroll(100, 20);
        list.fit(5, 20);
        assert_eq!(list.offset(), 15);
        list.scroll(-100, 20);
        assert_eq!(list.offset(), 0);
    }

    #[test]
    fn test_index_at_accounts_for_offset() {
        let area = Rect::new(50, 4, 30, 7); // 5 visible rows
        let mut list = MoveList::new();
        list.select(9, 12);
        list.fit(5, 12);
        assert_eq!(list.offset(), 5);

        assert_eq!(list.index_at(area, 55, 5, 12), Some(5));
        assert_eq!(list.index_at(area, 55, 9, 12), Some(9));
        assert_eq!(list.index_at(area, 55, 4, 12), None); // top border
        assert_eq!(list.index_at(area, 50, 6, 12), None); // left border
        assert_eq!(list.index_at(area, 10, 6, 12), None);
    }

    #[test]
    fn test_index_at_past_end_of_list() {
        let area = Rect::new(0, 0, 30, 10);
        let list = MoveList::new();
        assert_eq!(list.index_at(area, 3, 1, 2), Some(0));
        assert_eq!(list.index_at(area, 3, 2, 2), Some(1));
        assert_eq!(list.index_at(area, 3, 3, 2), None);
    }
}
