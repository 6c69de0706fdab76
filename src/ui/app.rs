use crate::config::UiConfig;
use crate::game::{GameOutcome, GameState, Pos, SIZE};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::Backend, layout::Rect, Terminal};
use std::io;
use std::time::Duration;
use tracing::info;

use super::game_view::{self, Focus, ViewState};
use super::layout::GameLayout;
use super::move_list::MoveList;

pub struct App {
    game: GameState,
    config: UiConfig,
    cursor: Pos,
    focus: Focus,
    moves: MoveList,
    layout: GameLayout,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: UiConfig) -> Self {
        let layout = GameLayout::new(Rect::default(), config.show_coordinates);
        App {
            game: GameState::new(),
            config,
            cursor: Pos::new(SIZE / 2, SIZE / 2), // Start in middle
            focus: Focus::Board,
            moves: MoveList::new(),
            layout,
            should_quit: false,
            message: None,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        info!("game started");
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::other(e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        info!(moves = self.game.latest_move(), "quit");
        Ok(())
    }

    /// Wait up to one poll interval for input
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(self.config.poll_interval_ms))? {
            self.handle_event(event::read()?);
        }
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::Moves,
                    Focus::Moves => Focus::Board,
                };
                self.sync_move_list();
            }
            KeyCode::Char(',') | KeyCode::Char('<') => {
                if self.game.step_back() {
                    self.sync_move_list();
                }
            }
            KeyCode::Char('.') | KeyCode::Char('>') => {
                if self.game.step_forward() {
                    self.sync_move_list();
                }
            }
            KeyCode::Home => self.jump(0),
            KeyCode::End => self.jump(self.game.latest_move()),
            KeyCode::Char('n') => {
                self.game.reset();
                self.cursor = Pos::new(SIZE / 2, SIZE / 2);
                self.sync_move_list();
                self.message = Some("New game started!".to_string());
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::Moves => self.handle_moves_key(code),
            },
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        let Pos { x, y } = self.cursor;
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.cursor.x = x.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.cursor.x = (x + 1).min(SIZE - 1),
            KeyCode::Left | KeyCode::Char('h') => self.cursor.y = y.saturating_sub(1),
            KeyCode::Right | KeyCode::Char('l') => self.cursor.y = (y + 1).min(SIZE - 1),
            KeyCode::Enter | KeyCode::Char(' ') => self.play_at(self.cursor),
            _ => {}
        }
    }

    fn handle_moves_key(&mut self, code: KeyCode) {
        let len = self.game.history().len();
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.moves.select_prev(len),
            KeyCode::Down | KeyCode::Char('j') => self.moves.select_next(len),
            KeyCode::Enter | KeyCode::Char(' ') => self.jump(self.moves.selected()),
            _ => {}
        }
    }

    /// Handle a click or scroll against the last drawn layout
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let len = self.game.history().len();
        let (column, row) = (mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(pos) = self.layout.board.cell_at(column, row) {
                    self.message = None;
                    self.focus = Focus::Board;
                    self.cursor = pos;
                    self.play_at(pos);
                } else if let Some(index) = self.moves.index_at(self.layout.moves, column, row, len) {
                    self.message = None;
                    self.focus = Focus::Moves;
                    self.jump(index);
                }
            }
            MouseEventKind::ScrollUp if self.over_moves(column, row) => self.moves.scroll(-1, len),
            MouseEventKind::ScrollDown if self.over_moves(column, row) => self.moves.scroll(1, len),
            _ => {}
        }
    }

    fn over_moves(&self, column: u16, row: u16) -> bool {
        let area = self.layout.moves;
        column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
    }

    /// Play at `pos`. A rejected move (taken cell, finished game) does nothing.
    fn play_at(&mut self, pos: Pos) {
        let discarded = self.game.latest_move() - self.game.current_move();
        if self.game.play(pos).is_err() {
            return;
        }
        self.sync_move_list();

        self.message = match self.game.outcome() {
            Some(GameOutcome::Winner(player)) => Some(format!("{player} wins!")),
            Some(GameOutcome::Draw) => Some("It's a draw!".to_string()),
            None if discarded > 0 => Some(format!("Discarded {discarded} later move(s)")),
            None => None,
        };
    }

    fn jump(&mut self, index: usize) {
        // Indices come from the rendered list, so this only fails on a stale click.
        if self.game.jump_to(index).is_ok() {
            self.sync_move_list();
        }
    }

    fn sync_move_list(&mut self) {
        let len = self.game.history().len();
        self.moves.select(self.game.current_move(), len);
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut ratatui::Frame) {
        self.layout = GameLayout::new(frame.area(), self.config.show_coordinates);
        let view = ViewState {
            config: &self.config,
            cursor: self.cursor,
            focus: self.focus,
            message: self.message.as_deref(),
        };
        game_view::render(frame, &self.layout, &self.game, &mut self.moves, &view);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(UiConfig::default())
    }
}
