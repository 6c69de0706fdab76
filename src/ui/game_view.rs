use crate::config::UiConfig;
use crate::game::{GameOutcome, GameState, Player, Pos};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::{self, BoardMarks};
use super::layout::GameLayout;
use super::move_list::{self, MoveList};

/// Which panel receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Board,
    Moves,
}

/// Everything the view needs besides the game itself.
pub struct ViewState<'a> {
    pub config: &'a UiConfig,
    pub cursor: Pos,
    pub focus: Focus,
    pub message: Option<&'a str>,
}

/// Winner, draw, or whose turn it is on the board being shown.
pub fn status_line(game: &GameState) -> String {
    match game.outcome() {
        Some(GameOutcome::Winner(player)) => format!("Winner: {player}"),
        Some(GameOutcome::Draw) => "Draw".to_string(),
        None => format!("Next player: {}", game.next_player()),
    }
}

fn player_color(player: Player) -> Color {
    match player {
        Player::X => Color::LightRed,
        Player::O => Color::LightBlue,
    }
}

pub fn render(
    frame: &mut Frame,
    layout: &GameLayout,
    game: &GameState,
    moves: &mut MoveList,
    view: &ViewState,
) {
    let winning_line = game.winning_line();
    let marks = BoardMarks {
        cursor: (view.focus == Focus::Board).then_some(view.cursor),
        last_move: game.last_move(),
        winning_line: winning_line.as_ref(),
    };
    board_widget::render_board(
        frame,
        &layout.board,
        game.current_board(),
        &marks,
        view.config,
        view.focus == Focus::Board,
    );

    render_status(frame, game, layout.status);
    move_list::render(frame, layout.moves, game, moves, view.focus == Focus::Moves);
    render_message(frame, view.message, layout.message);
    render_controls(frame, layout.controls);
}

fn render_status(frame: &mut Frame, game: &GameState, area: Rect) {
    let color = match game.outcome() {
        Some(GameOutcome::Winner(player)) => player_color(player),
        Some(GameOutcome::Draw) => Color::Yellow,
        None => player_color(game.next_player()),
    };

    let mut lines = vec![Line::styled(
        status_line(game),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )];
    if !game.is_at_latest() {
        lines.push(Line::styled(
            format!(
                "Viewing move {} of {}",
                game.current_move(),
                game.latest_move()
            ),
            Style::default().fg(Color::Gray),
        ));
    }

    let status = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let text = message.unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(vec![
        Line::from("Click/Enter: play  ←↑↓→: cursor"),
        Line::from("Tab: focus  ,/.: back/forward"),
        Line::from("Home/End  N: new game  Q: quit"),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Controls"));
    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw(game: &GameState) -> String {
        let config = UiConfig::default();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut moves = MoveList::new();
        let view = ViewState {
            config: &config,
            cursor: Pos::new(9, 9),
            focus: Focus::Board,
            message: Some("hello"),
        };
        terminal
            .draw(|frame| {
                let layout = GameLayout::new(frame.area(), config.show_coordinates);
                render(frame, &layout, game, &mut moves, &view);
            })
            .unwrap();
        screen_text(&terminal)
    }

    #[test]
    fn test_status_line() {
        let mut game = GameState::new();
        assert_eq!(status_line(&game), "Next player: X");

        game.play(Pos::new(0, 0)).unwrap();
        assert_eq!(status_line(&game), "Next player: O");

        for &(x, y) in &[(1, 0), (0, 1), (1, 1), (0, 2), (1, 2), (0, 3), (1, 3), (0, 4)] {
            game.play(Pos::new(x, y)).unwrap();
        }
        assert_eq!(status_line(&game), "Winner: X");

        game.jump_to(3).unwrap();
        assert_eq!(status_line(&game), "Next player: O");
    }

    #[test]
    fn test_render_initial_screen() {
        let text = draw(&GameState::new());
        assert!(text.contains("Gomoku"));
        assert!(text.contains("Next player: X"));
        assert!(text.contains("Go to game start"));
        assert!(text.contains("hello"));
        assert!(!text.contains("Viewing move"));
    }

    #[test]
    fn test_render_after_time_travel() {
        let mut game = GameState::new();
        game.play(Pos::new(3, 2)).unwrap();
        game.play(Pos::new(4, 2)).unwrap();
        game.jump_to(1).unwrap();

        let text = draw(&game);
        assert!(text.contains("Go to move #1  X c4"));
        assert!(text.contains("Go to move #2  O c5"));
        assert!(text.contains("Viewing move 1 of 2"));
        assert!(text.contains("Next player: O"));
    }
}
