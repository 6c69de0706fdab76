//! Five-in-a-row detection.

use super::board::{Board, Pos, SIZE};
use super::player::Player;

/// Stones in a row needed to win.
pub const WIN_LENGTH: usize = 5;

/// Line directions as `(dx, dy)`: along a row, along a column, and the two
/// diagonals. The opposite directions are covered by stepping backwards.
pub const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// A winning run of stones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinLine {
    pub player: Player,
    /// Cells of the run, ordered from the negative end to the positive end.
    pub cells: Vec<Pos>,
}

impl WinLine {
    pub fn contains(&self, pos: Pos) -> bool {
        self.cells.contains(&pos)
    }
}

/// The winner of `board`, if any line of five or more exists.
///
/// Scans every occupied cell. If several winning lines exist (impossible in
/// legal play) the one reported is whichever the scan meets first.
pub fn winner(board: &Board) -> Option<Player> {
    find_win(board).map(|line| line.player)
}

/// Like [`winner`], but only looks at lines through `pos`.
///
/// Only the latest move can complete a new line, so checking its cell gives
/// the same answer as a full scan of a board that had no winner before.
pub fn winner_at(board: &Board, pos: Pos) -> Option<Player> {
    line_through(board, pos).map(|line| line.player)
}

/// Full-board scan returning the winning run.
pub fn find_win(board: &Board) -> Option<WinLine> {
    board
        .stones()
        .find_map(|(pos, _)| line_through(board, pos))
}

/// The first winning run through `pos` over [`DIRECTIONS`].
///
/// The win is decided by counting at most `WIN_LENGTH - 1` steps each way.
/// The returned cells cover the whole run, so an overline is reported in full.
pub fn line_through(board: &Board, pos: Pos) -> Option<WinLine> {
    let player = board.get(pos)?.player()?;
    DIRECTIONS.iter().find_map(|&(dx, dy)| {
        let count = run(board, pos, player, dx, dy, WIN_LENGTH).len();
        (count >= WIN_LENGTH).then(|| WinLine {
            player,
            cells: run(board, pos, player, dx, dy, SIZE),
        })
    })
}

/// Same-player stones through `pos` along `(dx, dy)`, at most `limit - 1`
/// steps each way.
fn run(board: &Board, pos: Pos, player: Player, dx: isize, dy: isize, limit: usize) -> Vec<Pos> {
    let mut cells: Vec<Pos> = reach(board, pos, player, -dx, -dy, limit).collect();
    cells.reverse();
    cells.push(pos);
    cells.extend(reach(board, pos, player, dx, dy, limit));
    cells
}

fn reach(
    board: &Board,
    pos: Pos,
    player: Player,
    dx: isize,
    dy: isize,
    limit: usize,
) -> impl Iterator<Item = Pos> + '_ {
    (1..limit as isize).map_while(move |step| {
        let next = pos.offset(dx, dy, step)?;
        (board.get(next)?.player()? == player).then_some(next)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: Board, player: Player, cells: &[(usize, usize)]) -> Board {
        cells
            .iter()
            .fold(board, |b, &(x, y)| b.with_stone(Pos::new(x, y), player))
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(winner(&Board::new()), None);
        assert_eq!(find_win(&Board::new()), None);
    }

    #[test]
    fn test_row_of_five() {
        let board = place(Board::new(), Player::X, &[(7, 3), (7, 4), (7, 5), (7, 6), (7, 7)]);
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_column_of_five() {
        let board = place(Board::new(), Player::O, &[(2, 9), (3, 9), (4, 9), (5, 9), (6, 9)]);
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_down_diagonal_of_five() {
        let board = place(Board::new(), Player::X, &[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_up_diagonal_of_five() {
        let board = place(Board::new(), Player::O, &[(10, 4), (11, 3), (12, 2), (13, 1), (14, 0)]);
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_four_is_not_enough() {
        for &(dx, dy) in &DIRECTIONS {
            let start = Pos::new(9, 9);
            let cells: Vec<_> = (0..4)
                .filter_map(|i| start.offset(dx, dy, i))
                .map(|p| (p.x, p.y))
                .collect();
            let board = place(Board::new(), Player::X, &cells);
            assert_eq!(winner(&board), None, "direction ({dx}, {dy})");
        }
    }

    #[test]
    fn test_blocked_four_is_not_a_win() {
        // Four X against the left edge, capped by O on the right.
        let board = place(Board::new(), Player::X, &[(0, 0), (0, 1), (0, 2), (0, 3)]);
        let board = place(board, Player::O, &[(0, 4)]);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_gap_breaks_the_line() {
        let board = place(Board::new(), Player::X, &[(5, 0), (5, 1), (5, 3), (5, 4), (5, 5)]);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_mixed_players_do_not_combine() {
        let board = place(Board::new(), Player::X, &[(3, 3), (3, 4), (3, 6)]);
        let board = place(board, Player::O, &[(3, 5), (3, 7)]);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_six_in_a_row_wins() {
        let board = place(
            Board::new(),
            Player::O,
            &[(1, 10), (1, 11), (1, 12), (1, 13), (1, 14), (1, 15)],
        );
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_line_at_far_corner() {
        let n = SIZE - 1;
        let board = place(
            Board::new(),
            Player::X,
            &[(n, n), (n - 1, n - 1), (n - 2, n - 2), (n - 3, n - 3), (n - 4, n - 4)],
        );
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_at_matches_full_scan() {
        let board = place(Board::new(), Player::X, &[(4, 2), (5, 3), (6, 4), (7, 5), (8, 6)]);
        assert_eq!(winner_at(&board, Pos::new(6, 4)), Some(Player::X));
        assert_eq!(winner_at(&board, Pos::new(8, 6)), Some(Player::X));
        // A cell off the line sees nothing.
        assert_eq!(winner_at(&board, Pos::new(0, 0)), None);
        assert_eq!(winner_at(&board, Pos::new(SIZE, 0)), None);
    }

    #[test]
    fn test_win_line_cells_are_ordered() {
        let board = place(Board::new(), Player::X, &[(2, 6), (2, 2), (2, 4), (2, 3), (2, 5)]);
        let line = find_win(&board).unwrap();
        assert_eq!(line.player, Player::X);
        assert_eq!(
            line.cells,
            (2..=6).map(|y| Pos::new(2, y)).collect::<Vec<_>>()
        );
        assert!(line.contains(Pos::new(2, 4)));
        assert!(!line.contains(Pos::new(3, 4)));
    }

    #[test]
    fn test_overline_cells_cover_whole_run() {
        let row: Vec<_> = (0..7).map(|y| (0, y)).collect();
        let board = place(Board::new(), Player::X, &row);
        let expected: Vec<_> = (0..7).map(|y| Pos::new(0, y)).collect();

        assert_eq!(find_win(&board).unwrap().cells, expected);
        // Seen from the middle stone, the run still reaches both ends.
        assert_eq!(line_through(&board, Pos::new(0, 3)).unwrap().cells, expected);
    }

    #[test]
    fn test_overline_stops_at_other_player() {
        let board = place(Board::new(), Player::O, &[(4, 0), (5, 1), (6, 2), (7, 3), (8, 4), (9, 5)]);
        let board = place(board, Player::X, &[(10, 6)]);
        let line = find_win(&board).unwrap();

        assert_eq!(line.player, Player::O);
        assert_eq!(line.cells.len(), 6);
        assert!(!line.contains(Pos::new(10, 6)));
    }
}
