//! Game state for terminal play
//!
//! Tracks whose turn it is and whether the game has ended. The engine is
//! only asked for a move when the Computer is to play on an unfinished board.

use log::info;

use crate::board::{Board, Player, Pos};
use crate::engine::Engine;
use crate::error::MoveError;
use crate::rules::winner;

/// Game result so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

/// Parse a 1-based `row col` pair typed by the player.
pub fn parse_move(input: &str, size: usize) -> Result<Pos, MoveError> {
    let mut parts = input.split_whitespace();
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(MoveError::Parse(input.trim().to_string()));
    };
    let (Ok(row), Ok(col)) = (row.parse::<i64>(), col.parse::<i64>()) else {
        return Err(MoveError::Parse(input.trim().to_string()));
    };
    let n = size as i64;
    if !(1..=n).contains(&row) || !(1..=n).contains(&col) {
        return Err(MoveError::OutOfBounds { row, col, size });
    }
    Ok(Pos::new((row - 1) as u8, (col - 1) as u8))
}

/// Main game state
pub struct Game {
    board: Board,
    engine: Engine,
    to_move: Player,
    status: GameStatus,
    history: Vec<(Pos, Player)>,
}

impl Game {
    pub fn new(engine: Engine, first: Player) -> Self {
        Self {
            board: Board::new(engine.config().size),
            engine,
            to_move: first,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Clear the board for a new game
    pub fn reset(&mut self, first: Player) {
        self.board.reset();
        self.to_move = first;
        self.status = GameStatus::InProgress;
        self.history.clear();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn history(&self) -> &[(Pos, Player)] {
        &self.history
    }

    fn check_turn(&self, player: Player) -> Result<(), MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }
        if self.to_move != player {
            return Err(MoveError::OutOfTurn(player));
        }
        Ok(())
    }

    /// Play a validated human move.
    pub fn play_human(&mut self, pos: Pos) -> Result<GameStatus, MoveError> {
        self.check_turn(Player::Human)?;
        let n = self.board.size();
        if !self.board.contains(i32::from(pos.row), i32::from(pos.col)) {
            return Err(MoveError::OutOfBounds {
                row: i64::from(pos.row) + 1,
                col: i64::from(pos.col) + 1,
                size: n,
            });
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied {
                row: pos.row as usize + 1,
                col: pos.col as usize + 1,
            });
        }
        self.board.apply(pos, Player::Human);
        Ok(self.record(pos, Player::Human))
    }

    /// Let the engine play for the Computer.
    pub fn play_computer(&mut self) -> Result<Pos, MoveError> {
        self.check_turn(Player::Computer)?;
        let pos = self.engine.choose_move(&mut self.board);
        self.record(pos, Player::Computer);
        Ok(pos)
    }

    /// Update history and status after `player` moved at `pos`.
    /// A completed line is checked before fullness.
    fn record(&mut self, pos: Pos, player: Player) -> GameStatus {
        self.history.push((pos, player));
        if let Some(winner) = winner(&self.board, self.engine.config()) {
            self.status = GameStatus::Won(winner);
            info!("{:?} wins after {} moves", winner, self.history.len());
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
            info!("draw after {} moves", self.history.len());
        } else {
            self.to_move = player.opponent();
        }
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;

    fn new_game(first: Player) -> Game {
        Game::new(Engine::with_seed(SearchConfig::classic(), 11).unwrap(), first)
    }

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("1 1", 3), Ok(Pos::new(0, 0)));
        assert_eq!(parse_move("  3   2 \n", 3), Ok(Pos::new(2, 1)));
        assert_eq!(parse_move("2", 3), Err(MoveError::Parse("2".to_string())));
        assert_eq!(parse_move("a b", 3), Err(MoveError::Parse("a b".to_string())));
        assert_eq!(parse_move("1 2 3", 3), Err(MoveError::Parse("1 2 3".to_string())));
        assert_eq!(
            parse_move("0 1", 3),
            Err(MoveError::OutOfBounds { row: 0, col: 1, size: 3 })
        );
        assert_eq!(
            parse_move("4 1", 3),
            Err(MoveError::OutOfBounds { row: 4, col: 1, size: 3 })
        );
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = new_game(Player::Human);
        assert_eq!(game.play_human(Pos::new(1, 1)), Ok(GameStatus::InProgress));
        assert_eq!(game.to_move(), Player::Computer);
        assert_eq!(game.play_human(Pos::new(0, 0)), Err(MoveError::OutOfTurn(Player::Human)));

        let pos = game.play_computer().unwrap();
        assert_ne!(pos, Pos::new(1, 1));
        assert_eq!(game.to_move(), Player::Human);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut game = new_game(Player::Human);
        game.play_human(Pos::new(0, 0)).unwrap();
        let pos = game.play_computer().unwrap();
        assert_eq!(
            game.play_human(pos),
            Err(MoveError::Occupied {
                row: pos.row as usize + 1,
                col: pos.col as usize + 1
            })
        );
        assert_eq!(game.to_move(), Player::Human);
    }

    #[test]
    fn test_off_board_move_rejected() {
        let mut game = new_game(Player::Human);
        assert_eq!(
            game.play_human(Pos::new(0, 3)),
            Err(MoveError::OutOfBounds { row: 1, col: 4, size: 3 })
        );
        assert_eq!(game.board().mark_count(), 0);
        assert_eq!(game.to_move(), Player::Human);
    }

    #[test]
    fn test_computer_never_loses_full_game() {
        // Human plays the first empty cell every turn
        let mut game = new_game(Player::Human);
        while game.status() == GameStatus::InProgress {
            match game.to_move() {
                Player::Human => {
                    let pos = game.board().empty_cells().next().unwrap();
                    game.play_human(pos).unwrap();
                }
                Player::Computer => {
                    game.play_computer().unwrap();
                }
            }
        }
        assert_ne!(game.status(), GameStatus::Won(Player::Human));
        assert_eq!(game.play_human(Pos::new(0, 0)), Err(MoveError::GameOver));
    }

    #[test]
    fn test_computer_first_and_reset() {
        let mut game = new_game(Player::Computer);
        game.play_computer().unwrap();
        assert_eq!(game.board().mark_count(), 1);

        game.reset(Player::Human);
        assert_eq!(game.board().mark_count(), 0);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.to_move(), Player::Human);
        assert!(game.history().is_empty());
    }
}
