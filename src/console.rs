//! Text console driver.
//!
//! Owns the turn loop and the replay loop around a [`Game`]: prints the
//! board, reads moves line by line, reports rejected moves and announces
//! results. Reader and writer are generic so scripted sessions can be
//! replayed in tests.

use crate::config::GameConfig;
use crate::games::grid::{Game, GameStatus, MIN_BOARD_SIZE, PlayerSlot, parse_move};
use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// Interactive session over a line reader and a writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console and returns the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs rounds until the players decline a rematch.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors or when input ends mid-session.
    #[instrument(skip(self, config))]
    pub fn run(&mut self, config: &GameConfig) -> Result<()> {
        let size = match config.board_size() {
            Some(size) => *size,
            None => self.prompt_board_size()?,
        };
        let mut game = new_game(config, size);

        loop {
            if let GameStatus::Won(mark) = self.play_round(&mut game)? {
                game.player_mut(PlayerSlot::from(mark)).record_win();
            }
            self.write_scores(&game)?;

            if !self.ask_yes("Play again? (y/n): ")? {
                break;
            }

            if self.ask_yes("Same board size? (y/n): ")? {
                game.reset();
            } else {
                let size = self.prompt_board_size()?;
                game = new_game(config, size);
            }
        }

        info!("Session finished");
        Ok(())
    }

    /// Plays one round to a win or draw and announces the result.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors or when input ends before the round does.
    #[instrument(skip(self, game), fields(size = game.size()))]
    pub fn play_round(&mut self, game: &mut Game) -> Result<GameStatus> {
        while !game.status().is_terminal() {
            write!(self.output, "\n{}\n", game.board())?;

            let prompt = format!(
                "{}'s turn. Enter your move as row,col (1-based): ",
                game.current_player()
            );
            let line = self.prompt(&prompt)?;

            if let Err(err) = game.make_move(parse_move(&line)) {
                writeln!(self.output, "{}", err)?;
            }
        }

        write!(self.output, "\n{}\n", game.board())?;

        let status = game.status();
        match status {
            GameStatus::Won(mark) => {
                let name = game.player(PlayerSlot::from(mark)).name();
                writeln!(self.output, "{} ({}) wins!", name, mark)?;
            }
            GameStatus::Draw => writeln!(self.output, "It's a draw!")?,
            GameStatus::InProgress => unreachable!("loop exits only on terminal status"),
        }

        info!(?status, "Round finished");
        Ok(status)
    }

    /// Asks for a board size until a number of at least [`MIN_BOARD_SIZE`] arrives.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors or when input ends.
    #[instrument(skip(self))]
    pub fn prompt_board_size(&mut self) -> Result<usize> {
        loop {
            let prompt = format!("What board size do you want? (minimum {}): ", MIN_BOARD_SIZE);
            let line = self.prompt(&prompt)?;

            match line.trim().parse::<usize>() {
                Ok(size) if size >= MIN_BOARD_SIZE => return Ok(size),
                Ok(_) => writeln!(self.output, "Board size must be at least {}.", MIN_BOARD_SIZE)?,
                Err(_) => writeln!(self.output, "Please enter a valid number.")?,
            }
        }
    }

    fn ask_yes(&mut self, question: &str) -> Result<bool> {
        let answer = self.prompt(question)?;
        Ok(answer.trim().eq_ignore_ascii_case("y"))
    }

    fn write_scores(&mut self, game: &Game) -> Result<()> {
        let tally = PlayerSlot::iter()
            .map(|slot| {
                let player = game.player(slot);
                format!("{} {}", player.name(), player.score())
            })
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(self.output, "Score: {}", tally)?;
        Ok(())
    }

    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("Input closed");
        }
        debug!(line = %line.trim_end(), "Read input");
        Ok(line)
    }
}

/// Builds a game from the configured player names.
#[instrument(skip(config))]
pub fn new_game(config: &GameConfig, size: usize) -> Game {
    Game::with_players(size, config.player_one(), config.player_two())
}
