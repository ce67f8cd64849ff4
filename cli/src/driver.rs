use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use cmdsweep_core::{Board, GameConfig};
use rand::Rng;

const INVALID_INPUT: &str = "Input was not valid; try again.";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    GameOver,
    InputClosed,
}

enum Input {
    Number(usize),
    Invalid(String),
    Closed,
}

/// Terminal game loop: asks for a board size, then reveals cells until a mine goes off.
pub struct Driver<R, W> {
    input: R,
    output: W,
    config: GameConfig,
    tokens: VecDeque<String>,
}

impl<R: BufRead, W: Write> Driver<R, W> {
    pub fn new(input: R, output: W, config: GameConfig) -> Self {
        Self {
            input,
            output,
            config,
            tokens: VecDeque::new(),
        }
    }

    pub fn run<G: Rng + ?Sized>(&mut self, rng: &mut G) -> anyhow::Result<Outcome> {
        writeln!(self.output, "Command line minesweeper project")?;
        writeln!(
            self.output,
            "Please input the size of the board; minimum {} and maximum {}",
            self.config.min_size, self.config.max_size
        )?;

        let size = loop {
            match self.next_number()? {
                Input::Closed => return Ok(Outcome::InputClosed),
                Input::Invalid(token) => self.reject(&token)?,
                Input::Number(size) => match self.config.check_size(size) {
                    Ok(size) => break size,
                    Err(err) => {
                        writeln!(self.output, "{err}")?;
                        self.reject(&size.to_string())?;
                    }
                },
            }
        };

        let mut board = Board::with_rng(size, &self.config, rng)?;
        log::info!("Started {}x{} game with {} mines", size, size, board.mine_count());

        loop {
            write!(self.output, "{board}")?;

            writeln!(self.output, "Input x coordinate")?;
            let x = match self.next_number()? {
                Input::Closed => return Ok(Outcome::InputClosed),
                Input::Invalid(token) => {
                    self.reject(&token)?;
                    continue;
                }
                Input::Number(x) => x,
            };

            writeln!(self.output, "Input y coordinate")?;
            let y = match self.next_number()? {
                Input::Closed => return Ok(Outcome::InputClosed),
                Input::Invalid(token) => {
                    self.reject(&token)?;
                    continue;
                }
                Input::Number(y) => y,
            };

            if let Err(err) = board.reveal(x, y) {
                log::debug!("Rejected move: {}", err);
                writeln!(self.output, "{err}")?;
                writeln!(self.output, "{INVALID_INPUT}")?;
                continue;
            }

            if board.is_game_over() {
                write!(self.output, "{board}")?;
                writeln!(self.output, "Game over!")?;
                return Ok(Outcome::GameOver);
            }
        }
    }

    fn reject(&mut self, token: &str) -> io::Result<()> {
        log::debug!("Rejected input {:?}", token);
        writeln!(self.output, "{INVALID_INPUT}")
    }

    /// Pulls the next whitespace separated token, reading more lines as needed.
    /// Bytes that are not UTF-8 end up in a token that fails to parse.
    fn next_number(&mut self) -> io::Result<Input> {
        while self.tokens.is_empty() {
            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(Input::Closed);
            }
            let line = String::from_utf8_lossy(&line);
            self.tokens.extend(line.split_whitespace().map(str::to_owned));
        }

        let Some(token) = self.tokens.pop_front() else {
            return Ok(Input::Closed);
        };
        Ok(match token.parse() {
            Ok(number) => Input::Number(number),
            Err(_) => Input::Invalid(token),
        })
    }
}
