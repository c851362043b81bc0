use std::{
    fmt,
    io::{self, BufRead, Write},
};

use clap::{App, Arg, ArgMatches};
use log::debug;
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, Rng, SeedableRng};
use regex::Regex;

use seabattle::{
    board::{Board, CellState, Coordinate, ShotError, ShotOutcome},
    config::{GameConfig, DEFAULT_BOARD_SIZE},
    game::{ComputerPlayer, CoordinateInput, Game, HumanPlayer, Observer, Side},
};

mod logging;

fn main() -> io::Result<()> {
    let matches = App::new("Sea Battle")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Command line sea battle against the computer.")
        .arg(
            Arg::with_name("size")
                .short("s")
                .long("size")
                .value_name("SIZE")
                .help("number of rows and columns on each board")
                .takes_value(true)
                .validator(|size| match size.parse() {
                    Ok(size) => GameConfig::with_size(size)
                        .map(|_| ())
                        .map_err(|err| err.to_string()),
                    Err(_) => Err(format!("invalid board size: {}", size)),
                }),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed the random number generator to replay a game")
                .takes_value(true)
                .validator(|seed| {
                    seed.parse::<u64>()
                        .map(|_| ())
                        .map_err(|_| format!("invalid seed: {}", seed))
                }),
        )
        .get_matches();

    logging::init_logging();
    let config = build_config(&matches)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let computer = ComputerPlayer::new(StdRng::seed_from_u64(rng.gen()));

    let stdin = io::stdin();
    let human = HumanPlayer::new(InputReader::new(stdin.lock()));

    let mut game = Game::random(&mut rng, &config, human, computer)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    match game.play(&mut ConsoleObserver) {
        Ok(_) => Ok(()),
        Err(err) if err.is_end_of_input() => {
            println!();
            Ok(())
        }
        Err(err) => Err(io::Error::new(io::ErrorKind::Other, err)),
    }
}

/// Build the [`GameConfig`] from the command line arguments.
fn build_config(matches: &ArgMatches) -> io::Result<GameConfig> {
    let size = match matches.value_of("size") {
        Some(size) => size
            .parse()
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?,
        None => DEFAULT_BOARD_SIZE,
    };
    let mut config = GameConfig::with_size(size)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    config.seed = matches.value_of("seed").and_then(|seed| seed.parse().ok());
    Ok(config)
}

/// Prints the game as it progresses.
struct ConsoleObserver;

impl Observer for ConsoleObserver {
    fn show_boards(&mut self, human: &Board, computer: &Board) {
        println!("{}", "-".repeat(20));
        println!("Your board:");
        print!("{}", render_board(human));
        println!("{}", "-".repeat(20));
        println!("Computer's board:");
        print!("{}", render_board(computer));
        println!("{}", "-".repeat(20));
    }

    fn shot_resolved(&mut self, side: Side, target: Coordinate, outcome: ShotOutcome) {
        if side == Side::Computer {
            println!("Computer move: {}", target);
        }
        println!("{}", OutcomeMessage(outcome));
    }

    fn shot_rejected(&mut self, side: Side, err: &ShotError) {
        match side {
            Side::Human => println!("{}", err.reason()),
            // The computer does not remember its shots, so this is routine.
            Side::Computer => debug!("computer retargets: {}", err),
        }
    }

    fn game_over(&mut self, winner: Side) {
        println!("{}", "-".repeat(20));
        match winner {
            Side::Human => println!("You win!"),
            Side::Computer => println!("Computer wins!"),
        }
    }
}

/// Display helper for the status line after a shot.
struct OutcomeMessage(ShotOutcome);

impl fmt::Display for OutcomeMessage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self.0 {
            ShotOutcome::Miss => "Miss",
            ShotOutcome::Hit => "Hit",
            ShotOutcome::Destroyed => "Destroyed",
        })
    }
}

/// Display helper that prints the glyph for a single cell.
struct Glyph(CellState);

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self.0 {
            CellState::Empty => "O",
            CellState::Buffered => ".",
            CellState::Vessel => "■",
            CellState::Hit => "X",
            CellState::Miss => "T",
        })
    }
}

/// Render the visible cells of the board as a labeled grid with 1-indexed headers.
fn render_board(board: &Board) -> String {
    let mut out = String::from("   |");
    for col in 1..=board.size() {
        out.push_str(&format!("{:^3}|", col));
    }
    out.push('\n');
    for (row, cells) in board.rows().enumerate() {
        out.push_str(&format!("{:>2} |", row + 1));
        for cell in cells {
            out.push_str(&format!("{:^3}|", Glyph(cell)));
        }
        out.push('\n');
    }
    out
}

/// Problems with a line typed as a move.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum BadMove {
    /// The line did not hold exactly two tokens.
    TokenCount,
    /// One of the tokens was not a non-negative number.
    NotNumbers,
}

impl fmt::Display for BadMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            BadMove::TokenCount => "Enter 2 coordinates!",
            BadMove::NotNumbers => "Enter numbers!",
        })
    }
}

/// Parse a move typed as `<row> <col>`, both 1-indexed.
fn parse_move(input: &str) -> Result<(isize, isize), BadMove> {
    static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

    let tokens: Vec<&str> = input.split_whitespace().collect();
    match tokens.as_slice() {
        [row, col] if NUMBER.is_match(row) && NUMBER.is_match(col) => {
            match (row.parse(), col.parse()) {
                (Ok(row), Ok(col)) => Ok((row, col)),
                _ => Err(BadMove::NotNumbers),
            }
        }
        [_, _] => Err(BadMove::NotNumbers),
        _ => Err(BadMove::TokenCount),
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`.
    fn read_input<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line. Running out
    /// of input is reported as `UnexpectedEof`.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no more input",
            ));
        }
        Ok(())
    }
}

impl<B: BufRead> CoordinateInput for InputReader<B> {
    fn read_coordinate(&mut self) -> io::Result<(isize, isize)> {
        self.read_input("Your move:", |input| match parse_move(input) {
            Ok(pair) => Some(pair),
            Err(problem) => {
                println!(" {} ", problem);
                None
            }
        })
    }
}

#[cfg(test)]
mod test {
    use seabattle::{
        board::BoardSetup,
        ships::{Orientation, Vessel},
    };

    use super::*;

    #[test]
    fn parses_moves() {
        assert_eq!(parse_move("3 4"), Ok((3, 4)));
        assert_eq!(parse_move("  1   6 "), Ok((1, 6)));
        assert_eq!(parse_move("0 0"), Ok((0, 0)));
        assert_eq!(parse_move("3"), Err(BadMove::TokenCount));
        assert_eq!(parse_move("1 2 3"), Err(BadMove::TokenCount));
        assert_eq!(parse_move(""), Err(BadMove::TokenCount));
        assert_eq!(parse_move("a 2"), Err(BadMove::NotNumbers));
        assert_eq!(parse_move("-1 2"), Err(BadMove::NotNumbers));
        assert_eq!(
            parse_move("99999999999999999999999 1"),
            Err(BadMove::NotNumbers)
        );
    }

    #[test]
    fn reader_skips_bad_lines() {
        let mut reader = InputReader::new(&b"oops\n1 2 3\n2 5\n"[..]);
        assert_eq!(reader.read_coordinate().unwrap(), (2, 5));
        let err = reader.read_coordinate().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn renders_hidden_and_revealed_boards() {
        let mut setup = BoardSetup::new(6);
        setup
            .add_vessel(Vessel::new(Coordinate::new(0, 0), 1, Orientation::Horizontal))
            .unwrap();
        setup
            .add_vessel(Vessel::new(Coordinate::new(5, 4), 2, Orientation::Horizontal))
            .unwrap();
        let mut board = setup.start();
        board.resolve_shot(Coordinate::new(0, 0)).unwrap();
        board.resolve_shot(Coordinate::new(3, 3)).unwrap();

        let shown = render_board(&board);
        let lines: Vec<&str> = shown.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "   | 1 | 2 | 3 | 4 | 5 | 6 |");
        assert_eq!(lines[1], " 1 | X | . | O | O | O | O |");
        assert_eq!(lines[2], " 2 | . | . | O | O | O | O |");
        assert_eq!(lines[4], " 4 | O | O | O | T | O | O |");
        assert_eq!(lines[6], " 6 | O | O | O | O | ■ | ■ |");

        board.set_hidden(true);
        let hidden = render_board(&board);
        assert_eq!(hidden.lines().nth(6), Some(" 6 | O | O | O | O | O | O |"));
    }

    #[test]
    fn outcome_messages() {
        assert_eq!(OutcomeMessage(ShotOutcome::Miss).to_string(), "Miss");
        assert_eq!(OutcomeMessage(ShotOutcome::Destroyed).to_string(), "Destroyed");
    }
}
