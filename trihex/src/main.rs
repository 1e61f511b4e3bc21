use std::{
    fmt,
    io::{self, BufRead, Write},
};

use clap::{value_t, App, Arg, ArgMatches};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use trilattice::{
    board::{Coordinate, Player},
    game::{BoardModel, Position},
    geometry::Geometry,
};

/// Game settings chosen on the command line or with the `new` command.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
struct Config {
    players: usize,
    size: usize,
}

impl Config {
    /// Read the settings from the parsed arguments. Exits with a usage message if they
    /// are not numbers.
    fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            players: value_t!(matches, "players", usize).unwrap_or_else(|e| e.exit()),
            size: value_t!(matches, "size", usize).unwrap_or_else(|e| e.exit()),
        }
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let matches = App::new("Trihex")
        .version("0.1")
        .about("Command line connection game for two or three players on a triangular lattice.")
        .arg(
            Arg::with_name("players")
                .short("p")
                .long("players")
                .value_name("PLAYERS")
                .help("number of players")
                .takes_value(true)
                .possible_values(&["2", "3"])
                .default_value("2"),
        )
        .arg(
            Arg::with_name("size")
                .short("s")
                .long("size")
                .value_name("SIZE")
                .help("number of lattice steps along each side of the board")
                .takes_value(true)
                .default_value("10"),
        )
        .get_matches();

    let mut config = Config::from_matches(&matches);
    debug!("starting with {:?}", config);

    let mut model = BoardModel::new();
    model.subscribe(show_position);
    model
        .reset(config.players, config.size)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

    let stdin = std::io::stdin();
    let mut input = InputReader::new(stdin.lock());

    println!("Type help or ? for commands.");
    loop {
        let prompt = format!("{} >", model.next_player());
        match input.read_input_lower(&prompt, parse_command)? {
            Command::Put(coord) => {
                if !model.is_vertex(coord) {
                    println!("{} is not on the board.", coord);
                } else if !model.put(coord) {
                    println!("{} is already taken.", coord);
                }
            }
            Command::Undo => {
                if model.undo().is_none() {
                    println!("Nothing to undo.");
                }
            }
            Command::New(players, size) => {
                let next = Config {
                    players: players.unwrap_or(config.players),
                    size: size.unwrap_or(config.size),
                };
                match model.reset(next.players, next.size) {
                    Ok(()) => config = next,
                    Err(err) => println!("Could not start a new game: {}.", err),
                }
            }
            Command::Links => {
                if let Some(position) = model.position() {
                    show_links(position);
                }
            }
            Command::Help => println!(
                "Available Commands:
    put <row> <col>         claim the vertex at the given row and column.
        \"put\" may be left out: \"3 4\" and \"3,4\" work too.
    undo                    take back the last move.
    new [players] [size]    start a new game. Omitted settings keep their current value.
    links                   count the links and triangles each player has connected.
    quit                    leave the game.

Rows are numbered down the left side of the board. Columns count the cells along each
row from the first column, which may not be the first cell shown."
            ),
            Command::Quit => break,
        }
    }
    Ok(())
}

/// A command entered at the prompt.
enum Command {
    Put(Coordinate),
    Undo,
    New(Option<usize>, Option<usize>),
    Links,
    Help,
    Quit,
}

/// Parse a line of input, printing why it was rejected if it is not a command.
fn parse_command(input: &str) -> Option<Command> {
    static PUT: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?:(?:put|play|p)\s+)?
    (?P<i>[0-9]+)(?:\s*,\s*|\s+)(?P<j>[0-9]+)$",
        )
        .unwrap()
    });
    static NEW: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?:new|reset|n)
    (?:\s+(?P<players>[0-9]+)
    (?:\s+(?P<size>[0-9]+))?)?$",
        )
        .unwrap()
    });

    match input {
        "?" | "help" | "h" => Some(Command::Help),
        "undo" | "u" | "back" => Some(Command::Undo),
        "links" | "l" => Some(Command::Links),
        "quit" | "exit" | "q" => Some(Command::Quit),
        "" => None,
        other => {
            if let Some(captures) = PUT.captures(other) {
                let i = parse_number(captures.name("i").map(|m| m.as_str()), "row")?;
                let j = parse_number(captures.name("j").map(|m| m.as_str()), "column")?;
                Some(Command::Put(Coordinate::new(i, j)))
            } else if let Some(captures) = NEW.captures(other) {
                let players = match captures.name("players") {
                    Some(m) => Some(parse_number(Some(m.as_str()), "player count")?),
                    None => None,
                };
                let size = match captures.name("size") {
                    Some(m) => Some(parse_number(Some(m.as_str()), "size")?),
                    None => None,
                };
                Some(Command::New(players, size))
            } else {
                println!("Invalid command \"{}\". Use '?' for help", other);
                None
            }
        }
    }
}

/// Parse a captured number, printing a message if it is missing or too large.
fn parse_number(text: Option<&str>, what: &str) -> Option<usize> {
    match text.map(str::parse) {
        Some(Ok(value)) => Some(value),
        Some(Err(_)) => {
            println!("invalid {}: {}", what, text.unwrap_or_default());
            None
        }
        None => {
            println!("missing {}", what);
            None
        }
    }
}

/// Render observer: print the board and whose turn it is after every change.
fn show_position(position: &Position) {
    println!();
    show_board(position);
    println!();
    println!(
        "{} to move, {} moves played.",
        position.next_player(),
        position.history().len()
    );
}

/// Print the board as a skewed grid so that the lattice diagonals line up. Each cell
/// takes two characters and each row is shifted half a cell along the skew.
fn show_board(position: &Position) {
    let variant = position.variant();
    let extent = variant.extent();
    let shift = (2. * variant.diagonal().skew()) as isize;
    let base = if shift < 0 { extent as isize - 1 } else { 0 };

    print!("    {}", " ".repeat(base as usize));
    for j in 0..extent {
        print!("{:<2}", j % 10);
    }
    println!();
    for i in 0..extent {
        let indent = base + shift * i as isize;
        print!("{:>3} {}", i, " ".repeat(indent as usize));
        for j in 0..extent {
            print!("{:<2}", CellGlyph::new(position, Coordinate::new(i, j)));
        }
        println!();
    }
}

/// Print how many links and triangles each player has completed.
fn show_links(position: &Position) {
    for &player in position.variant().players() {
        println!(
            "{}: {} links, {} triangles",
            player,
            position.owned_edges(player).count(),
            position.owned_faces(player).count()
        );
    }
}

/// Display helper for a single cell of the board.
enum CellGlyph {
    /// Not part of the board.
    Outside,
    Empty,
    Owned(Player),
}

impl CellGlyph {
    fn new(position: &Position, coord: Coordinate) -> Self {
        if !position.is_vertex(coord) {
            CellGlyph::Outside
        } else {
            match position.get(coord) {
                Some(player) => CellGlyph::Owned(player),
                None => CellGlyph::Empty,
            }
        }
    }
}

impl fmt::Display for CellGlyph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CellGlyph::Outside => f.pad(""),
            CellGlyph::Empty => f.pad("."),
            CellGlyph::Owned(player) => f.pad(&player.number().to_string()),
        }
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
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            std::process::exit(0);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_moves() {
        for line in &["put 3 4", "p 3,4", "3 4", "3 , 4", "play 3 4"] {
            match parse_command(line) {
                Some(Command::Put(coord)) => assert_eq!(coord, Coordinate::new(3, 4), "{}", line),
                _ => panic!("{} was not parsed as a move", line),
            }
        }
    }

    #[test]
    fn parses_new_game() {
        assert!(matches!(parse_command("new"), Some(Command::New(None, None))));
        assert!(matches!(parse_command("new 3"), Some(Command::New(Some(3), None))));
        assert!(matches!(
            parse_command("reset 2 7"),
            Some(Command::New(Some(2), Some(7)))
        ));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_command("").is_none());
        assert!(parse_command("put 3").is_none());
        assert!(parse_command("fly away").is_none());
        assert!(parse_command("put 99999999999999999999999 1").is_none());
    }

    #[test]
    fn glyphs_follow_ownership() {
        let mut model = BoardModel::new();
        model.reset(2, 2).unwrap();
        model.put(Coordinate::new(1, 1));
        let position = model.position().unwrap();
        let glyph = |i, j| CellGlyph::new(position, Coordinate::new(i, j)).to_string();
        assert_eq!(glyph(0, 0), "");
        assert_eq!(glyph(0, 1), "1");
        assert_eq!(glyph(1, 0), "2");
        assert_eq!(glyph(1, 1), "1");
    }
}
