use std::{
    error::Error,
    fmt::{self, Display, Formatter, Write as _},
    io::{self, BufRead, Write, stderr, stdin, stdout},
    str::FromStr,
};

use rand::random_range;

use crate::{
    board_display::BoardDisplay,
    color::Color,
    game::{Game, Status},
    square::{ParseSquareError, Square},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Input {
    Help,
    Flip,
    Restart,
    Quit,
    Random,
    Square(Square),
    Move(Square, Square),
}
impl Display for Input {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Input::Help => write!(f, "help")?,
            Input::Flip => write!(f, "flip")?,
            Input::Restart => write!(f, "restart")?,
            Input::Quit => write!(f, "quit")?,
            Input::Random => write!(f, "random")?,
            Input::Square(square) => write!(f, "{square}")?,
            Input::Move(start, end) => write!(f, "{start} {end}")?,
        }
        Ok(())
    }
}
impl FromStr for Input {
    type Err = ParseInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "help" => Ok(Input::Help),
            "flip" => Ok(Input::Flip),
            "restart" => Ok(Input::Restart),
            "quit" | "exit" => Ok(Input::Quit),
            "random" => Ok(Input::Random),
            "" => Err(ParseInputError::Empty),
            s => {
                if let Some((start, end)) = s.split_once(char::is_whitespace) {
                    Ok(Input::Move(start.parse()?, end.trim_start().parse()?))
                } else if let (Some(start), Some(end)) = (s.get(0..2), s.get(2..)) {
                    if end.is_empty() {
                        Ok(Input::Square(start.parse()?))
                    } else {
                        Ok(Input::Move(start.parse()?, end.parse()?))
                    }
                } else {
                    Ok(Input::Square(s.parse()?))
                }
            }
        }
    }
}
#[allow(
    clippy::too_many_lines,
    reason = "further decomposition could potentially hurt readability"
)]
pub fn repl() -> io::Result<()> {
    let input = stdin().lock();
    let mut output = stdout().lock();
    let mut error = stderr().lock();

    let mut lines = input.lines();

    let mut game = Game::new();
    let mut info = String::new();
    let mut highlighted = Vec::new();
    let mut update = true;
    let mut view = Color::White;
    let mut first_time = true;
    loop {
        if update {
            info.clear();
            match game.status() {
                Status::Ongoing { check } => {
                    writeln!(&mut info, "{} plays", game.side_to_move()).unwrap();
                    if check {
                        writeln!(&mut info, "check").unwrap();
                    }
                }
                Status::Ended(end_state) => {
                    writeln!(&mut info, "{end_state}").unwrap();
                }
            }
        }
        if first_time {
            writeln!(&mut info, "type `help` for instructions").unwrap();
            first_time = false;
        }
        update = false;
        writeln!(
            output,
            "{}",
            BoardDisplay {
                board: game.board(),
                view,
                highlighted: &highlighted,
                info: &info,
            },
        )?;
        loop {
            write!(output, "> ")?;
            output.flush()?;
            let Some(text) = lines.next() else {
                return Ok(());
            };
            let input = match text?.trim().parse() {
                Ok(input) => input,
                Err(err) => {
                    writeln!(error, "Error: {err}")?;
                    writeln!(error, "for available command, enter `help`")?;
                    continue;
                }
            };
            match input {
                Input::Help => {
                    writeln!(output, "flip           - flip the board")?;
                    writeln!(output, "restart        - reset to starting position")?;
                    writeln!(output, "quit           - quit the game")?;
                    writeln!(output, "random         - play a random legal move")?;
                    writeln!(output, "e2             - view valid moves")?;
                    writeln!(output, "e2 e4 (or e2e4) - play the move")?;
                    writeln!(output, "e1 g1          - perform castling")?;
                }
                Input::Flip => {
                    view = !view;
                }
                Input::Restart => {
                    game = Game::new();
                    update = true;
                    highlighted.clear();
                }
                Input::Quit => return Ok(()),
                Input::Square(square) => {
                    let destinations = game.legal_destinations(square);
                    if destinations.is_empty() {
                        writeln!(error, "Error: no valid moves from {square}")?;
                        continue;
                    }
                    highlighted.clear();
                    highlighted.push(square);
                    highlighted.extend(destinations);
                }
                Input::Move(start, end) => {
                    if let Err(err) = game.play(start, end) {
                        writeln!(error, "Error: {err}")?;
                        continue;
                    }
                    highlighted.clear();
                    highlighted.push(start);
                    highlighted.push(end);
                    update = true;
                }
                Input::Random => {
                    let moves = game.legal_moves();
                    if moves.is_empty() {
                        writeln!(error, "Error: there are no moves to play")?;
                        continue;
                    }
                    let (start, end) = moves[random_range(0..moves.len())];
                    if let Err(err) = game.play(start, end) {
                        writeln!(error, "Error: {err}")?;
                        continue;
                    }
                    writeln!(output, "played {start} {end}")?;
                    highlighted.clear();
                    highlighted.push(start);
                    highlighted.push(end);
                    update = true;
                }
            }
            break;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseInputError {
    Empty,
    Square(ParseSquareError),
}
impl From<ParseSquareError> for ParseInputError {
    fn from(value: ParseSquareError) -> Self {
        ParseInputError::Square(value)
    }
}
impl Display for ParseInputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseInputError::Empty => write!(f, "no command entered")?,
            ParseInputError::Square(err) => write!(f, "{err}")?,
        }
        Ok(())
    }
}
impl Error for ParseInputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseInputError::Empty => None,
            ParseInputError::Square(err) => Some(err),
        }
    }
}
