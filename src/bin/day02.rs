use std::ops::Add;
use std::path::PathBuf;
use std::process::ExitCode;

use advent::parse_lines;
use clap::{Parser, ValueEnum};
use tracing::{debug, info};

#[derive(Parser)]
struct Args {
    /// One round per line: their shape, a space, then our code
    #[arg(short, long, default_value = "./2-input.txt")]
    input: PathBuf,

    /// How to read the second column of each round
    #[arg(short, long, value_enum, default_value_t = Mode::Outcome)]
    mode: Mode,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum Mode {
    /// X, Y and Z are the shape we play
    Direct,
    /// X, Y and Z are the outcome we want
    Outcome,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
struct Points(u64);

impl Add for Points {
    type Output = Points;

    fn add(self, other: Points) -> Self::Output {
        Points(self.0 + other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Shape {
    Rock,
    Paper,
    Scissors,
}

impl Shape {
    /// The shape this one beats.
    fn beats(self) -> Shape {
        use Shape::*;

        match self {
            Rock => Scissors,
            Paper => Rock,
            Scissors => Paper,
        }
    }

    /// The shape that beats this one.
    fn loses_to(self) -> Shape {
        use Shape::*;

        match self {
            Rock => Paper,
            Paper => Scissors,
            Scissors => Rock,
        }
    }
}

impl From<Shape> for Points {
    fn from(s: Shape) -> Points {
        use Shape::*;

        Points(match s {
            Rock => 1,
            Paper => 2,
            Scissors => 3,
        })
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Outcome {
    Loss,
    Draw,
    Win,
}

impl From<Outcome> for Points {
    fn from(o: Outcome) -> Points {
        use Outcome::*;

        Points(match o {
            Loss => 0,
            Draw => 3,
            Win => 6,
        })
    }
}

/// The second column, before the mode gives it a meaning.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Code {
    X,
    Y,
    Z,
}

impl Code {
    fn shape(self) -> Shape {
        match self {
            Code::X => Shape::Rock,
            Code::Y => Shape::Paper,
            Code::Z => Shape::Scissors,
        }
    }

    fn outcome(self) -> Outcome {
        match self {
            Code::X => Outcome::Loss,
            Code::Y => Outcome::Draw,
            Code::Z => Outcome::Win,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Round {
    theirs: Shape,
    ours: Shape,
}

impl Round {
    fn new(theirs: Shape, code: Code, mode: Mode) -> Round {
        let ours = match mode {
            Mode::Direct => code.shape(),
            Mode::Outcome => Round::response(theirs, code.outcome()),
        };

        Round { theirs, ours }
    }

    /// The shape we need to play against `theirs` to get `outcome`.
    fn response(theirs: Shape, outcome: Outcome) -> Shape {
        match outcome {
            Outcome::Loss => theirs.beats(),
            Outcome::Draw => theirs,
            Outcome::Win => theirs.loses_to(),
        }
    }

    fn outcome(&self) -> Outcome {
        if self.ours == self.theirs {
            Outcome::Draw
        } else if self.ours.beats() == self.theirs {
            Outcome::Win
        } else {
            Outcome::Loss
        }
    }
}

impl From<Round> for Points {
    fn from(r: Round) -> Points {
        Points::from(r.ours) + Points::from(r.outcome())
    }
}

pub fn main() -> ExitCode {
    advent::logging::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), advent::Error> {
    let rounds = parse_lines(&args.input, parser::line)?
        .into_iter()
        .map(|(theirs, code)| Round::new(theirs, code, args.mode))
        .collect::<Vec<_>>();
    info!(rounds = rounds.len(), mode = ?args.mode, "resolved rounds");

    let score = rounds
        .iter()
        .copied()
        .inspect(|r| debug!(round = ?r, outcome = ?r.outcome(), "scored"))
        .map(Points::from)
        .fold(Points::default(), Points::add);

    println!("rounds: {}", rounds.len());
    println!("score: {}", score.0);

    Ok(())
}

mod parser {
    use super::*;

    use nom::branch::alt;
    use nom::character::complete::{char, space0, space1};
    use nom::combinator::eof;
    use nom::sequence::{delimited, separated_pair, terminated};
    use nom::{IResult, Parser};

    fn theirs(input: &str) -> IResult<&str, Shape> {
        alt((
            char('A').map(|_| Shape::Rock),
            char('B').map(|_| Shape::Paper),
            char('C').map(|_| Shape::Scissors),
        ))
        .parse(input)
    }

    fn code(input: &str) -> IResult<&str, Code> {
        alt((
            char('X').map(|_| Code::X),
            char('Y').map(|_| Code::Y),
            char('Z').map(|_| Code::Z),
        ))
        .parse(input)
    }

    // Each symbol is a whole token, so "AX Y" fails on the missing space rather than
    // splitting the first token.
    pub(super) fn line(input: &str) -> IResult<&str, (Shape, Code)> {
        terminated(
            delimited(space0, separated_pair(theirs, space1, code), space0),
            eof,
        )
        .parse(input)
    }
}
