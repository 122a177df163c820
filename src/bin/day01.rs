use std::cmp::Reverse;
use std::path::PathBuf;
use std::process::ExitCode;

use advent::parse_lines;
use clap::Parser;
use itertools::Itertools;
use tracing::{debug, info};

#[derive(Parser)]
struct Args {
    /// Blank-line separated groups of integers
    #[arg(short, long, default_value = "./1-input.txt")]
    input: PathBuf,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Line {
    Record(i64),
    Separator,
}

// Totals are wider than records so no run of valid lines can overflow them.
#[derive(Debug, Default)]
struct Group {
    records: Vec<i64>,
    total: i128,
}

impl Group {
    fn push(&mut self, n: i64) {
        self.records.push(n);
        self.total += i128::from(n);
    }
}

struct Inventory {
    groups: Vec<Group>,
}

impl Default for Inventory {
    // There is always one open group, even before the first record.
    fn default() -> Inventory {
        Inventory {
            groups: vec![Group::default()],
        }
    }
}

impl Inventory {
    fn add(mut self, line: Line) -> Inventory {
        match line {
            Line::Record(n) => {
                if let Some(group) = self.groups.last_mut() {
                    group.push(n);
                }
            }
            Line::Separator => {
                if let Some(group) = self.groups.last() {
                    debug!(records = group.records.len(), total = %group.total, "closed group");
                }
                self.groups.push(Group::default());
            }
        }
        self
    }

    /// The `n` groups with the largest totals, largest first.
    ///
    /// The sort is stable, so among equal totals the earlier group ranks first.
    fn largest(&self, n: usize) -> Vec<&Group> {
        self.groups
            .iter()
            .sorted_by_key(|g| Reverse(g.total))
            .take(n)
            .collect()
    }
}

impl FromIterator<Line> for Inventory {
    fn from_iter<T: IntoIterator<Item = Line>>(iter: T) -> Inventory {
        iter.into_iter().fold(Inventory::default(), Inventory::add)
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
    let inventory: Inventory = parse_lines(&args.input, parser::line)?.into_iter().collect();
    let largest = inventory.largest(3);
    info!(groups = inventory.groups.len(), "ranked groups");

    println!("groups: {}", inventory.groups.len());
    println!(
        "largest three: {}",
        largest.iter().map(|g| g.total).join(" ")
    );
    println!(
        "sum of largest three: {}",
        largest.iter().map(|g| g.total).sum::<i128>()
    );

    Ok(())
}

mod parser {
    use super::*;

    use advent::parser::signed_numeric;

    use nom::branch::alt;
    use nom::combinator::eof;
    use nom::sequence::terminated;
    use nom::{IResult, Parser};

    fn separator(input: &str) -> IResult<&str, Line> {
        eof.map(|_| Line::Separator).parse(input)
    }

    fn record(input: &str) -> IResult<&str, Line> {
        terminated(signed_numeric, eof)
            .map(Line::Record)
            .parse(input)
    }

    pub(super) fn line(input: &str) -> IResult<&str, Line> {
        alt((separator, record)).parse(input)
    }
}
