use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use nom::character::complete::{digit1, one_of};
use nom::combinator::{map_res, opt, recognize};
use nom::sequence::pair;
use nom::{Finish, IResult, Parser};
use tracing::debug;

use crate::Error;

/// A base 10 integer with an optional leading `+` or `-`.
pub fn signed_numeric<N>(input: &str) -> IResult<&str, N>
where
    N: FromStr,
{
    map_res(recognize(pair(opt(one_of("+-")), digit1)), N::from_str).parse(input)
}

pub fn nom_error_to_owned<I>(e: nom::error::Error<&I>) -> nom::error::Error<I::Owned>
where
    I: ToOwned + ?Sized,
    I::Owned: 'static,
{
    let nom::error::Error { input, code } = e;
    nom::error::Error {
        input: input.to_owned(),
        code,
    }
}

// Lifetime hacks to make the `?` operator usable with nom results.
//
// The parser is borrowed so one instance can be run against every line of a file.
pub fn nom_parse_to_owned<I, O, P>(
    parser: &mut P,
    input: &I,
) -> Result<O, nom::error::Error<I::Owned>>
where
    I: ToOwned + ?Sized,
    I::Owned: 'static,
    P: for<'i> Parser<&'i I, O, nom::error::Error<&'i I>>,
{
    match parser.parse(input).finish() {
        Ok((_i, o)) => Ok(o),
        Err(e) => Err(nom_error_to_owned(e)),
    }
}

/// Run `parser` over every line of the file at `path`, stopping at the first failure.
///
/// Line numbers in errors are 1-based. The file is closed before this returns.
pub fn parse_lines<O, P>(path: impl AsRef<Path>, mut parser: P) -> Result<Vec<O>, Error>
where
    P: for<'i> Parser<&'i str, O, nom::error::Error<&'i str>>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_owned(),
        source,
    })?;
    debug!(path = %path.display(), "reading input");

    let records = BufReader::new(file)
        .lines()
        .enumerate()
        .map(|(i, line)| {
            let line_number = i + 1;
            let line = line.map_err(|source| Error::Read {
                path: path.to_owned(),
                line: line_number,
                source,
            })?;

            nom_parse_to_owned(&mut parser, line.as_str()).map_err(|source| Error::Parse {
                path: path.to_owned(),
                line: line_number,
                source,
            })
        })
        .collect::<Result<Vec<O>, Error>>()?;

    debug!(lines = records.len(), "parsed input");
    Ok(records)
}
