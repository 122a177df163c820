pub mod logging;
pub mod parser;

use std::path::PathBuf;

pub use parser::parse_lines;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("opening {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("reading {} at line {line}: {source}", path.display())]
    Read {
        path: PathBuf,
        line: usize,
        source: std::io::Error,
    },

    #[error("invalid input in {} at line {line}: {source}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        source: nom::error::Error<String>,
    },
}
