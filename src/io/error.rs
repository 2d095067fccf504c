//! 解析错误，均带 1 起始的行号

use thiserror::Error;

use crate::road::NetworkError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: unexpected end of input, expected {what}")]
    UnexpectedEof { line: usize, what: &'static str },

    #[error("line {line}: invalid {what} {token:?}")]
    InvalidNumber {
        line: usize,
        what: &'static str,
        token: String,
    },

    #[error("line {line}: {what} {value} out of range (limit {limit})")]
    OutOfRange {
        line: usize,
        what: &'static str,
        value: usize,
        limit: usize,
    },

    #[error("line {line}: intersection {intersection} listed twice")]
    DuplicateIntersection { line: usize, intersection: usize },

    #[error("line {line}: unexpected trailing token {token:?}")]
    Trailing { line: usize, token: String },

    #[error("line {line}: {source}")]
    Network {
        line: usize,
        #[source]
        source: NetworkError,
    },
}
