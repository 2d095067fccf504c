//! 顶层错误类型
//!
//! 各模块保留自己的错误枚举，这里把它们汇总成每个问题实例唯一的失败类型。

use std::path::PathBuf;

use thiserror::Error;

use crate::io::ParseError;
use crate::road::NetworkError;
use crate::sim::SimError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Sim(#[from] SimError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
