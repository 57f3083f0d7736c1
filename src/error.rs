use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("dictionary source unavailable: {0}")]
    SourceUnavailable(#[from] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
