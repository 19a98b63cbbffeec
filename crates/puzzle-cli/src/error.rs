//! `CliError`, the CLI's top-level error enum. Mirrors the teacher's
//! `AppError` composition (`cli/src/error.rs`) but expressed with
//! `thiserror` instead of hand-rolled `Error`/`Display`/`From` impls.

use puzzle_core::{DescError, GeomError, MoveError, ParamError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Param(#[from] ParamError),
    #[error(transparent)]
    Geom(#[from] GeomError),
    #[error(transparent)]
    Desc(#[from] DescError),
    #[error(transparent)]
    Move(#[from] MoveError),
    #[error("malformed config file at {path}: {source}")]
    Config {
        path: std::path::PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;
