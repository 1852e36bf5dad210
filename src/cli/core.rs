use std::io;

use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::errors::{ControllerError, TrackerError, ViewError};

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// Failures that end the shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Config(#[from] TrackerError),
    #[error(transparent)]
    View(#[from] ViewError),
}

/// Failures of a single command; the shell reports them and keeps going.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Controller(#[from] ControllerError),
    #[error(transparent)]
    Config(#[from] TrackerError),
    #[error("exit requested")]
    ExitRequested,
}
