use std::fmt;
use std::io;

use thiserror::Error;

/// Which container an operation was applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Queue,
    Stack,
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ContainerKind::Queue => f.write_str("queue"),
            ContainerKind::Stack => f.write_str("stack"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    /// A removal was attempted on a container holding no processes.
    /// The container is left untouched.
    #[error("the {0} is empty")]
    EmptyContainer(ContainerKind),

    #[error("failed to write transcript: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub fn is_empty_container(&self) -> bool {
        matches!(self, Error::EmptyContainer(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
