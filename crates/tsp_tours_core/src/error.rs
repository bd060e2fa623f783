use thiserror::Error as ThisError;

use crate::graph::VertexId;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("no edges file path configured")]
    MissingEdgesFile,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("no weight available for edge {from} -> {to}")]
    MissingEdge { from: VertexId, to: VertexId },
    #[error("no unvisited neighbour to extend the tour")]
    NoNeighbour,
    #[error("no path over explicit edges")]
    NoPath,
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
