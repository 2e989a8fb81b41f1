use thiserror::Error;

/// Failure to resolve a symbolic name coming from the DOM or the command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown shape `{0}`")]
    UnknownShape(String),
    #[error("unknown page `{0}` (expected home, about, services or contact)")]
    UnknownPage(String),
}
