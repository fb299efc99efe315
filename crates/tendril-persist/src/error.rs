/// Errors that can occur while saving or loading cursor lists.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("cursor document is not valid RON: {0}")]
    ParseError(String),

    #[error("cursor document must be a list, found {0}")]
    NotAList(&'static str),

    #[error("failed to serialize cursors: {0}")]
    SerializeError(String),
}
