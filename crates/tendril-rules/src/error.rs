use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to parse block catalog RON: {0}")]
    ParseError(String),
    #[error("Duplicate block ID {0}")]
    DuplicateId(u16),
    #[error("Duplicate block name '{0}'")]
    DuplicateName(String),
    #[error("Block '{0}' uses ID 0, which is reserved for air")]
    ReservedAirId(String),
    #[error("Replaceable set '{set}' references unknown block ID {id}")]
    UnknownReplaceableRef { set: String, id: u16 },
    #[error("Replaceable set '{set}' includes '{name}', which is not a replaceable block")]
    NotReplaceable { set: String, name: String },
    #[error("Catalog has no block with role {0}")]
    MissingRole(&'static str),
}
