use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown control type tag: {0}")]
    UnknownControlType(String),

    #[error("unknown event tag: {0}")]
    UnknownEvent(String),

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("field {0} cannot be edited")]
    ImmutableField(String),

    #[error("invalid value {value:?} for field {field}")]
    InvalidValue { field: String, value: String },

    #[error("prefix {0:?} must be exactly three characters")]
    InvalidPrefix(String),

    #[error("identifier {0} is already present")]
    DuplicateIdentifier(String),

    #[error("identifier {0} is not present")]
    UnknownIdentifier(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
