use crate::interaction::ComponentType;

pub type Result<T> = std::result::Result<T, ModelError>;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(thiserror::Error, Debug)]
pub enum ModelError {
    #[error("invalid value {value} for {name}")]
    InvalidEnumValue { name: &'static str, value: u64 },

    #[error("component type {0:?} is not supported")]
    UnsupportedComponent(ComponentType),

    #[error("select menu \"{0}\" has no handler bound")]
    NoHandler(Box<str>),

    #[error("select menu \"{0}\" has no options to append to")]
    NothingToAppend(Box<str>),

    #[error("{0} may only carry id, name and animated")]
    NotPartialEmoji(&'static str),

    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("{field} is {actual} characters long, max is {max}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("{field} has {actual} entries, max is {max}")]
    TooMany {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("{field} must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: &'static str,
        min: u8,
        max: u8,
        actual: u8,
    },

    #[error("select menu handler failed: {0}")]
    HandlerError(BoxError),

    #[error("Error occurred while (de)serializing json: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl<T> From<ModelError> for Result<T> {
    fn from(e: ModelError) -> Self {
        Err(e)
    }
}
