use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LongMapError {
    /// `put` was handed an absent value. The map only stores present values.
    #[error("value cannot be null (key {key})")]
    InvalidArgument { key: i64 },
}

pub type Result<T> = std::result::Result<T, LongMapError>;
