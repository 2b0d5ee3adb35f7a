use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("unknown locale code: {0:?}")]
    UnknownLocale(String),
}
