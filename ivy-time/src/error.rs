use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid stopwatch property {0:?}")]
    InvalidPropertyName(String),

    #[error("Attempt to resume a stopwatch which is not paused")]
    ResumeWithoutPause,
}
