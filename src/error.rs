use thiserror::Error;

/// Failure of a single backend call.
///
/// Transport and decoding failures land in the same type as errors the
/// backend reports itself, so every region can show something.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Error text supplied by the backend, shown verbatim
    #[error("{0}")]
    Backend(String),

    #[error("Missing '{0}' in response")]
    MissingField(&'static str),
}
