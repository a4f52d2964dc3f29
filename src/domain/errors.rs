use derive_more::Display;

/// Everything that can go wrong between pressing a button and having a payload.
///
/// The views collapse every variant into one line of text, but the variants
/// are kept apart so the console log says what actually happened.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum FetchError {
    /// The request never produced a response (offline, CORS, DNS...)
    #[display(fmt = "Network error: {}", _0)]
    Network(String),
    /// Non-success status with a body that was not JSON
    #[display(fmt = "HTTP error: {}", _0)]
    Http(u16),
    /// Body was not JSON, or JSON of an unexpected shape
    #[display(fmt = "Decode error: {}", _0)]
    Decode(String),
    /// Well-formed payload carrying an `error` field
    #[display(fmt = "{}", _0)]
    Backend(String),
}

impl std::error::Error for FetchError {}

impl FetchError {
    /// Backend messages are shown verbatim; transport and shape failures
    /// are replaced by the view's generic `fallback` text.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            FetchError::Backend(message) => message.clone(),
            FetchError::Network(_) | FetchError::Http(_) | FetchError::Decode(_) => {
                fallback.to_string()
            }
        }
    }
}

pub type FetchResult<T> = Result<T, FetchError>;
