use thiserror::Error;

/// Fixed notice shown when the text service throttles us
pub const BUSY_NOTICE: &str =
    "⚠️ System Busy: We are currently experiencing high traffic. Please wait a moment and try again.";

/// Failures reported by a text adapter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdapterError {
    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("rate limited: {0}")]
    RateLimited(String),

    #[error("{0}")]
    Remote(String),
}

/// Everything a dispatch can fail with
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("empty input")]
    EmptyInput,

    #[error("missing credential")]
    MissingCredential,

    #[error("rate limited")]
    RateLimited,

    #[error("remote error: {0}")]
    Remote(String),

    #[error("unknown tool: {0}")]
    UnknownTool(String),
}

impl DispatchError {
    /// Text shown to the user for this failure
    pub fn user_message(&self) -> String {
        match self {
            DispatchError::EmptyInput => "Please provide input text.".to_string(),
            DispatchError::MissingCredential => {
                "Please enter a valid Google API key (sidebar: Ctrl+K, or set GOOGLE_API_KEY).".to_string()
            }
            DispatchError::RateLimited => BUSY_NOTICE.to_string(),
            DispatchError::Remote(detail) => format!("Error: {}", detail),
            DispatchError::UnknownTool(name) => format!("Unknown tool: {}", name),
        }
    }
}

impl From<AdapterError> for DispatchError {
    fn from(err: AdapterError) -> Self {
        match err {
            // A rejected key gets the same guidance as a missing one
            AdapterError::Auth(_) => DispatchError::MissingCredential,
            AdapterError::RateLimited(_) => DispatchError::RateLimited,
            AdapterError::Remote(detail) => DispatchError::Remote(detail),
        }
    }
}

/// Invalid configuration values
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}
