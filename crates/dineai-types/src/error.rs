use thiserror::Error;

/// Classified failure of a text or image generation call.
///
/// Never surfaced raw to a pipeline caller: the completion and image
/// clients downgrade these into fallback text or an absent image.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("rate limited")]
    RateLimited,

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("service unavailable: {0}")]
    Unavailable(String),

    #[error("provider error: {0}")]
    Provider(String),

    #[error("prompt blocked: {0}")]
    Blocked(String),

    #[error("response contained no text")]
    EmptyResponse,

    #[error("response contained no image")]
    NoImage,

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

/// Errors from building a prompt out of a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptError {
    #[error("missing value for field '{0}'")]
    MissingField(String),

    #[error("unknown prompt template '{0}'")]
    UnknownTemplate(String),

    #[error("invalid template '{id}': {reason}")]
    InvalidTemplate { id: String, reason: String },
}

/// Errors from appending a record to the document store.
#[derive(Debug, Error)]
pub enum RecordStoreError {
    #[error("record serialization failed: {0}")]
    Serialization(String),

    #[error("query error: {0}")]
    Query(String),
}

/// Fatal startup errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing credential: set {0} to your Gemini API key")]
    MissingCredential(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("record store unavailable: {0}")]
    StoreUnavailable(String),
}
