use thiserror::Error;

/// Errors produced while handling a request.
///
/// Local dispatch never fails — unknown names degrade to the unhandled
/// fallback — so every variant here belongs to the delegation path.
#[derive(Debug, Error)]
pub enum SkillError {
    /// The webhook call failed outright (connect error, timeout, redirect
    /// loop) or the HTTP client could not be constructed.
    #[error("webhook request failed: {0}")]
    Webhook(#[from] reqwest::Error),

    /// The webhook reply exceeded the response-size ceiling.
    #[error("webhook reply of {actual} bytes exceeds the {limit} byte ceiling")]
    OversizeReply { limit: usize, actual: usize },
}
