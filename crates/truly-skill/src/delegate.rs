//! Remote delegation: forwarding eligible requests to the companion
//! webhook and relaying its reply back unmodified.

use std::time::Duration;

use serde_json::Value;
use truly_types::{RequestEnvelope, Response, ResponseEnvelope};

use crate::error::SkillError;

/// Production webhook endpoint.
pub const DEFAULT_WEBHOOK_URL: &str = "https://yours-truly.adtonos.com/webhook";

/// How long one delegation call may take before it is abandoned.
pub const WEBHOOK_TIMEOUT: Duration = Duration::from_millis(5000);

/// Reply-size ceiling. Larger replies are treated as transport failures.
pub const MAX_REPLY_BYTES: usize = 1_024_000;

/// How many redirects one delegation call may follow.
pub const MAX_REDIRECTS: usize = 5;

/// Returns `true` when `name` belongs to the companion service rather than
/// the local dispatch table.
///
/// The conditions are disjoint over the known intent set, so evaluation
/// order does not matter; the first match short-circuits.
pub fn is_delegable(name: &str) -> bool {
    name.starts_with("YoursTruly")
        || name.ends_with("YesIntent")
        || name.ends_with("NoIntent")
        || name.ends_with("ResumeIntent")
}

/// Settings for the delegation client. The timeout, redirect, and size
/// limits are fixed constants; only the endpoint itself is configurable.
#[derive(Debug, Clone)]
pub struct DelegationSettings {
    pub webhook_url: String,
}

impl Default for DelegationSettings {
    fn default() -> Self {
        Self {
            webhook_url: DEFAULT_WEBHOOK_URL.to_string(),
        }
    }
}

/// Forwards request envelopes to the webhook and merges its replies.
#[derive(Debug, Clone)]
pub struct DelegationClient {
    client: reqwest::Client,
    webhook_url: String,
}

impl DelegationClient {
    pub fn new(settings: DelegationSettings) -> Result<Self, SkillError> {
        let client = reqwest::Client::builder()
            .timeout(WEBHOOK_TIMEOUT)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;
        Ok(Self {
            client,
            webhook_url: settings.webhook_url,
        })
    }

    /// One best-effort POST of the full inbound envelope. Any HTTP status is
    /// accepted as a reply; only transport failures (connect error, timeout,
    /// oversize body) surface as errors, which the caller propagates to the
    /// platform's own error path. No retry, no caching.
    pub async fn forward(
        &self,
        envelope: &RequestEnvelope,
    ) -> Result<ResponseEnvelope, SkillError> {
        let reply = self
            .client
            .post(&self.webhook_url)
            .json(envelope)
            .send()
            .await?;

        let status = reply.status();
        let body = reply.bytes().await?;
        if body.len() > MAX_REPLY_BYTES {
            return Err(SkillError::OversizeReply {
                limit: MAX_REPLY_BYTES,
                actual: body.len(),
            });
        }
        tracing::debug!(%status, bytes = body.len(), "webhook replied");

        Ok(merge_reply(serde_json::from_slice(&body).ok()))
    }
}

/// Applies the merge policy to a parsed webhook reply: a structured
/// `response` field replaces the default empty response outright, and
/// `sessionAttributes` are copied onto the outgoing envelope. A non-JSON or
/// field-less reply yields the empty response.
pub fn merge_reply(reply: Option<Value>) -> ResponseEnvelope {
    let mut merged = ResponseEnvelope::empty();
    let Some(Value::Object(mut reply)) = reply else {
        return merged;
    };

    if let Some(response) = reply.remove("response") {
        match serde_json::from_value::<Response>(response) {
            Ok(response) => merged.response = response,
            Err(e) => {
                tracing::debug!(error = %e, "webhook response field malformed, using empty response");
            }
        }
    }
    if let Some(Value::Object(attributes)) = reply.remove("sessionAttributes") {
        merged.session_attributes = Some(attributes);
    }
    merged
}
