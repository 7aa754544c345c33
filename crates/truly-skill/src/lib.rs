//! Skill core for the Yours Truly live-radio backend.
//!
//! A request envelope comes in, exactly one handler runs, a response
//! envelope goes out. Handlers come in two kinds:
//!
//! - **Local**: canned speech/audio responses served from the immutable
//!   [`DispatchTable`] (launch, help, stop and its aliases, playback
//!   controller events, and the unhandled fallback).
//! - **Delegated**: names claimed by [`delegate::is_delegable`] are
//!   forwarded whole to the companion webhook and its reply is relayed
//!   back unmodified.
//!
//! The delegation predicate is evaluated before the local table so the two
//! stay mutually exclusive over the names they claim.

pub mod assets;
pub mod audio;
pub mod delegate;
pub mod dispatch;
mod error;
mod handlers;
pub mod i18n;

pub use delegate::{DelegationClient, DelegationSettings};
pub use dispatch::DispatchTable;
pub use error::SkillError;

use truly_types::{RequestEnvelope, ResponseEnvelope};

/// The request-handling entry point: the immutable dispatch table plus the
/// delegation client. Read-only after construction and shared across
/// invocations behind an `Arc` by the server.
pub struct Skill {
    dispatch: DispatchTable,
    delegation: DelegationClient,
}

impl Skill {
    /// Builds the dispatch table and the delegation client.
    ///
    /// # Errors
    ///
    /// Returns [`SkillError`] if the HTTP client cannot be constructed.
    pub fn new(settings: DelegationSettings) -> Result<Self, SkillError> {
        Ok(Self {
            dispatch: DispatchTable::new(),
            delegation: DelegationClient::new(settings)?,
        })
    }

    /// Handles one request envelope.
    ///
    /// Exactly one handler — local or delegated — runs per invocation.
    /// Unknown names degrade to the unhandled fallback rather than failing.
    ///
    /// # Errors
    ///
    /// Returns [`SkillError`] only when a delegation call fails outright;
    /// the failure propagates to the platform's own error path.
    pub async fn handle(
        &self,
        envelope: &RequestEnvelope,
    ) -> Result<ResponseEnvelope, SkillError> {
        let name = envelope.handler_name();

        if delegate::is_delegable(name) {
            tracing::debug!(name, locale = envelope.locale(), "delegating to webhook");
            return self.delegation.forward(envelope).await;
        }

        tracing::debug!(name, locale = envelope.locale(), "dispatching locally");
        Ok(self.dispatch.dispatch(name, envelope))
    }
}
