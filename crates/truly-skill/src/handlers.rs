//! Canned handlers for locally-served requests.
//!
//! Each handler is a plain function; the dispatch table maps names onto
//! them, several names onto the same function where the behavior is shared.

use truly_types::{RequestEnvelope, Response, ResponseEnvelope};

use crate::assets;
use crate::audio;
use crate::i18n::{self, Message};

/// A local handler. Pure apart from diagnostic logging.
pub type Handler = fn(&RequestEnvelope) -> ResponseEnvelope;

/// `LaunchRequest` and the `PlayAudio` intent share this handler: both
/// start the live stream from the beginning with a welcome message and the
/// station card.
pub(crate) fn play_station(envelope: &RequestEnvelope) -> ResponseEnvelope {
    let locale = envelope.locale();
    let station = assets::station_for_locale(locale);
    let speech = i18n::text_with_title(locale, Message::Welcome, station.title);
    ResponseEnvelope::new(audio::play(
        station.stream_url,
        0,
        Some(speech),
        Some(station.card()),
        Some(station.metadata()),
    ))
}

/// Spoken usage help. The session stays open so the user can follow up.
pub(crate) fn help(envelope: &RequestEnvelope) -> ResponseEnvelope {
    let locale = envelope.locale();
    let station = assets::station_for_locale(locale);
    ResponseEnvelope::new(
        Response::speech(i18n::text_with_title(locale, Message::Help, station.title))
            .with_should_end_session(false),
    )
}

/// `AMAZON.StopIntent`, with `AMAZON.PauseIntent` and `AMAZON.CancelIntent`
/// aliased onto it.
pub(crate) fn stop_playback(envelope: &RequestEnvelope) -> ResponseEnvelope {
    ResponseEnvelope::new(audio::stop(Some(i18n::text(envelope.locale(), Message::Stop))))
}

pub(crate) fn cannot_skip(envelope: &RequestEnvelope) -> ResponseEnvelope {
    ResponseEnvelope::new(
        Response::speech(i18n::text(envelope.locale(), Message::CannotSkip))
            .with_should_end_session(true),
    )
}

/// Loop, shuffle, and start-over all collapse to this single refusal.
pub(crate) fn not_possible(envelope: &RequestEnvelope) -> ResponseEnvelope {
    ResponseEnvelope::new(Response::speech(i18n::text(
        envelope.locale(),
        Message::NotPossible,
    )))
}

/// The platform forbids a meaningful reply to `SessionEndedRequest`.
pub(crate) fn session_ended(_envelope: &RequestEnvelope) -> ResponseEnvelope {
    ResponseEnvelope::empty()
}

/// Logs the platform-reported exception in full. Purely diagnostic; no
/// recovery action is taken.
pub(crate) fn exception_encountered(envelope: &RequestEnvelope) -> ResponseEnvelope {
    let raw = serde_json::to_string(envelope).unwrap_or_else(|_| format!("{envelope:?}"));
    tracing::error!(envelope = %raw, "platform reported an internal exception");
    ResponseEnvelope::empty()
}

/// Physical-remote play button: start the stream with no speech or card.
pub(crate) fn remote_play(envelope: &RequestEnvelope) -> ResponseEnvelope {
    let station = assets::station_for_locale(envelope.locale());
    ResponseEnvelope::new(audio::play(station.stream_url, 0, None, None, None))
}

/// Physical-remote pause button: stop silently.
pub(crate) fn remote_pause(_envelope: &RequestEnvelope) -> ResponseEnvelope {
    ResponseEnvelope::new(audio::stop(None))
}

/// Remote next/previous buttons are acknowledged with an empty response.
pub(crate) fn remote_noop(_envelope: &RequestEnvelope) -> ResponseEnvelope {
    ResponseEnvelope::empty()
}

/// Fallback for names nothing else claims: a generic spoken message, then
/// the session ends.
pub(crate) fn unhandled(envelope: &RequestEnvelope) -> ResponseEnvelope {
    ResponseEnvelope::new(
        Response::speech(i18n::text(envelope.locale(), Message::Unhandled))
            .with_should_end_session(true),
    )
}
