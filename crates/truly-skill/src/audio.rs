//! Builders for the two audio playback responses.

use truly_types::{AudioItemMetadata, Card, Directive, OutputSpeech, Response};

/// A response that starts streaming `url` at `offset_ms`, optionally
/// speaking and showing a card first. Playback responses always end the
/// session — the stream keeps playing after the session closes.
pub fn play(
    url: &str,
    offset_ms: u64,
    speech: Option<String>,
    card: Option<Card>,
    metadata: Option<AudioItemMetadata>,
) -> Response {
    let mut response = Response::default()
        .with_directive(Directive::play(url, offset_ms, metadata))
        .with_should_end_session(true);
    if let Some(text) = speech {
        response.output_speech = Some(OutputSpeech::plain(text));
    }
    response.card = card;
    response
}

/// A response that stops playback, optionally saying goodbye first.
pub fn stop(speech: Option<String>) -> Response {
    let mut response = Response::default()
        .with_directive(Directive::stop())
        .with_should_end_session(true);
    if let Some(text) = speech {
        response.output_speech = Some(OutputSpeech::plain(text));
    }
    response
}
