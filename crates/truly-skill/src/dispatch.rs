//! The name → handler dispatch table.

use std::collections::HashMap;

use truly_types::{RequestEnvelope, ResponseEnvelope};

use crate::handlers::{self, Handler};

/// Immutable mapping from request/intent name to handler.
///
/// Built once at startup and passed by reference into the request-handling
/// entry point. Several names intentionally resolve to the *same* handler —
/// a deliberate many-to-one mapping, not duplication.
pub struct DispatchTable {
    entries: HashMap<&'static str, Handler>,
}

impl DispatchTable {
    pub fn new() -> Self {
        let mut entries: HashMap<&'static str, Handler> = HashMap::new();

        // Launch and the play intent start the stream the same way.
        entries.insert("LaunchRequest", handlers::play_station as Handler);
        entries.insert("PlayAudio", handlers::play_station);

        entries.insert("AMAZON.HelpIntent", handlers::help);

        // Pause, cancel, and stop all perform "stop playback".
        entries.insert("AMAZON.PauseIntent", handlers::stop_playback);
        entries.insert("AMAZON.CancelIntent", handlers::stop_playback);
        entries.insert("AMAZON.StopIntent", handlers::stop_playback);

        entries.insert("AMAZON.NextIntent", handlers::cannot_skip);
        entries.insert("AMAZON.PreviousIntent", handlers::cannot_skip);

        entries.insert("AMAZON.LoopOnIntent", handlers::not_possible);
        entries.insert("AMAZON.LoopOffIntent", handlers::not_possible);
        entries.insert("AMAZON.ShuffleOnIntent", handlers::not_possible);
        entries.insert("AMAZON.ShuffleOffIntent", handlers::not_possible);
        entries.insert("AMAZON.StartOverIntent", handlers::not_possible);

        entries.insert("SessionEndedRequest", handlers::session_ended);
        entries.insert("System.ExceptionEncountered", handlers::exception_encountered);

        // Requests received from a physical remote control.
        entries.insert("PlaybackController.PlayCommandIssued", handlers::remote_play);
        entries.insert("PlaybackController.PauseCommandIssued", handlers::remote_pause);
        entries.insert("PlaybackController.NextCommandIssued", handlers::remote_noop);
        entries.insert(
            "PlaybackController.PreviousCommandIssued",
            handlers::remote_noop,
        );

        Self { entries }
    }

    /// Runs the handler registered for `name`, or the unhandled fallback
    /// when no entry matches. Never fails: an unknown name degrades
    /// gracefully instead of raising an error.
    pub fn dispatch(&self, name: &str, envelope: &RequestEnvelope) -> ResponseEnvelope {
        match self.entries.get(name) {
            Some(handler) => handler(envelope),
            None => {
                tracing::debug!(name, "no handler registered, falling back to unhandled");
                handlers::unhandled(envelope)
            }
        }
    }

    /// Every name the table claims. Used to check the table stays disjoint
    /// from the delegation predicate.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }
}

impl Default for DispatchTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use truly_types::{AUDIO_PLAYER_PLAY, AUDIO_PLAYER_STOP};

    fn intent_envelope(name: &str) -> RequestEnvelope {
        serde_json::from_value(json!({
            "version": "1.0",
            "request": {
                "type": "IntentRequest",
                "requestId": "amzn1.echo-api.request.test",
                "locale": "en-US",
                "intent": { "name": name }
            }
        }))
        .unwrap()
    }

    fn request_envelope(request_type: &str) -> RequestEnvelope {
        serde_json::from_value(json!({
            "version": "1.0",
            "request": {
                "type": request_type,
                "requestId": "amzn1.echo-api.request.test",
                "locale": "en-US"
            }
        }))
        .unwrap()
    }

    fn dispatch_json(name: &str, envelope: &RequestEnvelope) -> serde_json::Value {
        serde_json::to_value(DispatchTable::new().dispatch(name, envelope)).unwrap()
    }

    #[test]
    fn launch_plays_the_stream_from_the_start() {
        let envelope = request_envelope("LaunchRequest");
        let out = dispatch_json("LaunchRequest", &envelope);

        let directive = &out["response"]["directives"][0];
        assert_eq!(directive["type"], AUDIO_PLAYER_PLAY);
        assert_eq!(directive["audioItem"]["stream"]["offsetInMilliseconds"], 0);
        assert_eq!(out["response"]["shouldEndSession"], true);

        let speech = out["response"]["outputSpeech"]["text"].as_str().unwrap();
        assert!(speech.contains("Yours Truly"));
        assert_eq!(out["response"]["card"]["title"], "Yours Truly");
    }

    #[test]
    fn help_keeps_the_session_open() {
        let envelope = intent_envelope("AMAZON.HelpIntent");
        let out = dispatch_json("AMAZON.HelpIntent", &envelope);

        assert_eq!(out["response"]["shouldEndSession"], false);
        assert!(out["response"]["outputSpeech"]["text"]
            .as_str()
            .unwrap()
            .contains("Yours Truly"));
        assert!(out["response"]["directives"].is_null());
    }

    #[test]
    fn stop_emits_a_stop_directive_and_no_play() {
        let envelope = intent_envelope("AMAZON.StopIntent");
        let out = dispatch_json("AMAZON.StopIntent", &envelope);

        let directives = out["response"]["directives"].as_array().unwrap();
        assert_eq!(directives.len(), 1);
        assert_eq!(directives[0]["type"], AUDIO_PLAYER_STOP);
        assert_eq!(out["response"]["outputSpeech"]["text"], "Goodbye.");
    }

    #[test]
    fn pause_and_cancel_alias_the_stop_handler() {
        let stop = dispatch_json("AMAZON.StopIntent", &intent_envelope("AMAZON.StopIntent"));
        let pause = dispatch_json("AMAZON.PauseIntent", &intent_envelope("AMAZON.PauseIntent"));
        let cancel = dispatch_json("AMAZON.CancelIntent", &intent_envelope("AMAZON.CancelIntent"));

        assert_eq!(stop, pause);
        assert_eq!(stop, cancel);
    }

    #[test]
    fn loop_and_shuffle_share_the_refusal_handler() {
        for name in [
            "AMAZON.LoopOnIntent",
            "AMAZON.LoopOffIntent",
            "AMAZON.ShuffleOnIntent",
            "AMAZON.ShuffleOffIntent",
            "AMAZON.StartOverIntent",
        ] {
            let out = dispatch_json(name, &intent_envelope(name));
            assert!(out["response"]["outputSpeech"]["text"]
                .as_str()
                .unwrap()
                .contains("not possible"));
        }
    }

    #[test]
    fn unknown_names_fall_back_to_unhandled() {
        let envelope = intent_envelope("Foo.Bar");
        let out = dispatch_json("Foo.Bar", &envelope);

        assert_eq!(
            out["response"]["outputSpeech"]["text"],
            "Sorry, I didn't catch that. Goodbye."
        );
        assert_eq!(out["response"]["shouldEndSession"], true);
    }

    #[test]
    fn session_ended_returns_an_empty_response() {
        let envelope = request_envelope("SessionEndedRequest");
        let out = dispatch_json("SessionEndedRequest", &envelope);

        assert_eq!(out["response"], json!({}));
    }

    #[test]
    fn remote_pause_stops_silently() {
        let envelope = request_envelope("PlaybackController.PauseCommandIssued");
        let out = dispatch_json("PlaybackController.PauseCommandIssued", &envelope);

        assert_eq!(out["response"]["directives"][0]["type"], AUDIO_PLAYER_STOP);
        assert!(out["response"]["outputSpeech"].is_null());
    }

    #[test]
    fn remote_play_carries_no_speech_or_card() {
        let envelope = request_envelope("PlaybackController.PlayCommandIssued");
        let out = dispatch_json("PlaybackController.PlayCommandIssued", &envelope);

        assert_eq!(out["response"]["directives"][0]["type"], AUDIO_PLAYER_PLAY);
        assert!(out["response"]["outputSpeech"].is_null());
        assert!(out["response"]["card"].is_null());
    }

    #[test]
    fn every_registered_handler_returns_a_well_formed_response() {
        let table = DispatchTable::new();
        for name in table.names().collect::<Vec<_>>() {
            let envelope = if name.contains('.') && !name.starts_with("AMAZON.") {
                request_envelope(name)
            } else {
                intent_envelope(name)
            };
            let out = serde_json::to_value(table.dispatch(name, &envelope)).unwrap();
            assert_eq!(out["version"], "1.0", "{name}");
            assert!(out["response"].is_object(), "{name}");
        }
    }
}
