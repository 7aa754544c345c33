//! Shared wire types for the Yours Truly skill backend.
//!
//! This crate defines the request and response envelopes exchanged with the
//! voice platform, serialized with `serde` using the platform's camelCase
//! JSON convention. Every envelope-level struct carries a flattened extras
//! map so that fields this backend does not model survive a deserialize →
//! serialize round trip — the delegation path forwards the full inbound
//! envelope to the companion webhook verbatim.
//!
//! No crate in the workspace depends on anything *except* `truly-types` for
//! cross-cutting type definitions. This keeps the dependency graph clean and
//! prevents circular dependencies.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Envelope schema version spoken by the platform.
pub const ENVELOPE_VERSION: &str = "1.0";

/// Locale assumed when a request carries none.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Request type tag for intent requests.
pub const INTENT_REQUEST_TYPE: &str = "IntentRequest";

// ---------------------------------------------------------------------------
// Inbound envelope
// ---------------------------------------------------------------------------

/// The structured payload the platform sends once per invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,

    /// Device and interface context. Opaque to this backend; forwarded as-is
    /// on delegation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,

    pub request: Request,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RequestEnvelope {
    /// The name dispatch resolves against: the intent name for intent
    /// requests, the request type tag for everything else.
    pub fn handler_name(&self) -> &str {
        match (self.request.request_type.as_str(), &self.request.intent) {
            (INTENT_REQUEST_TYPE, Some(intent)) => &intent.name,
            _ => &self.request.request_type,
        }
    }

    /// The request locale, falling back to [`DEFAULT_LOCALE`].
    pub fn locale(&self) -> &str {
        self.request.locale.as_deref().unwrap_or(DEFAULT_LOCALE)
    }
}

/// Conversation session state managed by the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub new: bool,

    #[serde(default)]
    pub session_id: String,

    /// Small key-value state the platform persists across turns. Opaque.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Map<String, Value>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The request portion of the inbound envelope.
///
/// The `type` tag is data, not an enum: the platform defines more request
/// types than this backend handles, and unrecognized ones must still
/// deserialize so they can fall through to the unhandled path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(rename = "type")]
    pub request_type: String,

    #[serde(default)]
    pub request_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    /// Present only when `type` is `IntentRequest`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A named user-request category plus its (unused here) slot data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slots: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ---------------------------------------------------------------------------
// Outbound envelope
// ---------------------------------------------------------------------------

/// The structured reply returned to the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_attributes: Option<Map<String, Value>>,

    pub response: Response,
}

impl ResponseEnvelope {
    pub fn new(response: Response) -> Self {
        Self {
            version: ENVELOPE_VERSION.to_string(),
            session_attributes: None,
            response,
        }
    }

    /// An envelope with no speech, no card, and no directives.
    pub fn empty() -> Self {
        Self::new(Response::default())
    }
}

/// Speech, card, directives, and the session-end flag for one reply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Response {
    /// A response that only speaks.
    pub fn speech(text: impl Into<String>) -> Self {
        Self {
            output_speech: Some(OutputSpeech::plain(text)),
            ..Self::default()
        }
    }

    pub fn with_card(mut self, card: Card) -> Self {
        self.card = Some(card);
        self
    }

    pub fn with_directive(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }

    pub fn with_should_end_session(mut self, end: bool) -> Self {
        self.should_end_session = Some(end);
        self
    }
}

/// Spoken output, plain text or SSML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub speech_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssml: Option<String>,
}

impl OutputSpeech {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            speech_type: "PlainText".to_string(),
            text: Some(text.into()),
            ssml: None,
        }
    }
}

/// A display card shown in the platform's companion app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(rename = "type")]
    pub card_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<CardImage>,
}

impl Card {
    /// A `Standard` card with title, body text, and artwork.
    pub fn standard(
        title: impl Into<String>,
        text: impl Into<String>,
        image: CardImage,
    ) -> Self {
        Self {
            card_type: "Standard".to_string(),
            title: Some(title.into()),
            text: Some(text.into()),
            image: Some(image),
        }
    }
}

/// Artwork URLs for a standard card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardImage {
    pub small_image_url: String,
    pub large_image_url: String,
}

/// A structured instruction to the platform's client.
///
/// Like [`Request`], the `type` tag is a string so that directives produced
/// by the companion webhook relay through unmodified even when this backend
/// does not model them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Directive {
    #[serde(rename = "type")]
    pub directive_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_behavior: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_item: Option<AudioItem>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Directive type tag for starting audio playback.
pub const AUDIO_PLAYER_PLAY: &str = "AudioPlayer.Play";

/// Directive type tag for stopping audio playback.
pub const AUDIO_PLAYER_STOP: &str = "AudioPlayer.Stop";

impl Directive {
    /// An `AudioPlayer.Play` directive that replaces the playback queue with
    /// the given stream. Each directive gets a fresh stream token.
    pub fn play(url: impl Into<String>, offset_ms: u64, metadata: Option<AudioItemMetadata>) -> Self {
        Self {
            directive_type: AUDIO_PLAYER_PLAY.to_string(),
            play_behavior: Some("REPLACE_ALL".to_string()),
            audio_item: Some(AudioItem {
                stream: Stream {
                    url: url.into(),
                    token: uuid::Uuid::new_v4().to_string(),
                    offset_in_milliseconds: offset_ms,
                },
                metadata,
            }),
            extra: Map::new(),
        }
    }

    /// An `AudioPlayer.Stop` directive.
    pub fn stop() -> Self {
        Self {
            directive_type: AUDIO_PLAYER_STOP.to_string(),
            play_behavior: None,
            audio_item: None,
            extra: Map::new(),
        }
    }
}

/// The stream and display metadata attached to a play directive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioItem {
    pub stream: Stream,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AudioItemMetadata>,
}

/// Where to stream from and where to start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stream {
    pub url: String,
    pub token: String,
    pub offset_in_milliseconds: u64,
}

/// Now-playing metadata shown on devices with screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioItemMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}
