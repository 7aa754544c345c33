//! Localized string table.
//!
//! Lookup is total: unknown locales fall back to English, and every message
//! has a string in every supported language. The only templating is the
//! `{0}` placeholder, which takes the resolved station title.

/// Message ids spoken by the canned handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Welcome,
    Help,
    Stop,
    Resume,
    Unhandled,
    CannotSkip,
    NotPossible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Language {
    English,
    Polish,
}

fn language(locale: &str) -> Language {
    match locale.split(['-', '_']).next() {
        Some("pl") => Language::Polish,
        _ => Language::English,
    }
}

fn template(language: Language, message: Message) -> &'static str {
    match (language, message) {
        (Language::English, Message::Welcome) => {
            "Welcome to {0}. Starting the live stream now."
        }
        (Language::English, Message::Help) => {
            "{0} plays our live radio stream. Say stop or pause to stop \
             playback, or resume to pick it back up."
        }
        (Language::English, Message::Stop) => "Goodbye.",
        (Language::English, Message::Resume) => "Resuming {0}.",
        (Language::English, Message::Unhandled) => "Sorry, I didn't catch that. Goodbye.",
        (Language::English, Message::CannotSkip) => {
            "This is a live stream, so skipping between tracks is not possible."
        }
        (Language::English, Message::NotPossible) => {
            "That is not possible while listening to a live stream."
        }

        (Language::Polish, Message::Welcome) => {
            "Witamy w {0}. Zaczynamy transmisję na żywo."
        }
        (Language::Polish, Message::Help) => {
            "{0} odtwarza nasz strumień radiowy na żywo. Powiedz stop albo \
             pauza, aby zatrzymać odtwarzanie, albo wznów, aby wrócić."
        }
        (Language::Polish, Message::Stop) => "Do usłyszenia.",
        (Language::Polish, Message::Resume) => "Wznawiam {0}.",
        (Language::Polish, Message::Unhandled) => {
            "Przepraszam, nie zrozumiałem. Do usłyszenia."
        }
        (Language::Polish, Message::CannotSkip) => {
            "To transmisja na żywo, przeskakiwanie utworów nie jest możliwe."
        }
        (Language::Polish, Message::NotPossible) => {
            "To nie jest możliwe podczas słuchania transmisji na żywo."
        }
    }
}

/// Resolves a message for the given locale.
pub fn text(locale: &str, message: Message) -> String {
    template(language(locale), message).to_string()
}

/// Resolves a message and substitutes the station title for `{0}`.
pub fn text_with_title(locale: &str, message: Message, title: &str) -> String {
    template(language(locale), message).replace("{0}", title)
}
