//! Audio asset resolver: maps a request locale to the station stream and
//! its display metadata. Pure lookup over `'static` data.

use truly_types::{AudioItemMetadata, Card, CardImage};

/// A live station: where to stream from plus what to show on screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Station {
    pub stream_url: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub small_image_url: &'static str,
    pub large_image_url: &'static str,
}

impl Station {
    /// The display card shown in the companion app.
    pub fn card(&self) -> Card {
        Card::standard(
            self.title,
            self.subtitle,
            CardImage {
                small_image_url: self.small_image_url.to_string(),
                large_image_url: self.large_image_url.to_string(),
            },
        )
    }

    /// Now-playing metadata for devices with screens.
    pub fn metadata(&self) -> AudioItemMetadata {
        AudioItemMetadata {
            title: Some(self.title.to_string()),
            subtitle: Some(self.subtitle.to_string()),
        }
    }
}

const ENGLISH_STATION: Station = Station {
    stream_url: "https://live.adtonos.com/yours-truly/en/playlist.m3u8",
    title: "Yours Truly",
    subtitle: "Live radio, tailored to you",
    small_image_url: "https://cdn.adtonos.com/yours-truly/card-720.png",
    large_image_url: "https://cdn.adtonos.com/yours-truly/card-1200.png",
};

const POLISH_STATION: Station = Station {
    stream_url: "https://live.adtonos.com/yours-truly/pl/playlist.m3u8",
    title: "Yours Truly Polska",
    subtitle: "Radio na żywo, dopasowane do Ciebie",
    small_image_url: "https://cdn.adtonos.com/yours-truly/card-720.png",
    large_image_url: "https://cdn.adtonos.com/yours-truly/card-1200.png",
};

/// Resolves the station for a request locale. English is the default.
pub fn station_for_locale(locale: &str) -> &'static Station {
    match locale.split(['-', '_']).next() {
        Some("pl") => &POLISH_STATION,
        _ => &ENGLISH_STATION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polish_locales_resolve_to_the_polish_stream() {
        assert_eq!(station_for_locale("pl-PL").title, "Yours Truly Polska");
        assert_eq!(station_for_locale("pl").title, "Yours Truly Polska");
    }

    #[test]
    fn everything_else_falls_back_to_english() {
        assert_eq!(station_for_locale("en-US").title, "Yours Truly");
        assert_eq!(station_for_locale("fr-FR").title, "Yours Truly");
        assert_eq!(station_for_locale("").title, "Yours Truly");
    }

    #[test]
    fn card_carries_station_metadata() {
        let card = station_for_locale("en-US").card();
        assert_eq!(card.card_type, "Standard");
        assert_eq!(card.title.as_deref(), Some("Yours Truly"));
        assert!(card.image.is_some());
    }
}
