//! Caption tracks discovered next to a media file.

/// Track kind, as understood by the `<track kind>` attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CaptionKind {
    #[default]
    Captions,
}

impl CaptionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Captions => "captions",
        }
    }
}

/// A caption file confirmed to exist on the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Caption {
    pub kind: CaptionKind,
    /// Label shown in the player's track menu (the upper-cased format).
    pub label: String,
    /// URL the player loads the track from.
    pub src_url: String,
    /// BCP 47 language tag.
    pub language_tag: String,
}

impl Caption {
    /// Caption for a subtitle file of the given extension.
    pub fn for_subtitle(extension: &str, src_url: String, language_tag: &str) -> Self {
        Self {
            kind: CaptionKind::Captions,
            label: extension.to_uppercase(),
            src_url,
            language_tag: language_tag.to_string(),
        }
    }
}
