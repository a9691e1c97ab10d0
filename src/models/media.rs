//! Video container detection for in-page preview.

use crate::utils::path;

/// Video containers the preview overlay plays in place.
///
/// The same set decides both keyboard activation and click interception.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaType {
    Mp4,
    WebM,
    Ogg,
    Matroska,
}

impl MediaType {
    /// Detect a video container from a file name or URL extension.
    pub fn from_path(path: &str) -> Option<Self> {
        match path::extension(path).map(|s| s.to_lowercase()).as_deref() {
            Some("mp4") => Some(Self::Mp4),
            Some("webm") => Some(Self::WebM),
            Some("ogg") => Some(Self::Ogg),
            Some("mkv") => Some(Self::Matroska),
            _ => None,
        }
    }

    /// MIME type handed to the player along with the source URL.
    ///
    /// Matroska gets no hint: browsers that do not claim `video/x-matroska`
    /// skip a typed source outright, while an untyped one is sniffed and
    /// usually plays.
    pub fn mime(self) -> Option<&'static str> {
        match self {
            Self::Mp4 => Some("video/mp4"),
            Self::WebM => Some("video/webm"),
            Self::Ogg => Some("video/ogg"),
            Self::Matroska => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_detection() {
        assert_eq!(MediaType::from_path("movie.mp4"), Some(MediaType::Mp4));
        assert_eq!(MediaType::from_path("clips/intro.webm"), Some(MediaType::WebM));
        assert_eq!(MediaType::from_path("old.ogg"), Some(MediaType::Ogg));
        assert_eq!(MediaType::from_path("/tv/show.MKV"), Some(MediaType::Matroska));
        assert_eq!(MediaType::from_path("/v/movie.mp4?t=10"), Some(MediaType::Mp4));
    }

    #[test]
    fn test_non_video_paths() {
        assert_eq!(MediaType::from_path("readme.txt"), None);
        assert_eq!(MediaType::from_path("mp4"), None);
        assert_eq!(MediaType::from_path("archive.mp4/"), None);
        assert_eq!(MediaType::from_path("movie.srt"), None);
    }

    #[test]
    fn test_mime_types() {
        assert_eq!(MediaType::Mp4.mime(), Some("video/mp4"));
        assert_eq!(MediaType::WebM.mime(), Some("video/webm"));
        assert_eq!(MediaType::Matroska.mime(), None);
    }
}
