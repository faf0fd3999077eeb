// SPDX-License-Identifier: MPL-2.0
//! Media URL classification.
//!
//! Recognizes the video hosts the APOD archive links to and derives embed and
//! thumbnail URLs from the URL alone. Everything here is pure: no network, no
//! view state.

use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Extensions treated as directly displayable pictures.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff"];

/// What a media URL points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    /// A picture file.
    Image,
    /// A YouTube video, with its video id.
    YouTube { id: String },
    /// A Vimeo video, with its numeric id.
    Vimeo { id: String },
    /// Already an embeddable player URL of a known host.
    Embed { url: String },
    Unknown,
}

impl MediaSource {
    /// Player URL for the lightbox, if the source can be embedded.
    #[must_use]
    pub fn embed_url(&self) -> Option<String> {
        match self {
            MediaSource::YouTube { id } => {
                Some(format!("https://www.youtube.com/embed/{id}?rel=0&autoplay=1"))
            }
            MediaSource::Vimeo { id } => {
                Some(format!("https://player.vimeo.com/video/{id}?autoplay=1"))
            }
            MediaSource::Embed { url } => Some(url.clone()),
            MediaSource::Image | MediaSource::Unknown => None,
        }
    }

    /// Thumbnail URL derivable without a network call.
    ///
    /// Only YouTube thumbnails follow a fixed pattern; Vimeo needs its oEmbed
    /// endpoint (see [`crate::media::thumbnail`]).
    #[must_use]
    pub fn thumbnail_url(&self) -> Option<String> {
        match self {
            MediaSource::YouTube { id } => {
                Some(format!("https://img.youtube.com/vi/{id}/hqdefault.jpg"))
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn is_vimeo(&self) -> bool {
        matches!(self, MediaSource::Vimeo { .. })
    }
}

fn youtube_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"(?i)(?:youtube(?:-nocookie)?\.com/(?:watch\?v=|embed/)|youtu\.be/)([A-Za-z0-9_-]{6,})",
        )
        .expect("youtube pattern is valid")
    })
}

fn vimeo_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)vimeo\.com/(?:video/)?(\d+)").expect("vimeo pattern is valid"))
}

/// Classifies a media URL. YouTube is checked before Vimeo.
#[must_use]
pub fn classify(url: &str) -> MediaSource {
    let url = url.trim();
    if url.is_empty() {
        return MediaSource::Unknown;
    }

    if let Some(id) = capture(youtube_pattern(), url) {
        return MediaSource::YouTube { id };
    }
    if let Some(id) = capture(vimeo_pattern(), url) {
        return MediaSource::Vimeo { id };
    }
    if url.contains("youtube.com/embed") || url.contains("player.vimeo.com") {
        return MediaSource::Embed {
            url: url.to_string(),
        };
    }
    if has_image_extension(url) {
        return MediaSource::Image;
    }
    MediaSource::Unknown
}

fn capture(pattern: &Regex, url: &str) -> Option<String> {
    pattern
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn has_image_extension(url: &str) -> bool {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn youtube_watch_and_short_links() {
        let expected = MediaSource::YouTube {
            id: "dQw4w9WgXcQ".into(),
        };
        assert_eq!(classify("https://www.youtube.com/watch?v=dQw4w9WgXcQ"), expected);
        assert_eq!(classify("https://youtu.be/dQw4w9WgXcQ"), expected);
        assert_eq!(classify("https://www.youtube.com/embed/dQw4w9WgXcQ?rel=0"), expected);
        assert_eq!(
            classify("https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ"),
            expected
        );
    }

    #[test]
    fn youtube_match_is_case_insensitive() {
        assert!(matches!(
            classify("HTTPS://WWW.YOUTUBE.COM/WATCH?V=abcdef12"),
            MediaSource::YouTube { .. }
        ));
    }

    #[test]
    fn youtube_ids_need_six_characters() {
        assert_eq!(
            classify("https://www.youtube.com/embed/abc"),
            MediaSource::Embed {
                url: "https://www.youtube.com/embed/abc".into()
            }
        );
    }

    #[test]
    fn vimeo_links_and_player_links() {
        let expected = MediaSource::Vimeo { id: "76979871".into() };
        assert_eq!(classify("https://vimeo.com/76979871"), expected);
        assert_eq!(classify("https://player.vimeo.com/video/76979871"), expected);
    }

    #[test]
    fn embed_urls() {
        let yt = classify("https://youtu.be/dQw4w9WgXcQ");
        assert_eq!(
            yt.embed_url().as_deref(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ?rel=0&autoplay=1")
        );
        let vimeo = classify("https://vimeo.com/123456");
        assert_eq!(
            vimeo.embed_url().as_deref(),
            Some("https://player.vimeo.com/video/123456?autoplay=1")
        );
        assert_eq!(classify("https://example.org/clip.mp4").embed_url(), None);
    }

    #[test]
    fn only_youtube_thumbnails_are_derived() {
        assert_eq!(
            classify("https://youtu.be/dQw4w9WgXcQ").thumbnail_url().as_deref(),
            Some("https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg")
        );
        assert_eq!(classify("https://vimeo.com/123456").thumbnail_url(), None);
    }

    #[test]
    fn image_files_are_recognized() {
        assert_eq!(
            classify("https://apod.nasa.gov/apod/image/2401/M31.JPG"),
            MediaSource::Image
        );
        assert_eq!(
            classify("https://example.org/pic.png?size=large"),
            MediaSource::Image
        );
    }

    #[test]
    fn everything_else_is_unknown() {
        assert_eq!(classify(""), MediaSource::Unknown);
        assert_eq!(
            classify("https://apod.nasa.gov/apod/ap240101.html"),
            MediaSource::Unknown
        );
        assert_eq!(classify("https://example.org/clip.mp4"), MediaSource::Unknown);
    }
}
