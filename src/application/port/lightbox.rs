// SPDX-License-Identifier: MPL-2.0
//! Lightbox view port.
//!
//! [`LightboxView`] is the rendering surface owned by the host: an overlay
//! with a media container, a caption and an explanation. The controller in
//! [`crate::lightbox`] decides *what* to show; the view only materializes it.

/// Media placed in the lightbox's media container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightboxContent {
    /// Display the picture directly.
    Image { url: String, alt: String },
    /// Embed a player (autoplaying iframe or equivalent).
    Player { embed_url: String },
    /// No embeddable form: offer to open the video externally.
    ExternalVideo { url: String },
    /// No media for the date: link to its reference page.
    ReferencePage { url: String },
}

/// Rendering surface for the lightbox.
pub trait LightboxView {
    /// Creates the overlay. Called once, on the first open.
    fn mount(&mut self);

    /// Shows or hides the overlay.
    fn set_visible(&mut self, visible: bool);

    /// Replaces the media container's content.
    fn show_media(&mut self, content: &LightboxContent);

    /// Empties the media container. Must stop any playing video.
    fn clear_media(&mut self);

    fn set_caption(&mut self, caption: &str);

    fn set_explanation(&mut self, explanation: &str);

    /// Starts loading `url` in the background. Must not block.
    fn preload(&mut self, url: &str);

    /// Starts routing keyboard input to the lightbox.
    fn attach_keyboard(&mut self);

    /// Stops routing keyboard input to the lightbox.
    fn detach_keyboard(&mut self);
}
