// SPDX-License-Identifier: MPL-2.0
//! Full-screen viewer for one gallery slot at a time.
//!
//! # State machine
//!
//! ```text
//! Closed --open(i)--> Open(i) --navigate(±1)--> Open((i ± 1 + n) % n) --close--> Closed
//! ```
//!
//! The controller owns all lightbox state. Keyboard routing is attached on the
//! `Closed -> Open` transition and detached on `Open -> Closed`, never in
//! between, so a closed lightbox never sees key presses.

pub mod input;
pub mod preload;

pub use input::{Direction, Key, LightboxInput, SwipeTracker};
pub use preload::PreloadTracker;

use std::sync::Arc;

use crate::application::port::{LightboxContent, LightboxView};
use crate::config::Config;
use crate::domain::{reference_page_url, GallerySlot, SlotMedia};
use crate::error::LightboxError;
use crate::media::{classify, MediaSource};

/// Content the lightbox shows for `slot`.
#[must_use]
pub fn content_for(slot: &GallerySlot, reference_base: &str) -> LightboxContent {
    match &slot.media {
        SlotMedia::Image(image) => LightboxContent::Image {
            url: image.url.clone(),
            alt: image.title.clone(),
        },
        SlotMedia::Video(video) => {
            let source = classify(&video.url);
            match source.embed_url() {
                Some(embed_url) => LightboxContent::Player { embed_url },
                None if source == MediaSource::Image => LightboxContent::Image {
                    url: video.url.clone(),
                    alt: video.title.clone(),
                },
                None => LightboxContent::ExternalVideo {
                    url: video.url.clone(),
                },
            }
        }
        SlotMedia::Future | SlotMedia::Empty => LightboxContent::ReferencePage {
            url: reference_page_url(reference_base, slot.date),
        },
    }
}

#[derive(Debug, Default)]
enum State {
    #[default]
    Closed,
    Open {
        index: usize,
        slots: Arc<[GallerySlot]>,
    },
}

/// Drives a [`LightboxView`] through open, navigate and close.
#[derive(Debug)]
pub struct LightboxController<V: LightboxView> {
    view: V,
    state: State,
    mounted: bool,
    swipe: SwipeTracker,
    preloads: PreloadTracker,
    reference_base: String,
}

impl<V: LightboxView> LightboxController<V> {
    pub fn new(view: V, reference_base: impl Into<String>) -> Self {
        Self {
            view,
            state: State::Closed,
            mounted: false,
            swipe: SwipeTracker::default(),
            preloads: PreloadTracker::default(),
            reference_base: reference_base.into(),
        }
    }

    /// Controller using the configured reference base and preload cache size.
    pub fn from_config(view: V, config: &Config) -> Self {
        Self::new(view, config.api.reference_base_url.as_str())
            .with_preload_capacity(config.lightbox.preload_cache_size)
    }

    #[must_use]
    pub fn with_preload_capacity(mut self, capacity: usize) -> Self {
        self.preloads = PreloadTracker::new(capacity);
        self
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, State::Open { .. })
    }

    /// Index of the displayed slot while open.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            State::Open { index, .. } => Some(index),
            State::Closed => None,
        }
    }

    #[must_use]
    pub fn current_slot(&self) -> Option<&GallerySlot> {
        match &self.state {
            State::Open { index, slots } => slots.get(*index),
            State::Closed => None,
        }
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Shows `slots[index]`, opening the lightbox if needed.
    ///
    /// Also asks the view to preload the neighbouring slots' assets.
    ///
    /// # Errors
    ///
    /// Returns [`LightboxError::IndexOutOfRange`] if `index` is not a slot; the
    /// lightbox is left untouched.
    pub fn open(&mut self, index: usize, slots: Arc<[GallerySlot]>) -> Result<(), LightboxError> {
        let len = slots.len();
        let Some(slot) = slots.get(index) else {
            return Err(LightboxError::IndexOutOfRange { index, len });
        };

        if !self.mounted {
            self.view.mount();
            self.mounted = true;
        }

        self.view.clear_media();
        self.view
            .show_media(&content_for(slot, &self.reference_base));
        self.view.set_caption(&slot.caption());
        self.view.set_explanation(slot.explanation());

        for neighbour in [Direction::Previous.step(index, len), Direction::Next.step(index, len)] {
            if let Some(url) = slots[neighbour].preload_asset() {
                if self.preloads.claim(url) {
                    self.view.preload(url);
                }
            }
        }

        if !self.is_open() {
            self.view.set_visible(true);
            self.view.attach_keyboard();
        }
        self.state = State::Open { index, slots };
        Ok(())
    }

    /// Moves one slot in `direction`, wrapping around. No-op while closed.
    ///
    /// Returns the new index.
    pub fn navigate(&mut self, direction: Direction) -> Option<usize> {
        let (index, slots) = match &self.state {
            State::Open { index, slots } => (*index, Arc::clone(slots)),
            State::Closed => return None,
        };
        let next = direction.step(index, slots.len());
        // `next` is always in range for a non-empty open gallery.
        self.open(next, slots).ok()?;
        Some(next)
    }

    /// Closes the lightbox and empties the media container.
    pub fn close(&mut self) {
        if self.mounted {
            self.view.clear_media();
        }
        if matches!(std::mem::take(&mut self.state), State::Open { .. }) {
            self.view.set_visible(false);
            self.view.detach_keyboard();
        }
        self.swipe.reset();
    }

    /// Applies one host input event.
    pub fn handle(&mut self, input: LightboxInput) {
        if !self.is_open() {
            return;
        }
        match input {
            LightboxInput::Key(Key::Escape)
            | LightboxInput::CloseButton
            | LightboxInput::BackdropClick => self.close(),
            LightboxInput::Key(Key::ArrowLeft) | LightboxInput::PreviousButton => {
                self.navigate(Direction::Previous);
            }
            LightboxInput::Key(Key::ArrowRight) | LightboxInput::NextButton => {
                self.navigate(Direction::Next);
            }
            LightboxInput::Key(Key::Other) => {}
            LightboxInput::TouchStart { x, touches } => self.swipe.start(x, touches),
            LightboxInput::TouchMove { x } => self.swipe.update(x),
            LightboxInput::TouchEnd => {
                if let Some(direction) = self.swipe.finish() {
                    self.navigate(direction);
                }
            }
        }
    }
}

impl<V: LightboxView> Drop for LightboxController<V> {
    fn drop(&mut self) {
        if self.is_open() {
            self.view.detach_keyboard();
        }
    }
}
