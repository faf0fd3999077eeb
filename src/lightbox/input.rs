// SPDX-License-Identifier: MPL-2.0
//! Lightbox input events and swipe detection.

use crate::config::SWIPE_THRESHOLD_PX;

/// Navigation step. The lightbox only ever moves by one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Index reached from `index` in a list of `len` slots, wrapping around.
    ///
    /// `len` must be non-zero.
    #[must_use]
    pub fn step(self, index: usize, len: usize) -> usize {
        match self {
            Direction::Previous => (index + len - 1) % len,
            Direction::Next => (index + 1) % len,
        }
    }
}

/// Keys the lightbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Maps a DOM-style key name (`"Escape"`, `"ArrowLeft"`, ...).
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Key::Escape,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            _ => Key::Other,
        }
    }
}

/// Everything the host forwards to the lightbox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightboxInput {
    Key(Key),
    CloseButton,
    PreviousButton,
    NextButton,
    /// A click on the dimmed area around the content.
    BackdropClick,
    /// `touches` is the number of simultaneous contacts.
    TouchStart { x: f32, touches: usize },
    TouchMove { x: f32 },
    TouchEnd,
}

/// Tracks one horizontal touch drag.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    start_x: f32,
    current_x: f32,
    touching: bool,
}

impl SwipeTracker {
    /// Begins a drag. Multi-touch gestures are ignored.
    pub fn start(&mut self, x: f32, touches: usize) {
        if touches == 1 {
            self.touching = true;
            self.start_x = x;
            self.current_x = x;
        }
    }

    pub fn update(&mut self, x: f32) {
        if self.touching {
            self.current_x = x;
        }
    }

    /// Ends the drag, returning the navigation it asks for.
    ///
    /// Dragging right (finger moving towards larger `x`) goes to the previous
    /// slot, dragging left to the next one. Drags of 50px or less do nothing.
    pub fn finish(&mut self) -> Option<Direction> {
        if !self.touching {
            return None;
        }
        let dx = self.current_x - self.start_x;
        self.reset();
        if dx > SWIPE_THRESHOLD_PX {
            Some(Direction::Previous)
        } else if dx < -SWIPE_THRESHOLD_PX {
            Some(Direction::Next)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_touching(&self) -> bool {
        self.touching
    }
}
