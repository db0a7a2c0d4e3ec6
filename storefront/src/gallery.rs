//! Gallery controller: which product image is showing.
//!
//! The state is a single index into a fixed image list. `next`/`prev` wrap
//! around; `select` ignores indices outside the list. Exactly one thumbnail is
//! active at a time, and the hero image always mirrors it.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use serde::{Deserialize, Serialize};

use crate::consts::THUMB_MARKER;

/// One product image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    /// Full-size source shown in the hero slot.
    pub full: String,
    /// Thumbnail source shown in the strip.
    pub thumb: String,
    /// Short label, e.g. `"Front"`.
    pub alt: String,
}

impl GalleryImage {
    /// Image reference stored on a cart line: the thumbnail without its marker.
    #[must_use]
    pub fn cart_image(&self) -> String {
        self.thumb.replacen(THUMB_MARKER, "", 1)
    }
}

/// Render state for one thumbnail button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbView {
    pub index: usize,
    pub src: String,
    pub alt: String,
    /// Drives both the `is-active` class and `aria-selected`.
    pub active: bool,
}

/// Render state for the hero image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroView {
    pub src: String,
    pub alt: String,
}

/// Selected-image state machine over `[0, images.len())`.
#[derive(Debug, Clone)]
pub struct Gallery {
    title: String,
    images: Vec<GalleryImage>,
    current: usize,
}

impl Gallery {
    /// New gallery showing the first image. `title` prefixes hero alt text.
    pub fn new(title: impl Into<String>, images: Vec<GalleryImage>) -> Self {
        Self { title: title.into(), images, current: 0 }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_image(&self) -> Option<&GalleryImage> {
        self.images.get(self.current)
    }

    /// Jump to `index`. Returns `false` and leaves state alone when out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            return false;
        }
        self.current = index;
        true
    }

    pub fn next(&mut self) {
        let n = self.images.len();
        if n > 0 {
            self.current = (self.current + 1) % n;
        }
    }

    pub fn prev(&mut self) {
        let n = self.images.len();
        if n > 0 {
            self.current = (self.current + n - 1) % n;
        }
    }

    /// Keyboard navigation on the hero image. Returns whether the key was used.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match key {
            "ArrowLeft" => self.prev(),
            "ArrowRight" => self.next(),
            _ => return false,
        }
        true
    }

    #[must_use]
    pub fn hero(&self) -> Option<HeroView> {
        self.current_image().map(|image| HeroView {
            src: image.full.clone(),
            alt: format!("{} \u{2014} {}", self.title, image.alt),
        })
    }

    #[must_use]
    pub fn thumbs(&self) -> Vec<ThumbView> {
        self.images
            .iter()
            .enumerate()
            .map(|(index, image)| ThumbView {
                index,
                src: image.thumb.clone(),
                alt: image.alt.clone(),
                active: index == self.current,
            })
            .collect()
    }
}
