//! Image gallery ordering and carousel navigation.
//!
//! DESIGN
//! ======
//! The viewable order is every default image (array order) followed by every
//! non-default image (array order). Nothing is deduplicated or capped; the
//! page layout only addresses the first five default images directly.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use crate::config::NO_IMAGE_URL;
use crate::net::types::Image;

/// Fixed slots in the detail-page image grid.
pub const GALLERY_SLOTS: usize = 5;

/// Grid slots that open the carousel when clicked.
pub const CLICKABLE_SLOTS: [usize; 3] = [2, 3, 4];

/// Room images partitioned into primary (default) and extra placement.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gallery {
    defaults: Vec<Image>,
    extras: Vec<Image>,
}

impl Gallery {
    pub fn from_images(images: &[Image]) -> Self {
        let (defaults, extras) = images.iter().cloned().partition(|image| image.is_default);
        Self { defaults, extras }
    }

    pub fn defaults(&self) -> &[Image] {
        &self.defaults
    }

    pub fn extras(&self) -> &[Image] {
        &self.extras
    }

    /// Full viewable order: defaults first, then extras.
    pub fn ordered(&self) -> Vec<Image> {
        self.defaults.iter().chain(self.extras.iter()).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.defaults.len() + self.extras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// URL for a grid slot; slots only ever show default images.
    pub fn slot_url(&self, slot: usize) -> String {
        url_or_placeholder(self.defaults.get(slot))
    }

    /// URL at `index` of the full viewable order.
    pub fn image_url(&self, index: usize) -> String {
        let image = if index < self.defaults.len() {
            self.defaults.get(index)
        } else {
            self.extras.get(index - self.defaults.len())
        };
        url_or_placeholder(image)
    }
}

fn url_or_placeholder(image: Option<&Image>) -> String {
    image
        .map(|i| i.url.trim())
        .filter(|url| !url.is_empty())
        .unwrap_or(NO_IMAGE_URL)
        .to_owned()
}

/// Cyclic position inside the full-screen image modal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    pub index: usize,
    pub len: usize,
}

impl Carousel {
    /// Open at `index`, clamped into the gallery.
    pub fn open(index: usize, len: usize) -> Self {
        Self { index: index.min(len.saturating_sub(1)), len }
    }

    /// Advance; the last image wraps to the first.
    #[must_use]
    pub fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self { index: (self.index + 1) % self.len, ..self }
    }

    /// Retreat; the first image wraps to the last.
    #[must_use]
    pub fn prev(self) -> Self {
        if self.len == 0 {
            return self;
        }
        let index = if self.index == 0 { self.len - 1 } else { self.index - 1 };
        Self { index, ..self }
    }

    /// `"Hình ảnh {n} / {total}"` header text.
    pub fn counter_label(&self) -> String {
        if self.len == 0 {
            return "Hình ảnh 0 / 0".to_owned();
        }
        format!("Hình ảnh {} / {}", self.index + 1, self.len)
    }
}

/// Keyboard commands understood by the image modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKey {
    Close,
    Next,
    Prev,
}

impl ModalKey {
    /// Map a `KeyboardEvent.key` value; other keys are ignored.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Close),
            "ArrowRight" => Some(Self::Next),
            "ArrowLeft" => Some(Self::Prev),
            _ => None,
        }
    }
}
