//! Photo grids and the lightbox that cycles through them
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::constants::GRID_ROW_CELLS;

const IMAGE_EXTENSIONS: [&str; 5] = [".png", ".jpg", ".jpeg", ".gif", ".webp"];

/// Photos belonging to one year block on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GallerySection {
    pub year: String,
    pub images: Vec<String>,
}

impl GallerySection {
    /// Absolute URLs of this section's images under `base`.
    #[must_use]
    pub fn image_urls(&self, base: &str) -> Vec<String> {
        let base = base.trim_end_matches('/');
        self.images
            .iter()
            .map(|file| format!("{base}/{}/{file}", self.year))
            .collect()
    }

    /// Id of the button that opens this section in the lightbox.
    #[must_use]
    pub fn button_id(&self) -> String {
        format!("showPhotos{}", self.year)
    }
}

/// How many cells the grid shows for `available` images: one, two or three rows.
#[must_use]
pub const fn grid_capacity(available: usize) -> usize {
    if available < GRID_ROW_CELLS * 2 {
        GRID_ROW_CELLS
    } else if available < GRID_ROW_CELLS * 3 {
        GRID_ROW_CELLS * 2
    } else {
        GRID_ROW_CELLS * 3
    }
}

fn is_image(file: &str) -> bool {
    let lower = file.to_ascii_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Pick a shuffled subset of image files sized to [`grid_capacity`].
pub fn select_grid_images<R: Rng + ?Sized>(files: &[String], rng: &mut R) -> Vec<String> {
    let mut images: Vec<String> = files.iter().filter(|f| is_image(f)).cloned().collect();
    images.shuffle(rng);
    images.truncate(grid_capacity(images.len()));
    images
}

/// Lightbox state: the list being browsed and the current position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    images: Vec<String>,
    index: usize,
    open: bool,
}

impl Gallery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `images` starting at `start` (clamped to the list).
    ///
    /// An empty list leaves the lightbox closed and returns `false`.
    pub fn open(&mut self, images: Vec<String>, start: usize) -> bool {
        if images.is_empty() {
            log::debug!("gallery: nothing to show");
            self.close();
            return false;
        }
        self.index = start.min(images.len().saturating_sub(1));
        self.images = images;
        self.open = true;
        true
    }

    pub fn close(&mut self) {
        self.open = false;
        self.images.clear();
        self.index = 0;
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    pub fn next(&mut self) {
        if !self.images.is_empty() {
            self.index = (self.index + 1) % self.images.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.images.is_empty() {
            let len = self.images.len();
            self.index = (self.index + len - 1) % len;
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.images.get(self.index).map(String::as_str)
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// `"{position} / {len}"`, 1-based.
    #[must_use]
    pub fn counter(&self) -> String {
        format!("{} / {}", self.index + 1, self.images.len())
    }

    /// Arrows only make sense with more than one image.
    #[must_use]
    pub fn shows_arrows(&self) -> bool {
        self.images.len() > 1
    }
}
