//! Event settings and photo lists embedded at build time.
use paddlingen_core::{EventConfig, GallerySection, select_grid_images};
use rand::Rng;
use thiserror::Error;

const EVENT_JSON: &str = include_str!("../static/data/event.json");
const GALLERY_JSON: &str = include_str!("../static/data/gallery.json");

/// URL prefix of the per-year image folders.
pub const IMAGE_BASE: &str = "/static/images";

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[must_use]
pub fn load_event_config() -> EventConfig {
    EventConfig::from_json_or_default(EVENT_JSON)
}

/// Every year's full file list, newest section first as stored.
///
/// # Errors
/// Returns [`AssetError::Parse`] if the embedded gallery JSON is malformed.
pub fn load_gallery_sections() -> Result<Vec<GallerySection>, AssetError> {
    Ok(serde_json::from_str(GALLERY_JSON)?)
}

/// One year block ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoYear {
    pub year: String,
    /// Id of the button that opens this year in the lightbox.
    pub button_id: String,
    /// Shuffled, grid-sized image URLs; the lightbox browses them in this order.
    pub grid: Vec<String>,
}

/// Resolve every section to image URLs and pick its background grid.
pub fn photo_years<R: Rng + ?Sized>(rng: &mut R) -> Vec<PhotoYear> {
    let sections = load_gallery_sections().unwrap_or_else(|err| {
        log::error!("Failed to load gallery sections: {err}");
        Vec::new()
    });
    sections
        .into_iter()
        .map(|section| {
            let images = section.image_urls(IMAGE_BASE);
            PhotoYear {
                button_id: section.button_id(),
                grid: select_grid_images(&images, rng),
                year: section.year,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use paddlingen_core::grid_capacity;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn embedded_event_config_parses() {
        assert!(EventConfig::from_json(EVENT_JSON).is_ok());
        assert_eq!(load_event_config().unit_price, 900);
    }

    #[test]
    fn photo_years_respect_grid_capacity() {
        let full = load_gallery_sections().expect("gallery json");
        let mut rng = SmallRng::seed_from_u64(3);
        let years = photo_years(&mut rng);
        assert_eq!(full.len(), years.len());
        for (section, year) in full.iter().zip(&years) {
            assert_eq!(section.year, year.year);
            assert_eq!(year.button_id, format!("showPhotos{}", section.year));
            assert_eq!(
                year.grid.len(),
                section.images.len().min(grid_capacity(section.images.len()))
            );
        }
    }

    #[test]
    fn image_urls_live_under_year_folder() {
        let mut rng = SmallRng::seed_from_u64(1);
        let years = photo_years(&mut rng);
        for year in &years {
            let prefix = format!("{IMAGE_BASE}/{}/", year.year);
            assert!(year.grid.iter().all(|url| url.starts_with(&prefix)));
        }
    }
}
