/// Photo ingestion for new items
///
/// Uploads taller than the configured bound are downscaled (aspect ratio
/// preserved) and re-encoded as JPEG. Anything within the bound is
/// embedded byte-for-byte in its original format. No cropping, no
/// orientation correction.

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use std::path::PathBuf;
use tracing::{debug, info};

use super::data_url;
use crate::config::AppConfig;
use crate::error::{Result, WardrobeError};

/// Limits applied to every uploaded photo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOptions {
    pub max_height: u32,
    pub jpeg_quality: u8,
}

impl From<&AppConfig> for IngestOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            max_height: config.max_image_height,
            jpeg_quality: config.jpeg_quality,
        }
    }
}

/// Read a photo from disk and ingest it off the UI thread.
/// Returns the `data:` URL to store on the item.
pub async fn ingest_file(path: PathBuf, options: IngestOptions) -> Result<String> {
    let bytes = tokio::fs::read(&path).await?;
    info!("Ingesting {} ({} KB)", path.display(), bytes.len() / 1024);

    // Decode/resize is CPU-bound
    tokio::task::spawn_blocking(move || ingest(&bytes, options))
        .await
        .map_err(|e| WardrobeError::TaskJoin(e.to_string()))?
}

/// Convert raw file bytes into an embeddable `data:` URL
pub fn ingest(bytes: &[u8], options: IngestOptions) -> Result<String> {
    let format = image::guess_format(bytes)?;
    let img = image::load_from_memory_with_format(bytes, format)?;

    if img.height() <= options.max_height {
        debug!("{}x{} within bound, passing through", img.width(), img.height());
        return Ok(data_url::encode(format.to_mime_type(), bytes));
    }

    let (width, height) = scaled_size(img.width(), img.height(), options.max_height);
    let resized = img.resize_exact(width, height, FilterType::Lanczos3);

    // JPEG has no alpha channel
    let rgb = resized.to_rgb8();
    let mut encoded = Vec::new();
    JpegEncoder::new_with_quality(&mut encoded, options.jpeg_quality).encode_image(&rgb)?;

    info!(
        "Downscaled {}x{} -> {}x{} ({} KB)",
        img.width(),
        img.height(),
        width,
        height,
        encoded.len() / 1024
    );
    Ok(data_url::encode("image/jpeg", &encoded))
}

/// Proportional size with the height clamped to `max_height`
fn scaled_size(width: u32, height: u32, max_height: u32) -> (u32, u32) {
    let ratio = max_height as f64 / height as f64;
    let scaled_width = (width as f64 * ratio).round() as u32;
    (scaled_width.max(1), max_height)
}
