/// Item photo handling
///
/// This module handles:
/// - Downscaling uploads to a bounded height and re-encoding them as JPEG
/// - Embedding encoded photos in `data:` URLs stored inline on each item
/// - Decoding those URLs back to bytes for display

pub mod data_url;
pub mod ingest;
