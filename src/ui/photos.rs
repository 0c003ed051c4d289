/// Decoded photo handles, keyed by item id
///
/// Items never change after creation, so a handle decoded once stays
/// valid until its item is deleted.

use iced::widget::image::Handle;
use std::collections::HashMap;

use crate::photo::data_url::{self, MIN_IMAGE_URL_LEN};
use crate::state::data::Item;

#[derive(Debug, Default)]
pub struct PhotoCache {
    revision: Option<u64>,
    handles: HashMap<String, Handle>,
}

impl PhotoCache {
    /// Sync with the catalog; decodes only photos not already cached
    pub fn refresh(&mut self, revision: u64, items: &[Item]) {
        if self.revision == Some(revision) {
            return;
        }

        let mut handles = HashMap::with_capacity(items.len());
        for item in items {
            let handle = self
                .handles
                .remove(&item.id)
                .or_else(|| decode_photo(&item.image_url));
            if let Some(handle) = handle {
                handles.insert(item.id.clone(), handle);
            }
        }

        self.handles = handles;
        self.revision = Some(revision);
    }

    /// `None` means the card shows the placeholder
    pub fn get(&self, item_id: &str) -> Option<&Handle> {
        self.handles.get(item_id)
    }
}

/// Turn a stored image reference into something iced can draw.
/// Missing, truncated, non-image or undecodable references yield `None`.
pub fn decode_photo(image_url: &str) -> Option<Handle> {
    if image_url.len() < MIN_IMAGE_URL_LEN {
        return None;
    }

    if !data_url::mime_type(image_url)?.starts_with("image/") {
        return None;
    }

    let bytes = data_url::decode(image_url)?;
    let rgba = image::load_from_memory(&bytes).ok()?.to_rgba8();
    Some(Handle::from_rgba(rgba.width(), rgba.height(), rgba.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::Category;
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    fn png_url() -> String {
        let img = DynamicImage::ImageRgb8(RgbImage::from_fn(32, 32, |x, y| {
            Rgb([(x * 8) as u8, (y * 8) as u8, ((x ^ y) * 8) as u8])
        }));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        data_url::encode("image/png", &bytes)
    }

    fn item(id: &str, image_url: String) -> Item {
        Item {
            id: id.to_string(),
            name: id.to_string(),
            image_url,
            category: Category::Top,
        }
    }

    #[test]
    fn test_broken_references_have_no_handle() {
        assert!(decode_photo("").is_none());
        assert!(decode_photo("data:image/png;base64,AAAA").is_none());

        let not_an_image = data_url::encode("image/png", &[7u8; 200]);
        assert!(decode_photo(&not_an_image).is_none());
    }

    #[test]
    fn test_corrupt_body_has_no_handle() {
        let mut bytes = b"\x89PNG\r\n\x1a\n".to_vec();
        bytes.extend_from_slice(&[0u8; 200]);
        let url = data_url::encode("image/png", &bytes);

        assert!(url.len() >= MIN_IMAGE_URL_LEN);
        assert!(decode_photo(&url).is_none());
    }

    #[test]
    fn test_truncated_png_has_no_handle() {
        let full = data_url::decode(&png_url()).unwrap();
        let url = data_url::encode("image/png", &full[..full.len() / 2]);
        assert!(decode_photo(&url).is_none());
    }

    #[test]
    fn test_valid_photo_decodes() {
        assert!(decode_photo(&png_url()).is_some());
    }

    #[test]
    fn test_refresh_drops_deleted_items() {
        let mut cache = PhotoCache::default();
        let items = vec![item("a", png_url()), item("b", png_url()), item("c", String::new())];

        cache.refresh(1, &items);
        assert!(cache.get("a").is_some());
        assert!(cache.get("b").is_some());
        assert!(cache.get("c").is_none());

        cache.refresh(2, &items[1..]);
        assert!(cache.get("a").is_none());
        assert!(cache.get("b").is_some());
    }
}
