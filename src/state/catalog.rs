/// The catalog owns the item and outfit collections.
///
/// Every mutation rewrites the affected collection in full to the
/// key-value store. A failed write is logged and the in-memory state
/// is kept as-is; memory and storage may diverge until the next
/// successful write.

use tracing::{error, info, warn};

use super::data::{Category, Item, Outfit};
use super::library::{KeyValueStore, ITEMS_KEY, OUTFITS_KEY};

pub struct Catalog<S: KeyValueStore> {
    store: S,
    items: Vec<Item>,
    outfits: Vec<Outfit>,
    /// Bumped on every in-memory change; derived views key on it
    revision: u64,
}

impl<S: KeyValueStore> Catalog<S> {
    /// Load both collections from the store.
    /// An absent key is an empty collection; an unreadable one is logged
    /// and also treated as empty.
    pub fn load(store: S) -> Self {
        let items: Vec<Item> = load_collection(&store, ITEMS_KEY);
        let outfits: Vec<Outfit> = load_collection(&store, OUTFITS_KEY);

        info!(
            "Catalog loaded with {} items and {} outfits",
            items.len(),
            outfits.len()
        );

        Catalog {
            store,
            items,
            outfits,
            revision: 0,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn outfits(&self) -> &[Outfit] {
        &self.outfits
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Add a new item. Returns `None` (and changes nothing) when the name
    /// is blank or there is no image data.
    pub fn add_item(&mut self, name: &str, category: Category, image_url: String) -> Option<Item> {
        if name.trim().is_empty() || image_url.is_empty() {
            return None;
        }

        let id = unique_id("item", self.items.iter().map(|item| item.id.as_str()));
        let item = Item {
            id,
            name: name.to_string(),
            image_url,
            category,
        };

        self.items.push(item.clone());
        self.revision += 1;
        self.persist_items();

        info!("Added item {} ({})", item.id, item.category);
        Some(item)
    }

    /// Remove an item by id. Outfits keep their reference to it.
    /// Returns whether an item was removed.
    pub fn delete_item(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            return false;
        }

        self.revision += 1;
        self.persist_items();
        info!("Deleted item {}", id);
        true
    }

    /// Save a new outfit. Returns `None` when the name is blank or no
    /// items are given.
    pub fn add_outfit(&mut self, name: &str, item_ids: &[String]) -> Option<Outfit> {
        if name.trim().is_empty() || item_ids.is_empty() {
            return None;
        }

        let id = unique_id("outfit", self.outfits.iter().map(|outfit| outfit.id.as_str()));
        let outfit = Outfit {
            id,
            name: name.to_string(),
            item_ids: item_ids.to_vec(),
        };

        self.outfits.push(outfit.clone());
        self.revision += 1;
        self.persist_outfits();

        info!("Saved outfit {} with {} items", outfit.id, outfit.item_ids.len());
        Some(outfit)
    }

    /// Remove an outfit by id. Returns whether an outfit was removed.
    pub fn delete_outfit(&mut self, id: &str) -> bool {
        let before = self.outfits.len();
        self.outfits.retain(|outfit| outfit.id != id);
        if self.outfits.len() == before {
            return false;
        }

        self.revision += 1;
        self.persist_outfits();
        info!("Deleted outfit {}", id);
        true
    }

    fn persist_items(&mut self) {
        if let Err(e) = self.store.set(ITEMS_KEY, &self.items) {
            error!("Error saving items: {}", e);
        }
    }

    fn persist_outfits(&mut self) {
        if let Err(e) = self.store.set(OUTFITS_KEY, &self.outfits) {
            error!("Error saving outfits: {}", e);
        }
    }
}

fn load_collection<S, T>(store: &S, key: &str) -> Vec<T>
where
    S: KeyValueStore,
    T: serde::de::DeserializeOwned,
{
    match store.get::<Vec<T>>(key) {
        Ok(Some(values)) => values,
        Ok(None) => Vec::new(),
        Err(e) => {
            warn!("Error loading '{}', starting empty: {}", key, e);
            Vec::new()
        }
    }
}

/// Time-based id (`<prefix>_<unix millis>`), suffixed when a record
/// created in the same millisecond already holds it.
fn unique_id<'a>(prefix: &str, existing: impl Iterator<Item = &'a str> + Clone) -> String {
    let base = format!("{}_{}", prefix, chrono::Utc::now().timestamp_millis());
    let taken = |candidate: &str| existing.clone().any(|id| id == candidate);

    if !taken(&base) {
        return base;
    }

    let mut n = 1;
    loop {
        let candidate = format!("{}-{}", base, n);
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}
