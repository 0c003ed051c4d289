/// Shared data structures for the application state
///
/// These structs represent the catalog records that flow between
/// the key-value store and the UI layer. Field names are serialized
/// in camelCase (`imageUrl`, `itemIds`) so stored collections keep a
/// stable JSON shape.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of wardrobe items
///
/// Stored as a plain string. Values outside the four known categories
/// are kept verbatim in `Other` so rewriting the collection never
/// changes them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Default)]
#[serde(from = "String", into = "String")]
pub enum Category {
    #[default]
    Top,
    Bottom,
    Outerwear,
    Accessory,
    /// Never produced by the UI
    Other(String),
}

/// Canonical display order for category groups
pub const CATEGORIES: [Category; 4] = [
    Category::Top,
    Category::Bottom,
    Category::Outerwear,
    Category::Accessory,
];

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Top => "Top",
            Category::Bottom => "Bottom",
            Category::Outerwear => "Outerwear",
            Category::Accessory => "Accessory",
            Category::Other(name) => name,
        }
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Top" => Category::Top,
            "Bottom" => Category::Bottom,
            "Outerwear" => Category::Outerwear,
            "Accessory" => Category::Accessory,
            _ => Category::Other(name),
        }
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single cataloged clothing photo
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique time-based id (e.g., "item_1718000000000")
    pub id: String,
    pub name: String,
    /// Embedded image as a `data:` URL
    pub image_url: String,
    pub category: Category,
}

/// A named, ordered set of item references
///
/// `item_ids` may point at items that were deleted after the outfit
/// was saved; those are dropped at resolution time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Outfit {
    pub id: String,
    pub name: String,
    pub item_ids: Vec<String>,
}

/// An outfit joined against the current item collection
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOutfit {
    pub outfit: Outfit,
    /// Existing items only, in `item_ids` order
    pub items: Vec<Item>,
}

impl ResolvedOutfit {
    pub fn id(&self) -> &str {
        &self.outfit.id
    }

    pub fn name(&self) -> &str {
        &self.outfit.name
    }

    /// Whether the stored reference list (dangling ids included) names `item_id`
    pub fn references(&self, item_id: &str) -> bool {
        self.outfit.item_ids.iter().any(|id| id == item_id)
    }
}

/// Result of a random outfit draw
///
/// `outerwear` is `None` when the wardrobe has no outerwear at all;
/// it is absent from the result rather than an empty slot.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedOutfit {
    pub top: Item,
    pub bottom: Item,
    pub outerwear: Option<Item>,
}

impl GeneratedOutfit {
    /// Slots in display order, labelled by category
    pub fn slots(&self) -> Vec<(Category, &Item)> {
        let mut slots = vec![(Category::Top, &self.top), (Category::Bottom, &self.bottom)];
        if let Some(outerwear) = &self.outerwear {
            slots.push((Category::Outerwear, outerwear));
        }
        slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_json_shape() {
        let item = Item {
            id: "item_1".to_string(),
            name: "Red T-Shirt".to_string(),
            image_url: "data:image/png;base64,AAAA".to_string(),
            category: Category::Top,
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["imageUrl"], "data:image/png;base64,AAAA");
        assert_eq!(json["category"], "Top");
    }

    #[test]
    fn test_outfit_json_shape() {
        let json = r#"{"id":"outfit_1","name":"Beach Day","itemIds":["item_1","item_2"]}"#;
        let outfit: Outfit = serde_json::from_str(json).unwrap();
        assert_eq!(outfit.item_ids, vec!["item_1", "item_2"]);
    }

    #[test]
    fn test_unrecognized_category_survives_rewrite() {
        let json = r#"{"id":"item_9","name":"Sneakers","imageUrl":"","category":"Shoes"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.category, Category::Other("Shoes".to_string()));
        assert_eq!(item.category.to_string(), "Shoes");

        let rewritten = serde_json::to_value(&item).unwrap();
        assert_eq!(rewritten["category"], "Shoes");
    }

    #[test]
    fn test_known_category_names_parse() {
        for category in CATEGORIES {
            let parsed: Category = serde_json::from_value(serde_json::json!(category.as_str())).unwrap();
            assert_eq!(parsed, category);
        }
        assert_eq!(Category::default(), Category::Top);
    }

    #[test]
    fn test_generated_slots_omit_missing_outerwear() {
        let item = |id: &str, category| Item {
            id: id.to_string(),
            name: id.to_string(),
            image_url: String::new(),
            category,
        };
        let generated = GeneratedOutfit {
            top: item("t", Category::Top),
            bottom: item("b", Category::Bottom),
            outerwear: None,
        };

        let categories: Vec<Category> = generated.slots().iter().map(|(c, _)| c.clone()).collect();
        assert_eq!(categories, vec![Category::Top, Category::Bottom]);
    }
}
