/// Derived views over the catalog
///
/// Pure functions computing category groups, resolved outfits and
/// pairing suggestions, plus `DerivedViews`, which caches their results
/// against the catalog revision so unrelated UI messages don't
/// recompute them.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::data::{Category, Item, Outfit, ResolvedOutfit, CATEGORIES};

/// Items of one category, as shown under a collapsible header
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub category: Category,
    pub items: Vec<Item>,
}

/// Partition items by category in canonical order (Top, Bottom,
/// Outerwear, Accessory), followed by any unrecognized categories in
/// first-seen order. Empty categories produce no group; items keep
/// their catalog order within a group.
pub fn group_by_category(items: &[Item]) -> Vec<CategoryGroup> {
    let mut categories = CATEGORIES.to_vec();
    for item in items {
        if !categories.contains(&item.category) {
            categories.push(item.category.clone());
        }
    }

    categories
        .into_iter()
        .map(|category| CategoryGroup {
            items: items_in(items, &category),
            category,
        })
        .filter(|group| !group.items.is_empty())
        .collect()
}

/// All items of a single category, in catalog order
pub fn items_in(items: &[Item], category: &Category) -> Vec<Item> {
    items
        .iter()
        .filter(|item| item.category == *category)
        .cloned()
        .collect()
}

/// Join each outfit against the existing items (dangling ids are dropped)
/// and sort the result by name.
pub fn resolve_outfits(outfits: &[Outfit], items: &[Item]) -> Vec<ResolvedOutfit> {
    let by_id: HashMap<&str, &Item> = items.iter().map(|item| (item.id.as_str(), item)).collect();

    let mut resolved: Vec<ResolvedOutfit> = outfits
        .iter()
        .map(|outfit| ResolvedOutfit {
            outfit: outfit.clone(),
            items: outfit
                .item_ids
                .iter()
                .filter_map(|id| by_id.get(id.as_str()).map(|&item| item.clone()))
                .collect(),
        })
        .collect();

    resolved.sort_by(|a, b| {
        locale_cmp(a.name(), b.name()).then_with(|| a.id().cmp(b.id()))
    });
    resolved
}

/// Human ordering for names: letters compare without regard to accents
/// or case first, then accents break ties, then case (lowercase first).
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    fn base(s: &str) -> String {
        s.nfd()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
            .collect()
    }

    fn accented(s: &str) -> String {
        s.nfd().flat_map(char::to_lowercase).collect()
    }

    fn case_pattern(s: &str) -> Vec<bool> {
        s.nfd()
            .filter(|c| !is_combining_mark(*c))
            .map(char::is_uppercase)
            .collect()
    }

    base(a)
        .cmp(&base(b))
        .then_with(|| accented(a).cmp(&accented(b)))
        .then_with(|| case_pattern(a).cmp(&case_pattern(b)))
        .then_with(|| a.cmp(b))
}

/// Items that have been worn alongside an anchor item
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PairingSuggestions {
    pub tops: Vec<Item>,
    pub bottoms: Vec<Item>,
    pub outerwear: Vec<Item>,
}

impl PairingSuggestions {
    pub fn is_empty(&self) -> bool {
        self.tops.is_empty() && self.bottoms.is_empty() && self.outerwear.is_empty()
    }
}

/// Mine saved outfits for items that co-occur with `anchor_id`.
///
/// `outfits` should already be resolved and sorted; output order is
/// first-seen order across them. Each item appears at most once and the
/// anchor never suggests itself.
pub fn pairing_suggestions(anchor_id: &str, outfits: &[ResolvedOutfit]) -> PairingSuggestions {
    let relevant: Vec<&ResolvedOutfit> = outfits
        .iter()
        .filter(|outfit| outfit.references(anchor_id))
        .collect();

    let collect = |category: Category| -> Vec<Item> {
        let mut seen = HashSet::new();
        relevant
            .iter()
            .flat_map(|outfit| outfit.items.iter())
            .filter(|item| item.id != anchor_id && item.category == category)
            .filter(|item| seen.insert(item.id.clone()))
            .cloned()
            .collect()
    };

    PairingSuggestions {
        tops: collect(Category::Top),
        bottoms: collect(Category::Bottom),
        outerwear: collect(Category::Outerwear),
    }
}

/// Cached derived views, recomputed only when the catalog revision or
/// the pairing anchor changes.
#[derive(Debug, Default)]
pub struct DerivedViews {
    revision: Option<u64>,
    anchor: Option<String>,
    pub groups: Vec<CategoryGroup>,
    pub outfits: Vec<ResolvedOutfit>,
    pub tops: Vec<Item>,
    pub bottoms: Vec<Item>,
    pub suggestions: PairingSuggestions,
}

impl DerivedViews {
    /// Bring the cache up to date. Returns true if anything was recomputed.
    pub fn refresh(
        &mut self,
        revision: u64,
        items: &[Item],
        outfits: &[Outfit],
        anchor: Option<&str>,
    ) -> bool {
        let catalog_changed = self.revision != Some(revision);
        let anchor_changed = self.anchor.as_deref() != anchor;

        if catalog_changed {
            self.groups = group_by_category(items);
            self.outfits = resolve_outfits(outfits, items);
            self.tops = items_in(items, &Category::Top);
            self.bottoms = items_in(items, &Category::Bottom);
            self.revision = Some(revision);
        }

        if catalog_changed || anchor_changed {
            self.suggestions = match anchor {
                Some(id) => pairing_suggestions(id, &self.outfits),
                None => PairingSuggestions::default(),
            };
            self.anchor = anchor.map(str::to_string);
        }

        catalog_changed || anchor_changed
    }
}
