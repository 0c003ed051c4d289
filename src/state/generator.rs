/// Random outfit generator
///
/// Draws one top and one bottom uniformly at random, plus one outerwear
/// piece when the wardrobe has any. Each draw is independent; there is
/// no memory of earlier results.

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;
use tracing::debug;

use super::data::{Category, GeneratedOutfit, Item};
use super::views::items_in;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// No tops or no bottoms in the wardrobe
    #[error("Please add at least one 'Top' and one 'Bottom' to use the generator.")]
    MissingCategory,
}

pub fn generate<R: Rng + ?Sized>(
    items: &[Item],
    rng: &mut R,
) -> Result<GeneratedOutfit, GeneratorError> {
    let tops = items_in(items, &Category::Top);
    let bottoms = items_in(items, &Category::Bottom);
    let outerwear = items_in(items, &Category::Outerwear);

    let (Some(top), Some(bottom)) = (tops.choose(rng), bottoms.choose(rng)) else {
        return Err(GeneratorError::MissingCategory);
    };

    let generated = GeneratedOutfit {
        top: top.clone(),
        bottom: bottom.clone(),
        outerwear: outerwear.choose(rng).cloned(),
    };

    debug!(
        "Generated outfit: {} / {} / {:?}",
        generated.top.id,
        generated.bottom.id,
        generated.outerwear.as_ref().map(|item| &item.id)
    );
    Ok(generated)
}

/// What the generator screen shows: the last result or the last warning
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratorPanel {
    pub result: Option<GeneratedOutfit>,
    pub error: Option<GeneratorError>,
}

impl GeneratorPanel {
    /// Run the generator, replacing whatever was shown before
    pub fn run<R: Rng + ?Sized>(&mut self, items: &[Item], rng: &mut R) {
        self.result = None;
        self.error = None;

        match generate(items, rng) {
            Ok(outfit) => self.result = Some(outfit),
            Err(e) => self.error = Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn item(id: &str, category: Category) -> Item {
        Item {
            id: id.to_string(),
            name: id.to_string(),
            image_url: String::new(),
            category,
        }
    }

    #[test]
    fn test_single_top_two_bottoms_no_outerwear() {
        let items = vec![
            item("T1", Category::Top),
            item("B1", Category::Bottom),
            item("B2", Category::Bottom),
            item("A1", Category::Accessory),
        ];
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen_bottoms = std::collections::HashSet::new();

        for _ in 0..1000 {
            let outfit = generate(&items, &mut rng).unwrap();
            assert_eq!(outfit.top.id, "T1");
            assert!(outfit.bottom.id == "B1" || outfit.bottom.id == "B2");
            assert!(outfit.outerwear.is_none());
            seen_bottoms.insert(outfit.bottom.id);
        }

        assert_eq!(seen_bottoms.len(), 2);
    }

    #[test]
    fn test_outerwear_included_when_available() {
        let items = vec![
            item("T1", Category::Top),
            item("B1", Category::Bottom),
            item("C1", Category::Outerwear),
        ];
        let mut rng = StdRng::seed_from_u64(1);
        let outfit = generate(&items, &mut rng).unwrap();
        assert_eq!(outfit.outerwear.map(|i| i.id), Some("C1".to_string()));
    }

    #[test]
    fn test_missing_tops_is_error() {
        let items = vec![item("B1", Category::Bottom), item("C1", Category::Outerwear)];
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generate(&items, &mut rng), Err(GeneratorError::MissingCategory));
    }

    #[test]
    fn test_missing_bottoms_is_error() {
        let items = vec![item("T1", Category::Top)];
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generate(&items, &mut rng), Err(GeneratorError::MissingCategory));
    }

    #[test]
    fn test_failed_run_clears_previous_result() {
        let mut items = vec![item("T1", Category::Top), item("B1", Category::Bottom)];
        let mut rng = StdRng::seed_from_u64(3);
        let mut panel = GeneratorPanel::default();

        panel.run(&items, &mut rng);
        assert!(panel.result.is_some());
        assert!(panel.error.is_none());

        items.remove(0);
        panel.run(&items, &mut rng);
        assert!(panel.result.is_none());
        assert_eq!(panel.error, Some(GeneratorError::MissingCategory));
        assert_eq!(
            panel.error.unwrap().to_string(),
            "Please add at least one 'Top' and one 'Bottom' to use the generator."
        );
    }
}
