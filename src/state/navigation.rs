/// Navigation and selection state
///
/// All UI state that is not catalog data: the active screen, the item
/// multi-select used to compose outfits, the pairing anchor, and which
/// groups are expanded. Transitions go through `NavState::apply`, so
/// they can be tested without rendering anything. Nothing here is
/// persisted across restarts.

use std::collections::HashSet;

use super::data::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Wardrobe,
    Outfits,
    Pairings,
    Generator,
}

impl Screen {
    pub const ALL: [Screen; 4] = [
        Screen::Wardrobe,
        Screen::Outfits,
        Screen::Pairings,
        Screen::Generator,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Screen::Wardrobe => "Wardrobe",
            Screen::Outfits => "Outfits",
            Screen::Pairings => "Find Pairings",
            Screen::Generator => "Generator",
        }
    }
}

/// The two expandable pickers on the pairings screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairingGroup {
    Tops,
    Bottoms,
}

/// Pairing anchor; a top and a bottom are never selected together
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairingSelection {
    Top(String),
    Bottom(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    SwitchScreen(Screen),
    /// Add to or remove from the multi-select
    ToggleItem(String),
    ClearMultiSelect,
    /// Drop an id from every selection (used after the item is deleted)
    Forget(String),
    /// Collapse a deleted outfit if it was expanded
    ForgetOutfit(String),
    SelectTop(String),
    SelectBottom(String),
    ClearPairing,
    ToggleCategory(Category),
    ToggleOutfit(String),
    TogglePairingGroup(PairingGroup),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavState {
    pub screen: Screen,
    /// Selected item ids in the order they were picked
    pub multi_select: Vec<String>,
    pub pairing: Option<PairingSelection>,
    pub open_categories: HashSet<Category>,
    /// At most one outfit is expanded at a time
    pub open_outfit: Option<String>,
    pub open_pairing_group: Option<PairingGroup>,
}

impl NavState {
    pub fn apply(&mut self, action: NavAction) {
        match action {
            NavAction::SwitchScreen(screen) => {
                self.screen = screen;
                self.clear_pairing();
            }
            NavAction::ToggleItem(id) => {
                if let Some(pos) = self.multi_select.iter().position(|s| *s == id) {
                    self.multi_select.remove(pos);
                } else {
                    self.multi_select.push(id);
                }
            }
            NavAction::ClearMultiSelect => self.multi_select.clear(),
            NavAction::Forget(id) => {
                self.multi_select.retain(|s| *s != id);
                if self.anchor() == Some(id.as_str()) {
                    self.pairing = None;
                }
            }
            NavAction::ForgetOutfit(id) => {
                if self.is_outfit_open(&id) {
                    self.open_outfit = None;
                }
            }
            NavAction::SelectTop(id) => {
                self.pairing = Some(PairingSelection::Top(id));
                self.open_pairing_group = None;
            }
            NavAction::SelectBottom(id) => {
                self.pairing = Some(PairingSelection::Bottom(id));
                self.open_pairing_group = None;
            }
            NavAction::ClearPairing => self.clear_pairing(),
            NavAction::ToggleCategory(category) => {
                if !self.open_categories.remove(&category) {
                    self.open_categories.insert(category);
                }
            }
            NavAction::ToggleOutfit(id) => {
                self.open_outfit = if self.open_outfit.as_deref() == Some(id.as_str()) {
                    None
                } else {
                    Some(id)
                };
            }
            NavAction::TogglePairingGroup(group) => {
                if self.open_pairing_group == Some(group) {
                    self.open_pairing_group = None;
                    return;
                }

                self.open_pairing_group = Some(group);
                // Opening one picker drops a selection made in the other
                let other_side_selected = matches!(
                    (group, &self.pairing),
                    (PairingGroup::Tops, Some(PairingSelection::Bottom(_)))
                        | (PairingGroup::Bottoms, Some(PairingSelection::Top(_)))
                );
                if other_side_selected {
                    self.pairing = None;
                }
            }
        }
    }

    fn clear_pairing(&mut self) {
        self.pairing = None;
        self.open_pairing_group = None;
    }

    /// Id of the item currently used for pairing lookup
    pub fn anchor(&self) -> Option<&str> {
        match &self.pairing {
            Some(PairingSelection::Top(id)) | Some(PairingSelection::Bottom(id)) => Some(id.as_str()),
            None => None,
        }
    }

    pub fn selected_top(&self) -> Option<&str> {
        match &self.pairing {
            Some(PairingSelection::Top(id)) => Some(id.as_str()),
            _ => None,
        }
    }

    pub fn selected_bottom(&self) -> Option<&str> {
        match &self.pairing {
            Some(PairingSelection::Bottom(id)) => Some(id.as_str()),
            _ => None,
        }
    }

    pub fn is_selected(&self, item_id: &str) -> bool {
        self.multi_select.iter().any(|id| id == item_id)
    }

    pub fn is_category_open(&self, category: &Category) -> bool {
        self.open_categories.contains(category)
    }

    pub fn is_outfit_open(&self, outfit_id: &str) -> bool {
        self.open_outfit.as_deref() == Some(outfit_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(actions: Vec<NavAction>) -> NavState {
        let mut state = NavState::default();
        for action in actions {
            state.apply(action);
        }
        state
    }

    #[test]
    fn test_switch_screen_clears_pairing_only() {
        let mut state = state_with(vec![
            NavAction::ToggleItem("a".into()),
            NavAction::ToggleCategory(Category::Top),
            NavAction::SelectTop("t1".into()),
            NavAction::TogglePairingGroup(PairingGroup::Bottoms),
        ]);

        state.apply(NavAction::SwitchScreen(Screen::Generator));

        assert_eq!(state.screen, Screen::Generator);
        assert_eq!(state.pairing, None);
        assert_eq!(state.open_pairing_group, None);
        assert_eq!(state.multi_select, vec!["a".to_string()]);
        assert!(state.is_category_open(&Category::Top));
    }

    #[test]
    fn test_top_and_bottom_are_exclusive() {
        let mut state = state_with(vec![
            NavAction::TogglePairingGroup(PairingGroup::Tops),
            NavAction::SelectTop("t1".into()),
        ]);
        assert_eq!(state.selected_top(), Some("t1"));
        assert_eq!(state.open_pairing_group, None);

        state.apply(NavAction::SelectBottom("b1".into()));
        assert_eq!(state.selected_top(), None);
        assert_eq!(state.selected_bottom(), Some("b1"));
        assert_eq!(state.anchor(), Some("b1"));
    }

    #[test]
    fn test_categories_toggle_independently() {
        let mut state = state_with(vec![
            NavAction::ToggleCategory(Category::Top),
            NavAction::ToggleCategory(Category::Outerwear),
        ]);
        assert!(state.is_category_open(&Category::Top));
        assert!(state.is_category_open(&Category::Outerwear));

        state.apply(NavAction::ToggleCategory(Category::Top));
        assert!(!state.is_category_open(&Category::Top));
        assert!(state.is_category_open(&Category::Outerwear));
    }

    #[test]
    fn test_single_open_outfit() {
        let mut state = state_with(vec![NavAction::ToggleOutfit("o1".into())]);
        assert!(state.is_outfit_open("o1"));

        state.apply(NavAction::ToggleOutfit("o2".into()));
        assert!(!state.is_outfit_open("o1"));
        assert!(state.is_outfit_open("o2"));

        state.apply(NavAction::ToggleOutfit("o2".into()));
        assert_eq!(state.open_outfit, None);
    }

    #[test]
    fn test_opening_tops_clears_selected_bottom() {
        let mut state = state_with(vec![NavAction::SelectBottom("b1".into())]);
        state.apply(NavAction::TogglePairingGroup(PairingGroup::Tops));

        assert_eq!(state.open_pairing_group, Some(PairingGroup::Tops));
        assert_eq!(state.pairing, None);
    }

    #[test]
    fn test_opening_tops_keeps_selected_top() {
        let mut state = state_with(vec![NavAction::SelectTop("t1".into())]);
        state.apply(NavAction::TogglePairingGroup(PairingGroup::Tops));
        assert_eq!(state.selected_top(), Some("t1"));
    }

    #[test]
    fn test_collapsing_group_keeps_selection() {
        let mut state = state_with(vec![
            NavAction::SelectTop("t1".into()),
            NavAction::TogglePairingGroup(PairingGroup::Bottoms),
        ]);
        assert_eq!(state.pairing, None);

        state.apply(NavAction::SelectBottom("b1".into()));
        state.apply(NavAction::TogglePairingGroup(PairingGroup::Bottoms));
        state.apply(NavAction::TogglePairingGroup(PairingGroup::Bottoms));
        assert_eq!(state.open_pairing_group, None);
        assert_eq!(state.selected_bottom(), Some("b1"));
    }

    #[test]
    fn test_multi_select_keeps_pick_order() {
        let mut state = state_with(vec![
            NavAction::ToggleItem("c".into()),
            NavAction::ToggleItem("a".into()),
            NavAction::ToggleItem("b".into()),
            NavAction::ToggleItem("a".into()),
        ]);
        assert_eq!(state.multi_select, vec!["c".to_string(), "b".to_string()]);

        state.apply(NavAction::ClearMultiSelect);
        assert!(state.multi_select.is_empty());
    }

    #[test]
    fn test_forget_removes_deleted_item() {
        let mut state = state_with(vec![
            NavAction::ToggleItem("t1".into()),
            NavAction::SelectTop("t1".into()),
        ]);
        state.apply(NavAction::Forget("t1".into()));
        assert!(!state.is_selected("t1"));
        assert_eq!(state.anchor(), None);
    }

    #[test]
    fn test_forget_outfit_collapses_only_that_outfit() {
        let mut state = state_with(vec![NavAction::ToggleOutfit("o1".into())]);

        state.apply(NavAction::ForgetOutfit("o2".into()));
        assert!(state.is_outfit_open("o1"));

        state.apply(NavAction::ForgetOutfit("o1".into()));
        assert_eq!(state.open_outfit, None);
    }
}
