/// The four screens of the application
///
/// Each function renders one screen from borrowed state; none of them
/// mutate anything. Interaction is expressed as `Message`s.
use iced::widget::{button, column, pick_list, row, text, text_input, Column};
use iced::{Alignment, Element, Length, Theme};

use super::card::{self, grid, group_header, hint, item_card, section_title};
use super::photos::PhotoCache;
use crate::state::data::{Item, CATEGORIES};
use crate::state::forms::ItemForm;
use crate::state::generator::GeneratorPanel;
use crate::state::navigation::{NavAction, NavState, PairingGroup};
use crate::state::views::{CategoryGroup, DerivedViews};
use crate::Message;

const NO_PAIRINGS: &str = "No saved pairings found for this item.";
const EMPTY_CATEGORY: &str = "No items found in this category. Add some in the 'Wardrobe' tab!";

/// Read-only state every screen renders from
pub struct ViewContext<'a> {
    pub nav: &'a NavState,
    pub views: &'a DerivedViews,
    pub photos: &'a PhotoCache,
}

impl<'a> ViewContext<'a> {
    /// Card that toggles multi-select membership
    fn selectable_card(&self, item: &'a Item) -> Element<'a, Message> {
        item_card(
            item,
            self.photos.get(&item.id),
            self.nav.is_selected(&item.id),
            Some(Message::Nav(NavAction::ToggleItem(item.id.clone()))),
            None,
        )
    }

    fn selectable_grid(&self, items: &'a [Item]) -> Element<'a, Message> {
        grid(items.iter().map(|item| self.selectable_card(item)).collect())
    }

    /// Collapsible category groups; `deletable` adds delete buttons
    fn category_groups(&self, deletable: bool) -> Element<'a, Message> {
        let views: &'a DerivedViews = self.views;
        let groups: &'a [CategoryGroup] = &views.groups;
        let mut content = Column::new().spacing(12);

        for group in groups {
            let open = self.nav.is_category_open(&group.category);
            content = content.push(group_header(
                format!("{} ({})", group.category, group.items.len()),
                open,
                Message::Nav(NavAction::ToggleCategory(group.category.clone())),
            ));

            if open {
                let cards = group
                    .items
                    .iter()
                    .map(|item| {
                        item_card(
                            item,
                            self.photos.get(&item.id),
                            self.nav.is_selected(&item.id),
                            Some(Message::Nav(NavAction::ToggleItem(item.id.clone()))),
                            deletable.then(|| Message::DeleteItem(item.id.clone())),
                        )
                    })
                    .collect();
                content = content.push(grid(cards));
            }
        }

        content.into()
    }

    fn find_item(&self, id: &str) -> Option<&'a Item> {
        let views: &'a DerivedViews = self.views;
        views
            .groups
            .iter()
            .flat_map(|group| group.items.iter())
            .find(|item| item.id == id)
    }
}

pub fn wardrobe<'a>(ctx: &ViewContext<'a>, form: &'a ItemForm) -> Element<'a, Message> {
    let add_button = button(text(form.add_label()))
        .padding(10)
        .on_press_maybe((!form.uploading).then_some(Message::AddItem));

    let add_form = column![
        section_title("Add New Item"),
        text_input("Item Name (e.g., 'Red T-Shirt')", &form.name)
            .on_input(Message::ItemNameChanged)
            .padding(10),
        row![
            button(text("Choose Photo...")).on_press(Message::PickPhoto).padding(10),
            text(form.photo_label()).size(14),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
        row![
            pick_list(CATEGORIES, Some(form.category.clone()), Message::ItemCategoryChanged).padding(10),
            add_button,
        ]
        .spacing(12),
    ]
    .spacing(12);

    let catalog: Element<'a, Message> = if ctx.views.groups.is_empty() {
        hint("Your wardrobe is empty. Add some items above!")
    } else {
        ctx.category_groups(true)
    };

    column![add_form, catalog].spacing(30).into()
}

pub fn outfits<'a>(ctx: &ViewContext<'a>, outfit_name: &'a str) -> Element<'a, Message> {
    let selected = ctx.nav.multi_select.len();
    let save_button = button(text("Save Outfit"))
        .padding(10)
        .on_press_maybe((selected > 0).then_some(Message::SaveOutfit));

    let create = column![
        section_title("Create New Outfit"),
        row![
            text_input("Outfit Name (e.g., 'Beach Day')", outfit_name)
                .on_input(Message::OutfitNameChanged)
                .padding(10),
            save_button,
        ]
        .spacing(12),
        text(format!("{} item(s) selected", selected)).size(14),
    ]
    .spacing(12);

    let picker: Element<'a, Message> = if ctx.views.groups.is_empty() {
        hint("You need to add items to your 'Wardrobe' first!")
    } else {
        ctx.category_groups(false)
    };

    let mut saved = Column::new().spacing(12).push(section_title("My Outfits"));
    if ctx.views.outfits.is_empty() {
        saved = saved.push(hint("You haven't saved any outfits yet."));
    }

    let views: &'a DerivedViews = ctx.views;
    for outfit in &views.outfits {
        let open = ctx.nav.is_outfit_open(outfit.id());
        saved = saved.push(
            row![
                group_header(
                    outfit.name().to_string(),
                    open,
                    Message::Nav(NavAction::ToggleOutfit(outfit.id().to_string())),
                ),
                button(text("Delete").size(12))
                    .style(button::danger)
                    .on_press(Message::DeleteOutfit(outfit.id().to_string())),
            ]
            .spacing(12)
            .align_y(Alignment::Center),
        );

        if open {
            saved = saved.push(if outfit.items.is_empty() {
                hint("Items for this outfit were deleted.")
            } else {
                ctx.selectable_grid(&outfit.items)
            });
        }
    }

    column![create, picker, saved].spacing(30).into()
}

pub fn pairings<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let nav = ctx.nav;
    let views: &'a DerivedViews = ctx.views;

    let picker = |label: &'static str, group: PairingGroup, items: &'a [Item]| {
        let open = nav.open_pairing_group == Some(group);
        let mut section = Column::new().spacing(12).push(group_header(
            label.to_string(),
            open,
            Message::Nav(NavAction::TogglePairingGroup(group)),
        ));

        if open {
            section = section.push(if items.is_empty() {
                hint(EMPTY_CATEGORY)
            } else {
                let cards = items
                    .iter()
                    .map(|item| {
                        let select = match group {
                            PairingGroup::Tops => NavAction::SelectTop(item.id.clone()),
                            PairingGroup::Bottoms => NavAction::SelectBottom(item.id.clone()),
                        };
                        item_card(item, ctx.photos.get(&item.id), false, Some(Message::Nav(select)), None)
                    })
                    .collect();
                grid(cards)
            });
        }
        section
    };

    let mut content = column![
        section_title("Find Pairings"),
        hint("Select one item (Top or Bottom) to see suggestions from your saved outfits."),
        picker("Select a Top", PairingGroup::Tops, &views.tops),
        picker("Select a Bottom", PairingGroup::Bottoms, &views.bottoms),
    ]
    .spacing(16);

    let anchor = nav.anchor().and_then(|id| ctx.find_item(id));
    if let Some(anchor) = anchor {
        content = content.push(
            column![
                text("You selected:").size(18),
                row![
                    card::photo(ctx.photos.get(&anchor.id)),
                    column![
                        text(&anchor.name).size(18),
                        button(text("Clear Selection"))
                            .style(button::secondary)
                            .on_press(Message::Nav(NavAction::ClearPairing)),
                    ]
                    .spacing(12),
                ]
                .spacing(16),
            ]
            .spacing(12),
        );

        let suggestions = &views.suggestions;
        let sections: [(&'static str, &'a [Item]); 2] = if nav.selected_top().is_some() {
            [
                ("Suggested Bottoms:", suggestions.bottoms.as_slice()),
                ("Suggested Outerwear:", suggestions.outerwear.as_slice()),
            ]
        } else {
            [
                ("Suggested Tops:", suggestions.tops.as_slice()),
                ("Suggested Outerwear:", suggestions.outerwear.as_slice()),
            ]
        };

        content = content.push(section_title("Suggestions (from your saved outfits)"));
        for (title, items) in sections {
            content = content.push(text(title).size(18));
            content = content.push(if items.is_empty() {
                hint(NO_PAIRINGS)
            } else {
                ctx.selectable_grid(items)
            });
        }
    }

    content.into()
}

pub fn generator<'a>(ctx: &ViewContext<'a>, panel: &'a GeneratorPanel) -> Element<'a, Message> {
    let mut content = column![
        section_title("Outfit Generator"),
        button(text("Generate My Outfit"))
            .padding(12)
            .on_press(Message::GenerateOutfit),
    ]
    .spacing(20)
    .align_x(Alignment::Center)
    .width(Length::Fill);

    if let Some(error) = &panel.error {
        content = content.push(text(error.to_string()).style(|theme: &Theme| text::Style {
            color: Some(theme.palette().danger),
        }));
    }

    if let Some(outfit) = &panel.result {
        let cards: Vec<Element<'a, Message>> = outfit
            .slots()
            .into_iter()
            .map(|(category, item)| {
                column![ctx.selectable_card(item), text(category.to_string()).size(14)]
                    .spacing(4)
                    .align_x(Alignment::Center)
                    .into()
            })
            .collect();
        content = content.push(text("Here's your outfit!").size(20));
        content = content.push(grid(cards));
    }

    content.into()
}
