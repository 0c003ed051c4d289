/// Item cards and the small building blocks shared by every screen
use iced::widget::image::Handle;
use iced::widget::{button, column, container, image, row, text};
use iced::{Border, Color, ContentFit, Element, Length, Theme};
use iced_aw::Wrap;

use crate::state::data::Item;
use crate::Message;

const CARD_WIDTH: f32 = 180.0;
const PHOTO_HEIGHT: f32 = 240.0;

/// Photo, or a placeholder box when there is nothing drawable
pub fn photo<'a>(handle: Option<&Handle>) -> Element<'a, Message> {
    match handle {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(CARD_WIDTH))
            .height(Length::Fixed(PHOTO_HEIGHT))
            .content_fit(ContentFit::Contain)
            .into(),
        None => container(text("No image").size(14))
            .center_x(Length::Fixed(CARD_WIDTH))
            .center_y(Length::Fixed(PHOTO_HEIGHT))
            .style(container::rounded_box)
            .into(),
    }
}

/// A clickable item card.
///
/// `on_press` makes the card selectable; `on_delete` adds a delete
/// button underneath it.
pub fn item_card<'a>(
    item: &'a Item,
    handle: Option<&Handle>,
    selected: bool,
    on_press: Option<Message>,
    on_delete: Option<Message>,
) -> Element<'a, Message> {
    let body = column![photo(handle), text(&item.name).size(14)]
        .spacing(6)
        .width(Length::Fixed(CARD_WIDTH));

    let mut card = column![button(body)
        .padding(4)
        .on_press_maybe(on_press)
        .style(move |theme: &Theme, status| card_style(theme, status, selected))]
    .spacing(4);

    if let Some(message) = on_delete {
        card = card.push(
            button(text("Delete").size(12))
                .style(button::danger)
                .on_press(message),
        );
    }

    card.into()
}

fn card_style(theme: &Theme, status: button::Status, selected: bool) -> button::Style {
    let palette = theme.extended_palette();
    let highlighted = selected || matches!(status, button::Status::Hovered);

    button::Style {
        background: Some(palette.background.weak.color.into()),
        text_color: palette.background.base.text,
        border: Border {
            color: if highlighted {
                palette.primary.strong.color
            } else {
                Color::TRANSPARENT
            },
            width: 2.0,
            radius: 6.0.into(),
        },
        ..button::Style::default()
    }
}

/// Wrapping grid of cards
pub fn grid<'a>(cards: Vec<Element<'a, Message>>) -> Element<'a, Message> {
    Wrap::with_elements(cards)
        .spacing(12.0)
        .line_spacing(12.0)
        .into()
}

/// Expand/collapse header for a group
pub fn group_header<'a>(label: String, open: bool, on_press: Message) -> Element<'a, Message> {
    let chevron = if open { "▾" } else { "▸" };
    button(row![text(chevron).size(18), text(label).size(18)].spacing(8))
        .style(button::text)
        .width(Length::Fill)
        .on_press(on_press)
        .into()
}

pub fn section_title<'a>(title: &'a str) -> Element<'a, Message> {
    text(title).size(24).into()
}

/// Grey helper text for empty states
pub fn hint<'a>(message: &'a str) -> Element<'a, Message> {
    text(message)
        .size(14)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.color),
        })
        .into()
}
