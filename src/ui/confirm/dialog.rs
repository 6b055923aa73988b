// SPDX-License-Identifier: MPL-2.0
//! Modal confirmation dialog.
//!
//! The dialog is layered above the page: a dimmed, opaque backdrop swallows
//! pointer and wheel input (the page cannot scroll or be clicked while a
//! dialog is up) and reports clicks outside the card as `Backdrop`.

use super::controller::{Controller, Message, Phase};
use super::options::{ConfirmOptions, Variant};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::font::Weight;
use iced::widget::{button, center, mouse_area, opaque, text, Column, Container, Row, Text};
use iced::{alignment, Element, Font, Length, Theme};
use std::time::Instant;

fn bold() -> Font {
    Font {
        weight: Weight::Bold,
        ..Font::DEFAULT
    }
}

/// Confirmation dialog widget.
pub struct Dialog;

impl Dialog {
    /// Renders the dialog layer, or `None` when no dialog is on screen.
    pub fn view_overlay(controller: &Controller, now: Instant) -> Option<Element<'_, Message>> {
        let request = controller.current()?;
        let interactive = controller.phase() == Phase::Open;
        let visibility = 1.0 - controller.exit_progress(now);

        let card = Container::new(card_content(request.options(), interactive))
            .width(Length::Fixed(sizing::DIALOG_WIDTH))
            .padding(spacing::LG)
            .style(move |theme: &Theme| styles::container::dialog_card(theme, visibility));

        let backdrop = center(opaque(card))
            .style(move |theme: &Theme| styles::container::backdrop(theme, visibility));

        let mut layer = mouse_area(backdrop);
        if interactive {
            layer = layer.on_press(Message::Backdrop);
        }

        Some(opaque(layer))
    }
}

fn card_content(options: &ConfirmOptions, interactive: bool) -> Element<'_, Message> {
    let mut content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(options.title_text()).size(typography::TITLE_SM).font(bold()))
        .push(Text::new(options.message_text()).size(typography::BODY));

    if let Some(item) = options.item() {
        content = content.push(
            Container::new(Text::new(item).size(typography::BODY_LG).font(bold()))
                .padding(spacing::XS)
                .width(Length::Fill)
                .style(styles::container::item_highlight),
        );
    }

    if !options.details().is_empty() {
        let details = options.details().iter().fold(
            Column::new().spacing(spacing::XXS),
            |column, (label, value)| {
                column.push(
                    Row::new()
                        .spacing(spacing::XS)
                        .push(
                            text(format!("{label}:"))
                                .size(typography::BODY_SM)
                                .font(bold()),
                        )
                        .push(text(value.as_str()).size(typography::BODY_SM)),
                )
            },
        );
        content = content.push(details);
    }

    let mut cancel = button(Text::new(options.cancel_label()).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::neutral);
    let mut confirm = button(Text::new(options.confirm_label()).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(confirm_style(options.variant_kind()));
    // Buttons go inert once a choice is made
    if interactive {
        cancel = cancel.on_press(Message::Cancel);
        confirm = confirm.on_press(Message::Confirm);
    }

    let buttons = Row::new()
        .spacing(spacing::SM)
        .push(cancel)
        .push(confirm);

    content
        .push(
            Container::new(buttons)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right),
        )
        .into()
}

fn confirm_style(variant: Variant) -> fn(&Theme, button::Status) -> button::Style {
    match variant {
        Variant::Primary => styles::button::primary,
        Variant::Secondary => styles::button::secondary,
        Variant::Danger => styles::button::danger,
    }
}
