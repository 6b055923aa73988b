// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications, appearing as
//! small cards with kind-colored accents, a dismiss button and, for timed
//! notifications, a countdown bar. Closing toasts fade out.

use super::manager::{Entry, Manager, Message};
use crate::ui::design_tokens::{border, radius, shadow, sizing, spacing, typography};
use crate::ui::styles;
use iced::font::Weight;
use iced::widget::{button, container, progress_bar, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Font, Length, Theme};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Screen corner where toasts are stacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopRight,
    TopLeft,
    #[default]
    BottomRight,
    BottomLeft,
}

impl Position {
    fn horizontal(self) -> alignment::Horizontal {
        match self {
            Position::TopRight | Position::BottomRight => alignment::Horizontal::Right,
            Position::TopLeft | Position::BottomLeft => alignment::Horizontal::Left,
        }
    }

    fn vertical(self) -> alignment::Vertical {
        match self {
            Position::TopRight | Position::TopLeft => alignment::Vertical::Top,
            Position::BottomRight | Position::BottomLeft => alignment::Vertical::Bottom,
        }
    }
}

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(entry: &'a Entry, now: Instant, close_animation: Duration) -> Element<'a, Message> {
        let notification = entry.notification();
        let accent_color = notification.kind().color();
        let visibility = 1.0 - entry.closing_progress(now, close_animation);

        let glyph = Text::new(notification.kind().glyph())
            .size(sizing::GLYPH)
            .style(move |_theme: &Theme| text::Style {
                color: Some(fade(accent_color, visibility)),
            });

        let title = Text::new(notification.title())
            .size(typography::BODY_LG)
            .font(Font {
                weight: Weight::Bold,
                ..Font::DEFAULT
            })
            .style(move |theme: &Theme| text::Style {
                color: Some(fade(theme.palette().text, visibility)),
            });

        let message = Text::new(notification.message())
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(fade(theme.palette().text, visibility)),
            });

        // Closing toasts are not clickable anymore
        let mut dismiss_button = button(Text::new("✕").size(typography::BODY_SM))
            .padding(spacing::XXS)
            .style(styles::button::dismiss);
        if !entry.is_closing() {
            dismiss_button = dismiss_button.on_press(Message::Close(notification.id()));
        }

        // Layout: [glyph] [title / message] [dismiss]
        let header = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(glyph).padding(spacing::XXS))
            .push(
                Column::new()
                    .spacing(spacing::XXS)
                    .width(Length::Fill)
                    .push(title)
                    .push(message),
            )
            .push(dismiss_button);

        let mut content = Column::new().spacing(spacing::XS).push(header);
        if let Some(fraction) = entry.remaining_fraction(now) {
            content = content.push(progress_bar(0.0..=1.0, fraction));
        }

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color, visibility))
            .into()
    }

    /// Renders the toast overlay with all queued notifications, stacked in
    /// the configured corner in display order.
    pub fn view_overlay<'a>(
        manager: &'a Manager,
        position: Position,
        now: Instant,
    ) -> Element<'a, Message> {
        let close_animation = manager.close_animation();
        let toasts: Vec<Element<'a, Message>> = manager
            .entries()
            .map(|entry| Self::view(entry, now, close_animation))
            .collect();

        if toasts.is_empty() {
            // Return an empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(position.horizontal());

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(position.horizontal())
                .align_y(position.vertical())
                .padding(spacing::MD)
                .into()
        }
    }
}

fn fade(color: Color, visibility: f32) -> Color {
    Color {
        a: color.a * visibility,
        ..color
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color, visibility: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(fade(bg_color, visibility))),
        border: iced::Border {
            color: fade(accent_color, visibility),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(fade(theme.palette().text, visibility)),
        ..Default::default()
    }
}
