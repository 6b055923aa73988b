// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Solid colored button: `base` at rest, `hover` when hovered.
fn filled(base: Color, hover: Color, edge: Color, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(base)),
            text_color: WHITE,
            border: Border {
                color: edge,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(hover)),
            text_color: WHITE,
            border: Border {
                color: base,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::HALF,
                ..base
            })),
            text_color: Color {
                a: opacity::STRONG,
                ..WHITE
            },
            border: Border {
                color: Color::TRANSPARENT,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Main action of a dialog or page.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    filled(
        palette::PRIMARY_500,
        palette::PRIMARY_400,
        palette::PRIMARY_600,
        status,
    )
}

/// Non-destructive confirmation (updates).
pub fn secondary(_theme: &Theme, status: button::Status) -> button::Style {
    filled(
        palette::PRIMARY_700,
        palette::PRIMARY_600,
        palette::PRIMARY_700,
        status,
    )
}

/// Destructive confirmation (deletes).
pub fn danger(_theme: &Theme, status: button::Status) -> button::Style {
    filled(
        palette::ERROR_600,
        palette::ERROR_500,
        palette::ERROR_700,
        status,
    )
}

/// Outlined button for cancel and other neutral actions.
/// Adapts to light/dark theme.
pub fn neutral(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = !theme.extended_palette().is_dark;

    let (bg_color, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    let (background, border_color) = match status {
        button::Status::Hovered => (
            if is_light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            },
            palette::PRIMARY_500,
        ),
        _ => (bg_color, palette::GRAY_400),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: if status == button::Status::Disabled {
            palette::GRAY_400
        } else {
            text_color
        },
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless close button on toasts.
pub fn dismiss(theme: &Theme, status: button::Status) -> button::Style {
    let text = theme.palette().text;
    let (background, alpha) = match status {
        button::Status::Hovered => (
            Some(Background::Color(Color {
                a: opacity::FAINT,
                ..palette::GRAY_400
            })),
            opacity::OPAQUE,
        ),
        button::Status::Disabled => (None, opacity::FAINT),
        _ => (None, opacity::STRONG),
    };

    button::Style {
        background,
        text_color: Color { a: alpha, ..text },
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
