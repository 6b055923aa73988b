// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme};

/// Page surface for lists and forms.
///
/// The color is derived from the active Iced `Theme` background so panels
/// stay readable in both light and dark modes without hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Dimmed layer covering the page while a dialog is shown.
pub fn backdrop(_theme: &Theme, visibility: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP * visibility,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Dialog card, faded by `visibility` during the exit animation.
pub fn dialog_card(theme: &Theme, visibility: f32) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;
    let text = palette.background.base.text;

    container::Style {
        background: Some(Background::Color(Color {
            a: base.a * visibility,
            ..base
        })),
        text_color: Some(Color {
            a: text.a * visibility,
            ..text
        }),
        border: Border {
            color: Color {
                a: visibility,
                ..palette.background.strong.color
            },
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: Shadow {
            color: Color {
                a: opacity::HALF * visibility,
                ..shadow::LG.color
            },
            ..shadow::LG
        },
        ..Default::default()
    }
}

/// Highlighted item name inside a dialog.
pub fn item_highlight(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha(style: &container::Style) -> f32 {
        match style.background {
            Some(Background::Color(color)) => color.a,
            _ => panic!("Expected background color"),
        }
    }

    #[test]
    fn backdrop_dims_page_and_fades_out() {
        let visible = backdrop(&Theme::Light, 1.0);
        let hidden = backdrop(&Theme::Light, 0.0);
        assert!(alpha(&visible) > 0.0 && alpha(&visible) < 1.0);
        assert_eq!(alpha(&hidden), 0.0);
    }

    #[test]
    fn dialog_card_is_opaque_when_visible() {
        let card = dialog_card(&Theme::Dark, 1.0);
        assert_eq!(alpha(&card), 1.0);
        assert!(alpha(&dialog_card(&Theme::Dark, 0.5)) < 1.0);
    }
}
