// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for toasts, dialogs and the dashboard pages. Styles
read from here instead of hard-coding values so both feedback surfaces stay
consistent with the rest of the dashboard.

| Group        | Used for                                   |
|--------------|--------------------------------------------|
| `palette`    | Brand, neutral and per-kind accent colors  |
| `opacity`    | Backdrop dimming and fades                 |
| `spacing`    | Paddings and gaps (4px steps)              |
| `sizing`     | Fixed widths and heights                   |
| `typography` | Font sizes                                 |
| `border`     | Border widths                              |
| `radius`     | Corner radii                               |
| `shadow`     | Card elevation                             |

```
use dashboard_feedback::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::BLACK
};

assert!(backdrop.a < 1.0);
assert_eq!(spacing::MD, 16.0);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Neutrals
    pub const GRAY_900: Color = Color::from_rgb(0.11, 0.12, 0.14);
    pub const GRAY_700: Color = Color::from_rgb(0.27, 0.29, 0.33);
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.57, 0.62);
    pub const GRAY_200: Color = Color::from_rgb(0.80, 0.82, 0.85);
    pub const GRAY_100: Color = Color::from_rgb(0.93, 0.94, 0.95);

    // Institute brand (indigo)
    pub const PRIMARY_400: Color = Color::from_rgb(0.45, 0.50, 0.95);
    pub const PRIMARY_500: Color = Color::from_rgb(0.36, 0.41, 0.88);
    pub const PRIMARY_600: Color = Color::from_rgb(0.29, 0.33, 0.76);
    pub const PRIMARY_700: Color = Color::from_rgb(0.23, 0.26, 0.62);

    // Accent per notification kind
    pub const SUCCESS_500: Color = Color::from_rgb(0.13, 0.64, 0.40);
    pub const INFO_500: Color = Color::from_rgb(0.15, 0.53, 0.87);
    pub const WARNING_500: Color = Color::from_rgb(0.96, 0.62, 0.04);
    pub const ERROR_500: Color = Color::from_rgb(0.86, 0.21, 0.27);

    // Destructive actions
    pub const ERROR_600: Color = Color::from_rgb(0.75, 0.16, 0.21);
    pub const ERROR_700: Color = Color::from_rgb(0.60, 0.12, 0.16);
}

// ============================================================================
// Opacity
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const FAINT: f32 = 0.15;
    pub const HALF: f32 = 0.5;
    pub const STRONG: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;

    /// Dimmed page behind a modal dialog
    pub const BACKDROP: f32 = 0.45;
}

// ============================================================================
// Spacing (4px steps)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Kind glyph in front of a toast title
    pub const GLYPH: f32 = 18.0;

    /// Row action buttons
    pub const BUTTON_HEIGHT: f32 = 34.0;

    pub const TOAST_WIDTH: f32 = 340.0;
    pub const DIALOG_WIDTH: f32 = 440.0;
    pub const PAGE_MAX_WIDTH: f32 = 760.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    /// Page headings
    pub const TITLE_LG: f32 = 28.0;
    pub const TITLE_MD: f32 = 20.0;
    /// Dialog titles
    pub const TITLE_SM: f32 = 18.0;
    /// Toast titles, highlighted item names
    pub const BODY_LG: f32 = 15.0;
    pub const BODY: f32 = 14.0;
    /// Dialog details, dismiss glyph
    pub const BODY_SM: f32 = 13.0;
    /// Secondary line of list rows
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Borders and radii
// ============================================================================

pub mod border {
    /// Cards and list rows
    pub const WIDTH_SM: f32 = 1.0;
    /// Toast accent outline
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Elevation
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Toasts
    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 3.0 },
        blur_radius: 10.0,
    };

    /// Dialog card
    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 12.0 },
        blur_radius: 28.0,
    };
}

const _: () = {
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS && spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM && spacing::LG > spacing::MD);

    assert!(opacity::BACKDROP > opacity::TRANSPARENT && opacity::BACKDROP < opacity::OPAQUE);

    // A dialog must be wider than a toast
    assert!(sizing::DIALOG_WIDTH > sizing::TOAST_WIDTH);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY_SM > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_follows_four_pixel_steps() {
        for value in [
            spacing::XXS,
            spacing::XS,
            spacing::SM,
            spacing::MD,
            spacing::LG,
            spacing::XL,
        ] {
            assert_eq!(value % 4.0, 0.0);
        }
    }

    #[test]
    fn kind_accents_are_distinct() {
        let accents = [
            palette::SUCCESS_500,
            palette::ERROR_500,
            palette::WARNING_500,
            palette::INFO_500,
        ];
        for (i, a) in accents.iter().enumerate() {
            for b in &accents[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn destructive_scale_darkens() {
        assert!(palette::ERROR_600.r < palette::ERROR_500.r);
        assert!(palette::ERROR_700.r < palette::ERROR_600.r);
    }
}
