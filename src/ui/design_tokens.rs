// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the gallery.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Elevation for active buttons

## Examples

```
use iced_gallery::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

// Lightbox backdrop
let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::BLACK
};

// Masonry gutter
let gutter = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_950: Color = Color::from_rgb(0.06, 0.06, 0.07);
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.11);
    pub const GRAY_800: Color = Color::from_rgb(0.16, 0.16, 0.18);
    pub const GRAY_500: Color = Color::from_rgb(0.5, 0.5, 0.53);
    pub const GRAY_200: Color = Color::from_rgb(0.88, 0.88, 0.9);
    pub const GRAY_100: Color = Color::from_rgb(0.94, 0.94, 0.95);

    // Accent gradient endpoints used for titles and active links
    pub const PINK_500: Color = Color::from_rgb(0.925, 0.282, 0.6);
    pub const ORANGE_400: Color = Color::from_rgb(0.984, 0.573, 0.235);
    pub const BLUE_400: Color = Color::from_rgb(0.376, 0.647, 0.98);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const SUBTLE: f32 = 0.5;
    /// Photo-count badge on album covers
    pub const BADGE: f32 = 0.6;
    /// Lightbox caption strip
    pub const CAPTION: f32 = 0.75;
    /// Lightbox backdrop
    pub const BACKDROP: f32 = 0.95;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const NONE: f32 = 0.0;
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Widest content column; wider windows get side margins.
    pub const CONTENT_MAX_WIDTH: f32 = 1280.0;

    /// Album cover aspect ratio (4:3).
    pub const COVER_RATIO: f32 = 4.0 / 3.0;

    /// Square lightbox navigation buttons.
    pub const LIGHTBOX_BUTTON: f32 = 44.0;

    pub const SPINNER: f32 = 48.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Titles: page and album headings
    //! - Body: descriptions and labels
    //! - Caption: dates, counts, tags

    /// Gallery page title
    pub const TITLE_LG: f32 = 36.0;
    /// Album heading in single view
    pub const TITLE_MD: f32 = 28.0;
    /// Album card titles
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadows
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Active navbar tab.
    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BADGE > 0.0 && opacity::BADGE < 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masonry_gutter_matches_medium_spacing() {
        assert_eq!(spacing::MD, crate::ui::gallery::layout::GUTTER);
    }

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn shadow_none_casts_nothing() {
        assert_eq!(shadow::NONE.blur_radius, 0.0);
        assert_eq!(shadow::NONE.offset, iced::Vector::ZERO);
        assert!(shadow::SM.blur_radius > shadow::NONE.blur_radius);
        assert!(shadow::SM.offset.y > 0.0);
    }
}
