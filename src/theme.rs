//! Design tokens for the menu components.
//!
//! Colors, spacing and border radius shared by the menu styles. A theme is
//! passed to rendering through [`RenderContext`](crate::RenderContext); there
//! is no global theme.

use std::fmt;

/// A CSS color in HSL space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Hue in degrees
    pub h: f32,
    /// Saturation in percent
    pub s: f32,
    /// Lightness in percent
    pub l: f32,
    /// Alpha in 0.0..=1.0
    pub a: f32,
}

impl Color {
    pub const fn hsl(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l, a: 1.0 }
    }

    pub const fn hsla(h: f32, s: f32, l: f32, a: f32) -> Self {
        Self { h, s, l, a }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a >= 1.0 {
            write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
        } else {
            write!(f, "hsla({}, {}%, {}%, {})", self.h, self.s, self.l, self.a)
        }
    }
}

/// Neutral palette used by the menu.
#[derive(Debug, Clone)]
pub struct Colors {
    /// Menu background
    pub neutral0: Color,
    /// Translucent border/shadow
    pub neutral10a: Color,
    /// Notice text
    pub neutral40: Color,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            neutral0: Color::hsl(0.0, 0.0, 100.0),
            neutral10a: Color::hsla(0.0, 0.0, 0.0, 0.1),
            neutral40: Color::hsl(0.0, 0.0, 40.0),
        }
    }
}

/// Spacing scale in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    /// Smallest spacing step
    pub base_unit: f32,
    /// Gap between the control and the menu
    pub menu_gutter: f32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            base_unit: 4.0,
            menu_gutter: select_layout::constants::MENU_GUTTER,
        }
    }
}

/// A complete theme for the menu components.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    pub colors: Colors,
    pub spacing: Spacing,
}

impl Theme {
    /// Corner radius of the menu, in pixels.
    pub const BORDER_RADIUS: f32 = 4.0;

    /// Theme with a different menu gutter.
    pub fn with_menu_gutter(mut self, gutter: f32) -> Self {
        self.spacing.menu_gutter = gutter;
        self
    }
}

/// Format a pixel length for CSS.
pub fn px(value: f32) -> String {
    format!("{}px", value)
}
