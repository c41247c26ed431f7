//! Centralized constants for select_layout
//!
//! The placement and scroll heuristics are empirically tuned. They are kept
//! here as defaults; every one of them can be overridden through
//! [`FlipHeuristic`](crate::FlipHeuristic) or
//! [`ScrollIntoView`](crate::ScrollIntoView).

// =============================================================================
// Scrolling
// =============================================================================

/// Fraction of the focused item's height added as overscroll margin, so the
/// neighbouring item stays partially visible.
pub const OVERSCROLL_RATIO: f32 = 1.0 / 3.0;

// =============================================================================
// Placement
// =============================================================================

/// Gap between the anchor and the menu body (matches the menu's CSS margin).
pub const MENU_GUTTER: f32 = 8.0;

/// The projected bottom edge must overflow the bounds by more than this many
/// pixels before flipping to the top is considered.
pub const FLIP_MIN_OVERFLOW: f32 = 0.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overscroll_ratio_is_a_fraction() {
        assert!(OVERSCROLL_RATIO > 0.0 && OVERSCROLL_RATIO < 1.0);
    }

    #[test]
    fn test_gutter_non_negative() {
        assert!(MENU_GUTTER >= 0.0);
        assert!(FLIP_MIN_OVERFLOW >= 0.0);
    }
}
