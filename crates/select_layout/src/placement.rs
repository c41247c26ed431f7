//! Menu placement: which side of its anchor the menu body renders on.
//!
//! The first paint uses [`initial_placement`] since no geometry exists yet.
//! After the menu is committed to the layout tree, [`resolve_placement`]
//! measures it and may flip it to the other side. The result is folded into
//! an explicit [`PlacementState`] by the host's post-commit hook.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{FLIP_MIN_OVERFLOW, MENU_GUTTER};
use crate::error::{GeometryError, GeometryResult};
use crate::layout::Rect;
use crate::tree::{measure, ElementId, GeometryProvider};

/// Side of the anchor the menu is rendered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Top,
    #[default]
    Bottom,
}

impl Placement {
    /// The CSS offset property that anchors a menu on this side.
    ///
    /// A menu below the anchor is pushed down with `top: 100%`, a menu above
    /// it is pushed up with `bottom: 100%`.
    pub fn offset_property(self) -> &'static str {
        match self {
            Placement::Bottom => "top",
            Placement::Top => "bottom",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Placement::Top => Placement::Bottom,
            Placement::Bottom => Placement::Top,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Placement::Top => "top",
            Placement::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Requested placement. `Auto` is a request flag only, never stored state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuPlacement {
    Top,
    #[default]
    Bottom,
    Auto,
}

impl From<Placement> for MenuPlacement {
    fn from(placement: Placement) -> Self {
        match placement {
            Placement::Top => MenuPlacement::Top,
            Placement::Bottom => MenuPlacement::Bottom,
        }
    }
}

/// Placement for the first paint, before any geometry exists.
pub fn initial_placement(requested: MenuPlacement) -> Placement {
    match requested {
        MenuPlacement::Top => Placement::Top,
        MenuPlacement::Bottom | MenuPlacement::Auto => Placement::Bottom,
    }
}

/// Tunable knobs of the flip decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlipHeuristic {
    /// Gap between the anchor and the menu body
    pub gutter: f32,
    /// Overflow past the bounds' bottom edge tolerated before flipping
    pub min_overflow: f32,
}

impl Default for FlipHeuristic {
    fn default() -> Self {
        Self {
            gutter: MENU_GUTTER,
            min_overflow: FLIP_MIN_OVERFLOW,
        }
    }
}

impl FlipHeuristic {
    pub fn new() -> Self {
        Self::default()
    }

    crate::builder_field!(gutter, f32);
    crate::builder_field!(min_overflow, f32);

    /// Decide the side from already-measured rects.
    ///
    /// `anchor` is the element the menu hangs off; `bounds` is the visible
    /// area of the nearest scroll ancestor (or the viewport). The menu's own
    /// rect only contributes its height, so the answer does not depend on
    /// which side the menu currently sits.
    pub fn decide(&self, menu: &Rect, anchor: &Rect, bounds: &Rect) -> Placement {
        let needed = menu.height + self.gutter;
        let projected_bottom = anchor.bottom() + needed;
        let overflow = projected_bottom - bounds.bottom();
        let space_above = anchor.top() - bounds.top();
        let space_below = bounds.bottom() - anchor.bottom();

        if overflow > self.min_overflow && (space_above >= needed || space_above > space_below) {
            Placement::Top
        } else {
            Placement::Bottom
        }
    }
}

/// Re-decide the placement of a mounted menu.
///
/// `current` is the side the menu is laid out on right now. It only matters
/// when the menu has no measurable parent and the anchor has to be inferred
/// from the menu's own rect.
///
/// Returns `None` when flipping is disabled, or when the menu cannot be
/// measured (no handle yet, detached, zero size). `None` means "keep the
/// current placement"; it is never an error.
pub fn resolve_placement<P: GeometryProvider + ?Sized>(
    provider: &P,
    menu: Option<ElementId>,
    current: Placement,
    flip_enabled: bool,
    heuristic: &FlipHeuristic,
) -> Option<Placement> {
    if !flip_enabled {
        return None;
    }

    match measure_menu(provider, menu, current, heuristic) {
        Ok((menu_rect, anchor, bounds)) => {
            let placement = heuristic.decide(&menu_rect, &anchor, &bounds);
            log::debug!(
                "menu placement resolved to {} (menu {:?}, anchor {:?}, bounds {:?})",
                placement,
                menu_rect,
                anchor,
                bounds
            );
            Some(placement)
        }
        Err(err) => {
            log::trace!("menu placement unchanged: {}", err);
            None
        }
    }
}

fn measure_menu<P: GeometryProvider + ?Sized>(
    provider: &P,
    menu: Option<ElementId>,
    current: Placement,
    heuristic: &FlipHeuristic,
) -> GeometryResult<(Rect, Rect, Rect)> {
    let id = menu.ok_or(GeometryError::MissingElement)?;
    let menu_rect = measure(provider, Some(id))?;

    let viewport = provider.viewport();
    let bounds = provider
        .scroll_parent(id)
        .and_then(|ancestor| provider.bounding_rect(ancestor))
        .map(|rect| rect.intersect(&viewport))
        .filter(|rect| !rect.is_empty())
        .unwrap_or(viewport);

    let anchor = provider
        .parent(id)
        .and_then(|parent| provider.bounding_rect(parent))
        .filter(|rect| !rect.is_empty())
        .unwrap_or_else(|| {
            // No anchor to measure: assume a zero-height anchor one gutter
            // away from the menu, on the side opposite the menu.
            let edge = match current {
                Placement::Bottom => menu_rect.top() - heuristic.gutter,
                Placement::Top => menu_rect.bottom() + heuristic.gutter,
            };
            Rect::new(menu_rect.x, edge, menu_rect.width, 0.0)
        });

    Ok((menu_rect, anchor, bounds))
}

/// View state of a menu's placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlacementState {
    pub placement: Placement,
}

/// Outcome of folding a resolver result into [`PlacementState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub state: PlacementState,
    /// The host must re-render once when this is set
    pub changed: bool,
}

impl PlacementState {
    /// State for the first paint.
    pub fn new(requested: MenuPlacement) -> Self {
        Self {
            placement: initial_placement(requested),
        }
    }

    /// Apply a resolver result. `None` keeps the current placement.
    pub fn transition(self, resolved: Option<Placement>) -> Transition {
        match resolved {
            Some(placement) if placement != self.placement => Transition {
                state: PlacementState { placement },
                changed: true,
            },
            _ => Transition {
                state: self,
                changed: false,
            },
        }
    }
}
