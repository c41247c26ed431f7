//! select_layout - geometry for select menus
//!
//! Decides which side of its anchor a popup menu renders on, and scrolls a
//! menu list so the focused option is visible. Geometry is read through the
//! [`GeometryProvider`] trait; nothing here owns or caches layout.

pub mod constants;
mod error;
mod layout;
mod macros;
mod placement;
mod scroll;
mod tree;

pub use error::{GeometryError, GeometryResult};
pub use layout::Rect;
pub use placement::{
    initial_placement, resolve_placement, FlipHeuristic, MenuPlacement, Placement,
    PlacementState, Transition,
};
pub use scroll::{snapshot_container, snapshot_item, ContainerSnapshot, ItemSnapshot, ScrollIntoView};
pub use tree::{
    measure, ElementId, ElementSpec, GeometryProvider, LayoutTree, OffsetMetrics, ScrollMetrics,
};
