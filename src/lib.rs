//! select_menu - the menu of a styleable select widget
//!
//! Renders the menu, menu list and menu notices into a lightweight element
//! tree, and keeps the menu on the side of its control that has room. The
//! geometry lives in the `select_layout` crate.

mod class_name;
mod components;
mod config;
mod dom;
mod error;
mod props;
mod style;
mod theme;
mod value;

pub use class_name::{ClassName, ClassNames, DEFAULT_CLASS_PREFIX};
pub use components::{
    loading_message, menu_css, menu_list_css, no_options_message, notice_css, Component, Menu,
    MenuList, Notice, NoticeKind, RenderContext, DEFAULT_MAX_MENU_HEIGHT,
};
pub use config::{LogLevel, SelectConfig, CONFIG_VERSION};
pub use dom::{Element, Node};
pub use error::{ConfigError, ConfigResult};
pub use props::{DomEvent, InnerProps, Role};
pub use style::{Style, StyleKey, StyleState, Styles};
pub use theme::{Color, Colors, Spacing, Theme};
pub use value::{clean_value, handle_input_change, to_key, SelectValue};

// Re-export the geometry types hosts need
pub use select_layout::{
    ElementId, ElementSpec, FlipHeuristic, GeometryProvider, LayoutTree, MenuPlacement,
    OffsetMetrics, Placement, PlacementState, Rect, ScrollIntoView,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::components::{Component, Menu, MenuList, RenderContext};
    pub use crate::{loading_message, no_options_message};
    pub use crate::{ClassNames, Node, SelectConfig, Styles, Theme};
    pub use select_layout::{GeometryProvider, MenuPlacement, Placement};
}
