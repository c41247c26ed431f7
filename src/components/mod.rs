//! Menu components rendered into [`Node`] trees.

mod menu;

pub use menu::{
    loading_message, menu_css, menu_list_css, no_options_message, notice_css, Menu, MenuList,
    Notice, NoticeKind, DEFAULT_MAX_MENU_HEIGHT,
};

use crate::class_name::ClassNames;
use crate::dom::Node;
use crate::style::Styles;
use crate::theme::Theme;

/// Everything a component needs from its host to render.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub class_names: &'a ClassNames,
    pub theme: &'a Theme,
    pub styles: &'a Styles,
}

impl<'a> RenderContext<'a> {
    pub fn new(class_names: &'a ClassNames, theme: &'a Theme, styles: &'a Styles) -> Self {
        Self {
            class_names,
            theme,
            styles,
        }
    }
}

/// A component that renders to an element tree.
pub trait Component {
    fn render(&self, cx: &RenderContext<'_>) -> Node;
}
