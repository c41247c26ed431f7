//! Menu, menu list and menu notices.
//!
//! The menu renders on one side of its control. It starts on the requested
//! side and, when flipping is enabled, the host calls [`Menu::commit`] after
//! each commit so the menu can move to whichever side has room.

use select_layout::{
    resolve_placement, ElementId, FlipHeuristic, GeometryProvider, MenuPlacement, Placement,
    PlacementState, ScrollIntoView,
};

use super::{Component, RenderContext};
use crate::dom::Node;
use crate::props::{DomEvent, InnerProps, Role};
use crate::style::{Style, StyleKey, StyleState};
use crate::theme::{px, Theme};

/// Default `max-height` of the menu list, in pixels.
pub const DEFAULT_MAX_MENU_HEIGHT: f32 = 300.0;

// =============================================================================
// Menu
// =============================================================================

/// Built-in menu style. The offset property is inverted: a bottom menu is
/// pushed below the control with `top: 100%`, a top menu above it with
/// `bottom: 100%`.
pub fn menu_css(state: &StyleState, theme: &Theme) -> Style {
    let colors = &theme.colors;
    Style::new()
        .with("background-color", colors.neutral0.to_string())
        .with(
            "box-shadow",
            format!("0 0 0 1px {}, 0 4px 11px {}", colors.neutral10a, colors.neutral10a),
        )
        .with("border-radius", px(Theme::BORDER_RADIUS))
        .with("margin-bottom", px(theme.spacing.menu_gutter))
        .with("margin-top", px(theme.spacing.menu_gutter))
        .with("position", "absolute")
        .with("width", "100%")
        .with("z-index", "1")
        .with(state.placement.offset_property(), "100%")
}

/// The popup menu container.
pub struct Menu<Message> {
    children: Vec<Node>,
    menu_placement: MenuPlacement,
    menu_should_flip: bool,
    heuristic: FlipHeuristic,
    state: PlacementState,
    inner_props: InnerProps<Message>,
}

impl<Message> Menu<Message> {
    /// Create a menu that first paints on the requested side.
    pub fn new(menu_placement: MenuPlacement) -> Self {
        Self {
            children: Vec::new(),
            menu_placement,
            menu_should_flip: false,
            heuristic: FlipHeuristic::default(),
            state: PlacementState::new(menu_placement),
            inner_props: InnerProps::default(),
        }
    }

    select_layout::builder_field!(should_flip, menu_should_flip, bool);
    select_layout::builder_field!(heuristic, FlipHeuristic);
    select_layout::builder_field!(inner_props, InnerProps<Message>);

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// The side requested at construction.
    pub fn requested_placement(&self) -> MenuPlacement {
        self.menu_placement
    }

    /// The side the menu currently renders on.
    pub fn placement(&self) -> Placement {
        self.state.placement
    }

    pub fn state(&self) -> PlacementState {
        self.state
    }

    /// Post-commit hook: re-measure the mounted menu and update its placement.
    ///
    /// Returns `true` when the placement changed and the host must render
    /// again. Does nothing unless flipping is enabled.
    pub fn commit<P: GeometryProvider + ?Sized>(
        &mut self,
        provider: &P,
        element: Option<ElementId>,
    ) -> bool {
        let resolved = resolve_placement(
            provider,
            element,
            self.state.placement,
            self.menu_should_flip,
            &self.heuristic,
        );
        let transition = self.state.transition(resolved);
        if transition.changed {
            log::debug!(
                "menu flipped from {} to {}",
                self.state.placement,
                transition.state.placement
            );
        }
        self.state = transition.state;
        transition.changed
    }

    /// Forward a DOM event to the collaborator's handlers.
    pub fn dispatch(&self, event: DomEvent) -> Option<Message> {
        self.inner_props.dispatch(event)
    }
}

impl<Message> Component for Menu<Message> {
    fn render(&self, cx: &RenderContext<'_>) -> Node {
        let state = StyleState {
            placement: self.state.placement,
            ..StyleState::default()
        };
        let style = cx
            .styles
            .get(StyleKey::Menu, &state, menu_css(&state, cx.theme));

        let el = Node::div()
            .class_name(cx.class_names.build("menu", &[]))
            .style(style);
        self.inner_props
            .apply(el)
            .children(self.children.iter().cloned())
            .into()
    }
}

// =============================================================================
// Menu List
// =============================================================================

/// Built-in menu list style. `position: relative` is required for the
/// offset metrics used when scrolling to the focused option.
pub fn menu_list_css(state: &StyleState, theme: &Theme) -> Style {
    let max_height = state.max_height.unwrap_or(DEFAULT_MAX_MENU_HEIGHT);
    Style::new()
        .with("max-height", px(max_height))
        .with("overflow-y", "auto")
        .with("padding-bottom", px(theme.spacing.base_unit))
        .with("padding-top", px(theme.spacing.base_unit))
        .with("position", "relative")
        .with("-webkit-overflow-scrolling", "touch")
}

/// The scrollable list of options inside the menu.
pub struct MenuList<Message> {
    children: Vec<Node>,
    is_multi: bool,
    max_height: f32,
    inner_props: InnerProps<Message>,
}

impl<Message> Default for MenuList<Message> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Message> MenuList<Message> {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            is_multi: false,
            max_height: DEFAULT_MAX_MENU_HEIGHT,
            inner_props: InnerProps::default(),
        }
    }

    select_layout::builder_field!(is_multi, bool);
    select_layout::builder_field!(max_height, f32);
    select_layout::builder_field!(inner_props, InnerProps<Message>);

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Scroll the mounted list so the focused option is visible.
    ///
    /// Called by keyboard navigation whenever the focused option changes.
    pub fn scroll_to_focused<P: GeometryProvider + ?Sized>(
        &self,
        provider: &mut P,
        list: ElementId,
        focused: ElementId,
        scroller: &ScrollIntoView,
    ) -> Option<f32> {
        scroller.ensure_visible(provider, list, focused)
    }

    pub fn dispatch(&self, event: DomEvent) -> Option<Message> {
        self.inner_props.dispatch(event)
    }
}

impl<Message> Component for MenuList<Message> {
    fn render(&self, cx: &RenderContext<'_>) -> Node {
        let state = StyleState {
            max_height: Some(self.max_height),
            is_multi: self.is_multi,
            ..StyleState::default()
        };
        let style = cx
            .styles
            .get(StyleKey::MenuList, &state, menu_list_css(&state, cx.theme));

        let el = Node::div()
            .class_name(cx.class_names.build("menu-list", &[("isMulti", self.is_multi)]))
            .style(style)
            .attr("aria-multiselectable", self.is_multi.to_string());
        let el = self.inner_props.apply(el);
        let el = if el.get_attr("role").is_none() {
            el.attr("role", Role::Listbox.as_str())
        } else {
            el
        };
        el.children(self.children.iter().cloned()).into()
    }
}

// =============================================================================
// Menu Notices
// =============================================================================

/// Built-in notice style, shared by both notices.
pub fn notice_css(theme: &Theme) -> Style {
    let unit = theme.spacing.base_unit;
    Style::new()
        .with("color", theme.colors.neutral40.to_string())
        .with("padding", format!("{} {}", px(unit * 2.0), px(unit * 3.0)))
        .with("text-align", "center")
}

/// Which notice is shown in place of the option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    NoOptions,
    Loading,
}

impl NoticeKind {
    pub fn default_text(self) -> &'static str {
        match self {
            NoticeKind::NoOptions => "No options",
            NoticeKind::Loading => "Loading...",
        }
    }

    fn class_names(self) -> [&'static str; 2] {
        match self {
            NoticeKind::NoOptions => ["menu-notice", "menu-notice--no-options"],
            NoticeKind::Loading => ["menu-notice", "menu-notice--loading"],
        }
    }

    fn style_key(self) -> StyleKey {
        match self {
            NoticeKind::NoOptions => StyleKey::NoOptionsMessage,
            NoticeKind::Loading => StyleKey::LoadingMessage,
        }
    }
}

/// A message shown instead of options.
pub struct Notice<Message> {
    kind: NoticeKind,
    children: Option<Vec<Node>>,
    inner_props: InnerProps<Message>,
}

impl<Message> Notice<Message> {
    pub fn new(kind: NoticeKind) -> Self {
        Self {
            kind,
            children: None,
            inner_props: InnerProps::default(),
        }
    }

    /// Replace the default text.
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children = Some(children.into_iter().collect());
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.children([Node::text(text)])
    }

    select_layout::builder_field!(inner_props, InnerProps<Message>);

    pub fn kind(&self) -> NoticeKind {
        self.kind
    }
}

impl<Message> Component for Notice<Message> {
    fn render(&self, cx: &RenderContext<'_>) -> Node {
        let state = StyleState::default();
        let style = cx
            .styles
            .get(self.kind.style_key(), &state, notice_css(cx.theme));
        let class_names = self.kind.class_names();

        let el = Node::div()
            .class_name(cx.class_names.build(&class_names, &[]))
            .style(style);
        let el = self.inner_props.apply(el);
        match &self.children {
            Some(children) => el.children(children.iter().cloned()).into(),
            None => el.child(Node::text(self.kind.default_text())).into(),
        }
    }
}

/// "No options" notice.
pub fn no_options_message<Message>() -> Notice<Message> {
    Notice::new(NoticeKind::NoOptions)
}

/// "Loading..." notice.
pub fn loading_message<Message>() -> Notice<Message> {
    Notice::new(NoticeKind::Loading)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class_name::ClassNames;
    use crate::style::Styles;
    use select_layout::{ElementSpec, LayoutTree, OffsetMetrics, Rect};

    fn render<C: Component>(component: &C) -> Node {
        let class_names = ClassNames::default();
        let theme = Theme::default();
        let styles = Styles::default();
        component.render(&RenderContext::new(&class_names, &theme, &styles))
    }

    fn element(node: &Node) -> &crate::dom::Element {
        match node.as_element() {
            Some(el) => el,
            None => panic!("expected an element, got {:?}", node),
        }
    }

    #[test]
    fn test_menu_bottom_style() {
        let menu: Menu<()> = Menu::new(MenuPlacement::Bottom);
        let node = render(&menu);
        let el = element(&node);
        assert_eq!(el.class_name.as_deref(), Some("react-select__menu"));
        assert_eq!(el.style.get("top"), Some("100%"));
        assert_eq!(el.style.get("bottom"), None);
        assert_eq!(el.style.get("margin-top"), Some("8px"));
        assert_eq!(el.style.get("border-radius"), Some("4px"));
        assert_eq!(el.style.get("background-color"), Some("hsl(0, 0%, 100%)"));
    }

    #[test]
    fn test_menu_top_style_is_inverted() {
        let menu: Menu<()> = Menu::new(MenuPlacement::Top);
        let node = render(&menu);
        let el = element(&node);
        assert_eq!(el.style.get("bottom"), Some("100%"));
        assert_eq!(el.style.get("top"), None);
    }

    #[test]
    fn test_menu_auto_starts_bottom() {
        let menu: Menu<()> = Menu::new(MenuPlacement::Auto);
        assert_eq!(menu.placement(), Placement::Bottom);
        assert_eq!(menu.requested_placement(), MenuPlacement::Auto);
    }

    fn overflowing_tree() -> (LayoutTree, ElementId) {
        let mut tree = LayoutTree::new(Rect::new(0.0, 0.0, 800.0, 500.0));
        let control = tree.insert(ElementSpec::new(Rect::new(0.0, 434.0, 300.0, 38.0)));
        let menu = tree.insert(ElementSpec::new(Rect::new(0.0, 480.0, 300.0, 150.0)).parent(control));
        (tree, menu)
    }

    #[test]
    fn test_commit_flips_once() {
        let (tree, menu_el) = overflowing_tree();
        let mut menu: Menu<()> = Menu::new(MenuPlacement::Auto).should_flip(true);

        assert!(menu.commit(&tree, Some(menu_el)));
        assert_eq!(menu.placement(), Placement::Top);
        assert!(!menu.commit(&tree, Some(menu_el)));
        assert_eq!(menu.placement(), Placement::Top);

        let node = render(&menu);
        assert_eq!(element(&node).style.get("bottom"), Some("100%"));
    }

    #[test]
    fn test_commit_without_flip_keeps_placement() {
        let (tree, menu_el) = overflowing_tree();
        let mut menu: Menu<()> = Menu::new(MenuPlacement::Bottom);
        assert!(!menu.commit(&tree, Some(menu_el)));
        assert_eq!(menu.placement(), Placement::Bottom);
    }

    #[test]
    fn test_commit_unmounted_keeps_placement() {
        let (tree, _) = overflowing_tree();
        let mut menu: Menu<()> = Menu::new(MenuPlacement::Top).should_flip(true);
        assert!(!menu.commit(&tree, None));
        assert_eq!(menu.placement(), Placement::Top);
    }

    #[test]
    fn test_menu_style_override() {
        let menu: Menu<()> = Menu::new(MenuPlacement::Bottom);
        let class_names = ClassNames::default();
        let theme = Theme::default();
        let styles = Styles::new().set(StyleKey::Menu, |base, _| base.with("z-index", "10"));
        let node = menu.render(&RenderContext::new(&class_names, &theme, &styles));
        assert_eq!(element(&node).style.get("z-index"), Some("10"));
    }

    #[test]
    fn test_menu_list_render() {
        let list: MenuList<()> = MenuList::new()
            .is_multi(true)
            .max_height(200.0)
            .inner_props(InnerProps::new().id("listbox-1".to_string()))
            .children([Node::text("a")]);
        let node = render(&list);
        let el = element(&node);
        assert_eq!(
            el.class_name.as_deref(),
            Some("react-select__menu-list react-select__menu-list--isMulti")
        );
        assert_eq!(el.style.get("max-height"), Some("200px"));
        assert_eq!(el.style.get("overflow-y"), Some("auto"));
        assert_eq!(el.style.get("padding-top"), Some("4px"));
        assert_eq!(el.get_attr("role"), Some("listbox"));
        assert_eq!(el.get_attr("id"), Some("listbox-1"));
        assert_eq!(el.get_attr("aria-multiselectable"), Some("true"));
    }

    #[test]
    fn test_menu_list_role_from_inner_props_wins() {
        let list: MenuList<()> = MenuList::new().inner_props(InnerProps::new().role(Role::Status));
        let node = render(&list);
        assert_eq!(element(&node).get_attr("role"), Some("status"));
    }

    #[test]
    fn test_menu_forwards_events() {
        let menu = Menu::new(MenuPlacement::Bottom)
            .inner_props(InnerProps::new().on_mouse_down(|| "keep-focus"));
        let node = render(&menu);
        assert_eq!(element(&node).listeners, vec![DomEvent::MouseDown]);
        assert_eq!(menu.dispatch(DomEvent::MouseDown), Some("keep-focus"));
        assert_eq!(menu.dispatch(DomEvent::MouseMove), None);
    }

    #[test]
    fn test_menu_list_scroll_to_focused() {
        let mut tree = LayoutTree::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        let list_el = tree.insert(ElementSpec::new(Rect::new(0.0, 0.0, 200.0, 200.0)).scrollable(600.0));
        let option = tree.insert(
            ElementSpec::new(Rect::new(0.0, 50.0, 200.0, 30.0))
                .parent(list_el)
                .offset(OffsetMetrics::new(50.0, 30.0)),
        );
        tree.set_scroll_top(list_el, 300.0);

        let list: MenuList<()> = MenuList::new();
        let written = list.scroll_to_focused(&mut tree, list_el, option, &ScrollIntoView::default());
        assert!(matches!(written, Some(v) if (v - 40.0).abs() < 1e-4));
        assert_eq!(tree.scroll_top(list_el), written);
    }

    #[test]
    fn test_notices_default_text() {
        let no_options = render(&no_options_message::<()>());
        let el = element(&no_options);
        assert_eq!(
            el.class_name.as_deref(),
            Some("react-select__menu-notice react-select__menu-notice--no-options")
        );
        assert_eq!(no_options.text_content(), "No options");
        assert_eq!(el.style.get("padding"), Some("8px 12px"));
        assert_eq!(el.style.get("color"), Some("hsl(0, 0%, 40%)"));

        let loading = render(&loading_message::<()>());
        assert_eq!(loading.text_content(), "Loading...");
        assert_eq!(
            element(&loading).class_name.as_deref(),
            Some("react-select__menu-notice react-select__menu-notice--loading")
        );
    }

    #[test]
    fn test_notice_custom_text() {
        let notice = loading_message::<()>().text("Fetching cities");
        assert_eq!(notice.kind(), NoticeKind::Loading);
        assert_eq!(render(&notice).text_content(), "Fetching cities");
    }
}
