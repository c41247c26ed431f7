//! Typed attributes and event handlers a collaborator may attach to a
//! component's outer element.

use select_layout::{builder_option, callback_setter};

use crate::dom::Element;

/// ARIA role of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Listbox,
    Option,
    Status,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Listbox => "listbox",
            Role::Option => "option",
            Role::Status => "status",
        }
    }
}

/// DOM events a component can forward to its handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomEvent {
    MouseDown,
    MouseMove,
}

/// Recognized attributes and handlers for a component's outer element.
pub struct InnerProps<Message> {
    id: Option<String>,
    role: Option<Role>,
    aria_label: Option<String>,
    aria_multiselectable: Option<bool>,
    tab_index: Option<i32>,
    on_mouse_down: Option<Box<dyn Fn() -> Message>>,
    on_mouse_move: Option<Box<dyn Fn() -> Message>>,
}

impl<Message> Default for InnerProps<Message> {
    fn default() -> Self {
        Self {
            id: None,
            role: None,
            aria_label: None,
            aria_multiselectable: None,
            tab_index: None,
            on_mouse_down: None,
            on_mouse_move: None,
        }
    }
}

impl<Message> InnerProps<Message> {
    pub fn new() -> Self {
        Self::default()
    }

    builder_option!(id, String);
    builder_option!(role, Role);
    builder_option!(aria_label, String);
    builder_option!(aria_multiselectable, bool);
    builder_option!(tab_index, i32);

    callback_setter!(on_mouse_down);
    callback_setter!(on_mouse_move);

    /// Write the attributes and listeners onto an element.
    pub fn apply(&self, mut el: Element) -> Element {
        if let Some(id) = &self.id {
            el = el.attr("id", id.as_str());
        }
        if let Some(role) = self.role {
            el = el.attr("role", role.as_str());
        }
        if let Some(label) = &self.aria_label {
            el = el.attr("aria-label", label.as_str());
        }
        if let Some(multi) = self.aria_multiselectable {
            el = el.attr("aria-multiselectable", multi.to_string());
        }
        if let Some(tab_index) = self.tab_index {
            el = el.attr("tabindex", tab_index.to_string());
        }
        if self.on_mouse_down.is_some() {
            el = el.listener(DomEvent::MouseDown);
        }
        if self.on_mouse_move.is_some() {
            el = el.listener(DomEvent::MouseMove);
        }
        el
    }

    /// Run the handler for a forwarded event.
    pub fn dispatch(&self, event: DomEvent) -> Option<Message> {
        let handler = match event {
            DomEvent::MouseDown => self.on_mouse_down.as_ref(),
            DomEvent::MouseMove => self.on_mouse_move.as_ref(),
        };
        handler.map(|f| f())
    }
}

impl<Message> std::fmt::Debug for InnerProps<Message> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InnerProps")
            .field("id", &self.id)
            .field("role", &self.role)
            .field("aria_label", &self.aria_label)
            .field("aria_multiselectable", &self.aria_multiselectable)
            .field("tab_index", &self.tab_index)
            .field("on_mouse_down", &self.on_mouse_down.is_some())
            .field("on_mouse_move", &self.on_mouse_move.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Node;

    #[derive(Debug, Clone, PartialEq)]
    enum Msg {
        Pressed,
    }

    #[test]
    fn test_apply_attributes() {
        let props: InnerProps<Msg> = InnerProps::new()
            .id("menu-1".to_string())
            .role(Role::Listbox)
            .aria_multiselectable(true)
            .tab_index(-1);
        let el = props.apply(Node::div());
        assert_eq!(el.get_attr("id"), Some("menu-1"));
        assert_eq!(el.get_attr("role"), Some("listbox"));
        assert_eq!(el.get_attr("aria-multiselectable"), Some("true"));
        assert_eq!(el.get_attr("tabindex"), Some("-1"));
        assert!(el.listeners.is_empty());
    }

    #[test]
    fn test_dispatch() {
        let props = InnerProps::new().on_mouse_down(|| Msg::Pressed);
        let el = props.apply(Node::div());
        assert_eq!(el.listeners, vec![DomEvent::MouseDown]);
        assert_eq!(props.dispatch(DomEvent::MouseDown), Some(Msg::Pressed));
        assert_eq!(props.dispatch(DomEvent::MouseMove), None);
    }
}
