//! Setter macros shared by the builder-style types of both crates.

/// Builder setter that replaces a field.
///
/// `builder_field!(gutter, f32)` sets `self.gutter`; the three-argument form
/// `builder_field!(should_flip, menu_should_flip, bool)` names the method
/// separately from the field.
#[macro_export]
macro_rules! builder_field {
    ($name:ident, $type:ty) => {
        pub fn $name(mut self, value: $type) -> Self {
            self.$name = value;
            self
        }
    };
    ($method:ident, $field:ident, $type:ty) => {
        pub fn $method(mut self, value: $type) -> Self {
            self.$field = value;
            self
        }
    };
}

/// Builder setter for an `Option` field: `builder_option!(parent, ElementId)`
/// stores `Some(value)` in `self.parent`.
#[macro_export]
macro_rules! builder_option {
    ($name:ident, $type:ty) => {
        pub fn $name(mut self, value: $type) -> Self {
            self.$name = Some(value);
            self
        }
    };
}

/// Handler setter for types generic over `Message`.
///
/// `callback_setter!(on_mouse_down)` stores a boxed `Fn() -> Message` in the
/// `Option<Box<dyn Fn() -> Message>>` field of the same name.
#[macro_export]
macro_rules! callback_setter {
    ($name:ident) => {
        pub fn $name<F>(mut self, f: F) -> Self
        where
            F: Fn() -> Message + 'static,
        {
            self.$name = Some(Box::new(f));
            self
        }
    };
}
