//! Minimal DOM surface the switcher needs.
//!
//! The browser implementation lives in the `version-switcher-wasm` crate;
//! tests drive the pipeline through an in-memory tree instead.

use crate::error::DomError;

/// Callback invoked with the select's current value after a change event.
pub type ChangeHandler = Box<dyn Fn(&str)>;

/// Element operations used to mount, populate and observe the selector.
pub trait Dom {
    /// Handle to an element owned by the page.
    type Element: Clone;

    /// Absolute URL of the current document (`document.baseURI`).
    fn base_uri(&self) -> Option<String>;

    /// First element matching a CSS selector.
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;

    fn create_element(&self, tag: &str) -> Result<Self::Element, DomError>;

    fn set_attribute(
        &self,
        element: &Self::Element,
        name: &str,
        value: &str,
    ) -> Result<(), DomError>;

    fn set_text(&self, element: &Self::Element, text: &str);

    /// Remove every child of `element`.
    fn clear_children(&self, element: &Self::Element);

    fn append_child(&self, parent: &Self::Element, child: &Self::Element) -> Result<(), DomError>;

    /// Register `handler` for `change` events on `element`.
    ///
    /// The listener stays registered for the lifetime of the page.
    fn on_change(&self, element: &Self::Element, handler: ChangeHandler) -> Result<(), DomError>;
}
