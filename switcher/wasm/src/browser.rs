//! `web-sys` implementations of the switcher's host seams.

use async_trait::async_trait;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, Event, HtmlSelectElement, Response, Window};

use version_switcher::{ChangeHandler, Dom, DomError, FetchError, ManifestFetcher, Navigator};

/// Readable text for a thrown JS value.
pub(crate) fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// The live document.
#[derive(Clone)]
pub struct BrowserDom {
    window: Window,
    document: Document,
}

impl BrowserDom {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    /// Bind to the global window, if there is one.
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self::new(window, document))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Dom for BrowserDom {
    type Element = Element;

    fn base_uri(&self) -> Option<String> {
        match self.document.base_uri() {
            Ok(Some(uri)) => Some(uri),
            _ => self.window.location().href().ok(),
        }
    }

    fn query_selector(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn create_element(&self, tag: &str) -> Result<Element, DomError> {
        self.document
            .create_element(tag)
            .map_err(|_| DomError::CreateElement(tag.to_string()))
    }

    fn set_attribute(&self, element: &Element, name: &str, value: &str) -> Result<(), DomError> {
        element
            .set_attribute(name, value)
            .map_err(|e| DomError::Operation(format!("set {}: {}", name, js_error(&e))))
    }

    fn set_text(&self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn clear_children(&self, element: &Element) {
        while let Some(child) = element.first_child() {
            if element.remove_child(&child).is_err() {
                break;
            }
        }
    }

    fn append_child(&self, parent: &Element, child: &Element) -> Result<(), DomError> {
        parent
            .append_child(child)
            .map(|_| ())
            .map_err(|e| DomError::Operation(format!("append: {}", js_error(&e))))
    }

    fn on_change(&self, element: &Element, handler: ChangeHandler) -> Result<(), DomError> {
        let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let value = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
                .map(|select| select.value())
                .unwrap_or_default();
            handler(&value);
        });

        element
            .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
            .map_err(|e| DomError::Operation(format!("add listener: {}", js_error(&e))))?;

        // Lives as long as the page.
        listener.forget();
        Ok(())
    }
}

/// `window.fetch` based manifest reader.
pub struct BrowserFetcher {
    window: Window,
}

impl BrowserFetcher {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

#[async_trait(?Send)]
impl ManifestFetcher for BrowserFetcher {
    async fn fetch_manifest(&self, location: &str) -> Result<String, FetchError> {
        let response = JsFuture::from(self.window.fetch_with_str(location))
            .await
            .map_err(|e| FetchError::Network(js_error(&e)))?;
        let response: Response = response
            .dyn_into()
            .map_err(|e| FetchError::Network(js_error(&e)))?;

        if !response.ok() {
            return Err(FetchError::Status {
                status: response.status(),
                location: location.to_string(),
            });
        }

        let text = response.text().map_err(|e| FetchError::Body(js_error(&e)))?;
        JsFuture::from(text)
            .await
            .map_err(|e| FetchError::Body(js_error(&e)))?
            .as_string()
            .ok_or_else(|| FetchError::Body("response body is not text".into()))
    }
}

/// Navigates by assigning `window.location.href`.
pub struct BrowserNavigator {
    window: Window,
}

impl BrowserNavigator {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Navigator for BrowserNavigator {
    fn navigate(&self, url: &str) -> Result<(), DomError> {
        self.window
            .location()
            .set_href(url)
            .map_err(|e| DomError::Operation(format!("navigate: {}", js_error(&e))))
    }
}
