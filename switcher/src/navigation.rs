//! Selection-change to navigation wiring.

use std::rc::Rc;

use tracing::{debug, warn};

use crate::dom::Dom;
use crate::error::DomError;

/// Sends the browser to another page (`window.location`).
pub trait Navigator {
    fn navigate(&self, url: &str) -> Result<(), DomError>;
}

/// Register the change listener on `select`.
///
/// Every change navigates to the selected option's value. An empty value
/// (a select without options) does nothing.
pub fn attach<D, N>(dom: &D, select: &D::Element, navigator: Rc<N>) -> Result<(), DomError>
where
    D: Dom,
    N: Navigator + ?Sized + 'static,
{
    dom.on_change(
        select,
        Box::new(move |value: &str| {
            if value.is_empty() {
                debug!("Ignoring change event without a selected version");
                return;
            }
            debug!("Navigating to {}", value);
            if let Err(err) = navigator.navigate(value) {
                warn!("Navigation to {} failed: {}", value, err);
            }
        }),
    )
}
