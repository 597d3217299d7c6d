//! Selector markup.
//!
//! The mount container supplied by the page ends up holding:
//!
//! ```html
//! <div id="version-dropdown">
//!   <select id="version-list">
//!     <option value="https://example.org/proj/versions/master/html/index.html">latest</option>
//!   </select>
//! </div>
//! ```

use crate::config::SwitcherConfig;
use crate::dom::Dom;
use crate::error::{DomError, SwitcherError};
use crate::options::OptionEntry;

/// Handles to the elements created inside the mount container.
#[derive(Debug, Clone)]
pub struct MountedSelector<E> {
    /// Wrapper `<div>`
    pub dropdown: E,
    /// The `<select>` control
    pub select: E,
}

/// Replace the mount container's contents with an empty selector.
pub fn mount_selector<D: Dom>(
    dom: &D,
    config: &SwitcherConfig,
) -> Result<MountedSelector<D::Element>, SwitcherError> {
    let mount = dom
        .query_selector(&config.mount_selector)
        .ok_or_else(|| SwitcherError::MountNotFound(config.mount_selector.clone()))?;

    let dropdown = dom.create_element("div")?;
    dom.set_attribute(&dropdown, "id", &config.dropdown_id)?;

    let select = dom.create_element("select")?;
    dom.set_attribute(&select, "id", &config.list_id)?;

    dom.clear_children(&mount);
    dom.append_child(&dropdown, &select)?;
    dom.append_child(&mount, &dropdown)?;

    Ok(MountedSelector { dropdown, select })
}

/// Append one `<option>` per entry. Returns the number appended.
///
/// All options are built before the first one is attached. If attaching
/// fails part way, the select is emptied again, so a reader never sees a
/// partial list.
pub fn populate<D: Dom>(
    dom: &D,
    select: &D::Element,
    entries: &[OptionEntry],
) -> Result<usize, DomError> {
    let options = entries
        .iter()
        .map(|entry| build_option(dom, entry))
        .collect::<Result<Vec<_>, _>>()?;

    for option in &options {
        if let Err(err) = dom.append_child(select, option) {
            dom.clear_children(select);
            return Err(err);
        }
    }
    Ok(options.len())
}

fn build_option<D: Dom>(dom: &D, entry: &OptionEntry) -> Result<D::Element, DomError> {
    let option = dom.create_element("option")?;
    dom.set_attribute(&option, "value", &entry.value)?;
    if entry.selected {
        dom.set_attribute(&option, "selected", "")?;
    }
    dom.set_text(&option, &entry.label);
    Ok(option)
}

/// Hide an element with the `hidden` attribute.
pub fn hide<D: Dom>(dom: &D, element: &D::Element) -> Result<(), DomError> {
    dom.set_attribute(element, "hidden", "")
}
