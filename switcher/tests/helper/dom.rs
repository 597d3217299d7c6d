//! In-memory DOM used by the integration tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use version_switcher::{ChangeHandler, Dom, DomError};

#[derive(Debug, Default)]
struct Node {
    tag: String,
    attrs: Vec<(String, String)>,
    text: String,
    children: Vec<usize>,
}

impl Node {
    fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn matches(&self, selector: &str) -> bool {
        if let Some(class) = selector.strip_prefix('.') {
            self.attr("class")
                .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
        } else if let Some(id) = selector.strip_prefix('#') {
            self.attr("id") == Some(id)
        } else {
            self.tag == selector
        }
    }
}

#[derive(Default)]
struct Inner {
    base_uri: Option<String>,
    nodes: RefCell<Vec<Node>>,
    listeners: RefCell<HashMap<usize, Vec<ChangeHandler>>>,
    mutations: Cell<usize>,
    appends: Cell<usize>,
    append_limit: Cell<Option<usize>>,
    failing_attribute: RefCell<Option<String>>,
}

/// Cloneable handle to a tiny element tree rooted at a `<body>` (id 0).
#[derive(Clone)]
pub struct MemoryDom {
    inner: Rc<Inner>,
}

impl MemoryDom {
    /// Empty page at `url`.
    pub fn new(url: &str) -> Self {
        Self::build(Some(url.to_string()))
    }

    /// Document without a base URI.
    pub fn without_base_uri() -> Self {
        Self::build(None)
    }

    fn build(base_uri: Option<String>) -> Self {
        let body = Node {
            tag: "body".into(),
            ..Default::default()
        };
        Self {
            inner: Rc::new(Inner {
                base_uri,
                nodes: RefCell::new(vec![body]),
                ..Default::default()
            }),
        }
    }

    /// Page at `url` with a `<div class="version">` mount point holding a placeholder.
    pub fn with_mount(url: &str) -> Self {
        let dom = Self::new(url);
        let mount = dom.insert("div", &[("class", "version")], "");
        let placeholder = dom.insert("span", &[], "loading");
        dom.inner.nodes.borrow_mut()[mount].children.push(placeholder);
        dom.inner.nodes.borrow_mut()[0].children.push(mount);
        dom.inner.mutations.set(0);
        dom
    }

    fn insert(&self, tag: &str, attrs: &[(&str, &str)], text: &str) -> usize {
        let mut nodes = self.inner.nodes.borrow_mut();
        nodes.push(Node {
            tag: tag.to_string(),
            attrs: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            text: text.to_string(),
            children: Vec::new(),
        });
        nodes.len() - 1
    }

    fn bump(&self) {
        self.inner.mutations.set(self.inner.mutations.get() + 1);
    }

    /// Make every `append_child` after the first `limit` calls fail.
    pub fn fail_appends_after(&self, limit: usize) {
        self.inner.append_limit.set(Some(self.inner.appends.get() + limit));
    }

    /// Make `set_attribute` fail for attribute `name`.
    pub fn fail_attribute(&self, name: &str) {
        *self.inner.failing_attribute.borrow_mut() = Some(name.to_string());
    }

    /// Number of mutating calls made through the `Dom` trait.
    pub fn mutations(&self) -> usize {
        self.inner.mutations.get()
    }

    pub fn find(&self, selector: &str) -> Option<usize> {
        self.query_selector(selector)
    }

    pub fn attr(&self, element: usize, name: &str) -> Option<String> {
        self.inner.nodes.borrow()[element]
            .attr(name)
            .map(str::to_string)
    }

    pub fn children(&self, element: usize) -> Vec<usize> {
        self.inner.nodes.borrow()[element].children.clone()
    }

    /// `(value, label, selected)` of every `<option>` under `select`.
    pub fn options(&self, select: usize) -> Vec<(String, String, bool)> {
        let nodes = self.inner.nodes.borrow();
        nodes[select]
            .children
            .iter()
            .map(|&id| &nodes[id])
            .filter(|node| node.tag == "option")
            .map(|node| {
                (
                    node.attr("value").unwrap_or_default().to_string(),
                    node.text.clone(),
                    node.attr("selected").is_some(),
                )
            })
            .collect()
    }

    /// Simulate the reader choosing the option at `index`.
    pub fn choose(&self, select: usize, index: usize) {
        let value = self
            .options(select)
            .get(index)
            .map(|(value, _, _)| value.clone())
            .unwrap_or_default();
        self.fire_change(select, &value);
    }

    /// Simulate a change event on a select whose value is `value`.
    pub fn fire_change(&self, select: usize, value: &str) {
        let listeners = self.inner.listeners.borrow();
        if let Some(handlers) = listeners.get(&select) {
            for handler in handlers {
                handler(value);
            }
        }
    }

    pub fn listener_count(&self, element: usize) -> usize {
        self.inner
            .listeners
            .borrow()
            .get(&element)
            .map_or(0, Vec::len)
    }

    fn walk(&self, root: usize, selector: &str) -> Option<usize> {
        let nodes = self.inner.nodes.borrow();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if id != root && nodes[id].matches(selector) {
                return Some(id);
            }
            stack.extend(nodes[id].children.iter().rev());
        }
        None
    }
}

impl Dom for MemoryDom {
    type Element = usize;

    fn base_uri(&self) -> Option<String> {
        self.inner.base_uri.clone()
    }

    fn query_selector(&self, selector: &str) -> Option<usize> {
        self.walk(0, selector)
    }

    fn create_element(&self, tag: &str) -> Result<usize, DomError> {
        if tag.is_empty() {
            return Err(DomError::CreateElement(tag.to_string()));
        }
        self.bump();
        Ok(self.insert(tag, &[], ""))
    }

    fn set_attribute(&self, element: &usize, name: &str, value: &str) -> Result<(), DomError> {
        if self.inner.failing_attribute.borrow().as_deref() == Some(name) {
            return Err(DomError::Operation(format!("set {name} refused")));
        }
        self.bump();
        let mut nodes = self.inner.nodes.borrow_mut();
        let node = nodes
            .get_mut(*element)
            .ok_or_else(|| DomError::Operation(format!("no element {element}")))?;
        match node.attrs.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => node.attrs.push((name.to_string(), value.to_string())),
        }
        Ok(())
    }

    fn set_text(&self, element: &usize, text: &str) {
        self.bump();
        self.inner.nodes.borrow_mut()[*element].text = text.to_string();
    }

    fn clear_children(&self, element: &usize) {
        self.bump();
        self.inner.nodes.borrow_mut()[*element].children.clear();
    }

    fn append_child(&self, parent: &usize, child: &usize) -> Result<(), DomError> {
        let appends = self.inner.appends.get();
        if self.inner.append_limit.get().is_some_and(|limit| appends >= limit) {
            return Err(DomError::Operation("append refused".into()));
        }
        self.inner.appends.set(appends + 1);
        self.bump();
        let mut nodes = self.inner.nodes.borrow_mut();
        if *child >= nodes.len() {
            return Err(DomError::Operation(format!("no element {child}")));
        }
        nodes[*parent].children.push(*child);
        Ok(())
    }

    fn on_change(&self, element: &usize, handler: ChangeHandler) -> Result<(), DomError> {
        self.inner
            .listeners
            .borrow_mut()
            .entry(*element)
            .or_default()
            .push(handler);
        Ok(())
    }
}
