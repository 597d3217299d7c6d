//! Test doubles for the switcher's host seams.

#![allow(dead_code)]

pub mod dom;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;

use version_switcher::{DomError, FetchError, ManifestFetcher, Navigator};

pub use dom::MemoryDom;

/// Fetcher returning a canned response and recording requested locations.
///
/// Clones share the request log, so a test can keep one while the switcher
/// owns the other.
#[derive(Clone)]
pub struct MockFetcher {
    response: Result<String, FetchError>,
    requests: Rc<RefCell<Vec<String>>>,
}

impl MockFetcher {
    pub fn ok(body: &str) -> Self {
        Self::with_response(Ok(body.to_string()))
    }

    pub fn status(status: u16) -> Self {
        Self::with_response(Err(FetchError::Status {
            status,
            location: "../../versions.json".into(),
        }))
    }

    pub fn network_error() -> Self {
        Self::with_response(Err(FetchError::Network("connection refused".into())))
    }

    fn with_response(response: Result<String, FetchError>) -> Self {
        Self {
            response,
            requests: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl ManifestFetcher for MockFetcher {
    async fn fetch_manifest(&self, location: &str) -> Result<String, FetchError> {
        self.requests.borrow_mut().push(location.to_string());
        self.response.clone()
    }
}

/// Navigator recording every target instead of leaving the page.
#[derive(Default)]
pub struct RecordingNavigator {
    visited: RefCell<Vec<String>>,
    fail: Cell<bool>,
}

impl RecordingNavigator {
    pub fn failing() -> Self {
        let navigator = Self::default();
        navigator.fail.set(true);
        navigator
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, url: &str) -> Result<(), DomError> {
        self.visited.borrow_mut().push(url.to_string());
        if self.fail.get() {
            return Err(DomError::Operation("navigation blocked".into()));
        }
        Ok(())
    }
}
