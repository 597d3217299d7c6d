use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Manifest is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Manifest must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Manifest request to {location} returned status {status}")]
    Status { status: u16, location: String },

    #[error("Unreadable response body: {0}")]
    Body(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomError {
    #[error("Failed to create <{0}> element")]
    CreateElement(String),

    #[error("DOM operation failed: {0}")]
    Operation(String),
}

#[derive(Debug, Error)]
pub enum SwitcherError {
    #[error("Marker segment {marker:?} not found in {url:?}")]
    Unresolved { url: String, marker: String },

    #[error("Document has no base URI")]
    NoBaseUri,

    #[error("Mount point {0:?} not found")]
    MountNotFound(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Dom(#[from] DomError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
