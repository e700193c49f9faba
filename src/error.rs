use thiserror::Error;
use wasm_bindgen::JsValue;

/// A browser API call that did not go through. The page keeps rendering
/// without the behaviour that needed it.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("no document on window")]
    NoDocument,
    #[error("failed to register `{event}` listener: {message}")]
    Listener { event: &'static str, message: String },
    #[error("failed to create intersection observer: {0}")]
    Observer(String),
    #[error("failed to update document style: {0}")]
    Style(String),
}

impl DomError {
    pub fn listener(event: &'static str, err: JsValue) -> Self {
        DomError::Listener { event, message: js_message(&err) }
    }
}

pub fn js_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("gallery has no images")]
    EmptyGallery,
    #[error("nav link `{0}` points at a section that is not observed")]
    UnknownTarget(String),
}
