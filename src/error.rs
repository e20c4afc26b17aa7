use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures talking to the browser. None of these are fatal for the page;
/// callers log them and carry on.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PageError {
    #[error("no browser window available")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("section #{0} is not on the page")]
    MissingSection(&'static str),

    #[error("unknown in-page anchor: {0}")]
    UnknownAnchor(String),

    #[error("browser rejected the call: {0}")]
    Js(String),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        PageError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
