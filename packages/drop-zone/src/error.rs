use wasm_bindgen::{JsCast, JsValue};

pub type Result<T, E = DropZoneError> = std::result::Result<T, E>;

/// An error raised while wiring up the drop zone or while handling a selection.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DropZoneError {
    /// There is no global `window`, e.g. when running inside a worker.
    #[error("No window is available")]
    NoWindow,

    /// The window has no document attached.
    #[error("The window has no document")]
    NoDocument,

    /// No element with this id exists in the document.
    #[error("No element with id `{id}` was found")]
    MissingElement { id: String },

    /// The element exists but does not implement the interface the controller needs.
    #[error("Element `{id}` is not a {expected}")]
    WrongElementType { id: String, expected: &'static str },

    /// The browser refused to register an event listener.
    #[error("Failed to register event listener: {0}")]
    Listener(String),

    /// The options object passed from JS could not be deserialized.
    #[error("Invalid drop zone options: {0}")]
    InvalidOptions(String),

    /// A drop or picker change carried no files.
    #[error("No file selected")]
    EmptySelection,
}

impl From<DropZoneError> for JsValue {
    fn from(err: DropZoneError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Extract a readable message out of a thrown JS value.
pub(crate) fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }

    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
